//! Calendar navigation and date helpers.
//!
//! The navigator keeps two independent cursors: the year-month the month
//! grid displays and the focus date the agenda and day/week views follow.
//! Stepping the displayed month never moves the focus date; the agenda
//! always reflects the focus date regardless of which month is shown.

use chrono::{Datelike, Duration, NaiveDate};

/// Cursor state for the calendar screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarNavigator {
    year: i32,
    month: u32,
    focus: NaiveDate,
}

impl CalendarNavigator {
    /// Start with both cursors on the given date.
    pub fn new(focus: NaiveDate) -> Self {
        CalendarNavigator {
            year: focus.year(),
            month: focus.month(),
            focus,
        }
    }

    /// Year of the displayed month.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Displayed month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The date the agenda and day/week views center on.
    pub fn focus_date(&self) -> NaiveDate {
        self.focus
    }

    /// Step the displayed month forward or backward, rolling the year over
    /// at the December/January boundary. The focus date stays put.
    pub fn step_month(&mut self, delta: i32) {
        let total = self.year * 12 + self.month as i32 - 1 + delta;
        self.year = total.div_euclid(12);
        self.month = (total.rem_euclid(12) + 1) as u32;
    }

    /// Step the displayed year. The focus date stays put.
    pub fn step_year(&mut self, delta: i32) {
        self.year += delta;
    }

    /// Move the focus date. The displayed month is not touched.
    pub fn set_focus_date(&mut self, date: NaiveDate) {
        self.focus = date;
    }

    /// Move the focus date by whole days.
    pub fn shift_focus(&mut self, days: i64) {
        self.set_focus_date(self.focus + Duration::days(days));
    }

    /// Heading for the month grid, e.g. "March 2024".
    pub fn month_label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    // Last day of this month is the day before the first of the next.
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// Sunday-indexed weekday column (0-6) of the first day of the month.
pub fn first_weekday_column(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Monday of the ISO week containing `date`.
pub fn monday_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_step_month_rolls_over_year() {
        let mut nav = CalendarNavigator::new(date(2024, 12, 15));
        nav.step_month(1);
        assert_eq!((nav.year(), nav.month()), (2025, 1));
        nav.step_month(-1);
        assert_eq!((nav.year(), nav.month()), (2024, 12));
        nav.step_month(-13);
        assert_eq!((nav.year(), nav.month()), (2023, 11));
    }

    #[test]
    fn test_stepping_leaves_focus_untouched() {
        let mut nav = CalendarNavigator::new(date(2024, 3, 5));
        nav.step_month(2);
        nav.step_year(-1);
        assert_eq!(nav.focus_date(), date(2024, 3, 5));
        assert_eq!((nav.year(), nav.month()), (2023, 5));
    }

    #[test]
    fn test_set_focus_leaves_month_untouched() {
        let mut nav = CalendarNavigator::new(date(2024, 3, 5));
        nav.set_focus_date(date(2024, 7, 1));
        assert_eq!((nav.year(), nav.month()), (2024, 3));
        nav.shift_focus(-1);
        assert_eq!(nav.focus_date(), date(2024, 6, 30));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_first_weekday_column_is_sunday_indexed() {
        // 2024-03-01 is a Friday, 2023-10-01 a Sunday, 2024-01-01 a Monday.
        assert_eq!(first_weekday_column(2024, 3), 5);
        assert_eq!(first_weekday_column(2023, 10), 0);
        assert_eq!(first_weekday_column(2024, 1), 1);
    }

    #[test]
    fn test_monday_of_week() {
        assert_eq!(monday_of_week(date(2024, 3, 5)), date(2024, 3, 4));
        assert_eq!(monday_of_week(date(2024, 3, 4)), date(2024, 3, 4));
        assert_eq!(monday_of_week(date(2024, 3, 10)), date(2024, 3, 4));
    }

    #[test]
    fn test_month_label() {
        let nav = CalendarNavigator::new(date(2024, 3, 5));
        assert_eq!(nav.month_label(), "March 2024");
    }
}
