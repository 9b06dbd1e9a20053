//! Day, week, and month view construction.
//!
//! Each renderer here is a pure function of the task store and the
//! navigator's cursors, producing plain comparable data for the presentation
//! layer to draw. Views are rebuilt from scratch on every refresh; nothing
//! is cached, so rendering twice with unchanged state yields identical
//! output.

use chrono::{Duration, NaiveDate, Timelike};

use crate::calendar::{days_in_month, first_weekday_column, monday_of_week, month_name};
use crate::store::TaskStore;
use crate::task::Task;

/// Slim task reference carried inside view cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

impl TaskEntry {
    fn from_task(task: &Task) -> Self {
        TaskEntry {
            id: task.id,
            title: task.title.clone(),
            done: task.done,
        }
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub task_count: usize,
}

/// Month grid: a heading, the blank lead-in columns before day 1, and one
/// cell per day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

/// Build the month grid for the given year-month.
///
/// `leading_blanks` is the Sunday-indexed weekday of day 1 and tells the
/// renderer which column the month starts in. A cell with a non-zero task
/// count carries the density marker.
pub fn month_view(store: &TaskStore, year: i32, month: u32) -> MonthView {
    let mut cells = Vec::new();
    for day in 1..=days_in_month(year, month) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            cells.push(DayCell {
                date,
                day,
                task_count: store.on_date(date).len(),
            });
        }
    }
    MonthView {
        year,
        month,
        label: format!("{} {}", month_name(month), year),
        leading_blanks: first_weekday_column(year, month),
        cells,
    }
}

/// One day box of the week strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub label: String,
    pub tasks: Vec<TaskEntry>,
}

/// Seven day boxes spanning Monday through Sunday of the focus date's ISO
/// week, each listing that day's tasks in insertion order.
pub fn week_view(store: &TaskStore, focus: NaiveDate) -> Vec<WeekDay> {
    let monday = monday_of_week(focus);
    (0..7)
        .map(|offset| {
            let date = monday + Duration::days(offset);
            WeekDay {
                date,
                label: format!("{} - {}", date.format("%A"), date),
                tasks: store
                    .on_date(date)
                    .into_iter()
                    .map(TaskEntry::from_task)
                    .collect(),
            }
        })
        .collect()
}

/// One hourly slot of the day schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    pub hour: u32,
    pub label: String,
    pub tasks: Vec<TaskEntry>,
}

/// Day schedule: 24 hourly slots plus the day's tasks with no set time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub date: NaiveDate,
    pub slots: Vec<HourSlot>,
    pub unscheduled: Vec<TaskEntry>,
}

/// Build the 24-hour schedule (00:00-23:00) for the given date.
///
/// A task lands in a slot via its structured time field; tasks due that day
/// without a time are listed as unscheduled rather than dropped.
pub fn day_view(store: &TaskStore, date: NaiveDate) -> DayView {
    let day_tasks = store.on_date(date);
    let slots = (0..24)
        .map(|hour| HourSlot {
            hour,
            label: format!("{hour:02}:00"),
            tasks: day_tasks
                .iter()
                .filter(|t| t.time.map(|tm| tm.hour()) == Some(hour))
                .map(|t| TaskEntry::from_task(t))
                .collect(),
        })
        .collect();
    let unscheduled = day_tasks
        .iter()
        .filter(|t| t.time.is_none())
        .map(|t| TaskEntry::from_task(t))
        .collect();
    DayView {
        date,
        slots,
        unscheduled,
    }
}

/// Agenda listing for the focus date: one "- title" line per task due that
/// day, in insertion order.
pub fn agenda_lines(store: &TaskStore, date: NaiveDate) -> Vec<String> {
    store
        .on_date(date)
        .iter()
        .map(|t| format!("- {}", t.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::task::TaskDraft;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(store: &mut TaskStore, title: &str, due: &str, time: &str) -> u64 {
        store
            .add(&TaskDraft {
                title: title.to_string(),
                due: due.to_string(),
                time: time.to_string(),
                priority: Priority::Medium,
                category: "Personal".to_string(),
            })
            .unwrap()
    }

    #[test]
    fn test_month_view_cell_count_matches_month_length() {
        let store = TaskStore::new();
        assert_eq!(month_view(&store, 2024, 2).cells.len(), 29);
        assert_eq!(month_view(&store, 2023, 2).cells.len(), 28);
        assert_eq!(month_view(&store, 2024, 3).cells.len(), 31);
    }

    #[test]
    fn test_month_view_starting_column_is_weekday_mod_7() {
        let store = TaskStore::new();
        // 2024-03-01 is a Friday, 2023-10-01 a Sunday.
        assert_eq!(month_view(&store, 2024, 3).leading_blanks, 5);
        assert_eq!(month_view(&store, 2023, 10).leading_blanks, 0);
    }

    #[test]
    fn test_month_view_marks_days_with_tasks() {
        let mut store = TaskStore::new();
        add(&mut store, "Dentist", "2024-03-05", "");
        add(&mut store, "Call back", "2024-03-05", "");
        let view = month_view(&store, 2024, 3);
        assert_eq!(view.cells[4].task_count, 2);
        assert_eq!(view.cells[5].task_count, 0);
        assert_eq!(view.label, "March 2024");
    }

    #[test]
    fn test_month_view_is_idempotent() {
        let mut store = TaskStore::new();
        add(&mut store, "Dentist", "2024-03-05", "");
        assert_eq!(month_view(&store, 2024, 3), month_view(&store, 2024, 3));
    }

    #[test]
    fn test_week_view_spans_monday_through_sunday() {
        let store = TaskStore::new();
        // 2024-03-05 is a Tuesday.
        let week = week_view(&store, date(2024, 3, 5));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date(2024, 3, 4));
        assert_eq!(week[6].date, date(2024, 3, 10));
        assert_eq!(week[0].date.weekday(), Weekday::Mon);
        assert_eq!(week[6].date.weekday(), Weekday::Sun);
        for pair in week.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    #[test]
    fn test_week_view_lists_tasks_on_their_day() {
        let mut store = TaskStore::new();
        let id = add(&mut store, "Dentist", "2024-03-05", "");
        let week = week_view(&store, date(2024, 3, 7));
        assert_eq!(week[1].tasks.len(), 1);
        assert_eq!(week[1].tasks[0].id, id);
        assert!(week[0].tasks.is_empty());
    }

    #[test]
    fn test_day_view_slots_by_structured_time() {
        let mut store = TaskStore::new();
        add(&mut store, "Meeting", "2024-03-05", "14:00");
        add(&mut store, "14 items to buy", "2024-03-05", "");
        add(&mut store, "Elsewhere", "2024-03-06", "14:00");

        let view = day_view(&store, date(2024, 3, 5));
        assert_eq!(view.slots.len(), 24);
        assert_eq!(view.slots[14].label, "14:00");
        assert_eq!(view.slots[14].tasks.len(), 1);
        assert_eq!(view.slots[14].tasks[0].title, "Meeting");
        // A "14" in the title no longer slots a task; it is just unscheduled.
        assert_eq!(view.unscheduled.len(), 1);
        assert_eq!(view.unscheduled[0].title, "14 items to buy");
    }

    #[test]
    fn test_agenda_scenario() {
        let mut store = TaskStore::new();
        add(&mut store, "Dentist", "2024-03-05", "");
        assert_eq!(agenda_lines(&store, date(2024, 3, 5)), ["- Dentist"]);
        assert!(agenda_lines(&store, date(2024, 3, 6)).is_empty());
    }

    #[test]
    fn test_agenda_preserves_insertion_order() {
        let mut store = TaskStore::new();
        add(&mut store, "Second errand", "2024-03-05", "16:00");
        add(&mut store, "Another", "2024-03-05", "09:00");
        assert_eq!(
            agenda_lines(&store, date(2024, 3, 5)),
            ["- Second errand", "- Another"]
        );
    }
}
