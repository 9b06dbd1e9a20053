//! Application state and mutations.
//!
//! `Planner` owns every piece of mutable session state: the task store, the
//! category registry, the calendar navigator, and the board's filter, sort,
//! and view-mode settings. The presentation layer mutates state only through
//! these methods and re-renders everything afterwards; there is no partial
//! invalidation.

use chrono::NaiveDate;
use log::debug;

use crate::calendar::CalendarNavigator;
use crate::category::{CategoryFilter, CategoryRegistry};
use crate::fields::{SortKey, ViewMode};
use crate::store::{sort_for_table, TaskStore};
use crate::task::{DraftError, Task, TaskDraft};

/// All session state for the planner.
pub struct Planner {
    store: TaskStore,
    categories: CategoryRegistry,
    navigator: CalendarNavigator,
    view_mode: ViewMode,
    filter: CategoryFilter,
    sort: SortKey,
}

impl Planner {
    /// Fresh planner with default categories, focused on the given date.
    pub fn new(focus: NaiveDate) -> Self {
        Planner {
            store: TaskStore::new(),
            categories: CategoryRegistry::with_defaults(),
            navigator: CalendarNavigator::new(focus),
            view_mode: ViewMode::Month,
            filter: CategoryFilter::All,
            sort: SortKey::Id,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn navigator(&self) -> &CalendarNavigator {
        &self.navigator
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    /// Validate and add a task, registering its category if unseen.
    ///
    /// Mirrors the creation form: typing a brand-new category while saving a
    /// task makes that category available for filtering from then on.
    pub fn add_task(&mut self, draft: &TaskDraft) -> Result<u64, DraftError> {
        let id = self.store.add(draft)?;
        if let Some(task) = self.store.get(id) {
            let category = task.category.clone();
            if self.categories.add(&category) {
                debug!("registered new category '{category}'");
            }
        }
        Ok(id)
    }

    /// Flip a task's done flag, returning the new value.
    pub fn toggle_done(&mut self, id: u64) -> Option<bool> {
        self.store.toggle_done(id)
    }

    /// Register a category label.
    pub fn add_category(&mut self, label: &str) -> bool {
        self.categories.add(label)
    }

    /// Remove a category; if it was the active filter, fall back to `All`.
    pub fn remove_category(&mut self, label: &str) -> bool {
        let removed = self.categories.remove(label);
        if removed && self.filter.label() == label {
            debug!("active filter '{label}' removed, resetting to All");
            self.filter = CategoryFilter::All;
        }
        removed
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn step_month(&mut self, delta: i32) {
        self.navigator.step_month(delta);
    }

    pub fn step_year(&mut self, delta: i32) {
        self.navigator.step_year(delta);
    }

    pub fn set_focus_date(&mut self, date: NaiveDate) {
        self.navigator.set_focus_date(date);
    }

    pub fn shift_focus(&mut self, days: i64) {
        self.navigator.shift_focus(days);
    }

    /// Tasks for the board: the active category filter applied, then the
    /// active sort key with id as tiebreak.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let mut tasks = self.store.in_category(&self.filter);
        sort_for_table(&mut tasks, self.sort);
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::views::agenda_lines;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn planner() -> Planner {
        Planner::new(date(2024, 3, 1))
    }

    fn draft(title: &str, due: &str, category: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            due: due.to_string(),
            time: String::new(),
            priority: Priority::Medium,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_add_task_registers_unseen_category() {
        let mut planner = planner();
        planner.add_task(&draft("Dentist", "2024-03-05", "Health")).unwrap();
        assert!(planner.categories().contains("Health"));
        // A second task in the same category does not duplicate it.
        planner.add_task(&draft("Checkup", "2024-04-02", "Health")).unwrap();
        let count = planner.categories().names().iter().filter(|n| *n == "Health").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_remove_active_filter_category_resets_to_all() {
        let mut planner = planner();
        planner.set_filter(CategoryFilter::Category("Work".into()));
        assert!(planner.remove_category("Work"));
        assert_eq!(planner.filter(), &CategoryFilter::All);
    }

    #[test]
    fn test_remove_other_category_keeps_filter() {
        let mut planner = planner();
        planner.set_filter(CategoryFilter::Category("Work".into()));
        assert!(planner.remove_category("Errands"));
        assert_eq!(planner.filter(), &CategoryFilter::Category("Work".into()));
    }

    #[test]
    fn test_visible_tasks_apply_filter_and_sort() {
        let mut planner = planner();
        planner.add_task(&draft("Report", "2024-03-09", "Work")).unwrap();
        planner.add_task(&draft("Groceries", "2024-03-04", "Errands")).unwrap();
        planner.add_task(&draft("Standup", "2024-03-02", "Work")).unwrap();

        planner.set_filter(CategoryFilter::Category("Work".into()));
        planner.set_sort(SortKey::Due);
        let titles: Vec<&str> = planner.visible_tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Standup", "Report"]);

        planner.set_filter(CategoryFilter::All);
        assert_eq!(planner.visible_tasks().len(), 3);
    }

    #[test]
    fn test_agenda_follows_focus_date_not_displayed_month() {
        let mut planner = planner();
        planner.add_task(&draft("Dentist", "2024-03-05", "Personal")).unwrap();
        planner.set_focus_date(date(2024, 3, 5));
        // Paging the month grid away must not change the agenda.
        planner.step_month(3);
        planner.step_year(1);
        assert_eq!(agenda_lines(planner.store(), planner.navigator().focus_date()), ["- Dentist"]);
    }

    #[test]
    fn test_toggle_done_round_trip() {
        let mut planner = planner();
        let id = planner.add_task(&draft("Dentist", "2024-03-05", "Personal")).unwrap();
        assert_eq!(planner.toggle_done(id), Some(true));
        assert_eq!(planner.toggle_done(id), Some(false));
    }
}
