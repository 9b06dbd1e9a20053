//! In-memory task storage and display helpers.
//!
//! This module provides the `TaskStore`, the single ordered collection of
//! tasks for the session, along with formatting utilities shared by the CLI
//! boundary and the TUI. Tasks are appended with store-assigned ids and are
//! never removed; all date matching is by calendar-date value.

use chrono::{NaiveDate, NaiveTime};
use log::debug;

use crate::category::CategoryFilter;
use crate::fields::{Priority, SortKey, Status};
use crate::task::{DraftError, Task, TaskDraft};

/// Ordered in-memory collection of tasks.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Generate the next available task id.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Validate a draft and append the resulting task, returning its id.
    pub fn add(&mut self, draft: &TaskDraft) -> Result<u64, DraftError> {
        let task = draft.build(self.next_id())?;
        let id = task.id;
        debug!("added task #{id} '{}' due {}", task.title, task.due);
        self.tasks.push(task);
        Ok(id)
    }

    /// Get a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by id.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Flip a task's done flag, returning the new value.
    pub fn toggle_done(&mut self, id: u64) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.done = !task.done;
        debug!("task #{id} done = {}", task.done);
        Some(task.done)
    }

    /// Tasks due on the given date, in insertion order.
    pub fn on_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.due == date).collect()
    }

    /// Tasks passing the category filter, in insertion order.
    pub fn in_category(&self, filter: &CategoryFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(&t.category))
            .collect()
    }
}

/// Sort task references for the board, id as the stable tiebreak.
pub fn sort_for_table(tasks: &mut [&Task], sort: SortKey) {
    match sort {
        SortKey::Due => tasks.sort_by_key(|t| (t.due, t.id)),
        SortKey::Priority => tasks.sort_by_key(|t| (t.priority, t.id)),
        SortKey::Id => tasks.sort_by_key(|t| t.id),
    }
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

/// Format a derived status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Pending => "Pending",
        Status::Done => "Done",
    }
}

/// Format a task time for display, "-" when unset.
pub fn format_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => "-".into(),
    }
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: NaiveDate, today: NaiveDate) -> String {
    let delta = due - today;
    if delta.num_days() == 0 {
        "today".into()
    } else if delta.num_days() == 1 {
        "tomorrow".into()
    } else if delta.num_days() > 1 {
        format!("in {}d", delta.num_days())
    } else {
        format!("{}d late", -delta.num_days())
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, due: &str, category: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            due: due.to_string(),
            time: String::new(),
            priority: Priority::Medium,
            category: category.to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_assigns_sequential_ids_in_order() {
        let mut store = TaskStore::new();
        let a = store.add(&draft("First", "2024-03-05", "Work")).unwrap();
        let b = store.add(&draft("Second", "2024-03-06", "Work")).unwrap();
        assert_eq!((a, b), (1, 2));
        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn test_invalid_draft_adds_nothing() {
        let mut store = TaskStore::new();
        assert!(store.add(&draft("", "2024-03-05", "Work")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_on_date_matches_by_calendar_date() {
        let mut store = TaskStore::new();
        let id = store.add(&draft("Dentist", "2024-03-05", "Personal")).unwrap();
        store.add(&draft("Other", "2024-03-06", "Personal")).unwrap();
        let hits = store.on_date(date(2024, 3, 5));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id);
    }

    #[test]
    fn test_toggle_done_flips_status() {
        let mut store = TaskStore::new();
        let id = store.add(&draft("Dentist", "2024-03-05", "Personal")).unwrap();
        assert_eq!(store.toggle_done(id), Some(true));
        assert_eq!(store.get(id).unwrap().status(), Status::Done);
        assert_eq!(store.toggle_done(id), Some(false));
        assert_eq!(store.get(id).unwrap().status(), Status::Pending);
        assert_eq!(store.toggle_done(99), None);
    }

    #[test]
    fn test_in_category() {
        let mut store = TaskStore::new();
        store.add(&draft("A", "2024-03-05", "Work")).unwrap();
        store.add(&draft("B", "2024-03-05", "Personal")).unwrap();
        let work = store.in_category(&CategoryFilter::Category("Work".into()));
        assert_eq!(work.len(), 1);
        assert_eq!(work[0].title, "A");
        assert_eq!(store.in_category(&CategoryFilter::All).len(), 2);
    }

    #[test]
    fn test_sort_for_table() {
        let mut store = TaskStore::new();
        store.add(&draft("Late", "2024-03-09", "Work")).unwrap();
        let mut high = draft("Urgent", "2024-03-07", "Work");
        high.priority = Priority::High;
        store.add(&high).unwrap();

        let mut by_due: Vec<&Task> = store.tasks().iter().collect();
        sort_for_table(&mut by_due, SortKey::Due);
        assert_eq!(by_due[0].title, "Urgent");

        let mut by_priority: Vec<&Task> = store.tasks().iter().collect();
        sort_for_table(&mut by_priority, SortKey::Priority);
        assert_eq!(by_priority[0].title, "Urgent");

        let mut by_id: Vec<&Task> = store.tasks().iter().collect();
        sort_for_table(&mut by_id, SortKey::Id);
        assert_eq!(by_id[0].title, "Late");
    }

    #[test]
    fn test_format_due_relative() {
        let today = date(2024, 3, 5);
        assert_eq!(format_due_relative(today, today), "today");
        assert_eq!(format_due_relative(date(2024, 3, 6), today), "tomorrow");
        assert_eq!(format_due_relative(date(2024, 3, 8), today), "in 3d");
        assert_eq!(format_due_relative(date(2024, 3, 3), today), "2d late");
    }
}
