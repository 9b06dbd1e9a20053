//! Task data structure and validated construction.
//!
//! This module defines the single `Task` entity for the planner along with
//! `TaskDraft`, the unvalidated form input it is built from. All date and
//! time strings are parsed here, at the boundary, so the rest of the
//! application matches tasks by calendar-date value rather than by string.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::fields::{Priority, Status};

/// A single to-do item.
///
/// The id is assigned by the store and is stable for the session. The done
/// flag is the single source of truth for completion; [`Task::status`]
/// derives the displayed status from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub due: NaiveDate,
    pub time: Option<NaiveTime>,
    pub priority: Priority,
    pub done: bool,
    pub category: String,
}

impl Task {
    /// Completion status derived from the done flag.
    pub fn status(&self) -> Status {
        if self.done {
            Status::Done
        } else {
            Status::Pending
        }
    }
}

/// Why a draft could not be turned into a task.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("a title is required")]
    EmptyTitle,
    #[error("a due date is required")]
    EmptyDue,
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDue(String),
    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
}

/// Raw form input for a new task.
///
/// Dates and times arrive as the strings the user typed; [`TaskDraft::build`]
/// performs the required-field checks and parsing.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: String,
    pub due: String,
    pub time: String,
    pub priority: Priority,
    pub category: String,
}

impl TaskDraft {
    /// Validate the draft and produce a task with the given id.
    ///
    /// Title and due date are required. The time is optional but must parse
    /// as HH:MM when present.
    pub fn build(&self, id: u64) -> Result<Task, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let due_raw = self.due.trim();
        if due_raw.is_empty() {
            return Err(DraftError::EmptyDue);
        }
        let due = NaiveDate::parse_from_str(due_raw, "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDue(due_raw.to_string()))?;

        let time_raw = self.time.trim();
        let time = if time_raw.is_empty() {
            None
        } else {
            Some(
                NaiveTime::parse_from_str(time_raw, "%H:%M")
                    .map_err(|_| DraftError::InvalidTime(time_raw.to_string()))?,
            )
        };

        Ok(Task {
            id,
            title: title.to_string(),
            due,
            time,
            priority: self.priority,
            done: false,
            category: self.category.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn draft(title: &str, due: &str, time: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            due: due.to_string(),
            time: time.to_string(),
            priority: Priority::Medium,
            category: "Personal".to_string(),
        }
    }

    #[test]
    fn test_build_parses_date_and_time() {
        let task = draft("Dentist", "2024-03-05", "14:00").build(1).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.due, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(task.time.unwrap().hour(), 14);
        assert!(!task.done);
    }

    #[test]
    fn test_build_rejects_blank_title() {
        assert_eq!(draft("   ", "2024-03-05", "").build(1), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn test_build_rejects_missing_or_garbled_due() {
        assert_eq!(draft("Dentist", "", "").build(1), Err(DraftError::EmptyDue));
        assert_eq!(
            draft("Dentist", "05/03/2024", "").build(1),
            Err(DraftError::InvalidDue("05/03/2024".to_string()))
        );
    }

    #[test]
    fn test_build_rejects_garbled_time_but_allows_blank() {
        assert_eq!(
            draft("Dentist", "2024-03-05", "2pm").build(1),
            Err(DraftError::InvalidTime("2pm".to_string()))
        );
        let task = draft("Dentist", "2024-03-05", "  ").build(1).unwrap();
        assert_eq!(task.time, None);
    }

    #[test]
    fn test_status_follows_done_flag() {
        let mut task = draft("Dentist", "2024-03-05", "").build(1).unwrap();
        assert_eq!(task.status(), Status::Pending);
        task.done = true;
        assert_eq!(task.status(), Status::Done);
        task.done = false;
        assert_eq!(task.status(), Status::Pending);
    }
}
