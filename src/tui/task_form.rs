//! New-task form handling for the terminal user interface.
//!
//! This module provides the `TaskForm` structure for creating tasks in the
//! TUI, including field ordering and selector cycling for priority and
//! category.

use chrono::NaiveDate;

use crate::category::CategoryRegistry;
use crate::fields::Priority;
use crate::task::TaskDraft;
use crate::tui::input::InputField;

/// Global order constants for the form fields.
pub const TITLE_FIELD: usize = 0;
pub const DUE_FIELD: usize = 1;
pub const TIME_FIELD: usize = 2;
pub const PRIORITY_FIELD: usize = 3;
pub const CATEGORY_FIELD: usize = 4;

const FIELD_COUNT: usize = 5;

/// Form state for creating a task.
pub struct TaskForm {
    pub title: InputField,
    pub due: InputField,
    pub time: InputField,
    pub priority: usize,
    pub category: usize,
    pub current_field: usize,
    pub priorities: Vec<Priority>,
    pub categories: Vec<String>,
    pub error: Option<String>,
}

impl TaskForm {
    /// Fresh form: due date defaults to the focus date, priority to Medium,
    /// category to the first registered label.
    pub fn new(focus: NaiveDate, registry: &CategoryRegistry) -> Self {
        let mut categories = registry.names().to_vec();
        if categories.is_empty() {
            // The selector needs at least one option even if every
            // registered category was deleted.
            categories.push("Personal".to_string());
        }
        let mut form = TaskForm {
            title: InputField::new(),
            due: InputField::with_value(&focus.to_string()),
            time: InputField::new(),
            priority: 1,
            category: 0,
            current_field: TITLE_FIELD,
            priorities: vec![Priority::High, Priority::Medium, Priority::Low],
            categories,
            error: None,
        };
        form.update_active_field();
        form
    }

    /// Move to the next field in the form.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % FIELD_COUNT;
        self.update_active_field();
    }

    /// Move to the previous field in the form.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            FIELD_COUNT - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    /// Update which text field is active for editing.
    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_FIELD;
        self.due.active = self.current_field == DUE_FIELD;
        self.time.active = self.current_field == TIME_FIELD;
    }

    /// Handle character input for the currently active field.
    pub fn handle_char(&mut self, c: char) {
        match self.current_field {
            TITLE_FIELD => self.title.insert_char(c),
            DUE_FIELD => self.due.insert_char(c),
            TIME_FIELD => self.time.insert_char(c),
            _ => {}
        }
    }

    /// Handle backspace for the currently active field.
    pub fn handle_backspace(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.backspace(),
            DUE_FIELD => self.due.backspace(),
            TIME_FIELD => self.time.backspace(),
            _ => {}
        }
    }

    /// Handle left/right arrows: cursor movement in text fields,
    /// wrap-around cycling in the priority and category selectors.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TITLE_FIELD => {
                if right {
                    self.title.move_right()
                } else {
                    self.title.move_left()
                }
            }
            DUE_FIELD => {
                if right {
                    self.due.move_right()
                } else {
                    self.due.move_left()
                }
            }
            TIME_FIELD => {
                if right {
                    self.time.move_right()
                } else {
                    self.time.move_left()
                }
            }
            PRIORITY_FIELD => {
                if right {
                    self.priority = (self.priority + 1) % self.priorities.len();
                } else {
                    self.priority = if self.priority == 0 {
                        self.priorities.len() - 1
                    } else {
                        self.priority - 1
                    };
                }
            }
            CATEGORY_FIELD => {
                if right {
                    self.category = (self.category + 1) % self.categories.len();
                } else {
                    self.category = if self.category == 0 {
                        self.categories.len() - 1
                    } else {
                        self.category - 1
                    };
                }
            }
            _ => {}
        }
    }

    /// Snapshot the form as a draft for validation.
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.value.clone(),
            due: self.due.value.clone(),
            time: self.time.value.clone(),
            priority: self.priorities[self.priority],
            category: self.categories[self.category].clone(),
        }
    }
}
