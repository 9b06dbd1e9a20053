//! Enumerations for TUI state management.

/// Screen the terminal interface is currently showing.
#[derive(Clone, Copy, PartialEq)]
pub enum Screen {
    TaskBoard,
    NewTask,
    Calendar,
    AddCategory,
    DeleteCategory,
    Help,
}

/// Input mode for text entry fields.
#[derive(Clone, Copy, PartialEq)]
pub enum InputMode {
    None,
    Text,
}
