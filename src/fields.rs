//! Enumerations and field types for the planner.
//!
//! This module defines the small shared vocabulary types used across the
//! task board and calendar: task priority, derived completion status,
//! calendar view modes, and the sort keys the board supports.

use clap::ValueEnum;

/// Task importance, highest first.
///
/// Variant order doubles as sort order so that sorting ascending by
/// priority puts High at the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Completion status, always derived from a task's done flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Done,
}

/// Calendar view variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    Day,
    Week,
    Month,
}

/// Available sorting options for the task board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Due,
    Priority,
    Id,
}
