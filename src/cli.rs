use clap::Parser;

use crate::fields::{SortKey, ViewMode};

/// Single-user daily planner TUI.
/// All state lives in memory for the session; nothing touches the disk.
#[derive(Parser)]
#[command(name = "planner", version, about = "Daily planner and to-do list TUI")]
pub struct Cli {
    /// Calendar view to open with.
    #[arg(long, value_enum, default_value_t = ViewMode::Month)]
    pub view: ViewMode,

    /// Initial focus date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Initial sort key for the task board.
    #[arg(long, value_enum, default_value_t = SortKey::Id)]
    pub sort: SortKey,

    /// Extra category labels to register at startup.
    #[arg(long = "category")]
    pub categories: Vec<String>,
}
