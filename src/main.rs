//! # Daily Planner
//!
//! A single-user to-do list and calendar for the terminal.
//!
//! ## Key Features
//!
//! - **Task Board**: sortable table of tasks with due date, time, priority,
//!   category, and a done checkmark with strikethrough styling
//! - **Category Chips**: clickable-style filter shortcuts plus add/delete
//!   category dialogs; deleting the active filter falls back to "All"
//! - **Calendar**: day, week, and month views over the same task list, with
//!   a per-day agenda pane that always follows the focus date
//! - **Validated Creation Form**: title and due date are required; dates and
//!   times are parsed once at the boundary so matching is by calendar value
//!
//! ## Quick Start
//!
//! ```bash
//! # Open on today's month view
//! planner
//!
//! # Open the week view focused on a specific date
//! planner --view week --date 2024-03-05
//!
//! # Seed extra categories for the session
//! planner --category Gym --category Reading
//! ```
//!
//! Everything is kept in memory for the session; closing the planner
//! discards it. Press `h` inside the app for the key map.

use chrono::{Local, NaiveDate};
use clap::Parser;
use log::debug;

pub mod calendar;
pub mod category;
pub mod cli;
pub mod fields;
pub mod state;
pub mod store;
pub mod task;
pub mod views;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use state::Planner;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let focus = match cli.date.as_deref() {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                eprintln!("Invalid --date '{raw}', expected YYYY-MM-DD");
                std::process::exit(1);
            }
        },
        None => Local::now().date_naive(),
    };

    let mut planner = Planner::new(focus);
    planner.set_view_mode(cli.view);
    planner.set_sort(cli.sort);
    for label in &cli.categories {
        planner.add_category(label);
    }
    debug!("planner initialised, focus date {focus}");

    if let Err(e) = tui::run::run_planner(planner) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}
