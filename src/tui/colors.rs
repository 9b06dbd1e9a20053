//! Color constants for the terminal user interface.

use ratatui::style::Color;

// Priority accents shared by the board rows and calendar markers.

/// Used for High priority tasks
pub const HIGH_RED: Color = Color::Rgb(178, 34, 34);
/// Used for Medium priority tasks
pub const AMBER: Color = Color::Rgb(215, 175, 0);
/// Used for Low priority tasks
pub const SLATE: Color = Color::Rgb(110, 120, 140);
/// Header and chip accent
pub const TEAL: Color = Color::Rgb(0, 110, 110);
