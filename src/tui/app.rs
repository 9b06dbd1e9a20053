//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which wires keyboard input to
//! `Planner` mutations and draws the screens: the task board, the new-task
//! form, the calendar, and the category dialogs. Every mutation is followed
//! by a full redraw; views are recomputed from state on each frame.

use std::io;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::category::CategoryFilter;
use crate::fields::{Priority, SortKey, ViewMode};
use crate::state::Planner;
use crate::store::{format_due_relative, format_priority, format_status, format_time, truncate};
use crate::tui::{
    colors::{AMBER, HIGH_RED, SLATE, TEAL},
    enums::{InputMode, Screen},
    input::InputField,
    task_form::TaskForm,
    utils::centered_rect,
};
use crate::views::{agenda_lines, day_view, month_view, week_view};

/// Main application state for the terminal user interface.
///
/// Owns the planner state plus per-screen UI state (table selection, form
/// contents, dialog input) and the status bar message.
pub struct App {
    planner: Planner,
    screen: Screen,
    board_state: TableState,
    visible_ids: Vec<u64>,
    form: TaskForm,
    input_mode: InputMode,
    status_message: String,
    dialog_input: InputField,
    delete_index: usize,
}

impl App {
    /// Create a new App around the given planner state.
    pub fn new(planner: Planner) -> Self {
        let form = TaskForm::new(planner.navigator().focus_date(), planner.categories());
        let mut app = App {
            planner,
            screen: Screen::TaskBoard,
            board_state: TableState::default(),
            visible_ids: Vec::new(),
            form,
            input_mode: InputMode::None,
            status_message: String::new(),
            dialog_input: InputField::new(),
            delete_index: 0,
        };
        app.update_visible();
        app
    }

    /// Recompute the board's visible task ids from the planner state,
    /// preserving the selection when possible.
    fn update_visible(&mut self) {
        let old_selected_id = self
            .board_state
            .selected()
            .and_then(|idx| self.visible_ids.get(idx))
            .copied();

        self.visible_ids = self.planner.visible_tasks().iter().map(|t| t.id).collect();

        if let Some(old_id) = old_selected_id {
            if let Some(new_idx) = self.visible_ids.iter().position(|&id| id == old_id) {
                self.board_state.select(Some(new_idx));
            } else {
                self.board_state.select(if self.visible_ids.is_empty() {
                    None
                } else {
                    Some(0)
                });
            }
        } else if !self.visible_ids.is_empty() && self.board_state.selected().is_none() {
            self.board_state.select(Some(0));
        } else if self.visible_ids.is_empty() {
            self.board_state.select(None);
        }
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Advance the category filter through All and every registered label.
    fn cycle_filter(&mut self) {
        let options = self.planner.categories().filter_options();
        let current = options
            .iter()
            .position(|o| o == self.planner.filter().label())
            .unwrap_or(0);
        let next = &options[(current + 1) % options.len()];
        self.planner.set_filter(CategoryFilter::from_label(next));
        self.update_visible();
        self.set_status_message(format!(
            "Filter: {} ({} tasks)",
            next,
            self.visible_ids.len()
        ));
    }

    /// Advance the board sort key Id -> Due -> Priority -> Id.
    fn cycle_sort(&mut self) {
        let next = match self.planner.sort() {
            SortKey::Id => SortKey::Due,
            SortKey::Due => SortKey::Priority,
            SortKey::Priority => SortKey::Id,
        };
        self.planner.set_sort(next);
        self.update_visible();
        self.set_status_message(format!("Sorted by {:?}", next));
    }

    /// Toggle done on the selected board row.
    fn toggle_selected(&mut self) {
        if let Some(selected) = self.board_state.selected() {
            if let Some(&task_id) = self.visible_ids.get(selected) {
                if let Some(done) = self.planner.toggle_done(task_id) {
                    self.update_visible();
                    self.set_status_message(format!(
                        "Task #{} marked {}",
                        task_id,
                        if done { "done" } else { "pending" }
                    ));
                }
            }
        }
    }

    /// Handle keyboard input on the task board.
    ///
    /// Returns true if the application should quit.
    fn handle_board_input(&mut self, key: KeyCode, modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up => {
                if let Some(selected) = self.board_state.selected() {
                    if selected > 0 {
                        self.board_state.select(Some(selected - 1));
                    }
                } else if !self.visible_ids.is_empty() {
                    self.board_state.select(Some(0));
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.board_state.selected() {
                    if selected + 1 < self.visible_ids.len() {
                        self.board_state.select(Some(selected + 1));
                    }
                } else if !self.visible_ids.is_empty() {
                    self.board_state.select(Some(0));
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('a') => {
                self.form = TaskForm::new(
                    self.planner.navigator().focus_date(),
                    self.planner.categories(),
                );
                self.screen = Screen::NewTask;
                self.input_mode = InputMode::Text;
            }
            KeyCode::Char('c') => {
                self.screen = Screen::Calendar;
            }
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('o') => self.cycle_sort(),
            KeyCode::Char('n') => {
                self.dialog_input.clear();
                self.screen = Screen::AddCategory;
                self.input_mode = InputMode::Text;
            }
            KeyCode::Char('x') => {
                if self.planner.categories().is_empty() {
                    self.set_status_message("No categories to delete".to_string());
                } else {
                    self.delete_index = 0;
                    self.screen = Screen::DeleteCategory;
                }
            }
            KeyCode::Char('h') => {
                self.screen = Screen::Help;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input in the new-task form.
    fn handle_form_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::TaskBoard;
                self.input_mode = InputMode::None;
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Left => self.form.handle_left_right(false),
            KeyCode::Right => self.form.handle_left_right(true),
            KeyCode::Backspace => self.form.handle_backspace(),
            KeyCode::Enter => {
                match self.planner.add_task(&self.form.to_draft()) {
                    Ok(id) => {
                        self.update_visible();
                        self.screen = Screen::TaskBoard;
                        self.input_mode = InputMode::None;
                        self.set_status_message(format!("Task #{} added", id));
                    }
                    Err(e) => {
                        // Keep the form open so the input can be fixed.
                        self.form.error = Some(e.to_string());
                    }
                }
            }
            KeyCode::Char(c) => self.form.handle_char(c),
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input on the calendar screen.
    fn handle_calendar_input(&mut self, key: KeyCode, _modifiers: KeyModifiers) -> io::Result<bool> {
        match key {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('q') => {
                self.screen = Screen::TaskBoard;
            }
            KeyCode::Char('d') => {
                self.planner.set_view_mode(ViewMode::Day);
                self.set_status_message("Day view".to_string());
            }
            KeyCode::Char('w') => {
                self.planner.set_view_mode(ViewMode::Week);
                self.set_status_message("Week view".to_string());
            }
            KeyCode::Char('m') => {
                self.planner.set_view_mode(ViewMode::Month);
                self.set_status_message("Month view".to_string());
            }
            KeyCode::Char('[') => self.planner.step_month(-1),
            KeyCode::Char(']') => self.planner.step_month(1),
            KeyCode::Char('{') => self.planner.step_year(-1),
            KeyCode::Char('}') => self.planner.step_year(1),
            KeyCode::Char('t') => {
                let today = Local::now().date_naive();
                self.planner.set_focus_date(today);
                self.set_status_message(format!("Focus date set to {}", today));
            }
            KeyCode::Left => self.planner.shift_focus(-1),
            KeyCode::Right => self.planner.shift_focus(1),
            KeyCode::Up => self.planner.shift_focus(-7),
            KeyCode::Down => self.planner.shift_focus(7),
            KeyCode::Char('h') => {
                self.screen = Screen::Help;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input in the add-category dialog.
    fn handle_add_category_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc => {
                self.screen = Screen::TaskBoard;
                self.input_mode = InputMode::None;
            }
            KeyCode::Enter => {
                let label = self.dialog_input.value.trim().to_string();
                if self.planner.add_category(&label) {
                    self.set_status_message(format!("Category '{}' added", label));
                } else {
                    // Blank, reserved, and duplicate labels are a silent no-op.
                    self.set_status_message("Category ignored (blank or duplicate)".to_string());
                }
                self.screen = Screen::TaskBoard;
                self.input_mode = InputMode::None;
            }
            KeyCode::Backspace => self.dialog_input.backspace(),
            KeyCode::Left => self.dialog_input.move_left(),
            KeyCode::Right => self.dialog_input.move_right(),
            KeyCode::Char(c) => self.dialog_input.insert_char(c),
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input in the delete-category dialog.
    fn handle_delete_category_input(&mut self, key: KeyCode) -> io::Result<bool> {
        let count = self.planner.categories().len();
        match key {
            KeyCode::Esc => {
                self.screen = Screen::TaskBoard;
            }
            KeyCode::Up => {
                if self.delete_index > 0 {
                    self.delete_index -= 1;
                }
            }
            KeyCode::Down => {
                if self.delete_index + 1 < count {
                    self.delete_index += 1;
                }
            }
            KeyCode::Enter => {
                let label = self
                    .planner
                    .categories()
                    .names()
                    .get(self.delete_index)
                    .cloned();
                if let Some(label) = label {
                    self.planner.remove_category(&label);
                    self.update_visible();
                    self.set_status_message(format!("Category '{}' deleted", label));
                }
                self.screen = Screen::TaskBoard;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input on the help screen.
    fn handle_help_input(&mut self, key: KeyCode) -> io::Result<bool> {
        match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('h') => {
                self.screen = Screen::TaskBoard;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Poll for input and dispatch to the active screen's handler.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.clear_status_message();

                let should_quit = match self.screen {
                    Screen::TaskBoard => self.handle_board_input(key.code, key.modifiers)?,
                    Screen::NewTask => self.handle_form_input(key.code, key.modifiers)?,
                    Screen::Calendar => self.handle_calendar_input(key.code, key.modifiers)?,
                    Screen::AddCategory => self.handle_add_category_input(key.code)?,
                    Screen::DeleteCategory => self.handle_delete_category_input(key.code)?,
                    Screen::Help => self.handle_help_input(key.code)?,
                };
                if should_quit {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Render the category chip strip, active filter highlighted.
    fn render_chips(&self, f: &mut Frame, area: Rect) {
        let active = self.planner.filter().label().to_string();
        let mut spans: Vec<Span> = Vec::new();
        for option in self.planner.categories().filter_options() {
            let style = if option == active {
                Style::default()
                    .bg(TEAL)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("[{}]", option), style));
            spans.push(Span::raw(" "));
        }
        let chips = Paragraph::new(Line::from(spans));
        f.render_widget(chips, area);
    }

    /// Render the task board: header, chip strip, and the task table.
    fn render_board(&mut self, f: &mut Frame, area: Rect) {
        let today = Local::now().date_naive();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let done = self
            .planner
            .store()
            .tasks()
            .iter()
            .filter(|t| t.done)
            .count();
        let context = format!(
            "Today: {}  Filter: {}  Sort: {:?}  Done: {}/{}",
            today,
            self.planner.filter().label(),
            self.planner.sort(),
            done,
            self.planner.store().len()
        );
        let header_text = vec![Line::from(vec![
            Span::styled("DAILY PLANNER", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                context,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ])];
        let header_block = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(header_block, chunks[0]);

        self.render_chips(f, chunks[1]);

        let block = Block::default().borders(Borders::ALL).title(format!(
            "Tasks ({}/{}) - Press 'h' for help",
            self.visible_ids.len(),
            self.planner.store().len()
        ));

        if self.visible_ids.is_empty() {
            let message = if self.planner.store().is_empty() {
                "No tasks yet - press 'a' to add one"
            } else {
                "No tasks in this category"
            };
            let placeholder = Paragraph::new(message)
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(placeholder, chunks[2]);
            return;
        }

        let header_cells = ["Done", "ID", "Task", "Due", "Time", "Priority", "Status", "Category"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().bg(TEAL).fg(Color::White))
            .height(1);

        let rows: Vec<Row> = self
            .visible_ids
            .iter()
            .filter_map(|&id| self.planner.store().get(id))
            .map(|task| {
                let style = if task.done {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    match task.priority {
                        Priority::High => {
                            Style::default().fg(HIGH_RED).add_modifier(Modifier::BOLD)
                        }
                        Priority::Medium => Style::default().fg(Color::White),
                        Priority::Low => Style::default().fg(SLATE),
                    }
                };

                Row::new(vec![
                    Cell::from(if task.done { " ✓" } else { "" }),
                    Cell::from(task.id.to_string()),
                    Cell::from(task.title.clone()),
                    Cell::from(format_due_relative(task.due, today)),
                    Cell::from(format_time(task.time)),
                    Cell::from(format_priority(task.priority)),
                    Cell::from(format_status(task.status())),
                    Cell::from(task.category.clone()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(4),  // Done
            Constraint::Length(4),  // ID
            Constraint::Min(20),    // Task
            Constraint::Length(10), // Due
            Constraint::Length(6),  // Time
            Constraint::Length(8),  // Priority
            Constraint::Length(8),  // Status
            Constraint::Length(12), // Category
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, chunks[2], &mut self.board_state);
    }

    /// Render a single bordered text input, cursor shown when active.
    fn render_input(&self, f: &mut Frame, area: Rect, label: &str, field: &InputField) {
        let border_style = if field.active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(field.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border_style),
        );
        f.render_widget(input, area);
        if field.active {
            f.set_cursor_position((area.x + 1 + field.cursor as u16, area.y + 1));
        }
    }

    /// Render a left/right selector row, e.g. "< Medium >".
    fn render_selector(&self, f: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
        let border_style = if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let selector = Paragraph::new(format!("< {} >", value)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .border_style(border_style),
        );
        f.render_widget(selector, area);
    }

    /// Render the new-task form.
    fn render_form(&mut self, f: &mut Frame, area: Rect) {
        use crate::tui::task_form::{CATEGORY_FIELD, PRIORITY_FIELD};

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Due date
                Constraint::Length(3), // Time
                Constraint::Length(3), // Priority
                Constraint::Length(3), // Category
                Constraint::Length(1), // Error line
                Constraint::Min(1),    // Hints
            ])
            .split(area);

        self.render_input(f, chunks[0], "Title", &self.form.title);
        self.render_input(f, chunks[1], "Due date (YYYY-MM-DD)", &self.form.due);
        self.render_input(f, chunks[2], "Time (HH:MM, optional)", &self.form.time);
        self.render_selector(
            f,
            chunks[3],
            "Priority",
            format_priority(self.form.priorities[self.form.priority]),
            self.form.current_field == PRIORITY_FIELD,
        );
        self.render_selector(
            f,
            chunks[4],
            "Category",
            &self.form.categories[self.form.category],
            self.form.current_field == CATEGORY_FIELD,
        );

        if let Some(error) = &self.form.error {
            let error_line = Paragraph::new(error.as_str())
                .style(Style::default().fg(HIGH_RED).add_modifier(Modifier::BOLD));
            f.render_widget(error_line, chunks[5]);
        }

        let hints = Paragraph::new(
            "Tab/Shift+Tab move between fields | Left/Right cycle selectors | Enter save | Esc cancel",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
        f.render_widget(hints, chunks[6]);
    }

    /// Render the month grid for the displayed year-month.
    fn render_month(&self, f: &mut Frame, area: Rect) {
        let view = month_view(
            self.planner.store(),
            self.planner.navigator().year(),
            self.planner.navigator().month(),
        );
        let focus = self.planner.navigator().focus_date();

        let header = Row::new(
            ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
                .iter()
                .map(|d| Cell::from(*d).style(Style::default().add_modifier(Modifier::BOLD))),
        )
        .height(1);

        let mut rows: Vec<Row> = Vec::new();
        let mut current: Vec<Cell> = (0..view.leading_blanks).map(|_| Cell::from("")).collect();
        for day_cell in &view.cells {
            if current.len() == 7 {
                rows.push(Row::new(std::mem::take(&mut current)).height(1));
            }
            let marker = if day_cell.task_count > 0 { "•" } else { " " };
            let mut style = Style::default();
            if day_cell.task_count > 0 {
                style = style.fg(AMBER);
            }
            if day_cell.date == focus {
                style = Style::default()
                    .bg(TEAL)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
            }
            current.push(Cell::from(format!("{:>2} {}", day_cell.day, marker)).style(style));
        }
        if !current.is_empty() {
            rows.push(Row::new(current).height(1));
        }

        let widths = [Constraint::Length(5); 7];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(view.label));
        f.render_widget(table, area);
    }

    /// Render the week strip around the focus date.
    fn render_week(&self, f: &mut Frame, area: Rect) {
        let focus = self.planner.navigator().focus_date();
        let week = week_view(self.planner.store(), focus);

        let mut lines: Vec<Line> = Vec::new();
        for day in &week {
            let style = if day.date == focus {
                Style::default()
                    .bg(TEAL)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(Span::styled(day.label.clone(), style)));
            for task in &day.tasks {
                let task_style = if task.done {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("  - #{} {}", task.id, truncate(&task.title, 50)),
                    task_style,
                )));
            }
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Week of {}", week[0].date)),
        );
        f.render_widget(paragraph, area);
    }

    /// Render the 24-hour schedule for the focus date.
    fn render_day(&self, f: &mut Frame, area: Rect) {
        let focus = self.planner.navigator().focus_date();
        let view = day_view(self.planner.store(), focus);

        let mut lines: Vec<Line> = Vec::new();
        for slot in &view.slots {
            let mut spans = vec![Span::styled(
                format!("{} │ ", slot.label),
                Style::default().fg(Color::DarkGray),
            )];
            for (i, task) in slot.tasks.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(", "));
                }
                let task_style = if task.done {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(AMBER)
                };
                spans.push(Span::styled(task.title.clone(), task_style));
            }
            lines.push(Line::from(spans));
        }
        if !view.unscheduled.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Unscheduled:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for task in &view.unscheduled {
                lines.push(Line::from(format!("  - {}", task.title)));
            }
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Day: {}", view.date)),
        );
        f.render_widget(paragraph, area);
    }

    /// Render the calendar screen: navigation header, the active view, and
    /// the agenda pane for the focus date.
    fn render_calendar(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(8),
            ])
            .split(area);

        let mode = match self.planner.view_mode() {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        };
        let nav_text = vec![Line::from(vec![
            Span::styled(
                format!("« ‹ {} › »", self.planner.navigator().month_label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(
                    "Focus: {}  View: {} (d/w/m)",
                    self.planner.navigator().focus_date(),
                    mode
                ),
                Style::default().fg(Color::Cyan),
            ),
        ])];
        let nav = Paragraph::new(nav_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(nav, chunks[0]);

        match self.planner.view_mode() {
            ViewMode::Month => self.render_month(f, chunks[1]),
            ViewMode::Week => self.render_week(f, chunks[1]),
            ViewMode::Day => self.render_day(f, chunks[1]),
        }

        let focus = self.planner.navigator().focus_date();
        let agenda = agenda_lines(self.planner.store(), focus);
        let agenda_text: Vec<Line> = if agenda.is_empty() {
            vec![Line::from(Span::styled(
                "(no tasks)",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            agenda.into_iter().map(Line::from).collect()
        };
        let agenda_block = Paragraph::new(agenda_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Tasks on {}", focus)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(agenda_block, chunks[2]);
    }

    /// Render the add-category dialog over the board.
    fn render_add_category(&mut self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 20, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title("Add Category")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEAL));

        let text = vec![
            Line::from(""),
            Line::from(self.dialog_input.value.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to add, Esc to cancel",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, popup);
    }

    /// Render the delete-category dialog over the board.
    fn render_delete_category(&mut self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 40, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title("Delete Category")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(HIGH_RED));

        let mut lines = vec![Line::from("Select a category to delete:"), Line::from("")];
        for (i, name) in self.planner.categories().names().iter().enumerate() {
            let style = if i == self.delete_index {
                Style::default().bg(Color::Gray).fg(Color::Black)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("  {}  ", name), style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter to delete, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(block);
        f.render_widget(paragraph, popup);
    }

    /// Render the help screen.
    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(
                "Task board",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  Up/Down       select task"),
            Line::from("  Enter/Space   toggle done"),
            Line::from("  a             add a task"),
            Line::from("  f             cycle category filter"),
            Line::from("  o             cycle sort (id / due / priority)"),
            Line::from("  n             add a category"),
            Line::from("  x             delete a category"),
            Line::from("  c             open the calendar"),
            Line::from("  q / Esc       quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Calendar",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("  d / w / m     day, week, or month view"),
            Line::from("  [ / ]         previous / next month"),
            Line::from("  { / }         previous / next year"),
            Line::from("  t             focus today"),
            Line::from("  Left/Right    move focus date by a day"),
            Line::from("  Up/Down       move focus date by a week"),
            Line::from("  b / Esc       back to the task board"),
            Line::from(""),
            Line::from("Paging the month does not move the focus date; the agenda"),
            Line::from("pane always follows the focus date."),
        ];
        let paragraph = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Help"));
        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.screen {
                Screen::TaskBoard => format!(
                    "Tasks: {} | Press 'h' for help",
                    self.visible_ids.len()
                ),
                Screen::NewTask => match self.input_mode {
                    InputMode::Text => "New Task - typing, Enter to save".to_string(),
                    InputMode::None => "New Task".to_string(),
                },
                Screen::Calendar => "Calendar".to_string(),
                Screen::AddCategory => "Add Category".to_string(),
                Screen::DeleteCategory => "Delete Category".to_string(),
                Screen::Help => "Help".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(TEAL).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to the active screen.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.screen {
            Screen::TaskBoard => self.render_board(f, chunks[0]),
            Screen::NewTask => self.render_form(f, chunks[0]),
            Screen::Calendar => self.render_calendar(f, chunks[0]),
            Screen::AddCategory => {
                self.render_board(f, chunks[0]);
                self.render_add_category(f, chunks[0]);
            }
            Screen::DeleteCategory => {
                self.render_board(f, chunks[0]);
                self.render_delete_category(f, chunks[0]);
            }
            Screen::Help => self.render_help(f, chunks[0]),
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
