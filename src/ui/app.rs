//! Main TUI application state and logic

use crate::input;
use crate::sort::engine::SortEngine;
use crate::sort::gate::Control;
use crate::sort::sequence::GenerateSource;
use crate::sort::timing::Timing;
use crate::ui::panes::FocusedField;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Idle poll interval when no step deadline is pending.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// The animation engine instance
    pub engine: SortEngine,

    /// Currently focused text field
    pub focused: FocusedField,

    /// Raw text of the size field
    pub size_field: String,

    /// Raw text of the manual elements field
    pub elements_field: String,

    /// Raw text of the speed field
    pub speed_field: String,

    /// Status message to display
    pub status_message: String,

    /// When the next engine step is due (None while no run is active)
    pub next_step_at: Option<Instant>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app, seed the size field, and generate an initial random
    /// fill, giving the same first paint a fresh launch always gets.
    pub fn new(initial_size: usize) -> Self {
        let mut app = App {
            engine: SortEngine::new(),
            focused: FocusedField::Size,
            size_field: initial_size.to_string(),
            elements_field: String::new(),
            speed_field: String::new(),
            status_message: String::from("Ready!"),
            next_step_at: None,
            should_quit: false,
        };

        // Initial fill cannot be rejected: the gate is idle and the size is
        // pre-clamped, so surface the count straight away.
        if app
            .engine
            .generate(GenerateSource::Random {
                count: input::parse_size(&app.size_field),
            })
            .is_ok()
        {
            app.status_message = format!("Generated {} bars", app.engine.sequence().len());
        }
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Apply the next engine step once its suspension has elapsed
            if let Some(deadline) = self.next_step_at {
                let now = Instant::now();
                if now >= deadline {
                    match self.engine.step() {
                        Some(delay) => {
                            self.next_step_at = Some(now + delay);
                        }
                        None => {
                            self.next_step_at = None;
                            self.status_message = format!(
                                "Sorted! {} comparisons, {} swaps",
                                self.engine.comparisons(),
                                self.engine.swaps()
                            );
                        }
                    }
                }
            }

            // Poll with a timeout so pending steps fire on schedule
            let timeout = self
                .next_step_at
                .map(|deadline| {
                    deadline
                        .saturating_duration_since(Instant::now())
                        .min(POLL_INTERVAL)
                })
                .unwrap_or(POLL_INTERVAL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bars on top, input fields below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_bars_pane(
            frame,
            chunks[0],
            self.engine.visual(),
            self.engine.is_running(),
        );

        super::panes::render_controls_pane(
            frame,
            chunks[1],
            &self.size_field,
            &self.elements_field,
            &self.speed_field,
            self.focused,
            self.engine.gate().is_active(),
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.engine.state(),
            self.engine.comparisons(),
            self.engine.swaps(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused = self.focused.next();
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                self.command_generate();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.command_sort();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.command_reset();
            }
            KeyCode::Backspace => {
                if !self.field_disabled() {
                    self.focused_field_mut().pop();
                }
            }
            // Field editing: digits, minus, comma, and spaces only, so the
            // command letters above never collide with text entry
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == ',' || c == ' ' => {
                if !self.field_disabled() {
                    self.focused_field_mut().push(c);
                }
            }
            _ => {}
        }
    }

    /// Build or replace the sequence: manual list when the elements field has
    /// text, random fill by size otherwise.
    fn command_generate(&mut self) {
        let manual = self.elements_field.trim();
        let result = if manual.is_empty() {
            self.engine.generate(GenerateSource::Random {
                count: input::parse_size(&self.size_field),
            })
        } else {
            self.engine
                .generate(GenerateSource::Manual(input::parse_manual_list(manual)))
        };

        match result {
            Ok(()) => {
                self.status_message =
                    format!("Generated {} bars", self.engine.sequence().len());
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    /// Start a run with the timing the speed field currently asks for.
    fn command_sort(&mut self) {
        if self.engine.is_running() {
            self.status_message = "Already sorting".to_string();
            return;
        }

        self.engine
            .set_timing(Timing::from_base_ms(input::parse_speed_ms(&self.speed_field)));

        match self.engine.start_sort() {
            Ok(first_delay) => {
                self.next_step_at = Some(Instant::now() + first_delay);
                self.status_message = "Sorting...".to_string();
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    /// Clear the sequence, the projection, and the size/elements fields.
    /// The speed field keeps its value across resets.
    fn command_reset(&mut self) {
        match self.engine.reset() {
            Ok(()) => {
                self.size_field.clear();
                self.elements_field.clear();
                self.status_message = "Reset".to_string();
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focused {
            FocusedField::Size => &mut self.size_field,
            FocusedField::Elements => &mut self.elements_field,
            FocusedField::Speed => &mut self.speed_field,
        }
    }

    fn field_disabled(&self) -> bool {
        let control = match self.focused {
            FocusedField::Size => Control::SizeInput,
            FocusedField::Elements => Control::ElementsInput,
            FocusedField::Speed => Control::SpeedInput,
        };
        self.engine.is_control_disabled(control)
    }
}
