//! Application module
//!
//! Contains the event loop and the intent handlers that turn key presses into
//! booking operations.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, Focus)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, Focus};

use crate::booking::{SelectionChange, TransitionRejected};
use crate::catalog::Catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::settings::Settings;
use crate::step::Step;
use crate::ui::{screens, UiRenderer};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    catalog: Catalog,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
    tick_rate: Duration,
}

impl App {
    /// Create a new application instance over the built-in catalog
    pub fn new(settings: &Settings) -> Self {
        Self::with_catalog(Catalog::builtin(), settings)
    }

    /// Create an application instance over an explicit catalog
    pub fn with_catalog(catalog: Catalog, settings: &Settings) -> Self {
        info!(skips = catalog.len(), "Creating new App instance");
        let state = AppState {
            help_visible: settings.show_help_on_start,
            ..AppState::default()
        };

        Self {
            state,
            catalog,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            tick_rate: Duration::from_millis(settings.tick_rate_ms),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if crossterm::event::poll(self.tick_rate)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        self.state.grid_columns = screens::grid_columns(width);
                    }
                    _ => {}
                }
            }
        }

        info!(
            step = %self.state.session.current_step(),
            selected = ?self.state.session.selected_skip(),
            "Leaving booking wizard"
        );
        Ok(())
    }

    /// Render one frame
    pub fn draw(&mut self, f: &mut Frame) {
        self.state.grid_columns = screens::grid_columns(f.area().width);
        self.ui_renderer
            .render(f, &self.state, &self.catalog, &self.keybinding_context);
    }

    /// Handle a key press. Returns true when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind == KeyEventKind::Release {
            return false;
        }

        self.state.status_message = None;

        // Help overlay swallows keys; ? or Esc dismisses it
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.state.help_visible = false;
            }
            return false;
        }

        let context = self.state.input_context();
        let Some(action) = self.keybinding_context.resolve(context, &key_event) else {
            return false;
        };
        debug!(?context, ?action, "key action");

        self.dispatch(action)
    }

    /// Apply an action. Returns true when the user asked to quit.
    fn dispatch(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::SwitchFocus => {
                self.state.focus = self.state.focus.toggled();
                self.state.header_cursor = self.state.session.current_step();
            }
            KeyAction::NavigateLeft => self.move_left(),
            KeyAction::NavigateRight => self.move_right(),
            KeyAction::NavigateUp => self.move_card_vertical(false),
            KeyAction::NavigateDown => self.move_card_vertical(true),
            KeyAction::OpenStep => self.navigate_to(self.state.header_cursor),
            KeyAction::GoToStep(index) => {
                if let Some(step) = Step::from_index(index) {
                    self.navigate_to(step);
                }
            }
            KeyAction::ToggleSkip => self.toggle_focused_skip(),
            KeyAction::Continue => self.continue_booking(),
            KeyAction::Back => self.go_back(),
        }
        false
    }

    fn navigate_to(&mut self, target: Step) {
        let before = self.state.session.current_step();
        match self.state.session.attempt_navigate(target) {
            Ok(step) => {
                if step != before {
                    info!(from = %before, to = %step, "Step changed");
                    self.on_step_entered(step);
                }
            }
            Err(rejected) => self.reject(rejected),
        }
    }

    fn go_back(&mut self) {
        match self.state.session.current_step().previous() {
            Some(previous) => self.navigate_to(previous),
            None => self.state.status_message = Some("Already at the first step".to_string()),
        }
    }

    fn continue_booking(&mut self) {
        let before = self.state.session.current_step();
        match self.state.session.advance_to_next_step() {
            Ok(step) => {
                info!(completed = %before, to = %step, "Step completed");
                self.on_step_entered(step);
            }
            Err(rejected) => self.reject(rejected),
        }
    }

    fn toggle_focused_skip(&mut self) {
        let Some(skip) = self.catalog.get(self.state.card_cursor) else {
            return;
        };
        match self.state.session.toggle_skip_selection(skip.id) {
            SelectionChange::Selected(id) | SelectionChange::Replaced { current: id, .. } => {
                info!(skip = id, total = %skip.total_price(), "Skip selected");
            }
            SelectionChange::Cleared(id) => info!(skip = id, "Skip deselected"),
        }
    }

    fn on_step_entered(&mut self, step: Step) {
        self.state.header_cursor = step;
        if step == Step::SelectSkip {
            if let Some(position) = self
                .state
                .session
                .selected_skip()
                .and_then(|id| self.catalog.position(id))
            {
                self.state.card_cursor = position;
            }
        }
    }

    fn reject(&mut self, rejected: TransitionRejected) {
        debug!(%rejected, "intent ignored");
        self.state.status_message = Some(rejected.to_string());
    }

    fn move_left(&mut self) {
        match self.state.focus {
            Focus::Header => {
                if let Some(previous) = self.state.header_cursor.previous() {
                    self.state.header_cursor = previous;
                }
            }
            Focus::Content => {
                self.state.card_cursor = self.state.card_cursor.saturating_sub(1);
            }
        }
    }

    fn move_right(&mut self) {
        match self.state.focus {
            Focus::Header => {
                if let Some(next) = self.state.header_cursor.next() {
                    self.state.header_cursor = next;
                }
            }
            Focus::Content => {
                if self.state.card_cursor + 1 < self.catalog.len() {
                    self.state.card_cursor += 1;
                }
            }
        }
    }

    fn move_card_vertical(&mut self, down: bool) {
        let columns = self.state.grid_columns.max(1);
        let cursor = self.state.card_cursor;
        if down {
            if cursor + columns < self.catalog.len() {
                self.state.card_cursor = cursor + columns;
            }
        } else if cursor >= columns {
            self.state.card_cursor = cursor - columns;
        }
    }
}
