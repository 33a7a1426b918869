//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Step progress header, nav bar and help overlay hooks
//! - `screens` - Skip selection grid and placeholder step screens

pub mod header;
pub mod screens;

use crate::app::AppState;
use crate::catalog::Catalog;
use crate::components::keybindings::KeybindingContext;
use crate::step::Step;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It lays out the header,
/// the current step's screen and the nav bar, then draws the help overlay
/// on top when it is open.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        catalog: &Catalog,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Step header
                Constraint::Min(1),    // Step screen
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_step_header(f, state, chunks[0]);

        match state.session.current_step() {
            Step::SelectSkip => screens::render_skip_selection(f, state, catalog, chunks[1]),
            _ => screens::render_placeholder(f, state, catalog, chunks[1]),
        }

        header::render_nav_bar(f, state, keybinding_ctx, chunks[2]);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
