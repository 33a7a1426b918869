//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors and styles
//! used by the wizard, so the header, cards and summary stay visually
//! consistent.
//!
//! # Usage
//! ```rust
//! use skiphire::theme::{Colors, Styles, Theme};
//! use skiphire::booking::StepStatus;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let chip_style = Theme::step_style(StepStatus::Completed, false);
//! ```

use crate::booking::StepStatus;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Panel background for popups
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - titles, active step, selected card
    pub const PRIMARY: Color = Color::Blue;

    /// Skip badge / artwork colour
    pub const SKIP: Color = Color::Rgb(249, 115, 22);

    /// Heavy waste marker
    pub const HEAVY: Color = Color::Magenta;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    /// Completed steps, lit connectors, totals
    pub const SUCCESS: Color = Color::Green;

    /// Light success variant
    pub const SUCCESS_LIGHT: Color = Color::LightGreen;

    /// Rejected-intent status line
    pub const WARNING: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused element border
    pub const BORDER_FOCUS: Color = Color::Cyan;

    /// Unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    /// Navigation key color
    pub const NAV_KEY: Color = Color::Cyan;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Bold text
    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Main title style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Size badge on skip cards
    pub fn badge() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::SKIP)
            .add_modifier(Modifier::BOLD)
    }

    /// Price including VAT
    pub fn price_total() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused border
    pub fn border_focus() -> Style {
        Style::default().fg(Colors::BORDER_FOCUS)
    }

    /// Unfocused border
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Border of the selected card
    pub fn border_selected() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Primary (filled) button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary (outline) button
    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Status line for rejected intents
    pub fn status_warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Navigation key
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::NAV_KEY)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for a step chip in the progress header.
    pub fn step_style(status: StepStatus, focused: bool) -> Style {
        let base = match status {
            StepStatus::Active => Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
            StepStatus::Completed => Style::default().fg(Colors::SUCCESS),
            StepStatus::Locked => Style::default().fg(Colors::FG_MUTED),
        };

        if focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }

    /// Style for the connector between two steps.
    pub fn connector_style(lit: bool) -> Style {
        if lit {
            Style::default().fg(Colors::SUCCESS_LIGHT)
        } else {
            Style::default().fg(Colors::FG_MUTED)
        }
    }

    /// Border style for a skip card.
    pub fn card_border(selected: bool, focused: bool) -> Style {
        match (selected, focused) {
            (true, _) => Styles::border_selected(),
            (false, true) => Styles::border_focus(),
            (false, false) => Styles::border_inactive(),
        }
    }
}
