//! Step header and common widget rendering
//!
//! This module contains the progress header, the navigation bar and the
//! help overlay hook.

use crate::app::AppState;
use crate::booking::BookingSession;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::step::Step;
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CONNECTOR: &str = " ──› ";
const COMPLETED_MARK: &str = "✓";

/// Header title shown in the border
pub const APP_TITLE: &str = " Skip Hire Booking ";

/// Text of one step chip.
///
/// Completed steps show a check mark instead of their icon. In compact mode
/// only the current step keeps its name; the others show their number.
pub fn chip_label(session: &BookingSession, step: Step, compact: bool) -> String {
    let marker = if session.is_completed(step) {
        COMPLETED_MARK
    } else {
        step.meta().icon
    };

    if compact && step != session.current_step() {
        format!(" {} {} ", marker, step.number())
    } else {
        format!(" {} {} ", marker, step.name())
    }
}

/// Build the row of step chips joined by connectors.
pub fn step_chips(session: &BookingSession, cursor: Option<Step>, compact: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(Step::COUNT * 2);

    for step in Step::SEQUENCE {
        let status = session.step_status(step);
        let focused = cursor == Some(step);
        spans.push(Span::styled(
            chip_label(session, step, compact),
            Theme::step_style(status, focused),
        ));

        if !step.is_last() {
            spans.push(Span::styled(
                CONNECTOR,
                Theme::connector_style(session.connector_lit(step)),
            ));
        }
    }

    Line::from(spans)
}

/// Minimal header for terminals too narrow for chips: "Step 3/6 Select Skip".
pub fn step_counter(session: &BookingSession) -> Line<'static> {
    let step = session.current_step();
    Line::from(vec![
        Span::styled(
            format!("Step {}/{} ", step.number(), Step::COUNT),
            Styles::text_muted(),
        ),
        Span::styled(
            step.name(),
            Theme::step_style(session.step_status(step), false),
        ),
    ])
}

/// Render the step progress header
pub fn render_step_header(f: &mut Frame, state: &AppState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let cursor = state.focused_header_step();
    let inner_width = area.width.saturating_sub(2) as usize;
    let mut line = step_chips(&state.session, cursor, false);
    if line.width() > inner_width {
        line = step_chips(&state.session, cursor, true);
    }
    if line.width() > inner_width {
        line = step_counter(&state.session);
    }

    let border = if cursor.is_some() {
        Styles::border_focus()
    } else {
        Styles::border_inactive()
    };

    let header = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(APP_TITLE, Styles::title())),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext, area: Rect) {
    let nav_items = keybinding_ctx.get_nav_items(state.input_context());
    let nav_bar = NavBar::new(nav_items).with_status(state.status_message.as_deref());
    nav_bar.render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(state.input_context(), keybinding_ctx);
    help_overlay.render(f, f.area());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Colors;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_completed_steps_show_check_mark() {
        let session = BookingSession::new();
        assert_eq!(chip_label(&session, Step::Postcode, false), " ✓ Postcode ");
        assert_eq!(chip_label(&session, Step::SelectSkip, false), " ⛟ Select Skip ");
    }

    #[test]
    fn test_compact_keeps_current_name() {
        let session = BookingSession::new();
        assert_eq!(chip_label(&session, Step::Payment, true), " £ 6 ");
        assert_eq!(chip_label(&session, Step::SelectSkip, true), " ⛟ Select Skip ");
    }

    #[test]
    fn test_step_counter() {
        let session = BookingSession::new();
        assert_eq!(plain(&step_counter(&session)), "Step 3/6 Select Skip");
    }

    #[test]
    fn test_chips_cover_every_step() {
        let session = BookingSession::new();
        let line = step_chips(&session, None, false);
        let text = plain(&line);
        for step in Step::SEQUENCE {
            assert!(text.contains(step.name()), "missing {}", step.name());
        }
        assert_eq!(text.matches("──›").count(), Step::COUNT - 1);
    }

    #[test]
    fn test_chip_colours_follow_status() {
        let session = BookingSession::new();
        let line = step_chips(&session, None, false);
        // chips sit at even span positions, connectors at odd ones
        assert_eq!(line.spans[0].style.fg, Some(Colors::SUCCESS));
        assert_eq!(line.spans[4].style.fg, Some(Colors::PRIMARY));
        assert_eq!(line.spans[6].style.fg, Some(Colors::FG_MUTED));
        assert_eq!(line.spans[1].style.fg, Some(Colors::SUCCESS_LIGHT));
        assert_eq!(line.spans[5].style.fg, Some(Colors::FG_MUTED));
    }
}
