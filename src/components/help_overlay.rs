//! Help overlay component
//!
//! Displays context-sensitive help using a floating window.

use super::floating_window::{FloatingWindow, FloatingWindowConfig};
use super::keybindings::{HelpSection, InputContext, KeybindingContext};
use crate::theme::Colors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    window: FloatingWindow,
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given input context
    pub fn new(context: InputContext, keybinding_ctx: &KeybindingContext) -> Self {
        let config = FloatingWindowConfig {
            title: "Help".to_string(),
            width_percent: 60,
            height_percent: 70,
            min_width: 44,
            min_height: 15,
            max_width: 72,
            max_height: 32,
            has_border: true,
        };

        let sections = keybinding_ctx.get_help_content(context);
        let content = Self::build_content(&sections, context);

        Self {
            window: FloatingWindow::new(config),
            content,
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], context: InputContext) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Skip Hire Booking Help  ",
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Focus: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(
                context.label().to_string(),
                Style::default().fg(Colors::WARNING),
            ),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::NAV_KEY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    /// Lines shown inside the window
    pub fn content(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        self.window
            .render_lines(f, parent, &self.content, Some("Press ? or Esc to close"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_content_lists_context_bindings() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(InputContext::SkipGrid, &ctx);
        let body = text(overlay.content());
        assert!(body.contains("Skip Selection"));
        assert!(body.contains("Select skip"));
        assert!(body.contains("Continue"));
    }

    #[test]
    fn test_header_help_has_no_skip_actions() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(InputContext::Header, &ctx);
        let body = text(overlay.content());
        assert!(body.contains("Open step"));
        assert!(!body.contains("Select skip"));
    }
}
