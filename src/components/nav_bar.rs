//! Navigation bar component
//!
//! Single-line key hint strip rendered at the bottom of the screen. A status
//! message, when present, replaces the hints for that frame.

use super::keybindings::NavBarItem;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Bottom navigation bar
pub struct NavBar {
    items: Vec<NavBarItem>,
    status: Option<String>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self {
            items,
            status: None,
        }
    }

    /// Show a one-off status message instead of the key hints.
    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status.map(str::to_string);
        self
    }

    /// Build the line that will be drawn.
    pub fn line(&self) -> Line<'static> {
        if let Some(ref status) = self.status {
            return Line::from(vec![Span::styled(
                format!(" {}", status),
                Styles::status_warning(),
            )]);
        }

        let mut spans = Vec::with_capacity(self.items.len() * 3);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Styles::nav_hint()));
            }
            spans.push(Span::styled(format!(" {}", item.key_display), Styles::nav_key()));
            spans.push(Span::styled(format!(" {}", item.action_label), Styles::nav_hint()));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(key: &str, label: &str) -> NavBarItem {
        NavBarItem {
            key_display: key.to_string(),
            action_label: label.to_string(),
        }
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_hints_are_joined() {
        let bar = NavBar::new(vec![item("Tab", "Switch focus"), item("Q", "Quit")]);
        assert_eq!(plain(&bar.line()), " Tab Switch focus   Q Quit");
    }

    #[test]
    fn test_status_replaces_hints() {
        let bar = NavBar::new(vec![item("Q", "Quit")]).with_status(Some("Select a skip"));
        assert_eq!(plain(&bar.line()), " Select a skip");
    }
}
