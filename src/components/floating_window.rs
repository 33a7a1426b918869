//! Floating window component
//!
//! A bordered popup centred over a parent area. The area underneath is
//! cleared first so the window reads cleanly over the wizard.

use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Sizing and chrome for a floating window
#[derive(Debug, Clone)]
pub struct FloatingWindowConfig {
    pub title: String,
    pub width_percent: u16,
    pub height_percent: u16,
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
    pub has_border: bool,
}

impl Default for FloatingWindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width_percent: 60,
            height_percent: 60,
            min_width: 30,
            min_height: 8,
            max_width: 100,
            max_height: 40,
            has_border: true,
        }
    }
}

/// Centred popup window
#[derive(Debug, Clone)]
pub struct FloatingWindow {
    config: FloatingWindowConfig,
}

impl FloatingWindow {
    pub fn new(config: FloatingWindowConfig) -> Self {
        Self { config }
    }

    /// Compute the window rectangle inside `parent`.
    ///
    /// Percent sizes are clamped to the min/max bounds and then to the parent.
    pub fn calculate_area(&self, parent: Rect) -> Rect {
        let cfg = &self.config;
        let width = (parent.width as u32 * cfg.width_percent as u32 / 100) as u16;
        let height = (parent.height as u32 * cfg.height_percent as u32 / 100) as u16;

        let width = width
            .clamp(cfg.min_width, cfg.max_width.max(cfg.min_width))
            .min(parent.width);
        let height = height
            .clamp(cfg.min_height, cfg.max_height.max(cfg.min_height))
            .min(parent.height);

        Rect {
            x: parent.x + (parent.width - width) / 2,
            y: parent.y + (parent.height - height) / 2,
            width,
            height,
        }
    }

    /// Render pre-built lines inside the window with an optional footer.
    pub fn render_lines(
        &self,
        f: &mut Frame,
        parent: Rect,
        lines: &[Line<'static>],
        footer: Option<&str>,
    ) {
        let area = self.calculate_area(parent);
        if area.width == 0 || area.height == 0 {
            return;
        }

        f.render_widget(Clear, area);

        let mut block = Block::default().style(Style::default().bg(Colors::BG_PRIMARY));
        if self.config.has_border {
            block = block
                .borders(Borders::ALL)
                .border_style(Styles::border_focus())
                .title(format!(" {} ", self.config.title))
                .title_alignment(Alignment::Center);
            if let Some(footer) = footer {
                block = block.title_bottom(Line::styled(format!(" {} ", footer), Styles::nav_hint()));
            }
        }

        let paragraph = Paragraph::new(lines.to_vec())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}
