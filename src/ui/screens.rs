//! Step screens.
//!
//! - `render_skip_selection` - card grid, selection summary and continue button
//! - `render_placeholder` - copy-only screen for every other step
//!
//! The card and summary builders return plain `Line`s so they can be checked
//! without a terminal.

use crate::app::AppState;
use crate::booking::BookingSession;
use crate::catalog::{Catalog, SizeClass, Skip, CARD_TAGLINE};
use crate::step::Step;
use crate::theme::{Colors, Styles, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a card occupies including its border.
pub const CARD_HEIGHT: u16 = 13;

/// Cards per row for a terminal width.
pub fn grid_columns(width: u16) -> usize {
    match width {
        120.. => 3,
        80..=119 => 2,
        _ => 1,
    }
}

fn skip_art(class: SizeClass) -> &'static str {
    match class {
        SizeClass::Small => "▟██▙",
        SizeClass::Medium => "▟████▙",
        SizeClass::Large => "▟███████▙",
    }
}

/// Text of one skip card, top to bottom.
pub fn skip_card_lines(skip: &Skip, selected: bool) -> Vec<Line<'static>> {
    let heavy = if skip.allows_heavy_waste {
        Line::from(Span::styled(
            "⚠ Heavy waste accepted",
            Style::default().fg(Colors::HEAVY),
        ))
    } else {
        Line::from("")
    };

    let placement_style = if skip.allowed_on_road {
        Style::default().fg(Colors::SUCCESS)
    } else {
        Styles::text_secondary()
    };

    let button = if selected {
        Line::from(Span::styled(" ✓ Selected ", Styles::button_active()))
    } else {
        Line::from(Span::styled(
            "[ Select this skip ]",
            Styles::button_inactive(),
        ))
    };

    vec![
        Line::from(vec![
            Span::styled(skip_art(skip.size_class()), Style::default().fg(Colors::SKIP)),
            Span::raw("  "),
            Span::styled(format!(" {} Yard ", skip.size), Styles::badge()),
        ]),
        Line::from(Span::styled(skip.title(), Styles::text_bold())),
        Line::from(Span::styled(CARD_TAGLINE, Styles::text_muted())),
        Line::from(""),
        Line::from(Span::styled(
            format!("◷ {}", skip.hire_period_label()),
            Styles::text(),
        )),
        Line::from(Span::styled(
            format!("⛟ {}", skip.placement_label()),
            placement_style,
        )),
        heavy,
        Line::from(""),
        Line::from(Span::styled(
            format!("£{} before VAT", skip.price_before_vat),
            Styles::text_secondary(),
        )),
        Line::from(Span::styled(
            format!("£{} inc. VAT ({}%)", skip.total_price(), skip.vat),
            Styles::price_total(),
        )),
        button,
    ]
}

/// One-line selection summary.
pub fn summary_line(skip: &Skip) -> Line<'static> {
    Line::from(vec![
        Span::styled(skip.title(), Styles::text_bold()),
        Span::styled(
            format!("  {}  ", skip.hire_period_label()),
            Styles::text_secondary(),
        ),
        Span::styled(format!("£{}", skip.total_price()), Styles::price_total()),
        Span::styled(" inc. VAT", Styles::text_muted()),
    ])
}

/// Continue button label, shown on select-skip once a skip is picked.
pub fn continue_label(session: &BookingSession) -> Option<String> {
    if session.current_step() != Step::SelectSkip || !session.can_advance() {
        return None;
    }
    session
        .current_step()
        .next()
        .map(|next| format!("Continue to {}", next.name()))
}

/// First visible grid row so that `focused_row` stays on screen.
pub fn first_visible_row(focused_row: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    (focused_row + 1).saturating_sub(visible_rows)
}

/// Render the skip selection screen
pub fn render_skip_selection(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let meta = Step::SelectSkip.meta();
    let selected = state.session.selected_skip().and_then(|id| catalog.find(id));
    let continue_text = continue_label(&state.session);
    let footer_height = if selected.is_some() || continue_text.is_some() {
        3
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(2),             // Subtitle
            Constraint::Min(1),                // Cards
            Constraint::Length(footer_height), // Summary + continue
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(meta.title, Styles::title())))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let subtitle = Paragraph::new(Line::from(Span::styled(meta.blurb, Styles::text_secondary())))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(subtitle, chunks[1]);

    render_card_grid(f, state, catalog, chunks[2]);

    if footer_height > 0 {
        render_selection_footer(f, selected, continue_text.as_deref(), chunks[3]);
    }
}

fn render_card_grid(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    if catalog.is_empty() || area.height == 0 {
        return;
    }

    let columns = state.grid_columns.max(1);
    let focused = state.focused_card();
    let anchor = focused
        .or_else(|| {
            state
                .session
                .selected_skip()
                .and_then(|id| catalog.position(id))
        })
        .unwrap_or(0);

    let total_rows = catalog.len().div_ceil(columns);
    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let first_row = first_visible_row(anchor / columns, visible_rows);

    for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
        let y = area.y + slot as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let row_area = Rect::new(area.x, y, area.width, height);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            let Some(skip) = catalog.get(index) else {
                break;
            };
            let is_selected = state.session.is_selected(skip.id);
            let is_focused = focused == Some(index);
            render_card(f, skip, is_selected, is_focused, *cell);
        }
    }

    if total_rows > first_row + visible_rows {
        let hint = Paragraph::new(Span::styled("▼ more", Styles::nav_hint()))
            .alignment(Alignment::Right);
        let bottom = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        f.render_widget(hint, bottom);
    }
}

fn render_card(f: &mut Frame, skip: &Skip, selected: bool, focused: bool, area: Rect) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::card_border(selected, focused));
    if focused {
        block = block.title(Span::styled(
            " ▶ ",
            Styles::border_focus().add_modifier(Modifier::BOLD),
        ));
    }

    let card = Paragraph::new(skip_card_lines(skip, selected)).block(block);
    f.render_widget(card, area);
}

fn render_selection_footer(
    f: &mut Frame,
    selected: Option<&Skip>,
    continue_text: Option<&str>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(36)])
        .split(area);

    if let Some(skip) = selected {
        let summary = Paragraph::new(summary_line(skip)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_selected())
                .title(Span::styled(" Your Selection ", Styles::title())),
        );
        f.render_widget(summary, chunks[0]);
    }

    if let Some(label) = continue_text {
        let button = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", label), Styles::button_active()),
            Span::styled(" [c]", Styles::nav_key()),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_focus()));
        f.render_widget(button, chunks[1]);
    }
}

/// Render the screen for a step without its own form
pub fn render_placeholder(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let step = state.session.current_step();
    let meta = step.meta();

    let mut lines = vec![
        Line::from(Span::styled(meta.title, Styles::title())),
        Line::from(""),
        Line::from(Span::styled(meta.blurb, Styles::text_secondary())),
        Line::from(""),
    ];

    if let Some(skip) = state.session.selected_skip().and_then(|id| catalog.find(id)) {
        lines.push(Line::from(Span::styled("Your Selection", Styles::text_muted())));
        lines.push(summary_line(skip));
        lines.push(Line::from(""));
    }

    if state.session.can_advance() {
        if let Some(next) = step.next() {
            lines.push(Line::from(vec![
                Span::styled("Press ", Styles::nav_hint()),
                Span::styled("c", Styles::nav_key()),
                Span::styled(format!(" to continue to {}", next.name()), Styles::nav_hint()),
            ]));
        }
    }

    let border = if state.focused_header_step().is_some() {
        Styles::border_inactive()
    } else {
        Styles::border_focus()
    };

    let screen = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", meta)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(screen, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_grid_columns_reflow() {
        assert_eq!(grid_columns(160), 3);
        assert_eq!(grid_columns(120), 3);
        assert_eq!(grid_columns(100), 2);
        assert_eq!(grid_columns(79), 1);
        assert_eq!(grid_columns(0), 1);
    }

    #[test]
    fn test_card_lines_fit_card_height() {
        let catalog = Catalog::builtin();
        for skip in catalog.skips() {
            assert_eq!(skip_card_lines(skip, false).len() as u16, CARD_HEIGHT - 2);
        }
    }

    #[test]
    fn test_card_text() {
        let catalog = Catalog::builtin();
        let skip = catalog.find(17933).cloned().unwrap_or_else(|| panic!("missing skip"));
        let text = plain(&skip_card_lines(&skip, false));
        assert!(text[0].contains("4 Yard"));
        assert_eq!(text[1], "4 Yard Skip");
        assert_eq!(text[2], CARD_TAGLINE);
        assert!(text[4].ends_with("14 day hire period"));
        assert!(text[5].ends_with("Road placement allowed"));
        assert!(text[6].ends_with("Heavy waste accepted"));
        assert_eq!(text[8], "£278 before VAT");
        assert_eq!(text[9], "£334 inc. VAT (20%)");
        assert!(text[10].contains("Select this skip"));
    }

    #[test]
    fn test_selected_card_button() {
        let catalog = Catalog::builtin();
        let skip = &catalog.skips()[1];
        let text = plain(&skip_card_lines(skip, true));
        assert!(text[10].contains("Selected"));
        assert!(!text[10].contains("Select this skip"));
    }

    #[test]
    fn test_summary_line() {
        let catalog = Catalog::builtin();
        let skip = &catalog.skips()[1];
        let text = plain(&[summary_line(skip)]).remove(0);
        assert_eq!(text, "6 Yard Skip  14 day hire period  £390 inc. VAT");
    }

    #[test]
    fn test_continue_label() {
        let mut session = BookingSession::new();
        assert_eq!(continue_label(&session), None);
        session.toggle_skip_selection(17934);
        assert_eq!(
            continue_label(&session).as_deref(),
            Some("Continue to Permit Check")
        );
        session.advance_to_next_step().ok();
        assert_eq!(continue_label(&session), None);
    }

    #[test]
    fn test_first_visible_row_keeps_focus_on_screen() {
        assert_eq!(first_visible_row(0, 1), 0);
        assert_eq!(first_visible_row(1, 1), 1);
        assert_eq!(first_visible_row(1, 2), 0);
        assert_eq!(first_visible_row(5, 2), 4);
        assert_eq!(first_visible_row(3, 0), 3);
    }
}
