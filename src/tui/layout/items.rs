//! Item list: category headers, item rows, wrapped descriptions.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::menu::MenuDocument;

use super::super::app::App;
use super::wrap::wrap_text;
use super::{ACCENT_ORANGE, BRAND_RED, RULE_GREY};

/// Build the full item list as styled lines at `width` columns.
///
/// Per category: a header line (name left, "N items" right), an orange
/// rule, then each item as a name/price line followed by its wrapped
/// description. Items are separated by a dotted rule, categories by a
/// blank line. An empty view produces no lines at all.
pub fn menu_lines(view: &MenuDocument, width: u16) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (ci, (category, items)) in view.iter().enumerate() {
        if ci > 0 {
            lines.push(Line::from(""));
        }

        let count = format!("{} items", items.len());
        let pad = width.saturating_sub(category.width() + count.width()).max(1);
        lines.push(Line::from(vec![
            Span::styled(
                category.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            Span::styled(count, Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(ACCENT_ORANGE),
        )));

        for (ii, (name, item)) in items.iter().enumerate() {
            if ii > 0 {
                lines.push(Line::from(Span::styled(
                    "┄".repeat(width),
                    Style::default().fg(RULE_GREY),
                )));
            }

            let price = format!("{}/-", item.price);
            let pad = width.saturating_sub(name.width() + price.width()).max(1);
            lines.push(Line::from(vec![
                Span::styled(name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" ".repeat(pad)),
                Span::styled(
                    price,
                    Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
                ),
            ]));

            for wrapped in wrap_text(&item.description, width) {
                lines.push(Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    lines
}

/// Render the filtered item list with vertical scroll and a scrollbar.
pub(super) fn draw_items(f: &mut Frame, app: &mut App, area: Rect) {
    let view = app.filtered_view();
    // 1 column reserved for the scrollbar
    let lines = menu_lines(&view, area.width.saturating_sub(1));

    let total = lines.len().min(u16::MAX as usize) as u16;
    let viewport = area.height;
    let max_scroll = total.saturating_sub(viewport);
    let scroll = app.item_scroll.min(max_scroll);
    app.item_scroll = scroll;
    app.viewport_height = viewport;
    app.content_height = total;
    app.layout_areas.content = area;

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);

    if total > viewport {
        let mut scrollbar_state = ScrollbarState::new(max_scroll as usize).position(scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area,
            &mut scrollbar_state,
        );
    }
}
