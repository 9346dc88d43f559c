//! Horizontally scrolling category chip row.
//!
//! One chip per selection state: the fixed "All" chip, then one per
//! category in document order. A selection change pans the row so the
//! new chip is visible; wheel panning is otherwise left where the user
//! put it, clamped to the row width at render time.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::menu::{icons, Selection};

use super::super::app::App;
use super::ACCENT_ORANGE;

/// A chip's text and its unscrolled column span within the row.
struct Chip {
    text: String,
    selection: Selection,
    x: u16,
    w: u16,
}

/// Chip text: icon and name for a category, bare label for "All".
fn chip_label(selection: &Selection) -> String {
    match selection {
        Selection::All => " All ".to_string(),
        Selection::Category(name) => format!(" {} {} ", icons::icon(name), name),
    }
}

/// Lay the chips out left to right with a 1-column gap between them.
fn chip_row(controls: &[Selection]) -> Vec<Chip> {
    let mut chips = Vec::with_capacity(controls.len());
    let mut x = 0u16;
    for selection in controls {
        let text = chip_label(selection);
        let w = text.width().min(u16::MAX as usize) as u16;
        chips.push(Chip {
            text,
            selection: selection.clone(),
            x,
            w,
        });
        x = x.saturating_add(w).saturating_add(1);
    }
    chips
}

/// Adjust a pan offset so the span [x, x+w) is inside the viewport.
fn pan_to_visible(pan: u16, x: u16, w: u16, viewport: u16) -> u16 {
    if x < pan {
        x
    } else if x.saturating_add(w) > pan.saturating_add(viewport) {
        x.saturating_add(w).saturating_sub(viewport)
    } else {
        pan
    }
}

pub(super) fn draw_chips(f: &mut Frame, app: &mut App, area: Rect) {
    let controls = app.selections();
    let chips = chip_row(&controls);
    let total_width = chips.last().map(|c| c.x.saturating_add(c.w)).unwrap_or(0);

    // One-shot: only a selection change repositions the pan, so wheel
    // panning holds across frames.
    if app.chip_into_view {
        if let Some(chip) = chips.iter().find(|c| c.selection == app.selection) {
            app.chip_scroll = pan_to_visible(app.chip_scroll, chip.x, chip.w, area.width);
        }
        app.chip_into_view = false;
    }
    app.chip_scroll = app.chip_scroll.min(total_width.saturating_sub(area.width));

    let mut spans: Vec<Span> = Vec::new();
    let mut regions: Vec<(u16, u16, Selection)> = Vec::new();
    for (i, chip) in chips.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if chip.selection == app.selection {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT_ORANGE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(chip.text.clone(), style));

        // Visible screen span after the pan, clipped to the row
        let start = chip.x as i32 - app.chip_scroll as i32;
        let end = start + chip.w as i32;
        let vis_start = start.max(0);
        let vis_end = end.min(area.width as i32);
        if vis_start < vis_end {
            regions.push((
                area.x + vis_start as u16,
                area.x + vis_end as u16,
                chip.selection.clone(),
            ));
        }
    }
    app.layout_areas.chip_regions = regions;

    f.render_widget(
        Paragraph::new(Line::from(spans)).scroll((0, app.chip_scroll)),
        area,
    );
}
