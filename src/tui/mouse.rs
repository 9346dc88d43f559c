//! Mouse event handling for the menu screen.
//!
//! Hit-testing against cached layout regions: clicking a category chip
//! selects it, the wheel scrolls the item list, and the wheel over the
//! chip row pans it horizontally.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::menu::Selection;

use super::app::App;

/// Cached layout regions for mouse hit-testing. Updated each render frame.
#[derive(Default, Clone, Debug)]
pub struct LayoutAreas {
    pub title_bar: Rect,
    pub chip_bar: Rect,
    pub content: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
    /// Visible chip spans within chip_bar: (x_start, x_end, selection),
    /// in screen columns after horizontal scroll.
    pub chip_regions: Vec<(u16, u16, Selection)>,
}

/// Handle a mouse event, dispatching on the layout region under the cursor.
pub fn handle_mouse(app: &mut App, event: MouseEvent) {
    let col = event.column;
    let row = event.row;

    match event.kind {
        MouseEventKind::ScrollUp => {
            handle_scroll(app, col, row, true);
        }
        MouseEventKind::ScrollDown => {
            handle_scroll(app, col, row, false);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_down(app, col, row);
        }
        _ => {}
    }
}

/// Scroll wheel: item list scrolls vertically, chip row pans horizontally.
fn handle_scroll(app: &mut App, col: u16, row: u16, up: bool) {
    let areas = &app.layout_areas;

    if rect_contains(areas.chip_bar, col, row) {
        for _ in 0..3 {
            if up {
                app.scroll_chips_left();
            } else {
                app.scroll_chips_right();
            }
        }
        return;
    }

    if rect_contains(areas.content, col, row) {
        for _ in 0..3 {
            if up {
                app.scroll_items_up();
            } else {
                app.scroll_items_down();
            }
        }
    }
}

/// Left click on a chip selects its category.
fn handle_left_down(app: &mut App, col: u16, row: u16) {
    if !rect_contains(app.layout_areas.chip_bar, col, row) {
        return;
    }
    let regions = app.layout_areas.chip_regions.clone();
    for (x_start, x_end, selection) in regions {
        if col >= x_start && col < x_end {
            app.select(selection);
            return;
        }
    }
}

/// Check if a point (col, row) is inside a Rect.
fn rect_contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}
