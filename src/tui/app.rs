//! TUI application state.
//!
//! Model half of the screen: the fetched document (or not-yet), the
//! category selection, and scroll positions. Rendering reads this;
//! input handlers mutate it. No widget state is retained.

use tracing::error;

use crate::menu::{filtered, MenuDocument, MenuError, Selection};

use super::mouse::LayoutAreas;

/// All mutable state behind the menu screen.
#[derive(Debug, Default)]
pub struct App {
    /// Fetched menu; `None` until the fetch resolves successfully.
    /// Stays `None` forever if the fetch fails.
    pub document: Option<MenuDocument>,
    /// Current category filter.
    pub selection: Selection,
    /// Vertical scroll of the item list, in visual lines.
    pub item_scroll: u16,
    /// Horizontal scroll of the category chip row, in columns.
    pub chip_scroll: u16,
    /// Pan the selected chip into view on the next chip row draw.
    /// Set on selection change, cleared by the renderer.
    pub chip_into_view: bool,
    pub should_quit: bool,
    /// Layout regions cached each render frame for mouse hit-testing.
    pub layout_areas: LayoutAreas,
    /// Item viewport height recorded at render time (page-scroll step).
    pub viewport_height: u16,
    /// Total item lines at the last render (scroll clamping).
    pub content_height: u16,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// True until a document has been applied. The screen shows only the
    /// loading placeholder while this holds.
    pub fn is_loading(&self) -> bool {
        self.document.is_none()
    }

    /// Apply the one-shot fetch result. Failure is logged and otherwise
    /// swallowed; the screen stays on the loading placeholder.
    pub fn apply_load(&mut self, result: Result<MenuDocument, MenuError>) {
        match result {
            Ok(doc) => self.document = Some(doc),
            Err(e) => error!("menu fetch failed, staying on the loading screen: {e}"),
        }
    }

    /// The categories the renderer should show for the current selection.
    /// Empty while loading or when the selected name isn't in the document.
    pub fn filtered_view(&self) -> MenuDocument {
        match &self.document {
            Some(doc) => filtered(doc, &self.selection),
            None => MenuDocument::new(),
        }
    }

    /// Selector controls in display order: "All" first, then each
    /// category in document order.
    pub fn selections(&self) -> Vec<Selection> {
        let mut out = vec![Selection::All];
        if let Some(doc) = &self.document {
            out.extend(doc.keys().cloned().map(Selection::Category));
        }
        out
    }

    /// Switch the filter. Reselecting the current category is a no-op;
    /// an actual change jumps the item list back to the top and asks the
    /// chip row to bring the new chip into view.
    pub fn select(&mut self, next: Selection) {
        if next == self.selection {
            return;
        }
        self.selection = next;
        self.item_scroll = 0;
        self.chip_into_view = true;
    }

    /// Move the selection one chip to the left (clamped at "All").
    pub fn select_prev(&mut self) {
        let controls = self.selections();
        let idx = controls
            .iter()
            .position(|s| *s == self.selection)
            .unwrap_or(0);
        if idx > 0 {
            self.select(controls[idx - 1].clone());
        }
    }

    /// Move the selection one chip to the right (clamped at the last category).
    pub fn select_next(&mut self) {
        let controls = self.selections();
        let idx = controls
            .iter()
            .position(|s| *s == self.selection)
            .unwrap_or(0);
        if idx + 1 < controls.len() {
            self.select(controls[idx + 1].clone());
        }
    }

    // ── Scrolling ──
    //
    // Methods move freely with saturating arithmetic; the renderer clamps
    // against the real content height each frame and writes the clamped
    // value back.

    pub fn max_item_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_items_up(&mut self) {
        self.item_scroll = self.item_scroll.saturating_sub(1);
    }

    pub fn scroll_items_down(&mut self) {
        self.item_scroll = self.item_scroll.saturating_add(1);
    }

    pub fn page_up(&mut self) {
        self.item_scroll = self.item_scroll.saturating_sub(self.viewport_height.max(1));
    }

    pub fn page_down(&mut self) {
        self.item_scroll = self.item_scroll.saturating_add(self.viewport_height.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.item_scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        // Render clamps this to the last page
        self.item_scroll = u16::MAX;
    }

    pub fn scroll_chips_left(&mut self) {
        self.chip_scroll = self.chip_scroll.saturating_sub(1);
    }

    pub fn scroll_chips_right(&mut self) {
        self.chip_scroll = self.chip_scroll.saturating_add(1);
    }
}
