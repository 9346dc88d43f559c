//! End-to-end filter and render checks at the line level.
//!
//! Drives the app the way the event loop does: apply a fetched payload,
//! move the selection, then assert on the text that would reach the
//! terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::text::Line;
use ratatui::Terminal;

use aahaar_menu::menu::{filtered, MenuError, MenuResponse, Selection};
use aahaar_menu::tui::app::App;
use aahaar_menu::tui::input::handle_key;
use aahaar_menu::tui::layout::{self, menu_lines};
use aahaar_menu::tui::mouse::handle_mouse;

fn plain(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

/// The wire payload from the fetch, through the response wrapper.
fn pizza_payload() -> MenuResponse {
    serde_json::from_str(
        r#"{"categories": {"Pizza": {"Margherita": {"price": "250", "description": "Classic"}}}}"#,
    )
    .unwrap()
}

fn full_payload() -> MenuResponse {
    serde_json::from_str(
        r#"{
            "categories": {
                "Drinks": {
                    "Masala Chai": {"price": "40", "description": "Spiced tea with milk"},
                    "Filter Coffee": {"price": "50", "description": "South Indian style"}
                },
                "Desserts": {
                    "Kulfi": {"price": "90", "description": "Slow-cooked and frozen"}
                },
                "Pizza": {
                    "Margherita": {"price": "250", "description": "Classic"}
                }
            }
        }"#,
    )
    .unwrap()
}

// ── The single-category scenario ──

#[test]
fn selecting_pizza_renders_header_item_and_price() {
    let mut app = App::new();
    app.apply_load(Ok(pizza_payload().categories));
    app.select(Selection::Category("Pizza".into()));

    let text = plain(&menu_lines(&app.filtered_view(), 40));

    assert!(text[0].starts_with("Pizza"));
    assert!(text[0].ends_with("1 items"));
    let item = text.iter().find(|l| l.starts_with("Margherita")).unwrap();
    assert!(item.ends_with("250/-"));
    assert!(text.iter().any(|l| l == "Classic"));
}

#[test]
fn all_renders_the_same_content_for_a_single_category_document() {
    let mut app = App::new();
    app.apply_load(Ok(pizza_payload().categories));

    let all_text = plain(&menu_lines(&app.filtered_view(), 40));

    app.select(Selection::Category("Pizza".into()));
    let pizza_text = plain(&menu_lines(&app.filtered_view(), 40));

    assert_eq!(all_text, pizza_text);
}

#[test]
fn unknown_selection_renders_nothing() {
    let mut app = App::new();
    app.apply_load(Ok(pizza_payload().categories));
    app.select(Selection::Category("Burgers".into()));

    assert!(app.filtered_view().is_empty());
    assert!(menu_lines(&app.filtered_view(), 40).is_empty());
}

// ── Filtering across a full document ──

#[test]
fn all_view_deep_equals_the_document_in_order() {
    let doc = full_payload().categories;
    let view = filtered(&doc, &Selection::All);
    assert_eq!(view, doc);
    assert!(view.keys().eq(doc.keys()));
}

#[test]
fn each_category_filters_to_exactly_itself() {
    let doc = full_payload().categories;
    for name in doc.keys() {
        let view = filtered(&doc, &Selection::Category(name.clone()));
        assert_eq!(view.len(), 1);
        assert_eq!(view[name], doc[name]);
    }
}

#[test]
fn rendered_counts_match_item_keys_per_category() {
    let doc = full_payload().categories;
    let text = plain(&menu_lines(&doc, 60));
    for (name, items) in &doc {
        let header = text.iter().find(|l| l.starts_with(name.as_str())).unwrap();
        assert!(header.ends_with(&format!("{} items", items.len())));
    }
}

// ── Keyboard-driven selection ──

#[test]
fn arrow_keys_walk_categories_in_document_order() {
    let mut app = App::new();
    app.apply_load(Ok(full_payload().categories));

    handle_key(&mut app, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
    assert_eq!(app.selection, Selection::Category("Drinks".into()));
    let text = plain(&menu_lines(&app.filtered_view(), 60));
    assert!(text[0].starts_with("Drinks"));
    assert!(text[0].ends_with("2 items"));
    assert!(!text.iter().any(|l| l.starts_with("Pizza")));

    handle_key(&mut app, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
    handle_key(&mut app, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
    assert_eq!(app.selection, Selection::Category("Pizza".into()));

    handle_key(&mut app, KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
    handle_key(&mut app, KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
    handle_key(&mut app, KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
    assert_eq!(app.selection, Selection::All);
}

// ── Mouse-driven chip panning ──

#[test]
fn wheel_pan_of_the_chip_row_holds_across_frames() {
    let mut app = App::new();
    app.apply_load(Ok(full_payload().categories));

    let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
    terminal.draw(|f| layout::draw(f, &mut app)).unwrap();

    // Four chips span 42 columns in a 30-column terminal
    let chip_bar = app.layout_areas.chip_bar;
    let wheel = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: chip_bar.x + 2,
        row: chip_bar.y,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse(&mut app, wheel);
    assert_eq!(app.chip_scroll, 3);

    terminal.draw(|f| layout::draw(f, &mut app)).unwrap();
    assert_eq!(app.chip_scroll, 3);
}

// ── Failure path ──

#[test]
fn load_failure_keeps_the_loading_state() {
    let mut app = App::new();
    app.apply_load(Err(MenuError::Parse("missing field `categories`".into())));

    assert!(app.is_loading());
    assert!(app.filtered_view().is_empty());
    assert_eq!(app.selections(), vec![Selection::All]);
    assert!(menu_lines(&app.filtered_view(), 40).is_empty());
}
