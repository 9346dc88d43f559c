//! Single-screen layout: title, category chips, item list, footer.
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │             🍛 Aahaar Menu           │
//! │  All   ☕ Drinks   🍕 Pizza          │
//! │ Pizza                       1 items  │
//! │ ───────────────────────────────────  │
//! │ Margherita                    250/-  │
//! │ Classic                              │
//! │        (footer band, 2 rows)         │
//! │ [All] ←→:Category ↑↓:Scroll q:Quit   │
//! └──────────────────────────────────────┘
//! ```
//!
//! While the fetch is pending (or failed) the whole screen is the
//! centered loading placeholder plus the status bar.

mod categories;
mod items;
mod wrap;

pub use items::menu_lines;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::menu::icons;

use super::app::App;
use super::mouse::LayoutAreas;

/// Tomato red for the title and price text.
pub(super) const BRAND_RED: Color = Color::Rgb(255, 99, 71);
/// Dark orange for the selected chip, header rules, and the footer band.
pub(super) const ACCENT_ORANGE: Color = Color::Rgb(255, 140, 0);
/// Muted grey for the dotted rules between items.
pub(super) const RULE_GREY: Color = Color::Rgb(50, 50, 56);

const TITLE: &str = "Aahaar Menu";
const LOADING: &str = "Loading menu...";
const FOOTER_TEXT: &str =
    "Designed and custom-built for Aahaar by Ripple — a step towards the digital wave.";
const FOOTER_LINK: &str = "https://ripple.relaef.com";

/// Draw the full screen.
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if area.width < 20 || area.height < 7 {
        draw_too_small(f, area);
        return;
    }

    if app.is_loading() {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        // No chips or content exist yet; drop stale hit-test regions
        app.layout_areas = LayoutAreas::default();
        app.layout_areas.status_bar = outer[1];
        draw_loading(f, outer[0]);
        draw_status(f, app, outer[1]);
        return;
    }

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // chip row
            Constraint::Min(3),    // item list
            Constraint::Length(2), // footer band
            Constraint::Length(1), // status bar
        ])
        .split(area);

    // Cache layout areas for mouse hit-testing
    app.layout_areas.title_bar = outer[0];
    app.layout_areas.chip_bar = outer[1];
    app.layout_areas.content = outer[2];
    app.layout_areas.footer = outer[3];
    app.layout_areas.status_bar = outer[4];

    draw_title(f, outer[0]);
    categories::draw_chips(f, app, outer[1]);
    items::draw_items(f, app, outer[2]);
    draw_footer(f, outer[3]);
    draw_status(f, app, outer[4]);
}

fn draw_title(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw(icons::LOGO),
        Span::raw(" "),
        Span::styled(
            TITLE,
            Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_loading(f: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    f.render_widget(
        Paragraph::new(Span::styled(LOADING, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        row,
    );
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let band = Style::default().bg(ACCENT_ORANGE).fg(Color::White);
    let lines = vec![
        Line::from(Span::styled(FOOTER_TEXT, band.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            FOOTER_LINK,
            band.add_modifier(Modifier::UNDERLINED),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines).style(band).alignment(Alignment::Center),
        area,
    );
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let state = if app.is_loading() {
        Span::styled("loading menu", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            app.selection.label().to_string(),
            Style::default().fg(Color::Green),
        )
    };

    let hints = "\u{2190}\u{2192}:Category  \u{2191}\u{2193}:Scroll  q:Quit";
    let line = Line::from(vec![
        Span::styled(" [", Style::default().fg(Color::DarkGray)),
        state,
        Span::styled("]", Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_too_small(f: &mut Frame, area: Rect) {
    f.render_widget(
        Paragraph::new("Terminal too small").alignment(Alignment::Center),
        area,
    );
}
