//! Terminal viewer for the Aahaar restaurant menu.
//!
//! Fetches the published menu JSON once at startup and renders it as a
//! single ratatui screen: category chips on top, the item list below.
//! The fetch happens exactly once per run; if it fails, the screen
//! stays on the loading placeholder and the cause goes to the log.

pub mod menu;
pub mod tui;

pub use menu::{MenuClient, MenuDocument, Selection};
