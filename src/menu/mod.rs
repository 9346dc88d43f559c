//! Menu data: document types, the remote fetch, and icon glyphs.
//!
//! Everything here is UI-agnostic; the TUI layer consumes it read-only.

pub mod client;
pub mod icons;
pub mod types;

pub use client::{DEFAULT_MENU_URL, MenuClient, MenuError};
pub use types::{filtered, Category, FoodItem, MenuDocument, MenuResponse, Selection};
