//! Rust types for the Aahaar menu document.
//!
//! The remote JSON is a map of maps; key order is display order, so both
//! levels deserialize into `IndexMap` to keep it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level menu: category name -> items, in display order.
pub type MenuDocument = IndexMap<String, Category>;

/// One category: item name -> details, in display order.
pub type Category = IndexMap<String, FoodItem>;

/// A single menu entry. `price` is display text, not a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodItem {
    pub price: String,
    pub description: String,
}

/// Wire shape of the remote endpoint.
#[derive(Debug, Deserialize)]
pub struct MenuResponse {
    pub categories: MenuDocument,
}

/// Which categories to show. Never validated against the document; a
/// name that isn't in it just filters to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Category(String),
}

impl Selection {
    /// Label shown on the selector control.
    pub fn label(&self) -> &str {
        match self {
            Selection::All => "All",
            Selection::Category(name) => name,
        }
    }
}

/// The view the renderer works from: everything, one category, or an
/// empty document when the selected name doesn't exist.
pub fn filtered(doc: &MenuDocument, selection: &Selection) -> MenuDocument {
    match selection {
        Selection::All => doc.clone(),
        Selection::Category(name) => match doc.get(name) {
            Some(items) => IndexMap::from_iter([(name.clone(), items.clone())]),
            None => IndexMap::new(),
        },
    }
}
