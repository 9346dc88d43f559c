//! Category icon glyphs.
//!
//! Fixed lookup for the known category set; anything else gets the generic
//! food glyph. All glyphs here are default-emoji-presentation codepoints,
//! so `unicode-width` and the terminal agree on 2 columns (no VS16 needed).

/// Glyph shown next to the app title.
pub const LOGO: &str = "🍛";

/// Glyph for a category the lookup doesn't know.
pub const GENERIC_FOOD: &str = "🍴";

/// Icon glyph for a category name.
pub fn icon(category: &str) -> &'static str {
    match category {
        "Drinks" => "☕",
        "Desserts" => "🍨",
        "Pizza" => "🍕",
        "Burgers" => "🍔",
        _ => GENERIC_FOOD,
    }
}
