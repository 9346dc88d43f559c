//! Display-width-aware word wrapping for description text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word-wrap at `max_width` display columns. Whitespace runs
/// collapse to single spaces, matching how the source text is written.
/// Words wider than a whole line are hard-split on character widths.
pub(super) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || text.width() <= max_width {
        return vec![text.to_string()];
    }

    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let sep = if current.is_empty() { 0 } else { 1 };

        if current_width + sep + word_width <= max_width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            let mut piece = String::new();
            let mut piece_width = 0usize;
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if piece_width + w > max_width && !piece.is_empty() {
                    out.push(std::mem::take(&mut piece));
                    piece_width = 0;
                }
                piece.push(ch);
                piece_width += w;
            }
            current = piece;
            current_width = piece_width;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
