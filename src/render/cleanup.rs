//! Line text cleanup.
//!
//! Normalizes extracted line text before classification: Unicode NFC,
//! replacement-character removal, extraction-stutter collapse, and
//! whitespace normalization.

use unicode_normalization::UnicodeNormalization;

/// Longest run of one character kept intact; longer runs are collapsed
/// to a single occurrence (extraction stutter like "Reeeeequest").
const MAX_CHAR_RUN: usize = 3;

/// Clean a line of extracted text.
pub fn clean_line(text: &str) -> String {
    let normalized: String = text.nfc().filter(|&c| c != '\u{FFFD}').collect();

    let collapsed = collapse_char_runs(&normalized);

    // Collapse whitespace runs (including newlines) to single spaces
    collapsed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collapse runs of 4+ identical characters down to one.
///
/// Whitespace is exempt; it is handled by the whitespace pass. Digits are
/// exempt too, since "20000" is data, not stutter.
fn collapse_char_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1usize;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        let keep = if run > MAX_CHAR_RUN && !c.is_whitespace() && !c.is_ascii_digit() {
            1
        } else {
            run
        };
        for _ in 0..keep {
            out.push(c);
        }
    }

    out
}
