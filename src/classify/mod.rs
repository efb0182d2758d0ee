//! Heading classification.
//!
//! Assigns heading levels to text lines using a fixed font-size decision
//! list plus a numbering-pattern promotion rule. Lines that match neither
//! are body text and stay out of the outline.

mod title;

pub use title::resolve_title;

use std::collections::HashMap;

use regex::Regex;

use crate::model::HeadingLevel;
use crate::parser::TextLine;

/// Font-size decision list, checked top to bottom; first match wins.
/// Every rule additionally requires the line to be bold.
const FONT_RULES: &[(f32, HeadingLevel)] = &[
    (18.0, HeadingLevel::H1),
    (16.0, HeadingLevel::H2),
    (14.0, HeadingLevel::H3),
    (12.0, HeadingLevel::H4),
];

/// Minimum dominant size for the numbering promotion to apply: the H4
/// threshold with 2pt of slack for lines that narrowly miss it.
const MIN_PROMOTION_SIZE: f32 = 10.0;

/// Size at which a depth-1 numbered line lands on H1 instead of H2.
const DEPTH1_H1_SIZE: f32 = 16.0;

/// Per-document heading classifier.
///
/// Holds compiled numbering patterns and a `(size, bold) → level` memo for
/// the font table. Scoped to one document; create a fresh classifier per
/// document rather than sharing across a batch.
pub struct HeadingClassifier {
    memo: HashMap<(i32, bool), Option<HeadingLevel>>,
    patterns: NumberingPatterns,
    furniture: FurniturePatterns,
}

struct NumberingPatterns {
    /// "1", "1.", "1.1", "1.2.3" with trailing text
    decimal: Regex,
    /// "Chapter 3", "Section 2", "Appendix A"
    keyword: Regex,
    /// "IV." style roman numerals
    roman: Regex,
    /// "A." / "b)" lettered items
    letter: Regex,
}

struct FurniturePatterns {
    /// Bare page number
    page_number: Regex,
    /// "Page 3" / "Page 3 of 12"
    page_label: Regex,
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingClassifier {
    /// Create a classifier for one document.
    pub fn new() -> Self {
        Self {
            memo: HashMap::new(),
            patterns: NumberingPatterns {
                decimal: Regex::new(r"^\d+(\.\d+)*\.?\s+\S").expect("valid regex"),
                keyword: Regex::new(r"(?i)^(chapter\s+\d+|section\s+\d+|appendix\s+[a-z0-9])\b")
                    .expect("valid regex"),
                roman: Regex::new(r"^[IVXLCDM]+\.\s+\S").expect("valid regex"),
                letter: Regex::new(r"^[A-Za-z][.)]\s+\S").expect("valid regex"),
            },
            furniture: FurniturePatterns {
                page_number: Regex::new(r"^\d+$").expect("valid regex"),
                page_label: Regex::new(r"(?i)^page\s+\d+(\s+of\s+\d+)?$").expect("valid regex"),
            },
        }
    }

    /// Classify a line, given its cleaned text.
    ///
    /// Returns `None` for body text. Missing font data (size 0, not bold)
    /// degrades to body text rather than an error.
    pub fn classify_line(&mut self, line: &TextLine, text: &str) -> Option<HeadingLevel> {
        let font_level = self.font_level(line.font_size, line.is_bold);
        let numbering_level = self.numbering_level(text, line.font_size);

        match (font_level, numbering_level) {
            (Some(f), Some(n)) => Some(f.more_prominent(n)),
            (Some(f), None) => Some(f),
            (None, Some(n)) => Some(n),
            (None, None) => None,
        }
    }

    /// Font-table lookup, memoized per (0.1pt size bucket, bold).
    fn font_level(&mut self, font_size: f32, is_bold: bool) -> Option<HeadingLevel> {
        let key = ((font_size * 10.0).round() as i32, is_bold);
        if let Some(cached) = self.memo.get(&key) {
            return *cached;
        }

        let level = if is_bold {
            FONT_RULES
                .iter()
                .find(|(min_size, _)| font_size >= *min_size)
                .map(|(_, level)| *level)
        } else {
            None
        };

        self.memo.insert(key, level);
        level
    }

    /// Numbering-pattern promotion: a numbered line is a heading even when
    /// it narrowly misses the font thresholds, with the level chosen by
    /// numbering depth and capped at H4.
    fn numbering_level(&self, text: &str, font_size: f32) -> Option<HeadingLevel> {
        if font_size < MIN_PROMOTION_SIZE {
            return None;
        }

        let depth = self.numbering_depth(text)?;
        let level = match depth {
            1 if font_size >= DEPTH1_H1_SIZE => HeadingLevel::H1,
            1 => HeadingLevel::H2,
            2 => HeadingLevel::H3,
            _ => HeadingLevel::H4,
        };
        Some(level)
    }

    /// Depth of the leading numbering pattern, if any.
    ///
    /// Dotted decimal numbering counts its components ("1.2.3" is depth 3);
    /// chapter/section/appendix keywords and roman numerals are depth 1;
    /// single-letter items ("A.", "b)") are depth 2.
    fn numbering_depth(&self, text: &str) -> Option<usize> {
        if let Some(m) = self.patterns.decimal.find(text) {
            // Count dot-separated components in the numeric prefix
            let prefix = m.as_str().trim_end();
            let prefix = prefix.split_whitespace().next().unwrap_or(prefix);
            let depth = prefix.trim_end_matches('.').split('.').count();
            return Some(depth);
        }
        if self.patterns.keyword.is_match(text) {
            return Some(1);
        }
        if self.patterns.roman.is_match(text) {
            return Some(1);
        }
        if self.patterns.letter.is_match(text) {
            return Some(2);
        }
        None
    }

    /// Check whether a cleaned line is page furniture: empty, punctuation
    /// only, a bare page number, or a "Page N [of M]" label.
    pub fn is_furniture(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        if !text.chars().any(|c| c.is_alphanumeric()) {
            return true;
        }
        self.furniture.page_number.is_match(text) || self.furniture.page_label.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{TextLine, TextSpan};

    fn line(text: &str, size: f32, bold: bool) -> TextLine {
        let font = if bold { "Helvetica-Bold" } else { "Helvetica" };
        TextLine::from_spans(
            1,
            vec![TextSpan::new(text.to_string(), 72.0, 700.0, size, font.to_string())],
        )
    }

    fn classify(text: &str, size: f32, bold: bool) -> Option<HeadingLevel> {
        let mut classifier = HeadingClassifier::new();
        classifier.classify_line(&line(text, size, bold), text)
    }

    #[test]
    fn test_font_thresholds() {
        assert_eq!(classify("Overview", 18.0, true), Some(HeadingLevel::H1));
        assert_eq!(classify("Overview", 24.0, true), Some(HeadingLevel::H1));
        assert_eq!(classify("Overview", 16.0, true), Some(HeadingLevel::H2));
        assert_eq!(classify("Overview", 14.0, true), Some(HeadingLevel::H3));
        assert_eq!(classify("Overview", 12.0, true), Some(HeadingLevel::H4));
    }

    #[test]
    fn test_body_text_excluded() {
        // Below threshold
        assert_eq!(classify("Overview", 11.0, true), None);
        // Not bold
        assert_eq!(classify("Overview", 20.0, false), None);
        // Missing font data
        assert_eq!(classify("Overview", 0.0, false), None);
    }

    #[test]
    fn test_large_bold_is_always_h1() {
        // Numbering depth must not demote a line that clears the H1 bar
        assert_eq!(classify("1.2.3 Details", 18.0, true), Some(HeadingLevel::H1));
    }

    #[test]
    fn test_numbering_promotion() {
        // 13pt bold misses the H3 font threshold but "1.1" promotes to H3
        assert_eq!(classify("1.1 Background", 13.0, true), Some(HeadingLevel::H3));
        // Depth 1 at the same size lands on the H2 tier
        assert_eq!(classify("1 Overview", 13.0, true), Some(HeadingLevel::H2));
        // Depth 1 at 16pt+ is H1
        assert_eq!(classify("1 Overview", 16.5, false), Some(HeadingLevel::H1));
        // Depth 3+ caps at H4
        assert_eq!(classify("1.2.3.4 Minutiae", 11.0, false), Some(HeadingLevel::H4));
    }

    #[test]
    fn test_numbering_promotion_needs_minimum_size() {
        assert_eq!(classify("1.1 Background", 9.0, false), None);
        assert_eq!(classify("1.1 Background", 10.0, false), Some(HeadingLevel::H3));
    }

    #[test]
    fn test_keyword_and_letter_patterns() {
        assert_eq!(classify("Chapter 3 Results", 12.0, false), Some(HeadingLevel::H2));
        assert_eq!(classify("Section 2 Methods", 12.0, false), Some(HeadingLevel::H2));
        assert_eq!(classify("Appendix A Tables", 12.0, false), Some(HeadingLevel::H2));
        assert_eq!(classify("A. First item", 12.0, false), Some(HeadingLevel::H3));
        assert_eq!(classify("IV. Discussion", 12.0, false), Some(HeadingLevel::H2));
    }

    #[test]
    fn test_plain_text_not_promoted() {
        assert_eq!(classify("The 3 main results were", 11.0, false), None);
        assert_eq!(classify("plain body text", 11.0, false), None);
    }

    #[test]
    fn test_memo_is_consistent() {
        let mut classifier = HeadingClassifier::new();
        let l = line("Overview", 18.0, true);
        let first = classifier.classify_line(&l, "Overview");
        let second = classifier.classify_line(&l, "Overview");
        assert_eq!(first, second);
        assert_eq!(first, Some(HeadingLevel::H1));
    }

    #[test]
    fn test_furniture() {
        let classifier = HeadingClassifier::new();
        assert!(classifier.is_furniture(""));
        assert!(classifier.is_furniture("42"));
        assert!(classifier.is_furniture("Page 3"));
        assert!(classifier.is_furniture("page 3 of 12"));
        assert!(classifier.is_furniture("—"));
        assert!(classifier.is_furniture("* * *"));
        assert!(!classifier.is_furniture("Introduction"));
        assert!(!classifier.is_furniture("1.1 Background"));
    }
}
