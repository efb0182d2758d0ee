//! Outline assembly.
//!
//! Drives the per-page pipeline: spans → lines → cleanup → furniture
//! filter → classification, concatenated across pages in page order.

use std::collections::HashSet;

use crate::classify::{resolve_title, HeadingClassifier};
use crate::error::Result;
use crate::model::{DocumentOutline, Heading};
use crate::parser::{group_into_lines, PdfParser};
use crate::render::clean_line;

/// Extract the outline from a parsed document.
///
/// Headings are emitted in reading order: non-decreasing page number, and
/// within a page top-to-bottom as the extractor yields them. A page whose
/// spans cannot be extracted is logged and skipped; the document as a
/// whole still produces a result.
pub fn extract_outline(parser: &PdfParser) -> Result<DocumentOutline> {
    let metadata = parser.metadata();
    let mut classifier = HeadingClassifier::new();

    let mut outline = DocumentOutline::default();
    // Cleaned first-page lines; repeats on later pages are running
    // headers/footers and get dropped
    let mut first_page_lines: HashSet<String> = HashSet::new();
    let mut title_resolved = false;

    for (idx, page_num) in parser.page_numbers().into_iter().enumerate() {
        let spans = match parser.page_spans(page_num) {
            Ok(spans) => spans,
            Err(e) => {
                log::warn!("Skipping page {}: {}", page_num, e);
                continue;
            }
        };

        let first_page = idx == 0;
        if first_page {
            outline.title = resolve_title(&metadata, &spans);
            title_resolved = true;
        }

        for line in group_into_lines(page_num, spans) {
            let text = clean_line(&line.text());

            if classifier.is_furniture(&text) {
                continue;
            }
            if first_page {
                first_page_lines.insert(text.clone());
            } else if first_page_lines.contains(&text) {
                log::debug!("Dropping repeated first-page line on page {}: {}", page_num, text);
                continue;
            }

            if let Some(level) = classifier.classify_line(&line, &text) {
                outline.push(Heading::new(level, text, line.page));
            }
        }
    }

    // Document with no readable pages still gets a metadata title
    if !title_resolved {
        outline.title = resolve_title(&metadata, &[]);
    }

    Ok(outline)
}
