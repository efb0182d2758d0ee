//! Document title resolution.

use crate::model::Metadata;
use crate::parser::TextSpan;
use crate::render::clean_line;

/// Resolve the document title.
///
/// Prefers a non-empty metadata title (trimmed). Falls back to the
/// largest-font span on the first page, ties broken by topmost position.
/// Returns an empty string when neither exists; never fails.
pub fn resolve_title(metadata: &Metadata, first_page_spans: &[TextSpan]) -> String {
    if let Some(title) = &metadata.title {
        let trimmed = title.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    first_page_spans
        .iter()
        .max_by(|a, b| {
            a.font_size
                .partial_cmp(&b.font_size)
                .unwrap_or(std::cmp::Ordering::Equal)
                // Topmost wins ties; PDF Y grows upward
                .then(
                    a.y.partial_cmp(&b.y)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        })
        .map(|span| clean_line(&span.text))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, y: f32, size: f32) -> TextSpan {
        TextSpan::new(text.to_string(), 72.0, y, size, "Helvetica".to_string())
    }

    fn with_title(title: &str) -> Metadata {
        Metadata {
            title: Some(title.to_string()),
            ..Metadata::default()
        }
    }

    #[test]
    fn test_metadata_title_wins() {
        let spans = vec![span("HUGE TEXT", 700.0, 40.0)];
        assert_eq!(
            resolve_title(&with_title("Report 2024"), &spans),
            "Report 2024"
        );
    }

    #[test]
    fn test_metadata_title_trimmed() {
        assert_eq!(resolve_title(&with_title("  Report 2024 \n"), &[]), "Report 2024");
    }

    #[test]
    fn test_empty_metadata_falls_back_to_largest_span() {
        let spans = vec![
            span("body text", 600.0, 11.0),
            span("The Actual Title", 700.0, 24.0),
            span("subtitle", 650.0, 14.0),
        ];
        assert_eq!(
            resolve_title(&with_title("   "), &spans),
            "The Actual Title"
        );
    }

    #[test]
    fn test_tie_broken_by_topmost() {
        let spans = vec![
            span("lower", 300.0, 24.0),
            span("upper", 700.0, 24.0),
        ];
        assert_eq!(resolve_title(&Metadata::default(), &spans), "upper");
    }

    #[test]
    fn test_no_spans_gives_empty() {
        assert_eq!(resolve_title(&Metadata::default(), &[]), "");
    }
}
