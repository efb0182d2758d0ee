//! Layout primitives: text spans and lines.
//!
//! Spans carry the font attributes the classifier needs (size, boldness,
//! position); lines group spans that share a page and a vertical band.

/// A run of text sharing one font configuration, with position info.
#[derive(Debug, Clone)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// X position (left edge)
    pub x: f32,
    /// Y position (baseline, PDF coordinates: larger = higher on page)
    pub y: f32,
    /// Font size in points
    pub font_size: f32,
    /// Base font name (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Whether the font appears to be bold
    pub is_bold: bool,
}

impl TextSpan {
    /// Create a new text span, inferring boldness from the font name.
    pub fn new(text: String, x: f32, y: f32, font_size: f32, font_name: String) -> Self {
        let lower = font_name.to_lowercase();
        let is_bold =
            lower.contains("bold") || lower.contains("black") || lower.contains("heavy");

        Self {
            text,
            x,
            y,
            font_size,
            font_name,
            is_bold,
        }
    }
}

/// A text line: spans on one page sharing a vertical band.
#[derive(Debug, Clone)]
pub struct TextLine {
    /// The spans in this line, sorted by X position
    pub spans: Vec<TextSpan>,
    /// Page number, 1-indexed
    pub page: u32,
    /// Y position (baseline of the first span)
    pub y: f32,
    /// Leftmost X position
    pub x: f32,
    /// Dominant font size (char-weighted across spans)
    pub font_size: f32,
    /// Whether the line is predominantly bold (char-weighted majority)
    pub is_bold: bool,
}

impl TextLine {
    /// Build a line from spans already known to share a vertical band.
    pub fn from_spans(page: u32, mut spans: Vec<TextSpan>) -> Self {
        spans.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

        let total_chars: usize = spans.iter().map(|s| s.text.chars().count()).sum();
        let font_size = if total_chars > 0 {
            let weighted: f32 = spans
                .iter()
                .map(|s| s.font_size * s.text.chars().count() as f32)
                .sum();
            weighted / total_chars as f32
        } else {
            spans.first().map(|s| s.font_size).unwrap_or(0.0)
        };

        let bold_chars: usize = spans
            .iter()
            .filter(|s| s.is_bold)
            .map(|s| s.text.chars().count())
            .sum();
        let is_bold = total_chars > 0 && bold_chars * 2 > total_chars;

        let y = spans.first().map(|s| s.y).unwrap_or(0.0);
        let x = spans.first().map(|s| s.x).unwrap_or(0.0);

        Self {
            spans,
            page,
            y,
            x,
            font_size,
            is_bold,
        }
    }

    /// Combined text of all spans, separated by single spaces where the
    /// span boundaries do not already carry whitespace.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                if let Some(first) = span.text.chars().next() {
                    if !first.is_whitespace() {
                        out.push(' ');
                    }
                }
            }
            out.push_str(&span.text);
        }
        out
    }
}

/// Group a page's spans into lines by vertical band.
///
/// Spans are sorted top-to-bottom (descending Y, since PDF Y grows upward)
/// then left-to-right; a span joins the current line when its baseline is
/// within 30% of its font size of the line's baseline.
pub fn group_into_lines(page: u32, mut spans: Vec<TextSpan>) -> Vec<TextLine> {
    if spans.is_empty() {
        return vec![];
    }

    spans.sort_by(|a, b| {
        let y_cmp = b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal);
        if y_cmp == std::cmp::Ordering::Equal {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            y_cmp
        }
    });

    let mut lines: Vec<TextLine> = Vec::new();
    let mut current: Vec<TextSpan> = Vec::new();
    let mut current_y: Option<f32> = None;

    for span in spans {
        let tolerance = (span.font_size * 0.3).max(1.0);

        match current_y {
            Some(y) if (span.y - y).abs() <= tolerance => current.push(span),
            _ => {
                if !current.is_empty() {
                    lines.push(TextLine::from_spans(page, std::mem::take(&mut current)));
                }
                current_y = Some(span.y);
                current.push(span);
            }
        }
    }

    if !current.is_empty() {
        lines.push(TextLine::from_spans(page, current));
    }

    lines
}
