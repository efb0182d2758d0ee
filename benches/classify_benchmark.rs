//! Benchmarks for heading classification and line cleanup.
//!
//! Run with: cargo bench
//!
//! These benchmarks exercise the classifier on synthetic span data, so
//! they measure the decision logic without PDF parsing overhead.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdftoc::classify::HeadingClassifier;
use pdftoc::parser::{group_into_lines, TextLine, TextSpan};
use pdftoc::render::clean_line;

/// Build a realistic mix of lines: mostly body text with occasional
/// headings and numbered sections.
fn build_lines(count: usize) -> Vec<TextLine> {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let (text, size, font) = match i % 20 {
            0 => (format!("{} Section Heading", i / 20 + 1), 18.0, "Helvetica-Bold"),
            1 => (format!("{}.1 Subsection", i / 20 + 1), 13.0, "Helvetica-Bold"),
            _ => (
                "Body text line with ordinary content for measurement.".to_string(),
                11.0,
                "Helvetica",
            ),
        };
        lines.push(TextLine::from_spans(
            (i / 40 + 1) as u32,
            vec![TextSpan::new(
                text,
                72.0,
                700.0 - (i % 40) as f32 * 14.0,
                size,
                font.to_string(),
            )],
        ));
    }
    lines
}

fn bench_classify(c: &mut Criterion) {
    let lines = build_lines(5_000);

    c.bench_function("classify_5000_lines", |b| {
        b.iter(|| {
            let mut classifier = HeadingClassifier::new();
            let mut headings = 0usize;
            for line in &lines {
                let text = line.text();
                if classifier.classify_line(line, &text).is_some() {
                    headings += 1;
                }
            }
            black_box(headings)
        })
    });
}

fn bench_line_grouping(c: &mut Criterion) {
    let spans: Vec<TextSpan> = (0..2_000)
        .map(|i| {
            TextSpan::new(
                format!("span {}", i),
                (i % 4) as f32 * 120.0,
                800.0 - (i / 4) as f32 * 14.0,
                11.0,
                "Helvetica".to_string(),
            )
        })
        .collect();

    c.bench_function("group_2000_spans", |b| {
        b.iter(|| black_box(group_into_lines(1, spans.clone())))
    });
}

fn bench_cleanup(c: &mut Criterion) {
    let dirty = "  1.1   Backgrooooound \u{FFFD} with   extra    whitespace   ";

    c.bench_function("clean_line", |b| {
        b.iter(|| black_box(clean_line(black_box(dirty))))
    });
}

criterion_group!(benches, bench_classify, bench_line_grouping, bench_cleanup);
criterion_main!(benches);
