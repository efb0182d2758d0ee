//! # pdftoc
//!
//! Extracts a hierarchical outline (title + headings) from PDF documents
//! and emits it as JSON, one sidecar per input file.
//!
//! Heading detection is font-metric driven: lines are classified against
//! fixed size/boldness thresholds, with a numbering-pattern rule that
//! promotes numbered section lines. This is not a layout-analysis or OCR
//! system; scanned images, multi-column reconstruction, and tables are
//! out of scope.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdftoc::{extract_file, render, JsonFormat};
//!
//! fn main() -> pdftoc::Result<()> {
//!     let outline = extract_file("document.pdf")?;
//!     println!("{}", render::to_json(&outline, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! Batch mode processes a directory, writing `<stem>.json` per input:
//!
//! ```no_run
//! use pdftoc::{batch, JsonFormat};
//!
//! let summary = batch::process_dir("input", "output", JsonFormat::Pretty)?;
//! println!("{}/{} processed", summary.processed, summary.total);
//! # Ok::<(), pdftoc::Error>(())
//! ```

pub mod batch;
pub mod classify;
pub mod detect;
pub mod error;
pub mod model;
pub mod outline;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use batch::{process_dir, BatchSummary};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use model::{DocumentOutline, Heading, HeadingLevel, Metadata};
pub use parser::PdfParser;
pub use render::JsonFormat;

use std::path::Path;

/// Extract the outline from a PDF file.
///
/// # Example
///
/// ```no_run
/// use pdftoc::extract_file;
///
/// let outline = extract_file("document.pdf").unwrap();
/// println!("{}: {} headings", outline.title, outline.outline.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentOutline> {
    let parser = PdfParser::open(path)?;
    outline::extract_outline(&parser)
}

/// Extract the outline from PDF bytes.
pub fn extract_bytes(data: &[u8]) -> Result<DocumentOutline> {
    let parser = PdfParser::from_bytes(data)?;
    outline::extract_outline(&parser)
}

/// Read a PDF file's metadata without extracting the outline.
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<Metadata> {
    let parser = PdfParser::open(path)?;
    Ok(parser.metadata())
}
