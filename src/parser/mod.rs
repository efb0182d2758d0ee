//! PDF parsing module.

mod layout;
mod pdf_parser;

pub use layout::{group_into_lines, TextLine, TextSpan};
pub use pdf_parser::PdfParser;
