//! Rendering module: line cleanup and JSON output.

mod cleanup;
mod json;

pub use cleanup::clean_line;
pub use json::{to_json, JsonFormat};
