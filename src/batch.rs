//! Batch processing: scan an input directory, write one JSON sidecar per
//! PDF into an output directory.
//!
//! Individual document failures are logged warnings; the batch keeps
//! going. Only an unusable input or output directory fails the batch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::outline::extract_outline;
use crate::parser::PdfParser;
use crate::render::{to_json, JsonFormat};

/// Counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents processed and written
    pub processed: usize,
    /// Documents skipped due to errors
    pub failed: usize,
    /// Total PDF files found
    pub total: usize,
}

/// List the `*.pdf` files in a directory, sorted by name.
///
/// Extension matching is case-insensitive; subdirectories are not entered.
pub fn scan_input_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Process one PDF: parse, extract the outline, and write
/// `<stem>.json` into `output_dir`.
pub fn process_file(input: &Path, output_dir: &Path, format: JsonFormat) -> Result<PathBuf> {
    let parser = PdfParser::open(input)?;
    let outline = extract_outline(&parser)?;
    let json = to_json(&outline, format)?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string());
    let dest = output_dir.join(format!("{}.json", stem));

    write_atomic(&dest, json.as_bytes())?;
    Ok(dest)
}

/// Process every PDF in `input_dir`, writing sidecars into `output_dir`.
///
/// Creates the output directory if needed. Returns the summary counts;
/// per-document failures are logged, not returned.
pub fn process_dir<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    format: JsonFormat,
) -> Result<BatchSummary> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let files = scan_input_dir(input_dir)?;
    let mut summary = BatchSummary {
        total: files.len(),
        ..BatchSummary::default()
    };

    for file in &files {
        match process_file(file, output_dir, format) {
            Ok(dest) => {
                log::info!("{} -> {}", file.display(), dest.display());
                summary.processed += 1;
            }
            Err(e) => {
                log::warn!("Skipping {}: {}", file.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Write via a temp file in the same directory plus rename, so a crash
/// mid-write never leaves a truncated `.json` behind.
fn write_atomic(dest: &Path, data: &[u8]) -> Result<()> {
    let tmp = dest.with_extension("json.tmp");
    fs::write(&tmp, data)?;
    if let Err(e) = fs::rename(&tmp, dest) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}
