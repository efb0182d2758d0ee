//! pdftoc CLI - PDF outline extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdftoc::{batch, render, JsonFormat, PdfParser};

#[derive(Parser)]
#[command(name = "pdftoc")]
#[command(version)]
#[command(about = "Extract PDF document outlines (title + headings) to JSON", long_about = None)]
struct Cli {
    /// Input directory of PDF files
    #[arg(value_name = "INPUT_DIR")]
    input: Option<PathBuf>,

    /// Output directory for JSON sidecars
    #[arg(value_name = "OUTPUT_DIR")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a directory of PDFs, one JSON sidecar per input
    Batch {
        /// Input directory of PDF files
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output directory for JSON sidecars
        #[arg(value_name = "OUTPUT_DIR")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract the outline of a single PDF
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Batch {
            input,
            output,
            compact,
        }) => cmd_batch(&input, &output, json_format(compact)),
        Some(Commands::Extract {
            input,
            output,
            compact,
        }) => cmd_extract(&input, output.as_deref(), json_format(compact)),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match (cli.input, cli.output) {
            // Default behavior: batch over two directories
            (Some(input), Some(output)) => cmd_batch(&input, &output, json_format(cli.compact)),
            _ => {
                println!("{}", "Usage: pdftoc <INPUT_DIR> <OUTPUT_DIR>".yellow());
                println!("       pdftoc --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_batch(
    input: &Path,
    output: &Path,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output)?;

    let files = batch::scan_input_dir(input)?;
    if files.is_empty() {
        println!("{}", "No PDF files found in input directory".yellow());
        return Ok(());
    }

    println!("Found {} PDF files to process", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut processed = 0usize;
    for file in &files {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        pb.set_message(name.clone());

        match batch::process_file(file, output, format) {
            Ok(dest) => {
                processed += 1;
                pb.println(format!(
                    "{} {} -> {}",
                    "✓".green(),
                    name,
                    dest.file_name().unwrap_or_default().to_string_lossy()
                ));
            }
            Err(e) => {
                pb.println(format!("{} {}: {}", "✗".red(), name, e));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    println!(
        "\n{} {}/{} files",
        "Completed:".green().bold(),
        processed,
        files.len()
    );

    // Per-file failures are not fatal to the batch
    Ok(())
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    format: JsonFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let outline = pdftoc::extract_file(input)?;
    let json = render::to_json(&outline, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let parser = PdfParser::open(input)?;
    let metadata = parser.metadata();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), parser.version());
    println!("{}: {}", "Pages".bold(), metadata.page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if metadata.encrypted { "Yes" } else { "No" }
    );

    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref creator) = metadata.creator {
        println!("{}: {}", "Creator".bold(), creator);
    }
    if let Some(ref producer) = metadata.producer {
        println!("{}: {}", "Producer".bold(), producer);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    let outline = pdftoc::outline::extract_outline(&parser)?;
    println!();
    println!("{}", "Outline".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Inferred title".bold(), outline.title);
    println!("{}: {}", "Headings".bold(), outline.outline.len());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdftoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("PDF outline extraction tool");
    println!();
    println!("License: MIT");
}
