//! pagexml: a reader for PAGE-XML document layout descriptions.
//!
//! PAGE-XML describes a scanned page as nested regions and lines, each with
//! a polygon outline and the recognized text. This crate turns such a
//! document into a typed, queryable [`Page`](page::Page), validating every
//! structural precondition on the way in.
//!
//! # Modules
//!
//! - [`geometry`]: Point, box and polygon primitives
//! - [`page`]: Coordinate codec and the Page → TextRegion → TextLine model
//! - [`inspect`]: Summary statistics for a parsed page
//! - [`error`]: Error types for pagexml operations

pub mod error;
pub mod geometry;
pub mod inspect;
pub mod page;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::{GeometryError, PageXmlError, PagexmlError};

use page::{read_page_xml, read_page_xml_with_report, ParseReport, ValidateOptions};

/// The pagexml CLI application.
#[derive(Parser)]
#[command(name = "pagexml")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the text of every line, one per output line.
    Text(FileArgs),

    /// Print every word, one per output line.
    Words(FileArgs),

    /// Check a PAGE XML file for errors and warnings.
    Validate(ValidateArgs),

    /// Show summary statistics for a PAGE XML file.
    Inspect(InspectArgs),
}

/// Arguments shared by the extraction subcommands.
#[derive(clap::Args)]
struct FileArgs {
    /// PAGE XML file to read.
    input: PathBuf,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// PAGE XML file to validate.
    input: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// PAGE XML file to inspect.
    input: PathBuf,

    /// Number of regions to list individually.
    #[arg(long, default_value_t = 20)]
    max_regions: usize,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_output_format(raw: &str) -> Result<OutputFormat, PagexmlError> {
    match raw {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(PagexmlError::UnsupportedFormat(format!(
            "'{}' (supported: text, json)",
            other
        ))),
    }
}

/// Run the pagexml CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PagexmlError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Text(args)) => run_text(args),
        Some(Commands::Words(args)) => run_words(args),
        Some(Commands::Validate(args)) => run_validate(args),
        Some(Commands::Inspect(args)) => run_inspect(args),
        None => {
            println!("pagexml {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("A reader for PAGE XML document layout descriptions.");
            println!();
            println!("Run 'pagexml --help' for usage information.");
            Ok(())
        }
    }
}

fn run_text(args: FileArgs) -> Result<(), PagexmlError> {
    let page = read_page_xml(&args.input)?;
    for text in page.all_text() {
        println!("{}", text);
    }
    Ok(())
}

fn run_words(args: FileArgs) -> Result<(), PagexmlError> {
    let page = read_page_xml(&args.input)?;
    for word in page.all_words() {
        println!("{}", word);
    }
    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), PagexmlError> {
    let format = parse_output_format(&args.output)?;
    let opts = ValidateOptions {
        strict: args.strict,
    };

    let mut report = ParseReport::new();
    let page = read_page_xml_with_report(&args.input, &mut report)?;
    tracing::debug!(
        input = %args.input.display(),
        lines = page.textline_count(),
        warnings = report.warning_count(),
        "validated PAGE XML file"
    );

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "warning_count": report.warning_count(),
                "warnings": report
                    .warnings
                    .iter()
                    .map(|warning| serde_json::json!({
                        "code": warning.code(),
                        "message": warning.to_string(),
                    }))
                    .collect::<Vec<_>>(),
            });
            let rendered = serde_json::to_string_pretty(&value).map_err(PagexmlError::JsonWrite)?;
            println!("{}", rendered);
        }
        OutputFormat::Text => print!("{}", report),
    }

    if report.passes(&opts) {
        Ok(())
    } else {
        Err(PagexmlError::ValidationFailed {
            warning_count: report.warning_count(),
            report,
        })
    }
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), PagexmlError> {
    let format = parse_output_format(&args.output)?;
    let page = read_page_xml(&args.input)?;

    let opts = inspect::InspectOptions {
        max_regions: args.max_regions,
    };
    let report = inspect::inspect_page(&page, &opts);

    match format {
        OutputFormat::Json => {
            let rendered =
                serde_json::to_string_pretty(&report).map_err(PagexmlError::JsonWrite)?;
            println!("{}", rendered);
        }
        OutputFormat::Text => print!("{}", report),
    }

    Ok(())
}
