use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustoc")]
#[command(about = "Generate a table of contents from an HTML document", long_about = None)]
#[command(version)]
pub struct Cli {
    /// HTML file to read ("-" or omitted reads stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Headings to collect, e.g. "h2, h3" (defaults to h1..h4)
    #[arg(short, long, value_name = "SELECTOR")]
    pub selector: Option<String>,

    /// List tag to emit: "ordered" or "unordered"
    #[arg(short, long, value_name = "TYPE")]
    pub list_type: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Configuration file (YAML)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Supported output formats for the generated outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Nested HTML lists
    Html,
    /// Indented markdown list
    Markdown,
    /// Outline tree as JSON
    Json,
}
