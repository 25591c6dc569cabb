//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "md2html",
    version,
    about = "Convert a Markdown file into a styled HTML page using a remote renderer."
)]
pub struct Cli {
    /// The Markdown file to convert.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Overwrite existing output files without asking.
    #[arg(short, long)]
    pub force: bool,

    /// Inline the CSS into the HTML page instead of writing style.css.
    #[arg(short, long)]
    pub embed: bool,

    /// Print a line for every file written.
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory to write into. [default: the input file's directory]
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// TOML file overriding endpoints and assets. [default: $MD2HTML_CONFIG]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
