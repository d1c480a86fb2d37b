use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "linediff",
    about = "Compare two text documents line by line",
    version,
)]
pub struct Cli {
    /// The old document
    pub old: PathBuf,

    /// The new document
    pub new: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "unified")]
    pub format: OutputFormat,

    /// Unchanged lines of context around each hunk (unified output)
    #[arg(short, long, default_value = "3")]
    pub context: usize,

    /// Minimum similarity for a remove/add pair to count as modified
    #[arg(long, default_value = "0.5")]
    pub threshold: f64,

    /// Reject documents larger than this many lines
    #[arg(long, default_value = "500000")]
    pub max_lines: usize,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Unified,
    Json,
    Summary,
}
