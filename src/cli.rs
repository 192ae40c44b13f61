use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Translate the caption text of an SRT subtitle file with translate-shell.
///
/// The original file is kept next to the result with a trailing underscore
/// (`movie.srt_`).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subtitle file to translate
    pub file: PathBuf,

    /// Translation direction as "from:to", e.g. "en:fr" [default: en:ru]
    pub direction: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of translator processes running at once (unbounded by default)
    #[arg(short, long)]
    pub jobs: Option<NonZeroUsize>,

    /// Translator binary, overrides the configuration file
    #[arg(long)]
    pub translator: Option<String>,
}
