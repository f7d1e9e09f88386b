use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::Parser;

/// A tiny filesystem-backed note-taking tool
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Root directory for notes (default: $JOT_DIR, else ~/.notes)
    #[clap(long)]
    pub root_dir: Option<String>,

    /// Comma-separated tags: attached to the note when creating, used as a
    /// filter when showing
    #[clap(short = 't', long = "tags", default_value = "")]
    pub tags: String,

    /// Show all notes since the given day (format: YYYY-MM-DD)
    #[clap(long)]
    pub from_day: Option<String>,

    /// The note text; with no words given, existing notes are shown instead
    #[clap(value_name = "WORDS")]
    pub words: Vec<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// The note body: positional words joined with single spaces, or `None`
    /// when no words were given (show mode).
    pub fn body(&self) -> Option<String> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.join(" "))
        }
    }
}
