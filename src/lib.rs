/*!
# Jot

Jot is a tiny note-taking tool that keeps plain text notes on disk, one file
per note, grouped into per-day directories. Tags are a secondary index built
from symbolic links, so the whole store stays browsable with ordinary shell
tools.

## Core Features

- Append a timestamped note for today with an optional tag list
- Show today's notes (falling back to the most recent earlier day)
- Show all notes since a given day, newest first
- Show notes carrying a given tag

## Architecture

The codebase follows a modular architecture with clear separation of
concerns:

- `cli`: Command-line interface handling using clap
- `config`: Notes root resolution from flags and environment
- `errors`: Error handling infrastructure
- `notes_core`: Pure layout and day-selection logic, no I/O
- `notes_io`: Filesystem operations for creating and showing notes

## Usage Example

```rust,no_run
use chrono::Local;
use jot::{notes_io, Config};

fn main() -> jot::AppResult<()> {
    let config = Config::resolve(None)?;
    let now = Local::now();

    // Append a note for today
    notes_io::create_note(&config.notes_root, "pick up groceries", "errands", &now)?;

    // Print today's notes to stdout
    let mut stdout = std::io::stdout();
    notes_io::show_notes(&config.notes_root, None, "", now.date_naive(), &mut stdout)?;
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Pure note layout and day-selection logic
pub mod notes_core;
/// Filesystem operations for creating and showing notes
pub mod notes_io;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult, ShowError, StorageError};
