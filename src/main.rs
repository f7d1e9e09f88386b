/*!
# Jot - A Tiny Note-Taking Tool

Jot appends timestamped, optionally tagged text notes into a per-day
directory layout, and lists them back out filtered by day range or tag.

This file contains the main application flow, coordinating the various
components to implement the note functionality.

## Usage

```
jot [OPTIONS] [WORDS]...

Arguments:
  [WORDS]...  The note text; with no words given, existing notes are shown

Options:
      --root-dir <ROOT_DIR>  Root directory for notes (default: $JOT_DIR, else ~/.notes)
  -t, --tags <TAGS>          Comma-separated tags
      --from-day <FROM_DAY>  Show all notes since given day (format: YYYY-MM-DD)
  -h, --help                 Print help information
  -V, --version              Print version information
```

## Configuration

The notes root directory can also be set with the `JOT_DIR` environment
variable; logging verbosity is controlled with `RUST_LOG`.
*/

use chrono::Local;
use jot::cli::CliArgs;
use jot::config::Config;
use jot::errors::AppResult;
use jot::notes_io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the jot application.
///
/// Initializes logging, then runs the application flow and maps any error
/// to a logged message and a nonzero exit status. Logs go to stderr so that
/// stdout carries only note contents.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// Runs one invocation: parse arguments, resolve configuration, and either
/// create a note (positional words given) or show notes (no words).
///
/// The current local time is captured once here and passed down, so the
/// day directory, the stored timestamp, and the show cutoff all agree.
///
/// # Errors
///
/// Returns an error for configuration failures, for any filesystem failure
/// on the creation path, and for listing/read/parse failures on the show
/// path.
fn run() -> AppResult<()> {
    let args = CliArgs::parse_args();
    debug!("CLI arguments: {:?}", args);

    let config = Config::resolve(args.root_dir.as_deref())?;
    debug!("Notes root: {:?}", config.notes_root);

    let now = Local::now();

    match args.body() {
        Some(body) => {
            let path = notes_io::create_note(&config.notes_root, &body, &args.tags, &now)?;
            info!("Created note {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            notes_io::show_notes(
                &config.notes_root,
                args.from_day.as_deref(),
                &args.tags,
                now.date_naive(),
                &mut stdout,
            )?;
        }
    }
    Ok(())
}
