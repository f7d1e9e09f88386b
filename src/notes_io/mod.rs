//! Note I/O operations: the storage layout on disk and retrieval over it.
//!
//! This module contains all filesystem operations for notes: creating a note
//! file (with its tag symlinks) under the per-day layout, and listing notes
//! back out in tag mode or date mode. The day-selection policy itself is
//! pure logic in [`crate::notes_core`]; this module only walks directories
//! and streams file contents.
//!
//! The on-disk layout is:
//!
//! ```text
//! <root>/
//!   <YYYY-MM-DD>/
//!     00, 01, 02, ...        # note files
//!   tags/
//!     <tagname>/
//!       <YYYY-MM-DD>-<NN>    # symlink -> ../../<YYYY-MM-DD>/<NN>
//! ```

use crate::constants::TAGS_DIR_NAME;
use crate::errors::{ShowError, StorageError};
use crate::notes_core::{
    day_dir_name, parse_day, render_note, sequence_label, split_tags, tag_link_name, DayAction,
    DayWindow,
};
use chrono::{DateTime, Local, NaiveDate};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lists the entry names of a directory, sorted ascending by name.
///
/// A missing directory reads as zero entries so that first use (no notes
/// yet, no links for a tag yet) is graceful; any other error is returned.
/// Sorting makes iteration order deterministic regardless of what order the
/// platform hands entries back in.
fn list_sorted(dir: &Path) -> io::Result<Vec<OsString>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut names = Vec::new();
    for entry in entries {
        names.push(entry?.file_name());
    }
    names.sort();
    Ok(names)
}

/// Creates a new note under `root` and links it under each of its tags.
///
/// The note is stored as `<root>/<YYYY-MM-DD>/<NN>` where the day comes from
/// `now` and `NN` is the count of entries already in that day's directory,
/// zero-padded to two digits. The stored content is a single line,
/// `<timestamp>|<body>|tags: <tags_csv>\n`. For each non-empty tag in
/// `tags_csv` a symlink named `<day>-<NN>` is created in
/// `<root>/tags/<tag>/`, pointing at the note via the relative path
/// `../../<day>/<NN>`.
///
/// The caller captures `now` once and passes it down, so the day directory
/// and the stored timestamp always agree.
///
/// Sequence assignment is a plain count with no locking; two processes
/// creating notes in the same day directory at once can collide. The tool
/// assumes single-process access to its root.
///
/// # Returns
///
/// The path of the created note file.
///
/// # Errors
///
/// Each distinct filesystem operation maps to its own [`StorageError`]
/// variant naming the operation and target path: listing the day directory
/// (a missing directory is zero entries, not an error), creating the day
/// directory, creating the note file, writing its contents, creating a tag
/// directory, and creating a tag symlink.
pub fn create_note(
    root: &Path,
    body: &str,
    tags_csv: &str,
    now: &DateTime<Local>,
) -> Result<PathBuf, StorageError> {
    let day = day_dir_name(now.date_naive());
    let day_dir = root.join(&day);

    let existing = list_sorted(&day_dir).map_err(|e| StorageError::ListDayDir {
        path: day_dir.clone(),
        source: e,
    })?;
    let sequence = sequence_label(existing.len());

    fs::create_dir_all(&day_dir).map_err(|e| StorageError::CreateDayDir {
        path: day_dir.clone(),
        source: e,
    })?;

    let note_path = day_dir.join(&sequence);
    let mut file = File::create(&note_path).map_err(|e| StorageError::CreateNoteFile {
        path: note_path.clone(),
        source: e,
    })?;
    file.write_all(render_note(now, body, tags_csv).as_bytes())
        .map_err(|e| StorageError::WriteNote {
            path: note_path.clone(),
            source: e,
        })?;
    debug!("Created note {}", note_path.display());

    for tag in split_tags(tags_csv) {
        let tag_dir = root.join(TAGS_DIR_NAME).join(tag);
        fs::create_dir_all(&tag_dir).map_err(|e| StorageError::CreateTagDir {
            tag: tag.to_string(),
            path: tag_dir.clone(),
            source: e,
        })?;

        // Relative target: two levels up from the tag directory, then into
        // the day directory. Keeps the whole root relocatable.
        let target = PathBuf::from("..").join("..").join(&day).join(&sequence);
        let link = tag_dir.join(tag_link_name(&day, &sequence));
        symlink(&target, &link).map_err(|e| StorageError::LinkTag {
            tag: tag.to_string(),
            path: link.clone(),
            source: e,
        })?;
        debug!("Linked note under tag '{}' as {}", tag, link.display());
    }

    Ok(note_path)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// Prints every file in `dir` to `out`, newest name first.
///
/// Entries are read in reverse name order (note files are named so that
/// ascending name order is creation order) and each file's bytes are
/// written to `out` verbatim, with no added formatting or delimiters. A
/// missing directory prints nothing.
///
/// # Errors
///
/// Returns [`ShowError::ListDir`] if the directory cannot be listed,
/// [`ShowError::ReadNote`] naming the file that could not be read, or
/// [`ShowError::PrintNote`] if writing to `out` fails. The first failure
/// aborts the remaining entries.
pub fn print_dir<W: Write>(dir: &Path, out: &mut W) -> Result<(), ShowError> {
    let names = list_sorted(dir).map_err(|e| ShowError::ListDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for name in names.iter().rev() {
        let path = dir.join(name);
        let contents = fs::read(&path).map_err(|e| ShowError::ReadNote {
            path: path.clone(),
            source: e,
        })?;
        out.write_all(&contents).map_err(|e| ShowError::PrintNote {
            path: path.clone(),
            source: e,
        })?;
    }
    Ok(())
}

/// Shows notes from `root`, writing their raw contents to `out`.
///
/// Two mutually exclusive modes:
///
/// - **Tag mode** (`tags_csv` non-empty): for each comma-separated tag, in
///   the order given, print `<root>/tags/<tag>` via [`print_dir`]. Empty
///   segments are NOT skipped here; an empty tag name reads the `tags`
///   directory itself. The first failure aborts the remaining tags.
/// - **Date mode** (`tags_csv` empty): scan the day directories under
///   `root` newest-first, skipping the reserved `tags` entry. With
///   `from_day` set, print every day back to it and stop at the first older
///   one; without it, print today's notes plus a fallback to the most
///   recent earlier day (see [`DayWindow`]). A missing root prints nothing.
///
/// `today` is captured once by the caller; tests inject fixed dates.
///
/// # Errors
///
/// Returns a [`ShowError`] for listing and read failures, for a `from_day`
/// that does not parse as `YYYY-MM-DD`, and for any root entry whose name
/// is not a valid day directory.
pub fn show_notes<W: Write>(
    root: &Path,
    from_day: Option<&str>,
    tags_csv: &str,
    today: NaiveDate,
    out: &mut W,
) -> Result<(), ShowError> {
    if !tags_csv.is_empty() {
        for tag in tags_csv.split(',') {
            print_dir(&root.join(TAGS_DIR_NAME).join(tag), out)?;
        }
        return Ok(());
    }

    let window = match from_day {
        Some(value) => {
            let day = parse_day(value).map_err(|e| ShowError::BadFromDay {
                value: value.to_string(),
                source: e,
            })?;
            DayWindow::since(today, day)
        }
        None => DayWindow::recent(today),
    };

    let names = list_sorted(root).map_err(|e| ShowError::ListDir {
        path: root.to_path_buf(),
        source: e,
    })?;

    for name in names.iter().rev() {
        let name_str = name.to_string_lossy();
        if name_str == TAGS_DIR_NAME {
            continue;
        }
        let date = parse_day(&name_str).map_err(|e| ShowError::BadDayDir {
            name: name_str.into_owned(),
            source: e,
        })?;

        match window.decide(date) {
            DayAction::Skip => continue,
            DayAction::Stop => break,
            DayAction::Print => print_dir(&root.join(name), out)?,
            DayAction::PrintThenStop => {
                print_dir(&root.join(name), out)?;
                break;
            }
        }
    }
    Ok(())
}
