//! Core note logic without I/O operations.
//!
//! This module contains pure logic for the on-disk note layout and for the
//! day-selection policy of the show command: day directory naming, sequence
//! labels, note line rendering, tag splitting, and the `DayWindow` type that
//! decides which day directories to print. Nothing here touches the
//! filesystem, so all of it is unit-testable with plain values.

use crate::constants::{DAY_FORMAT, SEQUENCE_WIDTH, TIMESTAMP_FORMAT};
use chrono::{DateTime, Duration, Local, NaiveDate};
use thiserror::Error;

/// Formats a date as a day directory name (`YYYY-MM-DD`).
pub fn day_dir_name(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Error from [`parse_day`]: the name is not a canonical day name.
#[derive(Debug, Error)]
pub enum DayNameError {
    /// The name does not parse as a date at all.
    #[error(transparent)]
    Unparseable(#[from] chrono::ParseError),

    /// The name parses as a date but is not the canonical zero-padded
    /// spelling (for example `2024-1-5`). Such names would also break the
    /// lexicographic date ordering the newest-first scan relies on.
    #[error("date is not in zero-padded YYYY-MM-DD form")]
    NotCanonical,
}

/// Parses a day directory name back into a date.
///
/// Used when scanning the notes root (every entry that is not the reserved
/// `tags` directory must be a valid day name) and for `--from-day` values.
/// Only the canonical zero-padded `YYYY-MM-DD` spelling is accepted: a name
/// like `2024-1-5` parses as a date but is rejected, since the layout never
/// produces it and it would sort out of date order.
pub fn parse_day(name: &str) -> Result<NaiveDate, DayNameError> {
    let date = NaiveDate::parse_from_str(name, DAY_FORMAT)?;
    if day_dir_name(date) != name {
        return Err(DayNameError::NotCanonical);
    }
    Ok(date)
}

/// Formats a note's sequence number as a zero-padded file name.
///
/// The sequence number equals the count of entries already present in the
/// day directory, so files are named `00`, `01`, ... in creation order and
/// sort correctly as strings within a day.
pub fn sequence_label(count: usize) -> String {
    format!("{:0width$}", count, width = SEQUENCE_WIDTH)
}

/// Renders the single stored line for a note.
///
/// The format is `<timestamp>|<body>|tags: <csv>\n`. Neither the body nor
/// the tags are escaped: a literal `|` passes through unchanged, since the
/// stored content is only ever displayed raw, never re-parsed.
pub fn render_note(now: &DateTime<Local>, body: &str, tags_csv: &str) -> String {
    format!(
        "{}|{}|tags: {}\n",
        now.format(TIMESTAMP_FORMAT),
        body,
        tags_csv
    )
}

/// Splits a comma-separated tag list, skipping empty segments.
///
/// Leading, trailing, or doubled commas (and the empty string) therefore
/// produce no tags. Used on the creation path; the show path deliberately
/// does not skip empty segments (see `notes_io::show_notes`).
pub fn split_tags(tags_csv: &str) -> impl Iterator<Item = &str> {
    tags_csv.split(',').filter(|tag| !tag.is_empty())
}

/// The name of a tag link for a note: `<YYYY-MM-DD>-<NN>`.
///
/// Tag directories are flat, so the link name carries the day to keep links
/// from different days distinct and lexicographically ordered by date.
pub fn tag_link_name(day: &str, sequence: &str) -> String {
    format!("{}-{}", day, sequence)
}

/// What to do with a day directory while scanning newest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAction {
    /// Print this directory's notes and keep scanning.
    Print,
    /// Print this directory's notes, then stop the scan.
    PrintThenStop,
    /// Skip this directory and keep scanning.
    Skip,
    /// Stop the scan without printing this directory.
    Stop,
}

/// Day-selection policy for date-mode show.
///
/// Day directories are visited newest-first; for each one `decide` says
/// whether to print it, skip it, or end the scan. Two policies exist:
///
/// - **Since** (`--from-day` given): print every day until one falls
///   strictly before the cutoff, then stop.
/// - **Recent** (no `--from-day`): show today's notes, falling back to the
///   most recent earlier day. Future-dated directories are skipped; the
///   first non-future day is printed; the scan stops right after printing
///   unless that day was today, in which case the next older day is printed
///   too before stopping. On a day with no notes yet this shows the
///   previous populated day, in addition to any match for today.
///
/// The two-tier Recent behavior is deliberate; do not simplify it, since
/// that would change observable output.
///
/// # Examples
///
/// ```
/// use jot::notes_core::{DayAction, DayWindow};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let window = DayWindow::recent(today);
///
/// assert_eq!(window.decide(today), DayAction::Print);
/// let yesterday = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
/// assert_eq!(window.decide(yesterday), DayAction::PrintThenStop);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DayWindow {
    today: NaiveDate,
    last_day: NaiveDate,
    since: bool,
}

impl DayWindow {
    /// Policy for `--from-day`: print every day down to `from_day` inclusive.
    pub fn since(today: NaiveDate, from_day: NaiveDate) -> Self {
        DayWindow {
            today,
            last_day: from_day,
            since: true,
        }
    }

    /// Default policy: today's notes plus a fallback to the most recent
    /// earlier day. The cutoff is yesterday.
    pub fn recent(today: NaiveDate) -> Self {
        DayWindow {
            today,
            last_day: today - Duration::days(1),
            since: false,
        }
    }

    /// Decides what to do with a day directory dated `date`.
    ///
    /// Must be called with dates in descending order; the returned
    /// `Stop`/`PrintThenStop` actions assume no newer directory follows.
    pub fn decide(&self, date: NaiveDate) -> DayAction {
        if self.since {
            if date < self.last_day {
                DayAction::Stop
            } else {
                DayAction::Print
            }
        } else if date > self.last_day && date != self.today {
            // Future-dated directory; only possible with a skewed clock or
            // hand-made directories.
            DayAction::Skip
        } else if date == self.today {
            DayAction::Print
        } else {
            DayAction::PrintThenStop
        }
    }
}
