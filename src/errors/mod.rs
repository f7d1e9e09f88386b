//! Error handling utilities for the jot application.
//!
//! This module provides the central error type `AppError` which represents
//! all possible error conditions that might occur in the application, the
//! domain-specific `StorageError` and `ShowError` enums, and the convenience
//! type alias `AppResult` for functions that can return these errors.

use crate::notes_core::DayNameError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur while creating a note.
///
/// Each variant corresponds to one distinct filesystem operation on the
/// creation path and captures the operation's target path along with the
/// underlying I/O error, so a failure message always names both.
///
/// # Examples
///
/// ```
/// use jot::errors::StorageError;
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
///
/// let error = StorageError::CreateDayDir {
///     path: PathBuf::from("/notes/2024-01-15"),
///     source: io::Error::new(ErrorKind::PermissionDenied, "permission denied"),
/// };
///
/// let message = format!("{}", error);
/// assert!(message.contains("day directory"));
/// assert!(message.contains("2024-01-15"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// Error when listing the current day's directory to determine the next
    /// sequence number. A missing directory is not an error (zero entries);
    /// this variant covers every other listing failure.
    #[error("Failed to list day directory {path}: {source}")]
    ListDayDir {
        /// The day directory that could not be listed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when creating the day directory for a new note.
    #[error("Failed to create day directory {path}: {source}")]
    CreateDayDir {
        /// The day directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when creating the note file itself.
    #[error("Failed to create note file {path}: {source}")]
    CreateNoteFile {
        /// The note file that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when writing the note contents to an already created file.
    #[error("Failed to write note contents to {path}: {source}")]
    WriteNote {
        /// The note file that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when creating a tag directory under `tags/`.
    #[error("Failed to create tag '{tag}' directory {path}: {source}")]
    CreateTagDir {
        /// The tag whose directory could not be created
        tag: String,
        /// The tag directory path
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when creating the symlink that indexes a note under a tag.
    #[error("Failed to link note to tag '{tag}' as {path}: {source}")]
    LinkTag {
        /// The tag whose link could not be created
        tag: String,
        /// The symlink path that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents specific error cases that can occur while showing notes.
///
/// These errors are returned to the caller rather than terminating the
/// process, so the command layer decides how to handle them. "Directory
/// not found" is never an error on the show path; it reads as zero notes
/// so that first use (no notes yet) is graceful.
#[derive(Debug, Error)]
pub enum ShowError {
    /// Error when listing a directory of notes or tag links.
    #[error("Failed to list {path}: {source}")]
    ListDir {
        /// The directory that could not be listed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when reading the contents of a single note file.
    #[error("Failed to read {path}: {source}")]
    ReadNote {
        /// The note file (or tag link) that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when writing note contents to the output sink.
    #[error("Failed to print note {path}: {source}")]
    PrintNote {
        /// The note file whose contents could not be written out
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when a root entry is not a canonical `YYYY-MM-DD` day
    /// directory name. Malformed directory names are not tolerated.
    #[error("Failed to parse date from directory name '{name}': {source}")]
    BadDayDir {
        /// The offending directory name
        name: String,
        /// The underlying day name error
        #[source]
        source: DayNameError,
    },

    /// Error when the `--from-day` value is not a canonical `YYYY-MM-DD`
    /// date.
    #[error("Failed to parse from-day '{value}': {source}")]
    BadFromDay {
        /// The value given on the command line
        value: String,
        /// The underlying day name error
        #[source]
        source: DayNameError,
    },
}

/// Represents all possible errors that can occur in the jot application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use jot::errors::AppError;
///
/// let error = AppError::Config("Notes directory cannot be empty".to_string());
/// assert_eq!(
///     format!("{}", error),
///     "Configuration error: Notes directory cannot be empty"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to application configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors on the note creation path.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Errors on the note retrieval path.
    #[error(transparent)]
    Show(#[from] ShowError),

    /// General I/O errors not tied to a specific operation.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized Result type for jot operations.
///
/// This type alias is used throughout the application for functions that
/// can return an `AppError`.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_storage_error_messages_name_operation_and_path() {
        let err = StorageError::ListDayDir {
            path: PathBuf::from("/notes/2024-01-15"),
            source: io::Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("list day directory"));
        assert!(msg.contains("/notes/2024-01-15"));

        let err = StorageError::LinkTag {
            tag: "work".to_string(),
            path: PathBuf::from("/notes/tags/work/2024-01-15-00"),
            source: io::Error::new(ErrorKind::AlreadyExists, "exists"),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("'work'"));
        assert!(msg.contains("2024-01-15-00"));
    }

    #[test]
    fn test_show_error_bad_day_dir_names_directory() {
        let day_err = crate::notes_core::parse_day("junk").unwrap_err();
        let err = ShowError::BadDayDir {
            name: "junk".to_string(),
            source: day_err,
        };
        assert!(format!("{}", err).contains("'junk'"));
    }

    #[test]
    fn test_app_error_wraps_domain_errors_transparently() {
        let storage = StorageError::CreateDayDir {
            path: PathBuf::from("/notes/2024-01-15"),
            source: io::Error::new(ErrorKind::Other, "disk full"),
        };
        let expected = format!("{}", storage);
        let app: AppError = storage.into();
        assert_eq!(format!("{}", app), expected);
    }
}
