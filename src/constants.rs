//! Constants used throughout the application.
//!
//! This module contains all constants used in the jot application, organized
//! into logical groups. Having constants centralized makes them easier to
//! find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "jot";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A tiny filesystem-backed note-taking tool";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the notes root directory.
pub const ENV_VAR_JOT_DIR: &str = "JOT_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for notes within the user's home directory.
pub const DEFAULT_NOTES_SUBDIR: &str = ".notes";

// File System Layout
/// Name of the reserved directory holding the tag symlink index. A root
/// entry with this name is never treated as a day directory.
pub const TAGS_DIR_NAME: &str = "tags";
/// Width of zero-padded note sequence numbers within a day directory.
/// Days with 100+ notes produce wider names; their lexicographic order
/// then diverges from numeric order, a known and accepted edge case.
pub const SEQUENCE_WIDTH: usize = 2;

// Date/Time Formats
/// Date format string for day directory names (YYYY-MM-DD).
pub const DAY_FORMAT: &str = "%Y-%m-%d";
/// Timestamp format string written at the start of every note line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
