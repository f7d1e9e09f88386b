//! Configuration management for the jot application.
//!
//! This module resolves the notes root directory from the command line and
//! environment, with a sensible default. Paths are expanded with
//! `shellexpand` so `~` and environment variable references work.
//!
//! # Resolution order
//!
//! 1. The `--root-dir` command-line flag
//! 2. The `JOT_DIR` environment variable
//! 3. `~/.notes` (via `HOME`)

use crate::constants::{DEFAULT_NOTES_SUBDIR, ENV_VAR_HOME, ENV_VAR_JOT_DIR};
use crate::errors::{AppError, AppResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the jot application.
///
/// Holds the single setting the tool needs: the root directory under which
/// day directories and the tag index live.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use jot::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     notes_root: PathBuf::from("/path/to/notes"),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory where notes are stored.
    pub notes_root: PathBuf,
}

impl Config {
    /// Resolves the configuration from the given flag value and the
    /// environment.
    ///
    /// The `--root-dir` flag takes precedence over the `JOT_DIR`
    /// environment variable, which takes precedence over the default of
    /// `.notes` in the user's home directory. Flag and environment values
    /// are shell-expanded, so `--root-dir '~/my-notes'` works.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if path expansion fails (for example an
    /// undefined variable reference in the value), or if no value is given
    /// and `HOME` is unset or empty.
    pub fn resolve(root_dir_flag: Option<&str>) -> AppResult<Self> {
        let notes_root = match root_dir_flag
            .map(str::to_string)
            .or_else(|| env::var(ENV_VAR_JOT_DIR).ok().filter(|v| !v.is_empty()))
        {
            Some(raw) => {
                let expanded = shellexpand::full(&raw).map_err(|e| {
                    AppError::Config(format!("Failed to expand notes root '{}': {}", raw, e))
                })?;
                PathBuf::from(expanded.as_ref())
            }
            None => {
                let home = env::var(ENV_VAR_HOME)
                    .ok()
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| {
                        AppError::Config(format!(
                            "Failed to determine home directory: {} is not set",
                            ENV_VAR_HOME
                        ))
                    })?;
                PathBuf::from(home).join(DEFAULT_NOTES_SUBDIR)
            }
        };

        let config = Config { notes_root };
        config.validate()?;
        Ok(config)
    }

    /// Validates the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the notes root is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.notes_root.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Notes root directory cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_flag_takes_precedence() {
        let config = Config::resolve(Some("/tmp/flag-notes")).expect("Failed to resolve");
        assert_eq!(config.notes_root, PathBuf::from("/tmp/flag-notes"));
    }

    #[test]
    #[serial]
    fn test_env_var_used_when_no_flag() {
        env::set_var(ENV_VAR_JOT_DIR, "/tmp/env-notes");
        let config = Config::resolve(None).expect("Failed to resolve");
        env::remove_var(ENV_VAR_JOT_DIR);
        assert_eq!(config.notes_root, PathBuf::from("/tmp/env-notes"));
    }

    #[test]
    #[serial]
    fn test_default_is_dot_notes_under_home() {
        env::remove_var(ENV_VAR_JOT_DIR);
        env::set_var(ENV_VAR_HOME, "/home/someone");
        let config = Config::resolve(None).expect("Failed to resolve");
        assert_eq!(config.notes_root, PathBuf::from("/home/someone/.notes"));
    }

    #[test]
    #[serial]
    fn test_missing_home_is_a_config_error() {
        env::remove_var(ENV_VAR_JOT_DIR);
        env::remove_var(ENV_VAR_HOME);
        let result = Config::resolve(None);
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("home directory")),
            other => panic!("Expected Config error, got {:?}", other.map(|c| c.notes_root)),
        }
    }

    #[test]
    #[serial]
    fn test_tilde_expansion_in_flag() {
        env::set_var(ENV_VAR_HOME, "/home/someone");
        let config = Config::resolve(Some("~/my-notes")).expect("Failed to resolve");
        assert_eq!(config.notes_root, PathBuf::from("/home/someone/my-notes"));
    }

    #[test]
    fn test_validate_rejects_empty_root() {
        let config = Config {
            notes_root: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}
