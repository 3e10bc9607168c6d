use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::ComboError;
use crate::pad::config::Gesture;

/// Errors that can occur while loading, resolving or writing a pad config.
#[derive(Debug, Error)]
pub enum PadError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// YAML could not be deserialised.
    #[error("Failed to parse config: {0}")]
    Parse(String),
    /// Structural problems found by `PadConfig::validate`.
    #[error("Invalid config: {}", .0.join("; "))]
    Invalid(Vec<String>),
    /// One or more shortcuts did not resolve.
    #[error("{} key binding(s) failed to resolve", .0.len())]
    InvalidBindings(Vec<BindingError>),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// File watcher could not be set up.
    #[error("Failed to watch config: {0}")]
    Watch(#[from] notify::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A shortcut that failed to resolve, with its location in the config.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BindingError {
    pub button: u32,
    pub gesture: Gesture,
    pub error: ComboError,
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button {} {}: {}", self.button, self.gesture, self.error)
    }
}
