//! Error types for gauntlet operations.
//!
//! This module defines [`GauntletError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing check is NOT an error: it is recorded in the run report and
//!   mapped to an exit code by the caller
//! - Use `GauntletError` for conditions that abort the run outright
//! - Use `anyhow::Error` (via `GauntletError::Other`) for context-wrapped
//!   failures at the edges, such as writing the JSON report

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gauntlet operations.
#[derive(Debug, Error)]
pub enum GauntletError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The project directory does not exist or is not a directory.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// The runtime every check depends on is not installed.
    #[error("Missing prerequisite '{name}': {message}")]
    PrerequisiteMissing { name: String, message: String },

    /// A check command could not be started at all.
    #[error("Failed to start command '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gauntlet operations.
pub type Result<T> = std::result::Result<T, GauntletError>;
