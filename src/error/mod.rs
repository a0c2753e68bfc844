//! # Error Module
//!
//! Error types for the compare and sort tools.
//!
//! ## Design Principles
//! - **Never panic** on user data - return errors instead
//! - **Include context** - every error names the path it concerns
//! - **Fatal vs recoverable** - only `MetadataError::InvalidImage` is
//!   recovered from (the file is skipped); everything else aborts the run

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum TidyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Checksum error: {0}")]
    Checksum(#[from] ChecksumError),

    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Routing error: {0}")]
    Route(#[from] RouteError),
}

/// Invalid input detected before any traversal begins
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Path does not exist: {path}")]
    NotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Invalid file extension: {extension:?}")]
    InvalidExtension { extension: String },
}

/// Errors that occur while walking a directory tree
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while computing a file digest
#[derive(Error, Debug)]
pub enum ChecksumError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while reading capture-time metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Invalid image data in {path}: {reason}")]
    InvalidImage { path: PathBuf, reason: String },

    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while relocating files
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite {path}: a different file is already there")]
    DestinationOccupied { path: PathBuf },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, TidyError>;
