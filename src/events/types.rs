//! Event type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// All events emitted by the compare and sort tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Directory walking
    Scan(ScanEvent),
    /// Cross-directory matching
    Compare(CompareEvent),
    /// Date-based routing
    Sort(SortEvent),
}

/// Events from the tree walker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanEvent {
    /// Walking has started at a validated root
    Started { root: PathBuf, recursive: bool },
    /// Walking finished
    Completed { root: PathBuf, total_files: usize },
}

/// Events from the match engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareEvent {
    /// Comparison is about to begin
    Started { sources: usize, targets: usize },
    /// A source file has the same digest as a target file
    Matched { source: PathBuf, target: PathBuf },
    /// Comparison finished
    Completed { matches: usize },
}

/// Events from the file router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortEvent {
    /// Files enumerated under the root, before filtering
    FilesFound { total: usize },
    /// Files left after the extension filter
    FilesEligible {
        count: usize,
        extensions: Vec<String>,
    },
    /// A file was left in place because its content is not a readable image
    Skipped { path: PathBuf, reason: String },
    /// A destination directory did not exist and was created
    DirectoryCreated { path: PathBuf },
    /// A file was renamed into its destination
    Moved { from: PathBuf, to: PathBuf },
    /// A file already sits in its destination directory
    AlreadyInPlace { path: PathBuf },
    /// Routing finished
    Completed {
        moved: usize,
        skipped: usize,
        directories_created: usize,
    },
}
