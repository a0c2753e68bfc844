//! # Scanner Module
//!
//! Enumerates the regular files under a root directory.
//!
//! ## Example
//! ```rust,ignore
//! use media_tidy::core::scanner::{walk, ScanConfig};
//!
//! let files = walk(Path::new("/photos"), &ScanConfig { recursive: true }, &sender)?;
//! ```

mod filter;
mod walker;

pub use filter::{ExtensionFilter, DEFAULT_EXTENSIONS};
pub use walker::{validate_root, walk, ScanConfig};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A file discovered by the walker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileLocation {
    /// Absolute, normalized parent directory
    pub directory: PathBuf,
    /// Bare file name
    pub filename: String,
}

impl FileLocation {
    /// Split a file path into its directory and file name.
    ///
    /// Returns `None` for paths without a parent or a UTF-8 file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let directory = path.parent()?.to_path_buf();
        let filename = path.file_name()?.to_str()?.to_string();
        Some(Self {
            directory,
            filename,
        })
    }

    /// Full path to the file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    /// Extension including the leading dot, exactly as written
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| &self.filename[self.filename.len() - e.len() - 1..])
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().display())
    }
}
