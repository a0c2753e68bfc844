//! Directory walking implementation using walkdir.

use super::FileLocation;
use crate::error::{ConfigError, Result, ScanError};
use crate::events::{Event, EventSender, ScanEvent};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Configuration for the directory walker
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Descend into subdirectories (unlimited depth)
    pub recursive: bool,
}

/// Check that `root` exists and is a directory, returning its canonical path.
pub fn validate_root(root: &Path) -> std::result::Result<PathBuf, ConfigError> {
    if !root.exists() {
        return Err(ConfigError::NotFound {
            path: root.to_path_buf(),
        });
    }

    if !root.is_dir() {
        return Err(ConfigError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    root.canonicalize().map_err(|_| ConfigError::NotFound {
        path: root.to_path_buf(),
    })
}

/// Enumerate the regular files under `root`.
///
/// Symbolic links are never followed into directories; a link that points
/// at a regular file is reported like the file itself. Entries come back
/// sorted by name within each directory.
pub fn walk(root: &Path, config: &ScanConfig, events: &EventSender) -> Result<Vec<FileLocation>> {
    let root = validate_root(root)?;

    events.send(Event::Scan(ScanEvent::Started {
        root: root.clone(),
        recursive: config.recursive,
    }));

    let mut walker = WalkDir::new(&root)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name();

    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();

    for entry_result in walker {
        let entry = entry_result.map_err(|e| {
            let path = e.path().map(|p| p.to_path_buf()).unwrap_or_else(|| root.clone());
            if e.io_error().map(|e| e.kind()) == Some(io::ErrorKind::PermissionDenied) {
                ScanError::PermissionDenied { path }
            } else {
                ScanError::ReadDirectory {
                    path,
                    source: io::Error::new(io::ErrorKind::Other, e.to_string()),
                }
            }
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        match FileLocation::from_path(path) {
            Some(location) => files.push(location),
            None => tracing::warn!("Ignoring file with a non UTF-8 name: {}", path.display()),
        }
    }

    tracing::debug!("Walked {}: {} files", root.display(), files.len());

    events.send(Event::Scan(ScanEvent::Completed {
        root,
        total_files: files.len(),
    }));

    Ok(files)
}
