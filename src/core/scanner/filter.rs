//! Extension filtering for the sort tool.

use super::FileLocation;
use crate::error::ConfigError;
use std::collections::BTreeSet;

/// Photo and video containers sorted by default
pub const DEFAULT_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".mp4", ".3gp"];

/// Keeps files whose extension is in an allowed set.
///
/// Matching is case-sensitive and includes the leading dot, so `.JPG`
/// does not match `.jpg`.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    extensions: BTreeSet<String>,
}

impl ExtensionFilter {
    /// Create a filter with the default extensions
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replace the allowed set. A missing leading dot is added.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for ext in extensions {
            let ext = ext.as_ref();
            let bare = ext.strip_prefix('.').unwrap_or(ext);
            if bare.is_empty() || bare.contains(['.', '/', '\\']) {
                return Err(ConfigError::InvalidExtension {
                    extension: ext.to_string(),
                });
            }
            set.insert(format!(".{}", bare));
        }
        self.extensions = set;
        Ok(self)
    }

    /// Check if a file should be processed
    pub fn should_include(&self, location: &FileLocation) -> bool {
        location
            .extension()
            .is_some_and(|ext| self.extensions.contains(ext))
    }

    /// The allowed extensions in sorted order
    pub fn extensions(&self) -> Vec<String> {
        self.extensions.iter().cloned().collect()
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new()
    }
}
