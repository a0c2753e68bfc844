//! Types for the router module.

use crate::core::resolver::Resolution;
use crate::core::scanner::{FileLocation, DEFAULT_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the bucket for files without a date
pub const UNKNOWN_DIR: &str = "Unknown";

/// Folder structure options for sorting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FolderStructure {
    /// Year only (e.g., 2024/)
    #[default]
    Year,
    /// Year/Month (e.g., 2024/01/)
    YearMonth,
}

impl FolderStructure {
    /// Directory a file with this resolution goes to, or `None` if it stays put
    pub fn destination_dir(&self, root: &Path, resolution: &Resolution) -> Option<PathBuf> {
        match resolution {
            Resolution::Resolved { .. } => {
                let key = resolution.date_key()?;
                let year_dir = root.join(key.year_dir());
                Some(match self {
                    FolderStructure::Year => year_dir,
                    FolderStructure::YearMonth => year_dir.join(key.month_dir()),
                })
            }
            Resolution::Unknown => Some(root.join(UNKNOWN_DIR)),
            Resolution::SkipUnreadable { .. } => None,
        }
    }
}

/// Configuration for a sort run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortConfig {
    pub root: PathBuf,
    pub recursive: bool,
    pub structure: FolderStructure,
    /// Allowed extensions, leading dot optional
    pub extensions: Vec<String>,
    /// Plan only; touch nothing
    pub dry_run: bool,
}

impl SortConfig {
    /// Defaults for everything except the root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
            structure: FolderStructure::default(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            dry_run: false,
        }
    }
}

/// A file and the directory it will be moved into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedMove {
    pub source: FileLocation,
    pub destination_dir: PathBuf,
    pub resolution: Resolution,
}

impl PlannedMove {
    /// Full destination path; the file name is preserved
    pub fn destination(&self) -> PathBuf {
        self.destination_dir.join(&self.source.filename)
    }
}

/// A file left in place because its image data could not be read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything the router intends to do
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortPlan {
    /// Canonical root
    pub root: PathBuf,
    /// Files found before extension filtering
    pub total_files: usize,
    /// Files that passed the extension filter
    pub eligible_files: usize,
    pub moves: Vec<PlannedMove>,
    pub skipped: Vec<SkippedFile>,
}

/// Result of a sort run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortReport {
    pub plan: SortPlan,
    pub files_moved: usize,
    pub already_in_place: usize,
    pub directories_created: Vec<PathBuf>,
    pub dry_run: bool,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_structure_ignores_month() {
        let dir = FolderStructure::Year
            .destination_dir(Path::new("/photos"), &Resolution::Resolved { year: 2023, month: 4 });
        assert_eq!(dir, Some(PathBuf::from("/photos/2023")));
    }

    #[test]
    fn year_month_structure_pads_month() {
        let dir = FolderStructure::YearMonth
            .destination_dir(Path::new("/photos"), &Resolution::Resolved { year: 2023, month: 4 });
        assert_eq!(dir, Some(PathBuf::from("/photos/2023/04")));
    }

    #[test]
    fn unknown_has_no_month_level() {
        let dir =
            FolderStructure::YearMonth.destination_dir(Path::new("/photos"), &Resolution::Unknown);
        assert_eq!(dir, Some(PathBuf::from("/photos/Unknown")));
    }

    #[test]
    fn unreadable_files_have_no_destination() {
        let resolution = Resolution::SkipUnreadable {
            reason: "bad".to_string(),
        };
        assert_eq!(
            FolderStructure::Year.destination_dir(Path::new("/photos"), &resolution),
            None
        );
    }

    #[test]
    fn sort_config_defaults() {
        let config = SortConfig::new("/photos");
        assert!(!config.recursive);
        assert!(!config.dry_run);
        assert_eq!(config.structure, FolderStructure::Year);
        assert_eq!(config.extensions, vec![".jpg", ".jpeg", ".mp4", ".3gp"]);
    }
}
