//! # Core Module
//!
//! The filesystem engine behind both tools.
//!
//! ## Modules
//! - `scanner` - Enumerates files under a root
//! - `checksum` - Digests file contents
//! - `matcher` - Finds source files whose content exists in a target tree
//! - `metadata` - Reads EXIF capture time
//! - `resolver` - Decides a file's date through an ordered strategy chain
//! - `router` - Plans and performs moves into dated folders

pub mod checksum;
pub mod matcher;
pub mod metadata;
pub mod resolver;
pub mod router;
pub mod scanner;

// Re-export commonly used types
pub use checksum::{ChecksumAlgorithm, Digest};
pub use matcher::{find_matches, MatchMode, MatchOptions, MatchResult};
pub use resolver::{DateKey, DateResolver, Resolution};
pub use router::{FolderStructure, Router, SortConfig, SortReport};
pub use scanner::{FileLocation, ScanConfig};
