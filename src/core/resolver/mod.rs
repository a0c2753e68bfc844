//! # Resolver Module
//!
//! Decides which dated folder a media file belongs in.
//!
//! ## Strategy Chain
//! Strategies run in order and the first decisive outcome wins:
//!
//! | # | Strategy          | Reads content | Decides                         |
//! |---|-------------------|---------------|---------------------------------|
//! | 1 | `FilenamePattern` | no            | date from `IMG-YYYYMMDD-WA0000` |
//! | 2 | `CaptureTime`     | yes           | date from EXIF, or skip         |
//! | 3 | `UnknownBucket`   | no            | Unknown                         |
//!
//! A filename date therefore wins over the EXIF date of the same file.
//! New strategies can be inserted anywhere with [`DateResolver::with_strategies`].

mod strategies;
mod traits;

pub use strategies::{
    parse_structured_filename, CaptureTimeStrategy, FilenamePatternStrategy, MediaKind,
    UnknownBucketStrategy,
};
pub use traits::{DateStrategy, Outcome};

use crate::core::scanner::FileLocation;
use crate::error::MetadataError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Year and month a file was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateKey {
    pub year: i32,
    pub month: u32,
}

impl DateKey {
    /// Year and month of any chrono date
    pub fn from_date(date: &impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Zero-padded four digit year folder name
    pub fn year_dir(&self) -> String {
        format!("{:04}", self.year)
    }

    /// Zero-padded two digit month folder name
    pub fn month_dir(&self) -> String {
        format!("{:02}", self.month)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year_dir(), self.month_dir())
    }
}

/// Final verdict for a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    Resolved { year: i32, month: u32 },
    Unknown,
    SkipUnreadable { reason: String },
}

impl Resolution {
    /// The date, when one was found
    pub fn date_key(&self) -> Option<DateKey> {
        match self {
            Resolution::Resolved { year, month } => Some(DateKey {
                year: *year,
                month: *month,
            }),
            _ => None,
        }
    }
}

/// Runs an ordered list of date strategies
pub struct DateResolver {
    strategies: Vec<Box<dyn DateStrategy>>,
}

impl DateResolver {
    /// Filename pattern, then capture time, then Unknown
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(FilenamePatternStrategy::new()),
            Box::new(CaptureTimeStrategy),
            Box::new(UnknownBucketStrategy),
        ])
    }

    /// Use a custom chain
    pub fn with_strategies(strategies: Vec<Box<dyn DateStrategy>>) -> Self {
        Self { strategies }
    }

    /// Names of the strategies, in the order they run
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Resolve a file. A chain with no decisive strategy yields `Unknown`.
    pub fn resolve(&self, location: &FileLocation) -> Result<Resolution, MetadataError> {
        for strategy in &self.strategies {
            let resolution = match strategy.resolve(location)? {
                Outcome::NotApplicable => continue,
                Outcome::Resolved(key) => Resolution::Resolved {
                    year: key.year,
                    month: key.month,
                },
                Outcome::Unknown => Resolution::Unknown,
                Outcome::SkipUnreadable(reason) => Resolution::SkipUnreadable { reason },
            };
            tracing::debug!("{} resolved by {}: {:?}", location, strategy.name(), resolution);
            return Ok(resolution);
        }
        Ok(Resolution::Unknown)
    }
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new()
    }
}
