//! Trait definitions for date strategies.

use super::DateKey;
use crate::core::scanner::FileLocation;
use crate::error::MetadataError;

/// What a single strategy concluded about a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The strategy found a date
    Resolved(DateKey),
    /// The file belongs in the Unknown bucket
    Unknown,
    /// The file must be left where it is
    SkipUnreadable(String),
    /// The strategy has no opinion; ask the next one
    NotApplicable,
}

/// One step of the date resolution chain
pub trait DateStrategy: Send + Sync {
    /// Inspect a file. Only unrecoverable I/O problems are errors.
    fn resolve(&self, location: &FileLocation) -> Result<Outcome, MetadataError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
