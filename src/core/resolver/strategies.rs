//! The built-in date strategies.

use super::traits::{DateStrategy, Outcome};
use super::DateKey;
use crate::core::metadata::{parse_exif_datetime, read_capture_time};
use crate::core::scanner::FileLocation;
use crate::error::MetadataError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static STRUCTURED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(IMG|VID)-([0-9]{8})-WA[0-9]{4}\..+").expect("valid structured name pattern")
});

/// Which variant of the structured name a file uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

/// Parse `IMG-YYYYMMDD-WA0000.ext` / `VID-YYYYMMDD-WA0000.ext`.
///
/// Year is token digits 1-4 and month digits 5-6, taken as written. The day
/// digits are never looked at. Returns `None` if the name does not follow
/// the convention.
pub fn parse_structured_filename(filename: &str) -> Option<(MediaKind, DateKey)> {
    let captures = STRUCTURED_NAME.captures(filename)?;
    let kind = match &captures[1] {
        "IMG" => MediaKind::Image,
        _ => MediaKind::Video,
    };
    let token = &captures[2];
    let year = token[..4].parse().ok()?;
    let month = token[4..6].parse().ok()?;
    Some((kind, DateKey { year, month }))
}

/// Takes the date straight from a structured filename
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenamePatternStrategy;

impl FilenamePatternStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl DateStrategy for FilenamePatternStrategy {
    fn resolve(&self, location: &FileLocation) -> Result<Outcome, MetadataError> {
        match parse_structured_filename(&location.filename) {
            Some((kind, key)) => {
                tracing::trace!("{} is a {:?} from {}", location.filename, kind, key);
                Ok(Outcome::Resolved(key))
            }
            None => Ok(Outcome::NotApplicable),
        }
    }

    fn name(&self) -> &'static str {
        "filename-pattern"
    }
}

/// Reads EXIF `DateTimeOriginal`.
///
/// Unreadable image content means the file is skipped. A missing or
/// unparseable field passes the file on to the next strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureTimeStrategy;

impl DateStrategy for CaptureTimeStrategy {
    fn resolve(&self, location: &FileLocation) -> Result<Outcome, MetadataError> {
        let raw = match read_capture_time(&location.path()) {
            Ok(raw) => raw,
            Err(MetadataError::InvalidImage { reason, .. }) => {
                return Ok(Outcome::SkipUnreadable(reason))
            }
            Err(e) => return Err(e),
        };

        let Some(raw) = raw else {
            return Ok(Outcome::NotApplicable);
        };

        match parse_exif_datetime(&raw) {
            Some(taken) => Ok(Outcome::Resolved(DateKey::from_date(&taken))),
            None => {
                tracing::debug!("{}: unparseable capture time {:?}", location, raw);
                Ok(Outcome::NotApplicable)
            }
        }
    }

    fn name(&self) -> &'static str {
        "capture-time"
    }
}

/// Sends everything that reaches it to the Unknown bucket
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownBucketStrategy;

impl DateStrategy for UnknownBucketStrategy {
    fn resolve(&self, _location: &FileLocation) -> Result<Outcome, MetadataError> {
        Ok(Outcome::Unknown)
    }

    fn name(&self) -> &'static str {
        "unknown-bucket"
    }
}
