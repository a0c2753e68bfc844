//! # Metadata Module
//!
//! Reads the capture time (EXIF `DateTimeOriginal`) from photo files.
//!
//! Three outcomes matter to callers:
//! - the field is present (`Ok(Some(..))`)
//! - the container is a readable image without the field (`Ok(None)`)
//! - the content is not a readable image at all (`MetadataError::InvalidImage`)

#[cfg(test)]
pub(crate) mod fixtures;

use crate::error::MetadataError;
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// EXIF date-time layout: "YYYY:MM:DD HH:MM:SS"
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Read the raw `DateTimeOriginal` string from a photo file.
pub fn read_capture_time(path: &Path) -> Result<Option<String>, MetadataError> {
    let file = File::open(path).map_err(|source| MetadataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bufreader = BufReader::new(&file);
    let exif_reader = match Reader::new().read_from_container(&mut bufreader) {
        Ok(r) => r,
        Err(exif::Error::NotFound(_)) => return Ok(None),
        Err(exif::Error::Io(e)) if e.kind() != io::ErrorKind::UnexpectedEof => {
            return Err(MetadataError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
        Err(e) => {
            return Err(MetadataError::InvalidImage {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    Ok(exif_reader
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .and_then(|field| get_string_value(&field.value)))
}

/// Parse an EXIF date-time string.
///
/// Returns `None` for anything that is not a real calendar date, including
/// the all-zero placeholder some cameras write.
pub fn parse_exif_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATETIME_FORMAT).ok()
}

/// Helper to extract string from EXIF ASCII value
fn get_string_value(value: &Value) -> Option<String> {
    if let Value::Ascii(ref vec) = value {
        if let Some(bytes) = vec.first() {
            if let Ok(s) = std::str::from_utf8(bytes) {
                let trimmed = s.trim_end_matches('\0').trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }
    None
}
