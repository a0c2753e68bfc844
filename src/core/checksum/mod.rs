//! # Checksum Module
//!
//! Content digests used to decide whether two files are identical.
//!
//! - `Fast` - xxh3-64, a non-cryptographic digest. Collisions are possible
//!   and accepted; this is what the match engine uses by default.
//! - `Strong` - BLAKE3, for when a collision would matter.
//!
//! Files are read into memory in full before hashing.

use crate::error::ChecksumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Digest algorithm selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumAlgorithm {
    /// xxh3-64 (integer digest)
    #[default]
    Fast,
    /// BLAKE3 (hex digest)
    Strong,
}

/// A file content digest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Digest {
    Fast(u64),
    Strong(String),
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digest::Fast(value) => write!(f, "{:016x}", value),
            Digest::Strong(hex) => f.write_str(hex),
        }
    }
}

/// Digest an in-memory buffer
pub fn digest_bytes(data: &[u8], algorithm: ChecksumAlgorithm) -> Digest {
    match algorithm {
        ChecksumAlgorithm::Fast => Digest::Fast(xxh3_64(data)),
        ChecksumAlgorithm::Strong => Digest::Strong(blake3::hash(data).to_hex().to_string()),
    }
}

/// Read a whole file and digest its contents
pub fn checksum(path: &Path, algorithm: ChecksumAlgorithm) -> Result<Digest, ChecksumError> {
    let data = fs::read(path).map_err(|source| ChecksumError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(digest_bytes(&data, algorithm))
}
