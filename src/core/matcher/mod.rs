//! # Matcher Module
//!
//! Finds files in a source tree whose content also exists in a target tree.
//!
//! ## How It Works
//! Every (source, target) pair whose digests are equal is reported, sources
//! in enumeration order and, for each source, targets in enumeration order.
//! There is no byte-for-byte confirmation: two different files that share a
//! fast digest are reported as a match.
//!
//! ## Modes
//! | Mode       | Digests computed          |
//! |------------|---------------------------|
//! | `Indexed`  | once per file             |
//! | `Pairwise` | twice per compared pair   |
//!
//! Both modes report the same pairs in the same order.

use crate::core::checksum::{checksum, ChecksumAlgorithm, Digest};
use crate::core::scanner::FileLocation;
use crate::error::Result;
use crate::events::{CompareEvent, Event, EventSender};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How candidate pairs are enumerated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Hash each file once and look sources up in a digest index
    #[default]
    Indexed,
    /// Hash both files of every pair, n x m times
    Pairwise,
}

/// Options for a comparison run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MatchOptions {
    pub algorithm: ChecksumAlgorithm,
    pub mode: MatchMode,
}

/// A source file with the same digest as a target file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchResult {
    pub source: FileLocation,
    pub target: FileLocation,
}

/// Report every (source, target) pair with equal digests.
///
/// The first unreadable file aborts the comparison.
pub fn find_matches(
    sources: &[FileLocation],
    targets: &[FileLocation],
    options: &MatchOptions,
    events: &EventSender,
) -> Result<Vec<MatchResult>> {
    events.send(Event::Compare(CompareEvent::Started {
        sources: sources.len(),
        targets: targets.len(),
    }));

    let mut matches = Vec::new();
    let mut report = |source: &FileLocation, target: &FileLocation| {
        events.send(Event::Compare(CompareEvent::Matched {
            source: source.path(),
            target: target.path(),
        }));
        matches.push(MatchResult {
            source: source.clone(),
            target: target.clone(),
        });
    };

    match options.mode {
        MatchMode::Pairwise => {
            for source in sources {
                for target in targets {
                    let source_digest = checksum(&source.path(), options.algorithm)?;
                    let target_digest = checksum(&target.path(), options.algorithm)?;
                    if source_digest == target_digest {
                        report(source, target);
                    }
                }
            }
        }
        MatchMode::Indexed => {
            if !sources.is_empty() {
                let index = index_by_digest(targets, options.algorithm)?;
                for source in sources {
                    let digest = checksum(&source.path(), options.algorithm)?;
                    if let Some(positions) = index.get(&digest) {
                        for &position in positions {
                            report(source, &targets[position]);
                        }
                    }
                }
            }
        }
    }

    tracing::debug!(
        "Compared {} sources against {} targets: {} matches",
        sources.len(),
        targets.len(),
        matches.len()
    );

    events.send(Event::Compare(CompareEvent::Completed {
        matches: matches.len(),
    }));

    Ok(matches)
}

/// Map each digest to the positions of the files carrying it, in order.
fn index_by_digest(
    files: &[FileLocation],
    algorithm: ChecksumAlgorithm,
) -> Result<HashMap<Digest, Vec<usize>>> {
    let mut index: HashMap<Digest, Vec<usize>> = HashMap::new();
    for (position, file) in files.iter().enumerate() {
        let digest = checksum(&file.path(), algorithm)?;
        index.entry(digest).or_default().push(position);
    }
    Ok(index)
}
