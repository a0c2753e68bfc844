//! Plan generator for sort runs.

use super::types::*;
use crate::core::resolver::{DateResolver, Resolution};
use crate::core::scanner::{validate_root, walk, ExtensionFilter, ScanConfig};
use crate::error::Result;
use crate::events::{Event, EventSender, SortEvent};

/// Resolves every eligible file to a destination without touching anything
pub struct SortPlanner<'a> {
    resolver: &'a DateResolver,
    filter: &'a ExtensionFilter,
}

impl<'a> SortPlanner<'a> {
    pub fn new(resolver: &'a DateResolver, filter: &'a ExtensionFilter) -> Self {
        Self { resolver, filter }
    }

    /// Walk the root, filter by extension and resolve each file's date.
    ///
    /// Files with unreadable image data are reported through a
    /// `SortEvent::Skipped` event and left out of the plan.
    pub fn create_plan(&self, config: &SortConfig, events: &EventSender) -> Result<SortPlan> {
        let scan_config = ScanConfig {
            recursive: config.recursive,
        };
        let root = validate_root(&config.root)?;
        let files = walk(&root, &scan_config, events)?;
        let total_files = files.len();
        events.send(Event::Sort(SortEvent::FilesFound { total: total_files }));

        let eligible: Vec<_> = files
            .into_iter()
            .filter(|f| self.filter.should_include(f))
            .collect();
        events.send(Event::Sort(SortEvent::FilesEligible {
            count: eligible.len(),
            extensions: self.filter.extensions(),
        }));

        let eligible_files = eligible.len();
        let mut moves = Vec::with_capacity(eligible_files);
        let mut skipped = Vec::new();

        for location in eligible {
            let resolution = self.resolver.resolve(&location)?;
            match config.structure.destination_dir(&root, &resolution) {
                Some(destination_dir) => moves.push(PlannedMove {
                    source: location,
                    destination_dir,
                    resolution,
                }),
                None => {
                    let reason = match resolution {
                        Resolution::SkipUnreadable { reason } => reason,
                        _ => String::new(),
                    };
                    events.send(Event::Sort(SortEvent::Skipped {
                        path: location.path(),
                        reason: reason.clone(),
                    }));
                    skipped.push(SkippedFile {
                        path: location.path(),
                        reason,
                    });
                }
            }
        }

        tracing::debug!(
            "Planned {} moves, {} skipped out of {} files",
            moves.len(),
            skipped.len(),
            total_files
        );

        Ok(SortPlan {
            root,
            total_files,
            eligible_files,
            moves,
            skipped,
        })
    }
}
