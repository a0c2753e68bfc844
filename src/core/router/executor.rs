//! Executor for sort plans.

use super::types::*;
use crate::error::RouteError;
use crate::events::{Event, EventSender, SortEvent};
use std::fs;
use std::path::PathBuf;

/// What the executor changed on disk
#[derive(Debug, Default)]
pub struct ExecutionSummary {
    pub files_moved: usize,
    pub already_in_place: usize,
    pub directories_created: Vec<PathBuf>,
}

/// Carries out a plan with single-step renames
pub struct SortExecutor;

impl SortExecutor {
    /// Execute every planned move in order.
    ///
    /// Stops at the first failure; moves already made stay made.
    pub fn execute(plan: &SortPlan, events: &EventSender) -> Result<ExecutionSummary, RouteError> {
        let mut summary = ExecutionSummary::default();

        for planned in &plan.moves {
            let dest_dir = &planned.destination_dir;

            if !dest_dir.is_dir() {
                fs::create_dir_all(dest_dir).map_err(|source| RouteError::CreateDirectory {
                    path: dest_dir.clone(),
                    source,
                })?;
                events.send(Event::Sort(SortEvent::DirectoryCreated {
                    path: dest_dir.clone(),
                }));
                summary.directories_created.push(dest_dir.clone());
            }

            let source_path = planned.source.path();
            let dest_path = planned.destination();

            if source_path == dest_path {
                events.send(Event::Sort(SortEvent::AlreadyInPlace { path: source_path }));
                summary.already_in_place += 1;
                continue;
            }

            // rename() would silently replace an existing file on Unix
            if fs::symlink_metadata(&dest_path).is_ok() {
                return Err(RouteError::DestinationOccupied { path: dest_path });
            }

            fs::rename(&source_path, &dest_path).map_err(|source| RouteError::Move {
                from: source_path.clone(),
                to: dest_path.clone(),
                source,
            })?;

            events.send(Event::Sort(SortEvent::Moved {
                from: source_path,
                to: dest_path,
            }));
            summary.files_moved += 1;
        }

        Ok(summary)
    }
}
