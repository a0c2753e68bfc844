//! # Router Module
//!
//! Moves media files into dated folders under their root.
//!
//! ## Layout
//! ```text
//! <root>/<YYYY>/<file>          default
//! <root>/<YYYY>/<MM>/<file>     FolderStructure::YearMonth
//! <root>/Unknown/<file>         no date could be found
//! ```
//!
//! A run is split into a plan (walk, filter, resolve dates) and an execution
//! (create directories, rename). Files whose image data cannot be read are
//! left where they are. Any failure while creating a directory or renaming
//! a file stops the run.

mod executor;
mod planner;
mod types;

pub use executor::{ExecutionSummary, SortExecutor};
pub use planner::SortPlanner;
pub use types::*;

use crate::core::resolver::DateResolver;
use crate::core::scanner::ExtensionFilter;
use crate::error::{ConfigError, Result};
use crate::events::{Event, EventSender, SortEvent};
use std::time::Instant;

/// Sorts one root directory
pub struct Router {
    config: SortConfig,
    resolver: DateResolver,
    filter: ExtensionFilter,
}

impl Router {
    /// Create a router with the default date strategies
    pub fn new(config: SortConfig) -> std::result::Result<Self, ConfigError> {
        let filter = ExtensionFilter::new().with_extensions(&config.extensions)?;
        Ok(Self {
            config,
            resolver: DateResolver::new(),
            filter,
        })
    }

    /// Replace the date resolver
    pub fn with_resolver(mut self, resolver: DateResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Build the plan without changing anything on disk
    pub fn plan(&self, events: &EventSender) -> Result<SortPlan> {
        SortPlanner::new(&self.resolver, &self.filter).create_plan(&self.config, events)
    }

    /// Plan, then (unless this is a dry run) execute
    pub fn run(&self, events: &EventSender) -> Result<SortReport> {
        let start = Instant::now();

        let plan = self.plan(events)?;
        let summary = if self.config.dry_run {
            ExecutionSummary::default()
        } else {
            SortExecutor::execute(&plan, events)?
        };

        events.send(Event::Sort(SortEvent::Completed {
            moved: summary.files_moved,
            skipped: plan.skipped.len(),
            directories_created: summary.directories_created.len(),
        }));

        Ok(SortReport {
            plan,
            files_moved: summary.files_moved,
            already_in_place: summary.already_in_place,
            directories_created: summary.directories_created,
            dry_run: self.config.dry_run,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::fixtures::{jpeg_with_capture_time, jpeg_without_capture_time};
    use crate::core::resolver::{DateKey, DateStrategy, FilenamePatternStrategy, Outcome};
    use crate::core::scanner::FileLocation;
    use crate::error::{MetadataError, TidyError};
    use crate::events::{null_sender, EventChannel};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn root(temp: &TempDir) -> PathBuf {
        temp.path().canonicalize().unwrap()
    }

    fn sort(root: &Path, configure: impl FnOnce(&mut SortConfig)) -> SortReport {
        let mut config = SortConfig::new(root);
        configure(&mut config);
        Router::new(config).unwrap().run(&null_sender()).unwrap()
    }

    #[test]
    fn routes_by_filename_date() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("IMG-20230405-WA0001.jpg"), b"x").unwrap();

        let report = sort(&root, |_| {});

        assert_eq!(report.files_moved, 1);
        assert!(root.join("2023").join("IMG-20230405-WA0001.jpg").exists());
    }

    #[test]
    fn structured_name_with_impossible_day_is_routed_by_name() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("IMG-20230230-WA0001.jpg"), b"not an image").unwrap();

        let report = sort(&root, |c| c.structure = FolderStructure::YearMonth);

        assert_eq!(report.files_moved, 1);
        assert!(report.plan.skipped.is_empty());
        assert!(root
            .join("2023")
            .join("02")
            .join("IMG-20230230-WA0001.jpg")
            .exists());
    }

    /// Dates every `.mp4` as January 2000
    struct VideoEpoch;

    impl DateStrategy for VideoEpoch {
        fn resolve(&self, location: &FileLocation) -> std::result::Result<Outcome, MetadataError> {
            if location.filename.ends_with(".mp4") {
                Ok(Outcome::Resolved(DateKey { year: 2000, month: 1 }))
            } else {
                Ok(Outcome::NotApplicable)
            }
        }

        fn name(&self) -> &'static str {
            "video-epoch"
        }
    }

    #[test]
    fn custom_resolver_chain_is_used() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("IMG-20230405-WA0001.jpg"), b"x").unwrap();
        fs::write(root.join("clip.mp4"), b"not a video").unwrap();
        fs::write(root.join("beach.jpg"), b"not an image").unwrap();
        let resolver = DateResolver::with_strategies(vec![
            Box::new(FilenamePatternStrategy::new()),
            Box::new(VideoEpoch),
        ]);

        let report = Router::new(SortConfig::new(&root))
            .unwrap()
            .with_resolver(resolver)
            .run(&null_sender())
            .unwrap();

        assert_eq!(report.files_moved, 3);
        assert!(root.join("2023").join("IMG-20230405-WA0001.jpg").exists());
        assert!(root.join("2000").join("clip.mp4").exists());
        // Exhausted chain without a capture-time strategy
        assert!(root.join("Unknown").join("beach.jpg").exists());
    }

    #[test]
    fn month_flag_adds_month_level() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("VID-20230405-WA0001.mp4"), b"x").unwrap();

        sort(&root, |c| c.structure = FolderStructure::YearMonth);

        assert!(root
            .join("2023")
            .join("04")
            .join("VID-20230405-WA0001.mp4")
            .exists());
    }

    #[test]
    fn routes_by_capture_time_and_unknown() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("beach.jpg"), jpeg_with_capture_time("2021:07:15 10:00:00")).unwrap();
        fs::write(root.join("scan.jpeg"), jpeg_without_capture_time()).unwrap();

        sort(&root, |c| c.structure = FolderStructure::YearMonth);

        assert!(root.join("2021").join("07").join("beach.jpg").exists());
        assert!(root.join("Unknown").join("scan.jpeg").exists());
    }

    #[test]
    fn invalid_image_is_skipped_with_warning_event() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("broken.jpg"), b"this is not a valid image file").unwrap();
        let (sender, receiver) = EventChannel::new();

        let report = Router::new(SortConfig::new(&root))
            .unwrap()
            .run(&sender)
            .unwrap();

        assert_eq!(report.files_moved, 0);
        assert_eq!(report.plan.skipped.len(), 1);
        assert!(root.join("broken.jpg").exists());
        assert!(!root.join("Unknown").exists());
        let events = receiver.drain();
        assert!(events.iter().any(|e| matches!(
            e,
            Event::Sort(SortEvent::Skipped { path, .. }) if path == &root.join("broken.jpg")
        )));
        assert!(!events
            .iter()
            .any(|e| matches!(e, Event::Sort(SortEvent::DirectoryCreated { .. }))));
    }

    #[test]
    fn disallowed_extensions_are_untouched() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("IMG-20230405-WA0001.JPG"), b"x").unwrap();
        fs::write(root.join("notes.txt"), b"x").unwrap();

        let report = sort(&root, |_| {});

        assert_eq!(report.plan.total_files, 2);
        assert_eq!(report.plan.eligible_files, 0);
        assert!(root.join("IMG-20230405-WA0001.JPG").exists());
        assert!(root.join("notes.txt").exists());
    }

    #[test]
    fn custom_extensions_replace_defaults() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("IMG-20230405-WA0001.opus"), b"x").unwrap();
        fs::write(root.join("IMG-20230405-WA0002.jpg"), b"x").unwrap();

        sort(&root, |c| c.extensions = vec!["opus".to_string()]);

        assert!(root.join("2023").join("IMG-20230405-WA0001.opus").exists());
        assert!(root.join("IMG-20230405-WA0002.jpg").exists());
    }

    #[test]
    fn dry_run_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("IMG-20230405-WA0001.jpg"), b"x").unwrap();

        let report = sort(&root, |c| c.dry_run = true);

        assert!(report.dry_run);
        assert_eq!(report.plan.moves.len(), 1);
        assert_eq!(
            report.plan.moves[0].destination(),
            root.join("2023").join("IMG-20230405-WA0001.jpg")
        );
        assert_eq!(report.files_moved, 0);
        assert!(root.join("IMG-20230405-WA0001.jpg").exists());
        assert!(!root.join("2023").exists());
    }

    #[test]
    fn recursive_rerun_leaves_sorted_files_in_place() {
        let temp = TempDir::new().unwrap();
        let root = root(&temp);
        fs::write(root.join("IMG-20230405-WA0001.jpg"), b"x").unwrap();

        let first = sort(&root, |c| c.recursive = true);
        let second = sort(&root, |c| c.recursive = true);

        assert_eq!(first.files_moved, 1);
        assert_eq!(second.files_moved, 0);
        assert_eq!(second.already_in_place, 1);
    }

    #[test]
    fn invalid_root_fails_before_any_change() {
        let result = Router::new(SortConfig::new("/nonexistent/path/12345"))
            .unwrap()
            .run(&null_sender());
        assert!(matches!(
            result,
            Err(TidyError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn invalid_extension_is_config_error() {
        let mut config = SortConfig::new("/photos");
        config.extensions = vec![".".to_string()];
        assert!(matches!(
            Router::new(config),
            Err(ConfigError::InvalidExtension { .. })
        ));
    }
}
