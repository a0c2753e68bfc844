//! # CLI Module
//!
//! Command-line interface for media-tidy.
//!
//! ## Usage
//! ```bash
//! # Which files of the phone dump are already in the archive?
//! media-tidy compare ~/Phone/DCIM ~/Photos
//!
//! # Same, with a cryptographic digest and JSON on stdout
//! media-tidy compare ~/Phone/DCIM ~/Photos --algorithm strong --output json
//!
//! # Sort into year folders
//! media-tidy sort ~/Photos
//!
//! # Whole tree, year and month folders, preview only
//! media-tidy sort ~/Photos --recursive --month --dry-run
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use media_tidy::core::checksum::ChecksumAlgorithm;
use media_tidy::core::matcher::{find_matches, MatchMode, MatchOptions, MatchResult};
use media_tidy::core::router::{FolderStructure, Router, SortConfig, SortReport};
use media_tidy::core::scanner::{validate_root, walk, ScanConfig};
use media_tidy::error::Result;
use media_tidy::events::{CompareEvent, Event, EventChannel, EventSender, ScanEvent, SortEvent};
use std::path::{Path, PathBuf};
use std::thread;

/// Media Tidy - match files across folders and sort photos by date
#[derive(Parser, Debug)]
#[command(name = "media-tidy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find files from the source directory that also exist in the target directory
    Compare {
        /// Path to source directory
        source: PathBuf,

        /// Path to target directory
        target: PathBuf,

        /// Digest used to compare files
        #[arg(short, long, default_value = "fast")]
        algorithm: Algorithm,

        /// How candidate pairs are enumerated
        #[arg(long, default_value = "indexed")]
        mode: Mode,

        /// Output format
        #[arg(short, long, default_value = "log")]
        output: OutputFormat,
    },

    /// Move photos and videos into year (and month) folders
    Sort {
        /// Path to pictures folder
        root: PathBuf,

        /// Recursively process media
        #[arg(short, long)]
        recursive: bool,

        /// Create month directories along with year directories
        #[arg(short, long)]
        month: bool,

        /// Allowed extension (repeatable); replaces the default set
        #[arg(short, long = "extension", value_name = "EXT")]
        extensions: Vec<String>,

        /// Show what would be moved without touching anything
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// xxh3-64 - Fast, collisions possible
    Fast,
    /// BLAKE3 - Cryptographic
    Strong,
}

impl From<Algorithm> for ChecksumAlgorithm {
    fn from(algo: Algorithm) -> Self {
        match algo {
            Algorithm::Fast => ChecksumAlgorithm::Fast,
            Algorithm::Strong => ChecksumAlgorithm::Strong,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Hash every file once (default)
    Indexed,
    /// Re-hash both files for every pair
    Pairwise,
}

impl From<Mode> for MatchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Indexed => MatchMode::Indexed,
            Mode::Pairwise => MatchMode::Pairwise,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One log line per match
    Log,
    /// Log lines plus a JSON document on stdout
    Json,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    media_tidy::init_tracing(cli.verbose);
    tracing::debug!("Command line arguments: {:?}", cli);

    match cli.command {
        Commands::Compare {
            source,
            target,
            algorithm,
            mode,
            output,
        } => run_compare(
            &source,
            &target,
            MatchOptions {
                algorithm: algorithm.into(),
                mode: mode.into(),
            },
            output,
        ),
        Commands::Sort {
            root,
            recursive,
            month,
            extensions,
            dry_run,
        } => {
            let mut config = SortConfig::new(root);
            config.recursive = recursive;
            config.dry_run = dry_run;
            if month {
                config.structure = FolderStructure::YearMonth;
            }
            if !extensions.is_empty() {
                config.extensions = extensions;
            }
            run_sort(config)
        }
    }
}

/// Run `work` with a sender whose events are logged on a separate thread.
fn with_event_logging<T>(work: impl FnOnce(&EventSender) -> Result<T>) -> Result<T> {
    let (sender, receiver) = EventChannel::new();

    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            log_event(&event);
        }
    });

    let result = work(&sender);

    // Drop sender to signal event thread to finish
    drop(sender);
    event_thread.join().ok();

    result
}

fn run_compare(
    source: &Path,
    target: &Path,
    options: MatchOptions,
    output: OutputFormat,
) -> Result<()> {
    // Both roots are checked before either is walked
    let source = validate_root(source)?;
    let target = validate_root(target)?;

    let matches = with_event_logging(|events| {
        let scan = ScanConfig { recursive: true };
        let sources = walk(&source, &scan, events)?;
        let targets = walk(&target, &scan, events)?;
        find_matches(&sources, &targets, &options, events)
    })?;

    if matches!(output, OutputFormat::Json) {
        print_json_matches(&source, &target, &matches);
    }

    Ok(())
}

fn run_sort(config: SortConfig) -> Result<()> {
    let router = Router::new(config)?;
    let report = with_event_logging(|events| router.run(events))?;

    if report.dry_run {
        print_plan(&Term::stderr(), &report);
    }

    Ok(())
}

/// Render one event as a log line
fn log_event(event: &Event) {
    match event {
        Event::Scan(ScanEvent::Started { root, recursive }) => {
            tracing::info!(
                "Listing files in {}{}",
                root.display(),
                if *recursive { " (recursive)" } else { "" }
            );
        }
        Event::Scan(ScanEvent::Completed { root, total_files }) => {
            tracing::debug!("{} files under {}", total_files, root.display());
        }
        Event::Compare(CompareEvent::Started { sources, targets }) => {
            tracing::info!(
                "Comparing {} source files against {} target files",
                sources,
                targets
            );
        }
        Event::Compare(CompareEvent::Matched { source, target }) => {
            tracing::info!("{} matches {}", source.display(), target.display());
        }
        Event::Compare(CompareEvent::Completed { matches }) => {
            tracing::info!("Finished comparing: {} matches", matches);
        }
        Event::Sort(SortEvent::FilesFound { total }) => {
            tracing::info!("Total files: {}", total);
        }
        Event::Sort(SortEvent::FilesEligible { count, extensions }) => {
            tracing::info!(
                "Filtering for valid file extensions: {}",
                extensions.join(", ")
            );
            tracing::info!("Valid files: {}", count);
        }
        Event::Sort(SortEvent::Skipped { path, reason }) => {
            tracing::warn!(
                "{} : invalid image data, skipping ({})",
                path.file_name().unwrap_or_default().to_string_lossy(),
                reason
            );
        }
        Event::Sort(SortEvent::DirectoryCreated { path }) => {
            tracing::info!("Created {}", path.display());
        }
        Event::Sort(SortEvent::Moved { from, to }) => {
            tracing::info!("Moved {} to {}", from.display(), to.display());
        }
        Event::Sort(SortEvent::AlreadyInPlace { path }) => {
            tracing::debug!("Already sorted: {}", path.display());
        }
        Event::Sort(SortEvent::Completed {
            moved,
            skipped,
            directories_created,
        }) => {
            tracing::info!(
                "Finished processing files: {} moved, {} skipped, {} directories created",
                moved,
                skipped,
                directories_created
            );
        }
    }
}

fn print_plan(term: &Term, report: &SortReport) {
    let plan = &report.plan;
    term.write_line(&format!(
        "{} {}",
        style("Dry run").bold().cyan(),
        style("(no files were moved)").dim()
    ))
    .ok();
    term.write_line("").ok();

    for planned in &plan.moves {
        let relative = planned
            .destination()
            .strip_prefix(&plan.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| planned.destination());
        term.write_line(&format!(
            "  {} {} {}",
            planned.source.path().display(),
            style("->").dim(),
            style(relative.display()).green()
        ))
        .ok();
    }

    for skipped in &plan.skipped {
        term.write_line(&format!(
            "  {} {} {}",
            style("skip").yellow(),
            skipped.path.display(),
            style(&skipped.reason).dim()
        ))
        .ok();
    }

    term.write_line("").ok();
    term.write_line(&format!(
        "  {} of {} files would move, {} skipped",
        style(plan.moves.len()).cyan(),
        style(plan.eligible_files).cyan(),
        style(plan.skipped.len()).yellow()
    ))
    .ok();
}

fn print_json_matches(source: &Path, target: &Path, matches: &[MatchResult]) {
    let output = serde_json::json!({
        "source": source,
        "target": target,
        "match_count": matches.len(),
        "matches": matches.iter().map(|m| {
            serde_json::json!({
                "source": m.source.path(),
                "target": m.target.path(),
            })
        }).collect::<Vec<_>>()
    });

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to render JSON output: {}", e),
    }
}
