//! Command-line interface for counting fittable regions in puzzle files

use crate::algorithm::executor::{EngineConfig, PackingEngine};
use crate::io::configuration::{EXACT_PIECE_LIMIT, REGION_TIMEOUT_MS};
use crate::io::error::{Result, WithPath, invalid_input, invalid_parameter};
use crate::io::input::PuzzleInput;
use crate::io::progress::ProgressManager;
use clap::Parser;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "polypack")]
#[command(
    author,
    version,
    about = "Count the regions whose required polyominoes can all be packed"
)]
/// Command-line arguments for the region packing verifier
pub struct Cli {
    /// Puzzle files: shape blocks followed by region lines
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Largest piece count solved exactly; larger regions use greedy packing
    #[arg(short, long, default_value_t = EXACT_PIECE_LIMIT)]
    pub exact_limit: usize,

    /// Time budget per region in milliseconds
    #[arg(short, long, default_value_t = REGION_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Evaluate regions in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Engine configuration from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero
    pub fn engine_config(&self) -> Result<EngineConfig> {
        if self.timeout_ms == 0 {
            return Err(invalid_parameter(
                "timeout-ms",
                &self.timeout_ms,
                &"must be positive",
            ));
        }
        Ok(EngineConfig {
            exact_piece_limit: self.exact_limit,
            region_timeout: Duration::from_millis(self.timeout_ms),
            parallel: self.parallel,
        })
    }
}

/// Result of evaluating one puzzle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// Input path
    pub path: PathBuf,
    /// Number of region lines read
    pub regions: usize,
    /// Number of regions whose pieces all fit
    pub fit: usize,
}

/// Evaluates puzzle files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Evaluate every input file and print the fittable region counts
    ///
    /// A single input prints just its count; several inputs print one
    /// `path: count` line each.
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid or an input cannot be read
    // The count on stdout is the program's output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<Vec<FileSummary>> {
        let config = self.cli.engine_config()?;
        let inputs = self.cli.inputs.clone();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(inputs.len());
        }

        let mut summaries = Vec::with_capacity(inputs.len());
        for path in &inputs {
            summaries.push(self.process_file(path, config)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        for summary in &summaries {
            if summaries.len() == 1 {
                println!("{}", summary.fit);
            } else {
                println!("{}: {}", summary.path.display(), summary.fit);
            }
        }

        Ok(summaries)
    }

    /// Evaluate one puzzle file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or defines no shapes
    pub fn process_file(&mut self, path: &Path, config: EngineConfig) -> Result<FileSummary> {
        let start_time = Instant::now();
        let text = std::fs::read_to_string(path).with_path(path, "read")?;
        let input = PuzzleInput::parse(&text);
        if input.shapes.is_empty() {
            return Err(invalid_input(path, &"no shape blocks found"));
        }

        let engine = PackingEngine::from_blocks(&input.shapes, config);
        let bar = self.progress_manager.as_mut().map_or_else(ProgressBar::hidden, |pm| {
            pm.start_file(path, input.regions.len())
        });

        let fit_so_far = AtomicUsize::new(0);
        let verdicts = engine.evaluate_all_with(&input.regions, |verdict| {
            if verdict.is_fit() {
                let fit = fit_so_far.fetch_add(1, Ordering::Relaxed) + 1;
                bar.set_message(format!("{fit} fit"));
            }
            bar.inc(1);
        });
        let fit = verdicts.iter().filter(|verdict| verdict.is_fit()).count();

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(fit);
        }
        log::info!(
            "{}: {fit}/{} regions fit in {:.2?}",
            path.display(),
            verdicts.len(),
            start_time.elapsed()
        );

        Ok(FileSummary {
            path: path.to_path_buf(),
            regions: verdicts.len(),
            fit,
        })
    }
}
