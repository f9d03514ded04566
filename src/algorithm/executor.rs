//! Region orchestration: piece lists, area pre-check, strategy choice, and counting
//!
//! Each region moves through `parsed → area checked → exact | greedy → fit | not fit`.
//! Nothing but the immutable [`ShapeCatalog`] is shared between regions, so
//! regions may be evaluated in parallel without changing the count.

use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::{
    algorithm::backtrack::ExactSolver,
    algorithm::deadline::Deadline,
    algorithm::greedy::GreedyPacker,
    algorithm::piece::{pieces_for_region, required_area},
    algorithm::strategy::{PackingStrategy, SearchOutcome},
    io::configuration::{EXACT_PIECE_LIMIT, MAX_GRID_DIMENSION, REGION_TIMEOUT_MS},
    spatial::{RegionSpec, ShapeCatalog},
};

/// Engine parameters controlling strategy selection and time budgets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Largest piece count handed to the exact solver
    pub exact_piece_limit: usize,
    /// Wall-clock budget per region
    pub region_timeout: Duration,
    /// Whether to evaluate regions on the rayon thread pool
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exact_piece_limit: EXACT_PIECE_LIMIT,
            region_timeout: Duration::from_millis(REGION_TIMEOUT_MS),
            parallel: false,
        }
    }
}

/// Strategy that produced a fit verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// No pieces were required
    Trivial,
    /// Exhaustive backtracking
    Exact,
    /// First-fit fallback
    Greedy,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trivial => write!(f, "trivial"),
            Self::Exact => write!(f, "exact"),
            Self::Greedy => write!(f, "greedy"),
        }
    }
}

/// Why a region was judged not to fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFitReason {
    /// The line is not a region specification
    Malformed,
    /// No shapes were defined at all
    EmptyCatalog,
    /// A required shape has no cells
    EmptyShape,
    /// The pieces need more cells than the region has
    AreaExceeded,
    /// The region is larger than [`MAX_GRID_DIMENSION`] on a side
    Oversized,
    /// The chosen strategy found no placement
    Exhausted,
    /// The region's deadline expired during the search
    TimedOut,
}

impl fmt::Display for NotFitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Malformed => "malformed region line",
            Self::EmptyCatalog => "no shapes defined",
            Self::EmptyShape => "requires a shape with no cells",
            Self::AreaExceeded => "pieces exceed region area",
            Self::Oversized => "region too large",
            Self::Exhausted => "no placement found",
            Self::TimedOut => "search timed out",
        };
        write!(f, "{text}")
    }
}

/// Final state of one region evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionVerdict {
    /// Every required piece was placed
    Fit {
        /// Strategy that found the placement
        strategy: StrategyKind,
    },
    /// The region does not count as fitting
    NotFit {
        /// Terminal reason
        reason: NotFitReason,
    },
}

impl RegionVerdict {
    /// Whether the region counts as fitting
    pub const fn is_fit(self) -> bool {
        matches!(self, Self::Fit { .. })
    }

    const fn not_fit(reason: NotFitReason) -> Self {
        Self::NotFit { reason }
    }
}

impl fmt::Display for RegionVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fit { strategy } => write!(f, "fit ({strategy})"),
            Self::NotFit { reason } => write!(f, "not fit ({reason})"),
        }
    }
}

/// Evaluates regions against a shared shape catalog
#[derive(Debug, Clone)]
pub struct PackingEngine {
    catalog: ShapeCatalog,
    config: EngineConfig,
}

impl PackingEngine {
    /// Create an engine over a built catalog
    pub const fn new(catalog: ShapeCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Build the catalog from raw shape blocks and create an engine
    pub fn from_blocks<S: AsRef<str>>(
        shapes_raw: &BTreeMap<usize, Vec<S>>,
        config: EngineConfig,
    ) -> Self {
        let catalog = ShapeCatalog::from_blocks(shapes_raw);
        for entry in catalog.entries() {
            log::debug!(
                "shape {}: area {}, {} variants",
                entry.label(),
                entry.area(),
                entry.variants().len()
            );
        }
        Self::new(catalog, config)
    }

    /// Parse and evaluate one region line
    ///
    /// Lines that are not region specifications are reported as
    /// [`NotFitReason::Malformed`].
    pub fn evaluate_line(&self, line: &str) -> RegionVerdict {
        match line.parse::<RegionSpec>() {
            Ok(spec) => self.evaluate(&spec),
            Err(error) => {
                log::warn!("Skipping region line: {error}");
                RegionVerdict::not_fit(NotFitReason::Malformed)
            }
        }
    }

    /// Evaluate a parsed region
    pub fn evaluate(&self, spec: &RegionSpec) -> RegionVerdict {
        let verdict = self.decide(spec);
        log::debug!(
            "region {}x{} {:?}: {verdict}",
            spec.width(),
            spec.height(),
            spec.counts()
        );
        verdict
    }

    fn decide(&self, spec: &RegionSpec) -> RegionVerdict {
        if self.catalog.is_empty() {
            return RegionVerdict::not_fit(NotFitReason::EmptyCatalog);
        }

        let required: Vec<_> = spec
            .counts_for(self.catalog.len())
            .zip(self.catalog.entries())
            .filter(|&(count, _)| count > 0)
            .collect();
        if required.is_empty() {
            return RegionVerdict::Fit {
                strategy: StrategyKind::Trivial,
            };
        }
        if let Some((_, entry)) = required
            .iter()
            .find(|(_, entry)| entry.area() == 0 || entry.variants().is_empty())
        {
            log::debug!("Region requires shape {} which has no cells", entry.label());
            return RegionVerdict::not_fit(NotFitReason::EmptyShape);
        }
        // Checked before any piece is built, so huge counts never allocate
        if required_area(&self.catalog, spec) > spec.area() {
            return RegionVerdict::not_fit(NotFitReason::AreaExceeded);
        }
        if spec.width() > MAX_GRID_DIMENSION || spec.height() > MAX_GRID_DIMENSION {
            log::warn!(
                "Region {}x{} exceeds the maximum dimension {MAX_GRID_DIMENSION}",
                spec.width(),
                spec.height()
            );
            return RegionVerdict::not_fit(NotFitReason::Oversized);
        }

        let pieces = pieces_for_region(&self.catalog, spec);
        let (kind, strategy): (StrategyKind, &dyn PackingStrategy) =
            if pieces.len() <= self.config.exact_piece_limit {
                (StrategyKind::Exact, &ExactSolver)
            } else {
                (StrategyKind::Greedy, &GreedyPacker)
            };

        let deadline = Deadline::after(self.config.region_timeout);
        match strategy.pack(spec.width(), spec.height(), &pieces, &deadline) {
            SearchOutcome::Fit => RegionVerdict::Fit { strategy: kind },
            SearchOutcome::Exhausted => RegionVerdict::not_fit(NotFitReason::Exhausted),
            SearchOutcome::TimedOut => {
                log::warn!(
                    "{} search on {}x{} with {} pieces timed out after {:?}",
                    strategy.name(),
                    spec.width(),
                    spec.height(),
                    pieces.len(),
                    self.config.region_timeout
                );
                RegionVerdict::not_fit(NotFitReason::TimedOut)
            }
        }
    }

    /// Evaluate every region line, preserving input order
    pub fn evaluate_all<S: AsRef<str> + Sync>(&self, region_lines: &[S]) -> Vec<RegionVerdict> {
        self.evaluate_all_with(region_lines, |_| {})
    }

    /// Evaluate every region line, calling `observer` as each verdict is reached
    ///
    /// With [`EngineConfig::parallel`] the observer runs on worker threads in
    /// completion order; the returned verdicts are always in input order.
    pub fn evaluate_all_with<S, F>(&self, region_lines: &[S], observer: F) -> Vec<RegionVerdict>
    where
        S: AsRef<str> + Sync,
        F: Fn(&RegionVerdict) + Sync,
    {
        let evaluate = |line: &S| {
            let verdict = self.evaluate_line(line.as_ref());
            observer(&verdict);
            verdict
        };

        if self.config.parallel {
            region_lines.par_iter().map(evaluate).collect()
        } else {
            region_lines.iter().map(evaluate).collect()
        }
    }

    /// Number of region lines whose pieces all fit
    pub fn count_fittable<S: AsRef<str> + Sync>(&self, region_lines: &[S]) -> usize {
        self.evaluate_all(region_lines)
            .into_iter()
            .filter(|verdict| verdict.is_fit())
            .count()
    }
}

/// Count the region lines whose required pieces all fit
///
/// Uses the default [`EngineConfig`]. Malformed lines, empty shapes, and
/// timeouts all count as not fitting; nothing is reported as an error.
pub fn count_fittable_regions<S, R>(shapes_raw: &BTreeMap<usize, Vec<S>>, region_lines: &[R]) -> usize
where
    S: AsRef<str>,
    R: AsRef<str> + Sync,
{
    PackingEngine::from_blocks(shapes_raw, EngineConfig::default()).count_fittable(region_lines)
}
