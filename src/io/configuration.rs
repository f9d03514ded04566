//! Engine constants and runtime configuration defaults

// Branching grows with variants × free cells, so larger piece lists go greedy
/// Largest piece count solved by exhaustive search
pub const EXACT_PIECE_LIMIT: usize = 12;

/// Wall-clock budget for one region, in milliseconds
pub const REGION_TIMEOUT_MS: u64 = 6_000;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed region width or height
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Character marking a filled shape cell
pub const FILLED_CELL: char = '#';

// Progress bar display settings
/// Threshold for adding an overall files bar above the per-file bars
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 1;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
