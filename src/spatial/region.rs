//! Region specification lines of the form `<W>x<H>: c0 c1 c2 ...`

use std::fmt;
use std::str::FromStr;

/// Reasons a line is not a region specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionParseError {
    /// The line has no `:` separating dimensions from counts
    MissingSeparator {
        /// Offending line
        line: String,
    },
    /// The dimensions are not `<digits>x<digits>`
    InvalidDimensions {
        /// Text found before the separator
        dimensions: String,
    },
}

impl fmt::Display for RegionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { line } => {
                write!(f, "Region line '{line}' has no ':' separator")
            }
            Self::InvalidDimensions { dimensions } => {
                write!(f, "Region dimensions '{dimensions}' are not of the form <W>x<H>")
            }
        }
    }
}

impl std::error::Error for RegionParseError {}

/// Parsed region: grid dimensions and required count per shape position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionSpec {
    width: usize,
    height: usize,
    counts: Vec<usize>,
}

impl RegionSpec {
    /// Create a region from dimensions and counts
    pub const fn new(width: usize, height: usize, counts: Vec<usize>) -> Self {
        Self {
            width,
            height,
            counts,
        }
    }

    /// Parse a region line
    ///
    /// Count tokens that are not non-negative integers read as 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the line lacks the `<W>x<H>:` prefix
    pub fn parse(line: &str) -> Result<Self, RegionParseError> {
        let Some((dimensions, counts)) = line.trim().split_once(':') else {
            return Err(RegionParseError::MissingSeparator {
                line: line.to_string(),
            });
        };

        let invalid = || RegionParseError::InvalidDimensions {
            dimensions: dimensions.to_string(),
        };
        let (width, height) = dimensions.split_once('x').ok_or_else(invalid)?;
        let width = parse_dimension(width).ok_or_else(invalid)?;
        let height = parse_dimension(height).ok_or_else(invalid)?;

        let counts = counts
            .split_whitespace()
            .map(|token| token.parse().unwrap_or(0))
            .collect();

        Ok(Self::new(width, height, counts))
    }

    /// Grid width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Counts as written on the line
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of grid cells, saturating at `u64::MAX`
    pub const fn area(&self) -> u64 {
        (self.width as u64).saturating_mul(self.height as u64)
    }

    /// Counts fitted to a catalog of `shape_count` shapes
    ///
    /// Missing trailing counts are 0 and extra counts are dropped.
    pub fn counts_for(&self, shape_count: usize) -> impl Iterator<Item = usize> + '_ {
        (0..shape_count).map(|index| self.counts.get(index).copied().unwrap_or(0))
    }
}

impl FromStr for RegionSpec {
    type Err = RegionParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line)
    }
}

fn parse_dimension(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
