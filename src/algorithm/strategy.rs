use std::fmt;

use crate::algorithm::{deadline::Deadline, piece::Piece};

/// Result of one packing attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every piece was placed
    Fit,
    /// The strategy gave up without a placement
    Exhausted,
    /// The deadline expired before a verdict
    TimedOut,
}

impl SearchOutcome {
    /// Whether the region fits
    pub const fn is_fit(self) -> bool {
        matches!(self, Self::Fit)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fit => write!(f, "fit"),
            Self::Exhausted => write!(f, "exhausted"),
            Self::TimedOut => write!(f, "timed out"),
        }
    }
}

/// A way of deciding whether pieces fit a `width` × `height` grid
///
/// Pieces may arrive in any order; implementations apply
/// [`placement_order`](crate::algorithm::piece::placement_order) themselves.
pub trait PackingStrategy {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Attempt to place every piece without overlap inside the grid
    fn pack(
        &self,
        width: usize,
        height: usize,
        pieces: &[Piece<'_>],
        deadline: &Deadline,
    ) -> SearchOutcome;
}
