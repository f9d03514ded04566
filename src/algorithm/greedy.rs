//! First-fit packing without backtracking
//!
//! Every placement it commits to is valid, so a fit verdict is always correct;
//! a failure may be a false negative.

use crate::algorithm::{
    deadline::Deadline,
    piece::{Piece, placement_order},
    strategy::{PackingStrategy, SearchOutcome},
};
use crate::spatial::{OccupancyGrid, shape::Cell};

/// Fast fallback for regions with too many pieces to search exactly
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPacker;

impl PackingStrategy for GreedyPacker {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn pack(
        &self,
        width: usize,
        height: usize,
        pieces: &[Piece<'_>],
        deadline: &Deadline,
    ) -> SearchOutcome {
        let mut grid = OccupancyGrid::new(width, height);

        for piece in placement_order(pieces) {
            if deadline.is_expired() {
                return SearchOutcome::TimedOut;
            }
            if piece.area() == 0 {
                continue;
            }
            if place_first_fit(&mut grid, &piece).is_none() {
                log::trace!(
                    "greedy packing on {width}x{height} stuck on shape {} with {} cells free",
                    piece.shape_index(),
                    grid.free_count()
                );
                return SearchOutcome::Exhausted;
            }
        }
        SearchOutcome::Fit
    }
}

/// Place `piece` at the first free position, trying variants in order
///
/// Candidate origins are the top-left corners that keep the variant's bounding
/// box inside the grid, scanned row-major. Returns the variant index and origin
/// used, or `None` when nothing fits.
pub fn place_first_fit(grid: &mut OccupancyGrid, piece: &Piece<'_>) -> Option<(usize, Cell)> {
    for (variant_index, variant) in piece.variants().iter().enumerate() {
        let (Some(max_x), Some(max_y)) = (
            grid.width().checked_sub(variant.width()),
            grid.height().checked_sub(variant.height()),
        ) else {
            continue;
        };

        for y in 0..=max_y {
            for x in 0..=max_x {
                let origin = Cell::new(x as i32, y as i32);
                if grid.can_place(variant, origin) {
                    grid.place(variant, origin);
                    return Some((variant_index, origin));
                }
            }
        }
    }
    None
}
