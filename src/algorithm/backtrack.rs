//! Exact backtracking search over anchor cells
//!
//! The search repeatedly takes the first free cell in row-major order and
//! either covers it with an unplaced piece or, when the grid has slack, leaves
//! it permanently empty. Because every cell before the anchor is occupied, a
//! variant can only cover the anchor with its own first cell, so one alignment
//! per variant is enough.

use bitvec::prelude::*;

use crate::algorithm::{
    deadline::Deadline,
    piece::{Piece, placement_order},
    strategy::{PackingStrategy, SearchOutcome},
};
use crate::spatial::{OccupancyGrid, shape::Cell};

/// Exhaustive solver, complete when allowed to run to the end
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver;

impl PackingStrategy for ExactSolver {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn pack(
        &self,
        width: usize,
        height: usize,
        pieces: &[Piece<'_>],
        deadline: &Deadline,
    ) -> SearchOutcome {
        if pieces.is_empty() {
            return SearchOutcome::Fit;
        }

        let ordered = placement_order(pieces);
        let mut search = Search::new(OccupancyGrid::new(width, height), &ordered, deadline);
        let outcome = match search.cover_from(0) {
            Ok(true) => SearchOutcome::Fit,
            Ok(false) => SearchOutcome::Exhausted,
            Err(SearchTimeout) => SearchOutcome::TimedOut,
        };

        log::trace!(
            "exact search on {width}x{height} with {} pieces: {outcome} after {} nodes",
            pieces.len(),
            search.nodes
        );
        outcome
    }
}

/// Raised from the first recursive entry that finds the deadline expired
#[derive(Debug, Clone, Copy)]
struct SearchTimeout;

struct Search<'p, 'a> {
    grid: OccupancyGrid,
    pieces: &'p [Piece<'a>],
    placed: BitVec,
    remaining_area: usize,
    deadline: &'p Deadline,
    nodes: u64,
}

impl<'p, 'a> Search<'p, 'a> {
    fn new(grid: OccupancyGrid, pieces: &'p [Piece<'a>], deadline: &'p Deadline) -> Self {
        Self {
            grid,
            pieces,
            placed: bitvec![0; pieces.len()],
            remaining_area: pieces.iter().map(Piece::area).sum(),
            deadline,
            nodes: 0,
        }
    }

    /// Place all unplaced pieces, with anchors searched from row-major `start`
    ///
    /// Cells skipped as empty in this frame stay occupied while deeper frames
    /// run and are released before returning.
    fn cover_from(&mut self, start: usize) -> Result<bool, SearchTimeout> {
        let mut skipped = Vec::new();
        let result = self.cover_anchors(start, &mut skipped);
        for cell in skipped {
            self.grid.release(cell);
        }
        result
    }

    fn cover_anchors(
        &mut self,
        start: usize,
        skipped: &mut Vec<Cell>,
    ) -> Result<bool, SearchTimeout> {
        let mut scan_from = start;
        loop {
            if self.deadline.is_expired() {
                return Err(SearchTimeout);
            }
            self.nodes += 1;

            // Zero-area pieces never need a cell
            if self.remaining_area == 0 {
                return Ok(true);
            }
            let free = self.grid.free_count();
            if self.remaining_area > free {
                return Ok(false);
            }
            let Some(anchor_index) = self.grid.first_free_from(scan_from) else {
                return Ok(false);
            };
            let anchor = self.grid.cell_at(anchor_index);

            if self.cover_anchor(anchor, anchor_index)? {
                return Ok(true);
            }

            // Leave the anchor empty for the rest of this branch
            if free == self.remaining_area {
                return Ok(false);
            }
            self.grid.occupy(anchor);
            skipped.push(anchor);
            scan_from = anchor_index + 1;
        }
    }

    /// Try every unplaced shape and variant with its first cell on `anchor`
    fn cover_anchor(&mut self, anchor: Cell, anchor_index: usize) -> Result<bool, SearchTimeout> {
        let pieces = self.pieces;
        let mut previous_shape = None;

        for (index, piece) in pieces.iter().enumerate() {
            if self.placed.get(index).as_deref() == Some(&true) || piece.area() == 0 {
                continue;
            }
            // Pieces of one shape are contiguous and interchangeable
            if previous_shape == Some(piece.shape_index()) {
                continue;
            }
            previous_shape = Some(piece.shape_index());

            for variant in piece.variants() {
                let Some(first) = variant.first_cell() else {
                    continue;
                };
                let origin = anchor - first;
                if !self.grid.can_place(variant, origin) {
                    continue;
                }

                self.grid.place(variant, origin);
                self.mark_placed(index, piece.area(), true);
                let result = self.cover_from(anchor_index + 1);
                self.mark_placed(index, piece.area(), false);
                self.grid.remove(variant, origin);

                if result? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn mark_placed(&mut self, index: usize, area: usize, placed: bool) {
        if let Some(mut bit) = self.placed.get_mut(index) {
            *bit = placed;
        }
        if placed {
            self.remaining_area -= area;
        } else {
            self.remaining_area += area;
        }
    }
}
