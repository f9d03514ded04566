//! Occupancy bitmap for a single packing attempt
//!
//! Cells are stored row-major in a bit vector. A grid is owned by exactly one
//! solver invocation and mutated through matched place/remove calls.

use bitvec::prelude::*;
use std::fmt;

use crate::spatial::shape::{Cell, ShapeVariant};

/// Row-major H×W occupancy bitmap with a running occupied count
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    bits: BitVec,
    width: usize,
    height: usize,
    occupied: usize,
}

impl OccupancyGrid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
            occupied: 0,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of occupied cells
    pub const fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Number of unoccupied cells
    pub fn free_count(&self) -> usize {
        self.bits.len() - self.occupied
    }

    /// Row-major index of a cell, if it lies inside the grid
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell at a row-major index
    pub const fn cell_at(&self, index: usize) -> Cell {
        if self.width == 0 {
            return Cell::new(0, 0);
        }
        Cell::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Whether a cell is occupied; cells outside the grid count as occupied
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.index_of(cell)
            .is_none_or(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Row-major index of the first unoccupied cell at or after `start`
    pub fn first_free_from(&self, start: usize) -> Option<usize> {
        self.bits
            .get(start..)
            .and_then(|bits| bits.first_zero())
            .map(|offset| start + offset)
    }

    /// Whether every cell of `variant` translated by `origin` is inside and free
    pub fn can_place(&self, variant: &ShapeVariant, origin: Cell) -> bool {
        variant
            .cells()
            .iter()
            .all(|&cell| !self.is_occupied(cell + origin))
    }

    /// Mark the cells of `variant` translated by `origin` as occupied
    ///
    /// Callers check [`Self::can_place`] first; cells outside the grid are ignored.
    pub fn place(&mut self, variant: &ShapeVariant, origin: Cell) {
        for &cell in variant.cells() {
            self.occupy(cell + origin);
        }
    }

    /// Release the cells of a previously placed variant
    pub fn remove(&mut self, variant: &ShapeVariant, origin: Cell) {
        for &cell in variant.cells() {
            self.release(cell + origin);
        }
    }

    /// Mark one cell as occupied
    pub fn occupy(&mut self, cell: Cell) {
        self.set(cell, true);
    }

    /// Mark one cell as free
    pub fn release(&mut self, cell: Cell) {
        self.set(cell, false);
    }

    fn set(&mut self, cell: Cell, value: bool) {
        let Some(index) = self.index_of(cell) else {
            return;
        };
        let Some(mut bit) = self.bits.get_mut(index) else {
            return;
        };
        if *bit != value {
            *bit = value;
            if value {
                self.occupied += 1;
            } else {
                self.occupied -= 1;
            }
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let symbol = if self.is_occupied(Cell::new(x as i32, y as i32)) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
