//! Cell coordinates, canonical polyomino shapes, and symmetry enumeration
//!
//! A shape is stored as a translated, sorted cell list so that two shapes
//! covering the same cells compare equal structurally. Variants are the
//! images of a shape under the eight symmetries of the square grid.

use std::collections::HashSet;
use std::fmt;
use std::ops::{Add, Sub};

/// Integer cell offset within a shape or a grid
///
/// Field order makes the derived ordering row-major (by `y`, then `x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row offset
    pub y: i32,
    /// Column offset
    pub x: i32,
}

impl Cell {
    /// Create a cell from column and row offsets
    pub const fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }
}

impl Add for Cell {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One of the eight symmetries of the square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symmetry {
    /// Number of clockwise quarter turns applied after the optional mirror
    pub quarter_turns: u8,
    /// Whether the shape is mirrored horizontally before rotating
    pub mirrored: bool,
}

impl Symmetry {
    /// All symmetries: identity and three rotations, then the same four mirrored
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Create a symmetry from a rotation count and mirror flag
    pub const fn new(quarter_turns: u8, mirrored: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            mirrored,
        }
    }

    /// Map a cell through this symmetry (result is not normalized)
    pub const fn apply(self, cell: Cell) -> Cell {
        let mut x = if self.mirrored { -cell.x } else { cell.x };
        let mut y = cell.y;
        let mut turns = 0;
        while turns < self.quarter_turns {
            let rotated_x = y;
            y = -x;
            x = rotated_x;
            turns += 1;
        }
        Cell::new(x, y)
    }
}

/// Polyomino normalized so its minimum coordinates are zero
///
/// Cells are unique and held in row-major order, so structural equality is
/// exact cell-set equality. The empty shape is permitted and has area 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CanonicalShape {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

/// A symmetric orientation of a base shape, itself in canonical form
pub type ShapeVariant = CanonicalShape;

impl CanonicalShape {
    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub const fn area(&self) -> usize {
        self.cells.len()
    }

    /// Whether the shape has no cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding box width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Bounding box height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// First cell in row-major order
    pub fn first_cell(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Apply a symmetry and re-normalize
    #[must_use]
    pub fn transformed(&self, symmetry: Symmetry) -> Self {
        normalize(self.cells.iter().map(|&cell| symmetry.apply(cell)))
    }
}

impl fmt::Display for CanonicalShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled: HashSet<Cell> = self.cells.iter().copied().collect();
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                let symbol = if filled.contains(&Cell::new(x as i32, y as i32)) {
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

/// Translate cells so the minimum x and y are zero and sort them row-major
///
/// Duplicate cells collapse. An empty input yields the empty shape.
pub fn normalize(cells: impl IntoIterator<Item = Cell>) -> CanonicalShape {
    let mut cells: Vec<Cell> = cells.into_iter().collect();
    if cells.is_empty() {
        return CanonicalShape::default();
    }

    let min_x = cells.iter().map(|cell| cell.x).min().unwrap_or(0);
    let min_y = cells.iter().map(|cell| cell.y).min().unwrap_or(0);
    let shift = Cell::new(min_x, min_y);
    for cell in &mut cells {
        *cell = *cell - shift;
    }
    cells.sort_unstable();
    cells.dedup();

    let width = cells.iter().map(|cell| cell.x).max().unwrap_or(0) as usize + 1;
    let height = cells.iter().map(|cell| cell.y).max().unwrap_or(0) as usize + 1;

    CanonicalShape {
        cells,
        width,
        height,
    }
}

/// Unique symmetric variants of a shape in first-seen order
///
/// Images are generated in [`Symmetry::ALL`] order. The empty shape has
/// exactly one (empty) variant.
pub fn variants_of(shape: &CanonicalShape) -> Vec<ShapeVariant> {
    if shape.is_empty() {
        return vec![CanonicalShape::default()];
    }

    let mut seen = HashSet::new();
    let mut variants = Vec::new();
    for symmetry in Symmetry::ALL {
        let variant = shape.transformed(symmetry);
        if seen.insert(variant.cells.clone()) {
            variants.push(variant);
        }
    }
    variants
}
