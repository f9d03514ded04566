//! Shape catalog built once from raw shape blocks and shared read-only
//!
//! Each block is a list of row strings where `#` marks a filled cell and any
//! other character is empty. Blocks are keyed by their header index and the
//! catalog position of a shape is its rank among those indices.

use ndarray::Array2;
use std::collections::BTreeMap;

use crate::io::configuration::FILLED_CELL;
use crate::spatial::shape::{CanonicalShape, Cell, ShapeVariant, normalize, variants_of};

/// Build the filled/empty pattern of a shape block
///
/// The pattern is as wide as the longest row; short rows are padded empty.
pub fn pattern_from_rows<S: AsRef<str>>(rows: &[S]) -> Array2<bool> {
    let chars: Vec<Vec<char>> = rows.iter().map(|row| row.as_ref().chars().collect()).collect();
    let width = chars.iter().map(Vec::len).max().unwrap_or(0);

    Array2::from_shape_fn((chars.len(), width), |(row, col)| {
        chars.get(row).and_then(|line| line.get(col)) == Some(&FILLED_CELL)
    })
}

/// Canonical shape of a filled/empty pattern
pub fn shape_from_pattern(pattern: &Array2<bool>) -> CanonicalShape {
    normalize(
        pattern
            .indexed_iter()
            .filter(|&(_, &filled)| filled)
            .map(|((row, col), _)| Cell::new(col as i32, row as i32)),
    )
}

/// A catalog shape with its precomputed variants
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    label: usize,
    shape: CanonicalShape,
    variants: Vec<ShapeVariant>,
}

impl CatalogEntry {
    fn new(label: usize, shape: CanonicalShape) -> Self {
        let variants = variants_of(&shape);
        Self {
            label,
            shape,
            variants,
        }
    }

    /// Index from the shape block header
    pub const fn label(&self) -> usize {
        self.label
    }

    /// Base shape as parsed
    pub const fn shape(&self) -> &CanonicalShape {
        &self.shape
    }

    /// Deduplicated symmetric variants
    pub fn variants(&self) -> &[ShapeVariant] {
        &self.variants
    }

    /// Cell count shared by every variant
    pub const fn area(&self) -> usize {
        self.shape.area()
    }
}

/// Ordered, immutable mapping from shape position to variant lists
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    entries: Vec<CatalogEntry>,
}

impl ShapeCatalog {
    /// Build the catalog from raw shape blocks keyed by header index
    pub fn from_blocks<S: AsRef<str>>(blocks: &BTreeMap<usize, Vec<S>>) -> Self {
        let entries = blocks
            .iter()
            .map(|(&label, rows)| {
                let pattern = pattern_from_rows(rows);
                CatalogEntry::new(label, shape_from_pattern(&pattern))
            })
            .collect();
        Self { entries }
    }

    /// Build the catalog from already parsed shapes, labelled by position
    pub fn from_shapes(shapes: impl IntoIterator<Item = CanonicalShape>) -> Self {
        let entries = shapes
            .into_iter()
            .enumerate()
            .map(|(label, shape)| CatalogEntry::new(label, shape))
            .collect();
        Self { entries }
    }

    /// Number of shapes
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no shapes were defined
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shape at a catalog position
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// All shapes in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
