use std::cmp::Reverse;

use crate::spatial::{RegionSpec, ShapeCatalog, shape::ShapeVariant};

/// One required instance of a catalog shape within a region
///
/// Borrows the variant list from the shared catalog, so a piece never
/// outlives the catalog it was built from.
#[derive(Debug, Clone, Copy)]
pub struct Piece<'a> {
    shape_index: usize,
    area: usize,
    variants: &'a [ShapeVariant],
}

impl<'a> Piece<'a> {
    /// Create a piece for the shape at `shape_index` with the given variants
    pub fn new(shape_index: usize, variants: &'a [ShapeVariant]) -> Self {
        let area = variants.first().map_or(0, ShapeVariant::area);
        Self {
            shape_index,
            area,
            variants,
        }
    }

    /// Catalog position of the shape
    pub const fn shape_index(&self) -> usize {
        self.shape_index
    }

    /// Cell count of any variant
    pub const fn area(&self) -> usize {
        self.area
    }

    /// Orientations this piece may be placed in
    pub const fn variants(&self) -> &'a [ShapeVariant] {
        self.variants
    }
}

/// Expand a region's shape counts into one piece per required instance
///
/// Pieces come out grouped by shape, in catalog order.
pub fn pieces_for_region<'a>(catalog: &'a ShapeCatalog, spec: &RegionSpec) -> Vec<Piece<'a>> {
    let mut pieces = Vec::new();
    for (shape_index, count) in spec.counts_for(catalog.len()).enumerate() {
        let Some(entry) = catalog.get(shape_index) else {
            continue;
        };
        pieces.extend(std::iter::repeat_n(
            Piece::new(shape_index, entry.variants()),
            count,
        ));
    }
    pieces
}

/// Order pieces for placement: larger area first, then fewer variants first
///
/// The sort is stable, so pieces of one shape stay contiguous.
pub fn placement_order<'a>(pieces: &[Piece<'a>]) -> Vec<Piece<'a>> {
    let mut ordered = pieces.to_vec();
    ordered.sort_by_key(|piece| (Reverse(piece.area), piece.variants.len()));
    ordered
}

/// Cells a region's counts require, saturating at `u64::MAX`
///
/// Works from the counts alone, so it is safe for counts far too large to
/// expand into pieces.
pub fn required_area(catalog: &ShapeCatalog, spec: &RegionSpec) -> u64 {
    spec.counts_for(catalog.len())
        .zip(catalog.entries())
        .map(|(count, entry)| (count as u64).saturating_mul(entry.area() as u64))
        .fold(0, u64::saturating_add)
}
