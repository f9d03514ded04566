//! Spatial data structures for shapes, regions, and occupancy
//!
//! This module contains:
//! - Cell coordinates and canonical shapes with symmetry variants
//! - The shape catalog shared across regions
//! - Region specification parsing
//! - The occupancy grid mutated during packing

/// Shape catalog built from raw shape blocks
pub mod catalog;
/// Occupancy bitmap for packing attempts
pub mod grid;
/// Region specification parsing
pub mod region;
/// Cells, canonical shapes, and symmetry variants
pub mod shape;

pub use catalog::ShapeCatalog;
pub use grid::OccupancyGrid;
pub use region::RegionSpec;
