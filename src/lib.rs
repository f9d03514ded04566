//! Polyomino region packing verifier
//!
//! Given a catalog of polyomino shapes and a list of rectangular regions, each
//! requiring a multiset of those shapes, counts the regions in which every
//! required piece can be placed without overlap. Small piece lists are decided
//! by an exact backtracking search under a time budget; larger ones fall back
//! to a first-fit greedy packer that never reports a false fit.

#![forbid(unsafe_code)]

/// Placement strategies and region orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Shapes, regions, and occupancy grids
pub mod spatial;

pub use algorithm::executor::{EngineConfig, PackingEngine, RegionVerdict, count_fittable_regions};
pub use io::error::{PackingError, Result};
