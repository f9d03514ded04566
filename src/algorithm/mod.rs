/// Exact backtracking region solver
pub mod backtrack;
/// Wall-clock budget for a single region
pub mod deadline;
/// Region orchestration and result aggregation
pub mod executor;
/// Non-backtracking first-fit fallback packer
pub mod greedy;
/// Pieces required by a region and their placement order
pub mod piece;
/// Common interface of the packing strategies
pub mod strategy;
