//! pkmeans - partition-parallel k-means clustering with silhouette scoring
//!
//! # Architecture
//!
//! One clustering iteration is a **map / combine / reduce** round:
//!
//! - **Map**: every point is assigned to its nearest centroid, per
//!   partition, against a read-only centroid snapshot
//! - **Combine**: each partition folds its assignments into one partial
//!   sum per cluster id, cutting cross-partition data movement
//! - **Reduce**: one independent task per cluster id merges that id's
//!   partials into the next centroid
//!
//! The [`cluster::ConvergenceController`] owns the barrier between rounds:
//! iteration `n + 1` never starts before iteration `n`'s centroid array is
//! final. After convergence (or exhaustion of the iteration cap) the run is
//! scored with the mean silhouette coefficient.
//!
//! Partial sums merge associatively and commutatively, and distances and
//! means are rounded to a fixed 5 decimals, so results are identical
//! regardless of how the data is partitioned or in what order partials
//! arrive.

#![deny(clippy::all)]

pub mod cluster;
pub mod config;
pub mod constants;
pub mod distance;
pub mod error;
pub mod point;
pub mod storage;

// Re-export commonly used items
pub use cluster::{ConvergenceController, RunOutcome, RunState};
pub use config::RunConfig;
pub use error::{KmeansError, Result};
pub use point::Point;
