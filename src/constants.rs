//! Default tuning parameters and on-disk names.

// ============================================================================
// Run defaults
// ============================================================================

/// Default cluster count (`k`).
pub const DEFAULT_K: usize = 3;

/// Default distance selector (2 = Euclidean).
pub const DEFAULT_DISTANCE: i32 = 2;

/// Default maximum per-centroid movement for convergence.
pub const DEFAULT_THRESHOLD: f64 = 0.0001;

/// Default iteration cap (`max.iteration`).
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

/// Default sampling population size (`dataset`).
pub const DEFAULT_DATASET_SIZE: usize = 10;

// ============================================================================
// Numeric behavior
// ============================================================================

/// Scale for the 5-decimal rounding applied to distances and means.
///
/// Rounding keeps independently computed floating-point paths comparable,
/// so convergence checks see stable values rather than summation noise.
pub const ROUND_SCALE: f64 = 1e5;

// ============================================================================
// File names
// ============================================================================

/// Final output file, written under the output directory.
pub const OUTPUT_FILE: &str = "centroids.txt";

/// Subdirectory used for the per-iteration centroid handoff.
pub const TEMP_SUBDIR: &str = "temp";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "pkmeans.json";
