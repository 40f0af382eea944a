//! Run configuration.
//!
//! The recognized option surface: `k`, `distance`, `threshold`,
//! `max.iteration`, `dataset`, `seed`. Options load from an optional JSON
//! file (see [`crate::constants::CONFIG_FILE`]); anything absent keeps its
//! default, unknown keys are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::{
  DEFAULT_DATASET_SIZE, DEFAULT_DISTANCE, DEFAULT_K, DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD,
};
use crate::error::{KmeansError, Result};

/// Configuration for one clustering run.
///
/// Immutable for the duration of the run; the centroid array is threaded
/// through iterations by value, never through configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
  /// Number of clusters (k).
  pub k: usize,
  /// Distance selector: 0 Chebyshev, 1 Manhattan, 2 Euclidean, p > 2
  /// Minkowski-p; negative values fall back to Euclidean.
  pub distance: i32,
  /// Maximum allowed per-centroid movement for the run to converge.
  pub threshold: f64,
  /// Iteration cap.
  #[serde(rename = "max.iteration")]
  pub max_iterations: usize,
  /// Dataset row count, used only for sampling initial centroids.
  #[serde(rename = "dataset")]
  pub dataset_size: usize,
  /// Random seed (None for entropy).
  pub seed: Option<u64>,
}

impl Default for RunConfig {
  fn default() -> Self {
    Self {
      k: DEFAULT_K,
      distance: DEFAULT_DISTANCE,
      threshold: DEFAULT_THRESHOLD,
      max_iterations: DEFAULT_MAX_ITERATIONS,
      dataset_size: DEFAULT_DATASET_SIZE,
      seed: None,
    }
  }
}

impl RunConfig {
  pub fn new(k: usize) -> Self {
    Self {
      k,
      ..Default::default()
    }
  }

  pub fn with_distance(mut self, distance: i32) -> Self {
    self.distance = distance;
    self
  }

  pub fn with_threshold(mut self, threshold: f64) -> Self {
    self.threshold = threshold;
    self
  }

  pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
    self.max_iterations = max_iterations;
    self
  }

  pub fn with_dataset_size(mut self, dataset_size: usize) -> Self {
    self.dataset_size = dataset_size;
    self
  }

  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  /// Load from a JSON file.
  pub fn from_file(path: &Path) -> Result<Self> {
    let text = fs::read_to_string(path)?;
    let config: RunConfig = serde_json::from_str(&text)
      .map_err(|error| KmeansError::Config(format!("{}: {error}", path.display())))?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.k == 0 {
      return Err(KmeansError::InvalidParameter {
        name: "k",
        message: "cluster count must be positive".to_string(),
      });
    }
    if !(self.threshold > 0.0 && self.threshold.is_finite()) {
      return Err(KmeansError::InvalidParameter {
        name: "threshold",
        message: format!("must be a positive finite number, got {}", self.threshold),
      });
    }
    if self.max_iterations == 0 {
      return Err(KmeansError::InvalidParameter {
        name: "max.iteration",
        message: "iteration cap must be positive".to_string(),
      });
    }
    Ok(())
  }
}
