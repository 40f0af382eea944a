//! Nearest-centroid assignment (map phase).

use crate::distance::distance;
use crate::error::{KmeansError, Result};
use crate::point::Point;

/// Find the nearest centroid for one point under `selector`.
///
/// Linear scan with strict less-than improvement, so ties keep the first
/// (lowest-id) centroid. No side effects; safe to run per point in any
/// order and across any partitioning of the dataset.
pub fn assign(point: &Point, centroids: &[Point], selector: i32) -> Result<usize> {
  if centroids.is_empty() {
    return Err(KmeansError::InvalidParameter {
      name: "centroids",
      message: "cannot assign against an empty centroid set".to_string(),
    });
  }

  let mut nearest = 0;
  let mut best = f64::INFINITY;
  for (id, centroid) in centroids.iter().enumerate() {
    let candidate = distance(point, centroid, selector)?;
    if candidate < best {
      best = candidate;
      nearest = id;
    }
  }
  Ok(nearest)
}
