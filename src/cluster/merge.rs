//! Per-cluster merge (reduce phase).

use crate::error::{KmeansError, Result};
use crate::point::Point;

/// Merge every partial sum collected for one cluster id into its new
/// centroid: the mean of the total sum.
///
/// One invocation per cluster id per iteration; invocations are
/// independent. An empty partial set has no defined average and is
/// rejected with [`KmeansError::EmptyCluster`].
pub fn merge_final(cluster: usize, partials: Vec<Point>) -> Result<Point> {
  let mut partials = partials.into_iter();
  let mut total = partials
    .next()
    .ok_or(KmeansError::EmptyCluster { cluster })?;
  for partial in partials {
    total.merge(&partial)?;
  }
  total.mean()
}
