//! Mean silhouette scoring of a finished clustering.
//!
//! Every point is hard-assigned to its nearest final centroid under
//! Euclidean distance — always Euclidean, independent of the selector the
//! clustering ran with. Per point, cohesion is the mean distance to the
//! other members of its own cluster and separation the minimum mean
//! distance to another cluster's members; the silhouette is
//! `(separation - cohesion) / max(separation, cohesion)`, in `[-1, 1]`.
//! The final score averages per-cluster means across clusters
//! (cluster-weighted, not point-weighted).
//!
//! Boundary policies, chosen so no run emits NaN:
//! - a point whose cluster has a single member scores 0.0;
//! - empty clusters are skipped both in the separation minimum and in the
//!   outer average; a point with no non-empty external cluster scores 0.0;
//! - when cohesion and separation are both 0, the point scores 0.0.

use rayon::prelude::*;

use crate::cluster::assign::assign;
use crate::distance::{distance, EUCLIDEAN};
use crate::error::Result;
use crate::point::Point;

/// Mean silhouette coefficient of `points` hard-assigned to `centroids`.
pub fn score(points: &[Point], centroids: &[Point]) -> Result<f64> {
  let mut members: Vec<Vec<&Point>> = vec![Vec::new(); centroids.len()];
  for point in points {
    members[assign(point, centroids, EUCLIDEAN)?].push(point);
  }

  // One scoring task per cluster, as independent as the merge phase.
  let cluster_means = members
    .par_iter()
    .enumerate()
    .map(|(id, cluster)| -> Result<Option<f64>> {
      if cluster.is_empty() {
        return Ok(None);
      }
      let mut total = 0.0;
      for &point in cluster {
        total += point_silhouette(point, id, &members)?;
      }
      Ok(Some(total / cluster.len() as f64))
    })
    .collect::<Result<Vec<_>>>()?;

  let occupied: Vec<f64> = cluster_means.into_iter().flatten().collect();
  if occupied.is_empty() {
    return Ok(0.0);
  }
  Ok(occupied.iter().sum::<f64>() / occupied.len() as f64)
}

fn point_silhouette(point: &Point, own: usize, members: &[Vec<&Point>]) -> Result<f64> {
  let cluster = &members[own];
  if cluster.len() < 2 {
    // Cohesion denominator would be zero.
    return Ok(0.0);
  }

  // The member set includes `point` itself at distance 0; the divisor
  // excludes it.
  let mut within = 0.0;
  for &other in cluster {
    within += distance(point, other, EUCLIDEAN)?;
  }
  let cohesion = within / (cluster.len() - 1) as f64;

  let mut separation = f64::INFINITY;
  for (id, other_cluster) in members.iter().enumerate() {
    if id == own || other_cluster.is_empty() {
      continue;
    }
    let mut toward = 0.0;
    for &other in other_cluster {
      toward += distance(point, other, EUCLIDEAN)?;
    }
    separation = separation.min(toward / other_cluster.len() as f64);
  }
  if !separation.is_finite() {
    return Ok(0.0);
  }

  let widest = separation.max(cohesion);
  if widest == 0.0 {
    return Ok(0.0);
  }
  Ok((separation - cohesion) / widest)
}
