//! One assign + aggregate + merge round over partitioned data.
//!
//! This is the in-process realization of the execution-engine seam: the
//! dataset is split into partitions, each partition assigns its points and
//! folds them into local partial sums, and one independent merge task per
//! cluster id turns the collected partials into the next centroid set. Any
//! task failure fails the round.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::cluster::aggregate::fold_partials;
use crate::cluster::assign::assign;
use crate::cluster::merge::merge_final;
use crate::error::Result;
use crate::point::Point;

/// Runs one full clustering round and returns the next centroid array.
///
/// `centroids` is the read-only broadcast snapshot for this round; tasks
/// share nothing mutable. A cluster id that attracts no points keeps its
/// previous centroid unchanged.
pub fn run_round(points: &[Point], centroids: &[Point], selector: i32) -> Result<Vec<Point>> {
  // Map + combine, per partition.
  let partials: Vec<HashMap<usize, Point>> = points
    .par_chunks(partition_len(points.len()))
    .map(|partition| {
      let mut pairs = Vec::with_capacity(partition.len());
      for point in partition {
        pairs.push((assign(point, centroids, selector)?, point.clone()));
      }
      fold_partials(pairs)
    })
    .collect::<Result<Vec<_>>>()?;

  // Reduce: one independent task per cluster id.
  (0..centroids.len())
    .into_par_iter()
    .map(|id| {
      let collected: Vec<Point> = partials
        .iter()
        .filter_map(|partition| partition.get(&id).cloned())
        .collect();
      if collected.is_empty() {
        Ok(centroids[id].clone())
      } else {
        merge_final(id, collected)
      }
    })
    .collect()
}

fn partition_len(rows: usize) -> usize {
  (rows / rayon::current_num_threads().max(1)).max(1)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::distance::EUCLIDEAN;

  fn point(components: &[f64]) -> Point {
    Point::new(components.to_vec())
  }

  #[test]
  fn test_round_recomputes_centroid_means() {
    let points = vec![
      point(&[0.0, 0.0]),
      point(&[0.0, 1.0]),
      point(&[10.0, 10.0]),
      point(&[10.0, 11.0]),
    ];
    let centroids = vec![point(&[0.0, 0.0]), point(&[10.0, 10.0])];
    let next = run_round(&points, &centroids, EUCLIDEAN).unwrap();
    assert_eq!(next.len(), 2);
    assert_eq!(next[0].components(), &[0.0, 0.5]);
    assert_eq!(next[1].components(), &[10.0, 10.5]);
  }

  #[test]
  fn test_round_carries_forward_unpopulated_cluster() {
    // Identical points all tie toward cluster 0; cluster 1 keeps its
    // previous centroid.
    let points = vec![point(&[5.0, 5.0]); 4];
    let centroids = vec![point(&[5.0, 5.0]), point(&[5.0, 5.0])];
    let next = run_round(&points, &centroids, EUCLIDEAN).unwrap();
    assert_eq!(next[0].components(), &[5.0, 5.0]);
    assert_eq!(next[1].components(), &[5.0, 5.0]);
  }

  #[test]
  fn test_round_fails_fast_on_dimension_mismatch() {
    let points = vec![point(&[0.0, 0.0]), point(&[0.0])];
    let centroids = vec![point(&[0.0, 0.0])];
    assert!(run_round(&points, &centroids, EUCLIDEAN).is_err());
  }

  #[test]
  fn test_round_matches_unpartitioned_fold() {
    // The combine phase must be semantically invisible: folding all
    // assignments in one batch yields the same centroids the partitioned
    // round produces.
    let points: Vec<Point> = (0..20)
      .map(|i| point(&[(i % 7) as f64, (i % 3) as f64]))
      .collect();
    let centroids = vec![point(&[0.0, 0.0]), point(&[6.0, 2.0])];

    let mut pairs = Vec::new();
    for p in &points {
      pairs.push((assign(p, &centroids, EUCLIDEAN).unwrap(), p.clone()));
    }
    let whole = fold_partials(pairs).unwrap();
    let expected: Vec<Point> = (0..centroids.len())
      .map(|id| merge_final(id, vec![whole[&id].clone()]).unwrap())
      .collect();

    let next = run_round(&points, &centroids, EUCLIDEAN).unwrap();
    assert_eq!(next, expected);
  }
}
