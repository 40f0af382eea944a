//! Centroid initialization by uniform sampling without replacement.

use rand::Rng;

use crate::error::{KmeansError, Result};
use crate::point::Point;

/// Draw `k` distinct row positions uniformly from `[0, n)`, sorted
/// ascending. Duplicate draws are rejected and retried.
pub fn sample_positions<R: Rng>(rng: &mut R, k: usize, n: usize) -> Result<Vec<usize>> {
  if k >= n {
    return Err(KmeansError::Initialization { k, n });
  }
  let mut positions: Vec<usize> = Vec::with_capacity(k);
  while positions.len() < k {
    let position = rng.gen_range(0..n);
    if !positions.contains(&position) {
      positions.push(position);
    }
  }
  positions.sort_unstable();
  Ok(positions)
}

/// Extract the rows at the pre-sorted `positions` in one sequential pass,
/// assigning extracted row `j` to the `j`-th requested position's centroid.
///
/// The dataset may not be cheaply addressable, so positions are visited in
/// ascending order and a single pass suffices.
pub fn seed_centroids(rows: &[Point], positions: &[usize]) -> Result<Vec<Point>> {
  let mut centroids = Vec::with_capacity(positions.len());
  let mut next = 0;
  for (row, point) in rows.iter().enumerate() {
    if next == positions.len() {
      break;
    }
    if row == positions[next] {
      centroids.push(point.clone());
      next += 1;
    }
  }
  if next < positions.len() {
    return Err(KmeansError::DatasetExhausted {
      rows: rows.len(),
      position: positions[next],
    });
  }
  Ok(centroids)
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;

  fn rows(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(vec![i as f64])).collect()
  }

  #[test]
  fn test_sample_positions_distinct_and_sorted() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
      let positions = sample_positions(&mut rng, 5, 8).unwrap();
      assert_eq!(positions.len(), 5);
      assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
      assert!(positions.iter().all(|&p| p < 8));
    }
  }

  #[test]
  fn test_sample_positions_rejects_k_not_below_n() {
    let mut rng = StdRng::seed_from_u64(42);
    assert!(matches!(
      sample_positions(&mut rng, 4, 4),
      Err(KmeansError::Initialization { k: 4, n: 4 })
    ));
    assert!(sample_positions(&mut rng, 5, 4).is_err());
  }

  #[test]
  fn test_seed_centroids_extracts_requested_rows() {
    let rows = rows(10);
    let centroids = seed_centroids(&rows, &[1, 4, 7]).unwrap();
    assert_eq!(centroids.len(), 3);
    assert_eq!(centroids[0].components(), &[1.0]);
    assert_eq!(centroids[1].components(), &[4.0]);
    assert_eq!(centroids[2].components(), &[7.0]);
  }

  #[test]
  fn test_seed_centroids_short_dataset() {
    let rows = rows(3);
    assert!(matches!(
      seed_centroids(&rows, &[0, 5]),
      Err(KmeansError::DatasetExhausted {
        rows: 3,
        position: 5
      })
    ));
  }

  #[test]
  fn test_seeded_sampling_is_reproducible() {
    let a = sample_positions(&mut StdRng::seed_from_u64(9), 3, 100).unwrap();
    let b = sample_positions(&mut StdRng::seed_from_u64(9), 3, 100).unwrap();
    assert_eq!(a, b);
  }
}
