//! Distance functions over points.
//!
//! One selector-driven family: `0` is Chebyshev, any positive `p` is
//! Minkowski-p (so `1` is Manhattan and `2` is Euclidean). Negative
//! selectors silently fall back to Euclidean, since only true metrics are
//! considered valid. Minkowski results are rounded to 5 decimal places so
//! that independently computed paths produce bit-identical values; the
//! convergence check depends on that stability.

use crate::error::{KmeansError, Result};
use crate::point::{round5, Point};

/// Selector for the Chebyshev metric.
pub const CHEBYSHEV: i32 = 0;
/// Selector for the Manhattan metric (Minkowski-1).
pub const MANHATTAN: i32 = 1;
/// Selector for the Euclidean metric (Minkowski-2).
pub const EUCLIDEAN: i32 = 2;

/// Distance between two equal-dimension points under `selector`.
pub fn distance(a: &Point, b: &Point, selector: i32) -> Result<f64> {
  if a.dimension() != b.dimension() {
    return Err(KmeansError::DimensionMismatch {
      expected: a.dimension(),
      got: b.dimension(),
    });
  }
  let selector = if selector < 0 { EUCLIDEAN } else { selector };
  if selector == CHEBYSHEV {
    Ok(chebyshev(a.components(), b.components()))
  } else {
    Ok(minkowski(a.components(), b.components(), selector))
  }
}

/// Max over dimensions of the absolute component difference.
#[inline]
fn chebyshev(a: &[f64], b: &[f64]) -> f64 {
  a.iter()
    .zip(b)
    .map(|(x, y)| (x - y).abs())
    .fold(0.0, f64::max)
}

/// `(Σ|x_i - y_i|^p)^(1/p)`, rounded to 5 decimals.
#[inline]
fn minkowski(a: &[f64], b: &[f64], p: i32) -> f64 {
  let total: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs().powi(p)).sum();
  round5(total.powf(1.0 / f64::from(p)))
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::{Rng, SeedableRng};

  use super::*;

  fn point(components: &[f64]) -> Point {
    Point::new(components.to_vec())
  }

  #[test]
  fn test_euclidean() {
    let a = point(&[0.0, 0.0]);
    let b = point(&[1.0, 1.0]);
    // sqrt(2) rounded to 5 decimals
    assert_eq!(distance(&a, &b, EUCLIDEAN).unwrap(), 1.41421);
  }

  #[test]
  fn test_manhattan() {
    let a = point(&[1.0, -2.0, 3.0]);
    let b = point(&[4.0, 2.0, 1.0]);
    assert_eq!(distance(&a, &b, MANHATTAN).unwrap(), 9.0);
  }

  #[test]
  fn test_chebyshev() {
    let a = point(&[1.0, -2.0, 3.0]);
    let b = point(&[4.0, 2.0, 1.0]);
    assert_eq!(distance(&a, &b, CHEBYSHEV).unwrap(), 4.0);
  }

  #[test]
  fn test_minkowski_three() {
    let a = point(&[0.0, 0.0]);
    let b = point(&[1.0, 1.0]);
    // (1 + 1)^(1/3) = 1.259921... -> 1.25992
    assert_eq!(distance(&a, &b, 3).unwrap(), 1.25992);
  }

  #[test]
  fn test_negative_selector_falls_back_to_euclidean() {
    let a = point(&[0.0, 0.0]);
    let b = point(&[3.0, 4.0]);
    assert_eq!(
      distance(&a, &b, -7).unwrap(),
      distance(&a, &b, EUCLIDEAN).unwrap()
    );
  }

  #[test]
  fn test_dimension_mismatch() {
    let a = point(&[0.0, 0.0]);
    let b = point(&[1.0]);
    assert!(matches!(
      distance(&a, &b, EUCLIDEAN),
      Err(KmeansError::DimensionMismatch { .. })
    ));
  }

  #[test]
  fn test_symmetry_and_identity_all_selectors() {
    let mut rng = StdRng::seed_from_u64(7);
    for selector in [CHEBYSHEV, MANHATTAN, EUCLIDEAN, 3, 4, -1] {
      for _ in 0..25 {
        let a = point(&[rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)]);
        let b = point(&[rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)]);
        let ab = distance(&a, &b, selector).unwrap();
        let ba = distance(&b, &a, selector).unwrap();
        assert_eq!(ab, ba, "symmetry under selector {selector}");
        assert!(ab >= 0.0);
        assert_eq!(distance(&a, &a, selector).unwrap(), 0.0);
      }
    }
  }

  #[test]
  fn test_triangle_inequality_sampled_triples() {
    // Each distance is individually rounded to 5 decimals, so allow the
    // worst-case combined rounding slack.
    const SLACK: f64 = 2e-5;
    let mut rng = StdRng::seed_from_u64(11);
    for selector in [CHEBYSHEV, MANHATTAN, EUCLIDEAN, 3] {
      for _ in 0..50 {
        let sample = |rng: &mut StdRng| {
          point(&[
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
          ])
        };
        let a = sample(&mut rng);
        let b = sample(&mut rng);
        let c = sample(&mut rng);
        let ac = distance(&a, &c, selector).unwrap();
        let ab = distance(&a, &b, selector).unwrap();
        let bc = distance(&b, &c, selector).unwrap();
        assert!(
          ac <= ab + bc + SLACK,
          "triangle inequality under selector {selector}: {ac} > {ab} + {bc}"
        );
      }
    }
  }
}
