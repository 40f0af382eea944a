//! Point and centroid value type.
//!
//! A [`Point`] is a fixed-dimension numeric vector plus an aggregation
//! count: 1 for a raw observation, greater once the point represents a
//! partial sum of several observations. [`Point::merge`] and
//! [`Point::mean`] together are associative and commutative, so partial
//! sums can be folded in any grouping or order and still produce the same
//! final centroid.

use std::fmt;
use std::str::FromStr;

use crate::constants::ROUND_SCALE;
use crate::error::{KmeansError, Result};

/// Rounds to 5 decimal places.
///
/// Shared by distance computation and centroid averaging; the fixed
/// precision is what makes results reproducible across partitionings.
#[inline]
pub(crate) fn round5(value: f64) -> f64 {
  (value * ROUND_SCALE).round() / ROUND_SCALE
}

/// A point in the dataset, or a partial sum of several of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
  components: Vec<f64>,
  count: u64,
}

impl Point {
  /// A raw observation with `count = 1`.
  pub fn new(components: Vec<f64>) -> Self {
    Self {
      components,
      count: 1,
    }
  }

  pub fn dimension(&self) -> usize {
    self.components.len()
  }

  /// Number of observations aggregated into this point.
  pub fn count(&self) -> u64 {
    self.count
  }

  pub fn components(&self) -> &[f64] {
    &self.components
  }

  fn check_dimension(&self, other: &Point) -> Result<()> {
    if self.dimension() != other.dimension() {
      return Err(KmeansError::DimensionMismatch {
        expected: self.dimension(),
        got: other.dimension(),
      });
    }
    Ok(())
  }

  /// Component-wise addition; counts accumulate.
  pub fn merge(&mut self, other: &Point) -> Result<()> {
    self.check_dimension(other)?;
    for (component, value) in self.components.iter_mut().zip(&other.components) {
      *component += value;
    }
    self.count += other.count;
    Ok(())
  }

  /// `a + b` as a new point.
  pub fn sum(a: &Point, b: &Point) -> Result<Point> {
    let mut total = a.clone();
    total.merge(b)?;
    Ok(total)
  }

  /// The mean of the aggregated observations: each component divided by
  /// the count and rounded to 5 decimals, count reset to 1.
  pub fn mean(&self) -> Result<Point> {
    if self.count == 0 {
      return Err(KmeansError::InvalidParameter {
        name: "count",
        message: "cannot average a point aggregating zero observations".to_string(),
      });
    }
    let components = self
      .components
      .iter()
      .map(|component| round5(component / self.count as f64))
      .collect();
    Ok(Point {
      components,
      count: 1,
    })
  }
}

impl FromStr for Point {
  type Err = KmeansError;

  /// Parses the comma-joined text form. Every component must be a finite
  /// decimal number; anything else is fatal, there is no skip policy.
  fn from_str(text: &str) -> Result<Point> {
    let mut components = Vec::new();
    for token in text.split(',') {
      let token = token.trim();
      let value: f64 = token.parse().map_err(|_| KmeansError::ParseComponent {
        value: token.to_string(),
      })?;
      if !value.is_finite() {
        return Err(KmeansError::ParseComponent {
          value: token.to_string(),
        });
      }
      components.push(value);
    }
    Ok(Point::new(components))
  }
}

impl fmt::Display for Point {
  /// Comma-joined components; the aggregation count is not serialized.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, component) in self.components.iter().enumerate() {
      if index > 0 {
        write!(f, ",")?;
      }
      write!(f, "{component}")?;
    }
    Ok(())
  }
}
