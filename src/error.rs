//! Error types for pkmeans.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, KmeansError>;

/// All failures a clustering run can surface.
///
/// Every variant is terminal: there is no per-record skip or
/// controller-level retry, a failed run aborts.
#[derive(Debug, Error)]
pub enum KmeansError {
  /// Points of different dimensionality were compared or combined.
  #[error("dimension mismatch: expected {expected}, got {got}")]
  DimensionMismatch { expected: usize, got: usize },

  /// A point component that does not parse as a finite number.
  #[error("unparseable point component {value:?}")]
  ParseComponent { value: String },

  /// A dataset record that could not be turned into a point.
  #[error("malformed record at line {line}: {source}")]
  MalformedRecord {
    line: usize,
    #[source]
    source: Box<KmeansError>,
  },

  /// An intermediate centroid file with an unusable `<id>\t<point>` line.
  #[error("malformed centroid record {text:?}")]
  MalformedCentroid { text: String },

  /// Cannot draw `k` distinct sample positions from `n` rows.
  #[error("cannot sample {k} distinct centroids from {n} rows")]
  Initialization { k: usize, n: usize },

  /// The dataset ran out before a sampled position was reached.
  #[error("dataset ended after {rows} rows, before sampled position {position}")]
  DatasetExhausted { rows: usize, position: usize },

  /// A cluster id for which the merger received no partial sums.
  #[error("cluster {cluster} received no points")]
  EmptyCluster { cluster: usize },

  /// A distributed round did not complete.
  #[error("iteration {iteration} failed: {source}")]
  IterationFailure {
    iteration: usize,
    #[source]
    source: Box<KmeansError>,
  },

  /// A configuration value outside its valid range.
  #[error("invalid value for '{name}': {message}")]
  InvalidParameter { name: &'static str, message: String },

  /// An unreadable configuration file.
  #[error("invalid configuration: {0}")]
  Config(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}
