//! Iteration loop: broadcast, round, compare, stop.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cluster::engine::run_round;
use crate::cluster::init::{sample_positions, seed_centroids};
use crate::cluster::silhouette;
use crate::config::RunConfig;
use crate::distance::distance;
use crate::error::{KmeansError, Result};
use crate::point::Point;
use crate::storage;

/// Controller lifecycle. `Converged` and `Exhausted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
  Initializing,
  Iterating,
  Converged,
  Exhausted,
}

/// Result of a finished run.
#[derive(Debug)]
pub struct RunOutcome {
  /// Final centroids, in cluster-id order.
  pub centroids: Vec<Point>,
  /// Terminal state the run ended in.
  pub state: RunState,
  /// Number of rounds executed.
  pub iterations: usize,
  /// Mean silhouette coefficient of the final clustering.
  pub silhouette: f64,
  /// Time spent seeding the initial centroids.
  pub init_elapsed: Duration,
}

/// Owns the iteration barrier: seeds centroids, fans each round out to the
/// engine against a read-only centroid snapshot, compares old and new
/// centroids, and decides continue or stop.
pub struct ConvergenceController {
  config: RunConfig,
  state: RunState,
  handoff_dir: Option<PathBuf>,
}

impl ConvergenceController {
  pub fn new(config: RunConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self {
      config,
      state: RunState::Initializing,
      handoff_dir: None,
    })
  }

  /// Spill each round's centroids through `dir` (one file per cluster,
  /// deleted after being read back) instead of handing them over purely
  /// in-process. Only needed when the handoff must be durable.
  pub fn with_handoff_dir(mut self, dir: PathBuf) -> Self {
    self.handoff_dir = Some(dir);
    self
  }

  pub fn state(&self) -> RunState {
    self.state
  }

  /// Run the full clustering over `points`: initialize, iterate until
  /// convergence or exhaustion, then score the final clustering.
  ///
  /// Iterations are strictly sequential; a round only starts once the
  /// previous round's centroid array is finalized. Any failure inside a
  /// round aborts the run as [`KmeansError::IterationFailure`].
  pub fn run(&mut self, points: &[Point]) -> Result<RunOutcome> {
    let mut rng: StdRng = match self.config.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };

    self.state = RunState::Initializing;
    let init_start = Instant::now();
    let positions = sample_positions(&mut rng, self.config.k, self.config.dataset_size)?;
    let mut centroids = seed_centroids(points, &positions)?;
    let init_elapsed = init_start.elapsed();

    self.state = RunState::Iterating;
    let mut iteration = 0;
    let terminal = loop {
      iteration += 1;
      let next = self.execute_round(points, &centroids, iteration)?;
      let stop = converged(&centroids, &next, self.config.distance, self.config.threshold)?;
      centroids = next;

      if stop {
        break RunState::Converged;
      }
      // Exhaustion fires one round short of the cap; `>=` keeps
      // max.iteration == 1 from looping forever.
      if iteration >= self.config.max_iterations.saturating_sub(1) {
        break RunState::Exhausted;
      }
    };

    self.state = terminal;
    let silhouette = silhouette::score(points, &centroids)?;
    Ok(RunOutcome {
      centroids,
      state: terminal,
      iterations: iteration,
      silhouette,
      init_elapsed,
    })
  }

  fn execute_round(
    &self,
    points: &[Point],
    centroids: &[Point],
    iteration: usize,
  ) -> Result<Vec<Point>> {
    let round = || -> Result<Vec<Point>> {
      let next = run_round(points, centroids, self.config.distance)?;
      match &self.handoff_dir {
        Some(dir) => {
          storage::write_round(dir, &next)?;
          storage::collect_round(dir, next.len())
        }
        None => Ok(next),
      }
    };
    round().map_err(|source| KmeansError::IterationFailure {
      iteration,
      source: Box::new(source),
    })
  }
}

/// True when every centroid moved at most `threshold` under the configured
/// metric.
fn converged(old: &[Point], new: &[Point], selector: i32, threshold: f64) -> Result<bool> {
  for (before, after) in old.iter().zip(new) {
    if distance(before, after, selector)? > threshold {
      return Ok(false);
    }
  }
  Ok(true)
}
