//! Dataset and centroid I/O.
//!
//! All formats are plain text. The dataset is one comma-separated record
//! per line, no header. The per-round handoff is one file per cluster id
//! holding a single `"<clusterId>\t<c1>,<c2>,...,<cN>"` line, deleted after
//! being consumed. The final output is `centroids.txt`: one comma-joined
//! line per cluster in id order, then a trailing `"Silhouette: <score>"`
//! line.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::constants::OUTPUT_FILE;
use crate::error::{KmeansError, Result};
use crate::point::Point;

/// Read the whole dataset sequentially.
///
/// A record that fails to parse is fatal; there is no skip or recovery
/// policy for malformed input.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
  let reader = BufReader::new(File::open(path)?);
  let mut points = Vec::new();
  for (index, line) in reader.lines().enumerate() {
    let line = line?;
    let point = line
      .parse::<Point>()
      .map_err(|source| KmeansError::MalformedRecord {
        line: index + 1,
        source: Box::new(source),
      })?;
    points.push(point);
  }
  Ok(points)
}

/// Durably hand one round's centroids over: one file per cluster id.
pub fn write_round(dir: &Path, centroids: &[Point]) -> Result<()> {
  fs::create_dir_all(dir)?;
  for (id, centroid) in centroids.iter().enumerate() {
    let file = File::create(dir.join(format!("part-{id:05}")))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{id}\t{centroid}")?;
    writer.flush()?;
  }
  Ok(())
}

/// Read a round's centroids back from `dir`, then delete the directory.
///
/// Files may arrive in any order; each record carries its cluster id. A
/// missing id means that cluster produced no output.
pub fn collect_round(dir: &Path, k: usize) -> Result<Vec<Point>> {
  let mut centroids: Vec<Option<Point>> = vec![None; k];
  for entry in fs::read_dir(dir)? {
    let path = entry?.path();
    let content = fs::read_to_string(&path)?;
    let line = content
      .lines()
      .next()
      .ok_or_else(|| KmeansError::MalformedCentroid {
        text: String::new(),
      })?;
    let (id_text, point_text) =
      line
        .split_once('\t')
        .ok_or_else(|| KmeansError::MalformedCentroid {
          text: line.to_string(),
        })?;
    let id: usize = id_text
      .trim()
      .parse()
      .map_err(|_| KmeansError::MalformedCentroid {
        text: line.to_string(),
      })?;
    if id >= k {
      return Err(KmeansError::MalformedCentroid {
        text: line.to_string(),
      });
    }
    centroids[id] = Some(point_text.parse::<Point>()?);
  }
  fs::remove_dir_all(dir)?;

  centroids
    .into_iter()
    .enumerate()
    .map(|(id, centroid)| centroid.ok_or(KmeansError::EmptyCluster { cluster: id }))
    .collect()
}

/// Write the final centroids and silhouette score under `dir`.
pub fn write_output(dir: &Path, centroids: &[Point], silhouette: f64) -> Result<()> {
  fs::create_dir_all(dir)?;
  let file = File::create(dir.join(OUTPUT_FILE))?;
  let mut writer = BufWriter::new(file);
  for centroid in centroids {
    writeln!(writer, "{centroid}")?;
  }
  writeln!(writer, "Silhouette: {silhouette}")?;
  writer.flush()?;
  Ok(())
}
