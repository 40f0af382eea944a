//! Command-line driver: `pkmeans <input> <output>`.
//!
//! Reads the dataset from `<input>`, clusters it, and writes
//! `<output>/centroids.txt`. Run parameters come from an optional
//! `pkmeans.json` in the working directory; per-iteration centroids are
//! spilled through `<output>/temp` and deleted once consumed.

use std::env;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use pkmeans::constants::{CONFIG_FILE, TEMP_SUBDIR};
use pkmeans::{ConvergenceController, KmeansError, Result, RunConfig};

fn main() -> ExitCode {
  let args: Vec<String> = env::args().skip(1).collect();
  if args.len() != 2 {
    eprintln!("Usage: <input> <output>");
    return ExitCode::from(1);
  }

  match run(Path::new(&args[0]), Path::new(&args[1])) {
    Ok(()) => ExitCode::SUCCESS,
    Err(KmeansError::IterationFailure { iteration, source }) => {
      eprintln!("Iteration {iteration} failed: {source}");
      ExitCode::from(1)
    }
    Err(error) => {
      eprintln!("{error}");
      ExitCode::from(1)
    }
  }
}

fn run(input: &Path, output: &Path) -> Result<()> {
  let start = Instant::now();

  let config_path = Path::new(CONFIG_FILE);
  let config = if config_path.exists() {
    RunConfig::from_file(config_path)?
  } else {
    RunConfig::default()
  };

  let points = pkmeans::storage::read_points(input)?;

  let outcome = ConvergenceController::new(config)?
    .with_handoff_dir(output.join(TEMP_SUBDIR))
    .run(&points)?;

  pkmeans::storage::write_output(output, &outcome.centroids, outcome.silhouette)?;

  println!("execution time: {} ms", start.elapsed().as_millis());
  println!(
    "init centroid execution: {} ms",
    outcome.init_elapsed.as_millis()
  );
  println!("n_iter: {}", outcome.iterations);
  Ok(())
}
