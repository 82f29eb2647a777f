//! `grumble`: generate a batch of synthetic product reviews, score their
//! sentiment and report the most common complaints.
//!
//! # Usage
//!
//! ```
//! grumble --count 500 --seed 42
//! grumble --config grumble.toml --json
//! ```
//!
//! Writes the raw and analyzed tables as CSV snapshots, then prints a
//! summary to stdout. Logs go to stderr; set `RUST_LOG` to change verbosity.

mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grumble_pipeline::{Pipeline, snapshot};
use rand::{SeedableRng, rngs::StdRng};
use settings::Overrides;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "grumble", version, about = "Review sentiment and complaint mining")]
struct Args {
  /// Path to an optional TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "grumble.toml")]
  config: PathBuf,

  /// Number of reviews to generate.
  #[arg(short = 'n', long)]
  count: Option<usize>,

  /// Seed for a reproducible run.
  #[arg(long)]
  seed: Option<u64>,

  /// Where to write the raw review table.
  #[arg(long, value_name = "PATH")]
  raw_out: Option<PathBuf>,

  /// Where to write the analyzed review table.
  #[arg(long, value_name = "PATH")]
  results_out: Option<PathBuf>,

  /// Print the summary as JSON instead of text.
  #[arg(long)]
  json: bool,
}

impl Args {
  fn overrides(&self) -> Overrides {
    Overrides {
      review_count:     self.count,
      seed:             self.seed,
      raw_snapshot:     self.raw_out.clone(),
      results_snapshot: self.results_out.clone(),
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let cfg = settings::load(&args.config, &args.overrides())
    .context("failed to load configuration")?;
  tracing::debug!(?cfg, "resolved configuration");

  let mut rng = match cfg.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let pipeline = Pipeline::standard().context("failed to build pipeline")?;
  let analysis = pipeline
    .run(cfg.review_count, &mut rng)
    .with_context(|| format!("failed to analyze {} reviews", cfg.review_count))?;

  snapshot::save_raw(&analysis.raw, &cfg.raw_snapshot).with_context(|| {
    format!("failed to write {}", cfg.raw_snapshot.display())
  })?;
  snapshot::save_results(&analysis.analyzed, &cfg.results_snapshot)
    .with_context(|| {
      format!("failed to write {}", cfg.results_snapshot.display())
    })?;

  let summary = analysis.summary();
  if args.json {
    let json = serde_json::to_string_pretty(&summary)
      .context("failed to serialize summary")?;
    println!("{json}");
  } else {
    print!("{summary}");
  }

  Ok(())
}
