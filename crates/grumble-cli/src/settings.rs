//! Run configuration.
//!
//! Layered lowest to highest: built-in defaults, the optional TOML file,
//! `GRUMBLE_*` environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use config::{
  Config, ConfigError, Environment, File, builder::DefaultState,
};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "GRUMBLE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
  #[serde(default = "default_review_count")]
  pub review_count:     usize,
  /// Fixed seed for a reproducible run. Unset draws from the OS.
  #[serde(default)]
  pub seed:             Option<u64>,
  #[serde(default = "default_raw_snapshot")]
  pub raw_snapshot:     PathBuf,
  #[serde(default = "default_results_snapshot")]
  pub results_snapshot: PathBuf,
}

fn default_review_count() -> usize { 1000 }

fn default_raw_snapshot() -> PathBuf { PathBuf::from("customer_reviews.csv") }

fn default_results_snapshot() -> PathBuf {
  PathBuf::from("analysis_results.csv")
}

/// Values given on the command line, which win over every other source.
#[derive(Debug, Default)]
pub struct Overrides {
  pub review_count:     Option<usize>,
  pub seed:             Option<u64>,
  pub raw_snapshot:     Option<PathBuf>,
  pub results_snapshot: Option<PathBuf>,
}

pub fn load(path: &Path, overrides: &Overrides) -> Result<RunConfig, ConfigError> {
  let builder = Config::builder()
    .add_source(File::from(path).required(false))
    .add_source(Environment::with_prefix(ENV_PREFIX));
  resolve(builder, overrides)
}

fn resolve(
  builder: config::ConfigBuilder<DefaultState>,
  overrides: &Overrides,
) -> Result<RunConfig, ConfigError> {
  let path = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string());
  builder
    .set_override_option(
      "review_count",
      overrides.review_count.map(|n| n.to_string()),
    )?
    .set_override_option("seed", overrides.seed.map(|s| s.to_string()))?
    .set_override_option("raw_snapshot", path(&overrides.raw_snapshot))?
    .set_override_option("results_snapshot", path(&overrides.results_snapshot))?
    .build()?
    .try_deserialize()
}
