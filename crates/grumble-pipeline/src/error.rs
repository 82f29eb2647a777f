//! Error type for `grumble-pipeline`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] grumble_core::Error),

  #[error("rating distribution error: {0}")]
  Distribution(#[from] rand::distributions::WeightedError),

  /// The polarity scorer rejected a text. Not retried.
  #[error("polarity scorer failed: {0}")]
  Scorer(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The term weighter rejected the negative corpus. Not retried.
  #[error("term weighter failed: {0}")]
  Vectorizer(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("csv error: {0}")]
  Csv(#[from] csv::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
