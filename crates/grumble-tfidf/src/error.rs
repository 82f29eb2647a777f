//! Error type for the TF-IDF vectorizer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid n-gram range ({min}, {max})")]
  InvalidNgramRange { min: usize, max: usize },

  #[error("min_df must be at least 1")]
  InvalidMinDf,

  #[error("max_df must be in (0, 1], got {0}")]
  InvalidMaxDf(f64),

  #[error("max_features must be at least 1")]
  InvalidMaxFeatures,

  #[error("invalid token pattern: {0}")]
  TokenPattern(#[from] regex::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
