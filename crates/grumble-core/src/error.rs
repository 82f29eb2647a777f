//! Error types for `grumble-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("review {0} has no clean text; run the cleaner first")]
  MissingCleanText(u32),

  #[error("review {0} has not been scored")]
  UnscoredReview(u32),

  #[error("rating {0} is outside 1..=5")]
  RatingOutOfRange(u8),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
