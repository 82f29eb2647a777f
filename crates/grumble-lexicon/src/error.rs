//! Error types for the lexicon analyzer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("lexicon line {line}: {reason}")]
  MalformedLine { line: usize, reason: String },

  #[error("valence for {word:?} must be finite, got {valence}")]
  InvalidValence { word: String, valence: f64 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
