//! Collaborator traits for the two text analyzers the pipeline consumes.
//!
//! The traits are implemented by analyzer backends (`grumble-lexicon`,
//! `grumble-tfidf`). The pipeline depends on these abstractions, not on any
//! concrete backend, so tests can substitute fixed-output fakes.

use serde::{Deserialize, Serialize};

// ─── Polarity ────────────────────────────────────────────────────────────────

/// Maps a piece of text to a compound polarity score.
pub trait PolarityScorer {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Compound polarity of `text`, in `[-1.0, 1.0]`.
  ///
  /// Implementations must be stateless across calls: the score of one text
  /// never depends on which texts were scored before it.
  fn compound(&self, text: &str) -> Result<f64, Self::Error>;
}

// ─── Term weighting ──────────────────────────────────────────────────────────

/// Corpus-level importance of one vocabulary term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
  pub term:   String,
  /// Sum of the term's weight over every document of the corpus.
  pub weight: f64,
}

/// Learns a vocabulary from a corpus and weighs each term.
pub trait TermWeighter {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fit on `documents` and return the learned vocabulary with corpus-level
  /// weights, in vocabulary order.
  ///
  /// An empty vocabulary is a valid result, not an error.
  fn weigh_terms(
    &self,
    documents: &[&str],
  ) -> Result<Vec<TermWeight>, Self::Error>;
}
