//! Sentiment labels and the compound-score thresholds that produce them.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Compound scores at or above this value are [`SentimentLabel::Positive`].
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this value are [`SentimentLabel::Negative`].
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// The polarity class of a review.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  AsRefStr,
  EnumIter,
  EnumString,
)]
pub enum SentimentLabel {
  Positive,
  Negative,
  Neutral,
}

impl SentimentLabel {
  /// Map a compound score onto a label.
  pub fn classify(compound: f64) -> Self {
    if compound >= POSITIVE_THRESHOLD {
      Self::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
      Self::Negative
    } else {
      Self::Neutral
    }
  }
}

/// A label together with the compound score it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
  pub label: SentimentLabel,
  /// Compound polarity in `[-1.0, 1.0]`.
  pub score: f64,
}

impl Sentiment {
  pub fn from_compound(score: f64) -> Self {
    let score = score.clamp(-1.0, 1.0);
    Self {
      label: SentimentLabel::classify(score),
      score,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn thresholds_are_inclusive() {
    assert_eq!(SentimentLabel::classify(0.05), SentimentLabel::Positive);
    assert_eq!(SentimentLabel::classify(-0.05), SentimentLabel::Negative);
    assert_eq!(SentimentLabel::classify(0.0499), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::classify(-0.0499), SentimentLabel::Neutral);
    assert_eq!(SentimentLabel::classify(1.0), SentimentLabel::Positive);
    assert_eq!(SentimentLabel::classify(-1.0), SentimentLabel::Negative);
  }

  #[test]
  fn from_compound_clamps_into_range() {
    let s = Sentiment::from_compound(3.5);
    assert_eq!(s.score, 1.0);
    assert_eq!(s.label, SentimentLabel::Positive);
  }

  #[test]
  fn labels_display_with_column_spelling() {
    let names: Vec<String> =
      SentimentLabel::iter().map(|l| l.to_string()).collect();
    assert_eq!(names, ["Positive", "Negative", "Neutral"]);
    assert_eq!(
      SentimentLabel::from_str("Negative").unwrap(),
      SentimentLabel::Negative
    );
  }
}
