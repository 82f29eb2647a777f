//! Review: the unit record flowing through every pipeline stage.
//!
//! A review is created once by the synthesizer and then only gains fields:
//! the cleaner fills `clean_text` (and defaults missing inputs), the scorer
//! fills `sentiment`. Records are never removed from a [`ReviewTable`].

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  sentiment::{Sentiment, SentimentLabel},
};

/// Substituted for a missing review text during cleaning.
pub const MISSING_TEXT_PLACEHOLDER: &str = "No review provided";

/// Neutral rating substituted for a missing rating during cleaning.
pub const DEFAULT_RATING: u8 = 3;

/// Inclusive bounds of a star rating.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

// ─── Text input ──────────────────────────────────────────────────────────────

/// Text handed to an analyzer: either real text or the missing-value marker.
///
/// Analyzers only ever see a `&str`; [`TextInput::as_str`] is the single place
/// where a missing value turns into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInput<'a> {
  Text(&'a str),
  Missing,
}

impl<'a> TextInput<'a> {
  pub fn as_str(&self) -> &'a str {
    match self {
      Self::Text(text) => text,
      Self::Missing => MISSING_TEXT_PLACEHOLDER,
    }
  }
}

impl<'a> From<Option<&'a str>> for TextInput<'a> {
  fn from(value: Option<&'a str>) -> Self {
    value.map_or(Self::Missing, Self::Text)
  }
}

// ─── Review ──────────────────────────────────────────────────────────────────

/// One row of the review table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
  /// 1-based, assigned in creation order, never reused.
  pub id:         u32,
  /// `None` is the missing-value marker.
  pub raw_text:   Option<String>,
  pub rating:     Option<u8>,
  /// Set by the cleaner; never `None` afterwards.
  pub clean_text: Option<String>,
  /// Set by the scorer; label and score are always written together.
  pub sentiment:  Option<Sentiment>,
}

impl Review {
  /// Build a freshly generated review. Fails if `rating` is outside 1..=5.
  pub fn new(id: u32, raw_text: Option<String>, rating: Option<u8>) -> Result<Self> {
    if id == 0 {
      return Err(Error::InvalidArgument("review ids start at 1".into()));
    }
    if let Some(r) = rating
      && !RATING_RANGE.contains(&r)
    {
      return Err(Error::RatingOutOfRange(r));
    }
    Ok(Self {
      id,
      raw_text,
      rating,
      clean_text: None,
      sentiment: None,
    })
  }

  /// The text an analyzer should see: cleaned text when available, otherwise
  /// the raw text, otherwise the missing marker.
  pub fn analysis_text(&self) -> TextInput<'_> {
    self
      .clean_text
      .as_deref()
      .or(self.raw_text.as_deref())
      .into()
  }

  /// Cleaned text, or an error naming this review if the cleaner has not run.
  pub fn require_clean_text(&self) -> Result<&str> {
    self
      .clean_text
      .as_deref()
      .ok_or(Error::MissingCleanText(self.id))
  }

  pub fn label(&self) -> Option<SentimentLabel> { self.sentiment.map(|s| s.label) }
}

// ─── Table ───────────────────────────────────────────────────────────────────

/// An ordered collection of reviews, in id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewTable {
  rows: Vec<Review>,
}

impl ReviewTable {
  pub fn new() -> Self { Self::default() }

  pub fn push(&mut self, review: Review) { self.rows.push(review); }

  pub fn len(&self) -> usize { self.rows.len() }

  pub fn is_empty(&self) -> bool { self.rows.is_empty() }

  pub fn iter(&self) -> std::slice::Iter<'_, Review> { self.rows.iter() }

  pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Review> {
    self.rows.iter_mut()
  }

  pub fn rows(&self) -> &[Review] { &self.rows }

  /// Reviews whose sentiment label equals `label`, in table order.
  pub fn with_label(
    &self,
    label: SentimentLabel,
  ) -> impl Iterator<Item = &Review> + '_ {
    self.rows.iter().filter(move |r| r.label() == Some(label))
  }
}

impl FromIterator<Review> for ReviewTable {
  fn from_iter<I: IntoIterator<Item = Review>>(iter: I) -> Self {
    Self {
      rows: iter.into_iter().collect(),
    }
  }
}

impl IntoIterator for ReviewTable {
  type IntoIter = std::vec::IntoIter<Review>;
  type Item = Review;

  fn into_iter(self) -> Self::IntoIter { self.rows.into_iter() }
}

impl<'a> IntoIterator for &'a ReviewTable {
  type IntoIter = std::slice::Iter<'a, Review>;
  type Item = &'a Review;

  fn into_iter(self) -> Self::IntoIter { self.rows.iter() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_out_of_range_rating() {
    assert!(matches!(
      Review::new(1, None, Some(6)),
      Err(Error::RatingOutOfRange(6))
    ));
    assert!(matches!(
      Review::new(1, None, Some(0)),
      Err(Error::RatingOutOfRange(0))
    ));
    assert!(Review::new(1, None, None).is_ok());
  }

  #[test]
  fn rejects_zero_id() {
    assert!(matches!(
      Review::new(0, Some("ok".into()), Some(3)),
      Err(Error::InvalidArgument(_))
    ));
  }

  #[test]
  fn analysis_text_prefers_clean_then_raw_then_placeholder() {
    let mut review = Review::new(7, None, Some(4)).unwrap();
    assert_eq!(review.analysis_text().as_str(), MISSING_TEXT_PLACEHOLDER);

    review.raw_text = Some("Raw #text".into());
    assert_eq!(review.analysis_text(), TextInput::Text("Raw #text"));

    review.clean_text = Some("Raw text".into());
    assert_eq!(review.analysis_text(), TextInput::Text("Raw text"));
  }

  #[test]
  fn require_clean_text_names_the_review() {
    let review = Review::new(42, Some("x".into()), None).unwrap();
    assert!(matches!(
      review.require_clean_text(),
      Err(Error::MissingCleanText(42))
    ));
  }
}
