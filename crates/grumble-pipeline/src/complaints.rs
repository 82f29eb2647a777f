//! Complaint mining over negative reviews.
//!
//! The term weighter learns a vocabulary from the negative texts; only terms
//! mentioning a complaint indicator are kept, each with a fresh count of the
//! negative texts that contain it.

use grumble_core::{
  analyze::TermWeighter, review::ReviewTable, sentiment::SentimentLabel,
};
use grumble_tfidf::TfidfVectorizer;
use serde::Serialize;

use crate::{Error, Result};

/// Substrings that mark a vocabulary term as a complaint.
pub const COMPLAINT_INDICATORS: &[&str] = &[
  "terrible", "awful", "bad", "poor", "broken", "slow", "battery", "crash",
  "problem", "issue", "fail",
];

/// Length of the reported complaint list.
pub const TOP_COMPLAINTS: usize = 3;

/// A salient complaint term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Complaint {
  pub term:     String,
  /// Negative reviews whose lowercased text contains `term`.
  pub mentions: usize,
  /// Summed tf-idf weight over the negative corpus.
  pub weight:   f64,
}

/// The vectorizer configuration used for complaint mining: unigrams and
/// bigrams, English stop words removed, terms present in at least two
/// documents, at most 50 terms.
pub fn complaint_vectorizer() -> TfidfVectorizer {
  TfidfVectorizer::new()
    .with_max_features(50)
    .with_english_stop_words(true)
    .with_ngram_range(1, 2)
    .with_min_df(2)
}

pub fn is_complaint_term(term: &str) -> bool {
  let lower = term.to_lowercase();
  COMPLAINT_INDICATORS.iter().any(|i| lower.contains(i))
}

/// Up to [`TOP_COMPLAINTS`] complaint terms among negative reviews, heaviest
/// first. Equal weights keep vocabulary order.
///
/// No negative reviews, or no term surviving the weighter's pruning, yields
/// an empty list.
pub fn find_top_complaints<W: TermWeighter>(
  table: &ReviewTable,
  weighter: &W,
) -> Result<Vec<Complaint>> {
  let negatives: Vec<&str> = table
    .with_label(SentimentLabel::Negative)
    .map(|r| r.analysis_text().as_str())
    .collect();

  if negatives.is_empty() {
    tracing::info!("no negative reviews; skipping complaint extraction");
    return Ok(Vec::new());
  }

  let vocabulary = weighter
    .weigh_terms(&negatives)
    .map_err(|e| Error::Vectorizer(Box::new(e)))?;
  tracing::debug!(
    documents = negatives.len(),
    terms = vocabulary.len(),
    "weighed negative corpus"
  );

  let lowered: Vec<String> = negatives.iter().map(|d| d.to_lowercase()).collect();
  let mut complaints: Vec<Complaint> = vocabulary
    .into_iter()
    .filter(|tw| is_complaint_term(&tw.term))
    .map(|tw| {
      let needle = tw.term.to_lowercase();
      let mentions = lowered.iter().filter(|doc| doc.contains(&needle)).count();
      Complaint {
        term: tw.term,
        mentions,
        weight: tw.weight,
      }
    })
    .collect();

  // `sort_by` is stable, so ties keep vocabulary order.
  complaints.sort_by(|a, b| b.weight.total_cmp(&a.weight));
  complaints.truncate(TOP_COMPLAINTS);

  tracing::info!(found = complaints.len(), "extracted complaints");
  Ok(complaints)
}

#[cfg(test)]
mod tests {
  use grumble_core::{
    analyze::TermWeight,
    review::Review,
    sentiment::Sentiment,
  };

  use super::*;

  /// Returns a fixed vocabulary regardless of input.
  struct FixedWeights(Vec<(&'static str, f64)>);

  impl TermWeighter for FixedWeights {
    type Error = std::convert::Infallible;

    fn weigh_terms(&self, _documents: &[&str]) -> Result<Vec<TermWeight>, Self::Error> {
      Ok(
        self
          .0
          .iter()
          .map(|(term, weight)| TermWeight {
            term:   term.to_string(),
            weight: *weight,
          })
          .collect(),
      )
    }
  }

  fn labelled(rows: &[(&str, f64)]) -> ReviewTable {
    rows
      .iter()
      .enumerate()
      .map(|(i, (text, score))| {
        let mut r = Review::new(i as u32 + 1, Some(text.to_string()), Some(3)).unwrap();
        r.clean_text = Some(text.to_string());
        r.sentiment = Some(Sentiment::from_compound(*score));
        r
      })
      .collect()
  }

  #[test]
  fn no_negative_reviews_yields_empty_list() {
    let table = labelled(&[("love it", 0.6), ("meh", 0.0)]);
    let weights = FixedWeights(vec![("battery", 9.0)]);
    assert!(find_top_complaints(&table, &weights).unwrap().is_empty());
  }

  #[test]
  fn filters_sorts_and_truncates() {
    let table = labelled(&[
      ("Battery died. Slow charging.", -0.6),
      ("battery issue again", -0.4),
      ("slow slow slow", -0.3),
      ("battery is great", 0.7),
    ]);
    let weights = FixedWeights(vec![
      ("again", 5.0),
      ("battery", 1.5),
      ("battery issue", 0.9),
      ("charging", 4.0),
      ("issue", 0.9),
      ("slow", 2.0),
    ]);

    let complaints = find_top_complaints(&table, &weights).unwrap();
    let terms: Vec<&str> = complaints.iter().map(|c| c.term.as_str()).collect();
    // "battery issue" and "issue" tie; vocabulary order wins.
    assert_eq!(terms, ["slow", "battery", "battery issue"]);

    assert_eq!(complaints[0].mentions, 2);
    // Only negative reviews are counted.
    assert_eq!(complaints[1].mentions, 2);
    assert_eq!(complaints[2].mentions, 1);
    assert!(complaints.windows(2).all(|w| w[0].weight >= w[1].weight));
  }

  #[test]
  fn indicator_match_is_case_insensitive_substring() {
    assert!(is_complaint_term("Crashes"));
    assert!(is_complaint_term("charging issues"));
    assert!(is_complaint_term("failed"));
    assert!(!is_complaint_term("great value"));
  }

  #[test]
  fn empty_vocabulary_yields_empty_list() {
    let table = labelled(&[("one sad review", -0.5)]);
    let complaints = find_top_complaints(&table, &complaint_vectorizer()).unwrap();
    assert!(complaints.is_empty());
  }

  #[test]
  fn real_vectorizer_surfaces_shared_complaints() {
    let table = labelled(&[
      ("Terrible laptop. Battery dies quickly and constantly crashes.", -0.8),
      ("Terrible tablet. Battery dies quickly and constantly crashes.", -0.8),
      ("Poor quality control. Multiple defects including charging issues.", -0.6),
      ("Poor quality control. Multiple defects including screen bleeding.", -0.6),
    ]);
    let complaints = find_top_complaints(&table, &complaint_vectorizer()).unwrap();
    assert_eq!(complaints.len(), TOP_COMPLAINTS);
    for c in &complaints {
      assert!(is_complaint_term(&c.term), "{}", c.term);
      assert!(c.mentions >= 2, "{c:?}");
    }
    assert!(complaints.windows(2).all(|w| w[0].weight >= w[1].weight));
  }
}
