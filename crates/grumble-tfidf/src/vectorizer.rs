//! TF-IDF vectorizer.
//!
//! Documents are lowercased, split into tokens by a regex, stripped of stop
//! words and expanded into word n-grams. Terms are pruned by document
//! frequency and optionally capped to the most frequent ones; each document
//! row holds raw counts scaled by smoothed idf and is L2-normalised.

use std::collections::HashMap;

use grumble_core::analyze::{TermWeight, TermWeighter};
use regex::Regex;

use crate::{
  Error, Result, matrix::DocumentTermMatrix, stop_words::is_stop_word,
};

/// Tokens of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
  ngram_range:   (usize, usize),
  /// Absolute document count a term needs to be kept.
  min_df:        usize,
  /// Fraction of documents above which a term is dropped.
  max_df:        f64,
  max_features:  Option<usize>,
  stop_words:    bool,
  token_pattern: String,
  smooth_idf:    bool,
  normalize:     bool,
}

impl Default for TfidfVectorizer {
  fn default() -> Self {
    Self {
      ngram_range:   (1, 1),
      min_df:        1,
      max_df:        1.0,
      max_features:  None,
      stop_words:    false,
      token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
      smooth_idf:    true,
      normalize:     true,
    }
  }
}

impl TfidfVectorizer {
  pub fn new() -> Self { Self::default() }

  pub fn with_ngram_range(mut self, min: usize, max: usize) -> Self {
    self.ngram_range = (min, max);
    self
  }

  pub fn with_min_df(mut self, min_df: usize) -> Self {
    self.min_df = min_df;
    self
  }

  pub fn with_max_df(mut self, max_df: f64) -> Self {
    self.max_df = max_df;
    self
  }

  /// Keep only the `limit` terms with the highest corpus-wide count.
  pub fn with_max_features(mut self, limit: usize) -> Self {
    self.max_features = Some(limit);
    self
  }

  pub fn with_english_stop_words(mut self, enabled: bool) -> Self {
    self.stop_words = enabled;
    self
  }

  pub fn with_token_pattern(mut self, pattern: &str) -> Self {
    self.token_pattern = pattern.to_string();
    self
  }

  pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
    self.smooth_idf = smooth;
    self
  }

  pub fn with_normalize(mut self, normalize: bool) -> Self {
    self.normalize = normalize;
    self
  }

  /// Check the configuration and compile the token pattern.
  fn validate(&self) -> Result<Regex> {
    let (min, max) = self.ngram_range;
    if min == 0 || min > max {
      return Err(Error::InvalidNgramRange { min, max });
    }
    if self.min_df == 0 {
      return Err(Error::InvalidMinDf);
    }
    if !(self.max_df > 0.0 && self.max_df <= 1.0) {
      return Err(Error::InvalidMaxDf(self.max_df));
    }
    if self.max_features == Some(0) {
      return Err(Error::InvalidMaxFeatures);
    }
    Ok(Regex::new(&self.token_pattern)?)
  }

  /// The n-grams a single document contributes, in order of appearance.
  pub fn analyze(&self, document: &str) -> Result<Vec<String>> {
    let pattern = self.validate()?;
    Ok(self.ngrams(&pattern, document))
  }

  fn ngrams(&self, pattern: &Regex, document: &str) -> Vec<String> {
    let lower = document.to_lowercase();
    let tokens: Vec<&str> = pattern
      .find_iter(&lower)
      .map(|m| m.as_str())
      .filter(|t| !(self.stop_words && is_stop_word(t)))
      .collect();

    let (min, max) = self.ngram_range;
    let mut grams = Vec::new();
    for n in min..=max {
      grams.extend(tokens.windows(n).map(|w| w.join(" ")));
    }
    grams
  }

  /// Learn the vocabulary of `documents` and return their tf-idf matrix.
  ///
  /// A corpus whose terms all fall outside the document-frequency bounds
  /// yields a matrix with no columns rather than an error.
  pub fn fit_transform(&self, documents: &[&str]) -> Result<DocumentTermMatrix> {
    let pattern = self.validate()?;

    let counts: Vec<HashMap<String, usize>> = documents
      .iter()
      .map(|doc| {
        let mut counts = HashMap::new();
        for gram in self.ngrams(&pattern, doc) {
          *counts.entry(gram).or_default() += 1;
        }
        counts
      })
      .collect();

    let n_docs = counts.len();
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
    for doc in &counts {
      for (term, count) in doc {
        *doc_freq.entry(term.as_str()).or_default() += 1;
        *corpus_freq.entry(term.as_str()).or_default() += count;
      }
    }

    let max_doc_count = self.max_df * n_docs as f64;
    let mut kept: Vec<&str> = doc_freq
      .iter()
      .filter(|(_, df)| **df >= self.min_df && **df as f64 <= max_doc_count)
      .map(|(term, _)| *term)
      .collect();

    if let Some(limit) = self.max_features {
      // Most frequent first; alphabetical among equals.
      kept.sort_by(|a, b| corpus_freq[b].cmp(&corpus_freq[a]).then_with(|| a.cmp(b)));
      kept.truncate(limit);
    }
    kept.sort_unstable();

    let n = n_docs as f64;
    let idf: Vec<f64> = kept
      .iter()
      .map(|term| {
        let df = doc_freq[term] as f64;
        if self.smooth_idf {
          ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
          (n / df).ln() + 1.0
        }
      })
      .collect();

    let rows: Vec<Vec<f64>> = counts
      .iter()
      .map(|doc| {
        let mut row: Vec<f64> = kept
          .iter()
          .zip(&idf)
          .map(|(term, idf)| doc.get(*term).copied().unwrap_or(0) as f64 * idf)
          .collect();
        if self.normalize {
          l2_normalize(&mut row);
        }
        row
      })
      .collect();

    Ok(DocumentTermMatrix {
      terms: kept.into_iter().map(str::to_string).collect(),
      idf,
      rows,
    })
  }
}

fn l2_normalize(row: &mut [f64]) {
  let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
  if norm > 0.0 {
    for x in row.iter_mut() {
      *x /= norm;
    }
  }
}

impl TermWeighter for TfidfVectorizer {
  type Error = Error;

  fn weigh_terms(&self, documents: &[&str]) -> Result<Vec<TermWeight>> {
    let matrix = self.fit_transform(documents)?;
    let sums = matrix.column_sums();
    Ok(
      matrix
        .terms
        .into_iter()
        .zip(sums)
        .map(|(term, weight)| TermWeight { term, weight })
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-4 }

  #[test]
  fn analyze_lowercases_and_drops_short_tokens() {
    let v = TfidfVectorizer::new();
    assert_eq!(
      v.analyze("I've a BROKEN screen, again!!").unwrap(),
      ["ve", "broken", "screen", "again"]
    );
  }

  #[test]
  fn bigrams_are_built_after_stop_word_removal() {
    let v = TfidfVectorizer::new()
      .with_ngram_range(1, 2)
      .with_english_stop_words(true);
    assert_eq!(
      v.analyze("The battery dies very quickly").unwrap(),
      [
        "battery",
        "dies",
        "quickly",
        "battery dies",
        "dies quickly"
      ]
    );
  }

  #[test]
  fn smoothed_idf_and_l2_rows() {
    let v = TfidfVectorizer::new();
    let m = v
      .fit_transform(&["battery dies", "battery crashes"])
      .unwrap();

    assert_eq!(m.terms, ["battery", "crashes", "dies"]);
    assert!(close(m.idf[0], 1.0));
    assert!(close(m.idf[2], 1.405_465));

    for row in &m.rows {
      let norm: f64 = row.iter().map(|x| x * x).sum::<f64>().sqrt();
      assert!(close(norm, 1.0));
    }

    let sums = m.column_sums();
    assert!(close(sums[0], 1.159_46));
    assert!(close(sums[1], 0.814_80));
    assert!(close(sums[2], 0.814_80));
  }

  #[test]
  fn min_df_prunes_rare_terms() {
    let v = TfidfVectorizer::new().with_min_df(2);
    let m = v
      .fit_transform(&["slow screen", "slow battery", "great camera"])
      .unwrap();
    assert_eq!(m.terms, ["slow"]);
    assert_eq!(m.rows[2], [0.0]);
  }

  #[test]
  fn max_df_prunes_ubiquitous_terms() {
    let v = TfidfVectorizer::new().with_max_df(0.5);
    let m = v
      .fit_transform(&["phone slow", "phone hot", "phone ok"])
      .unwrap();
    assert!(!m.terms.contains(&"phone".to_string()));
  }

  #[test]
  fn max_features_keeps_most_frequent_then_alphabetical() {
    let v = TfidfVectorizer::new().with_max_features(2);
    let m = v
      .fit_transform(&["zeta zeta beta", "alpha beta", "gamma"])
      .unwrap();
    // zeta and beta both occur twice; alpha and gamma once.
    assert_eq!(m.terms, ["beta", "zeta"]);

    let v = TfidfVectorizer::new().with_max_features(3);
    let m = v
      .fit_transform(&["zeta zeta beta", "alpha beta", "gamma"])
      .unwrap();
    assert_eq!(m.terms, ["alpha", "beta", "zeta"]);
  }

  #[test]
  fn empty_vocabulary_is_not_an_error() {
    let v = TfidfVectorizer::new().with_min_df(2);
    let m = v.fit_transform(&["only one document here"]).unwrap();
    assert_eq!(m.n_terms(), 0);
    assert_eq!(m.n_documents(), 1);

    let m = v.fit_transform(&[]).unwrap();
    assert_eq!(m.n_terms(), 0);
    assert!(v.weigh_terms(&[]).unwrap().is_empty());
  }

  #[test]
  fn weigh_terms_returns_column_sums_in_vocabulary_order() {
    let v = TfidfVectorizer::new();
    let weights = v.weigh_terms(&["battery dies", "battery crashes"]).unwrap();
    let terms: Vec<&str> = weights.iter().map(|w| w.term.as_str()).collect();
    assert_eq!(terms, ["battery", "crashes", "dies"]);
    assert!(close(weights[0].weight, 1.159_46));
  }

  #[test]
  fn invalid_configuration_is_rejected() {
    assert!(matches!(
      TfidfVectorizer::new().with_ngram_range(2, 1).analyze("x"),
      Err(Error::InvalidNgramRange { min: 2, max: 1 })
    ));
    assert!(matches!(
      TfidfVectorizer::new().with_min_df(0).analyze("x"),
      Err(Error::InvalidMinDf)
    ));
    assert!(matches!(
      TfidfVectorizer::new().with_max_df(1.5).analyze("x"),
      Err(Error::InvalidMaxDf(_))
    ));
    assert!(matches!(
      TfidfVectorizer::new().with_max_features(0).analyze("x"),
      Err(Error::InvalidMaxFeatures)
    ));
    assert!(matches!(
      TfidfVectorizer::new().with_token_pattern("(").analyze("x"),
      Err(Error::TokenPattern(_))
    ));
  }
}
