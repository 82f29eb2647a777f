//! Dense document-term matrix produced by a fitted vectorizer.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentTermMatrix {
  /// Vocabulary in column order (alphabetical).
  pub terms: Vec<String>,
  /// Inverse document frequency per column.
  pub idf:   Vec<f64>,
  /// One row per input document, one column per term.
  pub rows:  Vec<Vec<f64>>,
}

impl DocumentTermMatrix {
  pub fn n_documents(&self) -> usize { self.rows.len() }

  pub fn n_terms(&self) -> usize { self.terms.len() }

  pub fn column(&self, term: &str) -> Option<usize> {
    self.terms.binary_search_by(|t| t.as_str().cmp(term)).ok()
  }

  /// Sum of each column over all documents.
  pub fn column_sums(&self) -> Vec<f64> {
    let mut sums = vec![0.0; self.terms.len()];
    for row in &self.rows {
      for (sum, value) in sums.iter_mut().zip(row) {
        *sum += value;
      }
    }
    sums
  }
}
