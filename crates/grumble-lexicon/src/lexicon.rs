//! Word tables: valences, negators and degree modifiers.
//!
//! Valences use the crowd-rated scale of roughly -4 (extremely negative) to
//! +4 (extremely positive). The built-in table is tuned for consumer product
//! reviews; extra entries can be merged from a tab-separated file in the
//! `word<TAB>mean[<TAB>…]` layout.

use std::collections::{HashMap, HashSet};

use crate::{Error, Result};

/// Added to (or subtracted from) a degree modifier's effect.
pub const BOOSTER_INCREMENT: f64 = 0.293;

/// Negative counterpart of [`BOOSTER_INCREMENT`] for dampening words.
pub const BOOSTER_DECREMENT: f64 = -0.293;

#[rustfmt::skip]
const VALENCES: &[(&str, f64)] = &[
  // positive
  ("amazing", 2.8), ("awesome", 3.1), ("beautiful", 2.9), ("best", 3.2),
  ("better", 1.9), ("brilliant", 2.8), ("decent", 1.1), ("excellent", 2.7),
  ("fantastic", 2.6), ("fine", 0.8), ("flawless", 2.3), ("glad", 2.0),
  ("good", 1.9), ("great", 3.1), ("happy", 2.7), ("helpful", 1.8),
  ("impressed", 2.1), ("impressive", 2.3), ("incredible", 2.2), ("love", 3.2),
  ("loved", 2.9), ("nice", 1.8), ("ok", 1.2), ("okay", 0.9),
  ("outstanding", 3.0), ("perfect", 2.7), ("pleased", 1.9), ("recommend", 1.5),
  ("reliable", 1.6), ("satisfied", 1.8), ("smooth", 1.1), ("special", 1.7),
  ("superb", 3.1), ("win", 2.8), ("wonderful", 2.7), ("worth", 0.9),
  // negative
  ("annoying", -1.7), ("awful", -2.0), ("bad", -2.5), ("bleeding", -1.6),
  ("broke", -1.8), ("broken", -2.1), ("buggy", -1.6), ("crash", -1.7),
  ("crashed", -2.2), ("crashes", -1.7), ("crashing", -1.8), ("dead", -3.3),
  ("defect", -1.4), ("defective", -1.9), ("defects", -1.4), ("died", -2.6),
  ("dies", -2.3), ("disappointed", -1.9), ("disappointing", -2.2),
  ("fail", -2.5), ("failed", -2.3), ("fails", -2.3), ("failure", -2.3),
  ("hate", -2.7), ("horrible", -2.5), ("junk", -1.4), ("laggy", -1.5),
  ("no", -1.2), ("poor", -2.1), ("problem", -1.7), ("problems", -1.7),
  ("refund", -0.8), ("slow", -1.0), ("terrible", -2.1), ("useless", -1.8),
  ("waste", -1.8), ("worse", -2.1), ("worst", -3.1), ("wrong", -2.1),
];

#[rustfmt::skip]
const NEGATIONS: &[&str] = &[
  "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt",
  "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither",
  "neednt", "never", "none", "nope", "nor", "not", "nothing", "nowhere",
  "oughtnt", "shant", "shouldnt", "wasnt", "werent", "without", "wont",
  "wouldnt", "rarely", "seldom", "despite",
];

#[rustfmt::skip]
const BOOSTERS: &[(&str, f64)] = &[
  ("absolutely", BOOSTER_INCREMENT), ("completely", BOOSTER_INCREMENT),
  ("considerably", BOOSTER_INCREMENT), ("deeply", BOOSTER_INCREMENT),
  ("enormously", BOOSTER_INCREMENT), ("entirely", BOOSTER_INCREMENT),
  ("especially", BOOSTER_INCREMENT), ("exceptionally", BOOSTER_INCREMENT),
  ("extremely", BOOSTER_INCREMENT), ("fully", BOOSTER_INCREMENT),
  ("greatly", BOOSTER_INCREMENT), ("highly", BOOSTER_INCREMENT),
  ("hugely", BOOSTER_INCREMENT), ("incredibly", BOOSTER_INCREMENT),
  ("more", BOOSTER_INCREMENT), ("most", BOOSTER_INCREMENT),
  ("particularly", BOOSTER_INCREMENT), ("quite", BOOSTER_INCREMENT),
  ("really", BOOSTER_INCREMENT), ("remarkably", BOOSTER_INCREMENT),
  ("so", BOOSTER_INCREMENT), ("substantially", BOOSTER_INCREMENT),
  ("thoroughly", BOOSTER_INCREMENT), ("totally", BOOSTER_INCREMENT),
  ("tremendously", BOOSTER_INCREMENT), ("unbelievably", BOOSTER_INCREMENT),
  ("utterly", BOOSTER_INCREMENT), ("very", BOOSTER_INCREMENT),
  ("almost", BOOSTER_DECREMENT), ("barely", BOOSTER_DECREMENT),
  ("hardly", BOOSTER_DECREMENT), ("kinda", BOOSTER_DECREMENT),
  ("less", BOOSTER_DECREMENT), ("little", BOOSTER_DECREMENT),
  ("marginally", BOOSTER_DECREMENT), ("occasionally", BOOSTER_DECREMENT),
  ("partly", BOOSTER_DECREMENT), ("scarcely", BOOSTER_DECREMENT),
  ("slightly", BOOSTER_DECREMENT), ("somewhat", BOOSTER_DECREMENT),
  ("sorta", BOOSTER_DECREMENT),
];

/// Lookup tables used by [`crate::SentimentAnalyzer`]. All keys are
/// lowercase.
#[derive(Debug, Clone)]
pub struct Lexicon {
  valences:  HashMap<String, f64>,
  negations: HashSet<String>,
  boosters:  HashMap<String, f64>,
}

impl Default for Lexicon {
  fn default() -> Self {
    Self {
      valences:  VALENCES
        .iter()
        .map(|(w, v)| ((*w).to_string(), *v))
        .collect(),
      negations: NEGATIONS.iter().map(|w| (*w).to_string()).collect(),
      boosters:  BOOSTERS
        .iter()
        .map(|(w, v)| ((*w).to_string(), *v))
        .collect(),
    }
  }
}

impl Lexicon {
  pub fn valence(&self, word: &str) -> Option<f64> {
    self.valences.get(word).copied()
  }

  pub fn contains(&self, word: &str) -> bool { self.valences.contains_key(word) }

  /// Degree-modifier strength of `word`, if it is a booster or dampener.
  pub fn booster(&self, word: &str) -> Option<f64> {
    self.boosters.get(word).copied()
  }

  /// True for explicit negators and any `n't` contraction.
  pub fn is_negation(&self, word: &str) -> bool {
    self.negations.contains(word) || word.ends_with("n't")
  }

  pub fn len(&self) -> usize { self.valences.len() }

  pub fn is_empty(&self) -> bool { self.valences.is_empty() }

  /// Insert or replace a single valence.
  pub fn insert(&mut self, word: &str, valence: f64) -> Result<()> {
    if !valence.is_finite() {
      return Err(Error::InvalidValence {
        word: word.to_string(),
        valence,
      });
    }
    self.valences.insert(word.to_lowercase(), valence);
    Ok(())
  }

  /// Merge entries from a tab-separated lexicon file.
  ///
  /// Each non-blank line is `word<TAB>mean`, optionally followed by more
  /// tab-separated columns which are ignored. Lines starting with `#` are
  /// comments. Returns the number of entries merged.
  pub fn merge_tsv(&mut self, input: &str) -> Result<usize> {
    let mut merged = 0;
    for (idx, raw) in input.lines().enumerate() {
      let line = raw.trim_end_matches('\r');
      if line.trim().is_empty() || line.starts_with('#') {
        continue;
      }
      let mut cols = line.split('\t');
      let word = cols.next().map(str::trim).unwrap_or_default();
      if word.is_empty() {
        return Err(Error::MalformedLine {
          line:   idx + 1,
          reason: "empty word".into(),
        });
      }
      let mean = cols.next().ok_or_else(|| Error::MalformedLine {
        line:   idx + 1,
        reason: "missing valence column".into(),
      })?;
      let valence: f64 = mean.trim().parse().map_err(|_| Error::MalformedLine {
        line:   idx + 1,
        reason: format!("valence {mean:?} is not a number"),
      })?;
      self.insert(word, valence)?;
      merged += 1;
    }
    Ok(merged)
  }
}
