//! The review analysis pipeline: synthesize, clean, score, mine complaints.
//!
//! Each stage is a free function over a [`ReviewTable`]; [`Pipeline`] chains
//! them with a concrete scorer and term weighter. Stages only ever add
//! fields to reviews, so the raw table can be snapshotted before analysis
//! and the analyzed table after.

pub mod clean;
pub mod complaints;
pub mod error;
pub mod score;
pub mod snapshot;
pub mod summary;
pub mod synth;

use grumble_core::{
  analyze::{PolarityScorer, TermWeighter},
  review::ReviewTable,
};
use grumble_lexicon::SentimentAnalyzer;
use grumble_tfidf::TfidfVectorizer;
use rand::Rng;

pub use self::{
  complaints::Complaint,
  error::{Error, Result},
  summary::AnalysisSummary,
  synth::{NoiseModel, Synthesizer},
};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
  /// The table as generated, before cleaning.
  pub raw:        ReviewTable,
  /// Cleaned and scored.
  pub analyzed:   ReviewTable,
  pub complaints: Vec<Complaint>,
}

impl Analysis {
  pub fn summary(&self) -> AnalysisSummary {
    AnalysisSummary::new(&self.analyzed, &self.complaints)
  }
}

/// A configured pipeline.
pub struct Pipeline<S, W> {
  synthesizer: Synthesizer,
  scorer:      S,
  weighter:    W,
}

impl Pipeline<SentimentAnalyzer, TfidfVectorizer> {
  /// Default noise, the built-in lexicon, and the complaint vectorizer.
  pub fn standard() -> Result<Self> {
    Ok(Self::new(
      Synthesizer::new(NoiseModel::default())?,
      SentimentAnalyzer::new(),
      complaints::complaint_vectorizer(),
    ))
  }
}

impl<S: PolarityScorer, W: TermWeighter> Pipeline<S, W> {
  pub fn new(synthesizer: Synthesizer, scorer: S, weighter: W) -> Self {
    Self {
      synthesizer,
      scorer,
      weighter,
    }
  }

  pub fn scorer(&self) -> &S { &self.scorer }

  /// Generate `count` reviews and analyze them.
  pub fn run<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Analysis> {
    let raw = self.synthesizer.generate(count, rng)?;
    self.analyze(raw)
  }

  /// Clean, score and mine complaints from an existing table.
  pub fn analyze(&self, raw: ReviewTable) -> Result<Analysis> {
    let cleaned = clean::clean_table(raw.clone());
    let analyzed = score::score_table(cleaned, &self.scorer)?;
    let complaints = complaints::find_top_complaints(&analyzed, &self.weighter)?;
    Ok(Analysis {
      raw,
      analyzed,
      complaints,
    })
  }
}
