//! Lexicon-based polarity scoring for short review texts.
//!
//! Pure synchronous; no I/O. [`SentimentAnalyzer`] implements
//! [`grumble_core::analyze::PolarityScorer`].
//!
//! # Quick start
//!
//! ```
//! use grumble_lexicon::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::new();
//! let scores = analyzer.polarity_scores("Battery life is not good!");
//! assert!(scores.compound < 0.0);
//! ```

mod analyzer;
pub mod error;
pub mod lexicon;

pub use analyzer::{PolarityScores, SentimentAnalyzer};
pub use error::{Error, Result};
pub use lexicon::Lexicon;
