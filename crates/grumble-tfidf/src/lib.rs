//! TF-IDF term weighting for Grumble.
//!
//! [`TfidfVectorizer`] implements [`grumble_core::analyze::TermWeighter`];
//! the weight reported for a term is its tf-idf summed over all documents.
//!
//! ```
//! use grumble_tfidf::TfidfVectorizer;
//!
//! let v = TfidfVectorizer::new()
//!   .with_ngram_range(1, 2)
//!   .with_english_stop_words(true)
//!   .with_min_df(2);
//! let m = v
//!   .fit_transform(&["the battery died", "battery died again", "fine"])
//!   .unwrap();
//! assert_eq!(m.terms, ["battery", "battery died", "died"]);
//! ```

pub mod error;
pub mod matrix;
pub mod stop_words;
mod vectorizer;

pub use error::{Error, Result};
pub use matrix::DocumentTermMatrix;
pub use vectorizer::{DEFAULT_TOKEN_PATTERN, TfidfVectorizer};
