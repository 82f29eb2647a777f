//! Sentiment scoring stage.

use grumble_core::{
  analyze::PolarityScorer, review::ReviewTable, sentiment::Sentiment,
};

use crate::{Error, Result};

/// Label every review with the compound score `scorer` gives its text.
///
/// Reviews are scored independently. The first scorer failure aborts the
/// stage.
pub fn score_table<S: PolarityScorer>(
  table: ReviewTable,
  scorer: &S,
) -> Result<ReviewTable> {
  let scored: ReviewTable = table
    .into_iter()
    .map(|mut review| {
      let text = review.analysis_text();
      let compound = scorer.compound(text.as_str()).map_err(|e| {
        tracing::error!(review_id = review.id, "scoring failed: {e}");
        Error::Scorer(Box::new(e))
      })?;
      review.sentiment = Some(Sentiment::from_compound(compound));
      Ok(review)
    })
    .collect::<Result<_>>()?;

  tracing::info!(count = scored.len(), "scored reviews");
  Ok(scored)
}
