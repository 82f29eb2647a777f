//! CSV snapshots of the review table.
//!
//! Two layouts: the raw table as generated, and the fully analyzed table.
//! Missing values are written as empty fields. Column names are part of the
//! output contract.

use std::{fs::File, io, path::Path};

use grumble_core::{
  Error as CoreError,
  review::ReviewTable,
  sentiment::SentimentLabel,
};
use serde::Serialize;

use crate::Result;

pub const RAW_COLUMNS: [&str; 3] = ["Review_ID", "Review_Text", "Rating"];

pub const RESULT_COLUMNS: [&str; 6] = [
  "Review_ID",
  "Review_Text",
  "Rating",
  "Clean_Text",
  "Sentiment",
  "Sentiment_Score",
];

#[derive(Serialize)]
struct RawRow<'a> {
  id:     u32,
  text:   Option<&'a str>,
  rating: Option<u8>,
}

#[derive(Serialize)]
struct ResultRow<'a> {
  id:         u32,
  text:       Option<&'a str>,
  rating:     Option<u8>,
  clean_text: &'a str,
  sentiment:  SentimentLabel,
  score:      f64,
}

fn writer<W: io::Write>(sink: W, header: &[&str]) -> Result<csv::Writer<W>> {
  let mut writer = csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(sink);
  writer.write_record(header)?;
  Ok(writer)
}

/// Write the raw table: id, text as generated, rating.
pub fn write_raw<W: io::Write>(table: &ReviewTable, sink: W) -> Result<()> {
  let mut out = writer(sink, &RAW_COLUMNS)?;
  for review in table {
    out.serialize(RawRow {
      id:     review.id,
      text:   review.raw_text.as_deref(),
      rating: review.rating,
    })?;
  }
  out.flush()?;
  Ok(())
}

/// Write the analyzed table. Every review must be cleaned and scored.
pub fn write_results<W: io::Write>(table: &ReviewTable, sink: W) -> Result<()> {
  let mut out = writer(sink, &RESULT_COLUMNS)?;
  for review in table {
    let clean_text = review.require_clean_text()?;
    let sentiment = review
      .sentiment
      .ok_or(CoreError::UnscoredReview(review.id))?;
    out.serialize(ResultRow {
      id: review.id,
      text: review.raw_text.as_deref(),
      rating: review.rating,
      clean_text,
      sentiment: sentiment.label,
      score: sentiment.score,
    })?;
  }
  out.flush()?;
  Ok(())
}

pub fn save_raw(table: &ReviewTable, path: &Path) -> Result<()> {
  write_raw(table, File::create(path)?)?;
  tracing::info!(path = %path.display(), rows = table.len(), "wrote raw snapshot");
  Ok(())
}

pub fn save_results(table: &ReviewTable, path: &Path) -> Result<()> {
  write_results(table, File::create(path)?)?;
  tracing::info!(path = %path.display(), rows = table.len(), "wrote results snapshot");
  Ok(())
}
