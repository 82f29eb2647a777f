//! Run summary: label distribution and top complaints.

use std::fmt;

use chrono::{DateTime, Utc};
use grumble_core::{review::ReviewTable, sentiment::SentimentLabel};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::complaints::Complaint;

/// How many reviews carry one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelShare {
  pub label:   SentimentLabel,
  pub count:   usize,
  /// Share of all reviews, in percent.
  pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
  pub generated_at:   DateTime<Utc>,
  pub total_reviews:  usize,
  /// Labels present in the table, most frequent first.
  pub distribution:   Vec<LabelShare>,
  pub top_complaints: Vec<Complaint>,
}

impl AnalysisSummary {
  pub fn new(table: &ReviewTable, complaints: &[Complaint]) -> Self {
    Self {
      generated_at:   Utc::now(),
      total_reviews:  table.len(),
      distribution:   label_distribution(table),
      top_complaints: complaints.to_vec(),
    }
  }

  pub fn share(&self, label: SentimentLabel) -> Option<&LabelShare> {
    self.distribution.iter().find(|s| s.label == label)
  }
}

/// Count labels over scored reviews. Ties keep declaration order; labels with
/// no reviews are left out.
pub fn label_distribution(table: &ReviewTable) -> Vec<LabelShare> {
  let total = table.len();
  let mut shares: Vec<LabelShare> = SentimentLabel::iter()
    .map(|label| {
      let count = table.with_label(label).count();
      LabelShare {
        label,
        count,
        percent: if total == 0 {
          0.0
        } else {
          count as f64 * 100.0 / total as f64
        },
      }
    })
    .filter(|s| s.count > 0)
    .collect();
  shares.sort_by(|a, b| b.count.cmp(&a.count));
  shares
}

impl fmt::Display for AnalysisSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Sentiment distribution ({} reviews):", self.total_reviews)?;
    for share in &self.distribution {
      writeln!(
        f,
        "  {:<8} {:>6}  ({:.1}%)",
        share.label, share.count, share.percent
      )?;
    }

    writeln!(f)?;
    if self.top_complaints.is_empty() {
      writeln!(f, "No recurring complaints found.")?;
    } else {
      writeln!(f, "Top complaints:")?;
      for (rank, c) in self.top_complaints.iter().enumerate() {
        writeln!(
          f,
          "  {}. {}: {} mentions (weight {:.3})",
          rank + 1,
          c.term,
          c.mentions,
          c.weight
        )?;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use grumble_core::{review::Review, sentiment::Sentiment};

  use super::*;

  fn scored(scores: &[f64]) -> ReviewTable {
    scores
      .iter()
      .enumerate()
      .map(|(i, s)| {
        let mut r = Review::new(i as u32 + 1, Some("x".into()), Some(3)).unwrap();
        r.clean_text = Some("x".into());
        r.sentiment = Some(Sentiment::from_compound(*s));
        r
      })
      .collect()
  }

  #[test]
  fn distribution_is_sorted_and_skips_empty_labels() {
    let table = scored(&[-0.5, 0.6, -0.2, -0.9]);
    let dist = label_distribution(&table);
    assert_eq!(dist.len(), 2);
    assert_eq!(dist[0].label, SentimentLabel::Negative);
    assert_eq!(dist[0].count, 3);
    assert_eq!(dist[0].percent, 75.0);
    assert_eq!(dist[1].label, SentimentLabel::Positive);
  }

  #[test]
  fn ties_keep_declaration_order() {
    let dist = label_distribution(&scored(&[0.0, -0.5, 0.5]));
    let labels: Vec<_> = dist.iter().map(|s| s.label).collect();
    assert_eq!(
      labels,
      [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral
      ]
    );
  }

  #[test]
  fn report_mentions_counts_and_complaints() {
    let complaints = vec![Complaint {
      term:     "battery".into(),
      mentions: 4,
      weight:   2.5,
    }];
    let summary = AnalysisSummary::new(&scored(&[-0.5, 0.5]), &complaints);
    let text = summary.to_string();
    assert!(text.contains("Sentiment distribution (2 reviews):"));
    assert!(text.contains("50.0%"));
    assert!(text.contains("1. battery: 4 mentions (weight 2.500)"));
    assert_eq!(summary.share(SentimentLabel::Neutral), None);
  }

  #[test]
  fn report_without_complaints() {
    let summary = AnalysisSummary::new(&scored(&[0.5]), &[]);
    assert!(summary.to_string().contains("No recurring complaints found."));
  }
}
