//! Text cleaning: default missing fields, filter characters, repair typos.

use grumble_core::review::{
  DEFAULT_RATING, MISSING_TEXT_PLACEHOLDER, Review, ReviewTable,
};

use crate::synth::TYPOS;

/// Punctuation that survives cleaning, besides letters, digits and
/// whitespace.
pub const ALLOWED_PUNCTUATION: &[char] = &['.', ',', '!', '?', '\'', '-'];

pub fn is_allowed_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Fill missing text and rating, and derive `clean_text` for every review.
pub fn clean_table(table: ReviewTable) -> ReviewTable {
  let mut filled = 0usize;
  let cleaned: ReviewTable = table
    .into_iter()
    .map(|review| {
      if review.raw_text.is_none() {
        filled += 1;
      }
      clean_review(review)
    })
    .collect();

  tracing::debug!(filled, "replaced missing review texts");
  tracing::info!(count = cleaned.len(), "cleaned reviews");
  cleaned
}

fn clean_review(mut review: Review) -> Review {
  let raw = review
    .raw_text
    .take()
    .unwrap_or_else(|| MISSING_TEXT_PLACEHOLDER.to_string());
  review.rating = Some(review.rating.unwrap_or(DEFAULT_RATING));
  review.clean_text = Some(clean_text(&raw));
  review.raw_text = Some(raw);
  review
}

/// Strip disallowed characters, trim, then undo the known typos.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_text(raw: &str) -> String {
  let filtered: String = raw.chars().filter(|c| is_allowed_char(*c)).collect();
  repair_typos(filtered.trim())
}

/// Replace each typo from [`TYPOS`] with its correct spelling, in both
/// lowercase and sentence-initial capitalised form.
pub fn repair_typos(text: &str) -> String {
  TYPOS.iter().fold(text.to_string(), |acc, (correct, typo)| {
    acc
      .replace(typo, correct)
      .replace(&capitalize(typo), &capitalize(correct))
  })
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_disallowed_characters_and_trims() {
    assert_eq!(
      clean_text("  Great phone!!! 10/10 #blessed :) <3  "),
      "Great phone!!! 1010 blessed  3"
    );
    assert_eq!(clean_text("Don't buy - it's bad, ok? café"), "Don't buy - it's bad, ok? caf");
  }

  #[test]
  fn repairs_typos_in_both_cases() {
    assert_eq!(
      clean_text("Teh battery is gerat but it crashed twice."),
      "The battery is great but it crashed twice."
    );
    assert_eq!(clean_text("teh screen, Gerat"), "the screen, Great");
  }

  #[test]
  fn cleaning_is_idempotent() {
    for raw in [
      "Teh battery is gerat but it crashed twice.",
      "gerateh tehteh ~~ Tehgerat",
      "  ***  ",
      "No review provided",
    ] {
      let once = clean_text(raw);
      assert_eq!(clean_text(&once), once, "input {raw:?}");
    }
  }

  #[test]
  fn fills_missing_text_and_rating() {
    let table: ReviewTable = [
      Review::new(1, None, None).unwrap(),
      Review::new(2, Some("Fine & dandy".into()), Some(5)).unwrap(),
    ]
    .into_iter()
    .collect();

    let cleaned = clean_table(table);
    let rows = cleaned.rows();

    assert_eq!(rows[0].raw_text.as_deref(), Some(MISSING_TEXT_PLACEHOLDER));
    assert_eq!(rows[0].clean_text.as_deref(), Some(MISSING_TEXT_PLACEHOLDER));
    assert_eq!(rows[0].rating, Some(DEFAULT_RATING));

    assert_eq!(rows[1].raw_text.as_deref(), Some("Fine & dandy"));
    assert_eq!(rows[1].clean_text.as_deref(), Some("Fine  dandy"));
    assert_eq!(rows[1].rating, Some(5));
  }
}
