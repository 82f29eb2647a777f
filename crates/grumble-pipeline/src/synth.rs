//! Synthetic review generation with injected noise.
//!
//! Ratings follow a fixed categorical distribution; the rating picks a
//! template pool, whose placeholders are filled from small vocabularies.
//! Noise is then applied as two independent checks: a typo pass, and a
//! missing-value pass that may discard an already typo'd text.

use grumble_core::{
  Error as CoreError,
  review::{Review, ReviewTable},
};
use rand::{
  Rng,
  distributions::{Distribution, WeightedIndex},
};

use crate::Result;

/// `(rating, probability)` pairs. Probabilities sum to 1.
pub const RATING_WEIGHTS: [(u8, f64); 5] =
  [(1, 0.10), (2, 0.15), (3, 0.20), (4, 0.35), (5, 0.20)];

/// `(correct, typo)` substitutions. The cleaner applies them in reverse.
pub const TYPOS: &[(&str, &str)] = &[("the", "teh"), ("great", "gerat")];

const POSITIVE_TEMPLATES: &[&str] = &[
  "Amazing {product}! Battery lasts all day and performance is incredible.",
  "Best {product} I've ever owned. Fast, reliable, and great value.",
  "Excellent build quality. The {feature} feature is outstanding!",
];

const NEGATIVE_TEMPLATES: &[&str] = &[
  "Terrible {product}. Battery dies quickly and constantly crashes.",
  "Worst purchase ever! {product} broke after just {time_period}.",
  "Poor quality control. Multiple defects including {defect}.",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
  "Decent {product} for the price. Nothing special but works okay.",
  "Average performance. Some good features but also some issues.",
  "It's fine I guess. Does what it's supposed to do.",
];

const PRODUCTS: &[&str] =
  &["smartphone", "laptop", "tablet", "smartwatch", "headphones"];
const FEATURES: &[&str] =
  &["camera", "display", "audio", "connectivity", "design"];
const DEFECTS: &[&str] =
  &["screen bleeding", "button sticking", "charging issues"];
const TIME_PERIODS: &[&str] = &["one week", "two days", "a month"];

// ─── Noise ───────────────────────────────────────────────────────────────────

/// Probabilities of the two independent noise passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseModel {
  /// Chance that [`TYPOS`] are applied to a generated text.
  pub typo_probability:    f64,
  /// Chance that a text is replaced by the missing-value marker.
  pub missing_probability: f64,
}

impl Default for NoiseModel {
  fn default() -> Self {
    Self {
      typo_probability:    0.20,
      missing_probability: 0.08,
    }
  }
}

impl NoiseModel {
  /// A model that leaves every text intact.
  pub fn none() -> Self {
    Self {
      typo_probability:    0.0,
      missing_probability: 0.0,
    }
  }

  fn validate(&self) -> Result<()> {
    for (name, p) in [
      ("typo_probability", self.typo_probability),
      ("missing_probability", self.missing_probability),
    ] {
      if !(0.0..=1.0).contains(&p) {
        return Err(
          CoreError::InvalidArgument(format!("{name} must be in [0, 1], got {p}"))
            .into(),
        );
      }
    }
    Ok(())
  }
}

/// Apply every [`TYPOS`] substitution to `text` (case-sensitive substrings).
pub fn inject_typos(text: &str) -> String {
  TYPOS
    .iter()
    .fold(text.to_string(), |acc, (correct, typo)| acc.replace(correct, typo))
}

// ─── Synthesizer ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Synthesizer {
  noise:   NoiseModel,
  ratings: WeightedIndex<f64>,
}

impl Synthesizer {
  pub fn new(noise: NoiseModel) -> Result<Self> {
    noise.validate()?;
    let ratings = WeightedIndex::new(RATING_WEIGHTS.iter().map(|(_, w)| *w))?;
    Ok(Self { noise, ratings })
  }

  pub fn noise(&self) -> NoiseModel { self.noise }

  /// Generate exactly `count` reviews with ids `1..=count`.
  ///
  /// Fails with [`CoreError::InvalidArgument`] when `count` is zero or does
  /// not fit a review id.
  pub fn generate<R: Rng + ?Sized>(
    &self,
    count: usize,
    rng: &mut R,
  ) -> Result<ReviewTable> {
    if count == 0 {
      return Err(
        CoreError::InvalidArgument("review count must be positive".into()).into(),
      );
    }
    let last_id = u32::try_from(count).map_err(|_| {
      CoreError::InvalidArgument(format!("review count {count} is too large"))
    })?;

    let mut table = ReviewTable::new();
    let mut typos = 0usize;
    let mut missing = 0usize;

    for id in 1..=last_id {
      let rating = RATING_WEIGHTS[self.ratings.sample(rng)].0;
      let mut text = fill_template(template_for(rating, rng), rng);

      if rng.gen_bool(self.noise.typo_probability) {
        text = inject_typos(&text);
        typos += 1;
      }
      let raw_text = if rng.gen_bool(self.noise.missing_probability) {
        missing += 1;
        None
      } else {
        Some(text)
      };

      table.push(Review::new(id, raw_text, Some(rating))?);
    }

    tracing::debug!(typos, missing, "injected noise");
    tracing::info!(count, "synthesized reviews");
    Ok(table)
  }
}

/// Generate `count` reviews with the default noise model.
pub fn synthesize<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<ReviewTable> {
  Synthesizer::new(NoiseModel::default())?.generate(count, rng)
}

fn pick<'a, R: Rng + ?Sized>(items: &[&'a str], rng: &mut R) -> &'a str {
  items[rng.gen_range(0..items.len())]
}

fn template_for<R: Rng + ?Sized>(rating: u8, rng: &mut R) -> &'static str {
  let pool = match rating {
    r if r >= 4 => POSITIVE_TEMPLATES,
    r if r <= 2 => NEGATIVE_TEMPLATES,
    _ => NEUTRAL_TEMPLATES,
  };
  pick(pool, rng)
}

fn fill_template<R: Rng + ?Sized>(template: &str, rng: &mut R) -> String {
  let product = pick(PRODUCTS, rng);
  let feature = pick(FEATURES, rng);
  let defect = pick(DEFECTS, rng);
  let time_period = pick(TIME_PERIODS, rng);
  template
    .replace("{product}", product)
    .replace("{feature}", feature)
    .replace("{defect}", defect)
    .replace("{time_period}", time_period)
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  #[test]
  fn rating_weights_sum_to_one() {
    let total: f64 = RATING_WEIGHTS.iter().map(|(_, w)| w).sum();
    assert!((total - 1.0).abs() < 1e-12);
  }

  #[test]
  fn typos_replace_every_occurrence() {
    assert_eq!(
      inject_typos("the great thing is the price"),
      "teh gerat thing is teh price"
    );
    // Capitalised words are left alone.
    assert_eq!(inject_typos("The Great"), "The Great");
  }

  #[test]
  fn templates_follow_rating() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
      assert!(POSITIVE_TEMPLATES.contains(&template_for(5, &mut rng)));
      assert!(POSITIVE_TEMPLATES.contains(&template_for(4, &mut rng)));
      assert!(NEUTRAL_TEMPLATES.contains(&template_for(3, &mut rng)));
      assert!(NEGATIVE_TEMPLATES.contains(&template_for(2, &mut rng)));
      assert!(NEGATIVE_TEMPLATES.contains(&template_for(1, &mut rng)));
    }
  }

  #[test]
  fn filled_templates_have_no_placeholders() {
    let mut rng = StdRng::seed_from_u64(11);
    for template in POSITIVE_TEMPLATES
      .iter()
      .chain(NEGATIVE_TEMPLATES)
      .chain(NEUTRAL_TEMPLATES)
    {
      let text = fill_template(template, &mut rng);
      assert!(!text.contains('{') && !text.contains('}'), "{text}");
    }
  }

  #[test]
  fn noise_free_model_keeps_every_text() {
    let synth = Synthesizer::new(NoiseModel::none()).unwrap();
    let table = synth.generate(200, &mut StdRng::seed_from_u64(5)).unwrap();
    assert!(table.iter().all(|r| r.raw_text.is_some()));
    assert!(
      table
        .iter()
        .filter_map(|r| r.raw_text.as_deref())
        .all(|t| !t.contains("teh") && !t.contains("gerat"))
    );
  }

  #[test]
  fn certain_missing_values_blank_every_text() {
    let noise = NoiseModel {
      typo_probability:    1.0,
      missing_probability: 1.0,
    };
    let table = Synthesizer::new(noise)
      .unwrap()
      .generate(20, &mut StdRng::seed_from_u64(5))
      .unwrap();
    assert!(table.iter().all(|r| r.raw_text.is_none() && r.rating.is_some()));
  }

  #[test]
  fn rejects_invalid_probabilities() {
    let noise = NoiseModel {
      typo_probability:    1.5,
      missing_probability: 0.0,
    };
    assert!(Synthesizer::new(noise).is_err());
  }
}
