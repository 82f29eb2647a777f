//! Rule-based polarity scoring over a [`Lexicon`].
//!
//! Each token's valence is looked up and then adjusted by its neighbourhood:
//! degree modifiers and negators in the three preceding tokens, ALL-CAPS
//! emphasis, and a contrastive `but` that shifts weight onto the clause after
//! it. Exclamation and question marks amplify the summed valence before it is
//! squashed into `[-1, 1]`.

use serde::Serialize;

use crate::lexicon::Lexicon;

/// Emphasis added to a word written in ALL CAPS inside mixed-case text.
pub const CAPS_INCREMENT: f64 = 0.733;

/// Multiplier applied to a valence that follows a negator.
pub const NEGATION_SCALAR: f64 = -0.74;

/// Normalisation constant for the compound score.
pub const ALPHA: f64 = 15.0;

const EXCLAMATION_AMPLIFIER: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_AMPLIFIER: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

/// Decay of a modifier's effect with its distance from the scored word.
const DISTANCE_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Proportions of negative, neutral and positive content, plus the compound
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PolarityScores {
  pub neg:      f64,
  pub neu:      f64,
  pub pos:      f64,
  /// Normalised sum of all valences, rounded to four decimals.
  pub compound: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SentimentAnalyzer {
  lexicon: Lexicon,
}

impl SentimentAnalyzer {
  pub fn new() -> Self { Self::default() }

  pub fn with_lexicon(lexicon: Lexicon) -> Self { Self { lexicon } }

  pub fn lexicon(&self) -> &Lexicon { &self.lexicon }

  pub fn polarity_scores(&self, text: &str) -> PolarityScores {
    let tokens = tokenize(text);
    let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
    let cap_diff = has_cap_differential(&tokens);

    let mut sentiments: Vec<f64> = (0..tokens.len())
      .map(|i| {
        if self.lexicon.booster(&lower[i]).is_some() {
          0.0
        } else {
          self.valence_at(i, &tokens, &lower, cap_diff)
        }
      })
      .collect();

    apply_but_shift(&lower, &mut sentiments);
    summarize(&sentiments, text)
  }

  fn valence_at(
    &self,
    i: usize,
    tokens: &[&str],
    lower: &[String],
    cap_diff: bool,
  ) -> f64 {
    let word = lower[i].as_str();
    let Some(mut valence) = self.lexicon.valence(word) else {
      return 0.0;
    };

    // "no" acting as a determiner ("no problems") carries no polarity itself.
    if word == "no"
      && lower
        .get(i + 1)
        .is_some_and(|next| self.lexicon.contains(next))
    {
      valence = 0.0;
    }
    if (i >= 1 && lower[i - 1] == "no") || (i >= 2 && lower[i - 2] == "no") {
      valence *= NEGATION_SCALAR;
    }

    if cap_diff && is_all_caps(tokens[i]) {
      valence += if valence > 0.0 {
        CAPS_INCREMENT
      } else {
        -CAPS_INCREMENT
      };
    }

    for (back, decay) in (1..=3).zip(DISTANCE_DECAY) {
      if i < back {
        break;
      }
      let prev = lower[i - back].as_str();
      if self.lexicon.contains(prev) {
        continue;
      }
      valence += self.modifier_scalar(prev, tokens[i - back], valence, cap_diff)
        * decay;
      if self.lexicon.is_negation(prev) {
        valence *= NEGATION_SCALAR;
      }
    }

    valence
  }

  fn modifier_scalar(
    &self,
    word: &str,
    original: &str,
    valence: f64,
    cap_diff: bool,
  ) -> f64 {
    let Some(mut scalar) = self.lexicon.booster(word) else {
      return 0.0;
    };
    if valence < 0.0 {
      scalar = -scalar;
    }
    if cap_diff && is_all_caps(original) {
      scalar += if valence > 0.0 {
        CAPS_INCREMENT
      } else {
        -CAPS_INCREMENT
      };
    }
    scalar
  }
}

impl grumble_core::analyze::PolarityScorer for SentimentAnalyzer {
  type Error = crate::Error;

  fn compound(&self, text: &str) -> crate::Result<f64> {
    Ok(self.polarity_scores(text).compound)
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Whitespace tokens with surrounding punctuation removed. Tokens that are
/// nothing but punctuation are dropped.
fn tokenize(text: &str) -> Vec<&str> {
  text
    .split_whitespace()
    .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
    .filter(|t| !t.is_empty())
    .collect()
}

fn is_all_caps(token: &str) -> bool {
  token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are written in ALL CAPS.
fn has_cap_differential(tokens: &[&str]) -> bool {
  let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
  caps > 0 && caps < tokens.len()
}

/// Halve valences before the first `but` and boost the ones after it.
fn apply_but_shift(lower: &[String], sentiments: &mut [f64]) {
  let Some(pivot) = lower.iter().position(|w| w == "but") else {
    return;
  };
  for (i, s) in sentiments.iter_mut().enumerate() {
    if i < pivot {
      *s *= 0.5;
    } else if i > pivot {
      *s *= 1.5;
    }
  }
}

fn punctuation_emphasis(text: &str) -> f64 {
  let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
  let questions = text.matches('?').count();
  let question_emphasis = match questions {
    0 | 1 => 0.0,
    2 | 3 => questions as f64 * QUESTION_AMPLIFIER,
    _ => MAX_QUESTION_EMPHASIS,
  };
  exclamations as f64 * EXCLAMATION_AMPLIFIER + question_emphasis
}

fn normalize(score: f64) -> f64 {
  (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
  let factor = 10f64.powi(decimals);
  (value * factor).round() / factor
}

fn summarize(sentiments: &[f64], text: &str) -> PolarityScores {
  if sentiments.is_empty() {
    return PolarityScores::default();
  }

  let emphasis = punctuation_emphasis(text);
  let mut total: f64 = sentiments.iter().sum();
  if total > 0.0 {
    total += emphasis;
  } else if total < 0.0 {
    total -= emphasis;
  }
  let compound = normalize(total);

  let mut pos_sum = 0.0;
  let mut neg_sum = 0.0;
  let mut neu_count = 0.0;
  for &s in sentiments {
    if s > 0.0 {
      pos_sum += s + 1.0;
    } else if s < 0.0 {
      neg_sum += s - 1.0;
    } else {
      neu_count += 1.0;
    }
  }
  if pos_sum > f64::abs(neg_sum) {
    pos_sum += emphasis;
  } else if pos_sum < f64::abs(neg_sum) {
    neg_sum -= emphasis;
  }

  let denominator = pos_sum + neg_sum.abs() + neu_count;
  PolarityScores {
    neg:      round_to((neg_sum / denominator).abs(), 3),
    neu:      round_to((neu_count / denominator).abs(), 3),
    pos:      round_to((pos_sum / denominator).abs(), 3),
    compound: round_to(compound, 4),
  }
}
