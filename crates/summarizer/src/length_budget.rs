//! Summary length budget derivation.
//!
//! ```text
//! word_count = whitespace-delimited tokens in text
//! max_length = clamp(word_count / 2, 30, max_summary_length)
//! min_length = max(1, min(min_summary_length, max_length / 2))
//! ```

use crate::config::SummaryLimits;
use crate::validation::is_text_whitespace;

/// Lower bound applied to `max_length` before the configured cap.
pub const MIN_MAX_LENGTH: usize = 30;

/// `(min_length, max_length)` pair passed to the inference provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBudget {
  /// Minimum summary length
  pub min_length: usize,
  /// Maximum summary length
  pub max_length: usize,
}

/// Number of whitespace-delimited words in `text`.
///
/// Splits on [`is_text_whitespace`], the same set used for trimming.
#[must_use]
pub fn word_count(text: &str) -> usize {
  text.split(is_text_whitespace).filter(|word| !word.is_empty()).count()
}

/// Derives the length budget for a validated text.
///
/// The cap is applied after the lower bound, so a `max_summary_length`
/// below 30 always wins. `min_length` never drops below 1.
#[must_use]
pub fn derive_length_budget(text: &str, limits: &SummaryLimits) -> LengthBudget {
  let max_length = (word_count(text) / 2)
    .max(MIN_MAX_LENGTH)
    .min(limits.max_summary_length);

  let min_length = limits.min_summary_length.min(max_length / 2).max(1);

  LengthBudget {
    min_length,
    max_length,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
  }

  fn defaults() -> SummaryLimits {
    SummaryLimits::default()
  }

  #[test]
  fn word_count_splits_on_any_whitespace() {
    assert_eq!(word_count(""), 0);
    assert_eq!(word_count("   "), 0);
    assert_eq!(word_count("one"), 1);
    assert_eq!(word_count("one  two\tthree\nfour"), 4);
  }

  #[test]
  fn word_count_splits_on_information_separators() {
    assert_eq!(word_count("one\u{1c}two\u{1d}three\u{1e}\u{1f}four"), 4);
    assert_eq!(word_count("\u{1f}\u{1f}"), 0);
    assert_eq!(word_count("one\u{a0}two\u{3000}three"), 3);
  }

  #[test]
  fn sixty_words_gives_floor_budget() {
    let budget = derive_length_budget(&words(60), &defaults());
    assert_eq!(
      budget,
      LengthBudget {
        min_length: 15,
        max_length: 30,
      }
    );
  }

  #[test]
  fn few_words_are_raised_to_floor() {
    let budget = derive_length_budget(&words(3), &defaults());
    assert_eq!(budget.max_length, 30);
    assert_eq!(budget.min_length, 15);
  }

  #[test]
  fn scales_with_word_count() {
    let budget = derive_length_budget(&words(200), &defaults());
    assert_eq!(budget.max_length, 100);
    assert_eq!(budget.min_length, 30);
  }

  #[test]
  fn long_inputs_are_capped() {
    let budget = derive_length_budget(&words(5000), &defaults());
    assert_eq!(budget.max_length, 150);
    assert_eq!(budget.min_length, 30);
  }

  #[test]
  fn cap_below_floor_wins() {
    let limits = SummaryLimits {
      max_summary_length: 10,
      min_summary_length: 30,
    };
    let budget = derive_length_budget(&words(500), &limits);
    assert_eq!(budget.max_length, 10);
    assert_eq!(budget.min_length, 5);
  }

  #[test]
  fn min_length_is_floored_at_one() {
    let limits = SummaryLimits {
      max_summary_length: 1,
      min_summary_length: 30,
    };
    let budget = derive_length_budget(&words(100), &limits);
    assert_eq!(
      budget,
      LengthBudget {
        min_length: 1,
        max_length: 1,
      }
    );
  }

  #[test]
  fn invariants_hold_across_word_counts() {
    let limits = defaults();
    for n in (0..2000).step_by(7) {
      let budget = derive_length_budget(&words(n), &limits);
      assert!((MIN_MAX_LENGTH..=limits.max_summary_length).contains(&budget.max_length));
      assert!(budget.min_length >= 1);
      assert!(budget.min_length <= budget.max_length);
      assert!(budget.min_length <= limits.min_summary_length);
      // deterministic
      assert_eq!(budget, derive_length_budget(&words(n), &limits));
    }
  }
}
