//! Word selection.
//!
//! A board is built from a handful of same-length words: one bucket of the
//! [`Lexicon`] is picked at random, and a random number of words are drawn
//! from it without replacement.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use crate::lexicon::Lexicon;

/// The fewest words a selection may contain.
pub const MIN_WORDS: usize = 4;

/// The most words a selection may contain.
pub const MAX_WORDS: usize = 16;

/// An error produced while selecting words.
#[derive(Debug, Error)]
pub enum SelectionError {
  #[error("the dictionary has no words between 3 and 12 characters long")]
  NoBuckets,
  #[error(
    "only {size} distinct dictionary words have length {length}, need at least 4"
  )]
  BucketTooSmall { length: usize, size: usize },
}

/// A set of distinct dictionary words, all of the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordSelection {
  word_len: usize,
  words: Vec<String>,
}

impl WordSelection {
  /// Selects words from a random bucket of `lexicon`.
  ///
  /// Repeated dictionary words count once, so the selection never repeats a
  /// word. Words come out in the order they were drawn, not dictionary order.
  pub fn choose(
    lexicon: &Lexicon,
    rng: &mut impl Rng,
  ) -> Result<WordSelection, SelectionError> {
    if lexicon.is_empty() {
      return Err(SelectionError::NoBuckets);
    }

    let lengths = lexicon.lengths().collect::<Vec<_>>();

    let word_len = lengths[rng.gen_range(0..lengths.len())];
    let mut seen = HashSet::new();
    let mut pool = lexicon
      .bucket(word_len)
      .ok_or(SelectionError::NoBuckets)?
      .iter()
      .filter(|w| seen.insert(w.as_str()))
      .cloned()
      .collect::<Vec<_>>();
    if pool.len() < MIN_WORDS {
      return Err(SelectionError::BucketTooSmall {
        length: word_len,
        size: pool.len(),
      });
    }

    let count = rng.gen_range(MIN_WORDS..=MAX_WORDS.min(pool.len()));
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
      let idx = rng.gen_range(0..pool.len());
      words.push(pool.remove(idx));
    }

    log::debug!(
      "selected {} of {} words of length {}",
      count,
      count + pool.len(),
      word_len
    );
    Ok(WordSelection { word_len, words })
  }

  /// Creates a selection out of explicit words.
  ///
  /// Returns `None` if `words` is empty or the words differ in length.
  #[cfg(test)]
  pub fn from_words(words: Vec<String>) -> Option<WordSelection> {
    let word_len = words.first()?.chars().count();
    if words.iter().any(|w| w.chars().count() != word_len) {
      return None;
    }
    Some(WordSelection { word_len, words })
  }

  /// Returns the length shared by every selected word.
  pub fn word_len(&self) -> usize {
    self.word_len
  }

  /// Returns the selected words, in draw order.
  pub fn words(&self) -> &[String] {
    &self.words
  }

  /// Returns the number of selected words.
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// Returns the total number of characters across every selected word.
  pub fn total_chars(&self) -> usize {
    self.word_len * self.words.len()
  }
}
