//! Board layout generation.
//!
//! The board is a fixed number of fixed-width lines. The words of a
//! [`WordSelection`] are scattered across it, separated by runs of random
//! filler symbols, so that the words and the filler together fill every line
//! exactly.
//!
//! The filler budget is computed once up front: it is the board capacity
//! minus the characters the words occupy. Each word is preceded by a burst of
//! at most a quarter of the remaining budget, and whatever is left once every
//! word is placed goes at the end. The budget is only ever decremented, and a
//! burst never exceeds it, so the board comes out full with no overshoot.

use rand::Rng;
use thiserror::Error;

use crate::select::WordSelection;

/// The default filler alphabet.
pub const FILLER: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_{|}~";

/// An error produced while laying out a board.
#[derive(Debug, Error)]
pub enum LayoutError {
  #[error("{needed} word characters do not fit in a board of {capacity}")]
  Overflow { needed: usize, capacity: usize },
  #[error("the filler alphabet is empty")]
  NoFiller,
}

/// Board geometry and filler settings.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
  /// The number of lines on the board.
  pub lines: usize,
  /// The maximum width of each line.
  pub width: usize,
  /// The shortest filler burst placed before a word, budget permitting.
  pub min_pad: usize,
  /// Symbols that filler is drawn from.
  pub filler: Vec<char>,
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      lines: 34,
      width: 12,
      min_pad: 2,
      filler: FILLER.chars().collect(),
    }
  }
}

impl LayoutConfig {
  /// Returns the total number of characters the board holds.
  pub fn capacity(&self) -> usize {
    self.lines * self.width
  }
}

/// A laid-out board: filler and words wrapped into lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
  lines: Vec<String>,
}

impl Layout {
  /// Lays out `selection` according to `config`.
  pub fn generate(
    selection: &WordSelection,
    config: &LayoutConfig,
    rng: &mut impl Rng,
  ) -> Result<Layout, LayoutError> {
    if config.filler.is_empty() {
      return Err(LayoutError::NoFiller);
    }

    let capacity = config.capacity();
    let needed = selection.total_chars();
    let mut budget = match capacity.checked_sub(needed) {
      Some(b) => b,
      None => return Err(LayoutError::Overflow { needed, capacity }),
    };
    log::debug!(
      "laying out {} words of length {} with {} filler characters",
      selection.len(),
      selection.word_len(),
      budget
    );

    let mut out = LineWriter::new(config.width);
    for word in selection.words() {
      let max_pad = budget / 4;
      let pad = if config.min_pad <= max_pad {
        rng.gen_range(config.min_pad..=max_pad)
      } else {
        config.min_pad.min(budget)
      };
      log::trace!("padding {:?} with {} filler", word, pad);

      for _ in 0..pad {
        out.push(random_filler(&config.filler, rng));
      }
      budget -= pad;
      out.push_str(word);
    }

    for _ in 0..budget {
      out.push(random_filler(&config.filler, rng));
    }

    let lines = out.finish();
    debug_assert_eq!(lines.len(), config.lines);
    Ok(Layout { lines })
  }

  /// Returns the board's lines, top to bottom.
  pub fn lines(&self) -> &[String] {
    &self.lines
  }
}

fn random_filler(filler: &[char], rng: &mut impl Rng) -> char {
  filler[rng.gen_range(0..filler.len())]
}

/// Accumulates characters into lines no wider than `width`.
struct LineWriter {
  width: usize,
  lines: Vec<String>,
  // Width of the last line, in characters.
  current: usize,
}

impl LineWriter {
  fn new(width: usize) -> Self {
    Self {
      width,
      lines: vec![String::new()],
      current: 0,
    }
  }

  fn push(&mut self, c: char) {
    if self.current >= self.width {
      self.lines.push(String::new());
      self.current = 0;
    }
    if let Some(line) = self.lines.last_mut() {
      line.push(c);
      self.current += 1;
    }
  }

  fn push_str(&mut self, s: &str) {
    for c in s.chars() {
      self.push(c);
    }
  }

  fn finish(self) -> Vec<String> {
    self.lines
  }
}
