//! Dictionary loading.
//!
//! A word file is a single line of whitespace-separated words; anything past
//! the first line is ignored. Words are bucketed by their length in
//! characters, and only lengths in [`MIN_LEN`]`..=`[`MAX_LEN`] are kept.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::io::BufRead as _;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

/// The shortest word length kept by the loader.
pub const MIN_LEN: usize = 3;

/// The longest word length kept by the loader.
pub const MAX_LEN: usize = 12;

/// An error produced while loading a word file.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error("could not open word file {}", path.display())]
  Open { path: PathBuf, source: io::Error },
  #[error("could not read word file {}", path.display())]
  Read { path: PathBuf, source: io::Error },
  #[error("word file {} has an empty first line", path.display())]
  Empty { path: PathBuf },
}

/// A dictionary, bucketed by word length.
///
/// Each bucket holds words in the order they appeared in the source line.
/// Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lexicon {
  buckets: BTreeMap<usize, Vec<String>>,
}

impl Lexicon {
  /// Loads a `Lexicon` from the first line of the file at `path`.
  pub fn load(path: impl AsRef<Path>) -> Result<Lexicon, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
      path: path.to_owned(),
      source,
    })?;

    let mut line = String::new();
    BufReader::new(file)
      .read_line(&mut line)
      .map_err(|source| LoadError::Read {
        path: path.to_owned(),
        source,
      })?;

    if line.trim().is_empty() {
      return Err(LoadError::Empty {
        path: path.to_owned(),
      });
    }

    let lexicon = Lexicon::from_line(&line);
    log::info!(
      "loaded {} words in {} buckets from {}",
      lexicon.word_count(),
      lexicon.buckets.len(),
      path.display()
    );
    Ok(lexicon)
  }

  /// Builds a `Lexicon` out of a single line of words.
  pub fn from_line(line: &str) -> Lexicon {
    let mut buckets = BTreeMap::<usize, Vec<String>>::new();
    for word in line.split_whitespace() {
      let len = word.chars().count();
      if !(MIN_LEN..=MAX_LEN).contains(&len) {
        continue;
      }
      buckets.entry(len).or_default().push(word.to_owned());
    }
    Lexicon { buckets }
  }

  /// Returns whether there are no buckets at all.
  pub fn is_empty(&self) -> bool {
    self.buckets.is_empty()
  }

  /// Returns the word lengths that have a bucket, in ascending order.
  pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
    self.buckets.keys().copied()
  }

  /// Returns the bucket for words of length `len`, if there is one.
  pub fn bucket(&self, len: usize) -> Option<&[String]> {
    self.buckets.get(&len).map(Vec::as_slice)
  }

  /// Returns the total number of words across every bucket.
  pub fn word_count(&self) -> usize {
    self.buckets.values().map(Vec::len).sum()
  }
}
