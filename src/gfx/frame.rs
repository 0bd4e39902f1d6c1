//! Full-screen texel buffers.

use crate::gfx::texel::Texel;
use crate::gfx::RenderError;

/// A screen's worth of texels, in row-major order.
///
/// A `Frame` is built up from scratch every cycle and then handed to a
/// [`Terminal`](crate::gfx::Terminal) in its entirety.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
  rows: usize,
  cols: usize,
  data: Box<[Texel]>,
}

impl Frame {
  /// Creates a blank `Frame` of the given dimensions.
  pub fn new(rows: usize, cols: usize) -> Self {
    Self {
      rows,
      cols,
      data: vec![Texel::empty(); rows * cols].into_boxed_slice(),
    }
  }

  /// Returns the dimensions of this frame, as `(rows, cols)`.
  pub fn dims(&self) -> (usize, usize) {
    (self.rows, self.cols)
  }

  /// Blanks out every texel.
  pub fn clear(&mut self) {
    for tx in self.data.iter_mut() {
      *tx = Texel::empty();
    }
  }

  /// Returns the texel at `(row, col)`, if it is in bounds.
  #[cfg(test)]
  pub fn get(&self, row: usize, col: usize) -> Option<Texel> {
    if row >= self.rows || col >= self.cols {
      return None;
    }
    self.data.get(row * self.cols + col).copied()
  }

  /// Prints `text` starting at `(row, col)`, one character per cell.
  ///
  /// Every cell takes its colors and weight from `style`. Text that would
  /// run off the frame is an error rather than being clipped; nothing is
  /// written in that case.
  pub fn print(
    &mut self,
    row: usize,
    col: usize,
    text: &str,
    style: Texel,
  ) -> Result<(), RenderError> {
    let len = text.chars().count();
    if row >= self.rows || col + len > self.cols {
      return Err(RenderError::OutOfBounds {
        row,
        col,
        len,
        rows: self.rows,
        cols: self.cols,
      });
    }

    let start = row * self.cols + col;
    for (tx, c) in self.data[start..start + len].iter_mut().zip(text.chars()) {
      *tx = style.with_glyph(c);
    }
    Ok(())
  }

  /// Iterates over every texel along with its `(row, col)`.
  pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Texel)> + '_ {
    let cols = self.cols;
    self
      .data
      .iter()
      .enumerate()
      .map(move |(i, tx)| (i / cols, i % cols, *tx))
  }

  /// Returns the glyphs on `row` as a string, with blanks as spaces and
  /// trailing blanks trimmed.
  #[cfg(test)]
  pub fn row_text(&self, row: usize) -> String {
    if row >= self.rows {
      return String::new();
    }
    let start = row * self.cols;
    let text = self.data[start..start + self.cols]
      .iter()
      .map(|tx| tx.glyph().unwrap_or(' '))
      .collect::<String>();
    text.trim_end().to_owned()
  }
}
