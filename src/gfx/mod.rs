//! Graphics and terminal library.
//!
//! Rendering is done in two steps: a [`Frame`] is painted from scratch, and
//! then handed to a [`Terminal`] that puts it on the screen. The terminal is
//! also where input comes from.

use std::io;

use thiserror::Error;

use crate::input::InputEvent;

pub mod curses;
pub mod frame;
pub mod texel;

pub use curses::Curses;
pub use frame::Frame;

/// An error produced while drawing to, or reading from, the terminal.
#[derive(Debug, Error)]
pub enum RenderError {
  #[error(
    "cannot draw {len} cells at row {row}, column {col} on a {rows}x{cols} screen"
  )]
  OutOfBounds {
    row: usize,
    col: usize,
    len: usize,
    rows: usize,
    cols: usize,
  },
  #[error("terminal i/o failed")]
  Io(#[from] io::Error),
}

/// A display surface plus an input source.
///
/// [`Curses`] is the real implementation; anything that can show a [`Frame`]
/// and produce [`InputEvent`]s will do.
pub trait Terminal {
  /// Returns the current dimensions of the display, as `(rows, cols)`.
  fn dims(&self) -> Result<(usize, usize), RenderError>;

  /// Clears the display, draws all of `frame`, and flushes it.
  fn present(&mut self, frame: &Frame) -> Result<(), RenderError>;

  /// Blocks until the next input event arrives.
  fn next_event(&mut self) -> Result<InputEvent, RenderError>;
}
