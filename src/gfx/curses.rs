//! `curses` helper library.
//!
//! Note that this module doesn't *actually* use `libcurses`, and merely
//! emulates its behavior at a high level in terms of `crossterm`.
//!
//! A [`Curses`] value owns the terminal's global state (raw mode, the
//! alternate screen, cursor visibility, mouse capture) for as long as it is
//! alive, and puts everything back when it is dropped.

use std::io;

use crossterm::cursor;
use crossterm::event;
use crossterm::style;
use crossterm::terminal;

use crate::gfx::texel;
use crate::gfx::texel::Texel;
use crate::gfx::Frame;
use crate::gfx::RenderError;
use crate::gfx::Terminal;
use crate::input::InputEvent;

/// A low-level curses context.
pub struct Curses<W: io::Write = io::Stdout> {
  w: W,
}

impl Curses {
  /// Initializes the `curses` environment on `stdout`.
  pub fn init() -> io::Result<Curses> {
    Curses::with(io::stdout())
  }
}

/// Arguments for a draw call.
///
/// See [`Curses::draw()`].
#[allow(missing_docs)]
pub struct DrawCall {
  pub row: usize,
  pub col: usize,
  pub texel: Texel,
}

fn to_crossterm(color: texel::Color) -> style::Color {
  match color {
    texel::Color::Rgb(rgb) => style::Color::Rgb {
      r: rgb.red,
      g: rgb.green,
      b: rgb.blue,
    },
    texel::Color::Reset => style::Color::Reset,
  }
}

impl<W: io::Write> Curses<W> {
  /// Initializes the `curses` environment for `w`.
  pub fn with(w: W) -> io::Result<Curses<W>> {
    terminal::enable_raw_mode()?;

    // From here on, `Drop` undoes whatever was set up, even on failure.
    let mut curses = Curses { w };
    crossterm::execute!(
      curses.w,
      terminal::EnterAlternateScreen,
      cursor::Hide,
      terminal::DisableLineWrap,
      event::EnableMouseCapture,
    )?;
    log::debug!("terminal initialized");
    Ok(curses)
  }

  /// Draws the texel in `call` at the given location on the screen.
  ///
  /// The draw is queued; nothing appears until the next flush.
  pub fn draw(&mut self, call: DrawCall) -> io::Result<()> {
    let weight = match call.texel.weight() {
      texel::Weight::Normal => style::Attribute::NormalIntensity,
      texel::Weight::Light => style::Attribute::Dim,
      texel::Weight::Bold => style::Attribute::Bold,
    };

    crossterm::queue!(
      self.w,
      cursor::MoveTo(call.col as _, call.row as _),
      style::SetAttribute(style::Attribute::Reset),
      style::SetAttribute(weight),
      style::SetColors(style::Colors {
        foreground: Some(to_crossterm(call.texel.fg())),
        background: Some(to_crossterm(call.texel.bg())),
      }),
      style::Print(call.texel.glyph().unwrap_or(' ')),
    )
  }

  /// Clean up whatever mess the terminal made.
  fn cleanup(&mut self) -> io::Result<()> {
    let restored = crossterm::execute!(
      self.w,
      style::SetAttribute(style::Attribute::Reset),
      style::ResetColor,
      event::DisableMouseCapture,
      terminal::LeaveAlternateScreen,
      cursor::Show,
      terminal::EnableLineWrap,
    );
    // Leave raw mode even if the escape sequences could not be written.
    terminal::disable_raw_mode()?;
    restored?;
    self.w.flush()
  }
}

impl<W: io::Write> Terminal for Curses<W> {
  fn dims(&self) -> Result<(usize, usize), RenderError> {
    let (cols, rows) = terminal::size()?;
    Ok((rows as _, cols as _))
  }

  fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
    crossterm::queue!(self.w, terminal::Clear(terminal::ClearType::All))?;
    for (row, col, texel) in frame.cells() {
      self.draw(DrawCall { row, col, texel })?;
    }
    self.w.flush()?;
    Ok(())
  }

  fn next_event(&mut self) -> Result<InputEvent, RenderError> {
    loop {
      if let Some(e) = InputEvent::from_crossterm(event::read()?) {
        log::trace!("input: {:?}", e);
        return Ok(e);
      }
    }
  }
}

/// A writer that swallows everything while the terminal is in raw mode.
///
/// Log records written to stderr while a [`Curses`] is alive would paint over
/// the screen, so they are dropped until the terminal is restored.
pub struct RawModeGate<W> {
  inner: W,
  raw: fn() -> bool,
}

impl RawModeGate<io::Stderr> {
  /// Creates a gate in front of `stderr`, keyed on crossterm's raw mode flag.
  pub fn stderr() -> Self {
    Self::new(io::stderr(), || terminal::is_raw_mode_enabled().unwrap_or(false))
  }
}

impl<W: io::Write> RawModeGate<W> {
  /// Creates a gate in front of `inner`; `raw` reports whether to drop writes.
  pub fn new(inner: W, raw: fn() -> bool) -> Self {
    Self { inner, raw }
  }
}

impl<W: io::Write> io::Write for RawModeGate<W> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    if (self.raw)() {
      return Ok(buf.len());
    }
    self.inner.write(buf)
  }

  fn flush(&mut self) -> io::Result<()> {
    if (self.raw)() {
      return Ok(());
    }
    self.inner.flush()
  }
}

impl<W: io::Write> Drop for Curses<W> {
  fn drop(&mut self) {
    match self.cleanup() {
      Ok(()) => log::debug!("terminal restored"),
      Err(e) => log::error!("could not restore terminal: {}", e),
    }
  }
}
