//! The game screen and its render/input loop.
//!
//! The screen is a two-line banner, an attempts indicator, and a grid of
//! address labels and board lines laid out in columns, with a status line
//! below reporting the last input. Every input event causes a full redraw.

use num::integer::div_ceil;

use crate::gfx::texel::colors;
use crate::gfx::texel::Texel;
use crate::gfx::texel::Weight;
use crate::gfx::Frame;
use crate::gfx::RenderError;
use crate::gfx::Terminal;
use crate::input::InputEvent;
use crate::layout::Layout;

/// The banner printed at the top of the screen.
pub const BANNER: [&str; 2] =
  ["ROBCO INDUSTRIES (TM) TERMLINK PROTOCOL", "ENTER PASSWORD NOW"];

/// The row the attempts indicator is printed on.
const ATTEMPTS_ROW: usize = 3;

/// The glyph repeated once per remaining attempt.
const ATTEMPT_GLYPH: char = '■';

/// Where the label/line grid goes on screen.
#[derive(Clone, Debug)]
pub struct GridConfig {
  /// The first row of the grid.
  pub top: usize,
  /// How many label/line columns the grid is split into.
  pub columns: usize,
  /// The distance between the starts of adjacent columns.
  pub stride: usize,
  /// How far right of its label each board line starts.
  pub text_offset: usize,
}

impl Default for GridConfig {
  fn default() -> Self {
    Self {
      top: 5,
      columns: 2,
      stride: 21,
      text_offset: 8,
    }
  }
}

/// What the loop should do after an event.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Flow {
  Continue,
  Quit,
}

fn banner_style() -> Texel {
  body_style().with_weight(Weight::Bold)
}

fn body_style() -> Texel {
  Texel::empty().with_fg(colors::LIME).with_bg(colors::BLACK)
}

fn status_style() -> Texel {
  body_style().with_weight(Weight::Light)
}

/// Game state: the board plus whatever the last input did.
pub struct Game {
  attempts: u32,
  labels: Vec<String>,
  layout: Layout,
  grid: GridConfig,
  status: Option<String>,
}

impl Game {
  /// Creates a new `Game` showing `layout`, labelled by `labels`.
  pub fn new(
    attempts: u32,
    labels: Vec<String>,
    layout: Layout,
    grid: GridConfig,
  ) -> Self {
    Self {
      attempts,
      labels,
      layout,
      grid,
      status: None,
    }
  }

  /// Returns the number of attempts remaining.
  pub fn attempts(&self) -> u32 {
    self.attempts
  }

  /// Returns the status text describing the last input, if any.
  pub fn status(&self) -> Option<&str> {
    self.status.as_deref()
  }

  /// Returns the number of rows the grid takes up.
  pub fn grid_rows(&self) -> usize {
    let cells = self.labels.len().max(self.layout.lines().len());
    div_ceil(cells, self.grid.columns.max(1))
  }

  fn status_row(&self) -> usize {
    self.grid.top + self.grid_rows() + 1
  }

  /// Updates the game in response to `event`.
  pub fn handle(&mut self, event: InputEvent) -> Flow {
    match event {
      InputEvent::Key(key) if key.is_quit() => return Flow::Quit,
      InputEvent::Key(key) => {
        self.status = Some(format!("Key pressed: {}", key));
      }
      InputEvent::Mouse(m) => {
        self.status = Some(format!(
          "Mouse clicked at {}, {} with button {}",
          m.x,
          m.y,
          m.buttons.bits()
        ));
      }
      InputEvent::Resize => {}
    }
    Flow::Continue
  }

  /// Paints the whole screen onto `frame`.
  pub fn draw(&self, frame: &mut Frame) -> Result<(), RenderError> {
    for (row, text) in BANNER.iter().enumerate() {
      frame.print(row, 0, text, banner_style())?;
    }

    let mut attempts = format!("{} ATTEMPT(S) LEFT:", self.attempts());
    for _ in 0..self.attempts() {
      attempts.push(' ');
      attempts.push(ATTEMPT_GLYPH);
    }
    frame.print(ATTEMPTS_ROW, 0, &attempts, body_style())?;

    let rows = self.grid_rows();
    for (i, label) in self.labels.iter().enumerate() {
      let row = self.grid.top + i % rows;
      let col = (i / rows) * self.grid.stride;
      frame.print(row, col, label, body_style())?;
    }
    for (i, line) in self.layout.lines().iter().enumerate() {
      let row = self.grid.top + i % rows;
      let col = (i / rows) * self.grid.stride + self.grid.text_offset;
      frame.print(row, col, line, body_style())?;
    }

    if let Some(status) = self.status() {
      frame.print(self.status_row(), 0, status, status_style())?;
    }
    Ok(())
  }
}

/// Runs the render/input loop until a quit key is pressed.
///
/// Each cycle draws a full frame, presents it, and then blocks on exactly one
/// input event.
pub fn run(game: &mut Game, term: &mut impl Terminal) -> Result<(), RenderError> {
  let (rows, cols) = term.dims()?;
  let mut frame = Frame::new(rows, cols);
  loop {
    let dims = term.dims()?;
    if frame.dims() == dims {
      frame.clear();
    } else {
      log::debug!("screen is now {}x{}", dims.0, dims.1);
      frame = Frame::new(dims.0, dims.1);
    }

    game.draw(&mut frame)?;
    term.present(&frame)?;

    if game.handle(term.next_event()?) == Flow::Quit {
      log::info!("quit requested");
      return Ok(());
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::collections::VecDeque;
  use std::io;

  use rand::rngs::StdRng;
  use rand::SeedableRng as _;

  use crate::address;
  use crate::input::ButtonMask;
  use crate::input::Key;
  use crate::input::KeyCode;
  use crate::input::KeyModifiers;
  use crate::input::MouseReport;
  use crate::layout::LayoutConfig;
  use crate::select::WordSelection;

  /// A terminal that replays scripted events and records what it was shown.
  struct FakeTerminal {
    dims: (usize, usize),
    events: VecDeque<InputEvent>,
    frames: Vec<Frame>,
  }

  impl FakeTerminal {
    fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
      Self {
        dims: (24, 80),
        events: events.into_iter().collect(),
        frames: Vec::new(),
      }
    }
  }

  impl Terminal for FakeTerminal {
    fn dims(&self) -> Result<(usize, usize), RenderError> {
      Ok(self.dims)
    }

    fn present(&mut self, frame: &Frame) -> Result<(), RenderError> {
      self.frames.push(frame.clone());
      Ok(())
    }

    fn next_event(&mut self) -> Result<InputEvent, RenderError> {
      self.events.pop_front().ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "out of events").into()
      })
    }
  }

  fn game() -> Game {
    let mut rng = StdRng::seed_from_u64(1);
    let words = ["APPLE", "MANGO", "GRAPE", "LEMON"]
      .iter()
      .map(|&w| w.to_owned())
      .collect();
    let sel = WordSelection::from_words(words).unwrap();
    let config = LayoutConfig::default();
    let layout = Layout::generate(&sel, &config, &mut rng).unwrap();
    let labels = address::labels(config.lines, &mut rng);
    Game::new(4, labels, layout, GridConfig::default())
  }

  fn click(x: u16, y: u16) -> InputEvent {
    InputEvent::Mouse(MouseReport {
      x,
      y,
      buttons: ButtonMask::LEFT_PRESSED,
    })
  }

  #[test]
  fn draws_banner_attempts_and_grid() {
    let game = game();
    let mut frame = Frame::new(24, 80);
    game.draw(&mut frame).unwrap();

    assert_eq!(frame.row_text(0), BANNER[0]);
    assert_eq!(frame.row_text(1), BANNER[1]);
    assert_eq!(frame.row_text(3), "4 ATTEMPT(S) LEFT: ■ ■ ■ ■");
    assert_eq!(game.grid_rows(), 17);

    let lines = game.layout.lines();
    for (i, label) in game.labels.iter().enumerate() {
      let row = 5 + i % 17;
      let col = (i / 17) * 21;
      let text = frame.row_text(row);
      let text = text.chars().collect::<Vec<_>>();
      let at = |c: usize, len: usize| {
        text[c..c + len].iter().collect::<String>()
      };
      assert_eq!(at(col, label.len()), *label);
      assert_eq!(at(col + 8, 12), lines[i]);
    }

    // Nothing has happened yet, so there is no status line.
    assert_eq!(frame.row_text(23), "");
  }

  #[test]
  fn banner_is_highlighted() {
    let game = game();
    let mut frame = Frame::new(24, 80);
    game.draw(&mut frame).unwrap();
    assert_eq!(frame.get(0, 0).unwrap().weight(), Weight::Bold);
    assert_eq!(frame.get(3, 0).unwrap().weight(), Weight::Normal);
  }

  #[test]
  fn too_small_a_screen_is_an_error() {
    let game = game();
    let mut frame = Frame::new(10, 80);
    assert!(matches!(
      game.draw(&mut frame),
      Err(RenderError::OutOfBounds { .. })
    ));

    let mut frame = Frame::new(24, 30);
    assert!(game.draw(&mut frame).is_err());
  }

  #[test]
  fn keys_update_status() {
    let mut game = game();
    assert_eq!(game.handle(InputEvent::Key(Key::char('a'))), Flow::Continue);
    assert_eq!(game.status(), Some("Key pressed: a"));

    let left = Key::new(KeyCode::Left, KeyModifiers::NONE);
    game.handle(InputEvent::Key(left));
    assert_eq!(game.status(), Some("Key pressed: 260"));

    game.handle(InputEvent::Resize);
    assert_eq!(game.status(), Some("Key pressed: 260"));
    assert_eq!(game.attempts(), 4);
  }

  #[test]
  fn mouse_click_updates_status() {
    let mut game = game();
    assert_eq!(game.handle(click(10, 5)), Flow::Continue);
    assert_eq!(game.status(), Some("Mouse clicked at 10, 5 with button 2"));
  }

  #[test]
  fn quit_draws_no_further_frames() {
    let mut game = game();
    let mut term = FakeTerminal::new(vec![
      InputEvent::Key(Key::char('x')),
      InputEvent::Key(Key::char('q')),
      InputEvent::Key(Key::char('y')),
    ]);
    run(&mut game, &mut term).unwrap();

    assert_eq!(term.frames.len(), 2);
    assert_eq!(term.events.len(), 1);
    assert_eq!(term.frames[1].row_text(23), "Key pressed: x");
  }

  #[test]
  fn every_event_redraws() {
    let mut game = game();
    let mut term = FakeTerminal::new(vec![
      click(10, 5),
      InputEvent::Resize,
      InputEvent::Key(Key::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    ]);
    run(&mut game, &mut term).unwrap();

    assert_eq!(term.frames.len(), 3);
    assert_eq!(term.frames[0].row_text(23), "");
    assert_eq!(
      term.frames[1].row_text(23),
      "Mouse clicked at 10, 5 with button 2"
    );
    assert_eq!(term.frames[2], term.frames[1]);
    assert_eq!(term.frames[2].row_text(3), "4 ATTEMPT(S) LEFT: ■ ■ ■ ■");
  }

  #[test]
  fn terminal_errors_propagate() {
    let mut game = game();
    let mut term = FakeTerminal::new(vec![]);
    assert!(matches!(
      run(&mut game, &mut term),
      Err(RenderError::Io(_))
    ));
    assert_eq!(term.frames.len(), 1);
  }
}
