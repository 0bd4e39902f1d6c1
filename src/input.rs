//! Input events.
//!
//! Terminal input is decoded into [`InputEvent`]s: key presses, mouse reports,
//! and resizes. Keys carry a curses-style integer code (see [`Key::code()`])
//! so that status text can report them the way a curses program would.

use std::fmt;

pub use crossterm::event::KeyCode;
pub use crossterm::event::KeyModifiers;

use crossterm::event::Event;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

/// A single input event.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputEvent {
  /// A key was pressed.
  Key(Key),
  /// The mouse was clicked, released, dragged, scrolled, or moved.
  Mouse(MouseReport),
  /// The terminal was resized.
  Resize,
}

impl InputEvent {
  /// Converts a raw `crossterm` event into an `InputEvent`.
  ///
  /// Returns `None` for events that should be ignored, such as key releases
  /// and focus changes.
  pub fn from_crossterm(event: Event) -> Option<InputEvent> {
    match event {
      Event::Key(e) if e.kind == KeyEventKind::Release => None,
      Event::Key(e) => Some(InputEvent::Key(Key::from(e))),
      Event::Mouse(e) => Some(InputEvent::Mouse(MouseReport::from(e))),
      Event::Resize(..) => Some(InputEvent::Resize),
      _ => None,
    }
  }
}

/// A key press.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Key {
  code: KeyCode,
  mods: KeyModifiers,
}

impl From<KeyEvent> for Key {
  fn from(e: KeyEvent) -> Self {
    Key::new(e.code, e.modifiers)
  }
}

impl Key {
  /// Creates a new `Key`.
  pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
    Self { code, mods }
  }

  /// Creates a new unmodified `Key` for the character `c`.
  #[cfg(test)]
  pub fn char(c: char) -> Self {
    Self::new(KeyCode::Char(c), KeyModifiers::NONE)
  }

  /// Returns the key's curses-style code, if it has one.
  ///
  /// Characters map to their scalar value, with Ctrl+letter mapping to the
  /// corresponding control character. Function and navigation keys map to
  /// the classic curses `KEY_*` values, which all lie above 255.
  pub fn code(self) -> Option<u32> {
    let code = match self.code {
      KeyCode::Char(c)
        if self.mods.contains(KeyModifiers::CONTROL)
          && c.is_ascii_alphabetic() =>
      {
        c.to_ascii_lowercase() as u32 - 'a' as u32 + 1
      }
      KeyCode::Char(c) => c as u32,
      KeyCode::Tab => 9,
      KeyCode::Enter => 10,
      KeyCode::Esc => 27,
      KeyCode::Down => 0o402,
      KeyCode::Up => 0o403,
      KeyCode::Left => 0o404,
      KeyCode::Right => 0o405,
      KeyCode::Home => 0o406,
      KeyCode::Backspace => 0o407,
      KeyCode::F(n) => 0o410 + n as u32,
      KeyCode::Delete => 0o512,
      KeyCode::Insert => 0o513,
      KeyCode::PageDown => 0o522,
      KeyCode::PageUp => 0o523,
      KeyCode::BackTab => 0o541,
      KeyCode::End => 0o550,
      _ => return None,
    };
    Some(code)
  }

  /// Returns whether this key should end the game: `q` or Ctrl+C.
  pub fn is_quit(self) -> bool {
    match self.code() {
      Some(3) => true,
      Some(c) => c == 'q' as u32 && !self.mods.contains(KeyModifiers::CONTROL),
      None => false,
    }
  }
}

impl fmt::Display for Key {
  /// Prints the key as a character when its code is below 256 and printable,
  /// and as its numeric code otherwise.
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.code() {
      Some(code) => match char::from_u32(code) {
        Some(c) if code < 256 && !c.is_control() => write!(f, "{}", c),
        _ => write!(f, "{}", code),
      },
      None => write!(f, "{:?}", self.code),
    }
  }
}

bitflags::bitflags! {
  /// The buttons and modifiers involved in a mouse event.
  pub struct ButtonMask: u32 {
    const LEFT_RELEASED = 1 << 0;
    const LEFT_PRESSED = 1 << 1;
    const MIDDLE_RELEASED = 1 << 5;
    const MIDDLE_PRESSED = 1 << 6;
    const RIGHT_RELEASED = 1 << 10;
    const RIGHT_PRESSED = 1 << 11;
    const SCROLL_UP = 1 << 16;
    const SCROLL_DOWN = 1 << 21;
    const SCROLL_LEFT = 1 << 22;
    const SCROLL_RIGHT = 1 << 23;

    const SHIFT = 1 << 25;
    const CTRL = 1 << 26;
    const ALT = 1 << 27;
    const MOVED = 1 << 28;
  }
}

impl ButtonMask {
  fn pressed(button: MouseButton) -> Self {
    match button {
      MouseButton::Left => Self::LEFT_PRESSED,
      MouseButton::Middle => Self::MIDDLE_PRESSED,
      MouseButton::Right => Self::RIGHT_PRESSED,
    }
  }

  fn released(button: MouseButton) -> Self {
    match button {
      MouseButton::Left => Self::LEFT_RELEASED,
      MouseButton::Middle => Self::MIDDLE_RELEASED,
      MouseButton::Right => Self::RIGHT_RELEASED,
    }
  }
}

/// A mouse event: where it happened and which buttons were involved.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MouseReport {
  /// The column, starting at zero.
  pub x: u16,
  /// The row, starting at zero.
  pub y: u16,
  /// The buttons involved.
  pub buttons: ButtonMask,
}

impl From<MouseEvent> for MouseReport {
  fn from(e: MouseEvent) -> Self {
    let mut buttons = match e.kind {
      MouseEventKind::Down(b) => ButtonMask::pressed(b),
      MouseEventKind::Up(b) => ButtonMask::released(b),
      MouseEventKind::Drag(b) => ButtonMask::pressed(b) | ButtonMask::MOVED,
      MouseEventKind::Moved => ButtonMask::MOVED,
      MouseEventKind::ScrollUp => ButtonMask::SCROLL_UP,
      MouseEventKind::ScrollDown => ButtonMask::SCROLL_DOWN,
      MouseEventKind::ScrollLeft => ButtonMask::SCROLL_LEFT,
      MouseEventKind::ScrollRight => ButtonMask::SCROLL_RIGHT,
    };
    if e.modifiers.contains(KeyModifiers::SHIFT) {
      buttons |= ButtonMask::SHIFT;
    }
    if e.modifiers.contains(KeyModifiers::CONTROL) {
      buttons |= ButtonMask::CTRL;
    }
    if e.modifiers.contains(KeyModifiers::ALT) {
      buttons |= ButtonMask::ALT;
    }

    MouseReport {
      x: e.column,
      y: e.row,
      buttons,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crossterm::event::KeyEventState;

  #[test]
  fn key_codes() {
    assert_eq!(Key::char('a').code(), Some(97));
    assert_eq!(Key::new(KeyCode::Enter, KeyModifiers::NONE).code(), Some(10));
    assert_eq!(Key::new(KeyCode::Up, KeyModifiers::NONE).code(), Some(259));
    assert_eq!(Key::new(KeyCode::F(1), KeyModifiers::NONE).code(), Some(265));
    assert_eq!(
      Key::new(KeyCode::Char('C'), KeyModifiers::CONTROL).code(),
      Some(3)
    );
    assert_eq!(Key::new(KeyCode::Null, KeyModifiers::NONE).code(), None);
  }

  #[test]
  fn key_display() {
    assert_eq!(Key::char('x').to_string(), "x");
    assert_eq!(Key::char('é').to_string(), "é");
    assert_eq!(Key::char('€').to_string(), "8364");
    assert_eq!(Key::new(KeyCode::Enter, KeyModifiers::NONE).to_string(), "10");
    assert_eq!(Key::new(KeyCode::Left, KeyModifiers::NONE).to_string(), "260");
  }

  #[test]
  fn quit_keys() {
    assert!(Key::char('q').is_quit());
    assert!(Key::new(KeyCode::Char('c'), KeyModifiers::CONTROL).is_quit());
    assert!(!Key::char('Q').is_quit());
    assert!(!Key::new(KeyCode::Char('q'), KeyModifiers::CONTROL).is_quit());
    assert!(!Key::new(KeyCode::Esc, KeyModifiers::NONE).is_quit());
  }

  #[test]
  fn releases_are_ignored() {
    let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    assert_eq!(
      InputEvent::from_crossterm(Event::Key(press)),
      Some(InputEvent::Key(Key::char('a')))
    );

    let release = KeyEvent::new_with_kind_and_state(
      KeyCode::Char('a'),
      KeyModifiers::NONE,
      KeyEventKind::Release,
      KeyEventState::NONE,
    );
    assert_eq!(InputEvent::from_crossterm(Event::Key(release)), None);
    assert_eq!(InputEvent::from_crossterm(Event::FocusGained), None);
    assert_eq!(
      InputEvent::from_crossterm(Event::Resize(80, 24)),
      Some(InputEvent::Resize)
    );
  }

  #[test]
  fn mouse_reports() {
    let click = MouseEvent {
      kind: MouseEventKind::Down(MouseButton::Left),
      column: 10,
      row: 5,
      modifiers: KeyModifiers::NONE,
    };
    assert_eq!(
      InputEvent::from_crossterm(Event::Mouse(click)),
      Some(InputEvent::Mouse(MouseReport {
        x: 10,
        y: 5,
        buttons: ButtonMask::LEFT_PRESSED,
      }))
    );

    let drag = MouseEvent {
      kind: MouseEventKind::Drag(MouseButton::Right),
      column: 0,
      row: 0,
      modifiers: KeyModifiers::SHIFT,
    };
    assert_eq!(
      MouseReport::from(drag).buttons,
      ButtonMask::RIGHT_PRESSED | ButtonMask::MOVED | ButtonMask::SHIFT
    );
  }
}
