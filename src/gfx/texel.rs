//! Texels, terminal elements.
//!
//! A *texel* is a single terminal cell: a glyph plus the colors and weight it
//! is drawn with. Texels without a glyph double as styles; see
//! [`Frame::print()`](crate::gfx::Frame::print).

pub use palette::named as colors;

/// An RGB value used by a [`Texel`].
pub type Rgb = palette::Srgb<u8>;

/// A foreground or background color for a [`Texel`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Color {
  /// A solid RGB value.
  Rgb(Rgb),

  /// The "default" value, i.e., reset to whatever the terminal's default colors
  /// are.
  Reset,
}

impl From<Rgb> for Color {
  fn from(rgb: Rgb) -> Self {
    Self::Rgb(rgb)
  }
}

/// A character weight, ranging from light to bold.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
#[rustfmt::skip]
pub enum Weight {
  Normal, Light, Bold,
}

/// A "terminal element", analogous to a pixel or voxel.
///
/// A texel consists of a "glyph" (a printable character), a foreground color,
/// a background color, and a weight.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Texel {
  glyph: Option<char>,
  fg: Rgb,
  bg: Rgb,
  meta: Meta,
}

bitflags::bitflags! {
  struct Meta: u8 {
    const WEIGHT_BOLD = 1 << 0;
    const WEIGHT_DIM = 1 << 1;

    const BG_RESET = 1 << 4;
    const FG_RESET = 1 << 5;
  }
}

impl Texel {
  /// Creates a new blank texel in the terminal's default colors.
  #[inline]
  pub fn empty() -> Self {
    Self {
      glyph: None,
      fg: colors::BLACK,
      bg: colors::BLACK,
      meta: Meta::FG_RESET | Meta::BG_RESET,
    }
  }

  /// Creates a new colorless texel with the given glyph.
  #[cfg(test)]
  #[inline]
  pub fn new(glyph: char) -> Self {
    Self::empty().with_glyph(glyph)
  }

  /// Returns this texel's glyph.
  #[inline]
  pub fn glyph(self) -> Option<char> {
    self.glyph
  }

  /// Returns a copy of this texel with the given glyph.
  #[inline]
  pub fn with_glyph(mut self, glyph: impl Into<Option<char>>) -> Self {
    self.glyph = glyph.into();
    self
  }

  /// Returns this texel's foreground color.
  #[inline]
  pub fn fg(self) -> Color {
    if self.meta.contains(Meta::FG_RESET) {
      Color::Reset
    } else {
      self.fg.into()
    }
  }

  /// Returns a copy of this texel with the given foreground color.
  #[inline]
  pub fn with_fg(mut self, color: impl Into<Color>) -> Self {
    match color.into() {
      Color::Rgb(rgb) => {
        self.fg = rgb;
        self.meta.remove(Meta::FG_RESET);
      }
      Color::Reset => self.meta |= Meta::FG_RESET,
    }
    self
  }

  /// Returns this texel's background color.
  #[inline]
  pub fn bg(self) -> Color {
    if self.meta.contains(Meta::BG_RESET) {
      Color::Reset
    } else {
      self.bg.into()
    }
  }

  /// Returns a copy of this texel with the given background color.
  #[inline]
  pub fn with_bg(mut self, color: impl Into<Color>) -> Self {
    match color.into() {
      Color::Rgb(rgb) => {
        self.bg = rgb;
        self.meta.remove(Meta::BG_RESET);
      }
      Color::Reset => self.meta |= Meta::BG_RESET,
    }
    self
  }

  /// Returns this texel's weight.
  pub fn weight(self) -> Weight {
    if self.meta.contains(Meta::WEIGHT_BOLD) {
      Weight::Bold
    } else if self.meta.contains(Meta::WEIGHT_DIM) {
      Weight::Light
    } else {
      Weight::Normal
    }
  }

  /// Returns a copy of this texel with the given weight.
  #[inline]
  pub fn with_weight(mut self, weight: Weight) -> Self {
    self.meta.remove(Meta::WEIGHT_BOLD | Meta::WEIGHT_DIM);
    match weight {
      Weight::Normal => {}
      Weight::Bold => self.meta |= Meta::WEIGHT_BOLD,
      Weight::Light => self.meta |= Meta::WEIGHT_DIM,
    }
    self
  }
}
