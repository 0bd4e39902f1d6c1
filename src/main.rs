//! A terminal word-guessing puzzle in the style of a hacking minigame.
//!
//! A handful of same-length dictionary words are hidden among columns of
//! symbol noise, next to a gutter of fake memory addresses.

#![deny(unused)]
#![deny(warnings)]

use std::fs::File;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng as _;

pub mod address;
pub mod game;
pub mod gfx;
pub mod input;
pub mod layout;
pub mod lexicon;
pub mod select;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
  /// The word file; only its first line is read.
  #[arg(default_value = "words.txt")]
  words: PathBuf,

  /// Number of attempts shown on the indicator.
  #[arg(long, default_value_t = 4)]
  attempts: u32,

  /// Seed for a reproducible board.
  #[arg(long)]
  seed: Option<u64>,

  /// Write log records to this file instead of stderr.
  ///
  /// Records sent to stderr are dropped while the game screen is up, so use
  /// this to see logs from the render/input loop.
  #[arg(long)]
  log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
  match log_file {
    Some(path) => {
      let file = File::create(path).with_context(|| {
        format!("could not create log file {}", path.display())
      })?;
      env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
      )
      .target(env_logger::Target::Pipe(Box::new(file)))
      .init();
    }
    None => env_logger::Builder::from_default_env()
      .target(env_logger::Target::Pipe(Box::new(
        gfx::curses::RawModeGate::stderr(),
      )))
      .init(),
  }
  Ok(())
}

fn main() -> anyhow::Result<()> {
  use crate::game::Game;
  use crate::game::GridConfig;
  use crate::layout::Layout;
  use crate::layout::LayoutConfig;
  use crate::lexicon::Lexicon;
  use crate::select::WordSelection;

  let args = Args::parse();
  init_logging(args.log_file.as_ref())?;

  let mut rng = match args.seed {
    Some(seed) => {
      log::info!("using seed {}", seed);
      StdRng::seed_from_u64(seed)
    }
    None => StdRng::from_entropy(),
  };

  // Everything that can fail at startup happens before the terminal is
  // touched, so errors print on a sane screen.
  let lexicon = Lexicon::load(&args.words)?;
  let selection = WordSelection::choose(&lexicon, &mut rng)
    .with_context(|| format!("bad dictionary {}", args.words.display()))?;
  let config = LayoutConfig::default();
  let layout = Layout::generate(&selection, &config, &mut rng)
    .context("could not lay out the board")?;
  let labels = address::labels(config.lines, &mut rng);

  let mut game = Game::new(args.attempts, labels, layout, GridConfig::default());

  // The terminal is restored when `window` drops, before any error from the
  // loop is reported.
  let result = {
    let mut window =
      gfx::Curses::init().context("could not initialize the terminal")?;
    crate::game::run(&mut game, &mut window)
  };
  result.context("terminal error")
}
