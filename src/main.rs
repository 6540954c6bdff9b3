//! Terminal Tetris runner (default binary).
//!
//! Owns the only clock: every frame it polls the keyboard, feeds elapsed time
//! to a `DropClock`, ticks the engine as often as that says, and redraws.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use arcade_tetris::best_score::BestScoreStore;
use arcade_tetris::core::{
    DropClock, DropOutcome, EngineConfig, GameSnapshot, GameState, Randomizer,
};
use arcade_tetris::input::{handle_key_event, should_quit};
use arcade_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use arcade_tetris::types::{Command, BOARD_HEIGHT, BOARD_WIDTH, FRAME_MS, INITIAL_DROP_MS};

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width in cells.
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: u8,

    /// Board height in cells.
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: u8,

    /// Gravity interval in milliseconds.
    #[arg(long, default_value_t = INITIAL_DROP_MS)]
    drop_ms: u32,

    /// Randomizer seed; taken from the clock when omitted.
    #[arg(long)]
    seed: Option<u32>,

    /// Deal pieces from shuffled 7-bags instead of uniformly.
    #[arg(long)]
    bag: bool,

    /// JSON file holding the best score across sessions.
    #[arg(long)]
    best_file: Option<PathBuf>,

    /// Write logs here (filtered by RUST_LOG, default `warn`).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        let randomizer = if self.bag {
            Randomizer::SevenBag
        } else {
            Randomizer::Uniform
        };
        EngineConfig::default()
            .with_size(self.width, self.height)
            .with_initial_drop_ms(self.drop_ms)
            .with_randomizer(randomizer)
            .with_seed(self.seed.unwrap_or_else(clock_seed))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Logs go to a file or nowhere; stdout belongs to the game screen.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.engine_config();
    let mut best = match &args.best_file {
        Some(path) => BestScoreStore::at(path),
        None => BestScoreStore::in_memory(),
    };
    let game = GameState::new(config, best.load()?).context("invalid game configuration")?;
    let config = game.config();
    info!(seed = config.seed, width = config.width, height = config.height, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &mut best);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, best: &mut BestScoreStore) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = DropClock::new();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply_command(command);
                        if command == Command::Reset {
                            clock.restart();
                        }
                        persist_best(&mut game, best)?;
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_millis().min(u32::MAX as u128) as u32;
        last_frame = now;

        let due = clock.advance(elapsed, game.drop_interval_ms());
        for _ in 0..due {
            if game.tick() == DropOutcome::Ignored {
                break;
            }
            persist_best(&mut game, best)?;
        }
    }
}

fn persist_best(game: &mut GameState, best: &mut BestScoreStore) -> Result<()> {
    if let Some(event) = game.take_last_event() {
        if event.new_best {
            best.save_if_higher(game.best_score())?;
        }
    }
    Ok(())
}
