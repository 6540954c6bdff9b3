//! Game state module - the drop / lock / clear state machine
//!
//! This module ties together the board, the piece controller, the randomizer and
//! scoring. Every stimulus (a gravity tick or a command) is handled synchronously
//! and completely before the call returns; there is no timer in here.
//!
//! Phases:
//! - `Falling`: an active piece is in play.
//! - `Locking`: the active piece just failed to descend. Only ever seen from
//!   inside a drop; every drop leaves it for `Falling` or `GameOver`.
//! - `GameOver`: terminal until [`GameState::reset`].

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::piece::ActivePiece;
use crate::rng::PieceGenerator;
use crate::scoring::Score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    Locking,
    GameOver,
}

/// Outcome of one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    /// Cells written into the board (0 on a top-out)
    pub cells_merged: u32,
    pub rows_cleared: u32,
    pub points: u32,
    /// The running score passed the previous best
    pub new_best: bool,
    /// The lock ended the game, by topping out or by blocking the next spawn
    pub game_over: bool,
}

/// Result of a gravity tick or a soft drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Not applicable in the current phase (game over, or a tick while paused)
    Ignored,
    /// The piece fell one row
    Moved,
    /// The piece could not fall and was locked
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    active: ActivePiece,
    generator: PieceGenerator,
    score: Score,
    phase: Phase,
    paused: bool,
    drop_interval_ms: u32,
    /// Rows cleared since the last reset
    lines: u32,
    /// Pieces spawned since the last reset, the first one included
    pieces_spawned: u32,
    /// Last lock event (consumed by the host)
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game on an empty board
    ///
    /// `best_score` is whatever the host persisted from earlier sessions.
    pub fn new(config: EngineConfig, best_score: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height);
        Ok(Self::from_validated(config, board, None, best_score))
    }

    /// Resume from an arbitrary position
    ///
    /// The board's dimensions override `config.width`/`config.height`. With
    /// `active == None` a piece is drawn and spawned as usual. A position whose
    /// active piece overlaps the board starts out as game over.
    pub fn from_position(
        mut config: EngineConfig,
        board: Board,
        active: Option<ActivePiece>,
        best_score: u32,
    ) -> Result<Self, ConfigError> {
        config.width = board.width();
        config.height = board.height();
        config.validate()?;
        Ok(Self::from_validated(config, board, active, best_score))
    }

    fn from_validated(
        config: EngineConfig,
        board: Board,
        active: Option<ActivePiece>,
        best_score: u32,
    ) -> Self {
        let mut generator =
            PieceGenerator::new(config.seed, config.randomizer, &config.pieces);
        let (active, pieces_spawned) = match active {
            Some(piece) => (piece, 0),
            None => (ActivePiece::spawn(generator.next_kind(), config.width), 1),
        };
        let phase = if active.is_valid(&board) {
            Phase::Falling
        } else {
            Phase::GameOver
        };

        Self {
            drop_interval_ms: config.initial_drop_ms,
            config,
            board,
            active,
            generator,
            score: Score::new(best_score),
            phase,
            paused: false,
            lines: 0,
            pieces_spawned,
            last_event: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn score(&self) -> u32 {
        self.score.current()
    }

    pub fn best_score(&self) -> u32 {
        self.score.best()
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Interval at which the host should call [`tick`](Self::tick)
    ///
    /// `None` is the inert value: paused or game over, schedule nothing.
    pub fn drop_interval_ms(&self) -> Option<u32> {
        if self.paused || self.phase == Phase::GameOver {
            None
        } else {
            Some(self.drop_interval_ms)
        }
    }

    /// Change the gravity interval (difficulty curves live outside the engine)
    ///
    /// Survives pause/resume; a reset restores the configured initial value.
    pub fn set_drop_interval(&mut self, ms: u32) {
        self.drop_interval_ms = ms.max(1);
    }

    /// Gravity stimulus, called by the host once per drop interval
    pub fn tick(&mut self) -> DropOutcome {
        if self.paused {
            return DropOutcome::Ignored;
        }
        self.soft_drop()
    }

    /// Explicit drop request: fall one row, or lock if the piece cannot
    ///
    /// Accepted while paused; pausing only suspends the timer stimulus.
    pub fn soft_drop(&mut self) -> DropOutcome {
        if self.phase != Phase::Falling {
            return DropOutcome::Ignored;
        }
        if self.active.soft_drop(&self.board) {
            return DropOutcome::Moved;
        }
        self.phase = Phase::Locking;
        DropOutcome::Locked(self.lock_active())
    }

    /// Shift the active piece one column; `false` when blocked or not falling
    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        self.active.move_horizontal(&self.board, dx)
    }

    pub fn move_left(&mut self) -> bool {
        self.move_horizontal(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.move_horizontal(1)
    }

    /// Rotate the active piece clockwise in place; `false` when it does not fit
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        self.active.rotate(&self.board)
    }

    /// Flip the pause flag. Has no effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Start over: empty board, zero score, fresh piece, initial interval
    ///
    /// Allowed from any phase. The best score and the randomizer state carry over.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score.reset();
        self.lines = 0;
        self.pieces_spawned = 0;
        self.paused = false;
        self.drop_interval_ms = self.config.initial_drop_ms;
        self.last_event = None;
        self.spawn_next();
        info!(best = self.score.best(), "game reset");
    }

    /// Apply an input command, returning whether it changed anything
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.soft_drop() != DropOutcome::Ignored,
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Lock the active piece after a failed descent
    fn lock_active(&mut self) -> LockEvent {
        let piece = self.active;

        // Failing to descend at spawn height is a top-out; nothing is merged.
        if piece.y < 1 {
            self.phase = Phase::GameOver;
            info!(
                score = self.score.current(),
                best = self.score.best(),
                "game over: top-out"
            );
            let event = LockEvent {
                game_over: true,
                ..LockEvent::default()
            };
            self.last_event = Some(event);
            return event;
        }

        let merged = self.board.merge(&piece.shape, piece.x, piece.y, piece.kind);
        let rows = self.board.clear_full_rows();
        let previous_best = self.score.best();
        let points = self.score.award_lines(rows);
        self.lines = self.lines.saturating_add(rows as u32);

        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            rows,
            points,
            score = self.score.current(),
            "piece locked"
        );

        self.spawn_next();

        let event = LockEvent {
            cells_merged: merged as u32,
            rows_cleared: rows as u32,
            points,
            new_best: self.score.best() > previous_best,
            game_over: self.phase == Phase::GameOver,
        };
        self.last_event = Some(event);
        event
    }

    /// Replace the active piece with a freshly drawn one at the spawn anchor
    fn spawn_next(&mut self) {
        let kind = self.generator.next_kind();
        self.active = ActivePiece::spawn(kind, self.board.width());
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if self.active.is_valid(&self.board) {
            self.phase = Phase::Falling;
            trace!(kind = kind.as_str(), "spawned");
        } else {
            self.phase = Phase::GameOver;
            info!(
                kind = kind.as_str(),
                score = self.score.current(),
                best = self.score.best(),
                "game over: spawn blocked"
            );
        }
    }

    /// Fill `out` with the current state, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();

        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.display.clear();
        out.display.extend_from_slice(self.board.cells());

        if self.phase == Phase::GameOver {
            out.active = None;
        } else {
            let cells = self.active.cells();
            let width = self.board.width() as usize;
            for &(x, y) in &cells {
                if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < out.height as usize {
                    out.display[y as usize * width + x as usize] = Some(self.active.kind);
                }
            }
            out.active = Some(ActiveSnapshot {
                kind: self.active.kind,
                x: self.active.x,
                y: self.active.y,
                cells,
            });
        }

        out.score = self.score.current();
        out.best_score = self.score.best();
        out.lines = self.lines;
        out.paused = self.paused;
        out.game_over = self.phase == Phase::GameOver;
        out.drop_interval_ms = self.drop_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        let config = EngineConfig::default();
        let board = Board::new(config.width, config.height);
        Self::from_validated(config, board, None, 0)
    }
}
