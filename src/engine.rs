//! Turn sequencing and game termination.
//!
//! The engine owns the board, the two seats and the random number generator.
//! Each call to [`GameEngine::step`] asks the active seat's move source for a
//! column, validates it, places the token and evaluates the board:
//!
//! - a rejected column leaves the same player to move
//! - a win is checked before a draw, so the last token filling the board can still win
//! - otherwise the turn passes to the other seat
//!
//! The engine performs no I/O; presentation is left to the caller through
//! [`Turn`] reports, [`GameResult`] and the board's read-only accessors.

use std::fmt;

use fastrand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Token};
use crate::constants::{COLS, MAX_MOVES};
use crate::error::{EngineError, MoveError};
use crate::player::Player;
use crate::source::MoveSource;

/// Who moves first in each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FirstPlayer {
    /// The first seat always opens.
    #[default]
    Fixed,
    /// The opening seat is drawn uniformly at the start of every game.
    Random,
}

/// Engine configuration.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    /// Seed for the engine's random number generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// A seat to be filled: a player name and where their moves come from.
pub struct Seat {
    name: String,
    source: Box<dyn MoveSource>,
}

impl Seat {
    pub fn new(name: impl Into<String>, source: impl MoveSource + 'static) -> Self {
        Self {
            name: name.into(),
            source: Box::new(source),
        }
    }
}

/// Engine state. Seats are indexed 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove(usize),
    Won(usize),
    Draw,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::AwaitingMove(_))
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn winner(&self) -> Option<&Player> {
        match self {
            GameResult::Win(player) => Some(player),
            GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win(player) => write!(f, "{} wins!", player.name()),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

/// What happened during one move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The token landed at `(row, column)`.
    Placed {
        seat: usize,
        column: usize,
        row: usize,
    },
    /// The column was refused; `seat` is still to move.
    Rejected { seat: usize, error: MoveError },
}

/// Drives one game at a time between two seats.
pub struct GameEngine {
    players: [Player; 2],
    sources: [Box<dyn MoveSource>; 2],
    board: Board,
    state: GameState,
    moves: Vec<usize>,
    config: GameConfig,
    rng: Rng,
}

impl GameEngine {
    /// Seat the two players and set up the first game.
    ///
    /// The first seat plays token A, the second token B.
    pub fn new(config: GameConfig, first: Seat, second: Seat) -> Self {
        let rng = match config.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        let mut engine = Self {
            players: [
                Player::new(first.name, Token::A),
                Player::new(second.name, Token::B),
            ],
            sources: [first.source, second.source],
            board: Board::new(),
            state: GameState::Draw,
            moves: Vec::with_capacity(MAX_MOVES),
            config,
            rng,
        };
        engine.reset();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Columns played so far this game, in order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Seat index of the player to move, if the game is still running.
    pub fn active_seat(&self) -> Option<usize> {
        match self.state {
            GameState::AwaitingMove(seat) => Some(seat),
            _ => None,
        }
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.active_seat().map(|seat| &self.players[seat])
    }

    /// Whether the given seat is driven by an automated move source.
    pub fn is_automated(&self, seat: usize) -> bool {
        self.sources[seat].is_automated()
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            GameState::AwaitingMove(_) => None,
            GameState::Won(seat) => Some(GameResult::Win(self.players[seat].clone())),
            GameState::Draw => Some(GameResult::Draw),
        }
    }

    /// Ask the active seat for a column and apply it.
    pub fn step(&mut self) -> Result<Turn, EngineError> {
        let GameState::AwaitingMove(seat) = self.state else {
            return Err(EngineError::GameOver);
        };
        let column = self.sources[seat].choose_column(&self.board, &mut self.rng)?;
        self.apply(column)
    }

    /// Apply a column for the active seat.
    ///
    /// Out-of-range and full columns come back as [`Turn::Rejected`] without
    /// touching the board or the turn.
    pub fn apply(&mut self, column: usize) -> Result<Turn, EngineError> {
        let GameState::AwaitingMove(seat) = self.state else {
            return Err(EngineError::GameOver);
        };
        let player = &self.players[seat];

        let placed = if column >= COLS {
            Err(MoveError::OutOfRangeColumn(column))
        } else if self.board.is_column_full(column) {
            Err(MoveError::ColumnFull(column))
        } else {
            // Re-checked inside `place` as well.
            self.board.place(column, player.token())
        };

        let row = match placed {
            Ok(row) => row,
            Err(error) => {
                debug!(player = player.name(), %error, "move rejected");
                return Ok(Turn::Rejected { seat, error });
            }
        };
        self.moves.push(column);
        debug!(player = player.name(), column, row, "token placed");

        self.state = if self.board.check_win(player.token()) {
            info!(winner = player.name(), moves = self.moves.len(), "game won");
            GameState::Won(seat)
        } else if self.board.is_full() {
            info!(moves = self.moves.len(), "game drawn");
            GameState::Draw
        } else {
            GameState::AwaitingMove(1 - seat)
        };
        Ok(Turn::Placed { seat, column, row })
    }

    /// Play until the game ends.
    pub fn play(&mut self) -> Result<GameResult, EngineError> {
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.step()?;
        }
    }

    /// Start a new game with the same players and move sources.
    pub fn restart(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.moves.clear();
        let first = match self.config.first_player {
            FirstPlayer::Fixed => 0,
            FirstPlayer::Random => self.rng.usize(0..2),
        };
        self.state = GameState::AwaitingMove(first);
        info!(first = self.players[first].name(), "game started");
    }
}
