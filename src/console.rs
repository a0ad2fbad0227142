//! Text console front end.
//!
//! This is the glue between a terminal and the engine: mode menu, name entry,
//! board rendering, result messages and the restart prompt. The engine itself
//! never touches the console; human seats reach it through a
//! [`PromptSource`] that shares the same [`Console`] handle.
//!
//! ## Example
//!
//! ```ignore
//! use connect_four::console::{Console, Session};
//! use connect_four::engine::GameConfig;
//!
//! let mut session = Session::new(Console::stdio(), GameConfig::default());
//! let tally = session.run()?;
//! ```

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::io::{self, BufRead, BufReader, Write};
use std::rc::Rc;

use anyhow::Context;
use tracing::debug;

use crate::board::Token;
use crate::constants::AI_NAME;
use crate::engine::{GameConfig, GameEngine, GameResult, Seat, Turn};
use crate::error::{EngineError, MoveError, SourceError};
use crate::player::Player;
use crate::source::{PromptSource, RandomSource};

/// Shared line-oriented input and output.
///
/// Cloning the handle shares the underlying streams, so a session and the
/// prompt sources it creates read from the same input.
#[derive(Clone)]
pub struct Console {
    input: Rc<RefCell<Box<dyn BufRead>>>,
    output: Rc<RefCell<Box<dyn Write>>>,
}

impl Console {
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Rc::new(RefCell::new(Box::new(input))),
            output: Rc::new(RefCell::new(Box::new(output))),
        }
    }

    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// Read one line with the trailing newline removed. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than reported, so garbled input reaches
    /// the caller's own validation as an unparseable line.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.borrow_mut().read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Write `text` without a newline and flush.
    pub fn write(&self, text: impl Display) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        write!(out, "{text}")?;
        out.flush()
    }

    pub fn write_line(&self, text: impl Display) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        writeln!(out, "{text}")?;
        out.flush()
    }

    /// Write `prompt` and read the answer.
    pub fn prompt(&self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;
        self.read_line()
    }
}

/// Game mode chosen from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    PlayerVsPlayer,
    PlayerVsAi,
}

/// Results accumulated over the games of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Seated players, empty until a game has been set up.
    pub players: Vec<Player>,
    pub games: usize,
    /// Wins per token: index 0 for token A, 1 for token B.
    pub wins: [usize; 2],
    pub draws: usize,
}

impl Tally {
    pub fn new(players: &[Player; 2]) -> Self {
        Self {
            players: players.to_vec(),
            ..Self::default()
        }
    }

    pub fn record(&mut self, result: &GameResult) {
        self.games += 1;
        match result.winner().map(|p| p.token()) {
            Some(Token::A) => self.wins[0] += 1,
            Some(Token::B) => self.wins[1] += 1,
            None => self.draws += 1,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Games: {}", self.games)?;
        for (player, wins) in self.players.iter().zip(self.wins) {
            write!(f, "  {player}: {wins}")?;
        }
        write!(f, "  Draws: {}", self.draws)
    }
}

/// Interactive session: menu, names, games and restarts.
pub struct Session {
    console: Console,
    config: GameConfig,
}

impl Session {
    pub fn new(console: Console, config: GameConfig) -> Self {
        Self { console, config }
    }

    /// Run until the player declines a restart or input runs out.
    pub fn run(&mut self) -> anyhow::Result<Tally> {
        let mut tally = Tally::default();
        self.console.write_line("Welcome to Connect Four Game!")?;

        let Some(mode) = self.select_mode()? else {
            return Ok(tally);
        };
        let Some(mut engine) = self.seat_players(mode)? else {
            return Ok(tally);
        };
        tally = Tally::new(engine.players());

        loop {
            let Some(result) = self.play_game(&mut engine)? else {
                debug!("input closed during a game");
                break;
            };
            tally.record(&result);

            match self.console.prompt("Restart? Yes(1) No(0): ")? {
                Some(answer) if answer.trim() == "1" => engine.restart(),
                _ => break,
            }
        }
        Ok(tally)
    }

    fn select_mode(&self) -> anyhow::Result<Option<Mode>> {
        self.console.write_line("Select game mode:")?;
        self.console.write_line("1. Player vs Player")?;
        self.console.write_line("2. Player vs AI")?;
        self.console.write("Enter your choice (1 or 2): ")?;
        loop {
            let Some(line) = self.console.read_line()? else {
                return Ok(None);
            };
            match line.trim() {
                "1" => return Ok(Some(Mode::PlayerVsPlayer)),
                "2" => return Ok(Some(Mode::PlayerVsAi)),
                _ => self
                    .console
                    .write_line("Invalid choice. Please enter 1 or 2.")?,
            }
        }
    }

    fn seat_players(&self, mode: Mode) -> anyhow::Result<Option<GameEngine>> {
        let human = |prompt: &str| -> anyhow::Result<Option<Seat>> {
            let name = self.console.prompt(prompt).context("reading player name")?;
            Ok(name.map(|name| Seat::new(name.trim(), PromptSource::new(self.console.clone()))))
        };

        let seats = match mode {
            Mode::PlayerVsPlayer => {
                let Some(first) = human("Enter player 1 name: ")? else {
                    return Ok(None);
                };
                let Some(second) = human("Enter player 2 name: ")? else {
                    return Ok(None);
                };
                (first, second)
            }
            Mode::PlayerVsAi => {
                let Some(first) = human("Enter your name: ")? else {
                    return Ok(None);
                };
                (first, Seat::new(AI_NAME, RandomSource))
            }
        };
        Ok(Some(GameEngine::new(self.config.clone(), seats.0, seats.1)))
    }

    /// Play one game to the end. `None` if input closed before it finished.
    fn play_game(&self, engine: &mut GameEngine) -> anyhow::Result<Option<GameResult>> {
        loop {
            if let Some(result) = engine.result() {
                self.console.write(engine.board())?;
                match result {
                    GameResult::Win(_) => self
                        .console
                        .write_line(format!("It's Connect 4!  {result}"))?,
                    GameResult::Draw => self.console.write_line("It's a draw!")?,
                }
                return Ok(Some(result));
            }

            self.console.write(engine.board())?;
            if let Some(player) = engine.active_player() {
                self.console
                    .write_line(format!("Player {}'s turn.", player.name()))?;
            }

            match engine.step() {
                Ok(Turn::Placed { seat, column, .. }) if engine.is_automated(seat) => {
                    let name = engine.players()[seat].name();
                    self.console
                        .write_line(format!("{name} chooses column: {}", column + 1))?;
                }
                Ok(Turn::Placed { .. }) => {}
                Ok(Turn::Rejected { error, .. }) => self.console.write_line(match error {
                    MoveError::ColumnFull(_) => {
                        "This column is already full. Please choose another column."
                    }
                    MoveError::OutOfRangeColumn(_) => {
                        "Invalid column. Please choose a valid column."
                    }
                })?,
                Err(EngineError::Source(SourceError::InputClosed)) => return Ok(None),
                Err(err) => return Err(err).context("advancing the game"),
            }
        }
    }
}
