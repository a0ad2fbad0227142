//! Connect Four: a two-player game-state engine.
//!
//! This crate provides the board, turn sequencing and win/draw detection for
//! Connect Four (7 columns × 6 rows, four in a row wins), plus a small text
//! console front end.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and display characters
//! - [`board`] - Grid, gravity placement and win/full queries
//! - [`player`] - Player identity (name and token)
//! - [`source`] - Move sources: console prompt, random choice, closures
//! - [`engine`] - Turn state machine and game results
//! - [`console`] - Interactive text session built on the engine
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use connect_four::engine::{GameConfig, GameEngine, Seat};
//! use connect_four::source::RandomSource;
//!
//! let config = GameConfig { seed: Some(7), ..GameConfig::default() };
//! let mut engine = GameEngine::new(
//!     config,
//!     Seat::new("Red", RandomSource),
//!     Seat::new("Yellow", RandomSource),
//! );
//!
//! let result = engine.play().unwrap();
//! println!("{}", engine.board());
//! println!("{result}");
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod engine;
pub mod error;
pub mod player;
pub mod source;
