//! Move sources: where the active player's column comes from.
//!
//! The engine never decides a column itself. Each seat owns a [`MoveSource`]
//! which is handed the current board (read-only) and the engine's random
//! number generator, and answers with a 0-based column index.
//!
//! Two implementations ship with the crate:
//! - [`PromptSource`] reads 1-based column numbers from a [`Console`]
//! - [`RandomSource`] picks uniformly among the columns that are not full
//!
//! Any `FnMut(&Board) -> usize` closure is also a move source. Its answers are
//! not trusted: the engine validates every column it receives.

use fastrand::Rng;
use tracing::trace;

use crate::board::Board;
use crate::console::Console;
use crate::constants::COLS;
use crate::error::SourceError;

/// Supplies a column for the active player.
pub trait MoveSource {
    /// Choose a column in `0..COLS`. May block until one is available.
    fn choose_column(&mut self, board: &Board, rng: &mut Rng) -> Result<usize, SourceError>;

    /// True for sources that pick without a human in the loop.
    fn is_automated(&self) -> bool {
        false
    }
}

impl<F> MoveSource for F
where
    F: FnMut(&Board) -> usize,
{
    fn choose_column(&mut self, board: &Board, _rng: &mut Rng) -> Result<usize, SourceError> {
        Ok(self(board))
    }
}

/// Uniform random choice over the columns that can still take a token.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSource;

impl MoveSource for RandomSource {
    fn choose_column(&mut self, board: &Board, rng: &mut Rng) -> Result<usize, SourceError> {
        if board.is_full() {
            return Err(SourceError::NoLegalColumn);
        }
        loop {
            let col = rng.usize(0..COLS);
            if !board.is_column_full(col) {
                trace!(col, "random column drawn");
                return Ok(col);
            }
            trace!(col, "random column full, drawing again");
        }
    }

    fn is_automated(&self) -> bool {
        true
    }
}

/// Interactive source: prompts on the console until a legal column is typed.
pub struct PromptSource {
    console: Console,
}

impl PromptSource {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl MoveSource for PromptSource {
    fn choose_column(&mut self, board: &Board, _rng: &mut Rng) -> Result<usize, SourceError> {
        loop {
            let prompt = format!("Enter column (1-{COLS}): ");
            let Some(line) = self.console.prompt(&prompt)? else {
                return Err(SourceError::InputClosed);
            };
            match parse_column(&line) {
                Some(col) if board.is_column_full(col) => self
                    .console
                    .write_line("This column is already full. Please choose another column.")?,
                Some(col) => return Ok(col),
                None => self
                    .console
                    .write_line("Invalid column. Please choose a valid column.")?,
            }
        }
    }
}

/// Parse a 1-based column number typed by a player into a 0-based index.
///
/// Returns `None` for anything that is not an integer in `1..=COLS`.
pub fn parse_column(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=COLS).contains(&n) => Some(n - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Token;
    use crate::constants::ROWS;
    use std::io::Cursor;

    fn console_with(input: &str) -> Console {
        Console::new(Cursor::new(input.to_string()), std::io::sink())
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("1"), Some(0));
        assert_eq!(parse_column(" 7\n"), Some(6));
        assert_eq!(parse_column("0"), None);
        assert_eq!(parse_column("8"), None);
        assert_eq!(parse_column("-3"), None);
        assert_eq!(parse_column("three"), None);
        assert_eq!(parse_column(""), None);
    }

    #[test]
    fn test_random_source_avoids_full_columns() {
        let mut board = Board::new();
        for col in 0..COLS - 1 {
            for _ in 0..ROWS {
                board.place(col, Token::A).unwrap();
            }
        }
        let mut rng = Rng::with_seed(7);
        let mut source = RandomSource;
        for _ in 0..50 {
            assert_eq!(source.choose_column(&board, &mut rng).unwrap(), COLS - 1);
        }
    }

    #[test]
    fn test_random_source_on_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.place(col, Token::B).unwrap();
            }
        }
        let mut rng = Rng::with_seed(1);
        assert!(matches!(
            RandomSource.choose_column(&board, &mut rng),
            Err(SourceError::NoLegalColumn)
        ));
    }

    #[test]
    fn test_random_source_is_reproducible() {
        let board = Board::new();
        let draws = |seed| {
            let mut rng = Rng::with_seed(seed);
            (0..20)
                .map(|_| RandomSource.choose_column(&board, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draws(42), draws(42));
    }

    #[test]
    fn test_prompt_source_retries_until_legal() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.place(2, Token::A).unwrap();
        }
        let mut source = PromptSource::new(console_with("abc\n9\n3\n4\n"));
        let mut rng = Rng::with_seed(0);
        assert_eq!(source.choose_column(&board, &mut rng).unwrap(), 3);
    }

    #[test]
    fn test_prompt_source_input_closed() {
        let board = Board::new();
        let mut source = PromptSource::new(console_with("x\n"));
        let mut rng = Rng::with_seed(0);
        assert!(matches!(
            source.choose_column(&board, &mut rng),
            Err(SourceError::InputClosed)
        ));
    }

    #[test]
    fn test_closure_source() {
        let board = Board::new();
        let mut rng = Rng::with_seed(0);
        let mut source = |b: &Board| b.token_count() + 5;
        assert_eq!(source.choose_column(&board, &mut rng).unwrap(), 5);
        assert!(!source.is_automated());
    }
}
