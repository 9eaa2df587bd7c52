pub mod board;
pub mod lexicon;
pub mod solver;

pub use board::{Board, Position};
pub use lexicon::Lexicon;
pub use solver::Solver;

/// Side length of the (square) board.
pub const BOARD_SIZE: usize = 4;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("board requires exactly {expected} tiles, got {found}")]
    InvalidBoard { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed board file: {0}")]
    Json(#[from] serde_json::Error),
}
