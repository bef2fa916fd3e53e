use pleco::{BitMove, Board};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("illegal or unknown move: {0}")]
    IllegalMove(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

pub fn startpos() -> Board {
    Board::start_pos()
}

pub fn from_fen(fen: &str) -> Result<Board, BoardError> {
    Board::from_fen(fen).map_err(|e| BoardError::InvalidFen(format!("{e:?}")))
}

/// Locate a legal move by its UCI string.
pub fn find_move(board: &Board, uci: &str) -> Option<BitMove> {
    board.generate_moves().iter().copied().find(|m| m.to_string() == uci)
}

pub fn apply_uci(board: &mut Board, uci: &str) -> Result<(), BoardError> {
    match find_move(board, uci) {
        Some(mv) => {
            board.apply_move(mv);
            Ok(())
        }
        None => Err(BoardError::IllegalMove(uci.to_string())),
    }
}

/// Game-over check the caller performs before invoking search; the search
/// core itself does not validate it.
pub fn status(board: &Board) -> GameStatus {
    if board.checkmate() {
        GameStatus::Checkmate
    } else if board.stalemate() {
        GameStatus::Stalemate
    } else {
        GameStatus::Ongoing
    }
}
