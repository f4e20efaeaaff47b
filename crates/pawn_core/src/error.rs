use thiserror::Error;

use crate::{moves::Move, piece::Color, position::Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("expected a file letter and a rank digit, got {0:?}")]
    BadLength(String),
    #[error("unexpected file char {0:?}")]
    UnexpectedFile(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRank(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongSide { expected: Color, found: Color },
    #[error("no {expected} pawn on {position}")]
    EmptySquare { position: Position, expected: Color },
    #[error("illegal move {0}")]
    Illegal(Move),
    #[error("{0} was checked against a different board layout")]
    Stale(Move),
}
