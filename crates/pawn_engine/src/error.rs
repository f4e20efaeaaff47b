use pawn_core::{Color, Move, MoveError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("matrix shapes do not line up: {left:?} x {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("network maps {found_inputs} inputs to {found_outputs} outputs, expected 64 to 64")]
    NetworkShape {
        found_inputs: usize,
        found_outputs: usize,
    },
    #[error("{0} had legal moves but chose none")]
    NoMoveChosen(Color),
    #[error("chosen move {mv} was rejected: {source}")]
    Rejected {
        mv: Move,
        #[source]
        source: MoveError,
    },
}
