use std::fmt;

use crate::{config::StartingRanks, piece::Color, position::Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Peaceful,
    Capture,
    EnPassant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Color,
    pub from: Position,
    pub to: Position,
    pub move_type: MoveType,
}

impl Move {
    pub fn new(piece: Color, from: Position, to: Position, move_type: MoveType) -> Self {
        Self {
            piece,
            from,
            to,
            move_type,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.move_type != MoveType::Peaceful
    }

    pub fn is_double_step(&self, starting_ranks: &StartingRanks) -> bool {
        let start = starting_ranks.of(self.piece);
        self.move_type == MoveType::Peaceful
            && self.from.file == self.to.file
            && self.from.rank == start
            && start
                .advance(self.piece)
                .and_then(|rank| rank.advance(self.piece))
                == Some(self.to.rank)
    }

    /// Square of the pawn this move takes, if any.
    ///
    /// For en passant that is the square behind `to`, seen from the mover.
    pub fn capture_square(&self) -> Option<Position> {
        match self.move_type {
            MoveType::Peaceful => None,
            MoveType::Capture => Some(self.to),
            MoveType::EnPassant => self.to.advanced(self.piece.opposite()),
        }
    }
}

// Peaceful moves print as their destination ("C4"), captures as "CxD5".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.move_type {
            MoveType::Peaceful => write!(f, "{}", self.to),
            MoveType::Capture | MoveType::EnPassant => write!(f, "{}x{}", self.from.file, self.to),
        }
    }
}

/// A move some board has checked against its layout at that moment.
///
/// The token remembers which board issued it and how many times that board
/// had been changed. [`Board::apply`](crate::Board::apply) refuses a token
/// from another board, or one issued before the board last changed, so each
/// token plays at most once and only on the layout it was checked against.
/// Tokens are neither `Clone` nor `Copy`: applying one consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidatedMove {
    mv: Move,
    board: u64,
    generation: u64,
}

impl ValidatedMove {
    pub(crate) fn new(mv: Move, board: u64, generation: u64) -> Self {
        Self {
            mv,
            board,
            generation,
        }
    }

    pub(crate) fn issued_by(&self, board: u64, generation: u64) -> bool {
        self.board == board && self.generation == generation
    }

    pub fn get(&self) -> Move {
        self.mv
    }
}

/// History entry: the move plus whatever it took off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    pub captured: Option<Color>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn canonical_text() {
        let push = Move::new(Color::White, pos("C2"), pos("C4"), MoveType::Peaceful);
        let take = Move::new(Color::White, pos("C5"), pos("D6"), MoveType::EnPassant);
        assert_eq!(push.to_string(), "C4");
        assert_eq!(take.to_string(), "CxD6");
    }

    #[test]
    fn double_step_detection() {
        let ranks = StartingRanks::default();
        let white = Move::new(Color::White, pos("C2"), pos("C4"), MoveType::Peaceful);
        let black = Move::new(Color::Black, pos("D7"), pos("D5"), MoveType::Peaceful);
        let single = Move::new(Color::Black, pos("D7"), pos("D6"), MoveType::Peaceful);
        let late = Move::new(Color::White, pos("C3"), pos("C5"), MoveType::Peaceful);
        assert!(white.is_double_step(&ranks));
        assert!(black.is_double_step(&ranks));
        assert!(!single.is_double_step(&ranks));
        assert!(!late.is_double_step(&ranks));
    }

    #[test]
    fn en_passant_takes_behind_the_destination() {
        let white = Move::new(Color::White, pos("C5"), pos("D6"), MoveType::EnPassant);
        let black = Move::new(Color::Black, pos("E4"), pos("F3"), MoveType::EnPassant);
        assert_eq!(white.capture_square(), Some(pos("D5")));
        assert_eq!(black.capture_square(), Some(pos("F4")));
    }
}
