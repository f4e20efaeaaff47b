use log::{debug, info};

use crate::{
    board::Board,
    config::WinCondition,
    error::MoveError,
    moves::{Move, PlayedMove},
    piece::Color,
    position::Rank,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Active,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<PlayedMove>,
    win_condition: WinCondition,
}

impl Game {
    pub fn new(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::new(),
            win_condition: WinCondition::default(),
        }
    }

    pub fn with_win_condition(mut self, win_condition: WinCondition) -> Self {
        self.win_condition = win_condition;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn win_condition(&self) -> WinCondition {
        self.win_condition
    }

    /// Played moves, oldest first.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|played| &played.mv)
    }

    /// Plays `mv` if it is legal for the side to move; otherwise leaves the
    /// game exactly as it was. Compare `history().len()` to tell the two apart.
    pub fn apply_move(&mut self, mv: Move) -> &mut Self {
        if let Err(err) = self.try_apply_move(mv) {
            debug!("rejected {}: {}", mv, err);
        }
        self
    }

    pub fn try_apply_move(&mut self, mv: Move) -> Result<PlayedMove, MoveError> {
        if mv.piece != self.side_to_move {
            return Err(MoveError::WrongSide {
                expected: self.side_to_move,
                found: mv.piece,
            });
        }

        let validated = self.board.check(&mv, self.last_move())?;
        let played = self.board.apply(validated)?;
        self.side_to_move = self.side_to_move.opposite();
        self.history.push(played);
        debug!("{} played {}", mv.piece, mv);

        if self.state() == GameState::Finished {
            info!("{} has no legal moves after {} plies", self.side_to_move, self.history.len());
        }
        Ok(played)
    }

    /// Takes back the last move, restoring any pawn it captured. Does nothing
    /// on a fresh game.
    pub fn unapply_move(&mut self) -> &mut Self {
        if let Some(played) = self.history.pop() {
            self.board.revert(&played);
            self.side_to_move = played.mv.piece;
            debug!("took back {}", played.mv);
        }
        self
    }

    pub fn legal_moves(&self, side: Color) -> Vec<Move> {
        self.board.legal_moves(side, self.last_move())
    }

    pub fn state(&self) -> GameState {
        if self.legal_moves(self.side_to_move).is_empty() {
            GameState::Finished
        } else {
            GameState::Active
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == GameState::Finished
    }

    /// Whether play should stop: the side to move is stuck, or a pawn already
    /// reached its far rank under a far-rank win condition.
    pub fn is_over(&self) -> bool {
        self.is_finished()
            || (self.win_condition.uses_far_rank() && self.far_rank_winner().is_some())
    }

    pub fn winner(&self) -> Option<Color> {
        if self.win_condition.uses_far_rank() {
            if let Some(color) = self.far_rank_winner() {
                return Some(color);
            }
        }
        if self.win_condition.uses_blocked() && self.is_finished() {
            return Some(self.side_to_move.opposite());
        }
        None
    }

    // The side that just moved is checked first.
    fn far_rank_winner(&self) -> Option<Color> {
        [self.side_to_move.opposite(), self.side_to_move]
            .into_iter()
            .find(|&color| {
                self.board
                    .positions_of(color)
                    .iter()
                    .any(|pos| pos.rank == Rank::last_for(color))
            })
    }

    /// Finds the legal move for the side to move whose canonical text is `text`.
    pub fn parse_move(&self, text: &str) -> Option<Move> {
        self.legal_moves(self.side_to_move)
            .into_iter()
            .find(|mv| mv.to_string() == text)
    }
}
