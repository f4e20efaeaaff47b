use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;

use crate::{
    config::StartingRanks,
    error::MoveError,
    moves::{Move, MoveType, PlayedMove, ValidatedMove},
    piece::Color,
    position::{File, Position},
};

/// Flattened board handed to move selectors: files A to H, ranks 1 to 8
/// within each file, `+1` white, `-1` black, `0` empty.
pub type BoardEncoding = [i8; 64];

// Every board, clones included, gets its own id for the move tokens it issues.
static NEXT_BOARD_ID: AtomicU64 = AtomicU64::new(0);

fn next_board_id() -> u64 {
    NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug)]
pub struct Board {
    pieces: HashMap<Position, Color>,
    starting_ranks: StartingRanks,
    id: u64,
    generation: u64, // Bumped on every change to `pieces`
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            pieces: self.pieces.clone(),
            starting_ranks: self.starting_ranks,
            id: next_board_id(),
            generation: 0,
        }
    }
}

// Two boards are equal when their layouts are; identity is not compared.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces && self.starting_ranks == other.starting_ranks
    }
}

impl Eq for Board {}

impl Board {
    pub fn new(white_gap: File, black_gap: File) -> Self {
        Self::with_starting_ranks(white_gap, black_gap, StartingRanks::default())
    }

    pub fn with_starting_ranks(
        white_gap: File,
        black_gap: File,
        starting_ranks: StartingRanks,
    ) -> Self {
        let mut board = Self::empty(starting_ranks);
        board.setup_initial_position(white_gap, black_gap);
        board
    }

    pub fn empty(starting_ranks: StartingRanks) -> Self {
        Self {
            pieces: HashMap::new(),
            starting_ranks,
            id: next_board_id(),
            generation: 0,
        }
    }

    fn setup_initial_position(&mut self, white_gap: File, black_gap: File) {
        for file in File::ALL {
            if file != white_gap {
                self.pieces
                    .insert(Position::new(file, self.starting_ranks.white), Color::White);
            }
            if file != black_gap {
                self.pieces
                    .insert(Position::new(file, self.starting_ranks.black), Color::Black);
            }
        }
    }

    pub fn starting_ranks(&self) -> StartingRanks {
        self.starting_ranks
    }

    pub fn piece_at(&self, pos: Position) -> Option<Color> {
        self.pieces.get(&pos).copied()
    }

    // Sorted so callers iterating over a side see the same order every run.
    pub fn positions_of(&self, color: Color) -> Vec<Position> {
        let mut positions: Vec<Position> = self
            .pieces
            .iter()
            .filter(|&(_, &piece)| piece == color)
            .map(|(&pos, _)| pos)
            .collect();
        positions.sort();
        positions
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces.values().filter(|&&piece| piece == color).count()
    }

    pub fn valid_moves(
        &self,
        pos: Position,
        last_move: Option<&Move>,
    ) -> Vec<(Position, MoveType)> {
        let mut moves = Vec::new();
        let Some(color) = self.piece_at(pos) else {
            return moves;
        };

        if let Some(one) = pos.advanced(color).filter(|&sq| self.is_empty(sq)) {
            moves.push((one, MoveType::Peaceful));

            if pos.rank == self.starting_ranks.of(color) {
                if let Some(two) = one.advanced(color).filter(|&sq| self.is_empty(sq)) {
                    moves.push((two, MoveType::Peaceful));
                }
            }
        }

        for target in pos.diagonals(color) {
            if self.piece_at(target) == Some(color.opposite()) {
                moves.push((target, MoveType::Capture));
            }
        }

        if let Some(target) = last_move.and_then(|last| self.en_passant_target(pos, color, last)) {
            moves.push((target, MoveType::EnPassant));
        }

        trace!("{} pawn on {} has {} moves", color, pos, moves.len());
        moves
    }

    /// Every legal move for `side`, pawns taken in `positions_of` order.
    pub fn legal_moves(&self, side: Color, last_move: Option<&Move>) -> Vec<Move> {
        self.positions_of(side)
            .into_iter()
            .flat_map(|from| {
                self.valid_moves(from, last_move)
                    .into_iter()
                    .map(move |(to, move_type)| Move::new(side, from, to, move_type))
            })
            .collect()
    }

    // Square a pawn of `color` on `pos` lands on when taking the pawn that just
    // double-stepped past it.
    fn en_passant_target(&self, pos: Position, color: Color, last_move: &Move) -> Option<Position> {
        let enemy = color.opposite();
        if last_move.piece != enemy
            || !last_move.is_double_step(&self.starting_ranks)
            || last_move.to.rank != pos.rank
            || !last_move.to.file.is_adjacent(pos.file)
            || self.piece_at(last_move.to) != Some(enemy)
        {
            return None;
        }

        let target = Position::new(last_move.to.file, pos.rank.advance(color)?);
        self.is_empty(target).then_some(target)
    }

    pub fn is_valid_move(&self, mv: &Move, last_move: Option<&Move>) -> bool {
        self.validate(mv, last_move).is_some()
    }

    pub fn validate(&self, mv: &Move, last_move: Option<&Move>) -> Option<ValidatedMove> {
        self.check(mv, last_move).ok()
    }

    /// Like [`Board::validate`], but says why a move was turned down.
    pub fn check(&self, mv: &Move, last_move: Option<&Move>) -> Result<ValidatedMove, MoveError> {
        if self.piece_at(mv.from) != Some(mv.piece) {
            return Err(MoveError::EmptySquare {
                position: mv.from,
                expected: mv.piece,
            });
        }

        self.valid_moves(mv.from, last_move)
            .into_iter()
            .any(|(to, move_type)| to == mv.to && move_type == mv.move_type)
            .then(|| ValidatedMove::new(*mv, self.id, self.generation))
            .ok_or(MoveError::Illegal(*mv))
    }

    /// Plays a move this board checked and reports which pawn, if any, it
    /// took.
    ///
    /// Fails with [`MoveError::Stale`] and leaves the board alone when the
    /// token came from another board, including a clone of this one, or when
    /// this board has changed since the token was issued.
    pub fn apply(&mut self, validated: ValidatedMove) -> Result<PlayedMove, MoveError> {
        let mv = validated.get();
        if !validated.issued_by(self.id, self.generation) {
            return Err(MoveError::Stale(mv));
        }

        let captured = mv
            .capture_square()
            .and_then(|square| self.pieces.remove(&square));
        self.pieces.remove(&mv.from);
        self.pieces.insert(mv.to, mv.piece);
        self.generation += 1;
        Ok(PlayedMove { mv, captured })
    }

    /// Takes back the most recent `apply`, putting any captured pawn back on
    /// the square it was taken from. Reverting anything other than the latest
    /// played move leaves the board in an undefined layout.
    pub fn revert(&mut self, played: &PlayedMove) {
        let mv = played.mv;
        self.pieces.remove(&mv.to);
        self.pieces.insert(mv.from, mv.piece);
        if let (Some(color), Some(square)) = (played.captured, mv.capture_square()) {
            self.pieces.insert(square, color);
        }
        self.generation += 1;
    }

    /// Puts a pawn on `pos`, replacing whatever was there.
    pub fn add(&mut self, pos: Position, piece: Color) -> &mut Self {
        self.pieces.insert(pos, piece);
        self.generation += 1;
        self
    }

    pub fn remove(&mut self, pos: Position) -> Option<Color> {
        self.generation += 1;
        self.pieces.remove(&pos)
    }

    pub fn encode(&self) -> BoardEncoding {
        let mut encoding = [0; 64];
        for (pos, color) in &self.pieces {
            encoding[pos.index()] = color.sign();
        }
        encoding
    }

    pub fn from_encoding(encoding: &BoardEncoding, starting_ranks: StartingRanks) -> Self {
        let mut board = Self::empty(starting_ranks);
        for (pos, &value) in Position::all().zip(encoding.iter()) {
            if let Some(color) = Color::from_sign(value) {
                board.pieces.insert(pos, color);
            }
        }
        board
    }

    fn is_empty(&self, pos: Position) -> bool {
        !self.pieces.contains_key(&pos)
    }
}
