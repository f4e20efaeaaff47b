use pawn_core::{Board, Color, Position, Rank};

// Scores are in centipawns (100 = 1 pawn)
const PAWN_VALUE: i32 = 100;
pub const FAR_RANK_SCORE: i32 = 10_000;     // A pawn on its far rank ends the race
const PASSED_PAWN_BONUS: i32 = 40;          // Nothing left that can stop or take it
const PASSED_PAWN_STEP_BONUS: i32 = 15;     // Extra per rank travelled for passed pawns

// Bonus indexed by ranks travelled from the starting rank:
// - Early pushes are worth little
// - Pawns one or two steps from the far rank are worth a lot
const ADVANCE_TABLE: [i32; 8] = [0, 5, 10, 20, 35, 60, 100, 0];

// Scores the position from `perspective`'s point of view: positive is good for it.
pub fn evaluate_position(board: &Board, perspective: Color) -> i32 {
    Color::BOTH
        .into_iter()
        .map(|color| {
            let side = side_score(board, color);
            if color == perspective {
                side
            } else {
                -side
            }
        })
        .sum()
}

fn side_score(board: &Board, color: Color) -> i32 {
    let start = board.starting_ranks().of(color);
    board
        .positions_of(color)
        .into_iter()
        .map(|pos| {
            if pos.rank == Rank::last_for(color) {
                return FAR_RANK_SCORE;
            }

            let travelled = pos.rank.index().abs_diff(start.index());
            let mut value = PAWN_VALUE + ADVANCE_TABLE[travelled.min(7)];
            if is_passed(board, pos, color) {
                value += PASSED_PAWN_BONUS + PASSED_PAWN_STEP_BONUS * travelled as i32;
            }
            value
        })
        .sum()
}

// A pawn is passed when no enemy pawn stands ahead of it on its own or a neighbouring file.
pub fn is_passed(board: &Board, pos: Position, color: Color) -> bool {
    let enemy = color.opposite();
    let files = std::iter::once(pos.file).chain(pos.file.neighbours());
    for file in files {
        let mut rank = pos.rank.advance(color);
        while let Some(r) = rank {
            if board.piece_at(Position::new(file, r)) == Some(enemy) {
                return false;
            }
            rank = r.advance(color);
        }
    }
    true
}
