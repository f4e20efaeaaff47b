// Fixed-depth alpha-beta search over copies of the board, root moves scored in parallel
use log::debug;
use pawn_core::{
    Board, BoardEncoding, Color, Move, MoveSelector, MoveType, Position, Rank, StartingRanks,
    WinCondition,
};
use rayon::prelude::*;

use crate::evaluation::{evaluate_position, FAR_RANK_SCORE};

// Search parameters
const MIN_DEPTH: u8 = 1;                        // Always look at the replies to our move
const MAX_DEPTH: u8 = 6;                        // Deeper gets slow without move ordering
const DEFAULT_DEPTH: u8 = 4;
const WIN_SCORE: i32 = FAR_RANK_SCORE * 10;     // Beats any static evaluation
const INFINITY: i32 = WIN_SCORE + 1_000;        // Bounds the initial window; safe to negate

pub struct SearchMover {
    depth: u8,
    starting_ranks: StartingRanks,
    win_condition: WinCondition,
}

impl SearchMover {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
            starting_ranks: StartingRanks::default(),
            win_condition: WinCondition::default(),
        }
    }

    pub fn with_starting_ranks(mut self, starting_ranks: StartingRanks) -> Self {
        self.starting_ranks = starting_ranks;
        self
    }

    pub fn with_win_condition(mut self, win_condition: WinCondition) -> Self {
        self.win_condition = win_condition;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Default for SearchMover {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MoveSelector for SearchMover {
    fn choose_move(&mut self, encoding: &BoardEncoding, legal_moves: &[Move]) -> Option<Move> {
        let side = legal_moves.first()?.piece;
        let board = Board::from_encoding(encoding, self.starting_ranks);
        search_best_move(&board, side, legal_moves, self.depth, self.win_condition)
            .map(|(mv, _)| mv)
    }

    fn name(&self) -> &str {
        "search"
    }
}

/// Scores every move in `legal_moves` for `side` and returns the best one with
/// its score. Ties go to the move listed first.
///
/// Each root move is searched on its own copy of `board`.
pub fn search_best_move(
    board: &Board,
    side: Color,
    legal_moves: &[Move],
    depth: u8,
    win_condition: WinCondition,
) -> Option<(Move, i32)> {
    let scored: Vec<(Move, i32)> = legal_moves
        .par_iter()
        .filter_map(|mv| {
            // The encoding carries no history, so an en passant root move needs
            // the double step that allowed it.
            let last_move = implied_last_move(mv, board.starting_ranks());
            let mut child = board.clone();
            let validated = child.validate(mv, last_move.as_ref())?;
            child.apply(validated).ok()?;
            let score = -negamax(
                &mut child,
                side.opposite(),
                Some(mv),
                depth.saturating_sub(1),
                -INFINITY,
                INFINITY,
                win_condition,
            );
            Some((*mv, score))
        })
        .collect();

    let best = scored
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best });

    match best {
        Some((mv, score)) => debug!(
            "{} searched {} moves at depth {}: best {} ({})",
            side,
            legal_moves.len(),
            depth,
            mv,
            score
        ),
        None => debug!("{} has nothing to search", side),
    }
    best
}

fn negamax(
    board: &mut Board,
    side: Color,
    last_move: Option<&Move>,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    win_condition: WinCondition,
) -> i32 {
    // Quicker wins score higher, slower losses score less badly.
    let lost = -(WIN_SCORE + depth as i32);

    if win_condition.uses_far_rank() && reached_far_rank(board, side.opposite()) {
        return lost;
    }

    let moves = board.legal_moves(side, last_move);
    if moves.is_empty() {
        return if win_condition.uses_blocked() { lost } else { 0 };
    }

    if depth == 0 {
        return evaluate_position(board, side);
    }

    for mv in &moves {
        let Some(played) = board
            .validate(mv, last_move)
            .and_then(|validated| board.apply(validated).ok())
        else {
            continue;
        };
        let score = -negamax(
            board,
            side.opposite(),
            Some(mv),
            depth - 1,
            -beta,
            -alpha,
            win_condition,
        );
        board.revert(&played);

        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    alpha
}

fn reached_far_rank(board: &Board, color: Color) -> bool {
    board
        .positions_of(color)
        .iter()
        .any(|pos| pos.rank == Rank::last_for(color))
}

fn implied_last_move(mv: &Move, starting_ranks: StartingRanks) -> Option<Move> {
    if mv.move_type != MoveType::EnPassant {
        return None;
    }
    let victim = mv.capture_square()?;
    let enemy = mv.piece.opposite();
    Some(Move::new(
        enemy,
        Position::new(victim.file, starting_ranks.of(enemy)),
        victim,
        MoveType::Peaceful,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawn_core::{Game, GameConfig};

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn depth_is_clamped() {
        assert_eq!(SearchMover::new(0).depth(), MIN_DEPTH);
        assert_eq!(SearchMover::new(99).depth(), MAX_DEPTH);
    }

    #[test]
    fn pushes_to_the_far_rank() {
        let mut board = Board::empty(StartingRanks::default());
        board.add(pos("B7"), Color::White).add(pos("G6"), Color::Black);
        let game = Game::new(board, Color::White);
        let legal = game.legal_moves(Color::White);

        let mut mover = SearchMover::new(2);
        let mv = mover.choose_move(&game.board().encode(), &legal).unwrap();
        assert_eq!(mv.to, pos("B8"));
    }

    #[test]
    fn finds_the_en_passant_win() {
        let mut board = Board::empty(StartingRanks::default());
        board.add(pos("C5"), Color::White).add(pos("D7"), Color::Black);
        let mut game = Game::new(board, Color::Black);
        let double = game.parse_move("D5").unwrap();
        game.apply_move(double);

        let legal = game.legal_moves(Color::White);
        assert!(legal.iter().any(|mv| mv.move_type == MoveType::EnPassant));

        let mut mover = SearchMover::new(3);
        let mv = mover.choose_move(&game.board().encode(), &legal).unwrap();
        assert_eq!(mv.to_string(), "CxD6");
    }

    #[test]
    fn opening_choice_is_legal() {
        let game = GameConfig::default().new_game();
        let legal = game.legal_moves(Color::White);
        let mut mover = SearchMover::new(2);
        let mv = mover.choose_move(&game.board().encode(), &legal).unwrap();
        assert!(legal.contains(&mv));
    }

    #[test]
    fn no_moves_no_choice() {
        let board = Board::empty(StartingRanks::default());
        assert_eq!(search_best_move(&board, Color::White, &[], 2, WinCondition::default()), None);
    }
}
