use log::info;
use pawn_core::{Board, Color, GameConfig, Move, Players};

use crate::error::EngineError;

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub moves: Vec<Move>,
    pub winner: Option<Color>,
    pub final_board: Board,
    // False when the ply limit stopped the match first.
    pub completed: bool,
}

/// Plays one game from `config` between `players` until it is over or
/// `max_plies` moves have been made.
pub fn play_match(
    config: &GameConfig,
    players: &mut Players,
    max_plies: usize,
) -> Result<MatchResult, EngineError> {
    let mut game = config.new_game();
    info!(
        "starting match: {} (white) vs {} (black)",
        players.get(Color::White).name(),
        players.get(Color::Black).name()
    );

    while !game.is_over() && game.history().len() < max_plies {
        let side = game.side_to_move();
        let legal_moves = game.legal_moves(side);
        let encoding = game.board().encode();

        let mv = players
            .get_mut(side)
            .choose_move(&encoding, &legal_moves)
            .ok_or(EngineError::NoMoveChosen(side))?;
        game.try_apply_move(mv)
            .map_err(|source| EngineError::Rejected { mv, source })?;
    }

    let completed = game.is_over();
    let winner = game.winner();
    match winner {
        Some(color) => info!(
            "{} wins after {} plies",
            players.get(color).name(),
            game.history().len()
        ),
        None if completed => info!("no winner after {} plies", game.history().len()),
        None => info!("stopped at the {} ply limit", max_plies),
    }

    Ok(MatchResult {
        moves: game.history().iter().map(|played| played.mv).collect(),
        winner,
        final_board: game.board().clone(),
        completed,
    })
}
