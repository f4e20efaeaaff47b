use std::collections::HashSet;

use log::warn;
use pawn_core::{BoardEncoding, Move, MoveSelector};

const MAX_RETRIES: usize = 3;

// Wraps any selector and refuses to pass on a move that is not in the legal list.
pub struct PawnAI {
    selector: Box<dyn MoveSelector>,
    invalid_moves: HashSet<String>, // Rejected this turn, keyed by string representation
}

impl PawnAI {
    pub fn new(selector: Box<dyn MoveSelector>) -> Self {
        Self {
            selector,
            invalid_moves: HashSet::new(),
        }
    }

    fn move_to_string(mv: &Move) -> String {
        format!("{}{}-{}", mv.piece, mv.from, mv)
    }
}

impl MoveSelector for PawnAI {
    fn choose_move(&mut self, encoding: &BoardEncoding, legal_moves: &[Move]) -> Option<Move> {
        // A move rejected last turn may be legal now.
        self.invalid_moves.clear();
        let mut retries = 0;

        while retries < MAX_RETRIES {
            let Some(mv) = self.selector.choose_move(encoding, legal_moves) else {
                break;
            };

            // Skip moves we know are invalid
            let move_str = Self::move_to_string(&mv);
            if self.invalid_moves.contains(&move_str) {
                retries += 1;
                continue;
            }

            if legal_moves.contains(&mv) {
                return Some(mv);
            }

            warn!("{} chose {} which is not legal here", self.selector.name(), mv);
            self.invalid_moves.insert(move_str);
            retries += 1;
        }

        // Out of retries: only illegal moves were rejected, so any legal one will do
        legal_moves.first().copied()
    }

    fn name(&self) -> &str {
        self.selector.name()
    }
}
