use pawn_core::{BoardEncoding, Move, MoveSelector};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

// Picks uniformly among the legal moves.
pub struct RandomMover {
    rng: StdRng,
}

impl RandomMover {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Default for RandomMover {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MoveSelector for RandomMover {
    fn choose_move(&mut self, _encoding: &BoardEncoding, legal_moves: &[Move]) -> Option<Move> {
        legal_moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pawn_core::{Color, GameConfig};

    #[test]
    fn always_picks_a_legal_move() {
        let game = GameConfig::default().new_game();
        let legal = game.legal_moves(Color::White);
        let mut mover = RandomMover::new(Some(7));
        for _ in 0..50 {
            let mv = mover.choose_move(&game.board().encode(), &legal).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let game = GameConfig::default().new_game();
        let legal = game.legal_moves(Color::White);
        let encoding = game.board().encode();
        let mut a = RandomMover::new(Some(42));
        let mut b = RandomMover::new(Some(42));
        for _ in 0..10 {
            assert_eq!(a.choose_move(&encoding, &legal), b.choose_move(&encoding, &legal));
        }
    }

    #[test]
    fn nothing_to_choose_from() {
        let mut mover = RandomMover::new(Some(1));
        assert_eq!(mover.choose_move(&[0; 64], &[]), None);
    }
}
