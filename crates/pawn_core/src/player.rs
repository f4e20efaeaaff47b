use crate::{board::BoardEncoding, moves::Move, piece::Color};

/// Anything that can pick a move: a random mover, a search, a trained model.
///
/// Selectors only see the encoded board and the list of legal moves, never the
/// live [`Game`](crate::Game).
pub trait MoveSelector: Send {
    fn choose_move(&mut self, encoding: &BoardEncoding, legal_moves: &[Move]) -> Option<Move>;

    fn name(&self) -> &str;
}

pub struct Player {
    color: Color,
    selector: Box<dyn MoveSelector>,
}

impl Player {
    pub fn new(color: Color, selector: Box<dyn MoveSelector>) -> Self {
        Self { color, selector }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn name(&self) -> &str {
        self.selector.name()
    }

    pub fn choose_move(&mut self, encoding: &BoardEncoding, legal_moves: &[Move]) -> Option<Move> {
        self.selector.choose_move(encoding, legal_moves)
    }
}

// Owns both sides; a player's opponent is looked up here rather than stored on the player.
pub struct Players {
    white: Player,
    black: Player,
}

impl Players {
    pub fn new(white: Box<dyn MoveSelector>, black: Box<dyn MoveSelector>) -> Self {
        Self {
            white: Player::new(Color::White, white),
            black: Player::new(Color::Black, black),
        }
    }

    pub fn get(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn get_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn opponent(&self, player: &Player) -> &Player {
        self.get(player.color.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstMove;

    impl MoveSelector for FirstMove {
        fn choose_move(&mut self, _encoding: &BoardEncoding, legal_moves: &[Move]) -> Option<Move> {
            legal_moves.first().copied()
        }

        fn name(&self) -> &str {
            "first"
        }
    }

    #[test]
    fn opponents_point_at_each_other() {
        let players = Players::new(Box::new(FirstMove), Box::new(FirstMove));
        let white = players.get(Color::White);
        let black = players.opponent(white);
        assert_eq!(black.color(), Color::Black);
        assert_eq!(players.opponent(black).color(), Color::White);
        assert_eq!(white.name(), "first");
    }
}
