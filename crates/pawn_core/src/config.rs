use crate::{
    board::Board,
    game::Game,
    piece::Color,
    position::{File, Rank},
};

// Rank each side's pawns start on, and the only rank a double step may begin from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingRanks {
    pub white: Rank,
    pub black: Rank,
}

impl StartingRanks {
    pub fn of(&self, color: Color) -> Rank {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

impl Default for StartingRanks {
    fn default() -> Self {
        Self {
            white: Rank::Two,
            black: Rank::Seven,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WinCondition {
    /// First pawn to reach its far rank wins.
    FarRank,
    /// The side left without a legal move loses.
    OpponentBlocked,
    /// Far rank decides; failing that, a blocked side loses.
    #[default]
    FarRankOrBlocked,
}

impl WinCondition {
    pub fn uses_far_rank(self) -> bool {
        matches!(self, WinCondition::FarRank | WinCondition::FarRankOrBlocked)
    }

    pub fn uses_blocked(self) -> bool {
        matches!(self, WinCondition::OpponentBlocked | WinCondition::FarRankOrBlocked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub white_gap: File,
    pub black_gap: File,
    pub starting_ranks: StartingRanks,
    pub first_to_move: Color,
    pub win_condition: WinCondition,
}

impl GameConfig {
    pub fn new(white_gap: File, black_gap: File) -> Self {
        Self {
            white_gap,
            black_gap,
            ..Self::default()
        }
    }

    pub fn new_board(&self) -> Board {
        Board::with_starting_ranks(self.white_gap, self.black_gap, self.starting_ranks)
    }

    pub fn new_game(&self) -> Game {
        Game::new(self.new_board(), self.first_to_move).with_win_condition(self.win_condition)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_gap: File::H,
            black_gap: File::A,
            starting_ranks: StartingRanks::default(),
            first_to_move: Color::White,
            win_condition: WinCondition::default(),
        }
    }
}
