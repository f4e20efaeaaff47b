// Core pawn race rules: board state, move generation, game history
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod moves;
pub mod piece;
pub mod player;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, BoardEncoding};
pub use config::{GameConfig, StartingRanks, WinCondition};
pub use error::{MoveError, PositionParseError};
pub use game::{Game, GameState};
pub use moves::{Move, MoveType, PlayedMove, ValidatedMove};
pub use piece::Color;
pub use player::{MoveSelector, Player, Players};
pub use position::{File, Position, Rank};
