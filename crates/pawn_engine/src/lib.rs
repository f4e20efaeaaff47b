pub mod ai;
pub mod error;
pub mod evaluation;
pub mod network;
pub mod play;
pub mod random;
pub mod search;

pub use ai::PawnAI;
pub use error::EngineError;
pub use evaluation::evaluate_position;
pub use network::{NetworkMover, NeuralNetwork};
pub use play::{play_match, MatchResult};
pub use random::RandomMover;
pub use search::{search_best_move, SearchMover};
