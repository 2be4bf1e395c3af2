mod error;
mod repository;
mod score_repository;

pub use error::PlayerError;
pub use repository::{PlayerRepository, ScoreEntry};
pub use score_repository::ScoreRepository;
