pub mod error;
pub mod letter_board;
pub mod puzzle;
pub mod rules;
pub mod score;
pub mod session;
pub mod snapshot;
mod player;
mod word;
mod word_repository;

pub use error::GameError;
pub use letter_board::{LetterBoard, LetterState};
pub use player::Player;
pub use puzzle::{GuessOutcome, WordPuzzle};
pub use rules::{Difficulty, GameRules, POLISH_ALPHABET, STAGE_FRAMES, STAGE_MAX, TurnPolicy};
pub use score::{NoScore, ScoreReporter};
pub use session::{GameSession, SessionState, TurnResult, start_session};
pub use snapshot::SessionSnapshot;
pub use word::Word;
pub use word_repository::{StaticWordProvider, WordProvider, WordRepository};
