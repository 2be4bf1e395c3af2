use thiserror::Error;

/// Validation failures raised by the game engine.
///
/// None of these are retried internally; an operation that fails leaves the
/// session exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("'{0}' is not part of the alphabet")]
    InvalidSymbol(char),
    #[error("letter '{0}' has already been used")]
    LetterUnavailable(char),
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(String),
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("the round is already over")]
    SessionFinished,
    #[error("no words available")]
    NoWords,
}
