use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("nickname must not be empty")]
    EmptyNickname,
    #[error("nickname '{0}' is already taken")]
    NicknameTaken(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
