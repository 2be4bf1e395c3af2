use serde::Serialize;

/// A registered player taking part in a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub nickname: String,
}

impl Player {
    pub fn new(id: i64, nickname: &str) -> Self {
        Self {
            id,
            nickname: nickname.to_string(),
        }
    }
}
