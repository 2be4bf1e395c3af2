use super::letter_board::LetterState;
use super::player::Player;
use super::session::SessionState;
use serde::Serialize;

/// Read-only view of a round for whatever draws it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub category: String,
    pub rendered_word: String,
    pub stage: u8,
    pub stage_max: u8,
    pub letters: Vec<LetterState>,
    pub active_player: usize,
    pub state: SessionState,
    pub finished: bool,
    pub winner: Option<Player>,
}
