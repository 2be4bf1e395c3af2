use serde::Serialize;
use std::str::FromStr;

/// The 32 letters of the Polish alphabet, in display order
pub const POLISH_ALPHABET: &str = "AĄBCĆDEĘFGHIJKLŁMNŃOÓPRSŚTUWYZŻŹ";

/// Number of misses that ends the round
pub const STAGE_MAX: u8 = 10;

/// Number of gallows depictions a renderer needs: one per stage, 0 through STAGE_MAX
pub const STAGE_FRAMES: usize = STAGE_MAX as usize + 1;

/// Whether a used letter stays on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Every letter can be picked once
    #[default]
    Classic,
    /// Letters are never taken off the board
    Hardcore,
}

/// When the active player changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPolicy {
    #[default]
    EveryGuess,
    OnMiss,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "0" => Ok(Self::Classic),
            "hardcore" | "1" => Ok(Self::Hardcore),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

impl FromStr for TurnPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "every_guess" => Ok(Self::EveryGuess),
            "on_miss" => Ok(Self::OnMiss),
            other => Err(format!("unknown turn policy: {other}")),
        }
    }
}

/// Per-round settings chosen before a session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    pub alphabet: String,
    pub difficulty: Difficulty,
    pub turn_policy: TurnPolicy,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            alphabet: POLISH_ALPHABET.to_string(),
            difficulty: Difficulty::default(),
            turn_policy: TurnPolicy::default(),
        }
    }
}

impl GameRules {
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_turn_policy(mut self, turn_policy: TurnPolicy) -> Self {
        self.turn_policy = turn_policy;
        self
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }
}

/// Upper-cases a single character when that yields exactly one character.
///
/// Characters whose upper case expands (e.g. 'ß') are kept as they are so
/// that a word keeps one slot per character.
pub fn normalize(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
