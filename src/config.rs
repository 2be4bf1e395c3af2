use crate::game::core::{Difficulty, GameRules, TurnPolicy};
use std::env;

pub struct Config {
    pub database_url: String,
    pub log_filter: String,
    pub difficulty: Difficulty,
    pub turn_policy: TurnPolicy,
    pub alphabet: Option<String>,
}

impl Config {
    /// Loads `.env` first, so everything read here, `RUST_LOG` included,
    /// can come from that file.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite:wisielec.db?mode=rwc".to_string()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "error".to_string()),
            difficulty: lookup("DIFFICULTY")
                .and_then(|d| d.parse().ok())
                .unwrap_or_default(),
            turn_policy: lookup("TURN_POLICY")
                .and_then(|p| p.parse().ok())
                .unwrap_or_default(),
            alphabet: lookup("ALPHABET").filter(|a| !a.trim().is_empty()),
        }
    }

    pub fn rules(&self) -> GameRules {
        let rules = GameRules::default()
            .with_difficulty(self.difficulty)
            .with_turn_policy(self.turn_policy);

        match &self.alphabet {
            Some(alphabet) => rules.with_alphabet(alphabet.trim()),
            None => rules,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::core::POLISH_ALPHABET;
    use std::collections::HashMap;

    #[test]
    fn test_rules_use_default_alphabet() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            log_filter: "error".to_string(),
            difficulty: Difficulty::Hardcore,
            turn_policy: TurnPolicy::OnMiss,
            alphabet: None,
        };

        let rules = config.rules();
        assert_eq!(rules.alphabet, POLISH_ALPHABET);
        assert_eq!(rules.difficulty, Difficulty::Hardcore);
        assert_eq!(rules.turn_policy, TurnPolicy::OnMiss);
    }

    #[test]
    fn test_rules_use_alphabet_override() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            log_filter: "error".to_string(),
            difficulty: Difficulty::Classic,
            turn_policy: TurnPolicy::EveryGuess,
            alphabet: Some(" ABC ".to_string()),
        };

        assert_eq!(config.rules().alphabet, "ABC");
    }

    #[test]
    fn test_from_lookup_reads_log_filter() {
        let vars = HashMap::from([
            ("RUST_LOG", "wisielec=debug"),
            ("TURN_POLICY", "on_miss"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_filter, "wisielec=debug");
        assert_eq!(config.turn_policy, TurnPolicy::OnMiss);
        assert_eq!(config.difficulty, Difficulty::Classic);
        assert_eq!(config.database_url, "sqlite:wisielec.db?mode=rwc");
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.log_filter, "error");
        assert_eq!(config.alphabet, None);
    }
}
