#![allow(dead_code)]

use sqlx::SqlitePool;
use wisielec::game::core::{GameRules, GameSession, Player, TurnResult};

pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();
    pool
}

pub fn test_players() -> (Player, Player) {
    (Player::new(1, "alice"), Player::new(2, "bob"))
}

pub fn latin_rules() -> GameRules {
    GameRules::default().with_alphabet(LATIN)
}

/// Submit each letter in turn, failing the test on any rejected guess
pub fn play<'p>(session: &mut GameSession<'p>, letters: &str) -> Vec<TurnResult<'p>> {
    letters
        .chars()
        .map(|c| session.submit_guess(c).unwrap())
        .collect()
}
