use super::error::PlayerError;
use crate::game::core::Player;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::info;

/// One row of the best-score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub nickname: String,
    pub best_score: i64,
}

#[derive(Clone)]
pub struct PlayerRepository {
    pool: SqlitePool,
}

impl PlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, nickname: &str) -> Result<Player, PlayerError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(PlayerError::EmptyNickname);
        }

        let result = sqlx::query("INSERT INTO players (nickname) VALUES (?)")
            .bind(nickname)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                info!(id, nickname, "Player registered");
                Ok(Player::new(id, nickname))
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(PlayerError::NicknameTaken(nickname.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Player>, PlayerError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, nickname FROM players WHERE nickname = ?")
                .bind(nickname.trim())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|(id, nickname)| Player { id, nickname }))
    }

    pub async fn find_or_register(&self, nickname: &str) -> Result<Player, PlayerError> {
        match self.find_by_nickname(nickname).await? {
            Some(player) => Ok(player),
            None => self.register(nickname).await,
        }
    }

    pub async fn best_score(&self, player_id: i64) -> Result<Option<i64>, PlayerError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT best_score FROM players WHERE id = ?")
            .bind(player_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(score,)| score))
    }

    /// Players ordered by wins, most first; ties broken by nickname
    pub async fn leaderboard(&self, limit: u32) -> Result<Vec<ScoreEntry>, PlayerError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT nickname, best_score FROM players
             ORDER BY best_score DESC, nickname ASC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(nickname, best_score)| ScoreEntry {
                nickname,
                best_score,
            })
            .collect())
    }
}
