use sqlx::SqlitePool;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Persists round wins as `best_score` increments
#[derive(Clone)]
pub struct ScoreRepository {
    pool: SqlitePool,
}

impl ScoreRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns false when no player has that id.
    pub async fn add_win(&self, player_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE players SET best_score = best_score + 1 WHERE id = ?")
            .bind(player_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Spawns a task that saves every id sent on the returned channel. The
    /// sender is what a session reports to; the task ends once every sender
    /// is dropped.
    pub fn spawn_recorder(self) -> (mpsc::UnboundedSender<i64>, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<i64>();

        let handle = tokio::spawn(async move {
            while let Some(player_id) = rx.recv().await {
                match self.add_win(player_id).await {
                    Ok(true) => info!(player_id, "Win recorded"),
                    Ok(false) => warn!(player_id, "Win for unknown player"),
                    Err(e) => warn!(player_id, error = %e, "Failed to record win"),
                }
            }
        });

        (tx, handle)
    }
}
