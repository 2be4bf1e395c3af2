use super::word::Word;
use rand::seq::IndexedRandom;
use sqlx::SqlitePool;
use std::future::Future;
use tracing::warn;

/// Supplies the word for a new round
pub trait WordProvider {
    fn next_word(&self) -> impl Future<Output = Option<Word>> + Send;
}

#[derive(Clone)]
pub struct WordRepository {
    pool: SqlitePool,
}

impl WordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Pick a random category first, then a random word from it, so small
    /// categories come up as often as big ones.
    pub async fn get_random(&self) -> Option<Word> {
        let category: (i64, String) = sqlx::query_as(
            "SELECT id, name FROM categories
             WHERE EXISTS (SELECT 1 FROM words WHERE words.category_id = categories.id)
             ORDER BY RANDOM() LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| warn!(error = %e, "Failed to pick a category"))
        .ok()??;

        let word: (String,) =
            sqlx::query_as("SELECT word FROM words WHERE category_id = ? ORDER BY RANDOM() LIMIT 1")
                .bind(category.0)
                .fetch_optional(&self.pool)
                .await
                .inspect_err(|e| warn!(error = %e, "Failed to pick a word"))
                .ok()??;

        Some(Word {
            category: category.1,
            text: word.0,
        })
    }
}

impl WordProvider for WordRepository {
    async fn next_word(&self) -> Option<Word> {
        self.get_random().await
    }
}

/// Words kept in memory; handy for tests and for playing without a database
#[derive(Debug, Clone, Default)]
pub struct StaticWordProvider {
    words: Vec<Word>,
}

impl StaticWordProvider {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl WordProvider for StaticWordProvider {
    async fn next_word(&self) -> Option<Word> {
        self.words.choose(&mut rand::rng()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_picks_from_list() {
        let provider = StaticWordProvider::new(vec![
            Word::new("Sport", "Golf"),
            Word::new("Muzyka", "Jazz"),
        ]);

        for _ in 0..20 {
            let word = provider.next_word().await.unwrap();
            assert!(word.text == "Golf" || word.text == "Jazz");
        }
    }

    #[tokio::test]
    async fn test_static_provider_empty() {
        let provider = StaticWordProvider::default();
        assert!(provider.next_word().await.is_none());
    }
}
