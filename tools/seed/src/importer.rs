use crate::wordlist::CategoryEntry;
use sqlx::SqlitePool;

/// Statistics from an import operation
#[derive(Debug, Default)]
pub struct ImportStats {
    /// Categories created by this import
    pub categories_created: usize,
    /// Words offered for insertion
    pub offered: usize,
    /// Rows actually inserted (duplicates are skipped by the UNIQUE constraint)
    pub inserted: usize,
}

const BATCH_SIZE: usize = 500;

/// Import categories and their words.
///
/// Categories are matched by name and created when missing. Words use
/// INSERT OR IGNORE so running the same file twice adds nothing.
pub async fn import_words(
    pool: &SqlitePool,
    entries: Vec<CategoryEntry>,
) -> Result<ImportStats, Box<dyn std::error::Error>> {
    let mut stats = ImportStats::default();

    for entry in entries {
        let created = sqlx::query("INSERT OR IGNORE INTO categories (name) VALUES (?)")
            .bind(&entry.name)
            .execute(pool)
            .await?;
        stats.categories_created += created.rows_affected() as usize;

        let (category_id,): (i64,) = sqlx::query_as("SELECT id FROM categories WHERE name = ?")
            .bind(&entry.name)
            .fetch_one(pool)
            .await?;

        stats.offered += entry.words.len();

        for chunk in entry.words.chunks(BATCH_SIZE) {
            let mut query = String::from("INSERT OR IGNORE INTO words (word, category_id) VALUES ");

            for (i, _) in chunk.iter().enumerate() {
                if i > 0 {
                    query.push_str(", ");
                }
                query.push_str("(?, ?)");
            }

            let mut q = sqlx::query(&query);
            for word in chunk {
                q = q.bind(word).bind(category_id);
            }

            let result = q.execute(pool).await?;
            stats.inserted += result.rows_affected() as usize;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn pool() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        sqlx::migrate!("../../migrations").run(&pool).await.unwrap();
        pool
    }

    fn entry(name: &str, words: &[&str]) -> CategoryEntry {
        CategoryEntry {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_new_category_is_created() {
        let pool = pool().await;

        let stats = import_words(&pool, vec![entry("Zwierzęta", &["Kot", "Pies"])])
            .await
            .unwrap();

        assert_eq!(stats.categories_created, 1);
        assert_eq!(stats.offered, 2);
        assert_eq!(stats.inserted, 2);
    }

    #[tokio::test]
    async fn test_existing_words_are_skipped() {
        let pool = pool().await;

        let stats = import_words(&pool, vec![entry("Sport", &["Golf", "Szachy"])])
            .await
            .unwrap();

        assert_eq!(stats.categories_created, 0);
        assert_eq!(stats.inserted, 1);

        let again = import_words(&pool, vec![entry("Sport", &["Golf", "Szachy"])])
            .await
            .unwrap();
        assert_eq!(again.inserted, 0);
    }
}
