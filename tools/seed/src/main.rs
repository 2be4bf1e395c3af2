mod importer;
mod wordlist;

use clap::Parser;
use importer::import_words;
use sqlx::SqlitePool;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seed", about = "Add categories and words to the hangman database")]
struct Args {
    /// Path to a JSON word list ({"Category": ["word", ...]})
    #[arg(short, long)]
    file: PathBuf,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Remove all existing words and categories before import
    #[arg(long)]
    clear: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    println!("Connecting to database...");
    let pool = SqlitePool::connect(&args.database_url).await?;

    // Run migrations to ensure schema exists
    sqlx::migrate!("../../migrations").run(&pool).await?;

    if args.clear {
        println!("Clearing existing words...");
        sqlx::query("DELETE FROM words").execute(&pool).await?;
        sqlx::query("DELETE FROM categories").execute(&pool).await?;
    }

    println!("Parsing word list: {:?}", args.file);
    let entries = wordlist::parse_word_list(&args.file)?;
    println!("Found {} categories", entries.len());

    println!("Importing words...");
    let stats = import_words(&pool, entries).await?;

    println!();
    println!("Import complete:");
    println!("  Categories created:      {}", stats.categories_created);
    println!("  Words in file:           {}", stats.offered);
    println!("  Inserted into database:  {}", stats.inserted);

    Ok(())
}
