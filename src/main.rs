use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use tokio::io::{AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wisielec::config::Config;
use wisielec::console::{ask, run_rounds};
use wisielec::game::core::{Player, WordRepository};
use wisielec::game::players::{PlayerRepository, ScoreRepository};

const LEADERBOARD_SIZE: u32 = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .init();

    let rules = config.rules();

    tracing::info!(database_url = config.database_url, "Opening database");
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;
    sqlx::migrate!().run(&pool).await?;

    let words = WordRepository::new(pool.clone());
    let players = PlayerRepository::new(pool.clone());
    let scores = ScoreRepository::new(pool.clone());

    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    let Some(first) =
        pick_player(&players, &mut input, &mut output, "Player 1 nickname: ", None).await?
    else {
        return Ok(());
    };
    let Some(second) =
        pick_player(&players, &mut input, &mut output, "Player 2 nickname: ", Some(&first)).await?
    else {
        return Ok(());
    };

    run_rounds(&words, [&first, &second], &rules, scores, &mut input, &mut output).await?;

    output.write_all(b"\nBest scores:\n").await?;
    for entry in players.leaderboard(LEADERBOARD_SIZE).await? {
        let line = format!("  {:<20} {}\n", entry.nickname, entry.best_score);
        output.write_all(line.as_bytes()).await?;
    }
    output.flush().await?;

    Ok(())
}

async fn pick_player<R, W>(
    players: &PlayerRepository,
    input: &mut R,
    output: &mut W,
    prompt: &str,
    taken: Option<&Player>,
) -> Result<Option<Player>, Box<dyn std::error::Error>>
where
    R: tokio::io::AsyncBufRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    loop {
        let Some(nickname) = ask(input, output, prompt).await? else {
            return Ok(None);
        };
        if nickname.is_empty() {
            continue;
        }
        if taken.is_some_and(|p| p.nickname == nickname) {
            output.write_all(b"Pick a different player.\n").await?;
            continue;
        }
        return Ok(Some(players.find_or_register(&nickname).await?));
    }
}
