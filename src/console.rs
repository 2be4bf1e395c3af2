use crate::game::core::{
    GameError, GameRules, GameSession, Player, STAGE_FRAMES, SessionSnapshot, SessionState,
    WordProvider, start_session,
};
use crate::game::players::ScoreRepository;
use std::error::Error;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Gallows drawing for each stage, from an empty field to the full figure
pub const GALLOWS: [&str; STAGE_FRAMES] = [
    "\n\n\n\n\n\n",
    "\n\n\n\n\n\n=========",
    "\n      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n      |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Text screen for the current state of a round
pub fn render(snapshot: &SessionSnapshot, players: [&Player; 2]) -> String {
    let frame = GALLOWS[usize::from(snapshot.stage).min(STAGE_FRAMES - 1)];
    let letters: String = snapshot
        .letters
        .iter()
        .map(|l| if l.selectable { l.symbol } else { '.' })
        .collect();

    let mut screen = format!(
        "{frame}\n\nCategory: {}\n\n    {}\n\nLetters: {letters}\nMisses: {}/{}\n",
        snapshot.category, snapshot.rendered_word, snapshot.stage, snapshot.stage_max
    );
    if !snapshot.finished {
        screen.push_str(&format!(
            "Turn: {}\n",
            players[snapshot.active_player].nickname
        ));
    }
    screen
}

/// A line counts as a guess when it holds exactly one character
pub fn parse_letter(line: &str) -> Option<char> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn describe(err: &GameError) -> String {
    match err {
        GameError::InvalidSymbol(c) => format!("'{c}' is not on the board."),
        GameError::LetterUnavailable(c) => format!("'{c}' was already used."),
        other => other.to_string(),
    }
}

/// Write `prompt` and read one trimmed line; `None` on end of input
pub async fn ask<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(prompt.as_bytes()).await?;
    output.flush().await?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run a round until it ends or input runs out. Returns the final state.
pub async fn play_round<R, W>(
    session: &mut GameSession<'_>,
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionState>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let players = session.players();

    while !session.is_finished() {
        let screen = render(&session.snapshot(), players);
        output.write_all(screen.as_bytes()).await?;

        let Some(line) = ask(input, output, "> ").await? else {
            return Ok(session.state());
        };
        let Some(letter) = parse_letter(&line) else {
            output.write_all(b"Type a single letter.\n").await?;
            continue;
        };

        if let Err(e) = session.submit_guess(letter) {
            output.write_all(format!("{}\n", describe(&e)).as_bytes()).await?;
        }
    }

    let screen = render(&session.snapshot(), players);
    output.write_all(screen.as_bytes()).await?;

    let word = session.puzzle().word();
    let summary = match (session.state(), session.winner()) {
        (SessionState::WonByReveal, Some(winner)) => {
            format!("{} guessed the word {word} and wins!\n", winner.nickname)
        }
        (SessionState::LostByStageLimit, Some(winner)) => {
            format!("The gallows is complete. The word was {word}. {} wins!\n", winner.nickname)
        }
        _ => String::new(),
    };
    output.write_all(summary.as_bytes()).await?;
    output.flush().await?;

    Ok(session.state())
}

/// Play rounds until input runs out or the players stop, saving every win.
///
/// The recorder is always drained before returning, so wins from finished
/// rounds are saved even when a later round fails to start.
pub async fn run_rounds<P, R, W>(
    words: &P,
    players: [&Player; 2],
    rules: &GameRules,
    scores: ScoreRepository,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn Error>>
where
    P: WordProvider,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (reporter, recorder) = scores.spawn_recorder();
    let played = play_rounds(words, players, rules, &reporter, input, output).await;

    drop(reporter);
    recorder.await?;
    played
}

async fn play_rounds<P, R, W>(
    words: &P,
    players: [&Player; 2],
    rules: &GameRules,
    reporter: &mpsc::UnboundedSender<i64>,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn Error>>
where
    P: WordProvider,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let mut session = start_session(words, players, rules, reporter.clone()).await?;
        play_round(&mut session, input, output).await?;
        if !session.is_finished() {
            return Ok(());
        }

        let again = ask(input, output, "Play again? (y/n) ").await?;
        if !matches!(again.as_deref(), Some("y" | "Y" | "t" | "T")) {
            return Ok(());
        }
    }
}
