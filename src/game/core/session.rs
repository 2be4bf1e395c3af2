use super::error::GameError;
use super::letter_board::LetterBoard;
use super::player::Player;
use super::puzzle::{GuessOutcome, WordPuzzle};
use super::rules::{Difficulty, GameRules, STAGE_MAX, TurnPolicy, normalize};
use super::score::ScoreReporter;
use super::snapshot::SessionSnapshot;
use super::word_repository::WordProvider;
use serde::Serialize;
use tracing::{debug, info};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    InProgress,
    WonByReveal,
    LostByStageLimit,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        self != SessionState::InProgress
    }
}

/// Misses so far; never goes down and never passes STAGE_MAX
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissCounter(u8);

impl MissCounter {
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1).min(STAGE_MAX);
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_exhausted(self) -> bool {
        self.0 >= STAGE_MAX
    }
}

/// What a single accepted guess did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult<'p> {
    pub outcome: GuessOutcome,
    pub stage: u8,
    pub finished: bool,
    pub winner: Option<&'p Player>,
}

/// Who is credited when the last miss is spent: the other side of the player
/// who made it.
fn stage_limit_winner(guesser: usize) -> usize {
    1 - guesser
}

/// One round between two local players (pure logic, no I/O)
pub struct GameSession<'p> {
    board: LetterBoard,
    puzzle: WordPuzzle,
    misses: MissCounter,
    turn: usize,
    players: [&'p Player; 2],
    difficulty: Difficulty,
    turn_policy: TurnPolicy,
    state: SessionState,
    winner: Option<usize>,
    reporter: Box<dyn ScoreReporter + 'p>,
}

impl<'p> GameSession<'p> {
    pub fn start(
        category: &str,
        word: &str,
        players: [&'p Player; 2],
        rules: &GameRules,
        reporter: impl ScoreReporter + 'p,
    ) -> Result<Self, GameError> {
        let board = LetterBoard::new(&rules.alphabet)?;
        let puzzle = WordPuzzle::new(category, word, &board)?;

        info!(
            category = puzzle.category(),
            letters = puzzle.remaining_count(),
            player1 = players[0].nickname,
            player2 = players[1].nickname,
            difficulty = ?rules.difficulty,
            "Round starting"
        );

        Ok(Self {
            board,
            puzzle,
            misses: MissCounter::default(),
            turn: 0,
            players,
            difficulty: rules.difficulty,
            turn_policy: rules.turn_policy,
            state: SessionState::InProgress,
            winner: None,
            reporter: Box::new(reporter),
        })
    }

    /// Apply the active player's pick. Either the whole turn is applied or,
    /// on error, nothing changes.
    pub fn submit_guess(&mut self, symbol: char) -> Result<TurnResult<'p>, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::SessionFinished);
        }

        let symbol = normalize(symbol);
        if !self.board.is_selectable(symbol)? {
            return Err(GameError::LetterUnavailable(symbol));
        }

        let guesser = self.turn;
        let outcome = self.puzzle.evaluate(symbol);
        if !outcome.is_hit() {
            self.misses.advance();
        }
        self.board.mark_used(symbol, self.difficulty);

        match self.turn_policy {
            TurnPolicy::EveryGuess => self.flip_turn(),
            TurnPolicy::OnMiss if !outcome.is_hit() => self.flip_turn(),
            TurnPolicy::OnMiss => {}
        }

        debug!(
            player = self.players[guesser].nickname,
            %symbol,
            hit = outcome.is_hit(),
            stage = self.misses.value(),
            remaining = self.puzzle.remaining_count(),
            "Guess applied"
        );

        self.check_finish(guesser);

        Ok(TurnResult {
            outcome,
            stage: self.misses.value(),
            finished: self.state.is_terminal(),
            winner: self.winner(),
        })
    }

    fn flip_turn(&mut self) {
        self.turn = 1 - self.turn;
    }

    fn check_finish(&mut self, guesser: usize) {
        let (state, winner) = if self.misses.is_exhausted() {
            (SessionState::LostByStageLimit, stage_limit_winner(guesser))
        } else if self.puzzle.is_solved() {
            (SessionState::WonByReveal, guesser)
        } else {
            return;
        };

        self.state = state;
        self.winner = Some(winner);

        let player = self.players[winner];
        info!(
            winner = player.nickname,
            state = ?state,
            word = self.puzzle.word(),
            "Round finished"
        );
        self.reporter.record_win(player);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn winner(&self) -> Option<&'p Player> {
        self.winner.map(|i| self.players[i])
    }

    pub fn stage(&self) -> u8 {
        self.misses.value()
    }

    pub fn active_player_index(&self) -> usize {
        self.turn
    }

    pub fn active_player(&self) -> &'p Player {
        self.players[self.turn]
    }

    pub fn players(&self) -> [&'p Player; 2] {
        self.players
    }

    pub fn board(&self) -> &LetterBoard {
        &self.board
    }

    pub fn puzzle(&self) -> &WordPuzzle {
        &self.puzzle
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn turn_policy(&self) -> TurnPolicy {
        self.turn_policy
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            category: self.puzzle.category().to_string(),
            rendered_word: self.puzzle.rendered_word(),
            stage: self.misses.value(),
            stage_max: STAGE_MAX,
            letters: self.board.letters().to_vec(),
            active_player: self.turn,
            state: self.state,
            finished: self.is_finished(),
            winner: self.winner().cloned(),
        }
    }
}

/// Draw a word from `provider` and open a round with it
pub async fn start_session<'p, P: WordProvider>(
    provider: &P,
    players: [&'p Player; 2],
    rules: &GameRules,
    reporter: impl ScoreReporter + 'p,
) -> Result<GameSession<'p>, GameError> {
    let word = provider.next_word().await.ok_or(GameError::NoWords)?;
    GameSession::start(&word.category, &word.text, players, rules, reporter)
}
