use super::error::GameError;
use super::letter_board::LetterBoard;
use super::rules::normalize;
use std::collections::BTreeSet;

/// Placeholder shown for a position that has not been guessed yet
pub const BLANK: char = '_';

/// Result of checking a letter against the hidden word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word. `positions` holds only the indices this
    /// guess revealed, so it is empty when the letter was already uncovered.
    Hit { positions: BTreeSet<usize> },
    Miss,
}

impl GuessOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, GuessOutcome::Hit { .. })
    }
}

/// The hidden word of a round and what has been uncovered so far
#[derive(Debug, Clone)]
pub struct WordPuzzle {
    category: String,
    word: Vec<char>,
    revealed: Vec<Option<char>>,
}

impl WordPuzzle {
    /// Characters of `word` that are not on the board (hyphens, spaces, ...)
    /// start out revealed since nobody could ever pick them.
    pub fn new(category: &str, word: &str, board: &LetterBoard) -> Result<Self, GameError> {
        let category = category.trim();
        let word = word.trim();

        if category.is_empty() {
            return Err(GameError::InvalidPuzzle("category is empty".to_string()));
        }
        if word.is_empty() {
            return Err(GameError::InvalidPuzzle("word is empty".to_string()));
        }

        let word: Vec<char> = word.chars().map(normalize).collect();
        let revealed: Vec<Option<char>> = word
            .iter()
            .map(|&c| (!board.contains(c)).then_some(c))
            .collect();

        if revealed.iter().all(Option::is_some) {
            return Err(GameError::InvalidPuzzle(
                "word has no letters from the alphabet".to_string(),
            ));
        }

        Ok(Self {
            category: category.to_string(),
            word,
            revealed,
        })
    }

    /// Reveal every occurrence of `symbol` at once.
    pub fn evaluate(&mut self, symbol: char) -> GuessOutcome {
        let symbol = normalize(symbol);
        let mut found = false;
        let mut positions = BTreeSet::new();

        for (i, (&c, shown)) in self.word.iter().zip(self.revealed.iter_mut()).enumerate() {
            if c != symbol {
                continue;
            }
            found = true;
            if shown.is_none() {
                *shown = Some(c);
                positions.insert(i);
            }
        }

        if found {
            GuessOutcome::Hit { positions }
        } else {
            GuessOutcome::Miss
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.revealed.iter().filter(|r| r.is_none()).count()
    }

    pub fn is_solved(&self) -> bool {
        self.remaining_count() == 0
    }

    /// The word as players see it, e.g. `K _ _ A`
    pub fn rendered_word(&self) -> String {
        self.revealed
            .iter()
            .map(|r| r.unwrap_or(BLANK).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The full word; meant for showing after the round is over
    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::core::rules::POLISH_ALPHABET;

    fn board() -> LetterBoard {
        LetterBoard::new(POLISH_ALPHABET).unwrap()
    }

    #[test]
    fn test_word_is_upper_cased() {
        let puzzle = WordPuzzle::new("Sport", "Piłka", &board()).unwrap();
        assert_eq!(puzzle.word(), "PIŁKA");
        assert_eq!(puzzle.remaining_count(), 5);
        assert_eq!(puzzle.rendered_word(), "_ _ _ _ _");
    }

    #[test]
    fn test_repeated_letter_revealed_together() {
        let mut puzzle = WordPuzzle::new("Imiona", "ANNA", &board()).unwrap();

        let outcome = puzzle.evaluate('a');

        assert_eq!(
            outcome,
            GuessOutcome::Hit {
                positions: BTreeSet::from([0, 3])
            }
        );
        assert_eq!(puzzle.remaining_count(), 2);
        assert_eq!(puzzle.rendered_word(), "A _ _ A");
    }

    #[test]
    fn test_miss_leaves_word_untouched() {
        let mut puzzle = WordPuzzle::new("Sport", "Golf", &board()).unwrap();

        assert_eq!(puzzle.evaluate('Z'), GuessOutcome::Miss);
        assert_eq!(puzzle.remaining_count(), 4);
        assert!(puzzle.revealed().iter().all(Option::is_none));
    }

    #[test]
    fn test_second_hit_reveals_nothing_new() {
        let mut puzzle = WordPuzzle::new("Sport", "Golf", &board()).unwrap();

        puzzle.evaluate('G');
        let again = puzzle.evaluate('g');

        assert_eq!(
            again,
            GuessOutcome::Hit {
                positions: BTreeSet::new()
            }
        );
        assert_eq!(puzzle.remaining_count(), 3);
    }

    #[test]
    fn test_non_alphabet_characters_start_revealed() {
        let puzzle = WordPuzzle::new("Muzyka", "Hip-hop", &board()).unwrap();

        assert_eq!(puzzle.remaining_count(), 6);
        assert_eq!(puzzle.rendered_word(), "_ _ _ - _ _ _");
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            WordPuzzle::new("Sport", "  ", &board()),
            Err(GameError::InvalidPuzzle(_))
        ));
        assert!(matches!(
            WordPuzzle::new("", "Golf", &board()),
            Err(GameError::InvalidPuzzle(_))
        ));
        assert!(matches!(
            WordPuzzle::new("Znaki", "--", &board()),
            Err(GameError::InvalidPuzzle(_))
        ));
    }

    #[test]
    fn test_solving_word() {
        let mut puzzle = WordPuzzle::new("Sport", "Judo", &board()).unwrap();
        for c in ['J', 'U', 'D', 'O'] {
            puzzle.evaluate(c);
        }
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.rendered_word(), "J U D O");
    }
}
