use super::error::GameError;
use super::rules::{Difficulty, normalize};
use serde::Serialize;

/// One letter of the board and whether it can still be picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterState {
    pub symbol: char,
    pub selectable: bool,
}

/// The fixed alphabet of a round (pure data, no rendering)
#[derive(Debug, Clone)]
pub struct LetterBoard {
    letters: Vec<LetterState>,
}

impl LetterBoard {
    pub fn new(alphabet: &str) -> Result<Self, GameError> {
        let mut letters: Vec<LetterState> = Vec::new();

        for symbol in alphabet.chars().map(normalize) {
            if symbol.is_whitespace() {
                return Err(GameError::InvalidAlphabet(
                    "whitespace is not a letter".to_string(),
                ));
            }
            if letters.iter().any(|l| l.symbol == symbol) {
                return Err(GameError::InvalidAlphabet(format!(
                    "'{symbol}' appears more than once"
                )));
            }
            letters.push(LetterState {
                symbol,
                selectable: true,
            });
        }

        if letters.is_empty() {
            return Err(GameError::InvalidAlphabet("alphabet is empty".to_string()));
        }

        Ok(Self { letters })
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.find(symbol).is_some()
    }

    pub fn is_selectable(&self, symbol: char) -> Result<bool, GameError> {
        self.find(symbol)
            .map(|l| l.selectable)
            .ok_or(GameError::InvalidSymbol(symbol))
    }

    /// Record that `symbol` was picked. Classic takes it off the board for
    /// good; Hardcore leaves the board untouched.
    pub fn mark_used(&mut self, symbol: char, difficulty: Difficulty) {
        if difficulty == Difficulty::Hardcore {
            return;
        }
        let symbol = normalize(symbol);
        if let Some(letter) = self.letters.iter_mut().find(|l| l.symbol == symbol) {
            letter.selectable = false;
        }
    }

    pub fn letters(&self) -> &[LetterState] {
        &self.letters
    }

    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|l| l.symbol)
    }

    fn find(&self, symbol: char) -> Option<&LetterState> {
        let symbol = normalize(symbol);
        self.letters.iter().find(|l| l.symbol == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::core::rules::POLISH_ALPHABET;

    #[test]
    fn test_all_letters_start_selectable() {
        let board = LetterBoard::new(POLISH_ALPHABET).unwrap();

        assert_eq!(board.letters().len(), 32);
        assert!(board.letters().iter().all(|l| l.selectable));
    }

    #[test]
    fn test_unknown_symbol_is_rejected() {
        let board = LetterBoard::new("ABC").unwrap();

        assert_eq!(board.is_selectable('Q'), Err(GameError::InvalidSymbol('Q')));
        assert_eq!(board.is_selectable('b'), Ok(true));
    }

    #[test]
    fn test_classic_disables_used_letter() {
        let mut board = LetterBoard::new("ABC").unwrap();

        board.mark_used('a', Difficulty::Classic);

        assert_eq!(board.is_selectable('A'), Ok(false));
        assert_eq!(board.is_selectable('B'), Ok(true));
    }

    #[test]
    fn test_hardcore_keeps_letter_selectable() {
        let mut board = LetterBoard::new("ABC").unwrap();

        board.mark_used('A', Difficulty::Hardcore);
        board.mark_used('A', Difficulty::Hardcore);

        assert_eq!(board.is_selectable('A'), Ok(true));
    }

    #[test]
    fn test_alphabet_is_normalized_and_ordered() {
        let board = LetterBoard::new("ąbc").unwrap();
        let symbols: String = board.alphabet().collect();
        assert_eq!(symbols, "ĄBC");
    }

    #[test]
    fn test_rejects_bad_alphabets() {
        assert!(matches!(
            LetterBoard::new(""),
            Err(GameError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            LetterBoard::new("AbB"),
            Err(GameError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            LetterBoard::new("A B"),
            Err(GameError::InvalidAlphabet(_))
        ));
    }
}
