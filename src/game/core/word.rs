/// A word to guess together with the category shown to the players
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub category: String,
    pub text: String,
}

impl Word {
    pub fn new(category: &str, text: &str) -> Self {
        Self {
            category: category.to_string(),
            text: text.to_string(),
        }
    }
}
