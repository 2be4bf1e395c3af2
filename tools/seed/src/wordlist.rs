use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A category and the words to add under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub words: Vec<String>,
}

/// Parse a word list file.
///
/// The file is a JSON object mapping category names to arrays of words:
/// `{"Sport": ["Piłka", "Tenis"], "Muzyka": ["Jazz"]}`
pub fn parse_word_list(path: &Path) -> Result<Vec<CategoryEntry>, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    parse_word_list_str(&contents)
}

pub fn parse_word_list_str(
    contents: &str,
) -> Result<Vec<CategoryEntry>, Box<dyn std::error::Error>> {
    let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(contents)?;

    Ok(raw
        .into_iter()
        .filter_map(|(name, words)| {
            let name = name.trim().to_string();
            if name.is_empty() {
                return None;
            }

            let mut cleaned: Vec<String> = Vec::new();
            for word in words {
                let word = word.trim();
                // Skip blanks and repeats within the same category
                let repeated = cleaned.iter().any(|w| w.to_lowercase() == word.to_lowercase());
                if word.is_empty() || repeated {
                    continue;
                }
                cleaned.push(word.to_string());
            }

            Some(CategoryEntry {
                name,
                words: cleaned,
            })
        })
        .collect())
}
