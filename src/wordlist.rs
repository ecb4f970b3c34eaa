//! Word-list source: a read-only mapping from language to category to words.
//!
//! Lists load from the same JSON shape the game data files use
//! (`{"en": {"Animals": ["cat", ...]}}`); a built-in English list backs the
//! CLI when no file is supplied.

use crate::common::GameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pseudo-category selecting the union of every category.
pub const RANDOM_CATEGORY: &str = "__RANDOM__";

pub const DEFAULT_LANGUAGE: &str = "en";

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "Animals",
        &[
            "cat", "dog", "horse", "tiger", "lion", "zebra", "mouse", "eagle", "shark", "whale",
            "otter", "camel", "sheep", "goat", "fox",
        ],
    ),
    (
        "Colors",
        &[
            "red", "blue", "green", "yellow", "purple", "orange", "pink", "black", "white", "gray",
            "teal", "brown",
        ],
    ),
    (
        "Food",
        &[
            "bread", "apple", "pasta", "cheese", "grape", "mango", "salad", "honey", "olive",
            "bacon", "rice", "corn",
        ],
    ),
    (
        "Sports",
        &[
            "soccer", "tennis", "hockey", "rugby", "golf", "boxing", "rowing", "skiing", "judo",
            "chess",
        ],
    ),
];

/// Language → category → words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    langs: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl WordList {
    /// Parse a word list from its JSON representation.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The built-in English categories.
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, words)| {
                (
                    (*name).to_string(),
                    words.iter().map(|w| (*w).to_string()).collect(),
                )
            })
            .collect();
        let mut langs = BTreeMap::new();
        langs.insert(DEFAULT_LANGUAGE.to_string(), categories);
        WordList { langs }
    }

    /// Category names available for `lang`.
    pub fn categories(&self, lang: &str) -> Result<Vec<&str>, GameError> {
        let cats = self
            .langs
            .get(lang)
            .ok_or_else(|| GameError::LanguageNotFound(lang.to_string()))?;
        Ok(cats.keys().map(String::as_str).collect())
    }

    /// Words of one category, or the deduplicated union of all categories when
    /// `category` is [`RANDOM_CATEGORY`].
    pub fn category_words(&self, lang: &str, category: &str) -> Result<Vec<String>, GameError> {
        let cats = self
            .langs
            .get(lang)
            .ok_or_else(|| GameError::LanguageNotFound(lang.to_string()))?;
        if category == RANDOM_CATEGORY {
            return Ok(dedup_keep_order(cats.values().flatten()));
        }
        cats.get(category)
            .cloned()
            .ok_or_else(|| GameError::CategoryNotFound(category.to_string()))
    }

    /// Every word known for `lang`, deduplicated. This is the pool substitute
    /// words are drawn from when placement fails.
    pub fn all_words(&self, lang: &str) -> Result<Vec<String>, GameError> {
        self.category_words(lang, RANDOM_CATEGORY)
    }
}

fn dedup_keep_order<'a>(words: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    let mut out = Vec::new();
    for w in words {
        if seen.insert(w.to_uppercase()) {
            out.push(w.clone());
        }
    }
    out
}
