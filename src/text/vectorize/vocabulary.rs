//! Ordered, deduplicated token vocabulary.
//!
//! Column `i` of a count matrix is the token at position `i` of the
//! vocabulary. Positions are handed out in first-insertion order and never
//! change until the vocabulary is cleared.

use crate::error::WordbagError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Insertion-ordered token list with an O(1) token→index lookup.
///
/// `terms` and `index` are only mutated together, so `index[terms[i]] == i`
/// holds for every `i`.
///
/// # Examples
///
/// ```
/// use wordbag::text::vectorize::Vocabulary;
///
/// let mut vocab = Vocabulary::new();
/// assert_eq!(vocab.insert("pasta"), 0);
/// assert_eq!(vocab.insert("boil"), 1);
/// assert_eq!(vocab.insert("pasta"), 0);
///
/// assert_eq!(vocab.as_slice(), &["pasta", "boil"]);
/// assert_eq!(vocab.get("boil"), Some(1));
/// assert_eq!(vocab.get("taste"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `token` if absent. Returns its column index either way.
    pub fn insert(&mut self, token: &str) -> usize {
        if let Some(&idx) = self.index.get(token) {
            return idx;
        }
        let idx = self.terms.len();
        self.terms.push(token.to_string());
        self.index.insert(token.to_string(), idx);
        idx
    }

    /// Column index of `token`, if present.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Whether `token` is in the vocabulary.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Token stored at column `idx`.
    #[must_use]
    pub fn token(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(String::as_str)
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no tokens have been inserted since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Tokens in column order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    /// Iterate tokens in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    /// Remove every token.
    pub fn clear(&mut self) {
        self.terms.clear();
        self.index.clear();
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = WordbagError;

    fn try_from(terms: Vec<String>) -> Result<Self, Self::Error> {
        let mut index = HashMap::with_capacity(terms.len());
        for (idx, term) in terms.iter().enumerate() {
            if let Some(first) = index.insert(term.clone(), idx) {
                return Err(WordbagError::InvalidVocabulary {
                    message: format!(
                        "duplicate token {term:?} at index {idx} (first at {first})"
                    ),
                });
            }
        }
        Ok(Self { terms, index })
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocab: Vocabulary) -> Self {
        vocab.terms
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
