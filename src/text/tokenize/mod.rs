//! Whitespace tokenization for bag-of-words counting.
//!
//! Tokens are the non-empty runs of characters between separators. A
//! separator is any Unicode whitespace character or one of the ASCII
//! information separators U+001C..=U+001F.
//! Punctuation stays attached to its word and no Unicode normalization is
//! applied; the only optional step is case folding.

use crate::text::Tokenizer;

/// Whitespace tokenizer with optional lowercasing.
///
/// # Examples
///
/// ```
/// use wordbag::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// // Punctuation is preserved
/// assert_eq!(tokenizer.tokenize("Hello, world!"), vec!["Hello,", "world!"]);
///
/// // Runs of whitespace collapse
/// assert_eq!(tokenizer.tokenize("foo \t\n bar"), vec!["foo", "bar"]);
///
/// let lower = WhitespaceTokenizer::new().with_lowercase(true);
/// assert_eq!(lower.tokenize("Crock Pot"), vec!["crock", "pot"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenizer {
    lowercase: bool,
}

impl WhitespaceTokenizer {
    /// Create a tokenizer that keeps the original casing.
    #[must_use]
    pub fn new() -> Self {
        Self { lowercase: false }
    }

    /// Case-fold the whole document before splitting.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Whether documents are lowercased before splitting.
    #[must_use]
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn split_tokens(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        if self.lowercase {
            // Lowercase the document first: some characters change length when folded.
            split_tokens(&text.to_lowercase())
        } else {
            split_tokens(text)
        }
    }
}
