//! Text processing: tokenization and bag-of-words vectorization.
//!
//! # Examples
//!
//! ```
//! use wordbag::text::vectorize::CountVectorizer;
//!
//! let mut vectorizer = CountVectorizer::new();
//! let matrix = vectorizer.fit_transform(&["Pasta Pomodoro", "boil pasta"], true);
//! assert_eq!(matrix, &[vec![1, 1, 0], vec![1, 0, 1]]);
//! assert_eq!(vectorizer.feature_names(), &["pasta", "pomodoro", "boil"]);
//! ```

pub mod tokenize;
pub mod vectorize;

/// Splits a document into an ordered sequence of tokens.
///
/// Implementations must be deterministic: the same text always yields
/// the same tokens in the same order.
pub trait Tokenizer {
    /// Tokenize `text`, preserving left-to-right order.
    fn tokenize(&self, text: &str) -> Vec<String>;
}
