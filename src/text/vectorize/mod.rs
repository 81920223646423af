//! Bag-of-words vectorization.
//!
//! [`CountVectorizer`] grows a [`Vocabulary`] from batches of documents and
//! turns each batch into a dense document-term matrix of raw counts.
//!
//! Columns follow first-occurrence order: the first token of the first
//! document fitted is column 0, and every later unseen token is appended.
//! Fitting without a reset keeps earlier columns where they are, so rows
//! from a later batch line up with rows from an earlier one once padded.
//!
//! # Examples
//!
//! ```
//! use wordbag::text::vectorize::CountVectorizer;
//!
//! let corpus = [
//!     "Crock Pot Pasta Never boil pasta again",
//!     "Pasta Pomodoro Fresh ingredients Parmesan to taste",
//! ];
//!
//! let mut vectorizer = CountVectorizer::new();
//! let matrix = vectorizer.fit_transform(&corpus, true).to_vec();
//! assert_eq!(matrix[0], vec![1, 1, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(matrix[1], vec![0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
//!
//! // Extend the existing vocabulary instead of starting over.
//! let matrix = vectorizer.fit_transform(&["Crock not to taste"], false);
//! assert_eq!(matrix, &[vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1]]);
//! assert_eq!(vectorizer.feature_names().last().map(String::as_str), Some("not"));
//! ```

mod count_vectorizer;
mod vocabulary;

pub use count_vectorizer::{CountMatrix, CountVectorizer, TermCounts, VectorizerConfig};
pub use vocabulary::Vocabulary;


#[cfg(test)]
mod vectorize_contract_falsify;
