//! Wordbag: bag-of-words count vectorization in pure Rust.
//!
//! Wordbag turns a collection of text documents into a vocabulary of
//! distinct tokens and a dense document-term matrix of raw counts. The
//! vocabulary can be grown across calls, so later batches line up with the
//! columns of earlier ones.
//!
//! # Quick Start
//!
//! ```
//! use wordbag::prelude::*;
//!
//! let corpus = [
//!     "Crock Pot Pasta Never boil pasta again",
//!     "Pasta Pomodoro Fresh ingredients Parmesan to taste",
//! ];
//!
//! let mut vectorizer = CountVectorizer::new();
//! let matrix = vectorizer.fit_transform(&corpus, true);
//! assert_eq!(matrix.len(), 2);
//! assert_eq!(matrix[0][2], 2); // "pasta" twice in the first recipe
//!
//! assert_eq!(vectorizer.feature_names()[..3], ["crock", "pot", "pasta"]);
//! ```
//!
//! # Modules
//!
//! - [`text`]: Tokenization and count vectorization
//! - [`error`]: Error type for persistence and configuration parsing

pub mod error;
pub mod prelude;
pub mod text;

pub use error::{Result, WordbagError};
pub use text::vectorize::{CountVectorizer, Vocabulary};
