//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use wordbag::prelude::*;
//! ```

pub use crate::error::WordbagError;
pub use crate::text::tokenize::WhitespaceTokenizer;
pub use crate::text::vectorize::{CountMatrix, CountVectorizer, VectorizerConfig, Vocabulary};
pub use crate::text::Tokenizer;
