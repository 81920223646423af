//! Error types for wordbag operations.
//!
//! Fitting and transforming never fail; errors only arise when a
//! vectorizer or its configuration crosses a file or text boundary.

use std::fmt;

/// Main error type for wordbag operations.
///
/// # Examples
///
/// ```
/// use wordbag::error::WordbagError;
///
/// let err = WordbagError::InvalidVocabulary {
///     message: "duplicate token \"pasta\" at index 3".to_string(),
/// };
/// assert!(err.to_string().contains("pasta"));
/// ```
#[derive(Debug)]
pub enum WordbagError {
    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Encoding or decoding a persisted vectorizer or config failed.
    FormatError {
        /// Error description
        message: String,
    },

    /// A decoded vocabulary breaks the no-duplicates invariant.
    InvalidVocabulary {
        /// Error description
        message: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for WordbagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordbagError::Io(e) => write!(f, "I/O error: {e}"),
            WordbagError::FormatError { message } => {
                write!(f, "Invalid vectorizer format: {message}")
            }
            WordbagError::InvalidVocabulary { message } => {
                write!(f, "Invalid vocabulary: {message}")
            }
            WordbagError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for WordbagError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordbagError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WordbagError {
    fn from(err: std::io::Error) -> Self {
        WordbagError::Io(err)
    }
}

impl From<&str> for WordbagError {
    fn from(msg: &str) -> Self {
        WordbagError::Other(msg.to_string())
    }
}

impl From<String> for WordbagError {
    fn from(msg: String) -> Self {
        WordbagError::Other(msg)
    }
}

impl WordbagError {
    /// Create a format error with descriptive context.
    #[must_use]
    pub fn format(context: &str, cause: impl fmt::Display) -> Self {
        Self::FormatError {
            message: format!("{context}: {cause}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, WordbagError>;
