use super::Vocabulary;
use crate::error::{Result, WordbagError};
use crate::text::tokenize::WhitespaceTokenizer;
use crate::text::Tokenizer;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, trace};

/// Dense document-term matrix: one row per document, one column per token.
pub type CountMatrix = Vec<Vec<usize>>;

/// Occurrences of each token within a single document.
pub type TermCounts = HashMap<String, usize>;

/// Construction-time settings for [`CountVectorizer`].
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use wordbag::text::vectorize::VectorizerConfig;
///
/// let config = VectorizerConfig::from_json(r#"{"lowercase": false}"#)
///     .expect("valid config");
/// assert!(!config.lowercase);
///
/// let config = VectorizerConfig::from_json("{}").expect("valid config");
/// assert!(config.lowercase);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Case-fold every document before tokenization.
    pub lowercase: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self { lowercase: true }
    }
}

impl VectorizerConfig {
    /// Default configuration (lowercasing on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to convert documents to lowercase.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`WordbagError::FormatError`] if `json` is malformed or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| WordbagError::format("vectorizer config", e))
    }
}

/// Count vectorizer with an incrementally grown vocabulary.
///
/// Converts batches of documents into a matrix of raw token counts. The
/// vocabulary persists between calls: `fit_transform(docs, false)` appends
/// unseen tokens as new columns, `fit_transform(docs, true)` starts over.
///
/// Not internally synchronized. Share across threads only behind a lock
/// held for the whole fit/transform sequence.
///
/// # Examples
///
/// ```
/// use wordbag::text::vectorize::CountVectorizer;
///
/// let mut vectorizer = CountVectorizer::new().with_lowercase(false);
/// let matrix = vectorizer.fit_transform(&["Pasta pasta"], true);
/// assert_eq!(matrix, &[vec![1, 1]]);
/// assert_eq!(vectorizer.feature_names(), &["Pasta", "pasta"]);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct CountVectorizer {
    config: VectorizerConfig,
    vocabulary: Vocabulary,
    /// Built from `config`; rebuilt on deserialize.
    #[serde(skip)]
    tokenizer: WhitespaceTokenizer,
    /// Matrix returned by the last `fit_transform`.
    #[serde(skip)]
    matrix: CountMatrix,
}

/// Persisted fields of [`CountVectorizer`], in serialization order.
#[derive(Deserialize)]
#[serde(rename = "CountVectorizer")]
struct VectorizerState {
    config: VectorizerConfig,
    vocabulary: Vocabulary,
}

impl<'de> Deserialize<'de> for CountVectorizer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let VectorizerState { config, vocabulary } = VectorizerState::deserialize(deserializer)?;
        let mut vectorizer = Self::from_config(config);
        vectorizer.vocabulary = vocabulary;
        Ok(vectorizer)
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountVectorizer {
    /// Create a new `CountVectorizer` that lowercases documents.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbag::text::vectorize::CountVectorizer;
    ///
    /// let vectorizer = CountVectorizer::new();
    /// assert!(vectorizer.lowercase());
    /// assert_eq!(vectorizer.vocabulary_size(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(VectorizerConfig::default())
    }

    /// Create a `CountVectorizer` from an explicit configuration.
    #[must_use]
    pub fn from_config(config: VectorizerConfig) -> Self {
        Self {
            config,
            vocabulary: Vocabulary::new(),
            tokenizer: WhitespaceTokenizer::new().with_lowercase(config.lowercase),
            matrix: Vec::new(),
        }
    }

    /// Set whether to convert documents to lowercase.
    ///
    /// Meant for construction. Anything already fitted is discarded, since
    /// tokens normalized under the old setting would no longer match.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.config.lowercase = lowercase;
        self.tokenizer = self.tokenizer.with_lowercase(lowercase);
        self.reset();
        self
    }

    /// The configuration this vectorizer was built with.
    #[must_use]
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Whether documents are lowercased before tokenization.
    #[must_use]
    pub fn lowercase(&self) -> bool {
        self.config.lowercase
    }

    /// Split a document into tokens using this vectorizer's settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbag::text::vectorize::CountVectorizer;
    ///
    /// let vectorizer = CountVectorizer::new();
    /// assert_eq!(vectorizer.tokenize("  Never boil\tPASTA "), vec!["never", "boil", "pasta"]);
    /// assert!(vectorizer.tokenize(" \n ").is_empty());
    /// ```
    #[must_use]
    pub fn tokenize(&self, document: &str) -> Vec<String> {
        self.tokenizer.tokenize(document)
    }

    /// Learn vocabulary from documents.
    ///
    /// With `reset` the vocabulary is cleared first; otherwise new tokens
    /// are appended after the existing ones.
    ///
    /// Empty batches and blank documents add no tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbag::text::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// vectorizer.fit(&["cat dog", "dog bird"], true);
    /// assert_eq!(vectorizer.feature_names(), &["cat", "dog", "bird"]);
    ///
    /// vectorizer.fit(&["fish cat"], false);
    /// assert_eq!(vectorizer.feature_names(), &["cat", "dog", "bird", "fish"]);
    /// ```
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S], reset: bool) {
        self.fit_counts(documents, reset);
    }

    /// Grow the vocabulary and return each document's term counts.
    fn fit_counts<S: AsRef<str>>(&mut self, documents: &[S], reset: bool) -> Vec<TermCounts> {
        if reset {
            self.vocabulary.clear();
        }
        let before = self.vocabulary.len();

        let mut counts = Vec::with_capacity(documents.len());
        for doc in documents {
            let tokens = self.tokenizer.tokenize(doc.as_ref());
            for token in &tokens {
                self.vocabulary.insert(token);
            }
            counts.push(count_terms(tokens));
        }

        debug!(
            documents = documents.len(),
            reset,
            new_terms = self.vocabulary.len() - before,
            vocabulary_size = self.vocabulary.len(),
            "fitted batch"
        );
        counts
    }

    /// Learn vocabulary from documents and return their count matrix.
    ///
    /// Every row has the vocabulary width *after* this batch was fitted.
    /// The result replaces the previous [`matrix`](Self::matrix).
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbag::text::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// vectorizer.fit_transform(&["boil pasta"], true);
    ///
    /// let matrix = vectorizer.fit_transform(&["pasta to taste", ""], false);
    /// assert_eq!(matrix, &[vec![0, 1, 1, 1], vec![0, 0, 0, 0]]);
    ///
    /// assert!(vectorizer.fit_transform(&[] as &[&str], false).is_empty());
    /// assert_eq!(vectorizer.vocabulary_size(), 4);
    /// ```
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
        reset: bool,
    ) -> &[Vec<usize>] {
        let counts = self.fit_counts(documents, reset);

        let width = self.vocabulary.len();
        self.matrix = counts
            .iter()
            .map(|counts| count_row(&self.vocabulary, counts, width))
            .collect();

        &self.matrix
    }

    /// Count tokens of `documents` against the current vocabulary.
    ///
    /// The vocabulary is left untouched and tokens outside it are ignored.
    /// The returned matrix does not replace [`matrix`](Self::matrix).
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbag::text::vectorize::CountVectorizer;
    ///
    /// let mut vectorizer = CountVectorizer::new();
    /// vectorizer.fit(&["hello world"], true);
    ///
    /// let matrix = vectorizer.transform(&["world WORLD rust"]);
    /// assert_eq!(matrix, vec![vec![0, 2]]);
    /// assert_eq!(vectorizer.vocabulary_size(), 2);
    /// ```
    #[must_use]
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> CountMatrix {
        let width = self.vocabulary.len();
        documents
            .iter()
            .map(|doc| {
                let counts = count_terms(self.tokenizer.tokenize(doc.as_ref()));
                count_row(&self.vocabulary, &counts, width)
            })
            .collect()
    }

    /// Vocabulary tokens in column order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        self.vocabulary.as_slice()
    }

    /// The learned vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of distinct tokens learned.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column index of `token`. The token must already be normalized.
    #[must_use]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.vocabulary.get(token)
    }

    /// Matrix produced by the most recent `fit_transform`.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Forget the vocabulary and current matrix.
    pub fn reset(&mut self) {
        trace!(vocabulary_size = self.vocabulary.len(), "resetting vectorizer");
        self.vocabulary.clear();
        self.matrix.clear();
    }

    /// Encode configuration and vocabulary with bincode.
    ///
    /// # Errors
    ///
    /// Returns [`WordbagError::FormatError`] if encoding fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| WordbagError::format("vectorizer serialization", e))
    }

    /// Decode a vectorizer written by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`WordbagError::FormatError`] for malformed bytes, including
    /// a vocabulary with duplicate tokens.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes)
            .map_err(|e| WordbagError::format("vectorizer deserialization", e))
    }

    /// Save configuration and vocabulary to a binary file.
    ///
    /// The current matrix is not saved.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        debug!(
            path = %path.as_ref().display(),
            bytes = bytes.len(),
            vocabulary_size = self.vocabulary.len(),
            "saved vectorizer"
        );
        Ok(())
    }

    /// Load a vectorizer saved with [`save`](Self::save).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not decode.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let vectorizer = Self::from_bytes(&bytes)?;
        debug!(
            path = %path.as_ref().display(),
            vocabulary_size = vectorizer.vocabulary.len(),
            "loaded vectorizer"
        );
        Ok(vectorizer)
    }
}

fn count_terms(tokens: Vec<String>) -> TermCounts {
    let mut counts = TermCounts::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

fn count_row(vocabulary: &Vocabulary, counts: &TermCounts, width: usize) -> Vec<usize> {
    let mut row = vec![0; width];
    for (token, &count) in counts {
        if let Some(idx) = vocabulary.get(token) {
            row[idx] = count;
        }
    }
    row
}
