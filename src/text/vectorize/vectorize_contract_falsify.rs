//! Count vectorization contract tests.
//!
//! Each test tries to break one documented property of `CountVectorizer`:
//!   - VEC-001: every row is as wide as the vocabulary after the call
//!   - VEC-002: vocabulary order is first-occurrence order
//!   - VEC-003: each cell equals the token's occurrence count
//!   - VEC-004: same input, same output
//!   - VEC-005: reset clears, non-reset extends
//!   - VEC-006: the vocabulary never holds duplicates

pub(crate) use super::*;
use crate::text::tokenize::WhitespaceTokenizer;
use crate::text::Tokenizer;

const CORPUS: [&str; 4] = [
    "the cat sat on the mat",
    "The dog sat on the log",
    "",
    "cat  dog\tcat\nbird",
];

// ============================================================================
// FALSIFY-VEC-001: Row width
// Contract: every row of fit_transform has width == vocabulary_size()
// ============================================================================

#[test]
fn falsify_vec_001_row_width() {
    let mut vectorizer = CountVectorizer::new();
    let matrix = vectorizer.fit_transform(&CORPUS, true).to_vec();

    assert_eq!(matrix.len(), CORPUS.len(), "FALSIFIED VEC-001: row count");
    for (i, row) in matrix.iter().enumerate() {
        assert_eq!(
            row.len(),
            vectorizer.vocabulary_size(),
            "FALSIFIED VEC-001: row {i} width {} != vocab_size {}",
            row.len(),
            vectorizer.vocabulary_size()
        );
    }
}

#[test]
fn falsify_vec_001_row_width_after_growth() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit_transform(&CORPUS[..1], true);
    let matrix = vectorizer
        .fit_transform(&["cat", "zebra yak", "mat"], false)
        .to_vec();

    let width = vectorizer.vocabulary_size();
    assert!(
        matrix.iter().all(|row| row.len() == width),
        "FALSIFIED VEC-001: rows built before new tokens must be padded to {width}"
    );
}

// ============================================================================
// FALSIFY-VEC-002: First-occurrence order
// Contract: feature_names() lists tokens in the order they were first seen
// ============================================================================

#[test]
fn falsify_vec_002_first_occurrence_order() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit(&CORPUS, true);

    let tokenizer = WhitespaceTokenizer::new().with_lowercase(true);
    let mut expected: Vec<String> = Vec::new();
    for doc in CORPUS {
        for token in tokenizer.tokenize(doc) {
            if !expected.contains(&token) {
                expected.push(token);
            }
        }
    }

    assert_eq!(
        vectorizer.feature_names(),
        expected.as_slice(),
        "FALSIFIED VEC-002: vocabulary order differs from first-occurrence order"
    );
}

// ============================================================================
// FALSIFY-VEC-003: Count correctness
// Contract: row[index_of(t)] == occurrences of t in the tokenized document
// ============================================================================

#[test]
fn falsify_vec_003_cell_counts() {
    let mut vectorizer = CountVectorizer::new();
    let matrix = vectorizer.fit_transform(&CORPUS, true).to_vec();

    for (doc, row) in CORPUS.iter().zip(&matrix) {
        let tokens = vectorizer.tokenize(doc);
        for (idx, token) in vectorizer.feature_names().iter().enumerate() {
            let expected = tokens.iter().filter(|t| *t == token).count();
            assert_eq!(
                row[idx], expected,
                "FALSIFIED VEC-003: count of {token:?} in {doc:?}"
            );
        }
    }
}

#[test]
fn falsify_vec_003_row_sum_equals_token_count() {
    let mut vectorizer = CountVectorizer::new();
    let matrix = vectorizer.fit_transform(&CORPUS, true).to_vec();

    for (doc, row) in CORPUS.iter().zip(&matrix) {
        assert_eq!(
            row.iter().sum::<usize>(),
            vectorizer.tokenize(doc).len(),
            "FALSIFIED VEC-003: row sum for {doc:?}"
        );
    }
}

// ============================================================================
// FALSIFY-VEC-004: Determinism
// ============================================================================

#[test]
fn falsify_vec_004_deterministic() {
    let mut a = CountVectorizer::new();
    let mut b = CountVectorizer::new();
    let ma = a.fit_transform(&CORPUS, true).to_vec();
    let mb = b.fit_transform(&CORPUS, true).to_vec();

    assert_eq!(ma, mb, "FALSIFIED VEC-004: matrices differ");
    assert_eq!(
        a.feature_names(),
        b.feature_names(),
        "FALSIFIED VEC-004: vocabularies differ"
    );

    let again = a.fit_transform(&CORPUS, true).to_vec();
    assert_eq!(ma, again, "FALSIFIED VEC-004: refit on same instance differs");
}

// ============================================================================
// FALSIFY-VEC-005: Reset semantics
// ============================================================================

#[test]
fn falsify_vec_005_reset_vs_extend() {
    let mut extended = CountVectorizer::new();
    extended.fit(&CORPUS[..2], true);
    let prefix = extended.feature_names().to_vec();
    extended.fit(&["owl cat"], false);

    assert_eq!(
        &extended.feature_names()[..prefix.len()],
        prefix.as_slice(),
        "FALSIFIED VEC-005: non-reset fit reordered existing tokens"
    );
    assert_eq!(
        extended.feature_names().last().map(String::as_str),
        Some("owl")
    );

    let mut fresh = CountVectorizer::new();
    fresh.fit(&CORPUS[..2], true);
    fresh.fit(&["owl cat"], true);
    assert_eq!(
        fresh.feature_names(),
        &["owl", "cat"],
        "FALSIFIED VEC-005: reset fit kept old tokens"
    );
}

#[test]
fn falsify_vec_005_empty_refit_is_noop() {
    let mut vectorizer = CountVectorizer::new();
    vectorizer.fit_transform(&CORPUS, true);
    let before = vectorizer.feature_names().to_vec();

    let empty: [&str; 0] = [];
    let matrix = vectorizer.fit_transform(&empty, false);
    assert!(matrix.is_empty(), "FALSIFIED VEC-005: empty refit produced rows");
    assert_eq!(vectorizer.feature_names(), before.as_slice());
}

// ============================================================================
// FALSIFY-VEC-006: Uniqueness
// ============================================================================

#[test]
fn falsify_vec_006_no_duplicate_tokens() {
    let mut vectorizer = CountVectorizer::new().with_lowercase(false);
    vectorizer.fit(&CORPUS, true);
    vectorizer.fit(&CORPUS, false);

    let names = vectorizer.feature_names();
    let unique: std::collections::HashSet<&String> = names.iter().collect();
    assert_eq!(
        unique.len(),
        names.len(),
        "FALSIFIED VEC-006: duplicate tokens in {names:?}"
    );
    for (idx, name) in names.iter().enumerate() {
        assert_eq!(vectorizer.index_of(name), Some(idx));
    }
}
