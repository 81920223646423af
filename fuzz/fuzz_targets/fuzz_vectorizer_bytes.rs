#![no_main]

use libfuzzer_sys::fuzz_target;
use wordbag::text::vectorize::CountVectorizer;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes should return an error, never panic
    if let Ok(mut vectorizer) = CountVectorizer::from_bytes(data) {
        let names = vectorizer.feature_names().to_vec();
        for (idx, name) in names.iter().enumerate() {
            assert_eq!(vectorizer.index_of(name), Some(idx));
        }
        vectorizer.fit_transform(&["fuzz"], false);
    }
});
