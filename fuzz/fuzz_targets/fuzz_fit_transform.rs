#![no_main]

use libfuzzer_sys::fuzz_target;
use wordbag::text::vectorize::CountVectorizer;

fuzz_target!(|data: &[u8]| {
    // First byte picks settings, the rest is split into documents on 0x00
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let docs: Vec<&str> = text.split('\0').collect();
    let (first, second) = docs.split_at(docs.len() / 2);

    let mut vectorizer = CountVectorizer::new().with_lowercase(flags & 1 == 1);
    vectorizer.fit_transform(first, true);
    let width = {
        let matrix = vectorizer.fit_transform(second, flags & 2 == 2);
        assert_eq!(matrix.len(), second.len());
        matrix.first().map(Vec::len)
    };
    if let Some(width) = width {
        assert_eq!(width, vectorizer.vocabulary_size());
    }
});
