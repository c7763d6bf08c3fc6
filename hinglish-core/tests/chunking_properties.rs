//! Property tests for the chunker invariants

use hinglish_core::{Chunker, CutKind};
use proptest::prelude::*;

fn non_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn mixed_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z .!?,\n]{0,400}",
        "[कखगनमसतेहैआप् .!?।]{0,300}",
        "\\PC{0,200}",
    ]
}

proptest! {
    #[test]
    fn chunks_never_exceed_limit(text in mixed_text(), max in 1usize..300) {
        let set = Chunker::new(max).unwrap().chunk(&text);
        for chunk in &set {
            prop_assert!(chunk.char_len() <= max);
            prop_assert!(chunk.char_len() > 0);
        }
    }

    #[test]
    fn chunks_are_trimmed(text in mixed_text(), max in 1usize..300) {
        let set = Chunker::new(max).unwrap().chunk(&text);
        for chunk in &set {
            prop_assert_eq!(chunk.text.trim(), chunk.text.as_str());
        }
    }

    #[test]
    fn non_whitespace_content_is_preserved(text in mixed_text(), max in 1usize..300) {
        let set = Chunker::new(max).unwrap().chunk(&text);
        prop_assert_eq!(non_whitespace(&set.join("")), non_whitespace(&text));
    }

    #[test]
    fn spans_are_contiguous_and_cover_text(text in mixed_text(), max in 1usize..300) {
        let set = Chunker::new(max).unwrap().chunk(&text);
        let char_count = text.chars().count();

        if set.is_empty() {
            prop_assert!(text.trim().is_empty());
        } else {
            prop_assert_eq!(set.get(0).unwrap().start, 0);
            prop_assert_eq!(set.iter().last().unwrap().end, char_count);
            for pair in set.as_slice().windows(2) {
                prop_assert_eq!(pair[0].end, pair[1].start);
            }
        }
    }

    #[test]
    fn only_last_chunk_reaches_end(text in mixed_text(), max in 1usize..300) {
        let set = Chunker::new(max).unwrap().chunk(&text);
        let n = set.len();
        for (i, chunk) in set.iter().enumerate() {
            if i + 1 < n {
                prop_assert_ne!(chunk.cut, CutKind::End);
            }
        }
    }

    #[test]
    fn short_text_is_single_chunk(text in "[a-z][a-z .]{0,48}[a-z]") {
        let set = Chunker::new(50).unwrap().chunk(&text);
        prop_assert_eq!(set.len(), 1);
        prop_assert_eq!(set.get(0).unwrap().text.as_str(), text.as_str());
    }
}
