// crates/shared-kernel/tests/serde_roundtrip.rs
use serde::{Deserialize, Serialize};
use text_stats_shared_kernel::{CharCount, WordCount};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    words: WordCount,
    characters: CharCount,
}

#[test]
fn counts_serialize_as_plain_numbers() {
    let original = Wrapper { words: WordCount::from(42), characters: CharCount::from(2048) };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"words":42,"characters":2048}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}
