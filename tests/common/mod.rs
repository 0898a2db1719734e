// Small tiktoken-style vocabulary shared by the integration tests.
//
// Ranks 0..=255 are the single bytes in byte order, followed by just enough
// merges to tokenize "Testy testy woo" into Test|y| test|y| woo, plus "!?"
// at 523 for a token with a sparse bit pattern.

use base64::Engine;
use tokenexplorer::{Encoding, TiktokenTokenizer};

pub const MERGES: &[(&str, u32)] = &[
    ("Te", 256),
    ("st", 257),
    ("Test", 258),
    (" t", 259),
    (" te", 260),
    (" test", 261),
    (" w", 262),
    ("oo", 263),
    (" woo", 264),
    ("!?", 523),
];

pub const SAMPLE: &str = "Testy testy woo";

pub fn rank_file() -> String {
    let engine = base64::engine::general_purpose::STANDARD;
    let mut text = String::new();
    for b in 0..=255u8 {
        text.push_str(&format!("{} {}\n", engine.encode([b]), b));
    }
    for (token, rank) in MERGES {
        text.push_str(&format!("{} {}\n", engine.encode(token.as_bytes()), rank));
    }
    text
}

pub fn tokenizer() -> TiktokenTokenizer {
    TiktokenTokenizer::from_tiktoken(Encoding::P50kBase, &rank_file())
        .expect("fixture vocabulary loads")
}
