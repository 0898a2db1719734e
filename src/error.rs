//! Tokenizer error type.

use crate::encoding::Encoding;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// Token ID not present in the vocabulary or the special tokens.
    UnknownToken(u32),

    /// Rank file could not be parsed.
    InvalidVocabulary(String),

    /// A single-byte token is absent, so some input could not be encoded.
    MissingByte(u8),

    /// Token ID does not fit in the 16-bit explorer grid.
    TokenTooWide(u32),

    /// Pre-tokenizer pattern failed to compile.
    Pattern(String),

    /// No vocabulary was embedded for the encoding.
    NotEmbedded(Encoding),
}

impl fmt::Display for TokenizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerError::UnknownToken(id) => write!(f, "unknown token id {}", id),
            TokenizerError::InvalidVocabulary(msg) => write!(f, "invalid vocabulary: {}", msg),
            TokenizerError::MissingByte(b) => {
                write!(f, "vocabulary has no token for byte 0x{:02X}", b)
            }
            TokenizerError::TokenTooWide(id) => {
                write!(f, "token id {} does not fit in 16 bits", id)
            }
            TokenizerError::Pattern(msg) => write!(f, "invalid pre-tokenizer pattern: {}", msg),
            TokenizerError::NotEmbedded(encoding) => write!(
                f,
                "vocabulary not embedded (build with TOKEN_EXPLORER_MODELS pointing at a \
                 directory containing {}, or pass --vocab)",
                encoding.file_name()
            ),
        }
    }
}

impl std::error::Error for TokenizerError {}
