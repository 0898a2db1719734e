//! GPT-2 family encodings the explorer can load.
//!
//! Only encodings whose IDs fit in 16 bits are listed; the bit grid has no
//! room for anything wider.

use crate::embedded;

/// Pre-tokenization regex shared by `r50k_base` and `p50k_base`.
const GPT2_PAT: &str =
    r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+";

const ENDOFTEXT: &[(&str, u32)] = &[("<|endoftext|>", 50256)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    P50kBase,
    R50kBase,
}

impl Encoding {
    pub const ALL: &'static [Encoding] = &[Encoding::P50kBase, Encoding::R50kBase];

    pub fn name(self) -> &'static str {
        match self {
            Encoding::P50kBase => "p50k_base",
            Encoding::R50kBase => "r50k_base",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Encoding::P50kBase | Encoding::R50kBase => GPT2_PAT,
        }
    }

    pub fn special_tokens(self) -> &'static [(&'static str, u32)] {
        match self {
            Encoding::P50kBase | Encoding::R50kBase => ENDOFTEXT,
        }
    }

    /// File name looked up in `TOKEN_EXPLORER_MODELS` at build time.
    pub fn file_name(self) -> &'static str {
        match self {
            Encoding::P50kBase => "p50k_base.tiktoken",
            Encoding::R50kBase => "r50k_base.tiktoken",
        }
    }

    /// Frozen rank table compiled in by `build.rs`, if one was available.
    pub fn embedded(self) -> Option<&'static [u8]> {
        match self {
            Encoding::P50kBase => embedded::P50K_BASE,
            Encoding::R50kBase => embedded::R50K_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &enc in Encoding::ALL {
            assert_eq!(Encoding::from_name(enc.name()), Some(enc));
        }
        assert_eq!(Encoding::from_name("cl100k_base"), None);
        assert_eq!(Encoding::default(), Encoding::P50kBase);
    }

    #[test]
    fn file_names_match_build_script() {
        let build_rs = include_str!("../build.rs");
        for &enc in Encoding::ALL {
            assert_eq!(enc.file_name(), format!("{}.tiktoken", enc.name()));
            let entry = format!("({:?}, {:?})", enc.name().to_uppercase(), enc.file_name());
            assert!(build_rs.contains(&entry), "build.rs is missing {}", entry);
        }
    }

    #[test]
    fn pattern_compiles() {
        for &enc in Encoding::ALL {
            assert!(fancy_regex::Regex::new(enc.pattern()).is_ok());
        }
    }
}
