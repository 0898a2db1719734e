//! Explorer state: the input text, its tokens and segments, and what the bit
//! grid is currently inspecting.
//!
//! All transitions are plain method calls that run to completion; the UI
//! layer calls them from its event handlers and renders the derived views
//! ([`Explorer::bits`], [`Explorer::label`], [`Explorer::chip_text`]).

use crate::tiktoken::TiktokenTokenizer;
use std::borrow::Cow;
use std::fmt;

/// Width of the bit grid.
pub const BITS: usize = 16;

/// Label shown when nothing is being inspected.
pub const PLACEHOLDER: &str = "Click a square below or one of the segments above";

/// A 16-bit token ID as shown in the grid. Bit index 0 is the most
/// significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bits(u16);

impl Bits {
    pub const ZERO: Bits = Bits(0);

    pub fn new(value: u16) -> Self {
        Bits(value)
    }

    pub fn token(self) -> u32 {
        self.0 as u32
    }

    fn mask(index: usize) -> u16 {
        1 << (BITS - 1 - index)
    }

    /// State of the bit at `index`, or `false` past the last bit.
    pub fn get(self, index: usize) -> bool {
        index < BITS && self.0 & Self::mask(index) != 0
    }

    /// Copy with the bit at `index` flipped; `None` if `index` is out of range.
    pub fn flipped(self, index: usize) -> Option<Bits> {
        (index < BITS).then(|| Bits(self.0 ^ Self::mask(index)))
    }
}

impl fmt::Display for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016b}", self.0)
    }
}

/// What the bit grid shows. Selecting a token and overriding its bits are
/// mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inspection {
    #[default]
    Idle,
    /// Index into the token sequence.
    Selected(usize),
    /// User-edited token ID built by flipping bits.
    Overridden(Bits),
}

pub struct Explorer<'t> {
    tokenizer: &'t TiktokenTokenizer,
    input: String,
    tokens: Vec<u32>,
    segments: Vec<String>,
    inspection: Inspection,
}

impl<'t> Explorer<'t> {
    pub fn new(tokenizer: &'t TiktokenTokenizer, input: impl Into<String>) -> Self {
        let mut explorer = Explorer {
            tokenizer,
            input: String::new(),
            tokens: Vec::new(),
            segments: Vec::new(),
            inspection: Inspection::Idle,
        };
        explorer.set_input(input);
        explorer
    }

    /// Replaces the input, re-tokenizes it and drops any inspection.
    pub fn set_input(&mut self, input: impl Into<String>) {
        let input = input.into();
        let tokens = self.tokenizer.encode(&input);
        let segments: Vec<String> = tokens
            .iter()
            .map(|&t| self.tokenizer.decode_lossy(&[t]).unwrap_or_default())
            .collect();

        self.input = input;
        self.tokens = tokens;
        self.segments = segments;
        self.inspection = Inspection::Idle;
    }

    /// Selects the token at `index`, or deselects it if it was already
    /// selected. Out-of-range indices are ignored.
    pub fn click_token(&mut self, index: usize) {
        if index >= self.tokens.len() {
            return;
        }
        self.inspection = match self.inspection {
            Inspection::Selected(current) if current == index => Inspection::Idle,
            _ => Inspection::Selected(index),
        };
    }

    /// Flips one bit of the inspected ID. The result is kept only if it
    /// decodes to non-empty text; otherwise the state is left untouched.
    /// Returns whether the flip was applied.
    pub fn click_bit(&mut self, index: usize) -> bool {
        let Some(bits) = self.bits().flipped(index) else {
            return false;
        };
        match self.tokenizer.decode_lossy(&[bits.token()]) {
            Ok(text) if !text.is_empty() => {
                self.inspection = Inspection::Overridden(bits);
                true
            }
            _ => false,
        }
    }

    /// Bits shown in the grid: the override, else the selected token, else
    /// all zeros.
    pub fn bits(&self) -> Bits {
        match self.inspection {
            Inspection::Overridden(bits) => bits,
            // The tokenizer refuses vocabularies wider than 16 bits.
            Inspection::Selected(index) => Bits::new(self.tokens[index] as u16),
            Inspection::Idle => Bits::ZERO,
        }
    }

    pub fn label(&self) -> String {
        match self.inspection {
            Inspection::Overridden(bits) => {
                let id = bits.token();
                match self.tokenizer.decode_lossy(&[id]) {
                    Ok(text) => format!("{} ({})", text, id),
                    Err(_) => format!("Invalid token ({})", id),
                }
            }
            Inspection::Selected(index) => {
                format!("{} ({})", self.segments[index], self.tokens[index])
            }
            Inspection::Idle => PLACEHOLDER.to_string(),
        }
    }

    /// Text of chip `index`: its token number while selected, its segment
    /// otherwise.
    pub fn chip_text(&self, index: usize) -> Cow<'_, str> {
        if self.selected() == Some(index) {
            Cow::Owned(self.tokens[index].to_string())
        } else {
            Cow::Borrowed(self.segments[index].as_str())
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self.inspection {
            Inspection::Selected(index) => Some(index),
            _ => None,
        }
    }

    pub fn inspection(&self) -> Inspection {
        self.inspection
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn tokens(&self) -> &[u32] {
        &self.tokens
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn tokenizer(&self) -> &'t TiktokenTokenizer {
        self.tokenizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_render_msb_first() {
        assert_eq!(Bits::new(523).to_string(), "0000001000001011");
        assert_eq!(Bits::ZERO.to_string(), "0".repeat(16));
        assert!(Bits::new(0x8000).get(0));
        assert!(Bits::new(1).get(15));
        assert!(!Bits::new(1).get(16));
    }

    #[test]
    fn flipping_is_an_involution() {
        let b = Bits::new(523);
        for i in 0..BITS {
            let once = b.flipped(i).unwrap();
            assert_ne!(once, b);
            assert_eq!(once.flipped(i), Some(b));
        }
        assert_eq!(b.flipped(BITS), None);
        assert_eq!(Bits::ZERO.flipped(15), Some(Bits::new(1)));
        assert_eq!(Bits::ZERO.flipped(0), Some(Bits::new(0x8000)));
    }

    #[test]
    fn undecodable_override_renders_as_invalid() {
        use crate::encoding::Encoding;
        use base64::Engine;

        let engine = base64::engine::general_purpose::STANDARD;
        let ranks: String = (0..=255u8)
            .map(|b| format!("{} {}\n", engine.encode([b]), b))
            .collect();
        let tok = TiktokenTokenizer::from_tiktoken(Encoding::P50kBase, &ranks).unwrap();

        let mut explorer = Explorer::new(&tok, "hi");
        explorer.inspection = Inspection::Overridden(Bits::new(40_000));
        assert_eq!(explorer.label(), "Invalid token (40000)");
        assert_eq!(explorer.bits().to_string(), "1001110001000000");
    }
}
