//! # tokenexplorer
//!
//! Tokenizes a line of text with a GPT-2 family byte-level BPE and lets you
//! poke at the result: click a segment to see its token number, flip bits of
//! a 16-bit token ID and see which text the mutated ID decodes to.
//!
//! ```text
//! text → regex pre-tokenizer → BPE (frozen rank table) → tokens → Explorer → TUI
//! ```
//!
//! - [`tiktoken`] — encode/decode against a frozen rank table
//! - [`explorer`] — the selection/override state and its derived views
//! - [`print`] — row and JSON output for `--print`
//! - [`ui`] — ratatui front end; not part of the stable library API

pub mod encoding;
pub mod error;
pub mod explorer;
pub mod frozen;
pub mod print;
pub mod ranks;
pub mod tiktoken;
pub mod ui;

mod embedded {
    include!(concat!(env!("OUT_DIR"), "/embedded_models.rs"));
}

pub use encoding::Encoding;
pub use error::TokenizerError;
pub use explorer::{Bits, Explorer, Inspection};
pub use tiktoken::TiktokenTokenizer;
