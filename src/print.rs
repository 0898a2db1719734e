//! Non-interactive output for `--print`.
//!
//! Each input becomes one block of `id binary segment` rows, blocks separated
//! by a blank line, or one JSON object per line with `--json`.

use crate::explorer::Explorer;
use crate::tiktoken::TiktokenTokenizer;
use rayon::prelude::*;
use std::fmt::Write;

pub fn render_print(tok: &TiktokenTokenizer, inputs: Vec<String>, json: bool) -> String {
    let results: Vec<Explorer> = if inputs.len() > 1 {
        inputs.into_par_iter().map(|t| Explorer::new(tok, t)).collect()
    } else {
        inputs.into_iter().map(|t| Explorer::new(tok, t)).collect()
    };

    let mut out = String::new();
    for (n, r) in results.iter().enumerate() {
        if json {
            let obj = serde_json::json!({
                "encoding": tok.encoding().name(),
                "text": r.input(),
                "tokens": r.tokens(),
                "segments": r.segments(),
            });
            let _ = writeln!(out, "{}", obj);
            continue;
        }
        if n > 0 {
            out.push('\n');
        }
        for (id, segment) in r.tokens().iter().zip(r.segments()) {
            let _ = writeln!(out, "{:>8} {:016b} {:?}", id, id, segment);
        }
    }
    out
}
