//! Reader for tiktoken rank files: one `<base64 bytes> <rank>` pair per line.
//!
//! Shared with `build.rs`; errors are plain messages so the build script can
//! panic with them directly.

use base64::Engine;

pub fn parse_ranks(data: &str) -> Result<Vec<(Vec<u8>, u32)>, String> {
    let engine = base64::engine::general_purpose::STANDARD;
    let mut entries: Vec<(Vec<u8>, u32)> = Vec::with_capacity(64_000);

    for (lineno, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(2, ' ');
        let token_b64 = parts.next().unwrap_or("");
        let rank_str = parts.next().unwrap_or("").trim();

        let bytes = engine
            .decode(token_b64)
            .map_err(|e| format!("line {}: bad base64 token: {}", lineno + 1, e))?;
        if bytes.is_empty() {
            return Err(format!("line {}: empty token", lineno + 1));
        }
        let rank = rank_str
            .parse::<u32>()
            .map_err(|_| format!("line {}: bad rank '{}'", lineno + 1, rank_str))?;
        entries.push((bytes, rank));
    }

    if entries.is_empty() {
        return Err("rank file contains no tokens".to_string());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lines_and_skips_blanks() {
        let ranks = parse_ranks("IQ== 0\n\nIg== 1\nVGVzdA== 258\n").unwrap();
        assert_eq!(
            ranks,
            vec![(b"!".to_vec(), 0), (b"\"".to_vec(), 1), (b"Test".to_vec(), 258)]
        );
    }

    #[test]
    fn reports_the_offending_line() {
        let err = parse_ranks("IQ== 0\nIg== x\n").unwrap_err();
        assert!(err.starts_with("line 2:"), "{err}");

        let err = parse_ranks("IQ== 0\n%%% 1\n").unwrap_err();
        assert!(err.contains("base64"), "{err}");
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(parse_ranks("\n\n").is_err());
    }
}
