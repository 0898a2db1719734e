/// OpenAI tiktoken-compatible tokenizer for the GPT-2 family encodings.
///
/// Rank lookup goes through a frozen hash table, either compiled in by
/// build.rs or built at startup from a `.tiktoken` file. In tiktoken the rank
/// of a byte sequence is also its token ID.
///
/// Tokenization: regex pre-tokenize → byte-level BPE using rank lookup.
/// BPE merges use a priority queue + linked-list skip structure for O(n log n).
use crate::encoding::Encoding;
use crate::error::TokenizerError;
use crate::frozen;
use crate::ranks;
use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

pub struct TiktokenTokenizer {
    encoding: Encoding,
    regex: fancy_regex::Regex,
    data: Cow<'static, [u8]>,
    // rank -> byte range of the key inside `data`
    decoder: Vec<Option<(usize, usize)>>,
}

impl TiktokenTokenizer {
    pub fn from_embedded(encoding: Encoding) -> Result<Self, TokenizerError> {
        let data = encoding
            .embedded()
            .ok_or(TokenizerError::NotEmbedded(encoding))?;
        Self::new(encoding, Cow::Borrowed(data))
    }

    /// Builds the rank table from the contents of a `.tiktoken` file.
    pub fn from_tiktoken(encoding: Encoding, text: &str) -> Result<Self, TokenizerError> {
        let entries = ranks::parse_ranks(text).map_err(TokenizerError::InvalidVocabulary)?;
        Self::new(encoding, Cow::Owned(frozen::build_map(&entries)))
    }

    fn new(encoding: Encoding, data: Cow<'static, [u8]>) -> Result<Self, TokenizerError> {
        let regex = fancy_regex::Regex::new(encoding.pattern())
            .map_err(|e| TokenizerError::Pattern(e.to_string()))?;

        // Every byte must be a token on its own, otherwise BPE can get stuck
        // with an unencodable part.
        for b in 0..=255u8 {
            if frozen::frozen_map_get(&data, &[b]).is_none() {
                return Err(TokenizerError::MissingByte(b));
            }
        }

        let entries = frozen::frozen_map_entries(&data);
        let max_id = entries
            .iter()
            .map(|&(_, _, rank)| rank)
            .chain(encoding.special_tokens().iter().map(|&(_, id)| id))
            .max()
            .unwrap_or(0);
        if max_id > u16::MAX as u32 {
            return Err(TokenizerError::TokenTooWide(max_id));
        }

        let mut decoder = vec![None; max_id as usize + 1];
        for (start, end, rank) in entries {
            decoder[rank as usize] = Some((start, end));
        }

        Ok(TiktokenTokenizer {
            encoding,
            regex,
            data,
            decoder,
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Number of distinct token IDs that decode, special tokens included.
    pub fn vocab_size(&self) -> usize {
        let ranks = self.decoder.iter().filter(|r| r.is_some()).count();
        let specials = self
            .encoding
            .special_tokens()
            .iter()
            .filter(|&&(_, id)| self.decoder[id as usize].is_none())
            .count();
        ranks + specials
    }

    /// Encodes `text` as ordinary text; special-token markup is not
    /// recognized.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let mut out = Vec::new();
        if text.is_empty() {
            return out;
        }
        for m in self.regex.find_iter(text) {
            let m = match m {
                Ok(m) => m,
                Err(_) => continue,
            };
            let piece = m.as_str().as_bytes();
            match frozen::frozen_map_get(&self.data, piece) {
                Some(rank) => out.push(rank),
                None => self.bpe_encode(piece, &mut out),
            }
        }
        out
    }

    /// Byte-level BPE merge using a priority queue + linked-list skip
    /// structure. Appends the ranks of the surviving parts to `out`.
    fn bpe_encode(&self, piece: &[u8], out: &mut Vec<u32>) {
        let n = piece.len();
        if n == 0 {
            return;
        }
        let table: &[u8] = &self.data;

        // Each part is a [start, end) byte range into `piece`.
        let mut parts: Vec<(usize, usize)> = (0..n).map(|i| (i, i + 1)).collect();

        // Linked list for O(1) neighbor traversal after merges.
        let mut next: Vec<usize> = (1..=n).collect();
        let mut prev: Vec<usize> = (0..n).map(|i| if i == 0 { usize::MAX } else { i - 1 }).collect();
        let mut alive = vec![true; n];

        // Generation counters to cheaply invalidate stale heap entries.
        let mut gen: Vec<u32> = vec![0; n];

        // Min-heap of (rank, part_index, generation_at_push).
        let mut heap: BinaryHeap<Reverse<(u32, usize, u32)>> = BinaryHeap::with_capacity(n);

        let pair_rank = |i: usize, parts: &[(usize, usize)], next: &[usize]| -> Option<u32> {
            let j = next[i];
            if j >= n { return None; }
            frozen::frozen_map_get_concat(
                table,
                &piece[parts[i].0..parts[i].1],
                &piece[parts[j].0..parts[j].1],
            )
        };

        for i in 0..n - 1 {
            if let Some(rank) = pair_rank(i, &parts, &next) {
                heap.push(Reverse((rank, i, 0)));
            }
        }

        while let Some(Reverse((rank, i, g))) = heap.pop() {
            if !alive[i] || gen[i] != g { continue; }
            let j = next[i];
            if j >= n || !alive[j] { continue; }

            // parts[i] or parts[j] may have grown since the push.
            match pair_rank(i, &parts, &next) {
                Some(r) if r == rank => {}
                _ => continue,
            }

            // Merge: extend i to cover j's byte range, remove j from the list.
            parts[i].1 = parts[j].1;
            gen[i] += 1;
            alive[j] = false;
            let k = next[j];
            next[i] = k;
            if k < n { prev[k] = i; }

            // Left neighbor now pairs with a longer part.
            if prev[i] != usize::MAX && alive[prev[i]] {
                let p = prev[i];
                gen[p] += 1;
                if let Some(r) = pair_rank(p, &parts, &next) {
                    heap.push(Reverse((r, p, gen[p])));
                }
            }
            if next[i] < n {
                if let Some(r) = pair_rank(i, &parts, &next) {
                    heap.push(Reverse((r, i, gen[i])));
                }
            }
        }

        // Part 0 is never absorbed, so the list always starts there. Every
        // surviving part is a single byte or a merge result, both in the table.
        let mut i = 0;
        while i < n {
            let (start, end) = parts[i];
            if let Some(rank) = frozen::frozen_map_get(table, &piece[start..end]) {
                out.push(rank);
            }
            i = next[i];
        }
    }

    /// Raw bytes of a single token, if the ID is known.
    pub fn token_bytes(&self, id: u32) -> Option<&[u8]> {
        if let Some(&Some((start, end))) = self.decoder.get(id as usize) {
            return Some(&self.data[start..end]);
        }
        self.encoding
            .special_tokens()
            .iter()
            .find(|&&(_, special)| special == id)
            .map(|&(text, _)| text.as_bytes())
    }

    pub fn decode_bytes(&self, ids: &[u32]) -> Result<Vec<u8>, TokenizerError> {
        let mut out = Vec::with_capacity(ids.len() * 4);
        for &id in ids {
            let bytes = self
                .token_bytes(id)
                .ok_or(TokenizerError::UnknownToken(id))?;
            out.extend_from_slice(bytes);
        }
        Ok(out)
    }

    /// Decodes to displayable text. A lone token is often a fragment of a
    /// multi-byte character, so invalid UTF-8 becomes U+FFFD instead of an
    /// error.
    pub fn decode_lossy(&self, ids: &[u32]) -> Result<String, TokenizerError> {
        let bytes = self.decode_bytes(ids)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
