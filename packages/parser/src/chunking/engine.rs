//! Three-phase chunk boundary engine.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::config::ChunkConfig;
use crate::error::Result;
use crate::text::{advance_chars, char_len};
use crate::types::Chunk;

/// Candidate boundary patterns, scanned in order: list items, indentation,
/// paragraph breaks, discourse transitions, evidentiary references.
#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
static BOUNDARY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Numbered items in the operative part
        r"\n\s*\d+\.\s+",
        // Numbered sub-items
        r"\n\s*\d+\)\s+",
        // Lettered sub-items
        r"\n\s*[а-яa-z]\)\s+",
        // Indented paragraph starts
        r"\n\s{4,}[А-ЯA-Z]",
        // Blank-line paragraph breaks
        r"\n\s*\n",
        // Discourse transitions
        r"\n\s*(?:Вместе с тем|Между тем|При этом|Однако|Таким образом|Учитывая изложенное)",
        // References to case materials
        r"\n\s*(?:Как следует из|Из материалов дела|Согласно представленным)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Splits a text block into contiguous chunks within the configured size
/// bounds, preferring structurally meaningful split points.
#[derive(Debug, Clone)]
pub struct ChunkEngine {
    config: ChunkConfig,
}

impl ChunkEngine {
    /// Create an engine; the configuration is validated up front so that
    /// [`ChunkEngine::chunk`] itself cannot fail.
    pub fn new(config: ChunkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an engine with the default size bounds.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: ChunkConfig::default(),
        }
    }

    /// Split a text block into ordered, non-overlapping chunks.
    ///
    /// Chunk text is trimmed; spans whose trimmed text is empty are dropped
    /// without redistributing their span.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let boundaries = find_boundaries(text);
        let boundaries = self.merge_small(&boundaries, text);
        let boundaries = self.split_large(&boundaries, text);

        let mut chunks = Vec::new();
        for pair in boundaries.windows(2) {
            let trimmed = text[pair[0]..pair[1]].trim();
            if !trimmed.is_empty() {
                chunks.push(Chunk {
                    start: pair[0],
                    end: pair[1],
                    text: trimmed.to_string(),
                });
            }
        }
        chunks
    }

    /// Drop boundaries that would close a chunk below the minimum size,
    /// merging it into the following span. The final boundary always
    /// survives, so the last chunk may run short.
    fn merge_small(&self, boundaries: &[usize], text: &str) -> Vec<usize> {
        let Some((&first, rest)) = boundaries.split_first() else {
            return Vec::new();
        };

        let mut merged = vec![first];
        let mut prev = first;
        for (i, &curr) in rest.iter().enumerate() {
            let is_final = i == rest.len() - 1;
            if !is_final && char_len(text, prev, curr) < self.config.min_chunk_size {
                continue;
            }
            merged.push(curr);
            prev = curr;
        }
        merged
    }

    /// Insert newline-aligned boundaries into chunks above the maximum size.
    ///
    /// An oversized chunk with no internal newline is left as-is; splitting
    /// mid-line is never worth it for downstream embedding.
    fn split_large(&self, boundaries: &[usize], text: &str) -> Vec<usize> {
        let mut result: BTreeSet<usize> = BTreeSet::new();
        for pair in boundaries.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            result.insert(start);

            let size = char_len(text, start, end);
            if size <= self.config.max_chunk_size {
                continue;
            }

            let parts = size / self.config.max_chunk_size + 1;
            let part_size = size / parts;
            for i in 1..parts {
                let target = advance_chars(text, start, i * part_size);
                if let Some(offset) = text[target..].find('\n') {
                    let newline = target + offset;
                    if newline < end {
                        result.insert(newline);
                    }
                }
            }
        }
        if let Some(&last) = boundaries.last() {
            result.insert(last);
        }
        result.into_iter().collect()
    }
}

/// Candidate boundaries: every pattern match start, deduplicated and sorted,
/// with both text ends always included.
fn find_boundaries(text: &str) -> Vec<usize> {
    let mut boundaries = BTreeSet::new();
    boundaries.insert(0);
    for pattern in BOUNDARY_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            boundaries.insert(m.start());
        }
    }
    boundaries.insert(text.len());
    boundaries.into_iter().collect()
}
