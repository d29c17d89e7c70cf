//! Chunk size configuration.

use crate::config::{DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE};
use crate::error::{ParserError, Result};

/// Size bounds for chunking, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Chunks shorter than this are merged into their successor.
    pub min_chunk_size: usize,

    /// Chunks longer than this are split at the nearest newline.
    pub max_chunk_size: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

impl ChunkConfig {
    /// Create a validated configuration.
    pub fn new(min_chunk_size: usize, max_chunk_size: usize) -> Result<Self> {
        let config = Self {
            min_chunk_size,
            max_chunk_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero or inverted bounds before any text is scanned.
    pub fn validate(&self) -> Result<()> {
        if self.min_chunk_size == 0
            || self.max_chunk_size == 0
            || self.min_chunk_size >= self.max_chunk_size
        {
            return Err(ParserError::InvalidChunkBounds {
                min: self.min_chunk_size,
                max: self.max_chunk_size,
            });
        }
        Ok(())
    }
}
