//! Size-bounded, boundary-aware chunking for downstream embedding.
//!
//! Splitting happens in three deterministic phases: discover candidate
//! boundaries at structurally meaningful points, merge chunks that fall
//! below the minimum size, then split chunks above the maximum size at the
//! nearest newline.

mod config;
mod engine;

pub use config::ChunkConfig;
pub use engine::ChunkEngine;
