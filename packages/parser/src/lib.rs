//! sudakt-parser - structural parsing of Russian arbitration-court rulings.
//!
//! Given the plain extracted text of a ruling, this crate
//!
//! - splits it into a fixed taxonomy of structural sections (requisites
//!   header, title, intro, factual narrative, operative ruling, signature
//!   footer),
//! - extracts thematic signals, statute citations and domain entities from
//!   the factual narrative,
//! - splits any text block into size-bounded, boundary-aware chunks for
//!   downstream semantic processing.
//!
//! Everything is pure and in-memory: acquiring documents and converting
//! them to text are upstream concerns, persistence and indexing downstream
//! ones. Documents without recognizable structure yield empty results, not
//! errors.
//!
//! # Example
//!
//! ```
//! use sudakt_parser::segmenter;
//! use sudakt_parser::types::SectionKind;
//!
//! let text = "ОПРЕДЕЛЕНИЕ\n\nСуд рассмотрел заявление и УСТАНОВИЛ:\nдолжник признан банкротом.\nОПРЕДЕЛИЛ:\n1. Удовлетворить.";
//! let sections = segmenter::segment(text);
//! assert!(sections.iter().any(|s| s.kind == SectionKind::Established));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: constants (search windows, default chunk bounds)
//! - [`types`]: core data types (Section, ParsedDocument, Chunk, ...)
//! - [`error`]: error types and Result alias
//! - [`markers`]: marker pattern families and detection
//! - [`segmenter`]: section-span construction
//! - [`analysis`]: topics, statute citations, entities
//! - [`chunking`]: size-bounded chunk boundary engine
//! - [`meta`]: filename metadata helpers
//! - [`stats`]: corpus-level aggregation
//! - [`cli`]: command-line interface

pub mod analysis;
pub mod chunking;
pub mod cli;
pub mod config;
pub mod error;
pub mod markers;
pub mod meta;
pub mod segmenter;
pub mod stats;
mod text;
pub mod types;

// Re-export main entry points
pub use analysis::{analyze, Analysis};
pub use chunking::{ChunkConfig, ChunkEngine};
pub use error::{ParserError, Result};
pub use segmenter::{parse, segment};

// Re-export commonly used items
pub use types::{Chunk, ParsedDocument, RawDocument, Section, SectionKind};
