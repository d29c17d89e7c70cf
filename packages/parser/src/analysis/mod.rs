//! Content analysis of the factual narrative: thematic signals, statute
//! citations and domain entities.
//!
//! The analyzer is meant to run on the text of the established-facts
//! section; a document without one simply gets empty results. Detection is
//! purely pattern-based and intentionally tolerates double counting: the
//! output feeds ranking and filtering, not legal conclusions.

mod entities;
mod laws;
mod topics;

pub use entities::{extract_entities, EntityKind, EntitySet};
pub use laws::{extract_law_references, LawCitation, Statute};
pub use topics::{classify_topics, Topic};

use std::collections::BTreeMap;

use serde::Serialize;

/// Composed analysis of one text block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Match counts per topic family; absent topic means zero matches.
    pub topics: BTreeMap<Topic, usize>,

    /// One entry per physical citation, not deduplicated.
    pub laws: Vec<LawCitation>,

    /// Unique extracted values per entity family.
    pub entities: EntitySet,
}

/// Run topic, citation and entity extraction over one text block.
///
/// Empty input yields an empty analysis, never an error.
#[must_use]
pub fn analyze(text: &str) -> Analysis {
    Analysis {
        topics: classify_topics(text),
        laws: extract_law_references(text),
        entities: extract_entities(text),
    }
}
