//! In-memory aggregation of parsing results across a corpus.
//!
//! The aggregate owns no I/O: callers feed it one [`ParsedDocument`] at a
//! time and decide themselves where the documents come from and where the
//! summary goes.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::analysis::{analyze, Analysis, EntityKind, Topic};
use crate::types::{ParsedDocument, SectionKind};

/// Running size aggregate for one section kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SizeStats {
    pub count: usize,
    pub total_chars: usize,
    pub min_chars: usize,
    pub max_chars: usize,
}

impl SizeStats {
    fn record(&mut self, chars: usize) {
        if self.count == 0 || chars < self.min_chars {
            self.min_chars = chars;
        }
        if chars > self.max_chars {
            self.max_chars = chars;
        }
        self.count += 1;
        self.total_chars += chars;
    }

    /// Mean size in characters.
    #[must_use]
    pub fn avg_chars(&self) -> usize {
        if self.count == 0 {
            0
        } else {
            self.total_chars / self.count
        }
    }
}

/// Aggregated statistics over a corpus of parsed rulings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub total_docs: usize,
    pub docs_with_established: usize,
    pub docs_with_ruling: usize,

    /// Document counts per `doc_type` label.
    pub by_doc_type: BTreeMap<String, usize>,

    /// Per-kind section size aggregates.
    pub section_sizes: BTreeMap<SectionKind, SizeStats>,

    /// Total topic match counts across the corpus.
    pub topics: BTreeMap<Topic, usize>,

    /// Citation counts keyed as "ст. {article} {law}".
    pub laws: BTreeMap<String, usize>,

    /// Unique entity values across the corpus.
    pub entities: BTreeMap<EntityKind, BTreeSet<String>>,
}

impl CorpusStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed document into the aggregate.
    ///
    /// The factual narrative, when present, is analyzed here; the analysis
    /// is returned so callers can reuse it without a second pass.
    pub fn record(&mut self, parsed: &ParsedDocument) -> Option<Analysis> {
        self.total_docs += 1;
        if !parsed.doc_type.is_empty() {
            *self
                .by_doc_type
                .entry(parsed.doc_type.clone())
                .or_default() += 1;
        }

        for section in &parsed.sections {
            self.section_sizes
                .entry(section.kind)
                .or_default()
                .record(section.text.chars().count());
        }

        if parsed.section(SectionKind::Ruling).is_some() {
            self.docs_with_ruling += 1;
        }

        let established = parsed.section(SectionKind::Established)?;
        self.docs_with_established += 1;
        let analysis = analyze(&established.text);

        for (topic, count) in &analysis.topics {
            *self.topics.entry(*topic).or_default() += count;
        }
        for citation in &analysis.laws {
            let key = format!("ст. {} {}", citation.article, citation.law.as_str());
            *self.laws.entry(key).or_default() += 1;
        }
        for (kind, values) in &analysis.entities {
            self.entities
                .entry(*kind)
                .or_default()
                .extend(values.iter().cloned());
        }

        Some(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter;
    use crate::types::RawDocument;

    fn doc(doc_type: &str, text: &str) -> ParsedDocument {
        segmenter::parse(&RawDocument {
            doc_id: String::new(),
            doc_type: doc_type.to_string(),
            text: text.to_string(),
        })
    }

    const WITH_FACTS: &str = "ОПРЕДЕЛЕНИЕ\n\nСуд рассмотрел дело и УСТАНОВИЛ:\nДолжник признан банкротом, задолженность 1 500 000 руб. взыскана по статье 61.2 Закона о банкротстве.\nОПРЕДЕЛИЛ:\n1. Удовлетворить.";

    #[test]
    fn test_record_counts_documents() {
        let mut stats = CorpusStats::new();
        stats.record(&doc("Opredelenie", WITH_FACTS));
        stats.record(&doc("Opredelenie", "текст без маркеров"));

        assert_eq!(stats.total_docs, 2);
        assert_eq!(stats.docs_with_established, 1);
        assert_eq!(stats.docs_with_ruling, 1);
        assert_eq!(stats.by_doc_type.get("Opredelenie"), Some(&2));
    }

    #[test]
    fn test_record_returns_analysis() {
        let mut stats = CorpusStats::new();
        let analysis = stats.record(&doc("Opredelenie", WITH_FACTS)).unwrap();
        assert!(analysis.topics.contains_key(&Topic::BankruptcyIntro));
        assert!(stats.laws.contains_key("ст. 61.2 ФЗ о банкротстве"));
    }

    #[test]
    fn test_record_aggregates_across_documents() {
        let mut stats = CorpusStats::new();
        stats.record(&doc("Opredelenie", WITH_FACTS));
        stats.record(&doc("Opredelenie", WITH_FACTS));

        assert_eq!(stats.laws.get("ст. 61.2 ФЗ о банкротстве"), Some(&2));
        // Entities are a set: the same amount twice stays one value.
        assert_eq!(
            stats.entities.get(&EntityKind::Money).map(BTreeSet::len),
            Some(1)
        );
    }

    #[test]
    fn test_record_without_established_returns_none() {
        let mut stats = CorpusStats::new();
        assert!(stats.record(&doc("Other", "пустой текст")).is_none());
        assert_eq!(stats.total_docs, 1);
        assert_eq!(stats.docs_with_established, 0);
    }

    #[test]
    fn test_size_stats() {
        let mut sizes = SizeStats::default();
        sizes.record(10);
        sizes.record(30);
        assert_eq!(sizes.count, 2);
        assert_eq!(sizes.min_chars, 10);
        assert_eq!(sizes.max_chars, 30);
        assert_eq!(sizes.avg_chars(), 20);
    }
}
