//! End-to-end integration tests for the parsing pipeline.
//!
//! Runs segmentation, content analysis and chunking over a realistic
//! bankruptcy-case ruling fixture and checks the cross-stage invariants.

use std::fs;
use std::path::Path;

use sudakt_parser::analysis::{analyze, EntityKind, Statute, Topic};
use sudakt_parser::chunking::{ChunkConfig, ChunkEngine};
use sudakt_parser::segmenter;
use sudakt_parser::types::{RawDocument, SectionKind};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn parse_fixture() -> sudakt_parser::ParsedDocument {
    let doc = RawDocument {
        doc_id: "doc-1".to_string(),
        doc_type: "Opredelenie".to_string(),
        text: load_fixture("opredelenie.txt"),
    };
    segmenter::parse(&doc)
}

#[test]
fn test_all_section_kinds_recognized() {
    let parsed = parse_fixture();
    let kinds: Vec<SectionKind> = parsed.sections.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Header,
            SectionKind::Title,
            SectionKind::Intro,
            SectionKind::Established,
            SectionKind::Ruling,
            SectionKind::Footer,
        ]
    );
}

#[test]
fn test_section_contents() {
    let parsed = parse_fixture();

    let header = parsed.section(SectionKind::Header).unwrap();
    assert!(header.text.starts_with("Арбитражный суд Свердловской области"));

    let title = parsed.section(SectionKind::Title).unwrap();
    assert_eq!(title.text, "О П Р Е Д Е Л Е Н И Е");
    assert_eq!(title.marker.as_deref(), Some("О П Р Е Д Е Л Е Н И Е"));

    let established = parsed.section(SectionKind::Established).unwrap();
    assert!(established.text.starts_with("Решением суда"));
    assert!(established.text.ends_with("ссылается."));

    let ruling = parsed.section(SectionKind::Ruling).unwrap();
    assert!(ruling.text.starts_with("1. Заявление"));
    assert_eq!(ruling.marker.as_deref(), Some("ОПРЕДЕЛИЛ:"));

    let footer = parsed.section(SectionKind::Footer).unwrap();
    assert!(footer.text.starts_with("Судья Ковалёва"));
    assert!(footer.text.contains("Электронная подпись действительна"));
}

#[test]
fn test_sections_non_overlapping_ordered_and_sliceable() {
    let text = load_fixture("opredelenie.txt");
    let sections = segmenter::segment(&text);
    for pair in sections.windows(2) {
        assert!(pair[0].end <= pair[1].start, "sections overlap");
        assert!(pair[0].kind < pair[1].kind, "sections out of order");
    }
    for section in &sections {
        assert_eq!(section.text, text[section.start..section.end].trim());
    }
}

#[test]
fn test_analysis_of_factual_narrative() {
    let parsed = parse_fixture();
    let analysis = analyze(parsed.facts());

    assert!(analysis.topics.get(&Topic::BankruptcyIntro).copied() >= Some(3));
    assert!(analysis.topics.contains_key(&Topic::TransactionChallenge));
    assert!(analysis.topics.contains_key(&Topic::CreditorClaims));
    assert!(analysis.topics.contains_key(&Topic::FraudIndicators));

    let cited: Vec<(&str, Statute)> = analysis
        .laws
        .iter()
        .map(|c| (c.article.as_str(), c.law))
        .collect();
    assert!(cited.contains(&("61.2", Statute::BankruptcyLaw)));
    assert!(cited.contains(&("10", Statute::CivilCode)));
    assert!(cited.contains(&("65", Statute::ProcedureCode)));
    for citation in &analysis.laws {
        assert!(!citation.context.contains('\n'));
    }

    let money = analysis.entities.get(&EntityKind::Money).unwrap();
    assert!(money.contains("2 450 000"));

    let dates = analysis.entities.get(&EntityKind::Dates).unwrap();
    assert!(dates.contains("14.03.2023"));
    assert!(dates.contains("25 декабря 2022"));

    let cases = analysis.entities.get(&EntityKind::CaseNumbers).unwrap();
    assert!(cases.contains("А60-21280/2023"));

    let inn = analysis.entities.get(&EntityKind::Inn).unwrap();
    assert!(inn.contains("6671234567"));

    let ogrn = analysis.entities.get(&EntityKind::Ogrn).unwrap();
    assert!(ogrn.contains("1096671234567"));
}

#[test]
fn test_chunking_factual_narrative() {
    let parsed = parse_fixture();
    let facts = parsed.facts();
    let engine = ChunkEngine::new(ChunkConfig::new(100, 500).unwrap()).unwrap();
    let chunks = engine.chunk(facts);

    assert!(!chunks.is_empty());
    for pair in chunks.windows(2) {
        assert!(pair[0].end <= pair[1].start, "chunks overlap");
    }
    // All chunks except possibly the last respect the minimum.
    for chunk in &chunks[..chunks.len() - 1] {
        assert!(chunk.text.chars().count() >= 100 || facts[chunk.start..chunk.end].chars().count() >= 100);
    }
    // No chunk text is lost beyond per-chunk whitespace trimming.
    for chunk in &chunks {
        assert_eq!(chunk.text, facts[chunk.start..chunk.end].trim());
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = parse_fixture();
    let second = parse_fixture();
    assert_eq!(first, second);
    assert_eq!(analyze(first.facts()), analyze(second.facts()));
}

#[test]
fn test_empty_document_is_not_an_error() {
    let doc = RawDocument::from_text("");
    let parsed = segmenter::parse(&doc);
    assert!(parsed.sections.is_empty());

    let analysis = analyze(parsed.facts());
    assert!(analysis.topics.is_empty());
    assert!(analysis.laws.is_empty());
    assert!(analysis.entities.is_empty());

    let chunks = ChunkEngine::with_defaults().chunk(parsed.facts());
    assert!(chunks.is_empty());
}
