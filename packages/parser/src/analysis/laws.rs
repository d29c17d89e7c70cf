//! Statute citation extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::CITATION_CONTEXT_CHARS;
use crate::text::{advance_chars, retreat_chars};

/// Statute families recognized in citations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Statute {
    /// Federal law on insolvency (127-ФЗ).
    #[serde(rename = "ФЗ о банкротстве")]
    BankruptcyLaw,
    /// Civil code.
    #[serde(rename = "ГК РФ")]
    CivilCode,
    /// Arbitration procedure code.
    #[serde(rename = "АПК РФ")]
    ProcedureCode,
}

impl Statute {
    /// Canonical short name used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankruptcyLaw => "ФЗ о банкротстве",
            Self::CivilCode => "ГК РФ",
            Self::ProcedureCode => "АПК РФ",
        }
    }
}

/// One physical citation of a statute article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawCitation {
    /// Article number; "12" and "12.1" forms both occur.
    pub article: String,

    pub law: Statute,

    /// Window of [`CITATION_CONTEXT_CHARS`] characters on each side of the
    /// match, newlines collapsed to spaces.
    pub context: String,
}

#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
static LAW_PATTERNS: LazyLock<Vec<(Statute, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")).expect("valid regex"))
            .collect()
    };

    vec![
        (
            Statute::BankruptcyLaw,
            compile(&[
                r"стать\w* (\d+(?:\.\d+)?)\s*(?:федерального\s+)?закона.*о несостоятельности",
                r"стать\w* (\d+(?:\.\d+)?)\s*закона о банкротстве",
            ]),
        ),
        (
            Statute::CivilCode,
            compile(&[
                r"стать\w* (\d+(?:\.\d+)?)\s*(?:гражданского\s+)?кодекса",
                r"стать\w* (\d+)\s*ГК\s*(?:РФ)?",
            ]),
        ),
        (
            Statute::ProcedureCode,
            compile(&[
                r"стать\w* (\d+(?:\.\d+)?)\s*(?:арбитражного\s+процессуального\s+)?кодекса",
                r"стать\w* (\d+)\s*АПК\s*(?:РФ)?",
            ]),
        ),
    ]
});

/// Extract statute citations with their surrounding context.
///
/// One citation is emitted per physical match; duplicates are preserved so
/// consumers can frequency-weight them. An unqualified "статьи N Кодекса"
/// matches both code families; that double count is accepted.
#[must_use]
pub fn extract_law_references(text: &str) -> Vec<LawCitation> {
    let mut citations = Vec::new();
    for (law, patterns) in LAW_PATTERNS.iter() {
        for pattern in patterns {
            for caps in pattern.captures_iter(text) {
                let (Some(whole), Some(article)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                let start = retreat_chars(text, whole.start(), CITATION_CONTEXT_CHARS);
                let end = advance_chars(text, whole.end(), CITATION_CONTEXT_CHARS);
                citations.push(LawCitation {
                    article: article.as_str().to_string(),
                    law: *law,
                    context: text[start..end].replace('\n', " "),
                });
            }
        }
    }
    citations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bankruptcy_law() {
        let citations =
            extract_law_references("в соответствии со статьей 61.2 Закона о банкротстве");
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].article, "61.2");
        assert_eq!(citations[0].law, Statute::BankruptcyLaw);
    }

    #[test]
    fn test_extract_bankruptcy_law_long_form() {
        let citations = extract_law_references(
            "по статье 213.32 Федерального закона от 26.10.2002 о несостоятельности (банкротстве)",
        );
        assert!(citations
            .iter()
            .any(|c| c.law == Statute::BankruptcyLaw && c.article == "213.32"));
    }

    #[test]
    fn test_extract_civil_code_abbreviated() {
        let citations = extract_law_references("на основании статьи 10 ГК РФ");
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].article, "10");
        assert_eq!(citations[0].law, Statute::CivilCode);
    }

    #[test]
    fn test_extract_procedure_code_abbreviated() {
        let citations = extract_law_references("согласно статье 65 АПК РФ");
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].law, Statute::ProcedureCode);
    }

    #[test]
    fn test_unqualified_code_double_counts() {
        // Both code families claim a bare "статьи N кодекса" mention.
        let citations = extract_law_references("согласно статье 309 кодекса");
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].law, Statute::CivilCode);
        assert_eq!(citations[1].law, Statute::ProcedureCode);
    }

    #[test]
    fn test_context_window_collapses_newlines() {
        let text = format!(
            "{}\nссылка на статью 10 ГК РФ имеется\n{}",
            "а".repeat(80),
            "б".repeat(80)
        );
        let citations = extract_law_references(&text);
        assert_eq!(citations.len(), 1);
        let context = &citations[0].context;
        assert!(context.contains("статью 10 ГК РФ"));
        assert!(!context.contains('\n'));
        // 50 chars each side plus the match itself.
        assert!(context.chars().count() <= 100 + "статью 10 ГК РФ имеется".chars().count() + 2);
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_law_references("").is_empty());
        assert!(extract_law_references("текст без цитат").is_empty());
    }

    #[test]
    fn test_citation_serialization() {
        let citation = LawCitation {
            article: "61.2".to_string(),
            law: Statute::BankruptcyLaw,
            context: "…".to_string(),
        };
        let json = serde_json::to_string(&citation).unwrap();
        assert!(json.contains("\"ФЗ о банкротстве\""));
    }
}
