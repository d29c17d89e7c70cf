//! Entity extraction: money amounts, dates, case numbers, INN, OGRN.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Entity families extracted from the factual narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Ruble amounts, raw digit groups ("1 500 000").
    Money,
    /// Numeric ("01.02.2023") and spelled-month ("1 февраля 2023") dates.
    Dates,
    /// Arbitration case numbers ("А60-21280/2023").
    CaseNumbers,
    /// Taxpayer identification numbers.
    Inn,
    /// State registration numbers (incl. ОГРНИП).
    Ogrn,
}

impl EntityKind {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::Dates => "dates",
            Self::CaseNumbers => "case_numbers",
            Self::Inn => "inn",
            Self::Ogrn => "ogrn",
        }
    }
}

/// Unique extracted values per entity family; families with no matches are
/// absent from the map.
pub type EntitySet = BTreeMap<EntityKind, BTreeSet<String>>;

#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
static ENTITY_PATTERNS: LazyLock<Vec<(EntityKind, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")).expect("valid regex"))
            .collect()
    };

    vec![
        (
            EntityKind::Money,
            compile(&[
                r"(\d[\d\s]*\d)\s*руб",
                r"(\d[\d\s]*(?:,\d+)?)\s*(?:руб|тыс|млн)",
                r"сумм\w*\s+(\d[\d\s]*)\s*руб",
            ]),
        ),
        (
            EntityKind::Dates,
            compile(&[
                r"(\d{2}\.\d{2}\.\d{4})",
                r"(\d{1,2})\s+(января|февраля|марта|апреля|мая|июня|июля|августа|сентября|октября|ноября|декабря)\s+(\d{4})",
            ]),
        ),
        (
            EntityKind::CaseNumbers,
            compile(&[
                r"дел[оау]?\s*[№N]?\s*(А\d+-\d+/\d{4})",
                r"№\s*(А\d+-\d+/\d{4})",
            ]),
        ),
        (EntityKind::Inn, compile(&[r"ИНН\s*(\d{10,12})"])),
        (EntityKind::Ogrn, compile(&[r"ОГРН(?:ИП)?\s*(\d{13,15})"])),
    ]
});

/// Extract unique entity values per family.
///
/// Spelled-month date patterns capture day, month and year separately; the
/// non-empty groups are joined with spaces into one normalized string. All
/// other families keep the first capture group. Values are trimmed before
/// deduplication so the overlapping money variants collapse to one entry.
#[must_use]
pub fn extract_entities(text: &str) -> EntitySet {
    let mut entities = EntitySet::new();
    for (kind, patterns) in ENTITY_PATTERNS.iter() {
        let mut values = BTreeSet::new();
        for pattern in patterns {
            for caps in pattern.captures_iter(text) {
                let value = if *kind == EntityKind::Dates && caps.len() > 2 {
                    caps.iter()
                        .skip(1)
                        .flatten()
                        .map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join(" ")
                } else {
                    match caps.get(1) {
                        Some(m) => m.as_str().to_string(),
                        None => continue,
                    }
                };
                let value = value.trim();
                if !value.is_empty() {
                    values.insert(value.to_string());
                }
            }
        }
        if !values.is_empty() {
            entities.insert(*kind, values);
        }
    }
    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(entities: &EntitySet, kind: EntityKind) -> Vec<&str> {
        entities
            .get(&kind)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_extract_money_and_date() {
        let entities =
            extract_entities("Сумма долга составляет 1 500 000 руб. по состоянию на 01.02.2023");
        assert_eq!(values(&entities, EntityKind::Money), vec!["1 500 000"]);
        assert_eq!(values(&entities, EntityKind::Dates), vec!["01.02.2023"]);
        assert!(!entities.contains_key(&EntityKind::Inn));
    }

    #[test]
    fn test_extract_spelled_month_date() {
        let entities = extract_entities("решение оглашено 12 марта 2024 года");
        assert_eq!(values(&entities, EntityKind::Dates), vec!["12 марта 2024"]);
    }

    #[test]
    fn test_extract_case_number_deduplicated() {
        // Both case-number variants hit the same value.
        let entities = extract_entities("по делу № А60-21280/2023");
        assert_eq!(
            values(&entities, EntityKind::CaseNumbers),
            vec!["А60-21280/2023"]
        );
    }

    #[test]
    fn test_extract_inn_ogrn() {
        let entities = extract_entities("ООО «Ромашка», ИНН 6670123456, ОГРН 1086670012345");
        assert_eq!(values(&entities, EntityKind::Inn), vec!["6670123456"]);
        assert_eq!(values(&entities, EntityKind::Ogrn), vec!["1086670012345"]);
    }

    #[test]
    fn test_extract_ogrnip() {
        let entities = extract_entities("ИП Петров, ОГРНИП 304500116000157");
        assert_eq!(values(&entities, EntityKind::Ogrn), vec!["304500116000157"]);
    }

    #[test]
    fn test_extract_empty() {
        assert!(extract_entities("").is_empty());
        assert!(extract_entities("текст без сущностей").is_empty());
    }

    #[test]
    fn test_entity_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&EntityKind::CaseNumbers).unwrap(),
            "\"case_numbers\""
        );
    }
}
