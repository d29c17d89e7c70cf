//! Topic classification over the factual narrative.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Thematic signal families tracked in bankruptcy-case rulings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Debtor declared insolvent, procedure opened, receivers appointed.
    BankruptcyIntro,
    /// Transactions being challenged or voided.
    TransactionChallenge,
    /// Creditor claims and the claims register.
    CreditorClaims,
    /// Affiliated and controlling parties.
    Affiliates,
    /// Bad-faith and asset-stripping indicators.
    FraudIndicators,
    /// Procedural motions and deadlines.
    Procedural,
}

impl Topic {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BankruptcyIntro => "bankruptcy_intro",
            Self::TransactionChallenge => "transaction_challenge",
            Self::CreditorClaims => "creditor_claims",
            Self::Affiliates => "affiliates",
            Self::FraudIndicators => "fraud_indicators",
            Self::Procedural => "procedural",
        }
    }
}

#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
static TOPIC_PATTERNS: LazyLock<Vec<(Topic, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")).expect("valid regex"))
            .collect()
    };

    vec![
        (
            Topic::BankruptcyIntro,
            compile(&[
                r"признан\w* несостоятельным",
                r"банкрот",
                r"процедур\w* реализаци\w* имущества",
                r"финансов\w+ управляющ\w+",
                r"конкурсн\w+ управляющ\w+",
            ]),
        ),
        (
            Topic::TransactionChallenge,
            compile(&[
                r"оспарива\w+ сделк",
                r"недействительн\w+ сделк",
                r"признан\w+ недействительн",
                r"платеж\w+ в пользу",
                r"перечисл\w+ денежн",
            ]),
        ),
        (
            Topic::CreditorClaims,
            compile(&[
                r"требовани\w+ кредитор",
                r"реестр\w* требований",
                r"включ\w+ в реестр",
                r"задолженност\w+",
            ]),
        ),
        (
            Topic::Affiliates,
            compile(&[
                r"аффилиро\w+",
                r"заинтересован\w+ лиц",
                r"группа компаний",
                r"взаимосвязан\w+",
                r"контролирующ\w+ лиц",
            ]),
        ),
        (
            Topic::FraudIndicators,
            compile(&[
                r"злоупотреблен\w+ прав",
                r"вывод\w* актив",
                r"причинен\w+ вред",
                r"ущерб кредитор",
                r"недобросовестн",
                r"мнимая сделка",
                r"притворная сделка",
            ]),
        ),
        (
            Topic::Procedural,
            compile(&[
                r"срок исковой давности",
                r"пропущен\w* срок",
                r"оставить без движения",
                r"отложить заседание",
                r"назначить экспертизу",
            ]),
        ),
    ]
});

/// Count pattern matches per topic family.
///
/// A topic appears in the result only when its count is positive.
/// Overlapping patterns double-count on purpose: the output is a raw signal
/// for ranking, not a calibrated classifier.
#[must_use]
pub fn classify_topics(text: &str) -> BTreeMap<Topic, usize> {
    let mut counts = BTreeMap::new();
    for (topic, patterns) in TOPIC_PATTERNS.iter() {
        let total: usize = patterns.iter().map(|p| p.find_iter(text).count()).sum();
        if total > 0 {
            counts.insert(*topic, total);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_topics_bankruptcy() {
        let counts =
            classify_topics("должник признан банкротом, введена процедура реализации имущества");
        assert_eq!(counts.get(&Topic::BankruptcyIntro), Some(&2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_classify_topics_case_insensitive() {
        let counts = classify_topics("БАНКРОТ");
        assert_eq!(counts.get(&Topic::BankruptcyIntro), Some(&1));
    }

    #[test]
    fn test_classify_topics_multiple_families() {
        let text = "конкурсный управляющий оспаривает сделку должника, \
                    задолженность включена в реестр требований кредиторов";
        let counts = classify_topics(text);
        assert!(counts.contains_key(&Topic::BankruptcyIntro));
        assert!(counts.contains_key(&Topic::TransactionChallenge));
        assert!(counts.contains_key(&Topic::CreditorClaims));
    }

    #[test]
    fn test_classify_topics_empty() {
        assert!(classify_topics("").is_empty());
        assert!(classify_topics("нейтральный текст").is_empty());
    }

    #[test]
    fn test_topic_serialization() {
        assert_eq!(
            serde_json::to_string(&Topic::BankruptcyIntro).unwrap(),
            "\"bankruptcy_intro\""
        );
    }
}
