//! Marker detection for structural section boundaries.
//!
//! Each marker family is an ordered list of pattern variants compiled once;
//! detection returns the earliest match across the family's variants.
//! Headings in court PDFs are frequently letter-spaced
//! ("У С Т А Н О В И Л"), so every canonical word also gets a generated
//! variant tolerating whitespace between letters, see [`spaced`].
//!
//! All matching is case-insensitive and side-effect-free.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::TITLE_SEARCH_WINDOW;
use crate::text::advance_chars;
use crate::types::RulingKind;

/// A match of a section marker in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Byte offset of the match start.
    pub start: usize,

    /// Byte offset one past the match end.
    pub end: usize,

    /// Matched substring, original casing and spacing.
    pub text: String,
}

/// A match of one of the ruling-subtype markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulingMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub kind: RulingKind,
}

/// Build a pattern fragment accepting `word` with an optional whitespace run
/// between every pair of consecutive letters, so "УСТАНОВИЛ" also matches
/// "У С Т А Н О В И Л". Generated rather than hand-written per marker to
/// keep the spaced variants from drifting out of sync with the canonical
/// words.
fn spaced(word: &str) -> String {
    word.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(r"\s*")
}

#[allow(clippy::expect_used)] // Static patterns that are guaranteed to be valid
fn compile(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
}

/// Document-type title words. The letter-spaced form subsumes the plain one.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!("(?i){}", spaced("ОПРЕДЕЛЕНИЕ")),
        format!("(?i){}", spaced("ПОСТАНОВЛЕНИЕ")),
        format!("(?i){}", spaced("РЕШЕНИЕ")),
    ])
});

/// "УСТАНОВИЛ" variants, optionally prefixed by the court formula.
static ESTABLISHED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i)(?:арбитражный\s+суд\s+)?{}\s*:?", spaced("УСТАНОВИЛ")),
        r"(?i)\bУСТАНОВИЛ\s*:".to_string(),
    ])
});

static OPREDELENIE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i){}\s*:?", spaced("ОПРЕДЕЛИЛ")),
        r"(?i)\bОПРЕДЕЛИЛ\s*:".to_string(),
    ])
});

static RESHENIE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i){}\s*:?", spaced("РЕШИЛ")),
        r"(?i)\bРЕШИЛ\s*:".to_string(),
    ])
});

/// "ПОСТАНОВИЛ" needs the colon (or a fresh line): the bare word is too
/// common in appellate prose to treat as a marker on its own.
static POSTANOVLENIE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        format!(r"(?i)(?:апелляционный\s+суд\s+)?{}\s*:", spaced("ПОСТАНОВИЛ")),
        r"(?i)\n\s*ПОСТАНОВИЛ\s*:".to_string(),
    ])
});

/// Phrases that open the signature block.
static SIGNATURE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?im)Электронная подпись действительна".to_string(),
        r"(?im)Данные ЭП:".to_string(),
        r"(?im)Судья\s+[\w\s\.]+$".to_string(),
    ])
});

/// Earliest match start across an ordered family of pattern variants.
fn earliest(patterns: &[Regex], text: &str) -> Option<MarkerMatch> {
    let mut best: Option<MarkerMatch> = None;
    for pattern in patterns {
        if let Some(m) = pattern.find(text) {
            if best.as_ref().map_or(true, |b| m.start() < b.start) {
                best = Some(MarkerMatch {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                });
            }
        }
    }
    best
}

/// Find the document-type title near the top of the text.
///
/// Only the first [`TITLE_SEARCH_WINDOW`] characters are scanned.
#[must_use]
pub fn find_title(text: &str) -> Option<MarkerMatch> {
    let window = advance_chars(text, 0, TITLE_SEARCH_WINDOW);
    earliest(&TITLE_PATTERNS, &text[..window])
}

/// Find the marker opening the factual narrative ("УСТАНОВИЛ").
#[must_use]
pub fn find_established(text: &str) -> Option<MarkerMatch> {
    earliest(&ESTABLISHED_PATTERNS, text)
}

/// Find every ruling-subtype marker, sorted ascending by position.
///
/// Ruling words also occur in ordinary prose, so multiple hits are expected;
/// picking the one that actually opens the operative section is the
/// segmenter's job.
#[must_use]
pub fn find_all_ruling_markers(text: &str) -> Vec<RulingMatch> {
    let families: [(RulingKind, &[Regex]); 3] = [
        (RulingKind::Opredelenie, &OPREDELENIE_PATTERNS),
        (RulingKind::Reshenie, &RESHENIE_PATTERNS),
        (RulingKind::Postanovlenie, &POSTANOVLENIE_PATTERNS),
    ];

    let mut matches = Vec::new();
    for (kind, patterns) in families {
        for pattern in patterns {
            for m in pattern.find_iter(text) {
                matches.push(RulingMatch {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                    kind,
                });
            }
        }
    }
    matches.sort_by_key(|m| m.start);
    matches
}

/// Find where the signature block begins.
#[must_use]
pub fn find_signature(text: &str) -> Option<usize> {
    earliest(&SIGNATURE_PATTERNS, text).map(|m| m.start)
}
