//! Core data types for parsed rulings.
//!
//! Offsets in [`Section`] and [`Chunk`] are byte offsets into the original
//! text, so spans can be sliced back out of it directly. Section text is
//! stored whitespace-trimmed while `start`/`end` keep the raw span.

use serde::{Deserialize, Serialize};

/// Structural sections of an arbitration-court ruling, in document order.
///
/// A parsed document carries at most one section per kind; kinds may be
/// absent, but present sections never overlap and always follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Court requisites, case number, date.
    Header,
    /// Document-type heading (ОПРЕДЕЛЕНИЕ, ПОСТАНОВЛЕНИЕ, РЕШЕНИЕ).
    Title,
    /// Court composition, parties, subject matter.
    Intro,
    /// Factual and reasoning narrative opened by "УСТАНОВИЛ".
    Established,
    /// Operative conclusions opened by "ОПРЕДЕЛИЛ"/"РЕШИЛ"/"ПОСТАНОВИЛ".
    Ruling,
    /// Judge signature and electronic-signature details.
    Footer,
}

impl SectionKind {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Title => "title",
            Self::Intro => "intro",
            Self::Established => "established",
            Self::Ruling => "ruling",
            Self::Footer => "footer",
        }
    }
}

/// Subtypes of the operative (resolutive) marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RulingKind {
    /// "ОПРЕДЕЛИЛ" (determination).
    Opredelenie,
    /// "РЕШИЛ" (decision).
    Reshenie,
    /// "ПОСТАНОВИЛ" (appellate/cassation resolution).
    Postanovlenie,
}

impl RulingKind {
    /// Get the string value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opredelenie => "opredelenie",
            Self::Reshenie => "reshenie",
            Self::Postanovlenie => "postanovlenie",
        }
    }
}

/// Input document as delivered by the upstream text-extraction stage.
///
/// `doc_id` and `doc_type` are passthrough labels and never influence
/// parsing; `text` may be empty for scanned files with no recoverable text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub doc_id: String,

    #[serde(default)]
    pub doc_type: String,

    #[serde(default)]
    pub text: String,
}

impl RawDocument {
    /// Create a document from plain text with empty labels.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            doc_id: String::new(),
            doc_type: String::new(),
            text: text.into(),
        }
    }
}

/// A single structural section of a ruling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,

    /// Byte offset of the span start in the original text.
    pub start: usize,

    /// Byte offset one past the span end in the original text.
    pub end: usize,

    /// Trimmed text of the span.
    pub text: String,

    /// Exact marker substring that opened the section, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl Section {
    /// Build a section from a byte span of the original text.
    pub(crate) fn from_span(kind: SectionKind, text: &str, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            text: text[start..end].trim().to_string(),
            marker: None,
        }
    }

    /// Attach the matched marker substring.
    #[must_use]
    pub(crate) fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }
}

/// Structured view of one ruling: its labels plus the ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDocument {
    pub doc_id: String,
    pub doc_type: String,
    pub sections: Vec<Section>,
}

impl ParsedDocument {
    /// Get a section by kind.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Text of the factual narrative ("УСТАНОВИЛ"), or empty.
    #[must_use]
    pub fn facts(&self) -> &str {
        self.section(SectionKind::Established)
            .map_or("", |s| s.text.as_str())
    }

    /// Text of the operative part ("ОПРЕДЕЛИЛ"/"РЕШИЛ"/"ПОСТАНОВИЛ"), or empty.
    #[must_use]
    pub fn operative(&self) -> &str {
        self.section(SectionKind::Ruling)
            .map_or("", |s| s.text.as_str())
    }
}

/// A bounded contiguous text span produced for downstream embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    /// Byte offset of the span start.
    pub start: usize,

    /// Byte offset one past the span end.
    pub end: usize,

    /// Trimmed text of the span.
    pub text: String,
}
