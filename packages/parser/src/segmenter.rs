//! Structural segmentation of ruling text into ordered sections.
//!
//! The segmenter is a single deterministic pass over the marker positions
//! from [`crate::markers`]. A document with no recognizable markers yields
//! zero sections; that is a normal outcome for scanned files without a
//! recoverable text layer, not an error.

use tracing::debug;

use crate::config::MIN_HEADER_OFFSET;
use crate::markers::{self, MarkerMatch, RulingMatch};
use crate::text::char_len;
use crate::types::{ParsedDocument, RawDocument, Section, SectionKind};

/// Parse a raw document into its structural sections.
///
/// `doc_id` and `doc_type` are copied through verbatim; they never influence
/// segmentation.
#[must_use]
pub fn parse(doc: &RawDocument) -> ParsedDocument {
    ParsedDocument {
        doc_id: doc.doc_id.clone(),
        doc_type: doc.doc_type.clone(),
        sections: segment(&doc.text),
    }
}

/// Split ruling text into ordered, non-overlapping sections.
///
/// Section spans that come out empty or inverted are omitted rather than
/// emitted as zero-length.
#[must_use]
pub fn segment(text: &str) -> Vec<Section> {
    let title = markers::find_title(text);
    let established = markers::find_established(text);
    let ruling_candidates = markers::find_all_ruling_markers(text);
    let main_ruling = select_main_ruling(&ruling_candidates, established.as_ref());
    let signature = markers::find_signature(text);

    let mut sections = Vec::new();

    if let Some(ref t) = title {
        // Anything of substance before the title is the requisites header.
        if char_len(text, 0, t.start) > MIN_HEADER_OFFSET {
            push_section(
                &mut sections,
                Section::from_span(SectionKind::Header, text, 0, t.start),
            );
        }
        push_section(
            &mut sections,
            Section::from_span(SectionKind::Title, text, t.start, t.end)
                .with_marker(t.text.clone()),
        );
    }

    // Intro runs from the title (or document start) to whichever narrative
    // marker comes first.
    let intro_start = title.as_ref().map_or(0, |t| t.end);
    let intro_end = established
        .as_ref()
        .map(|e| e.start)
        .or_else(|| main_ruling.map(|r| r.start));
    if let Some(end) = intro_end {
        if end > intro_start {
            push_section(
                &mut sections,
                Section::from_span(SectionKind::Intro, text, intro_start, end),
            );
        }
    }

    if let Some(ref est) = established {
        let mut end = text.len();
        if let Some(r) = main_ruling {
            end = end.min(r.start);
        }
        if let Some(sig) = signature {
            end = end.min(sig);
        }
        if end > est.end {
            push_section(
                &mut sections,
                Section::from_span(SectionKind::Established, text, est.end, end)
                    .with_marker(est.text.clone()),
            );
        }
    }

    if let Some(r) = main_ruling {
        let end = signature.unwrap_or(text.len());
        if end > r.end {
            push_section(
                &mut sections,
                Section::from_span(SectionKind::Ruling, text, r.end, end)
                    .with_marker(r.text.clone()),
            );
        }
    }

    if let Some(sig) = signature {
        if text.len() > sig {
            push_section(
                &mut sections,
                Section::from_span(SectionKind::Footer, text, sig, text.len()),
            );
        }
    }

    if sections.is_empty() && !text.is_empty() {
        debug!("no structural markers recognized");
    }

    sections
}

/// Pick the marker that opens the operative section: the first candidate
/// strictly after the established marker, otherwise the first candidate
/// overall. A prose mention of a ruling word can mis-trigger the fallback
/// when no established section exists; the heuristic is kept as-is because
/// it holds on real rulings.
fn select_main_ruling<'a>(
    candidates: &'a [RulingMatch],
    established: Option<&MarkerMatch>,
) -> Option<&'a RulingMatch> {
    if let Some(est) = established {
        if let Some(m) = candidates.iter().find(|c| c.start > est.end) {
            return Some(m);
        }
    }
    candidates.first()
}

/// Sections are pushed in kind order; one whose span would overlap the
/// previously emitted span is dropped. This can only trigger on degenerate
/// marker layouts (e.g. an established marker sitting before the title).
fn push_section(sections: &mut Vec<Section>, section: Section) {
    if let Some(last) = sections.last() {
        if section.start < last.end {
            debug!(kind = section.kind.as_str(), "dropping overlapping section");
            return;
        }
    }
    sections.push(section);
}
