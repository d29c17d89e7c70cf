//! Document metadata helpers for downloaded ruling files.
//!
//! Filenames from the case-file service follow
//! `{case}_{YYYYMMDD}_{DocType}.pdf`; these helpers recover the embedded
//! pieces without touching the document body.

use std::sync::LazyLock;

use regex::Regex;

/// Date component embedded in a document filename.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FILENAME_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(\d{4})(\d{2})(\d{2})_").expect("valid regex"));

/// Extract an ISO `YYYY-MM-DD` date from a document filename.
///
/// Returns `None` when no date component is present or the digit groups do
/// not form a real calendar date.
///
/// # Examples
/// ```
/// use sudakt_parser::meta::date_from_filename;
///
/// assert_eq!(
///     date_from_filename("А60-21280-2023_20231204_Opredelenie.pdf").as_deref(),
///     Some("2023-12-04")
/// );
/// assert_eq!(date_from_filename("notes.pdf"), None);
/// ```
#[must_use]
pub fn date_from_filename(filename: &str) -> Option<String> {
    let caps = FILENAME_DATE.captures(filename)?;
    let (year, month, day) = (
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    );
    let iso = format!("{year}-{month}-{day}");
    chrono::NaiveDate::parse_from_str(&iso, "%Y-%m-%d").ok()?;
    Some(iso)
}

/// Extract the document type from a filename like
/// `А60-21280-2023_20231204_Opredelenie.pdf`.
///
/// The last underscore-separated stem component carries the type; filenames
/// with fewer than three components are not from the download pipeline and
/// yield `None`.
#[must_use]
pub fn doc_type_from_filename(filename: &str) -> Option<String> {
    let stem = filename.rsplit_once('.').map_or(filename, |(stem, _)| stem);
    let parts: Vec<&str> = stem.split('_').collect();
    if parts.len() < 3 {
        return None;
    }
    let doc_type = parts.last()?;
    if doc_type.is_empty() {
        return None;
    }
    Some(capitalize(doc_type))
}

/// Normalize a court name: collapse whitespace and title-case words while
/// keeping short all-caps abbreviations ("АС", "ФАС") intact.
#[must_use]
pub fn normalize_court_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let is_abbreviation = word.chars().count() <= 3
                && word.chars().any(char::is_uppercase)
                && !word.chars().any(char::is_lowercase);
            if is_abbreviation {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
