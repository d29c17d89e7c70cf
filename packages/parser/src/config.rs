//! Configuration constants for the parser.
//!
//! All size thresholds are measured in characters, not bytes; Cyrillic text
//! is two bytes per letter in UTF-8 and byte-based limits would silently
//! halve every window.

/// Number of characters from the start of a document searched for the title.
///
/// Titles sit in the opening block; searching the whole text risks matching
/// a body-text mention of a ruling-type word.
pub const TITLE_SEARCH_WINDOW: usize = 3000;

/// Minimal number of characters before the title for that prefix to count as
/// a header section (court requisites, case number, date).
pub const MIN_HEADER_OFFSET: usize = 50;

/// Characters captured on each side of a statute citation as context.
pub const CITATION_CONTEXT_CHARS: usize = 50;

/// Default lower chunk-size bound, in characters.
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 300;

/// Default upper chunk-size bound, in characters.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 2000;
