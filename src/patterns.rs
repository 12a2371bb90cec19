//! Compiled regex patterns and blocklists for structural parsing.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// URL Patterns
// =============================================================================

/// Matches a wiki file page path: `/wiki/File:<name>` or `/wiki/Image:<name>`.
pub static WIKI_FILE_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/wiki/(?:File|Image):(.+)$").expect("WIKI_FILE_PAGE regex")
});

/// Matches a `File:<name>` token anywhere in a URL.
pub static FILE_PREFIX_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)File:([^/?#]+)").expect("FILE_PREFIX_NAME regex")
});

/// Matches the last path segment carrying an image extension.
pub static IMAGE_PATH_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/([^/?#]+\.(?:jpg|jpeg|png|gif|webp|svg))(?:[?#]|$)")
        .expect("IMAGE_PATH_SEGMENT regex")
});

/// Matches a trailing file extension.
pub static TRAILING_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.[^.]+$").expect("TRAILING_EXTENSION regex")
});

/// Matches a pixel-density descriptor in a `srcset` candidate (`2x`, `1.5x`).
pub static SRCSET_DENSITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)x$").expect("SRCSET_DENSITY regex")
});

// =============================================================================
// Charset Patterns
// =============================================================================

/// Matches `<meta charset="...">`.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("META_CHARSET regex")
});

// =============================================================================
// Blocklists
// =============================================================================

/// Class-name fragments marking site chrome. An `<img>` is skipped when it or
/// any ancestor carries a class containing one of these.
pub const UI_CLASS_MARKERS: &[&str] = &[
    "mw-editsection",
    "noprint",
    "mw-ui-",
    "navigation",
    "navbox",
    "catlinks",
    "printfooter",
    "portal",
    "sidebar",
    "hatnote",
    "mw-logo",
    "central-featured",
    "ambox",
    "dablink",
];

/// Lowercase URL fragments that mark logos and sister-project badges.
pub const CHROME_URL_MARKERS: &[&str] = &[
    "logo",
    "icon",
    "commons-logo",
    "wikimedia-logo",
    "wikimediafoundation",
    "wikimedia-",
    "wikiquote",
    "wiktionary",
    "wikibooks",
    "wikisource",
    "wikinews",
    "wikiversity",
    "wikidata",
    "wikivoyage",
    "wikimedia-commons",
];

/// Substrings that mark a lazy-load placeholder rather than a real source.
pub const PLACEHOLDER_SRC_MARKERS: &[&str] = &["placeholder", "1x1", "transparent"];

/// Selectors removed by the chrome cleanup pass.
pub const CHROME_SELECTORS: &[&str] = &[
    ".mw-editsection",
    ".hatnote",
    ".navbox",
    ".catlinks",
    ".printfooter",
    ".portal",
    ".portal-bar",
    ".sister-bar",
    ".sistersitebox",
    ".sidebar",
    ".shortdescription",
    ".nomobile",
    ".mw-empty-elt",
    ".mw-valign-text-top",
    ".plainlinks",
    "style",
];

// =============================================================================
// CSS Selectors
// =============================================================================

/// Selector for the infobox summary table.
pub const INFOBOX_SELECTOR: &str = ".infobox";

/// Heading level that opens a top-level article section.
pub const SECTION_HEADING: &str = "h2";

/// Fallback label for a section whose heading has no text.
pub const DEFAULT_SECTION_HEADING: &str = "Section";
