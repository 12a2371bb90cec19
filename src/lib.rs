//! # wikiparse
//!
//! Structural parser for rendered Wikipedia article HTML.
//!
//! Takes the HTML of one article (as served by the REST `page/html`
//! endpoint) and splits it into the parts a reader view needs: the
//! infobox and its lead image, the intro, and the titled sections. A
//! separate pass collects every content image for a gallery.
//!
//! ## Quick Start
//!
//! ```rust
//! use wikiparse::parse_article_structure;
//!
//! let html = r#"<body>
//!   <section><p>Apples are fruit.</p></section>
//!   <section><h2>History</h2><p>Domesticated long ago.</p></section>
//! </body>"#;
//!
//! let article = parse_article_structure(html);
//! assert_eq!(article.sections.len(), 1);
//! assert_eq!(article.sections[0].id, "section-0");
//! assert_eq!(article.sections[0].heading, "History");
//! assert!(article.intro_html().contains("Apples are fruit."));
//! ```
//!
//! ## Features
//!
//! - **Single parse**: the HTML is parsed once; every stage shares one live
//!   document and the result holds node handles into it
//! - **Infobox extraction**: lead image with resolved URL and label, data
//!   table kept separately
//! - **Section splitting**: Parsoid `<section>` wrappers, with an `<h2>`
//!   boundary fallback for other markup
//! - **Image collection**: chrome, placeholders and icons filtered out,
//!   deduplicated by resolved URL
//! - **Never panics on bad input**: degenerate input yields an empty result

mod error;
mod options;
mod patterns;
mod result;
mod structure;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Image URL normalization.
pub mod url_utils;

/// Human-readable image labels.
pub mod alt_text;

/// Infobox detection and lead-image extraction.
pub mod infobox;

/// Intro and section splitting.
pub mod sections;

/// Content image collection.
pub mod images;

/// Chrome removal.
pub mod html_processing;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use alt_text::{resolve_alt_text, FALLBACK_ALT_TEXT};
pub use error::{Error, Result};
pub use html_processing::remove_chrome;
pub use images::{extract_all_images, extract_all_images_from_html, extract_all_images_with};
pub use infobox::{extract_infobox, extract_infobox_with, InfoboxExtraction};
pub use options::{Options, DEFAULT_FILE_PATH_BASE, DEFAULT_WIKI_ORIGIN};
pub use result::{
    ExtractedImage, InfoboxImage, ParsedArticleStructure, RenderedArticle, RenderedSection,
    SectionDescriptor,
};
pub use sections::{split_document, SplitDocument};
pub use structure::{
    parse_article_structure, parse_article_structure_bytes, parse_article_structure_with_options,
    try_parse_article_structure_with_options,
};
pub use url_utils::{filename_from_url, resolve_image_url, resolve_image_url_with};
