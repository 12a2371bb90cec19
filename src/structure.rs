//! Structural parse of a whole article.
//!
//! Parses the HTML once, detaches the infobox, optionally strips chrome, and
//! splits what remains into intro and sections. Every later stage works on
//! the same live document.

use tracing::debug;

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::html_processing::remove_chrome;
use crate::infobox::extract_infobox_with;
use crate::options::Options;
use crate::result::ParsedArticleStructure;
use crate::sections::split_document;

/// Parse with default options. Never fails; see
/// [`parse_article_structure_with_options`].
#[must_use]
pub fn parse_article_structure(html: &str) -> ParsedArticleStructure {
    parse_article_structure_with_options(html, &Options::default())
}

/// Parse with custom options.
///
/// Any failure yields [`ParsedArticleStructure::empty`].
#[must_use]
pub fn parse_article_structure_with_options(html: &str, options: &Options) -> ParsedArticleStructure {
    match try_parse_article_structure_with_options(html, options) {
        Ok(structure) => structure,
        Err(err) => {
            debug!(error = %err, "structural parse degraded to empty result");
            ParsedArticleStructure::empty()
        }
    }
}

/// Parse raw bytes, honoring a BOM or `<meta charset>` declaration.
#[must_use]
pub fn parse_article_structure_bytes(html: &[u8]) -> ParsedArticleStructure {
    parse_article_structure(&encoding::transcode_to_utf8(html))
}

/// Parse with custom options, reporting why nothing could be extracted.
///
/// # Errors
///
/// - [`Error::EmptyInput`] when `html` is empty or whitespace only.
/// - [`Error::InputTooLarge`] when `html` exceeds `options.max_input_bytes`.
///
/// Anything else parses: the HTML parser recovers from malformed markup.
pub fn try_parse_article_structure_with_options(
    html: &str,
    options: &Options,
) -> Result<ParsedArticleStructure> {
    if html.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(limit) = options.max_input_bytes {
        if html.len() > limit {
            return Err(Error::InputTooLarge { len: html.len(), limit });
        }
    }

    let doc = dom::parse(html);

    let extraction = extract_infobox_with(&doc, options);

    if options.strip_chrome {
        remove_chrome(&doc);
    }

    let split = split_document(&doc);

    debug!(
        input_len = html.len(),
        has_infobox = extraction.infobox.is_some(),
        intro_nodes = split.intro_nodes.len(),
        sections = split.sections.len(),
        "parsed article structure"
    );

    Ok(ParsedArticleStructure {
        dom: doc,
        infobox: extraction.infobox,
        infobox_image: extraction.infobox_image,
        intro_nodes: split.intro_nodes,
        sections: split.sections,
    })
}
