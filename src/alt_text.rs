//! Alt-text resolution for article images.
//!
//! Wikipedia images carry their description in several places. The first
//! non-empty candidate wins:
//!
//! 1. `alt` on the image
//! 2. `title` on the image
//! 3. `data-title` on the image
//! 4. `title` on the parent (usually the wrapping `<a>`)
//! 5. a label derived from the image URL's file name
//! 6. the literal `"Article image"`

use crate::dom::Attributes;
use crate::url_utils::filename_from_url;

/// Label used when no other source yields text.
pub const FALLBACK_ALT_TEXT: &str = "Article image";

const OWN_ATTRIBUTES: [&str; 3] = ["alt", "title", "data-title"];

/// Resolve a display label for an image. Never returns an empty string.
#[must_use]
pub fn resolve_alt_text<A, P>(attrs: &A, parent_attrs: Option<&P>, image_url: Option<&str>) -> String
where
    A: Attributes + ?Sized,
    P: Attributes + ?Sized,
{
    OWN_ATTRIBUTES
        .iter()
        .find_map(|name| attrs.non_empty_attr(name))
        .or_else(|| parent_attrs.and_then(|p| p.non_empty_attr("title")))
        .or_else(|| image_url.and_then(filename_from_url))
        .unwrap_or_else(|| FALLBACK_ALT_TEXT.to_string())
}
