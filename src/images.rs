//! Image collection.
//!
//! Walks every `<img>` in the document and keeps the ones that look like
//! article content. Site chrome (edit links, navboxes, sister-project badges),
//! lazy-load placeholders and icon-sized images are dropped. The survivors are
//! returned as absolute URLs with a display label, deduplicated by URL in
//! document order.

use std::collections::HashSet;

use tracing::trace;

use crate::alt_text::resolve_alt_text;
use crate::dom::{self, Attributes, Document, NodeRef};
use crate::options::Options;
use crate::patterns::{CHROME_URL_MARKERS, PLACEHOLDER_SRC_MARKERS, SRCSET_DENSITY, UI_CLASS_MARKERS};
use crate::result::ExtractedImage;
use crate::url_utils::{is_absolute_http_url, resolve_image_url_with};

/// Attributes checked, in order, for a direct image source.
const SOURCE_ATTRIBUTES: [&str; 3] = ["src", "data-src", "data-image"];

/// Why an `<img>` was left out of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The image or one of its ancestors is site chrome.
    ChromeContainer,
    /// No usable source attribute or `srcset` candidate.
    NoSource,
    /// The source points at a logo, icon or sister-project badge.
    ChromeUrl,
    /// Both dimensions are declared and one is below the icon threshold.
    TooSmall,
    /// The resolved URL is not an absolute `http(s)` URL.
    NotAbsolute,
}

/// Collect content images with default options. Does not mutate `doc`.
#[must_use]
pub fn extract_all_images(doc: &Document) -> Vec<ExtractedImage> {
    extract_all_images_with(doc, &Options::default())
}

/// Collect content images. Does not mutate `doc`.
#[must_use]
pub fn extract_all_images_with(doc: &Document, options: &Options) -> Vec<ExtractedImage> {
    let body = dom::body(doc);
    let mut images = Vec::new();
    let mut seen_urls = HashSet::new();

    for img in dom::descendants_matching(&body, "img") {
        match qualify_image(&img, options) {
            Ok(image) => {
                if seen_urls.insert(image.url.clone()) {
                    images.push(image);
                }
            }
            Err(reason) => trace!(?reason, "skipped image"),
        }
    }

    images
}

/// Parse `html` and collect its content images.
///
/// Empty input yields an empty list.
#[must_use]
pub fn extract_all_images_from_html(html: &str) -> Vec<ExtractedImage> {
    if html.trim().is_empty() {
        return Vec::new();
    }
    extract_all_images(&dom::parse(html))
}

/// Decide whether a single `<img>` is content and build its entry.
pub fn qualify_image(img: &NodeRef, options: &Options) -> Result<ExtractedImage, SkipReason> {
    if in_chrome_container(img) {
        return Err(SkipReason::ChromeContainer);
    }

    let raw = select_source(img).ok_or(SkipReason::NoSource)?;

    let lower = raw.to_lowercase();
    if CHROME_URL_MARKERS.iter().any(|m| lower.contains(m)) {
        return Err(SkipReason::ChromeUrl);
    }

    if is_icon_sized(img, options.min_image_dimension) {
        return Err(SkipReason::TooSmall);
    }

    let url = resolve_image_url_with(&raw, options);
    if !is_absolute_http_url(&url) {
        return Err(SkipReason::NotAbsolute);
    }

    let parent = dom::parent_element(img);
    let alt_text = resolve_alt_text(img, parent.as_ref(), Some(&url));

    Ok(ExtractedImage { url, alt_text })
}

/// The image or any ancestor carries a chrome class.
fn in_chrome_container(img: &NodeRef) -> bool {
    let mut current = Some(*img);
    while let Some(node) = current {
        if !node.is_element() {
            break;
        }
        if UI_CLASS_MARKERS.iter().any(|m| dom::class_contains(&node, m)) {
            return true;
        }
        current = node.parent();
    }
    false
}

/// First valid direct source, else the densest `srcset` candidate.
fn select_source(img: &NodeRef) -> Option<String> {
    SOURCE_ATTRIBUTES
        .iter()
        .filter_map(|name| img.non_empty_attr(name))
        .find(|src| !is_placeholder_src(src))
        .or_else(|| {
            img.non_empty_attr("srcset")
                .and_then(|srcset| best_srcset_candidate(&srcset))
                .filter(|src| !is_placeholder_src(src))
        })
}

/// Data URIs and lazy-load stand-ins.
#[must_use]
pub fn is_placeholder_src(src: &str) -> bool {
    src.is_empty()
        || src.starts_with("data:")
        || PLACEHOLDER_SRC_MARKERS.iter().any(|m| src.contains(m))
}

/// Pick the URL of the candidate with the highest `<N>x` density
/// (`1.5x` counts as 1.5).
///
/// Falls back to the last candidate when no density descriptor parses.
#[must_use]
pub fn best_srcset_candidate(srcset: &str) -> Option<String> {
    let candidates: Vec<&str> = srcset
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    let mut best = *candidates.last()?;
    let mut best_density = 0.0_f64;

    for &candidate in &candidates {
        let parts: Vec<&str> = candidate.split_whitespace().collect();
        if parts.len() < 2 {
            continue;
        }
        let density = parts
            .last()
            .and_then(|d| SRCSET_DENSITY.captures(d))
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok());
        if let Some(density) = density {
            if density > best_density {
                best_density = density;
                best = candidate;
            }
        }
    }

    best.split_whitespace().next().map(str::to_string)
}

fn is_icon_sized(img: &NodeRef, min_dimension: u32) -> bool {
    match (dom::int_attr(img, "width"), dom::int_attr(img, "height")) {
        (Some(w), Some(h)) if w > 0 && h > 0 => w < min_dimension || h < min_dimension,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_img(doc: &Document) -> NodeRef<'_> {
        dom::query_first(doc, "img").unwrap()
    }

    fn verdict(html: &str) -> Result<ExtractedImage, SkipReason> {
        let doc = dom::parse(html);
        qualify_image(&first_img(&doc), &Options::default())
    }

    #[test]
    fn test_best_srcset_candidate_prefers_highest_density() {
        let srcset = "//upload.wikimedia.org/a/330px-X.jpg 1.5x, //upload.wikimedia.org/a/440px-X.jpg 2x";
        assert_eq!(
            best_srcset_candidate(srcset).as_deref(),
            Some("//upload.wikimedia.org/a/440px-X.jpg")
        );
    }

    #[test]
    fn test_best_srcset_candidate_defaults_to_last() {
        assert_eq!(best_srcset_candidate("a.jpg 320w, b.jpg 640w").as_deref(), Some("b.jpg"));
        assert_eq!(best_srcset_candidate("only.jpg").as_deref(), Some("only.jpg"));
        assert_eq!(best_srcset_candidate(" , "), None);
    }

    #[test]
    fn test_placeholder_sources() {
        assert!(is_placeholder_src(""));
        assert!(is_placeholder_src("data:image/gif;base64,R0lGOD"));
        assert!(is_placeholder_src("/static/placeholder.png"));
        assert!(is_placeholder_src("/img/1x1.gif"));
        assert!(is_placeholder_src("/img/transparent.png"));
        assert!(!is_placeholder_src("//upload.wikimedia.org/a/Foo.jpg"));
    }

    #[test]
    fn test_content_image_is_kept() {
        let image = verdict(r#"<a title="Anchor"><img src="//upload.wikimedia.org/a/Foo.jpg" width="220" height="160"></a>"#)
            .unwrap();
        assert_eq!(image.url, "https://upload.wikimedia.org/a/Foo.jpg");
        assert_eq!(image.alt_text, "Anchor");
    }

    #[test]
    fn test_chrome_ancestor_is_skipped() {
        assert_eq!(
            verdict(r#"<div class="navbox"><span><img src="//upload.wikimedia.org/a/Foo.jpg"></span></div>"#),
            Err(SkipReason::ChromeContainer)
        );
        assert_eq!(
            verdict(r#"<img class="mw-editsection-img" src="//upload.wikimedia.org/a/Foo.jpg">"#),
            Err(SkipReason::ChromeContainer)
        );
    }

    #[test]
    fn test_placeholder_src_falls_back_to_data_src() {
        let image = verdict(r#"<img src="data:image/gif;base64,AAAA" data-src="//upload.wikimedia.org/a/Real.png">"#)
            .unwrap();
        assert_eq!(image.url, "https://upload.wikimedia.org/a/Real.png");
    }

    #[test]
    fn test_data_image_used_when_others_are_placeholders() {
        let image = verdict(
            r#"<img src="/static/placeholder.png" data-src="" data-image="./File:Lazy_map.svg" srcset="//upload.wikimedia.org/a/Other.png 2x">"#,
        )
        .unwrap();
        assert_eq!(image.url, "https://commons.wikimedia.org/wiki/Special:FilePath/Lazy_map.svg");
        assert_eq!(image.alt_text, "Lazy map");
    }

    #[test]
    fn test_srcset_used_when_no_direct_source() {
        let image = verdict(r#"<img srcset="//upload.wikimedia.org/a/Small.jpg 1x, //upload.wikimedia.org/a/Big.jpg 2x">"#)
            .unwrap();
        assert_eq!(image.url, "https://upload.wikimedia.org/a/Big.jpg");
    }

    #[test]
    fn test_missing_source_is_skipped() {
        assert_eq!(verdict(r#"<img alt="nothing">"#), Err(SkipReason::NoSource));
    }

    #[test]
    fn test_logo_url_is_skipped() {
        assert_eq!(
            verdict(r#"<img src="//upload.wikimedia.org/a/Wiktionary-logo-en.svg">"#),
            Err(SkipReason::ChromeUrl)
        );
        assert_eq!(
            verdict(r#"<img src="//upload.wikimedia.org/a/Wikidata.svg" width="200" height="200">"#),
            Err(SkipReason::ChromeUrl)
        );
    }

    #[test]
    fn test_icon_size_is_skipped() {
        assert_eq!(
            verdict(r#"<img src="//upload.wikimedia.org/a/Star.png" width="30" height="30">"#),
            Err(SkipReason::TooSmall)
        );
        assert_eq!(
            verdict(r#"<img src="//upload.wikimedia.org/a/Strip.png" width="400" height="20">"#),
            Err(SkipReason::TooSmall)
        );
    }

    #[test]
    fn test_single_dimension_is_not_icon() {
        assert!(verdict(r#"<img src="//upload.wikimedia.org/a/Star.png" width="30">"#).is_ok());
    }

    #[test]
    fn test_unresolvable_relative_is_skipped() {
        assert_eq!(verdict(r#"<img src="images/foo.png">"#), Err(SkipReason::NotAbsolute));
    }

    #[test]
    fn test_duplicates_keep_first_alt() {
        let doc = dom::parse(
            r#"<body>
                <img src="//upload.wikimedia.org/a/Foo.jpg" alt="First">
                <img src="https://upload.wikimedia.org/a/Foo.jpg" alt="Second">
                <img src="//upload.wikimedia.org/a/Bar.jpg">
            </body>"#,
        );
        let images = extract_all_images(&doc);

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].alt_text, "First");
        assert_eq!(images[1].alt_text, "Bar");
    }

    #[test]
    fn test_collection_does_not_mutate() {
        let doc = dom::parse(r#"<body><div class="navbox"><img src="//x.org/a.png"></div></body>"#);
        let before = doc.html().to_string();
        let _ = extract_all_images(&doc);
        assert_eq!(doc.html().to_string(), before);
    }

    #[test]
    fn test_from_html_empty_input() {
        assert!(extract_all_images_from_html("").is_empty());
        assert!(extract_all_images_from_html("   ").is_empty());
    }
}
