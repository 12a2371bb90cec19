//! Infobox extraction.
//!
//! Finds the first `.infobox` element, lifts out its lead image, removes the
//! table row that held the image, then detaches the whole infobox from the
//! document so it cannot leak into the intro or any section.

use tracing::debug;

use crate::alt_text::resolve_alt_text;
use crate::dom::{self, Attributes, Document, NodeId, NodeRef};
use crate::options::Options;
use crate::patterns::INFOBOX_SELECTOR;
use crate::result::InfoboxImage;
use crate::url_utils::resolve_image_url_with;

/// What [`extract_infobox`] pulled out of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoboxExtraction {
    /// Handle to the detached infobox element.
    pub infobox: Option<NodeId>,
    /// Lead image of the infobox.
    pub infobox_image: Option<InfoboxImage>,
}

/// Extract the infobox with default options. Mutates `doc`.
pub fn extract_infobox(doc: &Document) -> InfoboxExtraction {
    extract_infobox_with(doc, &Options::default())
}

/// Extract the infobox and its lead image. Mutates `doc`.
///
/// Without an infobox the document is left untouched. Otherwise the infobox
/// is always detached; when it holds an `<img>`, that image's row (or the
/// image itself when it sits outside any table row) is removed first.
pub fn extract_infobox_with(doc: &Document, options: &Options) -> InfoboxExtraction {
    let Some(infobox) = dom::query_first(doc, INFOBOX_SELECTOR) else {
        return InfoboxExtraction::default();
    };

    let infobox_image = dom::first_descendant(&infobox, "img").map(|img| {
        let image = build_infobox_image(&img, options);
        dom::detach(&image_row(&img, &infobox));
        image
    });

    dom::detach(&infobox);

    debug!(
        has_image = infobox_image.is_some(),
        "detached infobox"
    );

    InfoboxExtraction {
        infobox: Some(infobox.id),
        infobox_image,
    }
}

fn build_infobox_image(img: &NodeRef, options: &Options) -> InfoboxImage {
    let raw = img
        .non_empty_attr("src")
        .or_else(|| img.non_empty_attr("data-src"))
        .unwrap_or_default();
    let url = resolve_image_url_with(&raw, options);
    let alt_text = resolve_alt_text(img, None::<&NodeRef>, Some(&url));

    InfoboxImage {
        url,
        alt_text,
        width: dom::int_attr(img, "width").unwrap_or(options.default_infobox_width),
        height: dom::int_attr(img, "height").unwrap_or(options.default_infobox_height),
    }
}

/// The node to remove so the image's visual row disappears: the nearest
/// `<tr>` ancestor, the `<tr>` owning the nearest `<td>`, or the image itself.
/// The search never leaves the infobox.
fn image_row<'a>(img: &NodeRef<'a>, infobox: &NodeRef<'a>) -> NodeRef<'a> {
    let mut current = Some(*img);
    while let Some(node) = current {
        if node.id == infobox.id {
            break;
        }
        if dom::is_tag(&node, "tr") {
            return node;
        }
        if dom::is_tag(&node, "td") {
            if let Some(row) = node.parent().filter(|p| dom::is_tag(p, "tr")) {
                return row;
            }
        }
        current = node.parent();
    }
    *img
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFOBOX_HTML: &str = r#"<body>
        <section>
          <table class="infobox vcard">
            <tr><th colspan="2">Eiffel Tower</th></tr>
            <tr><td colspan="2"><a href="/wiki/File:Tour_Eiffel.jpg"><img src="//upload.wikimedia.org/wikipedia/commons/thumb/a/a8/Tour_Eiffel.jpg/220px-Tour_Eiffel.jpg" width="220" height="300"></a></td></tr>
            <tr><th>Height</th><td>330 m</td></tr>
          </table>
          <p>The Eiffel Tower is a tower.</p>
        </section>
    </body>"#;

    #[test]
    fn extracts_image_and_detaches_infobox() {
        let doc = dom::parse(INFOBOX_HTML);
        let result = extract_infobox(&doc);

        let image = result.infobox_image.unwrap();
        assert_eq!(
            image.url,
            "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a8/Tour_Eiffel.jpg/220px-Tour_Eiffel.jpg"
        );
        assert_eq!(image.alt_text, "220px-Tour Eiffel");
        assert_eq!(image.width, 220);
        assert_eq!(image.height, 300);

        assert!(doc.select(".infobox").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn detached_infobox_keeps_data_rows_only() {
        let doc = dom::parse(INFOBOX_HTML);
        let result = extract_infobox(&doc);

        let infobox = dom::node_by_id(&doc, result.infobox.unwrap()).unwrap();
        let html = dom::render(&infobox);
        assert!(!html.contains("<img"));
        assert!(html.contains("330 m"));
        assert!(html.contains("Eiffel Tower"));
        assert_eq!(dom::descendants_matching(&infobox, "tr").len(), 2);
    }

    #[test]
    fn no_infobox_leaves_document_untouched() {
        let html = "<body><p>Plain</p><img src=\"a.png\"></body>";
        let doc = dom::parse(html);
        let before = doc.html().to_string();

        let result = extract_infobox(&doc);

        assert_eq!(result, InfoboxExtraction::default());
        assert_eq!(doc.html().to_string(), before);
    }

    #[test]
    fn infobox_without_image_is_still_detached() {
        let doc = dom::parse(r#"<body><table class="infobox"><tr><td>Data</td></tr></table><p>x</p></body>"#);
        let result = extract_infobox(&doc);

        assert!(result.infobox.is_some());
        assert!(result.infobox_image.is_none());
        assert!(doc.select(".infobox").is_empty());
    }

    #[test]
    fn missing_dimensions_use_defaults() {
        let doc = dom::parse(r#"<div class="infobox"><img src="/w/a.png" alt="Logo" width="wide"></div>"#);
        let image = extract_infobox(&doc).infobox_image.unwrap();

        assert_eq!(image.url, "https://en.wikipedia.org/w/a.png");
        assert_eq!(image.alt_text, "Logo");
        assert_eq!(image.width, 400);
        assert_eq!(image.height, 300);
    }

    #[test]
    fn data_src_used_when_src_missing() {
        let doc = dom::parse(r#"<div class="infobox"><img data-src="//upload.wikimedia.org/x/Lazy.png"></div>"#);
        let image = extract_infobox(&doc).infobox_image.unwrap();

        assert_eq!(image.url, "https://upload.wikimedia.org/x/Lazy.png");
        assert_eq!(image.alt_text, "Lazy");
    }

    #[test]
    fn row_search_stays_inside_infobox() {
        let doc = dom::parse(
            r#"<table id="layout"><tr><td>
                 <div class="infobox"><img src="//upload.wikimedia.org/x/Pic.jpg"><p>facts</p></div>
               </td><td id="sibling">other column</td></tr></table>"#,
        );
        let result = extract_infobox(&doc);

        let infobox = dom::node_by_id(&doc, result.infobox.unwrap()).unwrap();
        assert!(dom::first_descendant(&infobox, "img").is_none());
        assert!(dom::first_descendant(&infobox, "p").is_some());
        // The outer layout row survives.
        assert!(doc.select("#sibling").exists());
    }

    #[test]
    fn custom_default_dimensions() {
        let options = Options {
            default_infobox_width: 250,
            default_infobox_height: 180,
            ..Options::default()
        };
        let doc = dom::parse(r#"<div class="infobox"><img src="https://x.org/a.png"></div>"#);
        let image = extract_infobox_with(&doc, &options).infobox_image.unwrap();

        assert_eq!((image.width, image.height), (250, 180));
    }
}
