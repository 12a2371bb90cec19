use std::time::{Duration, Instant};

use wikiparse::{
    parse_article_structure, parse_article_structure_bytes, try_parse_article_structure_with_options,
    Error, Options,
};

#[test]
fn parse_empty_input_is_degenerate() {
    let article = parse_article_structure("");

    assert!(article.is_empty());
    assert!(article.infobox_image.is_none());
    assert!(article.intro_nodes.is_empty());
    assert!(article.sections.is_empty());
    assert_eq!(article.intro_html(), "");
}

#[test]
fn parse_unknown_tag_does_not_panic() {
    let article = parse_article_structure("<notarealtag>");

    assert!(article.infobox_image.is_none());
    assert!(article.sections.is_empty());
}

#[test]
fn parse_empty_bytes_is_degenerate() {
    assert!(parse_article_structure_bytes(b"").is_empty());
}

#[test]
fn parse_unclosed_tags() {
    // The second <section> nests inside the first, so the one top-level
    // wrapper holds an <h2> and becomes the only section.
    let article = parse_article_structure("<section><p>lead<section><h2>Next<p>body");

    assert!(article.intro_nodes.is_empty());
    assert_eq!(article.sections.len(), 1);
    assert!(article.section_html(&article.sections[0]).contains("lead"));
}

#[test]
fn parse_invalid_nesting() {
    let article = parse_article_structure("<p><div></p></div><h2></h2>");

    assert_eq!(article.sections.len(), 1);
    assert_eq!(article.sections[0].heading, "Section");
}

#[test]
fn parse_broken_attributes() {
    let article = parse_article_structure(r#"<table class="infobox id=broken><tr><td><img src="x>"#);
    // Whatever the parser recovers, the call returns a well-formed structure.
    assert!(article.sections.is_empty());
}

#[test]
fn parse_text_only() {
    let article = parse_article_structure("just some text &amp more &lt;");

    assert!(article.sections.is_empty());
    assert!(article.intro_nodes.is_empty());
}

#[test]
fn infobox_with_garbage_dimensions() {
    let article = parse_article_structure(
        r#"<div class="infobox"><img src="//x.org/a.png" width="-5" height="99999999999999"></div>"#,
    );
    let image = article.infobox_image.unwrap_or_else(|| panic!("expected an infobox image"));

    assert_eq!(image.width, 400);
    assert_eq!(image.height, 300);
}

#[test]
fn deeply_nested_markup() {
    let depth = 200;
    let mut html = String::new();
    for _ in 0..depth {
        html.push_str("<div>");
    }
    html.push_str("<h2>Deep</h2>");
    for _ in 0..depth {
        html.push_str("</div>");
    }
    html.insert_str(0, "<p>lead</p>");

    let article = parse_article_structure(&html);
    assert_eq!(article.sections.len(), 1);
    assert_eq!(article.sections[0].heading, "Deep");
    assert_eq!(article.intro_nodes.len(), 1);
}

#[test]
fn large_article_parses_quickly() {
    let mut html = String::from("<section><p>lead</p></section>");
    for i in 0..500 {
        html.push_str(&format!(
            "<section><h2>Heading {i}</h2><p>Paragraph {i} text.</p><img src=\"//upload.wikimedia.org/a/{i}.jpg\"></section>"
        ));
    }

    let start = Instant::now();
    let article = parse_article_structure(&html);
    let elapsed = start.elapsed();

    assert_eq!(article.sections.len(), 500);
    assert_eq!(article.sections[499].id, "section-499");
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}

#[test]
fn size_limit_reports_error() {
    let options = Options {
        max_input_bytes: Some(10),
        ..Options::default()
    };
    let result = try_parse_article_structure_with_options("<p>0123456789</p>", &options);

    match result {
        Err(Error::InputTooLarge { len, limit }) => {
            assert_eq!(len, 17);
            assert_eq!(limit, 10);
        }
        other => panic!("expected InputTooLarge, got {other:?}"),
    }
}
