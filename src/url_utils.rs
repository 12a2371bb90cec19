//! URL Utility Functions
//!
//! Normalizes the image URLs found in Wikipedia article markup into fully
//! qualified, directly fetchable addresses. Everything here is a pure string
//! transform; nothing touches the network.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::options::Options;
use crate::patterns::{FILE_PREFIX_NAME, IMAGE_PATH_SEGMENT, TRAILING_EXTENSION, WIKI_FILE_PAGE};

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Check if a string is an absolute `http(s)://` URL with a host.
#[must_use]
pub fn is_absolute_http_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Prefix protocol-relative URLs (`//host/...`) with `https:`.
#[must_use]
pub fn normalize_protocol(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

/// Resolve dot-relative (`./File:x`) and root-relative (`/path`) URLs
/// against the configured wiki.
#[must_use]
pub fn resolve_relative_path(url: &str, options: &Options) -> String {
    if let Some(rest) = url.strip_prefix("./") {
        return format!("{}/wiki/{rest}", options.origin());
    }
    if url.starts_with('/') && !url.starts_with("//") {
        return format!("{}{url}", options.origin());
    }
    url.to_string()
}

/// Rewrite a wiki file page (`/wiki/File:<name>`, `/wiki/Image:<name>`) into
/// the direct file endpoint.
///
/// Returns `None` when the URL is not a file page or the name is empty.
#[must_use]
pub fn file_page_to_file_path(url: &str, options: &Options) -> Option<String> {
    let raw_name = WIKI_FILE_PAGE.captures(url)?.get(1)?.as_str();
    let name = raw_name
        .split('#')
        .next()
        .unwrap_or_default()
        .split('?')
        .next()
        .unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    // Names in hrefs are often already escaped; decode first so `%20` is not
    // re-encoded as `%2520`.
    let decoded = percent_decode_str(name).decode_utf8_lossy();
    let encoded = utf8_percent_encode(&decoded, URI_COMPONENT);
    Some(format!("{}{encoded}", options.file_path_base))
}

/// Normalize a raw image URL with default options.
///
/// See [`resolve_image_url_with`].
#[must_use]
pub fn resolve_image_url(raw: &str) -> String {
    resolve_image_url_with(raw, &Options::default())
}

/// Normalize a raw image URL.
///
/// Steps, in order:
/// 1. `//host/...` gains an `https:` scheme.
/// 2. `/path` is prefixed with the wiki origin.
/// 3. `./File:...` becomes `<origin>/wiki/File:...`.
/// 4. File pages are rewritten to the direct file endpoint; this wins over
///    everything else.
/// 5. `upload.wikimedia.org` thumbnails are kept as they are.
///
/// The result is either the input unchanged or an absolute `http(s)` URL.
/// Applying the function twice gives the same result as applying it once.
#[must_use]
pub fn resolve_image_url_with(raw: &str, options: &Options) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let resolved = normalize_protocol(raw);
    let resolved = resolve_relative_path(&resolved, options);

    if let Some(file_path) = file_page_to_file_path(&resolved, options) {
        return file_path;
    }

    // Thumbnails stay as-is: rewriting them to the original upload breaks
    // generated renditions such as map tiles.
    if resolved.contains("upload.wikimedia.org") {
        return normalize_protocol(&resolved);
    }

    resolved
}

/// Derive a human-readable label from an image URL.
///
/// Tries, in order: the name after `File:`, the last path segment with an
/// image extension, the last path segment. The chosen name is
/// percent-decoded, underscores become spaces and the extension is dropped.
#[must_use]
pub fn filename_from_url(url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    let candidate = FILE_PREFIX_NAME
        .captures(url)
        .and_then(|c| c.get(1))
        .or_else(|| IMAGE_PATH_SEGMENT.captures(url).and_then(|c| c.get(1)))
        .map(|m| m.as_str())
        .or_else(|| {
            let last = url.rsplit('/').next().unwrap_or_default();
            let last = last.split('?').next().unwrap_or_default();
            let last = last.split('#').next().unwrap_or_default();
            Some(last).filter(|s| !s.is_empty())
        })?;

    let decoded = percent_decode_str(candidate).decode_utf8_lossy();
    let spaced = decoded.replace('_', " ");
    let label = TRAILING_EXTENSION.replace(&spaced, "").trim().to_string();

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}
