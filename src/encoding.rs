//! Byte-input decoding.
//!
//! Article HTML from the REST API is UTF-8, but saved pages and mirrors may
//! declare something else. A byte-order mark wins, then a `<meta>` charset
//! declaration in the first kilobyte, then UTF-8.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252, X_USER_DEFINED};

use crate::patterns::META_CHARSET;

/// Bytes scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Work out which encoding `html` is in.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .map(declared_to_effective)
        .unwrap_or(UTF_8)
}

/// A `<meta>` declaration is read from ASCII-compatible bytes, so a UTF-16
/// label there means UTF-8 and `x-user-defined` means windows-1252.
fn declared_to_effective(declared: &'static Encoding) -> &'static Encoding {
    if declared == X_USER_DEFINED {
        WINDOWS_1252
    } else {
        declared.output_encoding()
    }
}

/// Decode `html` to a UTF-8 string. Malformed sequences become U+FFFD.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    // `decode` strips a BOM and falls back to the BOM's encoding if present.
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
