//! Configuration options for structural parsing.
//!
//! The `Options` struct controls URL resolution targets, infobox image
//! defaults, and the optional pre-split cleanup pass.

/// Default wiki used to resolve root- and dot-relative URLs.
pub const DEFAULT_WIKI_ORIGIN: &str = "https://en.wikipedia.org";

/// Default endpoint that serves a file by name.
pub const DEFAULT_FILE_PATH_BASE: &str = "https://commons.wikimedia.org/wiki/Special:FilePath/";

/// Configuration options for structural parsing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use wikiparse::Options;
///
/// // Resolve relative links against the German Wikipedia
/// let options = Options {
///     wiki_origin: "https://de.wikipedia.org".to_string(),
///     strip_chrome: true,
///     ..Options::default()
/// };
/// assert_eq!(options.min_image_dimension, 50);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Origin prepended to root-relative (`/path`) URLs and used as the
    /// `/wiki/` base for dot-relative (`./File:...`) URLs.
    ///
    /// Default: `https://en.wikipedia.org`
    pub wiki_origin: String,

    /// Prefix that file-page URLs (`/wiki/File:<name>`) are rewritten to.
    /// The encoded file name is appended directly.
    ///
    /// Default: `https://commons.wikimedia.org/wiki/Special:FilePath/`
    pub file_path_base: String,

    /// Width reported for the infobox image when the markup has none.
    ///
    /// Default: `400`
    pub default_infobox_width: u32,

    /// Height reported for the infobox image when the markup has none.
    ///
    /// Default: `300`
    pub default_infobox_height: u32,

    /// Images whose declared width or height is below this value are
    /// treated as decorative icons by the image collector.
    ///
    /// Only applies when both dimensions are declared.
    ///
    /// Default: `50`
    pub min_image_dimension: u32,

    /// Remove edit links, navboxes, hatnotes and other chrome before
    /// splitting the document into sections.
    ///
    /// Default: `false`
    pub strip_chrome: bool,

    /// Reject input longer than this many bytes.
    ///
    /// Default: `None` (no limit)
    pub max_input_bytes: Option<usize>,
}

impl Options {
    /// Wiki origin without a trailing slash.
    #[must_use]
    pub fn origin(&self) -> &str {
        self.wiki_origin.trim_end_matches('/')
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wiki_origin: DEFAULT_WIKI_ORIGIN.to_string(),
            file_path_base: DEFAULT_FILE_PATH_BASE.to_string(),
            default_infobox_width: 400,
            default_infobox_height: 300,
            min_image_dimension: 50,
            strip_chrome: false,
            max_input_bytes: None,
        }
    }
}
