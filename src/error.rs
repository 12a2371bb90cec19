//! Error types for wikiparse.
//!
//! Only input validation at the top-level parse step can fail. The HTML
//! parser itself recovers from any markup, and everything below it models
//! absence with `Option`.

/// Error type for structural parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input was empty or whitespace only.
    #[error("Invalid HTML input: empty document")]
    EmptyInput,

    /// The input exceeded `Options::max_input_bytes`.
    #[error("HTML input too large: {len} bytes (limit {limit})")]
    InputTooLarge {
        /// Length of the rejected input in bytes.
        len: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
