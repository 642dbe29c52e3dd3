//! Configuration options for SLIM encoding and decoding.
//!
//! Options are plain immutable values constructed once per call and threaded
//! through the recursion; there is no global or ambient configuration.
//!
//! - [`EncodeOptions`]: depth limit, table threshold, cosmetic flags
//! - [`DecodeOptions`]: strictness and the decoder's own depth guard
//!
//! ## Examples
//!
//! ```rust
//! use serde_slim::{encode_with_options, EncodeOptions, SlimValue};
//!
//! let value = SlimValue::from(vec![SlimValue::from(1), SlimValue::from(2)]);
//!
//! // Keep arrays of records in list form until at least 3 rows
//! let options = EncodeOptions::new().with_table_threshold(3);
//! let slim = encode_with_options(&value, &options);
//! assert_eq!(slim, "@#[1,2]");
//! ```

/// Configuration for the encoder.
///
/// # Examples
///
/// ```rust
/// use serde_slim::EncodeOptions;
///
/// let options = EncodeOptions::new()
///     .with_max_depth(8)
///     .with_table_threshold(2);
/// assert_eq!(options.max_depth, 8);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Maximum recursion depth before a subtree is replaced with the `!DEEP`
    /// sentinel. Truncation is silent; the encoder never fails.
    pub max_depth: usize,
    /// Minimum number of rows before an array of records is encoded as a
    /// table instead of a generic list.
    pub table_threshold: usize,
    /// Reserved cosmetic flag. The wire form has no pretty variant; the flag
    /// is accepted for API compatibility and currently has no effect.
    pub pretty: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            max_depth: 15,
            table_threshold: 1,
            pretty: false,
        }
    }
}

impl EncodeOptions {
    /// Creates default options (depth 15, table threshold 1).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum recursion depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the minimum row count for table form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_slim::EncodeOptions;
    ///
    /// let options = EncodeOptions::new().with_table_threshold(5);
    /// assert_eq!(options.table_threshold, 5);
    /// ```
    #[must_use]
    pub fn with_table_threshold(mut self, table_threshold: usize) -> Self {
        self.table_threshold = table_threshold;
        self
    }

    /// Sets the cosmetic pretty flag.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Configuration for the decoder.
///
/// In the default lenient mode, malformed or truncated input degrades to a
/// best-effort partial value. Strict mode turns malformed markers, unbalanced
/// delimiters, table row-count mismatches, trailing input, and depth-limit
/// hits into errors.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{decode_with_options, DecodeOptions};
///
/// let options = DecodeOptions::strict();
/// assert!(decode_with_options("@[#1,#2", &options).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Reject malformed input instead of recovering best-effort.
    pub strict: bool,
    /// Maximum nesting depth the parser will follow. In lenient mode a deeper
    /// subtree decodes to null and is skipped; in strict mode it is an error.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            strict: false,
            max_depth: 128,
        }
    }
}

impl DecodeOptions {
    /// Creates default (lenient) options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates strict options.
    #[must_use]
    pub fn strict() -> Self {
        DecodeOptions {
            strict: true,
            ..Default::default()
        }
    }

    /// Sets strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets the decoder's nesting depth limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
