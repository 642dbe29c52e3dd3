//! Error types for SLIM encoding and decoding.
//!
//! The encoder is total and never fails. The decoder reports errors only in
//! strict mode; in the default lenient mode it recovers best-effort and these
//! types never surface. Schema validation does not use this module at all —
//! it always returns an accumulated report (see [`crate::schema`]).
//!
//! Parse errors carry the byte offset into the input where the problem was
//! detected, plus a short description of what the parser expected.
//!
//! ## Examples
//!
//! ```rust
//! use serde_slim::{decode_with_options, DecodeOptions, Error};
//!
//! let result = decode_with_options("?X", &DecodeOptions::strict());
//! match result {
//!     Err(Error::Parse { offset, .. }) => assert_eq!(offset, 1),
//!     other => panic!("expected a parse error, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Errors that can occur while decoding SLIM text or bridging through Serde.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// The input did not match the grammar at the given byte offset.
    #[error("parse error at offset {offset}: expected {expected}")]
    Parse { offset: usize, expected: String },

    /// Nesting exceeded the decoder's depth limit.
    #[error("nesting depth limit exceeded at offset {offset}")]
    DepthExceeded { offset: usize },

    /// A complete value was parsed but input remained.
    #[error("trailing characters at offset {offset}")]
    TrailingInput { offset: usize },

    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// Error raised by a Serde `Serialize`/`Deserialize` implementation.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a parse error at a byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_slim::Error;
    ///
    /// let err = Error::parse(10, "closing ']'");
    /// assert!(err.to_string().contains("offset 10"));
    /// ```
    pub fn parse(offset: usize, expected: impl Into<String>) -> Self {
        Error::Parse {
            offset,
            expected: expected.into(),
        }
    }

    /// Creates a depth-limit error at a byte offset.
    pub fn depth_exceeded(offset: usize) -> Self {
        Error::DepthExceeded { offset }
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
