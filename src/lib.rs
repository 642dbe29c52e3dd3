//! # serde_slim
//!
//! A Serde-compatible serialization library for the SLIM compact text
//! interchange format.
//!
//! ## What is SLIM?
//!
//! SLIM re-encodes JSON-like data with explicit one-character type markers
//! and a row/column table form for arrays of uniform records. It targets the
//! same niche as other token-oriented formats: structured data that has to
//! fit in as few characters (and LLM tokens) as possible while remaining
//! losslessly round-trippable for common shapes.
//!
//! ## Key Features
//!
//! - **Marker-typed**: every value leads with its kind (`#` number, `?T`
//!   boolean, `!null`, …) so decoding needs one character of lookahead
//! - **Tabular records**: uniform record arrays serialize as compact tables
//!   with a schema header (`|2|id#,name$|`)
//! - **Schema tools**: infer, parse, and validate table schemas without
//!   encoding any rows
//! - **Serde compatible**: works with `#[derive(Serialize, Deserialize)]`
//! - **Total encoder, lenient decoder**: encoding never fails; decoding
//!   recovers best-effort unless strict mode is requested
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_slim = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Serialization and Deserialization
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_slim::{to_string, from_str};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! // Serialize to SLIM
//! let slim_text = to_string(&user).unwrap();
//! assert_eq!(slim_text, "{id:#123,name:Alice,active:?T}");
//!
//! // Deserialize back
//! let user_back: User = from_str(&slim_text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Tables
//!
//! Arrays of uniform records automatically serialize as tables:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_slim::to_string;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Product {
//!     id: u32,
//!     name: String,
//! }
//!
//! let products = vec![
//!     Product { id: 1, name: "Widget".to_string() },
//!     Product { id: 2, name: "Gadget".to_string() },
//! ];
//!
//! let slim_text = to_string(&products).unwrap();
//! assert_eq!(slim_text, "|2|id#,name$|\n1,Widget\n2,Gadget");
//! ```
//!
//! ### Dynamic Values with the slim! Macro
//!
//! ```rust
//! use serde_slim::{slim, SlimValue};
//!
//! let data = slim!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde", "llm"]
//! });
//!
//! if let SlimValue::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Concurrency
//!
//! Encoding and decoding are pure, synchronous transforms over data already
//! in memory. Each call owns its own buffer or cursor; nothing is shared, so
//! concurrent calls over independent inputs need no coordination.
//!
//! ## Format Specification
//!
//! See the [`spec`] module for the complete wire format.

pub mod de;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod schema;
pub mod ser;
pub mod spec;
pub mod stream;
pub mod value;

pub use de::{decode, decode_with_options, Decoder};
pub use error::{Error, Result};
pub use map::SlimMap;
pub use options::{DecodeOptions, EncodeOptions};
pub use schema::{
    infer_schema, parse_schema, validate_schema, ColumnDescriptor, ColumnType, ValidationError,
    ValidationReport,
};
pub use ser::{encode, encode_with_options, Encoder, SlimValueSerializer};
pub use stream::{StreamingDecoder, StreamingEncoder};
pub use value::{Number, SlimValue};

use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to a SLIM string.
///
/// # Examples
///
/// ```rust
/// use serde_slim::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), "{x:#1,y:#2}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. a map with
/// non-string keys). Encoding an already-built [`SlimValue`] never fails;
/// use [`encode`] for that.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a SLIM string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let slim_value = to_value(value)?;
    Ok(encode_with_options(&slim_value, options))
}

/// Convert any `T: Serialize` to a [`SlimValue`].
///
/// Useful for working with SLIM data dynamically when the structure isn't
/// known at compile time.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{to_value, SlimValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: SlimValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<SlimValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(SlimValueSerializer)
}

/// Deserialize a [`SlimValue`] into any `T: Deserialize`.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{from_value, slim};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(slim!({"x": 1, "y": 2})).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: SlimValue) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(value)
}

/// Serialize any `T: Serialize` to a writer in SLIM format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let slim_text = to_string(value)?;
    writer
        .write_all(slim_text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of SLIM text.
///
/// # Examples
///
/// ```rust
/// use serde_slim::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{x:#1,y:#2}").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserialize an instance of type `T` from SLIM text with explicit decode
/// options.
///
/// # Errors
///
/// Returns an error if decoding fails (strict mode) or the decoded value
/// does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let value = decode_with_options(s, options)?;
    from_value(value)
}

/// Deserialize an instance of type `T` from an I/O stream of SLIM text.
///
/// # Errors
///
/// Returns an error if reading fails or the data cannot be deserialized to
/// type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of SLIM text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
