//! Dynamic value representation for SLIM data.
//!
//! This module provides the [`SlimValue`] enum which represents any value the
//! SLIM format can carry. It is the input of the encoder and the output of the
//! decoder, and is useful whenever the structure isn't known at compile time.
//!
//! ## Core Types
//!
//! - [`SlimValue`]: a closed tagged union over null, undefined, booleans,
//!   numbers, text, arrays, and ordered records
//! - [`Number`]: numeric values including the special values (`Infinity`,
//!   `-Infinity`, `NaN`), which are first-class SLIM literals
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_slim::{SlimValue, Number};
//!
//! // From primitives
//! let null = SlimValue::Null;
//! let boolean = SlimValue::from(true);
//! let number = SlimValue::from(42);
//! let text = SlimValue::from("hello");
//!
//! // Using the slim! macro
//! use serde_slim::slim;
//! let obj = slim!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use serde_slim::SlimValue;
//!
//! let value = SlimValue::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.as_i64(), Some(42));
//! ```

use crate::SlimMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any valid SLIM value.
///
/// Record key order is significant: [`SlimValue::Object`] is backed by an
/// insertion-ordered map and the order survives an encode/decode round trip.
///
/// `Undefined` models a key that is absent-but-distinct-from-null. It is a
/// first-class value (`!undef` on the wire) everywhere except inside table
/// cells, where both `Null` and `Undefined` collapse to an empty cell.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{SlimValue, Number};
///
/// let null = SlimValue::Null;
/// let num = SlimValue::Number(Number::Integer(42));
/// let text = SlimValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SlimValue {
    #[default]
    Null,
    Undefined,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<SlimValue>),
    Object(SlimMap),
}

/// A numeric value: integer, finite float, or one of the special values.
///
/// SLIM treats `Infinity`, `-Infinity`, and `NaN` as legal number literals
/// (`#Inf`, `#-Inf`, `#NaN`), so they get dedicated variants instead of
/// hiding inside a float. [`Number::from`] normalizes non-finite `f64` input
/// into these variants, which keeps `Float` always finite.
///
/// Equality is numeric across the integer/float boundary: `Integer(1000)`
/// equals `Float(1000.0)`. This matters because whole-valued floats encode as
/// integer text and come back as integers.
///
/// # Examples
///
/// ```rust
/// use serde_slim::Number;
///
/// assert_eq!(Number::Integer(1000), Number::Float(1000.0));
/// assert_eq!(Number::from(f64::NAN), Number::NaN);
/// assert!(Number::NaN == Number::NaN);
/// ```
#[derive(Clone, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (`Infinity`, `-Infinity`, or `NaN`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_slim::Number;
    ///
    /// assert!(Number::Infinity.is_special());
    /// assert!(Number::NaN.is_special());
    /// assert!(!Number::Integer(42).is_special());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and floats with no fractional part
    /// that fit in i64 range. Returns `None` for special values and
    /// out-of-range floats.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_slim::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    ///
    /// Always succeeds; special values map to the corresponding IEEE values.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Integer(a), Number::Float(b)) | (Number::Float(b), Number::Integer(a)) => {
                *b == *a as f64
            }
            (Number::Infinity, Number::Infinity)
            | (Number::NegativeInfinity, Number::NegativeInfinity)
            | (Number::NaN, Number::NaN) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Number {
    /// Formats the number in its SLIM literal body (without the `#` marker).
    ///
    /// Whole-valued finite floats print as integer text, so `1000.0` and
    /// `1000` are indistinguishable on the wire.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    write!(f, "{}", if *fl > 0.0 { "Inf" } else { "-Inf" })
                } else if fl.fract() == 0.0 && fl.abs() < i64::MAX as f64 {
                    write!(f, "{}", *fl as i64)
                } else {
                    write!(f, "{}", fl)
                }
            }
            Number::Infinity => write!(f, "Inf"),
            Number::NegativeInfinity => write!(f, "-Inf"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::from(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }
}

impl SlimValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, SlimValue::Null)
    }

    /// Returns `true` if the value is undefined.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, SlimValue::Undefined)
    }

    /// Returns `true` if the value is null or undefined.
    #[inline]
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, SlimValue::Null | SlimValue::Undefined)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, SlimValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, SlimValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, SlimValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, SlimValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, SlimValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SlimValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_slim::SlimValue;
    ///
    /// assert_eq!(SlimValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(SlimValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SlimValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SlimValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as an `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SlimValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<SlimValue>> {
        match self {
            SlimValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&SlimMap> {
        match self {
            SlimValue::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Display for SlimValue {
    /// Formats the value as SLIM text with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode(self))
    }
}

impl Serialize for SlimValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SlimValue::Null | SlimValue::Undefined => serializer.serialize_unit(),
            SlimValue::Bool(b) => serializer.serialize_bool(*b),
            SlimValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            SlimValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            SlimValue::Number(Number::Infinity) => serializer.serialize_f64(f64::INFINITY),
            SlimValue::Number(Number::NegativeInfinity) => {
                serializer.serialize_f64(f64::NEG_INFINITY)
            }
            SlimValue::Number(Number::NaN) => serializer.serialize_f64(f64::NAN),
            SlimValue::String(s) => serializer.serialize_str(s),
            SlimValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            SlimValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for SlimValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SlimValueVisitor;

        impl<'de> Visitor<'de> for SlimValueVisitor {
            type Value = SlimValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid SLIM value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(SlimValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(SlimValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(SlimValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(SlimValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(SlimValue::Number(Number::from(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(SlimValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(SlimValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(SlimValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(SlimValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(SlimValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = SlimMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(SlimValue::Object(values))
            }
        }

        deserializer.deserialize_any(SlimValueVisitor)
    }
}

// TryFrom implementations for extracting values from SlimValue
impl TryFrom<SlimValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: SlimValue) -> crate::Result<Self> {
        match value {
            SlimValue::Number(Number::Integer(i)) => Ok(i),
            SlimValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<SlimValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: SlimValue) -> crate::Result<Self> {
        match value {
            SlimValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<SlimValue> for bool {
    type Error = crate::Error;

    fn try_from(value: SlimValue) -> crate::Result<Self> {
        match value {
            SlimValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<SlimValue> for String {
    type Error = crate::Error;

    fn try_from(value: SlimValue) -> crate::Result<Self> {
        match value {
            SlimValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

// From implementations for creating SlimValue from primitives
impl From<bool> for SlimValue {
    fn from(value: bool) -> Self {
        SlimValue::Bool(value)
    }
}

impl From<i8> for SlimValue {
    fn from(value: i8) -> Self {
        SlimValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for SlimValue {
    fn from(value: i16) -> Self {
        SlimValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for SlimValue {
    fn from(value: i32) -> Self {
        SlimValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for SlimValue {
    fn from(value: i64) -> Self {
        SlimValue::Number(Number::Integer(value))
    }
}

impl From<u8> for SlimValue {
    fn from(value: u8) -> Self {
        SlimValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for SlimValue {
    fn from(value: u16) -> Self {
        SlimValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for SlimValue {
    fn from(value: u32) -> Self {
        SlimValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for SlimValue {
    fn from(value: f32) -> Self {
        SlimValue::Number(Number::from(value))
    }
}

impl From<f64> for SlimValue {
    fn from(value: f64) -> Self {
        SlimValue::Number(Number::from(value))
    }
}

impl From<Number> for SlimValue {
    fn from(value: Number) -> Self {
        SlimValue::Number(value)
    }
}

impl From<String> for SlimValue {
    fn from(value: String) -> Self {
        SlimValue::String(value)
    }
}

impl From<&str> for SlimValue {
    fn from(value: &str) -> Self {
        SlimValue::String(value.to_string())
    }
}

impl From<Vec<SlimValue>> for SlimValue {
    fn from(value: Vec<SlimValue>) -> Self {
        SlimValue::Array(value)
    }
}

impl From<SlimMap> for SlimValue {
    fn from(value: SlimMap) -> Self {
        SlimValue::Object(value)
    }
}
