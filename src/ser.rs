//! SLIM encoding.
//!
//! This module provides the [`Encoder`] that converts a [`SlimValue`] tree
//! into SLIM text, and the [`SlimValueSerializer`] that converts any
//! `T: Serialize` into a [`SlimValue`] (the first half of
//! [`to_string`](crate::to_string)).
//!
//! ## Overview
//!
//! Encoding is a total function: any value produces a string, and the only
//! form of truncation is the `!DEEP` sentinel when recursion passes the
//! configured depth limit. Arrays pick the most compact of five encodings, in
//! priority order:
//!
//! 1. **Empty**: `@[]`
//! 2. **Matrix**: every element is a list of numbers — `*[1,2;3,4]`
//! 3. **Numeric list**: every element is a number — `@#[1,2,3]`
//! 4. **Simple text list**: every element is text needing no quoting —
//!    `@[red,green,blue]`
//! 5. **Table**: enough rows and every element is a record —
//!    `|2|id#,name$|` followed by one comma-joined row per line
//! 6. **Mixed list**: anything else, elements fully encoded and `;`-joined
//!
//! ## Usage
//!
//! ```rust
//! use serde_slim::{encode, SlimValue};
//!
//! let value = SlimValue::from(vec![SlimValue::from(1), SlimValue::from(2)]);
//! assert_eq!(encode(&value), "@#[1,2]");
//! ```

use crate::grammar::{
    self, DEPTH_LITERAL, FALSE_LITERAL, NULL_LITERAL, TRUE_LITERAL, UNDEFINED_LITERAL,
};
use crate::schema::{infer_columns, ColumnDescriptor, ColumnType};
use crate::{EncodeOptions, Error, Number, Result, SlimMap, SlimValue};
use serde::{ser, Serialize};

/// Encode a value as SLIM text with default options.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{encode, SlimValue};
///
/// assert_eq!(encode(&SlimValue::Null), "!null");
/// assert_eq!(encode(&SlimValue::Bool(true)), "?T");
/// assert_eq!(encode(&SlimValue::from(42)), "#42");
/// ```
#[must_use]
pub fn encode(value: &SlimValue) -> String {
    encode_with_options(value, &EncodeOptions::default())
}

/// Encode a value as SLIM text with explicit options.
#[must_use]
pub fn encode_with_options(value: &SlimValue, options: &EncodeOptions) -> String {
    let mut encoder = Encoder::new(options.clone());
    encoder.encode_value(value);
    encoder.into_inner()
}

/// The SLIM encoder.
///
/// Owns its output buffer and an immutable copy of the options; the depth
/// counter is threaded through the recursion as an argument.
pub struct Encoder {
    out: String,
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        // Pre-allocate with reasonable capacity to reduce reallocations
        Encoder {
            out: String::with_capacity(256),
            options,
        }
    }

    /// Appends the encoding of `value` to the buffer.
    pub fn encode_value(&mut self, value: &SlimValue) {
        self.write_value(value, 0);
    }

    /// Consumes the encoder and returns the accumulated output.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    fn write_value(&mut self, value: &SlimValue, depth: usize) {
        if depth > self.options.max_depth {
            self.out.push_str(DEPTH_LITERAL);
            return;
        }
        match value {
            SlimValue::Null => self.out.push_str(NULL_LITERAL),
            SlimValue::Undefined => self.out.push_str(UNDEFINED_LITERAL),
            SlimValue::Bool(true) => self.out.push_str(TRUE_LITERAL),
            SlimValue::Bool(false) => self.out.push_str(FALSE_LITERAL),
            SlimValue::Number(n) => {
                self.out.push('#');
                self.out.push_str(&n.to_string());
            }
            SlimValue::String(s) => grammar::write_text(&mut self.out, s),
            SlimValue::Array(arr) => self.write_array(arr, depth),
            SlimValue::Object(map) => self.write_record(map, depth),
        }
    }

    fn write_array(&mut self, arr: &[SlimValue], depth: usize) {
        if arr.is_empty() {
            self.out.push_str("@[]");
            return;
        }

        if let Some(rows) = as_matrix(arr) {
            self.write_matrix(&rows);
            return;
        }

        if let Some(numbers) = as_numbers(arr) {
            self.out.push_str("@#[");
            for (i, n) in numbers.iter().enumerate() {
                if i > 0 {
                    self.out.push(',');
                }
                self.out.push_str(&n.to_string());
            }
            self.out.push(']');
            return;
        }

        if let Some(texts) = as_simple_texts(arr) {
            self.out.push('@');
            self.out.push('[');
            for (i, t) in texts.iter().enumerate() {
                if i > 0 {
                    self.out.push(',');
                }
                self.out.push_str(t);
            }
            self.out.push(']');
            return;
        }

        if arr.len() >= self.options.table_threshold {
            if let Some(records) = as_table_rows(arr) {
                self.write_table(&records, depth);
                return;
            }
        }

        self.out.push('@');
        self.out.push('[');
        for (i, element) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(';');
            }
            self.write_value(element, depth + 1);
        }
        self.out.push(']');
    }

    fn write_matrix(&mut self, rows: &[&Vec<SlimValue>]) {
        self.out.push('*');
        self.out.push('[');
        for (ri, row) in rows.iter().enumerate() {
            if ri > 0 {
                self.out.push(';');
            }
            for (ci, cell) in row.iter().enumerate() {
                if ci > 0 {
                    self.out.push(',');
                }
                if let SlimValue::Number(n) = cell {
                    self.out.push_str(&n.to_string());
                }
            }
        }
        self.out.push(']');
    }

    fn write_record(&mut self, map: &SlimMap, depth: usize) {
        self.out.push('{');
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            if grammar::key_needs_quoting(key) {
                grammar::write_quoted(&mut self.out, key);
            } else {
                self.out.push_str(key);
            }
            self.out.push(':');
            self.write_value(value, depth + 1);
        }
        self.out.push('}');
    }

    fn write_table(&mut self, rows: &[&SlimMap], depth: usize) {
        let columns = infer_columns(rows);

        self.out.push('|');
        self.out.push_str(&rows.len().to_string());
        self.out.push('|');
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.out.push_str(&column.render());
        }
        self.out.push('|');
        self.out.push('\n');

        for (ri, row) in rows.iter().enumerate() {
            if ri > 0 {
                self.out.push('\n');
            }
            for (ci, column) in columns.iter().enumerate() {
                if ci > 0 {
                    self.out.push(',');
                }
                self.write_cell(row.get(&column.name), column, depth);
            }
        }
    }

    fn write_cell(&mut self, value: Option<&SlimValue>, column: &ColumnDescriptor, depth: usize) {
        let value = match value {
            // Missing, null, and undefined all collapse to an empty cell;
            // the column's nullability decides what the decoder rebuilds.
            None | Some(SlimValue::Null) | Some(SlimValue::Undefined) => return,
            Some(v) => v,
        };
        match (column.ty, value) {
            (ColumnType::Boolean, SlimValue::Bool(b)) => {
                self.out.push(if *b { 'T' } else { 'F' });
            }
            (ColumnType::Number, SlimValue::Number(n)) => {
                self.out.push_str(&n.to_string());
            }
            (ColumnType::List, SlimValue::Array(elements)) => {
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        self.out.push('+');
                    }
                    self.write_list_cell_element(element);
                }
            }
            (ColumnType::Record, SlimValue::Object(map)) => {
                self.write_record(map, depth + 1);
            }
            // Text columns, including the heterogeneous fallback.
            (_, v) => self.write_text_cell(v),
        }
    }

    /// Renders a value into a text (`$`) cell. Non-text values in a
    /// heterogeneous column are rendered by their scalar text; they decode
    /// back as text (a documented lossy boundary of the table form).
    fn write_text_cell(&mut self, value: &SlimValue) {
        match value {
            SlimValue::String(s) => {
                if grammar::cell_needs_quoting(s) || s.contains('+') {
                    grammar::write_quoted(&mut self.out, s);
                } else {
                    self.out.push_str(s);
                }
            }
            SlimValue::Number(n) => self.out.push_str(&n.to_string()),
            SlimValue::Bool(b) => self.out.push(if *b { 'T' } else { 'F' }),
            SlimValue::Null | SlimValue::Undefined => {}
            nested => {
                let encoded = encode_with_options(nested, &self.options);
                if grammar::cell_needs_quoting(&encoded) {
                    grammar::write_quoted(&mut self.out, &encoded);
                } else {
                    self.out.push_str(&encoded);
                }
            }
        }
    }

    fn write_list_cell_element(&mut self, element: &SlimValue) {
        match element {
            SlimValue::String(s) => {
                if grammar::list_cell_element_needs_quoting(s) {
                    grammar::write_quoted(&mut self.out, s);
                } else {
                    self.out.push_str(s);
                }
            }
            SlimValue::Number(n) => self.out.push_str(&n.to_string()),
            SlimValue::Bool(b) => self.out.push(if *b { 'T' } else { 'F' }),
            SlimValue::Null | SlimValue::Undefined => {}
            nested => {
                // Nested containers inside a list cell survive only as text.
                let encoded = encode_with_options(nested, &self.options);
                grammar::write_quoted(&mut self.out, &encoded);
            }
        }
    }
}

/// Matrix form: every element is a list whose every element is a number.
/// Rows need not have equal lengths.
fn as_matrix(arr: &[SlimValue]) -> Option<Vec<&Vec<SlimValue>>> {
    arr.iter()
        .map(|element| match element {
            SlimValue::Array(row) if row.iter().all(SlimValue::is_number) => Some(row),
            _ => None,
        })
        .collect()
}

fn as_numbers(arr: &[SlimValue]) -> Option<Vec<&Number>> {
    arr.iter()
        .map(|element| match element {
            SlimValue::Number(n) => Some(n),
            _ => None,
        })
        .collect()
}

/// Simple text list form: every element is text the grammar would leave
/// unquoted. Anything needing quotes falls through to the mixed form, which
/// quotes correctly.
fn as_simple_texts(arr: &[SlimValue]) -> Option<Vec<&str>> {
    arr.iter()
        .map(|element| match element {
            SlimValue::String(s) if !grammar::needs_quoting(s) => Some(s.as_str()),
            _ => None,
        })
        .collect()
}

/// Table form: every element is a record, and no key contains a character
/// the un-quoted header could not carry.
fn as_table_rows(arr: &[SlimValue]) -> Option<Vec<&SlimMap>> {
    arr.iter()
        .map(|element| match element {
            SlimValue::Object(map)
                if map
                    .keys()
                    .all(|k| !k.contains(',') && !k.contains('|') && !k.contains('\n')) =>
            {
                Some(map)
            }
            _ => None,
        })
        .collect()
}

/// Serializer producing a [`SlimValue`] from any `T: Serialize`.
///
/// This is the bridge behind [`to_value`](crate::to_value): Rust data
/// structures become value trees, which the [`Encoder`] then renders.
pub struct SlimValueSerializer;

pub struct SerializeVec {
    vec: Vec<SlimValue>,
}

pub struct SerializeTupleVariant {
    variant: String,
    vec: Vec<SlimValue>,
}

pub struct SerializeMap {
    map: SlimMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    variant: String,
    map: SlimMap,
}

impl ser::Serializer for SlimValueSerializer {
    type Ok = SlimValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<SlimValue> {
        Ok(SlimValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<SlimValue> {
        if v <= i64::MAX as u64 {
            Ok(SlimValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(SlimValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<SlimValue> {
        Ok(SlimValue::Number(Number::from(v)))
    }

    fn serialize_char(self, v: char) -> Result<SlimValue> {
        Ok(SlimValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<SlimValue> {
        Ok(SlimValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<SlimValue> {
        let vec = v
            .iter()
            .map(|&b| SlimValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(SlimValue::Array(vec))
    }

    fn serialize_none(self) -> Result<SlimValue> {
        Ok(SlimValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<SlimValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<SlimValue> {
        Ok(SlimValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<SlimValue> {
        Ok(SlimValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<SlimValue> {
        Ok(SlimValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<SlimValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<SlimValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = SlimMap::new();
        map.insert(variant.to_string(), to_slim_value(value)?);
        Ok(SlimValue::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant: variant.to_string(),
            vec: Vec::new(),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant: variant.to_string(),
            map: SlimMap::new(),
        })
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: SlimMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = SlimValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_slim_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<SlimValue> {
        Ok(SlimValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = SlimValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_slim_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<SlimValue> {
        Ok(SlimValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = SlimValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_slim_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<SlimValue> {
        Ok(SlimValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = SlimValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_slim_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<SlimValue> {
        let mut map = SlimMap::new();
        map.insert(self.variant, SlimValue::Array(self.vec));
        Ok(SlimValue::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = SlimValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_slim_value(key)? {
            SlimValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("Map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_slim_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<SlimValue> {
        Ok(SlimValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = SlimValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_slim_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<SlimValue> {
        Ok(SlimValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = SlimValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_slim_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<SlimValue> {
        let mut map = SlimMap::new();
        map.insert(self.variant, SlimValue::Object(self.map));
        Ok(SlimValue::Object(map))
    }
}

fn to_slim_value<T: Serialize + ?Sized>(value: &T) -> Result<SlimValue> {
    value.serialize(SlimValueSerializer)
}
