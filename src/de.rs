//! SLIM decoding.
//!
//! This module provides the [`Decoder`] that parses SLIM text back into a
//! [`SlimValue`] tree, and the `serde::Deserializer` impl for `SlimValue`
//! that backs [`from_value`](crate::from_value) and
//! [`from_str`](crate::from_str).
//!
//! ## Overview
//!
//! The parser is a single-pass, cursor-based recursive descent with one
//! character of lookahead. The leading character of a value selects the
//! parse: `!` null family, `?` boolean, `#` number, `@` list, `*` matrix,
//! `{` record, `|` table, `"` quoted text, anything else unquoted text.
//!
//! Two modes:
//!
//! - **Lenient** (default): malformed or truncated input degrades to a
//!   best-effort partial value; the decoder almost never fails.
//! - **Strict**: malformed markers, unbalanced delimiters, table row-count
//!   mismatches, trailing input, and depth-limit hits become typed errors
//!   with byte offsets.
//!
//! Nesting depth is guarded in both modes: lenient decoding substitutes null
//! for a too-deep subtree and skips it iteratively, so adversarial input
//! cannot exhaust the stack.
//!
//! ## Usage
//!
//! ```rust
//! use serde_slim::{decode, SlimValue};
//!
//! let value = decode("@#[1,2,3]").unwrap();
//! assert_eq!(value.as_array().unwrap().len(), 3);
//! ```

use crate::grammar::{self, is_cell_terminator, is_structural};
use crate::schema::{parse_schema, ColumnDescriptor, ColumnType};
use crate::{DecodeOptions, Error, Number, Result, SlimMap, SlimValue};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Decode SLIM text into a value with default (lenient) options.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{decode, SlimValue};
///
/// assert_eq!(decode("!null").unwrap(), SlimValue::Null);
/// assert_eq!(decode("?T").unwrap(), SlimValue::Bool(true));
/// assert_eq!(decode("#42").unwrap(), SlimValue::from(42));
/// ```
pub fn decode(input: &str) -> Result<SlimValue> {
    decode_with_options(input, &DecodeOptions::default())
}

/// Decode SLIM text into a value with explicit options.
pub fn decode_with_options(input: &str, options: &DecodeOptions) -> Result<SlimValue> {
    let mut decoder = Decoder::new(input, options.clone());
    let value = decoder.parse()?;
    if options.strict && !decoder.at_end() {
        return Err(Error::TrailingInput {
            offset: decoder.position,
        });
    }
    Ok(value)
}

/// The SLIM decoder.
///
/// Owns a cursor over the immutable input; no state is shared between calls.
pub struct Decoder<'de> {
    input: &'de str,
    position: usize,
    options: DecodeOptions,
}

impl<'de> Decoder<'de> {
    pub fn new(input: &'de str, options: DecodeOptions) -> Self {
        Decoder {
            input,
            position: 0,
            options,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.input[self.position..].chars().next()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Consumes `literal` if the input continues with it.
    fn eat(&mut self, literal: &str) -> bool {
        if self.input[self.position..].starts_with(literal) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    /// Parses one value starting at the cursor.
    pub fn parse(&mut self) -> Result<SlimValue> {
        self.parse_value(0)
    }

    /// Parses one value. `depth` counts containers entered so far.
    fn parse_value(&mut self, depth: usize) -> Result<SlimValue> {
        if depth > self.options.max_depth {
            if self.options.strict {
                return Err(Error::depth_exceeded(self.position));
            }
            self.skip_balanced();
            return Ok(SlimValue::Null);
        }
        match self.peek_char() {
            None => {
                if self.options.strict {
                    Err(Error::parse(self.position, "a value"))
                } else {
                    Ok(SlimValue::String(String::new()))
                }
            }
            Some('!') => self.parse_null_family(),
            Some('?') => self.parse_bool(),
            Some('#') => {
                self.next_char();
                self.parse_number_body()
            }
            Some('@') => self.parse_list(depth),
            Some('*') => self.parse_matrix(),
            Some('{') => self.parse_record(depth),
            Some('|') => self.parse_table(depth),
            Some('"') => self.parse_quoted().map(SlimValue::String),
            Some(_) => Ok(SlimValue::String(self.take_unquoted().to_string())),
        }
    }

    fn parse_null_family(&mut self) -> Result<SlimValue> {
        if self.eat(grammar::NULL_LITERAL) {
            return Ok(SlimValue::Null);
        }
        if self.eat(grammar::UNDEFINED_LITERAL) {
            return Ok(SlimValue::Undefined);
        }
        // The depth sentinel decodes to null; the truncation is permanent.
        if self.eat(grammar::DEPTH_LITERAL) {
            return Ok(SlimValue::Null);
        }
        if self.options.strict {
            return Err(Error::parse(self.position, "'null', 'undef', or 'DEEP'"));
        }
        Ok(SlimValue::String(self.take_unquoted().to_string()))
    }

    fn parse_bool(&mut self) -> Result<SlimValue> {
        self.next_char(); // consume '?'
        match self.peek_char() {
            Some('T') => {
                self.next_char();
                Ok(SlimValue::Bool(true))
            }
            Some('F') => {
                self.next_char();
                Ok(SlimValue::Bool(false))
            }
            other => {
                if self.options.strict {
                    return Err(Error::parse(self.position, "'T' or 'F'"));
                }
                // Any other character reads as false; structural characters
                // stay put so the enclosing parse can resynchronize.
                if matches!(other, Some(c) if !is_structural(c)) {
                    self.next_char();
                }
                Ok(SlimValue::Bool(false))
            }
        }
    }

    /// Parses a number body: the special literals first, otherwise the
    /// maximal run of `[0-9.eE+-]`. Shared by the `#` dispatch, numeric list
    /// elements, matrix cells, and number table cells.
    fn parse_number_body(&mut self) -> Result<SlimValue> {
        if self.eat("NaN") {
            return Ok(SlimValue::Number(Number::NaN));
        }
        if self.eat("-Inf") {
            return Ok(SlimValue::Number(Number::NegativeInfinity));
        }
        if self.eat("Inf") {
            return Ok(SlimValue::Number(Number::Infinity));
        }
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if grammar::is_numeric_run_char(c) {
                self.next_char();
            } else {
                break;
            }
        }
        let run = &self.input[start..self.position];
        if let Ok(i) = run.parse::<i64>() {
            return Ok(SlimValue::Number(Number::Integer(i)));
        }
        if let Ok(f) = run.parse::<f64>() {
            return Ok(SlimValue::Number(Number::from(f)));
        }
        if self.options.strict {
            return Err(Error::parse(start, "a number"));
        }
        Ok(SlimValue::Null)
    }

    /// Consumes an unquoted text run up to the next structural character.
    fn take_unquoted(&mut self) -> &'de str {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if is_structural(c) {
                break;
            }
            self.next_char();
        }
        &self.input[start..self.position]
    }

    /// Parses a quoted string: `""` is an escaped quote, the two-character
    /// `\n` escape is a newline, everything else (including lone backslashes)
    /// is copied verbatim.
    fn parse_quoted(&mut self) -> Result<String> {
        self.next_char(); // consume opening quote
        let mut out = String::new();
        loop {
            match self.next_char() {
                None => {
                    if self.options.strict {
                        return Err(Error::parse(self.position, "closing '\"'"));
                    }
                    return Ok(out); // unterminated: take what we have
                }
                Some('"') => {
                    if self.peek_char() == Some('"') {
                        self.next_char();
                        out.push('"');
                    } else {
                        return Ok(out);
                    }
                }
                Some('\\') => {
                    if self.peek_char() == Some('n') {
                        self.next_char();
                        out.push('\n');
                    } else {
                        out.push('\\');
                    }
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_list(&mut self, depth: usize) -> Result<SlimValue> {
        self.next_char(); // consume '@'
        let numeric = self.peek_char() == Some('#');
        if numeric {
            self.next_char();
        }
        if self.peek_char() != Some('[') {
            if self.options.strict {
                return Err(Error::parse(self.position, "'['"));
            }
            return Ok(SlimValue::Array(Vec::new()));
        }
        self.next_char();

        let mut items = Vec::new();
        loop {
            match self.peek_char() {
                None => {
                    if self.options.strict {
                        return Err(Error::parse(self.position, "']'"));
                    }
                    break;
                }
                Some(']') => {
                    self.next_char();
                    break;
                }
                Some(',') | Some(';') => {
                    self.next_char();
                    // A separator with nothing before it reads as an empty
                    // text element in the generic form; the numeric fast
                    // path skips it.
                    continue;
                }
                Some(_) => {
                    let before = self.position;
                    let item = if numeric {
                        self.parse_number_body()?
                    } else {
                        self.parse_value(depth + 1)?
                    };
                    items.push(item);
                    match self.peek_char() {
                        Some(',') | Some(';') => {
                            self.next_char();
                        }
                        Some(']') | None => {}
                        Some(_) => {
                            if self.options.strict {
                                return Err(Error::parse(self.position, "',', ';', or ']'"));
                            }
                            if self.position == before {
                                self.next_char(); // guarantee progress
                            }
                        }
                    }
                    if self.position == before {
                        self.next_char();
                    }
                }
            }
        }
        Ok(SlimValue::Array(items))
    }

    fn parse_matrix(&mut self) -> Result<SlimValue> {
        self.next_char(); // consume '*'
        if self.peek_char() != Some('[') {
            if self.options.strict {
                return Err(Error::parse(self.position, "'['"));
            }
            return Ok(SlimValue::Array(Vec::new()));
        }
        self.next_char();

        let mut rows: Vec<SlimValue> = Vec::new();
        let mut current: Vec<SlimValue> = Vec::new();
        let mut saw_separator = false;
        loop {
            match self.peek_char() {
                None => {
                    if self.options.strict {
                        return Err(Error::parse(self.position, "']'"));
                    }
                    if saw_separator || !current.is_empty() {
                        rows.push(SlimValue::Array(current));
                    }
                    break;
                }
                Some(']') => {
                    self.next_char();
                    // `*[]` is the degenerate empty matrix; everything else
                    // flushes the pending row, even an empty one.
                    if saw_separator || !current.is_empty() {
                        rows.push(SlimValue::Array(current));
                    }
                    break;
                }
                Some(';') => {
                    self.next_char();
                    rows.push(SlimValue::Array(std::mem::take(&mut current)));
                    saw_separator = true;
                }
                Some(',') => {
                    self.next_char();
                }
                Some(_) => {
                    let before = self.position;
                    current.push(self.parse_number_body()?);
                    if self.position == before {
                        if self.options.strict {
                            return Err(Error::parse(self.position, "a number, ';', or ']'"));
                        }
                        self.next_char();
                        current.pop();
                    }
                }
            }
        }
        Ok(SlimValue::Array(rows))
    }

    fn parse_record(&mut self, depth: usize) -> Result<SlimValue> {
        self.next_char(); // consume '{'
        let mut map = SlimMap::new();
        loop {
            match self.peek_char() {
                None => {
                    if self.options.strict {
                        return Err(Error::parse(self.position, "'}'"));
                    }
                    break;
                }
                Some('}') => {
                    self.next_char();
                    break;
                }
                Some(',') => {
                    self.next_char();
                }
                Some(_) => {
                    let key = if self.peek_char() == Some('"') {
                        self.parse_quoted()?
                    } else {
                        self.take_key().to_string()
                    };
                    if self.peek_char() == Some(':') {
                        self.next_char();
                    } else {
                        if self.options.strict {
                            return Err(Error::parse(self.position, "':'"));
                        }
                        // No separator: drop the stray text and resync.
                        if key.is_empty() {
                            self.next_char();
                        }
                        continue;
                    }
                    let value = self.parse_value(depth + 1)?;
                    map.insert(key, value);
                    match self.peek_char() {
                        Some(',') => {
                            self.next_char();
                        }
                        Some('}') | None => {}
                        Some(_) => {
                            if self.options.strict {
                                return Err(Error::parse(self.position, "',' or '}'"));
                            }
                            self.next_char();
                        }
                    }
                }
            }
        }
        Ok(SlimValue::Object(map))
    }

    /// Consumes an unquoted record key: a run excluding `:`, `,`, `{`, `}`,
    /// and newline.
    fn take_key(&mut self) -> &'de str {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if matches!(c, ':' | ',' | '{' | '}' | '\n') {
                break;
            }
            self.next_char();
        }
        &self.input[start..self.position]
    }

    fn parse_table(&mut self, depth: usize) -> Result<SlimValue> {
        self.next_char(); // consume leading '|'

        // Declared row count.
        let count_start = self.position;
        while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
            self.next_char();
        }
        let declared: usize = self.input[count_start..self.position].parse().unwrap_or(0);
        if self.peek_char() == Some('|') {
            self.next_char();
        } else if self.options.strict {
            return Err(Error::parse(self.position, "'|' after row count"));
        }

        // Schema section, up to the closing '|'.
        let schema_start = self.position;
        while let Some(c) = self.peek_char() {
            if c == '|' || c == '\n' {
                break;
            }
            self.next_char();
        }
        let columns = parse_schema(&self.input[schema_start..self.position]);
        if self.peek_char() == Some('|') {
            self.next_char();
        } else if self.options.strict {
            return Err(Error::parse(self.position, "'|' after schema"));
        }
        if self.peek_char() == Some('\n') {
            self.next_char();
        } else if self.options.strict && declared > 0 {
            return Err(Error::parse(self.position, "newline after table header"));
        }

        // A zero-column schema means rows carry no cells at all; the count is
        // the only information left.
        if columns.is_empty() {
            let mut rows = Vec::with_capacity(declared);
            for i in 0..declared {
                if i > 0 && self.peek_char() == Some('\n') {
                    self.next_char();
                }
                rows.push(SlimValue::Object(SlimMap::new()));
            }
            return Ok(SlimValue::Array(rows));
        }

        // The row loop is driven by the declared count: a row with every cell
        // empty is invisible at end of input, so the count is the only way to
        // know it exists. Rows after the first must be introduced by their
        // newline separator; a missing separator is a shortfall (strict
        // error, lenient stop).
        let mut rows = Vec::with_capacity(declared);
        while rows.len() < declared {
            if !rows.is_empty() {
                if self.peek_char() == Some('\n') {
                    self.next_char();
                } else if self.options.strict {
                    return Err(Error::parse(
                        self.position,
                        format!("{} table rows, found {}", declared, rows.len()),
                    ));
                } else {
                    break;
                }
            }
            let record = self.parse_row(&columns, depth)?;
            rows.push(SlimValue::Object(record));
        }
        Ok(SlimValue::Array(rows))
    }

    fn at_table_end(&self) -> bool {
        matches!(self.peek_char(), None | Some('}') | Some(';') | Some(']'))
    }

    fn at_cell_end(&self) -> bool {
        match self.peek_char() {
            None => true,
            Some(c) => is_cell_terminator(c),
        }
    }

    fn parse_row(&mut self, columns: &[ColumnDescriptor], depth: usize) -> Result<SlimMap> {
        let mut record = SlimMap::new();
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                if self.peek_char() == Some(',') {
                    self.next_char();
                } else if self.options.strict && !self.at_table_end() && self.peek_char() != Some('\n') {
                    return Err(Error::parse(self.position, "','"));
                }
                // A short row reads its remaining cells as empty.
            }
            let value = if self.at_cell_end() {
                // Empty cell: nullability decides what it meant.
                if column.nullable {
                    SlimValue::Null
                } else {
                    SlimValue::Undefined
                }
            } else {
                self.parse_cell(column, depth)?
            };
            // Sparse-record semantics: only nullable nulls and substantive
            // values make it into the output record.
            match value {
                SlimValue::Undefined => {}
                SlimValue::Null if !column.nullable => {}
                SlimValue::String(ref s) if s.is_empty() => {}
                other => {
                    record.insert(column.name.clone(), other);
                }
            }
        }
        Ok(record)
    }

    fn parse_cell(&mut self, column: &ColumnDescriptor, depth: usize) -> Result<SlimValue> {
        match column.ty {
            ColumnType::Boolean => match self.next_char() {
                Some('T') => Ok(SlimValue::Bool(true)),
                Some('F') => Ok(SlimValue::Bool(false)),
                _ => {
                    if self.options.strict {
                        Err(Error::parse(self.position, "'T' or 'F'"))
                    } else {
                        Ok(SlimValue::Bool(false))
                    }
                }
            },
            ColumnType::Number => self.parse_number_body(),
            ColumnType::List => self.parse_list_cell(),
            ColumnType::Record => self.parse_value(depth + 1),
            ColumnType::Text => {
                if self.peek_char() == Some('"') {
                    self.parse_quoted().map(SlimValue::String)
                } else {
                    let start = self.position;
                    while !self.at_cell_end() {
                        self.next_char();
                    }
                    Ok(SlimValue::String(self.input[start..self.position].to_string()))
                }
            }
        }
    }

    /// Parses a `+`-joined list cell. Pieces are numbers when every unquoted
    /// piece matches the numeric pattern, text otherwise; a quoted piece is
    /// always text.
    fn parse_list_cell(&mut self) -> Result<SlimValue> {
        let mut pieces: Vec<(String, bool)> = Vec::new();
        let mut current = String::new();
        let mut current_quoted = false;
        loop {
            match self.peek_char() {
                None => break,
                Some(c) if is_cell_terminator(c) => break,
                Some('"') => {
                    let s = self.parse_quoted()?;
                    current.push_str(&s);
                    current_quoted = true;
                }
                Some('+') => {
                    self.next_char();
                    pieces.push((std::mem::take(&mut current), current_quoted));
                    current_quoted = false;
                }
                Some(c) => {
                    self.next_char();
                    current.push(c);
                }
            }
        }
        pieces.push((current, current_quoted));

        let all_numeric = pieces
            .iter()
            .all(|(piece, quoted)| !quoted && grammar::looks_numeric(piece));
        let elements = pieces
            .into_iter()
            .map(|(piece, _)| {
                if all_numeric {
                    grammar::parse_number_text(&piece)
                        .map(SlimValue::Number)
                        .unwrap_or(SlimValue::Null)
                } else {
                    SlimValue::String(piece)
                }
            })
            .collect();
        Ok(SlimValue::Array(elements))
    }

    /// Iteratively skips a balanced subtree without recursing. Used by the
    /// lenient depth guard so the cursor lands past the value it nulled out.
    fn skip_balanced(&mut self) {
        let mut level: usize = 0;
        let mut in_quotes = false;
        while let Some(c) = self.peek_char() {
            if in_quotes {
                self.next_char();
                if c == '"' {
                    if self.peek_char() == Some('"') {
                        self.next_char();
                    } else {
                        in_quotes = false;
                    }
                }
                continue;
            }
            match c {
                '"' => {
                    self.next_char();
                    in_quotes = true;
                }
                '{' | '[' => {
                    self.next_char();
                    level += 1;
                }
                '}' | ']' => {
                    if level == 0 {
                        break;
                    }
                    self.next_char();
                    level -= 1;
                    if level == 0 {
                        break;
                    }
                }
                c if level == 0 && is_structural(c) => break,
                _ => {
                    self.next_char();
                }
            }
        }
    }
}

impl<'de> de::Deserializer<'de> for SlimValue {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            SlimValue::Null | SlimValue::Undefined => visitor.visit_unit(),
            SlimValue::Bool(b) => visitor.visit_bool(b),
            SlimValue::Number(Number::Integer(i)) => visitor.visit_i64(i),
            SlimValue::Number(n) => visitor.visit_f64(n.as_f64()),
            SlimValue::String(s) => visitor.visit_string(s),
            SlimValue::Array(arr) => {
                let mut seq = de::value::SeqDeserializer::new(arr.into_iter());
                let out = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(out)
            }
            SlimValue::Object(map) => {
                let mut access = de::value::MapDeserializer::new(map.into_iter());
                let out = visitor.visit_map(&mut access)?;
                access.end()?;
                Ok(out)
            }
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            SlimValue::Null | SlimValue::Undefined => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            SlimValue::String(s) => visitor.visit_enum(s.into_deserializer()),
            SlimValue::Object(map) => {
                let mut iter = map.into_iter();
                let (variant, value) = iter
                    .next()
                    .ok_or_else(|| Error::custom("expected a map with a single variant entry"))?;
                if iter.next().is_some() {
                    return Err(Error::custom("expected a map with a single variant entry"));
                }
                visitor.visit_enum(EnumDeserializer { variant, value })
            }
            other => Err(Error::custom(format!(
                "expected a string or map for an enum, found {:?}",
                other
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for SlimValue {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

struct EnumDeserializer {
    variant: String,
    value: SlimValue,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(self.variant.into_deserializer())?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: SlimValue,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            SlimValue::Null | SlimValue::Undefined => Ok(()),
            other => Err(Error::custom(format!(
                "expected unit variant, found {:?}",
                other
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.value)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            SlimValue::Array(arr) => {
                let mut seq = de::value::SeqDeserializer::new(arr.into_iter());
                let out = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(out)
            }
            other => Err(Error::custom(format!(
                "expected tuple variant, found {:?}",
                other
            ))),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            SlimValue::Object(map) => {
                let mut access = de::value::MapDeserializer::new(map.into_iter());
                let out = visitor.visit_map(&mut access)?;
                access.end()?;
                Ok(out)
            }
            other => Err(Error::custom(format!(
                "expected struct variant, found {:?}",
                other
            ))),
        }
    }
}
