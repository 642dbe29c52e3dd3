//! Schema inference and validation for SLIM records.
//!
//! A schema is a compact comma-joined string, one entry per column, each entry
//! being the column name, a one-character type marker, and an optional `!`
//! nullability flag: `id#,name$,active?,score#!`.
//!
//! The inference algorithm here is the same one the encoder's table path uses
//! (a single shared routine, so a standalone [`infer_schema`] call can never
//! disagree with what [`encode`](crate::encode) actually emits):
//!
//! - Columns are the union of keys across records, ordered by first occurrence.
//! - A column's type is the narrowest marker accepting every non-null value
//!   observed for that key; heterogeneous columns fall back to text.
//! - A column is nullable iff some record misses the key or holds null or
//!   undefined for it.
//!
//! ## Examples
//!
//! ```rust
//! use serde_slim::{infer_schema, parse_schema, validate_schema, slim};
//!
//! let rows = vec![
//!     slim!({"id": 1, "name": "Mario"}),
//!     slim!({"id": 2, "name": "Luigi", "score": null}),
//! ];
//! assert_eq!(infer_schema(&rows), "id#,name$,score$!");
//!
//! let columns = parse_schema("id#,name$");
//! assert_eq!(columns.len(), 2);
//!
//! let report = validate_schema(&slim!([{"id": 1}]), "id#,name$");
//! assert!(!report.valid);
//! assert_eq!(report.errors[0].path, "[0].name");
//! ```

use crate::{SlimMap, SlimValue};
use indexmap::IndexMap;
use std::fmt;

/// The type of a table column, identified by a one-character marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// `#` — numbers, including `NaN` and the infinities.
    Number,
    /// `?` — booleans.
    Boolean,
    /// `$` — text; also the fallback for heterogeneous columns.
    Text,
    /// `@` — lists.
    List,
    /// `~` — nested records.
    Record,
}

impl ColumnType {
    /// The marker character for this type.
    #[must_use]
    pub const fn marker(&self) -> char {
        match self {
            ColumnType::Number => '#',
            ColumnType::Boolean => '?',
            ColumnType::Text => '$',
            ColumnType::List => '@',
            ColumnType::Record => '~',
        }
    }

    /// Resolves a marker character back to a column type.
    #[must_use]
    pub const fn from_marker(c: char) -> Option<Self> {
        match c {
            '#' => Some(ColumnType::Number),
            '?' => Some(ColumnType::Boolean),
            '$' => Some(ColumnType::Text),
            '@' => Some(ColumnType::List),
            '~' => Some(ColumnType::Record),
            _ => None,
        }
    }

    /// The column type a non-null value belongs to.
    #[must_use]
    pub fn of_value(value: &SlimValue) -> Option<Self> {
        match value {
            SlimValue::Null | SlimValue::Undefined => None,
            SlimValue::Bool(_) => Some(ColumnType::Boolean),
            SlimValue::Number(_) => Some(ColumnType::Number),
            SlimValue::String(_) => Some(ColumnType::Text),
            SlimValue::Array(_) => Some(ColumnType::List),
            SlimValue::Object(_) => Some(ColumnType::Record),
        }
    }

    /// Whether a value's runtime kind agrees with this column type.
    #[must_use]
    pub fn accepts(&self, value: &SlimValue) -> bool {
        ColumnType::of_value(value) == Some(*self)
    }

    /// Human-readable name used in validation messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Text => "string",
            ColumnType::List => "array",
            ColumnType::Record => "object",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named, typed, possibly-nullable column slot.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDescriptor {
    pub name: String,
    pub ty: ColumnType,
    pub nullable: bool,
}

impl ColumnDescriptor {
    /// Renders the column as its schema-string entry: `name`, marker,
    /// optional `!`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.name.len() + 2);
        out.push_str(&self.name);
        out.push(self.ty.marker());
        if self.nullable {
            out.push('!');
        }
        out
    }
}

/// Derives the ordered column set for a sequence of records.
///
/// This is the single inference routine shared by [`infer_schema`] and the
/// encoder's table path.
pub(crate) fn infer_columns(rows: &[&SlimMap]) -> Vec<ColumnDescriptor> {
    struct ColumnState {
        ty: Option<ColumnType>,
        heterogeneous: bool,
        nullable: bool,
        occurrences: usize,
    }

    let mut states: IndexMap<String, ColumnState> = IndexMap::new();

    for row in rows {
        for (key, value) in row.iter() {
            let state = states.entry(key.clone()).or_insert(ColumnState {
                ty: None,
                heterogeneous: false,
                nullable: false,
                occurrences: 0,
            });
            state.occurrences += 1;
            match ColumnType::of_value(value) {
                None => state.nullable = true,
                Some(observed) => match state.ty {
                    None => state.ty = Some(observed),
                    Some(current) if current == observed => {}
                    Some(_) => state.heterogeneous = true,
                },
            }
        }
    }

    let total = rows.len();
    states
        .into_iter()
        .map(|(name, state)| ColumnDescriptor {
            name,
            ty: if state.heterogeneous {
                ColumnType::Text
            } else {
                state.ty.unwrap_or(ColumnType::Text)
            },
            nullable: state.nullable || state.occurrences < total,
        })
        .collect()
}

/// Infers the schema string for a slice of record values.
///
/// Non-record elements are ignored. Empty input yields the empty string.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{infer_schema, slim};
///
/// assert_eq!(infer_schema(&[]), "");
///
/// let rows = vec![slim!({"id": 1}), slim!({"id": 2, "score": null})];
/// assert_eq!(infer_schema(&rows), "id#,score$!");
/// ```
#[must_use]
pub fn infer_schema(records: &[SlimValue]) -> String {
    let rows: Vec<&SlimMap> = records.iter().filter_map(SlimValue::as_object).collect();
    if rows.is_empty() {
        return String::new();
    }
    let columns = infer_columns(&rows);
    columns
        .iter()
        .map(ColumnDescriptor::render)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses a schema string into column descriptors.
///
/// Each comma-separated entry is matched as name, optional type marker,
/// optional trailing `!`. Entries without a recognizable marker become
/// non-nullable text columns. The empty string parses to no columns.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{parse_schema, ColumnType};
///
/// let columns = parse_schema("id#,name$,score#!");
/// assert_eq!(columns[0].ty, ColumnType::Number);
/// assert!(!columns[0].nullable);
/// assert!(columns[2].nullable);
/// ```
#[must_use]
pub fn parse_schema(schema: &str) -> Vec<ColumnDescriptor> {
    if schema.is_empty() {
        return Vec::new();
    }
    schema
        .split(',')
        .map(|entry| {
            let (body, nullable) = match entry.strip_suffix('!') {
                Some(body) => (body, true),
                None => (entry, false),
            };
            let mut chars = body.chars();
            match chars.next_back().and_then(ColumnType::from_marker) {
                Some(ty) => ColumnDescriptor {
                    name: chars.as_str().to_string(),
                    ty,
                    nullable,
                },
                None => ColumnDescriptor {
                    name: body.to_string(),
                    ty: ColumnType::Text,
                    nullable,
                },
            }
        })
        .collect()
}

/// A single schema violation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    /// Where the violation occurred, as `field` or `[index].field`.
    pub path: String,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// The outcome of [`validate_schema`]: either valid, or the complete list of
/// violations found. Validation never stops at the first error.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validates a record, or a list of records, against a schema string.
///
/// For every record and every column: a missing, null, or undefined value on
/// a non-nullable column is a "Missing required field" error; on a nullable
/// column it is accepted without further checks; a present value whose
/// runtime kind disagrees with the declared type is a "Type mismatch" error.
/// Fields not named by the schema are ignored.
///
/// Anything other than a record or a list of records is a structural error.
///
/// # Examples
///
/// ```rust
/// use serde_slim::{validate_schema, slim};
///
/// let report = validate_schema(&slim!([{"id": 1}]), "id#,name$");
/// assert!(!report.valid);
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.errors[0].message, "Missing required field");
/// ```
#[must_use]
pub fn validate_schema(data: &SlimValue, schema: &str) -> ValidationReport {
    let columns = parse_schema(schema);
    let mut errors = Vec::new();

    match data {
        SlimValue::Object(record) => {
            validate_record(record, &columns, None, &mut errors);
        }
        SlimValue::Array(records) => {
            for (index, element) in records.iter().enumerate() {
                match element.as_object() {
                    Some(record) => validate_record(record, &columns, Some(index), &mut errors),
                    None => errors.push(ValidationError {
                        path: format!("[{}]", index),
                        message: "Expected object or array of objects".to_string(),
                        expected: Some("object".to_string()),
                        actual: Some(kind_name(element).to_string()),
                    }),
                }
            }
        }
        other => errors.push(ValidationError {
            path: String::new(),
            message: "Expected object or array of objects".to_string(),
            expected: Some("object".to_string()),
            actual: Some(kind_name(other).to_string()),
        }),
    }

    ValidationReport::from_errors(errors)
}

fn validate_record(
    record: &SlimMap,
    columns: &[ColumnDescriptor],
    index: Option<usize>,
    errors: &mut Vec<ValidationError>,
) {
    for column in columns {
        let path = match index {
            Some(i) => format!("[{}].{}", i, column.name),
            None => column.name.clone(),
        };
        match record.get(&column.name) {
            None | Some(SlimValue::Null) | Some(SlimValue::Undefined) => {
                if !column.nullable {
                    errors.push(ValidationError {
                        path,
                        message: "Missing required field".to_string(),
                        expected: Some(column.ty.name().to_string()),
                        actual: None,
                    });
                }
            }
            Some(value) => {
                if !column.ty.accepts(value) {
                    errors.push(ValidationError {
                        path,
                        message: "Type mismatch".to_string(),
                        expected: Some(column.ty.name().to_string()),
                        actual: Some(kind_name(value).to_string()),
                    });
                }
            }
        }
    }
}

fn kind_name(value: &SlimValue) -> &'static str {
    match value {
        SlimValue::Null => "null",
        SlimValue::Undefined => "undefined",
        SlimValue::Bool(_) => "boolean",
        SlimValue::Number(_) => "number",
        SlimValue::String(_) => "string",
        SlimValue::Array(_) => "array",
        SlimValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slim;

    #[test]
    fn test_infer_empty() {
        assert_eq!(infer_schema(&[]), "");
    }

    #[test]
    fn test_infer_column_order_is_first_occurrence() {
        let rows = vec![
            slim!({"b": 1, "a": 2}),
            slim!({"c": 3, "a": 4}),
        ];
        assert_eq!(infer_schema(&rows), "b#!,a#,c#!");
    }

    #[test]
    fn test_infer_nullable_from_null_and_absence() {
        let rows = vec![slim!({"id": 1}), slim!({"id": 2, "score": null})];
        assert_eq!(infer_schema(&rows), "id#,score$!");
    }

    #[test]
    fn test_infer_heterogeneous_falls_back_to_text() {
        let rows = vec![slim!({"v": 1}), slim!({"v": true})];
        assert_eq!(infer_schema(&rows), "v$");
    }

    #[test]
    fn test_infer_special_numbers_stay_numeric() {
        let rows = vec![
            slim!({"x": 1.5}),
            slim!({"x": (f64::NAN)}),
            slim!({"x": (f64::INFINITY)}),
        ];
        assert_eq!(infer_schema(&rows), "x#");
    }

    #[test]
    fn test_parse_roundtrips_render() {
        let schema = "id#,name$,tags@!,meta~,flag?";
        let columns = parse_schema(schema);
        let rendered = columns
            .iter()
            .map(ColumnDescriptor::render)
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(rendered, schema);
    }

    #[test]
    fn test_parse_defaults_to_text() {
        let columns = parse_schema("plain");
        assert_eq!(columns[0].name, "plain");
        assert_eq!(columns[0].ty, ColumnType::Text);
        assert!(!columns[0].nullable);
    }

    #[test]
    fn test_validate_missing_required() {
        let report = validate_schema(&slim!([{"id": 1}]), "id#,name$");
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "[0].name");
        assert_eq!(report.errors[0].message, "Missing required field");
    }

    #[test]
    fn test_validate_nullable_accepts_null() {
        let report = validate_schema(&slim!({"id": 1, "score": null}), "id#,score#!");
        assert!(report.valid);
    }

    #[test]
    fn test_validate_type_mismatch_accumulates() {
        let data = slim!([
            {"id": "one", "active": 1},
            {"id": 2, "active": true}
        ]);
        let report = validate_schema(&data, "id#,active?");
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].path, "[0].id");
        assert_eq!(report.errors[0].message, "Type mismatch");
        assert_eq!(report.errors[1].path, "[0].active");
    }

    #[test]
    fn test_validate_rejects_non_record_input() {
        let report = validate_schema(&slim!(42), "id#");
        assert!(!report.valid);
        assert_eq!(report.errors[0].message, "Expected object or array of objects");
    }
}
