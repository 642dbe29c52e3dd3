//! SLIM Format Specification
//!
//! This module documents the SLIM wire format as implemented by this library.
//!
//! # Overview
//!
//! SLIM is a compact text interchange format for JSON-like data. Every value
//! carries a one-character type marker, and arrays of uniform records
//! collapse into a row/column table form. The goal is to minimize character
//! and token count versus a generic tree-of-tags format while staying
//! losslessly round-trippable for common shapes.
//!
//! ## Design Philosophy
//!
//! - **Markers over inference**: a leading character tells the parser exactly
//!   what follows; no backtracking, one character of lookahead
//! - **Tables for repetition**: uniform record arrays pay for their keys once,
//!   in the header
//! - **Leniency at the edges**: the decoder recovers best-effort from
//!   malformed input unless strict mode is requested
//!
//! # Literal Forms
//!
//! | Value kind | Literal | Notes |
//! |------------|---------|-------|
//! | Null | `!null` | |
//! | Undefined | `!undef` | absent-but-distinct-from-null |
//! | Depth sentinel | `!DEEP` | emitted at the encoder's depth limit; decodes to null |
//! | Boolean | `?T` / `?F` | |
//! | Number | `#42`, `#3.5`, `#NaN`, `#Inf`, `#-Inf` | special values are first-class |
//! | Text (unquoted) | raw characters | only when no quoting is required |
//! | Text (quoted) | `"…"` | `"` doubled, newline as `\n`; no other escapes |
//! | List (numeric) | `@#[1,2,3]` | |
//! | List (simple text) | `@[red,green,blue]` | plain unquoted elements |
//! | List (mixed) | `@[#1;x;?T]` | full encodings joined by `;` |
//! | Matrix | `*[1,2;3,4]` | rows `;`-joined, numbers `,`-joined |
//! | Record | `{id:#1,name:Mario}` | keys quoted only when necessary |
//! | Table | `\|2\|id#,name$\|` + newline + rows | one comma-joined row per line |
//!
//! # Strings
//!
//! Text is **unquoted by default**. Quoting is required when the text:
//!
//! - is empty, or has leading/trailing whitespace
//! - contains a structural character: `,` `;` newline `\|` `{` `}` `[` `]`
//! - contains a marker character: `"` `#` `?` `!` `*` `@`
//!
//! Inside quotes exactly two escapes exist: a doubled `""` for a literal
//! quote, and the two-character sequence `\n` for a newline. Every other
//! byte passes through verbatim, including lone backslashes — which means a
//! literal backslash followed by `n` is indistinguishable from an escaped
//! newline. This is a documented lossy edge of the format.
//!
//! # Array Format Selection
//!
//! The encoder picks the first matching form:
//!
//! 1. Empty → `@[]`
//! 2. Every element a list of numbers → matrix `*[…]` (rows may differ in
//!    length)
//! 3. Every element a number → `@#[…]`
//! 4. Every element unquotable text → `@[…]` comma-joined
//! 5. Enough rows (the `table_threshold` option, default 1) and every
//!    element a record → table
//! 6. Otherwise → mixed list, full encodings joined by `;`
//!
//! # Tables
//!
//! Header: `|<rowCount>|<schema>|` followed by a newline. The schema is a
//! comma-joined list of `name`, type marker, optional `!` for nullable:
//!
//! | Marker | Column type | Cell rendering |
//! |--------|-------------|----------------|
//! | `?` | boolean | `T` / `F` |
//! | `#` | number | decimal text, `NaN`, `Inf`, `-Inf` |
//! | `@` | list | elements joined by `+` |
//! | `~` | record | full recursive encoding |
//! | `$` | text (default/fallback) | raw, quoted when it contains a conflicting character |
//!
//! Column types are inferred from the rows: the narrowest marker accepting
//! every non-null value, falling back to `$` for heterogeneous columns.
//! Column order is first occurrence across rows — reordering rows can
//! reorder columns, which callers must accept.
//!
//! Missing, null, and undefined values all render as an empty cell. On
//! decode, an empty cell in a nullable column comes back as null and is
//! retained; in a non-nullable column it reads as undefined and the field is
//! omitted. The null/undefined distinction does not survive table cells.
//!
//! ```text
//! |2|id#,name$,active?|
//! 1,Mario,T
//! 2,Luigi,F
//! ```
//!
//! # Example
//!
//! ```rust
//! use serde_slim::{encode, decode, slim};
//!
//! let value = slim!([
//!     {"id": 1, "name": "Mario", "active": true},
//!     {"id": 2, "name": "Luigi", "active": false}
//! ]);
//!
//! let text = encode(&value);
//! assert_eq!(text, "|2|id#,name$,active?|\n1,Mario,T\n2,Luigi,F");
//! assert_eq!(decode(&text).unwrap(), value);
//! ```
//!
//! # Limitations
//!
//! - **Map keys**: must be strings
//! - **Table cells**: lists survive only as lists of numbers or text;
//!   null/undefined collapse; nested containers inside list cells degrade to
//!   their encoded text
//! - **Comments**: not supported in the format
//! - **Row-order sensitivity**: table column order follows first key
//!   occurrence, so row order affects the header

// This module contains only documentation; no implementation code
