// csvgrid - Delimited text grid codec
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # csvgrid - Delimited text grid codec
//!
//! Parses CSV-like text into a rectangular grid of cells and writes it back,
//! with configurable cell separator, row separator and escape character.
//!
//! ## Quick Start
//!
//! ```rust
//! use csvgrid::{parse, to_string, Value};
//!
//! let mut grid = parse("name,qty\nbolt,4").unwrap();
//! grid.set(1, 1, 6).unwrap();
//! grid.append_row(vec![Value::from("washer, flat"), Value::Int(10)]).unwrap();
//!
//! assert_eq!(to_string(&grid), "name,qty\nbolt,6\n\"washer, flat\",10");
//! ```
//!
//! ## Modules
//!
//! - [`lex`]: Tokenizer and cell escaping
//! - `json`: JSON export and import (feature = "json", on by default)

// Re-export core types
pub use csvgrid_core::{
    // Functions
    parse as parse_with_dialect,
    parse_rows,
    serialize,
    write_grid,
    // Main types
    AccessPolicy,
    Dialect,
    Grid,
    Value,
    // Errors
    Axis,
    GridError,
    Result,
};

// Re-export lexer utilities
pub mod lex {
    //! Tokenizer and cell escaping
    pub use csvgrid_core::lex::{
        escape_cell, is_wrapped, needs_escaping, tokenize, unescape_cell, SourcePos, Terminator,
        Token, Tokenizer,
    };
}

/// JSON conversion utilities (requires `json` feature)
#[cfg(feature = "json")]
pub mod json {
    pub use csvgrid_json::{
        from_json, from_json_value, to_json, to_json_value, to_records, value_to_json, JsonError,
        Record, Result, ToJsonConfig,
    };
}

// Convenience functions at crate root

/// Parse comma/newline/double-quote text into a grid.
///
/// # Examples
///
/// ```rust
/// use csvgrid::{parse, Value};
///
/// let grid = parse("a,\"b,c\"\nd,e").unwrap();
/// assert_eq!(grid.get(0, 1).unwrap(), &Value::from("b,c"));
/// ```
#[inline]
pub fn parse(text: &str) -> Result<Grid> {
    csvgrid_core::parse(text, &Dialect::default())
}

/// Serialize a grid with blank cells written as empty strings.
#[inline]
pub fn to_string(grid: &Grid) -> String {
    serialize(grid, "")
}

/// Convert a grid to compact JSON records keyed by its first row.
///
/// # Examples
///
/// ```rust
/// use csvgrid::{parse, to_json};
///
/// let grid = parse("id,name\n1,bolt").unwrap();
/// assert_eq!(to_json(&grid).unwrap(), r#"[{"id":"1","name":"bolt"}]"#);
/// ```
#[cfg(feature = "json")]
#[inline]
pub fn to_json(grid: &Grid) -> json::Result<String> {
    json::to_json(grid, &json::ToJsonConfig::default())
}

/// Build a grid from JSON rows or records, using the default dialect.
#[cfg(feature = "json")]
#[inline]
pub fn from_json(text: &str) -> json::Result<Grid> {
    json::from_json(text, Dialect::default())
}
