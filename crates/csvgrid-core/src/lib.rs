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

//! Core tokenizer, parser, serializer and grid model for csvgrid.
//!
//! Delimited text is parsed into a rectangular [`Grid`] of [`Value`] cells
//! and serialized back with the same [`Dialect`]: a cell separator, a row
//! separator and an escape character, each any single `char`.
//!
//! # Lexical Analysis
//!
//! The [`lex`] module holds the character-scanning tokenizer and the cell
//! escaping rules used by both directions:
//!
//! - Three-state tokenizer over a fully materialized `&str`
//! - Escaping of cells containing a separator or the escape character
//! - Source positions for diagnostics
//!
//! # Examples
//!
//! ```
//! use csvgrid_core::{parse, serialize, Dialect, Value};
//!
//! let mut grid = parse("name,qty\nbolt,4", &Dialect::default()).unwrap();
//! grid.set(1, 1, 5).unwrap();
//! grid.append_row(vec![Value::from("nut, hex"), Value::Blank]).unwrap();
//!
//! assert_eq!(serialize(&grid, ""), "name,qty\nbolt,5\n\"nut, hex\",");
//! ```

mod dialect;
mod error;
mod grid;
pub mod lex;
mod parser;
mod value;
mod writer;

pub use dialect::{Dialect, DEFAULT_CELL_SEPARATOR, DEFAULT_ESCAPE, DEFAULT_ROW_SEPARATOR};
pub use error::{Axis, GridError, Result};
pub use grid::{AccessPolicy, Grid};
pub use parser::{parse, parse_rows};
pub use value::Value;
pub use writer::{serialize, write_grid};
