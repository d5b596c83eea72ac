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

//! Lexical layer: scanning raw text into cell tokens and resolving escapes.
//!
//! # Module Structure
//!
//! - [`span`] - Source positions for tokens and errors
//! - [`tokens`] - Token and terminator types
//! - [`scanner`] - The three-state character-scanning tokenizer
//! - [`escape`] - Escaping rules shared with the serializer
//!
//! # Examples
//!
//! ```
//! use csvgrid_core::lex::{tokenize, unescape_cell};
//! use csvgrid_core::Dialect;
//!
//! let dialect = Dialect::default();
//! let cells: Vec<String> = tokenize("a,\"b,c\"", &dialect)
//!     .map(|t| unescape_cell(&t.raw, &dialect).into_owned())
//!     .collect();
//! assert_eq!(cells, vec!["a", "b,c"]);
//! ```

pub mod escape;
pub mod scanner;
pub mod span;
pub mod tokens;

pub use escape::{escape_cell, is_wrapped, needs_escaping, unescape_cell};
pub use scanner::{tokenize, Tokenizer};
pub use span::SourcePos;
pub use tokens::{Terminator, Token};
