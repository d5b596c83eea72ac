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

//! Text to grid.
//!
//! Parsing runs the [`tokenize`] scanner to completion, stops at the first
//! end-of-input token, and resolves each cell's quoting with
//! [`unescape_cell`]. Every parsed cell is [`Value::Text`].
//!
//! # Examples
//!
//! ```
//! use csvgrid_core::{parse, Dialect, Value};
//!
//! let grid = parse("a,\"b,c\"\nd,e", &Dialect::default()).unwrap();
//! assert_eq!(grid.get(0, 1).unwrap(), &Value::from("b,c"));
//! assert_eq!(grid.row_count(), 2);
//! ```

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::lex::{tokenize, unescape_cell, Token};
use crate::value::Value;

/// Parses `text` into a padded [`Grid`] carrying `dialect`.
///
/// Never fails on user data. Unbalanced quotes produce a best-effort grid.
///
/// # Errors
///
/// Returns [`GridError::Malformed`] if the tokenizer emits a token that
/// breaks its own shape invariants.
pub fn parse(text: &str, dialect: &Dialect) -> Result<Grid> {
    let rows = parse_rows(text, dialect)?;
    let grid = Grid::from_rows(
        rows.into_iter()
            .map(|row| row.into_iter().map(Value::Text)),
    )
    .with_dialect(*dialect);

    debug!(
        rows = grid.row_count(),
        columns = grid.col_count(),
        "parsed grid"
    );
    Ok(grid)
}

/// Parses `text` into rows of unescaped cell strings, without padding.
///
/// ```
/// use csvgrid_core::{parse_rows, Dialect};
///
/// let rows = parse_rows("a\nb,c\n", &Dialect::default()).unwrap();
/// assert_eq!(rows, vec![vec!["a"], vec!["b", "c"], vec![""]]);
/// ```
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_rows(text: &str, dialect: &Dialect) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut current = Vec::new();
    let mut cells = 0usize;

    for token in tokenize(text, dialect) {
        validate_token(&token, dialect)?;
        current.push(unescape_cell(&token.raw, dialect).into_owned());
        cells += 1;

        if token.ends_row() {
            rows.push(std::mem::take(&mut current));
        }
        if token.is_last() {
            break;
        }
    }

    debug!(rows = rows.len(), cells, bytes = text.len(), "tokenized input");
    Ok(rows)
}

fn validate_token(token: &Token, dialect: &Dialect) -> Result<()> {
    if token.quoted && !token.raw.starts_with(dialect.escape()) {
        return Err(GridError::malformed(
            format!(
                "quoted cell does not open with {:?}",
                dialect.escape()
            ),
            token.pos,
        ));
    }
    if !token.quoted && token.raw.chars().any(|ch| dialect.is_separator(ch)) {
        return Err(GridError::malformed(
            "unquoted cell contains a separator",
            token.pos,
        ));
    }
    Ok(())
}
