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

//! The separator/escape triple shared by the parser and the serializer.
//!
//! A [`Dialect`] is fixed for the lifetime of a [`Grid`](crate::Grid): the
//! text a grid was parsed from and the text it serializes to use the same
//! three characters. Mixing dialects between a parse and a later serialize
//! of the same data is a caller error and is not detected.

use crate::error::{GridError, Result};

/// Default cell separator.
pub const DEFAULT_CELL_SEPARATOR: char = ',';
/// Default row separator.
pub const DEFAULT_ROW_SEPARATOR: char = '\n';
/// Default escape (quote) character.
pub const DEFAULT_ESCAPE: char = '"';

/// Cell separator, row separator and escape character.
///
/// # Examples
///
/// ```
/// use csvgrid_core::Dialect;
///
/// // Conventional CSV
/// let csv = Dialect::default();
/// assert_eq!(csv.cell_separator(), ',');
/// assert_eq!(csv.row_separator(), '\n');
/// assert_eq!(csv.escape(), '"');
///
/// // Customize any of the three
/// let custom = Dialect::new()
///     .with_cell_separator(';')
///     .with_row_separator('|')
///     .with_escape('\'');
/// assert!(custom.validate().is_ok());
///
/// // Overlapping characters are rejected by validation
/// let broken = Dialect::new().with_escape(',');
/// assert!(broken.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dialect {
    cell_separator: char,
    row_separator: char,
    escape: char,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect {
    /// Conventional CSV: comma, newline, double quote.
    pub const fn new() -> Self {
        Self {
            cell_separator: DEFAULT_CELL_SEPARATOR,
            row_separator: DEFAULT_ROW_SEPARATOR,
            escape: DEFAULT_ESCAPE,
        }
    }

    /// Tab-separated values with double-quote escaping.
    pub const fn tsv() -> Self {
        Self::new().with_cell_separator('\t')
    }

    /// Builds a dialect from all three characters at once.
    pub const fn from_chars(cell_separator: char, row_separator: char, escape: char) -> Self {
        Self {
            cell_separator,
            row_separator,
            escape,
        }
    }

    /// Sets the cell separator.
    pub const fn with_cell_separator(mut self, ch: char) -> Self {
        self.cell_separator = ch;
        self
    }

    /// Sets the row separator.
    pub const fn with_row_separator(mut self, ch: char) -> Self {
        self.row_separator = ch;
        self
    }

    /// Sets the escape character.
    pub const fn with_escape(mut self, ch: char) -> Self {
        self.escape = ch;
        self
    }

    /// Character ending a cell within a row.
    #[inline]
    pub const fn cell_separator(&self) -> char {
        self.cell_separator
    }

    /// Character ending a row.
    #[inline]
    pub const fn row_separator(&self) -> char {
        self.row_separator
    }

    /// Character quoting cells and escaping itself by doubling.
    #[inline]
    pub const fn escape(&self) -> char {
        self.escape
    }

    /// Returns `true` if `ch` is one of the three dialect characters.
    #[inline]
    pub fn is_special(&self, ch: char) -> bool {
        ch == self.cell_separator || ch == self.row_separator || ch == self.escape
    }

    /// Returns `true` if `ch` ends a cell or a row.
    #[inline]
    pub fn is_separator(&self, ch: char) -> bool {
        ch == self.cell_separator || ch == self.row_separator
    }

    /// Checks that the three characters are pairwise distinct.
    ///
    /// The parser and serializer do not call this; a dialect with
    /// overlapping characters tokenizes, just not usefully.
    pub fn validate(&self) -> Result<()> {
        let pairs = [
            ("cell separator", self.cell_separator, "row separator", self.row_separator),
            ("cell separator", self.cell_separator, "escape", self.escape),
            ("row separator", self.row_separator, "escape", self.escape),
        ];
        for (a_name, a, b_name, b) in pairs {
            if a == b {
                return Err(GridError::config(format!(
                    "{} and {} are both {:?}",
                    a_name, b_name, a
                )));
            }
        }
        Ok(())
    }
}
