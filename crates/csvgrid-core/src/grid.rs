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

//! The in-memory grid and its accessors.
//!
//! A [`Grid`] is an ordered list of rows, each an ordered list of
//! [`Value`] cells, kept rectangular: construction pads every row to the
//! widest one and every write that grows the grid pads with
//! [`Value::Blank`].
//!
//! Out-of-bounds behavior is governed by the grid's [`AccessPolicy`]:
//!
//! ```
//! use csvgrid_core::{AccessPolicy, Grid, Value};
//!
//! let mut relaxed = Grid::from_rows(vec![vec!["a", "b"]]);
//! assert_eq!(relaxed.get(5, 0).unwrap(), &Value::Blank);
//! relaxed.set(2, 3, "z").unwrap();
//! assert_eq!(relaxed.row_count(), 3);
//! assert_eq!(relaxed.col_count(), 4);
//!
//! let strict = Grid::from_rows(vec![vec!["a", "b"]]).with_policy(AccessPolicy::Strict);
//! assert!(strict.get(5, 0).unwrap_err().is_bounds());
//! ```

use std::borrow::Cow;

use tracing::trace;

use crate::dialect::Dialect;
use crate::error::{Axis, GridError, Result};
use crate::value::Value;

static BLANK: Value = Value::Blank;

/// How accessors treat indices outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessPolicy {
    /// Reads past the edge return blanks; writes past the edge grow the grid.
    #[default]
    Relaxed,
    /// Any access past the edge fails with [`GridError::Bounds`].
    Strict,
}

/// Rows of cells plus the dialect they are read and written with.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Value>>,
    dialect: Dialect,
    policy: AccessPolicy,
}

impl Default for Grid {
    /// One row holding one blank cell.
    fn default() -> Self {
        Self {
            rows: vec![vec![Value::Blank]],
            dialect: Dialect::default(),
            policy: AccessPolicy::default(),
        }
    }
}

impl Grid {
    /// Creates a grid with one row holding one blank cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from rows, padding short rows with blanks.
    ///
    /// ```
    /// use csvgrid_core::{Grid, Value};
    ///
    /// let grid = Grid::from_rows(vec![vec![Value::from("a"), Value::from(1)], vec![Value::from(true)]]);
    /// assert_eq!(grid.col_count(), 2);
    /// assert_eq!(grid.get(1, 1).unwrap(), &Value::Blank);
    /// ```
    pub fn from_rows<R, C, V>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut rows: Vec<Vec<Value>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Value::Blank);
        }

        Self {
            rows,
            dialect: Dialect::default(),
            policy: AccessPolicy::default(),
        }
    }

    /// Replaces the dialect used when serializing this grid.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Replaces the out-of-bounds policy.
    pub fn with_policy(mut self, policy: AccessPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The dialect this grid was parsed with or will serialize with.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// The out-of-bounds policy.
    pub fn policy(&self) -> AccessPolicy {
        self.policy
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (width of the widest row).
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rows times columns.
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.col_count()
    }

    /// Number of non-blank cells.
    pub fn populated_cell_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_blank())
            .count()
    }

    /// Returns `true` if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Consumes the grid, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }

    /// Every cell in its text form, blanks replaced by `blank`.
    pub fn to_text_rows(&self, blank: &str) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_text(blank).into_owned()).collect())
            .collect()
    }

    /// Cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&Value> {
        match self.rows.get(row) {
            Some(cells) => match cells.get(col) {
                Some(cell) => Ok(cell),
                None => self.out_of_bounds(Axis::Column, col, cells.len()).map(|_| &BLANK),
            },
            None => self.out_of_bounds(Axis::Row, row, self.rows.len()).map(|_| &BLANK),
        }
    }

    /// Row at `index`; a blank row past the edge under the relaxed policy.
    pub fn row(&self, index: usize) -> Result<Cow<'_, [Value]>> {
        match self.rows.get(index) {
            Some(cells) => Ok(Cow::Borrowed(cells.as_slice())),
            None => {
                self.out_of_bounds(Axis::Row, index, self.rows.len())?;
                Ok(Cow::Owned(self.blank_row()))
            }
        }
    }

    /// Column at `index`, top to bottom.
    pub fn column(&self, index: usize) -> Result<Vec<Value>> {
        let width = self.col_count();
        if index >= width {
            self.out_of_bounds(Axis::Column, index, width)?;
        }
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect())
    }

    /// Writes one cell.
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<Value>) -> Result<()> {
        if row >= self.rows.len() {
            self.out_of_bounds(Axis::Row, row, self.rows.len())?;
        }
        let width = self.col_count();
        if col >= width {
            self.out_of_bounds(Axis::Column, col, width)?;
        }

        self.grow_rows(row + 1);
        self.grow_cols(col + 1);
        self.rows[row][col] = value.into();
        Ok(())
    }

    /// Replaces a whole row. Short rows are padded with blanks.
    pub fn set_row(&mut self, index: usize, row: Vec<Value>) -> Result<()> {
        if index >= self.rows.len() {
            self.out_of_bounds(Axis::Row, index, self.rows.len())?;
        }
        let width = self.col_count();
        if row.len() > width {
            self.out_of_bounds(Axis::Column, row.len(), width)?;
        }

        self.grow_rows(index + 1);
        self.grow_cols(row.len());
        self.rows[index] = self.padded(row);
        Ok(())
    }

    /// Adds a row at the bottom. Short rows are padded with blanks.
    ///
    /// Under the strict policy a row wider than the grid is rejected, unless
    /// the grid has no rows yet.
    pub fn append_row(&mut self, row: Vec<Value>) -> Result<()> {
        let width = self.col_count();
        if row.len() > width && !self.rows.is_empty() {
            self.out_of_bounds(Axis::Column, row.len(), width)?;
        }

        self.grow_cols(row.len());
        let row = self.padded(row);
        self.rows.push(row);
        Ok(())
    }

    /// Adds a column on the right. Short columns are padded with blanks.
    ///
    /// Under the strict policy a column taller than the grid is rejected,
    /// unless the grid has no rows yet.
    pub fn append_column(&mut self, column: Vec<Value>) -> Result<()> {
        let height = self.rows.len();
        if column.len() > height && height > 0 {
            self.out_of_bounds(Axis::Row, column.len(), height)?;
        }

        let width = self.col_count();
        self.grow_rows(column.len());
        let mut column = column.into_iter();
        for row in &mut self.rows {
            row.resize(width, Value::Blank);
            row.push(column.next().unwrap_or_default());
        }
        Ok(())
    }

    fn out_of_bounds(&self, axis: Axis, index: usize, len: usize) -> Result<()> {
        match self.policy {
            AccessPolicy::Strict => Err(GridError::Bounds { axis, index, len }),
            AccessPolicy::Relaxed => Ok(()),
        }
    }

    fn blank_row(&self) -> Vec<Value> {
        vec![Value::Blank; self.col_count()]
    }

    fn padded(&self, mut row: Vec<Value>) -> Vec<Value> {
        row.resize(self.col_count().max(row.len()), Value::Blank);
        row
    }

    fn grow_rows(&mut self, count: usize) {
        if count > self.rows.len() {
            trace!(from = self.rows.len(), to = count, "growing grid rows");
            let blank = self.blank_row();
            self.rows.resize(count, blank);
        }
    }

    fn grow_cols(&mut self, count: usize) {
        if count > self.col_count() {
            trace!(from = self.col_count(), to = count, "growing grid columns");
            for row in &mut self.rows {
                row.resize(count, Value::Blank);
            }
        }
    }
}
