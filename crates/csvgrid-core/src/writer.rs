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

//! Grid to text.
//!
//! Every cell is rendered through [`Value::to_text`], escaped on its own
//! with [`escape_cell`], then cells are joined with the cell separator and
//! rows with the row separator. No row separator follows the last row.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::lex::escape_cell;

/// Serializes `grid` with its own dialect, writing `blank` for blank cells.
///
/// A grid with no rows serializes to `""`, which parses back as one row
/// holding one empty cell.
///
/// # Examples
///
/// ```
/// use csvgrid_core::{serialize, Grid, Value};
///
/// let grid = Grid::from_rows(vec![vec![Value::from("x"), Value::from("y,z")]]);
/// assert_eq!(serialize(&grid, ""), "x,\"y,z\"");
///
/// let grid = Grid::from_rows(vec![vec![Value::from("a"), Value::Blank]]);
/// assert_eq!(serialize(&grid, ""), "a,");
/// assert_eq!(serialize(&grid, "NULL"), "a,NULL");
/// ```
pub fn serialize(grid: &Grid, blank: &str) -> String {
    let out = Serialized { grid, blank }.to_string();

    debug!(
        rows = grid.row_count(),
        columns = grid.col_count(),
        bytes = out.len(),
        "serialized grid"
    );
    out
}

/// Serializes `grid` into any [`Write`] sink, cell by cell.
///
/// Output goes to `writer` as it is produced; wrap unbuffered sinks in a
/// [`BufWriter`](std::io::BufWriter).
///
/// # Errors
///
/// Returns [`GridError::Io`](crate::GridError::Io) if the writer fails.
///
/// # Examples
///
/// ```
/// use csvgrid_core::{write_grid, Grid};
///
/// let grid = Grid::from_rows(vec![vec!["a", "b"], vec!["c", "d"]]);
/// let mut buf = Vec::new();
/// write_grid(&grid, "", &mut buf).unwrap();
/// assert_eq!(buf, b"a,b\nc,d");
/// ```
pub fn write_grid<W: Write>(grid: &Grid, blank: &str, writer: W) -> Result<()> {
    let mut sink = IoSink {
        inner: writer,
        error: None,
    };

    if write_to(grid, blank, &mut sink).is_err() {
        let err = sink
            .error
            .take()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "formatter error"));
        return Err(err.into());
    }
    sink.inner.flush()?;

    debug!(
        rows = grid.row_count(),
        columns = grid.col_count(),
        "wrote grid"
    );
    Ok(())
}

/// Adapts an [`io::Write`] sink to [`fmt::Write`], keeping the first I/O error.
struct IoSink<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> fmt::Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

struct Serialized<'a> {
    grid: &'a Grid,
    blank: &'a str,
}

impl fmt::Display for Serialized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_to(self.grid, self.blank, f)
    }
}

fn write_to(grid: &Grid, blank: &str, out: &mut impl fmt::Write) -> fmt::Result {
    let dialect = grid.dialect();
    for (r, row) in grid.rows().iter().enumerate() {
        if r > 0 {
            out.write_char(dialect.row_separator())?;
        }
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                out.write_char(dialect.cell_separator())?;
            }
            let text = cell.to_text(blank);
            out.write_str(&escape_cell(&text, dialect))?;
        }
    }
    Ok(())
}

impl fmt::Display for Grid {
    /// Serialized form with blank cells written as empty strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_to(self, "", f)
    }
}
