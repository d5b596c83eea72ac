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

//! Error types for JSON conversion.

use csvgrid_core::GridError;
use thiserror::Error;

/// JSON conversion error types.
///
/// # Examples
///
/// ```
/// use csvgrid_json::JsonError;
///
/// let err = JsonError::MissingHeader {
///     row: 3,
///     width: 4,
///     headers: 2,
/// };
///
/// assert_eq!(err.to_string(), "row 3 has 4 cells but only 2 headers");
/// ```
#[derive(Debug, Error)]
pub enum JsonError {
    /// Error from the underlying grid.
    ///
    /// Type checks on headers and imported JSON report
    /// [`GridError::TypeMismatch`] through this variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvgrid_core::GridError;
    /// use csvgrid_json::JsonError;
    ///
    /// let err: JsonError = GridError::type_mismatch("root", "array", "object").into();
    /// assert!(err.is_type_mismatch());
    /// assert_eq!(err.to_string(), "type mismatch in root: expected array, found object");
    /// ```
    #[error(transparent)]
    Grid(#[from] GridError),

    /// JSON syntax or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A row has more cells than there are headers to key them.
    #[error("row {row} has {width} cells but only {headers} headers")]
    MissingHeader {
        /// Row index (0-based, grid rows).
        row: usize,
        /// Number of cells in the row.
        width: usize,
        /// Number of headers.
        headers: usize,
    },
}

impl JsonError {
    pub(crate) fn type_mismatch(
        context: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::Grid(GridError::type_mismatch(context, expected, found))
    }

    /// Returns `true` for a [`GridError::TypeMismatch`] raised during
    /// conversion.
    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::Grid(GridError::TypeMismatch { .. }))
    }
}

/// Result type for JSON conversion.
pub type Result<T> = std::result::Result<T, JsonError>;
