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

//! Error types for grid parsing, serialization and access.

use std::fmt;
use thiserror::Error;

use crate::lex::SourcePos;

/// The grid dimension an out-of-bounds access was made on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Row index.
    Row,
    /// Column index.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// Errors produced by the tokenizer, parser, serializer and grid accessors.
///
/// # Examples
///
/// ```
/// use csvgrid_core::{Axis, GridError};
///
/// let err = GridError::Bounds {
///     axis: Axis::Row,
///     index: 4,
///     len: 2,
/// };
///
/// assert_eq!(err.to_string(), "row index 4 out of range (len 2)");
/// assert!(err.is_bounds());
/// ```
#[derive(Debug, Error)]
pub enum GridError {
    /// Invalid dialect or construction arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvgrid_core::GridError;
    ///
    /// let err = GridError::Config {
    ///     message: "cell separator and escape are both ','".to_string(),
    /// };
    /// assert!(err.to_string().starts_with("invalid configuration"));
    /// ```
    #[error("invalid configuration: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },

    /// The tokenizer produced a token that violates its own invariants.
    ///
    /// This signals a defect in the tokenizer rather than bad user data;
    /// unbalanced quotes and similar input problems never raise it.
    #[error("malformed token at {pos}: {message}")]
    Malformed {
        /// Description of the violated invariant.
        message: String,
        /// Where the offending token started.
        pos: SourcePos,
    },

    /// Out-of-bounds access under [`AccessPolicy::Strict`](crate::AccessPolicy::Strict).
    #[error("{axis} index {index} out of range (len {len})")]
    Bounds {
        /// Dimension that was exceeded.
        axis: Axis,
        /// Requested index (or requested length for whole rows/columns).
        index: usize,
        /// Current length of that dimension.
        len: usize,
    },

    /// A value had a type outside the set allowed at that point.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvgrid_core::GridError;
    ///
    /// let err = GridError::TypeMismatch {
    ///     context: "row 2".to_string(),
    ///     expected: "array".to_string(),
    ///     found: "object".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "type mismatch in row 2: expected array, found object"
    /// );
    /// ```
    #[error("type mismatch in {context}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Where the mismatch occurred.
        context: String,
        /// Allowed type(s).
        expected: String,
        /// Actual type.
        found: String,
    },

    /// I/O error while writing serialized output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GridError {
    /// Shorthand for a [`GridError::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Shorthand for a [`GridError::Malformed`].
    pub fn malformed(message: impl Into<String>, pos: SourcePos) -> Self {
        Self::Malformed {
            message: message.into(),
            pos,
        }
    }

    /// Shorthand for a [`GridError::TypeMismatch`].
    pub fn type_mismatch(
        context: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            context: context.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Source position of the error, if it has one.
    #[inline]
    pub fn position(&self) -> Option<SourcePos> {
        match self {
            Self::Malformed { pos, .. } => Some(*pos),
            _ => None,
        }
    }

    /// Returns `true` for strict-mode bounds faults.
    #[inline]
    pub fn is_bounds(&self) -> bool {
        matches!(self, Self::Bounds { .. })
    }

    /// Returns `true` for tokenizer invariant violations.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Result type for csvgrid operations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Row.to_string(), "row");
        assert_eq!(Axis::Column.to_string(), "column");
    }

    #[test]
    fn test_bounds_display() {
        let err = GridError::Bounds {
            axis: Axis::Column,
            index: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "column index 7 out of range (len 3)");
        assert!(err.is_bounds());
        assert!(!err.is_malformed());
        assert_eq!(err.position(), None);
    }

    #[test]
    fn test_malformed_carries_position() {
        let err = GridError::malformed("quoted token without escape", SourcePos::new(3, 9));
        assert!(err.is_malformed());
        assert_eq!(err.position(), Some(SourcePos::new(3, 9)));
        let msg = err.to_string();
        assert!(msg.contains("line 3, column 9"));
        assert!(msg.contains("quoted token without escape"));
    }

    #[test]
    fn test_config_shorthand() {
        let err = GridError::config("separators overlap");
        assert_eq!(err.to_string(), "invalid configuration: separators overlap");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GridError = io.into();
        assert!(matches!(err, GridError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
