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

//! Cell tokens produced by the scanner.

use super::span::SourcePos;

/// What ended a cell token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// Cell separator: more cells follow in this row.
    Cell,
    /// Row separator: the row is complete.
    Row,
    /// End of input: final cell of the final row.
    End,
}

/// One raw cell as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw text of the cell, delimiting escape characters included.
    pub raw: String,
    /// Whether the cell opened with the escape character.
    pub quoted: bool,
    /// What ended the cell.
    pub terminator: Terminator,
    /// Position of the cell's first character.
    pub pos: SourcePos,
}

impl Token {
    /// Returns `true` if this is the last token of the input.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.terminator == Terminator::End
    }

    /// Returns `true` if this token closes its row.
    #[inline]
    pub fn ends_row(&self) -> bool {
        matches!(self.terminator, Terminator::Row | Terminator::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(terminator: Terminator) -> Token {
        Token {
            raw: "x".to_string(),
            quoted: false,
            terminator,
            pos: SourcePos::start(),
        }
    }

    #[test]
    fn test_ends_row() {
        assert!(!token(Terminator::Cell).ends_row());
        assert!(token(Terminator::Row).ends_row());
        assert!(token(Terminator::End).ends_row());
    }

    #[test]
    fn test_is_last() {
        assert!(token(Terminator::End).is_last());
        assert!(!token(Terminator::Row).is_last());
    }
}
