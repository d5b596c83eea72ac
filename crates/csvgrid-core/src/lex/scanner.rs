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

//! Character-scanning tokenizer.
//!
//! The scanner is a three-state machine driven one character at a time:
//!
//! | State          | escape                      | cell/row separator | other                 |
//! |----------------|-----------------------------|--------------------|-----------------------|
//! | `InCell`       | opens a quote if cell empty | ends the cell      | literal               |
//! | `InQuotedCell` | moves to `AfterQuote`       | literal            | literal               |
//! | `AfterQuote`   | back to `InQuotedCell`      | ends the cell      | literal, to `InCell`  |
//!
//! Quoted spans keep their escape characters in [`Token::raw`]; resolving
//! them is the job of [`unescape_cell`](super::unescape_cell).
//!
//! Input with unbalanced quotes is not rejected. An unterminated quoted span
//! swallows the rest of the input into one cell and a warning is logged.

use std::str::Chars;

use tracing::warn;

use super::span::SourcePos;
use super::tokens::{Terminator, Token};
use crate::dialect::Dialect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InCell,
    InQuotedCell,
    AfterQuote,
}

/// Iterator over the cell tokens of a text buffer.
///
/// The final token always carries [`Terminator::End`]; after it the
/// iterator is exhausted.
///
/// # Examples
///
/// ```
/// use csvgrid_core::lex::{tokenize, Terminator};
/// use csvgrid_core::Dialect;
///
/// let tokens: Vec<_> = tokenize("a,\"b,c\"\nd", &Dialect::default()).collect();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].raw, "\"b,c\"");
/// assert!(tokens[1].quoted);
/// assert_eq!(tokens[1].terminator, Terminator::Row);
/// assert_eq!(tokens[2].terminator, Terminator::End);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    chars: Chars<'a>,
    dialect: Dialect,
    pos: SourcePos,
    done: bool,
}

/// Tokenize `text` with the given dialect.
pub fn tokenize<'a>(text: &'a str, dialect: &Dialect) -> Tokenizer<'a> {
    Tokenizer::new(text, *dialect)
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `text`.
    pub fn new(text: &'a str, dialect: Dialect) -> Self {
        Self {
            chars: text.chars(),
            dialect,
            pos: SourcePos::start(),
            done: false,
        }
    }

    /// Position of the next character to be scanned.
    pub fn position(&self) -> SourcePos {
        self.pos
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let cell_sep = self.dialect.cell_separator();
        let row_sep = self.dialect.row_separator();
        let escape = self.dialect.escape();

        let start = self.pos;
        let mut raw = String::new();
        let mut quoted = false;
        let mut state = State::InCell;

        while let Some(ch) = self.chars.next() {
            self.pos.advance(ch);

            let terminator = match state {
                State::InCell | State::AfterQuote if ch == cell_sep => Some(Terminator::Cell),
                State::InCell | State::AfterQuote if ch == row_sep => Some(Terminator::Row),
                _ => None,
            };
            if let Some(terminator) = terminator {
                return Some(Token {
                    raw,
                    quoted,
                    terminator,
                    pos: start,
                });
            }

            state = match state {
                State::InCell if ch == escape && raw.is_empty() => {
                    quoted = true;
                    State::InQuotedCell
                }
                State::InCell => State::InCell,
                State::InQuotedCell if ch == escape => State::AfterQuote,
                State::InQuotedCell => State::InQuotedCell,
                State::AfterQuote if ch == escape => State::InQuotedCell,
                State::AfterQuote => State::InCell,
            };
            raw.push(ch);
        }

        if state == State::InQuotedCell {
            warn!(
                line = start.line(),
                column = start.column(),
                "unterminated quoted cell runs to end of input"
            );
        }

        self.done = true;
        Some(Token {
            raw,
            quoted,
            terminator: Terminator::End,
            pos: start,
        })
    }
}
