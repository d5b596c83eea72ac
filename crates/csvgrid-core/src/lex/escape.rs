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

//! Cell escaping rules shared by the parser and the serializer.
//!
//! Escaping wraps a cell in the escape character and doubles every escape
//! character inside it. Separators inside a wrapped cell are emitted as-is.
//!
//! ```
//! use csvgrid_core::lex::{escape_cell, unescape_cell};
//! use csvgrid_core::Dialect;
//!
//! let d = Dialect::default();
//! assert_eq!(escape_cell("y,z", &d), "\"y,z\"");
//! assert_eq!(escape_cell("say \"hi\"", &d), "\"say \"\"hi\"\"\"");
//! assert_eq!(unescape_cell("\"say \"\"hi\"\"\"", &d), "say \"hi\"");
//! ```

use std::borrow::Cow;

use crate::dialect::Dialect;

/// Returns `true` if `text` must be wrapped to survive a round trip.
#[inline]
pub fn needs_escaping(text: &str, dialect: &Dialect) -> bool {
    text.chars().any(|ch| dialect.is_special(ch))
}

/// Escapes one cell for output. Cells without special characters are
/// returned borrowed.
pub fn escape_cell<'a>(text: &'a str, dialect: &Dialect) -> Cow<'a, str> {
    if !needs_escaping(text, dialect) {
        return Cow::Borrowed(text);
    }

    let escape = dialect.escape();
    let mut out = String::with_capacity(text.len() + 2);
    out.push(escape);
    for ch in text.chars() {
        if ch == escape {
            out.push(escape);
        }
        out.push(ch);
    }
    out.push(escape);
    Cow::Owned(out)
}

/// Returns `true` if `raw` starts and ends with the escape character.
///
/// A lone escape character is not wrapped.
#[inline]
pub fn is_wrapped(raw: &str, dialect: &Dialect) -> bool {
    let escape = dialect.escape();
    let mut chars = raw.chars();
    matches!((chars.next(), chars.next_back()), (Some(first), Some(last)) if first == escape && last == escape)
}

/// Resolves quoting and escaping in a raw cell token.
///
/// - A wrapped cell loses its outer escape pair, and every escape followed
///   by an escape or separator collapses to the following character.
/// - Otherwise each internal `escape X escape` run, where `X` is an escape
///   or separator, collapses to `X`.
/// - Anything else, including the empty cell, is returned unchanged.
pub fn unescape_cell<'a>(raw: &'a str, dialect: &Dialect) -> Cow<'a, str> {
    if raw.is_empty() {
        return Cow::Borrowed(raw);
    }

    if is_wrapped(raw, dialect) {
        let escape_len = dialect.escape().len_utf8();
        let inner = &raw[escape_len..raw.len() - escape_len];
        return collapse_escaped(inner, dialect);
    }

    if raw.contains(dialect.escape()) {
        return collapse_runs(raw, dialect);
    }

    Cow::Borrowed(raw)
}

fn collapse_escaped<'a>(inner: &'a str, dialect: &Dialect) -> Cow<'a, str> {
    let escape = dialect.escape();
    if !inner.contains(escape) {
        return Cow::Borrowed(inner);
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == escape {
            if let Some(&next) = chars.peek() {
                if dialect.is_special(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    Cow::Owned(out)
}

fn collapse_runs<'a>(raw: &'a str, dialect: &Dialect) -> Cow<'a, str> {
    let escape = dialect.escape();
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut changed = false;
    let mut i = 0;

    while i < chars.len() {
        if i + 2 < chars.len()
            && chars[i] == escape
            && dialect.is_special(chars[i + 1])
            && chars[i + 2] == escape
        {
            out.push(chars[i + 1]);
            changed = true;
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv() -> Dialect {
        Dialect::default()
    }

    // ==================== needs_escaping ====================

    #[test]
    fn test_needs_escaping() {
        assert!(!needs_escaping("plain", &csv()));
        assert!(!needs_escaping("", &csv()));
        assert!(needs_escaping("a,b", &csv()));
        assert!(needs_escaping("a\nb", &csv()));
        assert!(needs_escaping("a\"b", &csv()));
        assert!(!needs_escaping("a\rb", &csv()));
    }

    #[test]
    fn test_needs_escaping_custom_dialect() {
        let d = Dialect::from_chars(';', '|', '\'');
        assert!(!needs_escaping("a,b\"c\nd", &d));
        assert!(needs_escaping("a;b", &d));
        assert!(needs_escaping("a|b", &d));
        assert!(needs_escaping("it's", &d));
    }

    // ==================== escape_cell ====================

    #[test]
    fn test_escape_plain_is_borrowed() {
        assert!(matches!(escape_cell("plain", &csv()), Cow::Borrowed("plain")));
    }

    #[test]
    fn test_escape_wraps_separators_without_doubling() {
        assert_eq!(escape_cell("y,z", &csv()), "\"y,z\"");
        assert_eq!(escape_cell("line1\nline2", &csv()), "\"line1\nline2\"");
    }

    #[test]
    fn test_escape_doubles_escape() {
        assert_eq!(escape_cell("\"", &csv()), "\"\"\"\"");
        assert_eq!(escape_cell("a\"b", &csv()), "\"a\"\"b\"");
    }

    #[test]
    fn test_escape_custom_dialect() {
        let d = Dialect::from_chars(';', '|', '\'');
        assert_eq!(escape_cell("it's;ok", &d), "'it''s;ok'");
    }

    // ==================== is_wrapped ====================

    #[test]
    fn test_is_wrapped() {
        assert!(is_wrapped("\"\"", &csv()));
        assert!(is_wrapped("\"a\"", &csv()));
        assert!(!is_wrapped("\"", &csv()));
        assert!(!is_wrapped("\"a", &csv()));
        assert!(!is_wrapped("a\"", &csv()));
        assert!(!is_wrapped("", &csv()));
    }

    // ==================== unescape_cell ====================

    #[test]
    fn test_unescape_empty() {
        assert_eq!(unescape_cell("", &csv()), "");
    }

    #[test]
    fn test_unescape_plain_is_borrowed() {
        assert!(matches!(unescape_cell("abc", &csv()), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_unescape_wrapped() {
        assert_eq!(unescape_cell("\"b,c\"", &csv()), "b,c");
        assert_eq!(unescape_cell("\"\"", &csv()), "");
        assert_eq!(unescape_cell("\"a\"\"b\"", &csv()), "a\"b");
        assert_eq!(unescape_cell("\"\"\"\"", &csv()), "\"");
    }

    #[test]
    fn test_unescape_wrapped_keeps_lone_escape_before_plain_char() {
        assert_eq!(unescape_cell("\"a\"b\"", &csv()), "a\"b");
    }

    #[test]
    fn test_unescape_wrapped_escape_prefixed_separator() {
        assert_eq!(unescape_cell("\"y\",z\"", &csv()), "y,z");
    }

    #[test]
    fn test_unescape_internal_runs() {
        assert_eq!(unescape_cell("x\"\"\"y", &csv()), "x\"y");
        assert_eq!(unescape_cell("a\",\"b", &csv()), "a,b");
        assert_eq!(unescape_cell("a\"\n\"b\",\"c", &csv()), "a\nb,c");
    }

    #[test]
    fn test_unescape_stray_escape_unchanged() {
        assert_eq!(unescape_cell("ab\"c", &csv()), "ab\"c");
        assert_eq!(unescape_cell("\"abc", &csv()), "\"abc");
        assert_eq!(unescape_cell("\"", &csv()), "\"");
    }

    #[test]
    fn test_unescape_multibyte_escape() {
        let d = Dialect::from_chars('¦', '¶', '«');
        assert_eq!(unescape_cell("«a¦b««c«", &d), "a¦b«c");
    }

    #[test]
    fn test_escape_then_unescape() {
        let d = csv();
        for text in ["", "a", "a,b", "\"", "\"\"", "x\ny", ",\",\n", "\",\""] {
            let escaped = escape_cell(text, &d);
            assert_eq!(unescape_cell(&escaped, &d), text, "text {:?}", text);
        }
    }
}
