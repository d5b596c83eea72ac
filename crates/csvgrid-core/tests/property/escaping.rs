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

//! Property-based tests for cell escaping.

use csvgrid_core::lex::{escape_cell, is_wrapped, needs_escaping, unescape_cell};
use csvgrid_core::Dialect;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: a cell is wrapped iff it holds a separator or the escape.
    #[test]
    fn prop_wrapped_iff_special(text in "[ab ,\"\n]{0,12}") {
        let dialect = Dialect::default();
        let special = text.contains(',') || text.contains('\n') || text.contains('"');
        let escaped = escape_cell(&text, &dialect);

        prop_assert_eq!(needs_escaping(&text, &dialect), special);
        prop_assert_eq!(is_wrapped(&escaped, &dialect), special);
        if !special {
            prop_assert_eq!(&*escaped, text.as_str());
        }
    }

    /// Property: unescape inverts escape.
    #[test]
    fn prop_unescape_inverts_escape(text in "[ab,\"\n]{0,12}") {
        let dialect = Dialect::default();
        let escaped = escape_cell(&text, &dialect);
        let unescaped = unescape_cell(&escaped, &dialect);
        prop_assert_eq!(&*unescaped, text.as_str());
    }

    /// Property: escaped length is the text plus the wrapping pair plus one
    /// per escape character.
    #[test]
    fn prop_escape_length(text in "[ab,\"\n]{1,12}") {
        let dialect = Dialect::default();
        prop_assume!(needs_escaping(&text, &dialect));

        let quotes = text.matches('"').count();
        prop_assert_eq!(escape_cell(&text, &dialect).len(), text.len() + 2 + quotes);
    }

    /// Property: text without the escape character is left alone by
    /// unescaping, however often it is applied.
    #[test]
    fn prop_unescape_idempotent_on_plain_text(text in "[ab ,\n]{0,12}") {
        let dialect = Dialect::default();
        let once = unescape_cell(&text, &dialect).into_owned();
        let twice = unescape_cell(&once, &dialect).into_owned();

        prop_assert_eq!(&once, &text);
        prop_assert_eq!(&twice, &text);
    }
}
