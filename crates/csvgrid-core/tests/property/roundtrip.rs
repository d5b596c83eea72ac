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

//! Property-based tests for serialize → parse round trips.

use csvgrid_core::{parse, serialize, Dialect, Grid, Value};
use proptest::prelude::*;

fn cell(alphabet: &'static str) -> impl Strategy<Value = Value> {
    prop_oneof![
        1 => Just(Value::Blank),
        1 => any::<i64>().prop_map(Value::Int),
        1 => any::<bool>().prop_map(Value::Bool),
        1 => (-1.0e6f64..1.0e6).prop_map(Value::Float),
        4 => alphabet.prop_map(Value::from),
    ]
}

fn grid_rows(alphabet: &'static str) -> impl Strategy<Value = Vec<Vec<Value>>> {
    prop::collection::vec(prop::collection::vec(cell(alphabet), 1..6), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: parse(serialize(g)) == g in text form, with blanks read
    /// back as "" and scalars as their canonical text.
    #[test]
    fn prop_round_trip_default_dialect(rows in grid_rows("[ab ,\"\n]{0,8}")) {
        let grid = Grid::from_rows(rows);
        let text = serialize(&grid, "");
        let parsed = parse(&text, &Dialect::default());
        prop_assert!(parsed.is_ok(), "Failed to parse: {:?}", parsed.err());

        prop_assert_eq!(parsed.unwrap().to_text_rows(""), grid.to_text_rows(""));
    }

    /// Property: the round trip holds for a non-ASCII dialect.
    #[test]
    fn prop_round_trip_custom_dialect(rows in grid_rows("[aé,\"\n¦¶«]{0,8}")) {
        let dialect = Dialect::from_chars('¦', '¶', '«');
        let grid = Grid::from_rows(rows).with_dialect(dialect);
        let text = serialize(&grid, "");
        let parsed = parse(&text, &dialect).unwrap();

        prop_assert_eq!(parsed.to_text_rows(""), grid.to_text_rows(""));
    }

    /// Property: a second round trip changes nothing.
    #[test]
    fn prop_serialize_is_stable(rows in grid_rows("[ab,\"\n]{0,6}")) {
        let grid = Grid::from_rows(rows);
        let first = serialize(&grid, "");
        let second = serialize(&parse(&first, &Dialect::default()).unwrap(), "");

        prop_assert_eq!(first, second);
    }

    /// Property: parsing never fails and always yields a rectangular grid.
    #[test]
    fn prop_parse_total(text in "[ab,\"\n\r]{0,64}") {
        let grid = parse(&text, &Dialect::default());
        prop_assert!(grid.is_ok(), "Failed to parse: {:?}", grid.err());

        let grid = grid.unwrap();
        let width = grid.col_count();
        prop_assert!(grid.row_count() >= 1);
        prop_assert!(grid.rows().iter().all(|row| row.len() == width));
    }
}
