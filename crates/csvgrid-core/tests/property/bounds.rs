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

//! Property-based tests for out-of-bounds access policies.

use csvgrid_core::{AccessPolicy, Grid, Value};
use proptest::prelude::*;

fn grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(prop::collection::vec("[a-z]{0,3}", 1..5), 1..5).prop_map(|rows| Grid::from_rows(rows))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: relaxed reads past the last row are blank.
    #[test]
    fn prop_relaxed_read_past_end_is_blank(grid in grid(), extra in 0usize..4, col in 0usize..8) {
        let value = grid.get(grid.row_count() + extra, col);
        prop_assert_eq!(value.unwrap(), &Value::Blank);
    }

    /// Property: strict reads past the last row fail with a bounds fault.
    #[test]
    fn prop_strict_read_past_end_fails(grid in grid(), extra in 0usize..4) {
        let grid = grid.with_policy(AccessPolicy::Strict);
        let err = grid.get(grid.row_count() + extra, 0);
        prop_assert!(err.is_err());
        prop_assert!(err.unwrap_err().is_bounds());
    }

    /// Property: relaxed writes keep the grid rectangular.
    #[test]
    fn prop_relaxed_write_keeps_rectangle(grid in grid(), row in 0usize..8, col in 0usize..8) {
        let mut grid = grid;
        grid.set(row, col, "x").unwrap();

        let width = grid.col_count();
        prop_assert!(grid.row_count() > row);
        prop_assert!(width > col);
        prop_assert!(grid.rows().iter().all(|r| r.len() == width));
        prop_assert_eq!(grid.get(row, col).unwrap(), &Value::from("x"));
    }
}
