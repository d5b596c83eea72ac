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


#![no_main]

use csvgrid_core::{parse, serialize, Dialect};
use libfuzzer_sys::fuzz_target;

/// Fuzz target for the tokenizer and parser.
///
/// Any UTF-8 input must parse without error into a rectangular grid, and
/// serializing that grid and parsing it again must reproduce it.
///
/// # Running the Fuzzer
///
/// ```bash
/// # From the csvgrid-core directory
/// cargo fuzz run fuzz_parse
///
/// # With options
/// cargo fuzz run fuzz_parse -- -max_len=4096 -max_total_time=300
/// ```
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for dialect in [Dialect::default(), Dialect::from_chars(';', '|', '\'')] {
        let grid = match parse(text, &dialect) {
            Ok(grid) => grid,
            Err(e) => panic!("parse failed on scanner output: {}", e),
        };

        let width = grid.col_count();
        assert!(grid.rows().iter().all(|row| row.len() == width));

        let reparsed = parse(&serialize(&grid, ""), &dialect).expect("reparse failed");
        assert_eq!(reparsed.to_text_rows(""), grid.to_text_rows(""));
    }
});
