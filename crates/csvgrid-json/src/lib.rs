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

//! csvgrid JSON Conversion
//!
//! Exports a [`Grid`](csvgrid_core::Grid) as an array of records keyed by
//! header, and imports arrays of rows or arrays of objects back into a grid.
//!
//! # Examples
//!
//! ```rust
//! use csvgrid_core::{parse, Dialect};
//! use csvgrid_json::{from_json, to_json, ToJsonConfig};
//!
//! let grid = parse("id,name\n1,bolt\n2,nut", &Dialect::default()).unwrap();
//! let json = to_json(&grid, &ToJsonConfig::default()).unwrap();
//! assert_eq!(json, r#"[{"id":"1","name":"bolt"},{"id":"2","name":"nut"}]"#);
//!
//! let back = from_json(&json, Dialect::default()).unwrap();
//! assert_eq!(back.to_text_rows(""), grid.to_text_rows(""));
//! ```

mod error;
mod from_json;
mod to_json;

pub use error::{JsonError, Result};
pub use from_json::{from_json, from_json_value};
pub use to_json::{to_json, to_json_value, to_records, value_to_json, Record, ToJsonConfig};
