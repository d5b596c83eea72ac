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

//! JSON to grid conversion.
//!
//! Two shapes are accepted:
//!
//! - An array of arrays of scalars, one inner array per row.
//! - An array of objects. The keys, in first-seen order, become a header
//!   row and each object becomes a data row; missing keys are blank.
//!
//! The whole document is validated before a grid is built.

use csvgrid_core::{Dialect, Grid, Value};
use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::error::{JsonError, Result};

/// Parses JSON text into a grid using `dialect`.
///
/// # Examples
///
/// ```
/// use csvgrid_core::{serialize, Dialect};
/// use csvgrid_json::from_json;
///
/// let grid = from_json(r#"[{"id": 1, "name": "bolt"}, {"id": 2}]"#, Dialect::default()).unwrap();
/// assert_eq!(serialize(&grid, ""), "id,name\n1,bolt\n2,");
/// ```
///
/// # Errors
///
/// [`JsonError::Json`] on invalid JSON, otherwise as [`from_json_value`].
pub fn from_json(json: &str, dialect: Dialect) -> Result<Grid> {
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value(&value, dialect)
}

/// Builds a grid from a parsed JSON value.
///
/// # Errors
///
/// [`GridError::TypeMismatch`](csvgrid_core::GridError::TypeMismatch),
/// wrapped in [`JsonError::Grid`], if the root is not an array, if rows mix
/// arrays and objects or are neither, or if a cell is an array or object.
pub fn from_json_value(value: &JsonValue, dialect: Dialect) -> Result<Grid> {
    let items = match value {
        JsonValue::Array(items) => items,
        other => return Err(JsonError::type_mismatch("root", "array", json_kind(other))),
    };

    let rows = match items.first() {
        None => Vec::new(),
        Some(JsonValue::Object(_)) => object_rows(items)?,
        Some(_) => array_rows(items)?,
    };

    debug!(rows = rows.len(), "built grid from JSON");
    Ok(Grid::from_rows(rows).with_dialect(dialect))
}

fn array_rows(items: &[JsonValue]) -> Result<Vec<Vec<Value>>> {
    items
        .iter()
        .enumerate()
        .map(|(r, item)| match item {
            JsonValue::Array(cells) => cells
                .iter()
                .enumerate()
                .map(|(c, cell)| json_to_value(cell, r, c))
                .collect(),
            other => Err(JsonError::type_mismatch(
                format!("row {}", r),
                "array",
                json_kind(other),
            )),
        })
        .collect()
}

fn object_rows(items: &[JsonValue]) -> Result<Vec<Vec<Value>>> {
    let objects = items
        .iter()
        .enumerate()
        .map(|(r, item)| match item {
            JsonValue::Object(map) => Ok(map),
            other => Err(JsonError::type_mismatch(
                format!("row {}", r),
                "object",
                json_kind(other),
            )),
        })
        .collect::<Result<Vec<&Map<String, JsonValue>>>>()?;

    let mut keys: Vec<&str> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }

    let mut rows = Vec::with_capacity(objects.len() + 1);
    rows.push(keys.iter().map(|key| Value::from(*key)).collect());
    for (r, object) in objects.iter().enumerate() {
        let row = keys
            .iter()
            .enumerate()
            .map(|(c, key)| match object.get(*key) {
                Some(cell) => json_to_value(cell, r, c),
                None => Ok(Value::Blank),
            })
            .collect::<Result<Vec<Value>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

/// Maps one JSON scalar to a cell. Integers that fit `i64` become
/// [`Value::Int`], other numbers [`Value::Float`].
fn json_to_value(cell: &JsonValue, row: usize, col: usize) -> Result<Value> {
    match cell {
        JsonValue::Null => Ok(Value::Blank),
        JsonValue::Bool(b) => Ok(Value::Bool(*b)),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Int(i)),
            None => Ok(n.as_f64().map_or(Value::Blank, Value::Float)),
        },
        JsonValue::String(s) => Ok(Value::Text(s.clone())),
        other => Err(JsonError::type_mismatch(
            format!("row {}, column {}", row, col),
            "scalar",
            json_kind(other),
        )),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
