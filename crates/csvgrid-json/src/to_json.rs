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

//! Grid to JSON conversion.

use csvgrid_core::{Grid, Value};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value as JsonValue};
use tracing::debug;

use crate::error::{JsonError, Result};

/// One data row keyed by header.
pub type Record = Map<String, JsonValue>;

/// Configuration for JSON output.
///
/// # Examples
///
/// ```
/// use csvgrid_core::{Grid, Value};
/// use csvgrid_json::{to_json, ToJsonConfig};
///
/// let grid = Grid::from_rows(vec![vec!["id", "name"], vec!["1", "bolt"]]);
/// let config = ToJsonConfig {
///     root_name: Some("parts".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(to_json(&grid, &config).unwrap(), r#"{"parts":[{"id":"1","name":"bolt"}]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToJsonConfig {
    /// Explicit header keys. When `None` the first grid row supplies them.
    pub headers: Option<Vec<Value>>,
    /// Wrap the record array in an object under this key.
    pub root_name: Option<String>,
    /// Pretty-print the output.
    pub pretty: bool,
}

/// Converts grid rows into records keyed by header.
///
/// With `headers` absent the first row supplies the keys (a blank key
/// becomes `""`) and is not emitted as data. With explicit headers every
/// row is data. Headers beyond a row's width map to `null`. Duplicate keys
/// keep the last cell.
///
/// # Errors
///
/// - [`GridError::TypeMismatch`](csvgrid_core::GridError::TypeMismatch),
///   wrapped in [`JsonError::Grid`], if an explicit header is blank.
/// - [`JsonError::MissingHeader`] if a row has more cells than headers.
pub fn to_records(grid: &Grid, headers: Option<&[Value]>) -> Result<Vec<Record>> {
    let (keys, data) = match headers {
        Some(headers) => (explicit_keys(headers)?, grid.rows()),
        None => match grid.rows().split_first() {
            Some((first, rest)) => (header_row_keys(first), rest),
            None => return Ok(Vec::new()),
        },
    };
    let offset = grid.row_count() - data.len();

    let mut records = Vec::with_capacity(data.len());
    for (i, row) in data.iter().enumerate() {
        if row.len() > keys.len() {
            return Err(JsonError::MissingHeader {
                row: offset + i,
                width: row.len(),
                headers: keys.len(),
            });
        }

        let mut record = Map::with_capacity(keys.len());
        for (c, key) in keys.iter().enumerate() {
            let value = row.get(c).map_or(JsonValue::Null, value_to_json);
            record.insert(key.clone(), value);
        }
        records.push(record);
    }

    Ok(records)
}

/// Converts a grid into a JSON array of records, optionally under a root key.
///
/// # Errors
///
/// Same as [`to_records`].
pub fn to_json_value(grid: &Grid, config: &ToJsonConfig) -> Result<JsonValue> {
    let records = to_records(grid, config.headers.as_deref())?;
    debug!(records = records.len(), "converted grid to JSON");

    let array = JsonValue::Array(records.into_iter().map(JsonValue::Object).collect());
    Ok(match &config.root_name {
        Some(name) => {
            let mut root = Map::with_capacity(1);
            root.insert(name.clone(), array);
            JsonValue::Object(root)
        }
        None => array,
    })
}

/// Converts a grid into a JSON string.
///
/// # Errors
///
/// Same as [`to_records`], plus [`JsonError::Json`] if serialization fails.
pub fn to_json(grid: &Grid, config: &ToJsonConfig) -> Result<String> {
    let value = to_json_value(grid, config)?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Maps one cell to JSON. Non-finite floats become `null`.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Blank => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(n) => JsonValue::Number((*n).into()),
        Value::Float(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
        Value::Text(s) => JsonValue::String(s.clone()),
    }
}

fn explicit_keys(headers: &[Value]) -> Result<Vec<String>> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| match header {
            Value::Blank => Err(JsonError::type_mismatch(
                format!("header {}", i),
                "text, int, float or bool",
                header.type_name(),
            )),
            other => Ok(other.to_text("").into_owned()),
        })
        .collect()
}

fn header_row_keys(row: &[Value]) -> Vec<String> {
    row.iter().map(|cell| cell.to_text("").into_owned()).collect()
}
