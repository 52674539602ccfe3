//! `--parameters` and `--items` files.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

pub fn read_json(path: &Path) -> Result<Value> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// The parameter file must hold a JSON object.
pub fn parameters_from(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(values) => Ok(values),
        _ => bail!("parameters must be a JSON object"),
    }
}

/// An array is taken as the item list; a single object is one item.
pub fn items_from(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        object @ Value::Object(_) => Ok(vec![object]),
        _ => bail!("items must be a JSON array or a single object"),
    }
}

/// One empty item, used when no `--items` file is given.
pub fn default_items() -> Vec<Value> {
    vec![Value::Object(Map::new())]
}
