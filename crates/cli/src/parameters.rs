//! Parameter resolution for the command line.

use nodes::ParameterSource;
use serde_json::{Map, Value};
use workflow::{ItemIndex, NodeError};

/// Parameters from the `--parameters` file, with each item's own object
/// fields layered on top.
#[derive(Debug, Clone, Default)]
pub struct ItemOverlay {
    base: Map<String, Value>,
}

impl ItemOverlay {
    pub fn new(base: Map<String, Value>) -> Self {
        Self { base }
    }
}

impl ParameterSource for ItemOverlay {
    fn parameters(&self, _index: ItemIndex, item: &Value) -> Result<Map<String, Value>, NodeError> {
        let mut values = self.base.clone();
        if let Value::Object(fields) = item {
            values.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Ok(values)
    }
}
