//! Per-item parameter resolution.
//!
//! The host resolves expressions and hands each item's parameter values over
//! through [`ParameterSource`]. [`Parameters`] then answers typed lookups,
//! falling back to schema defaults for anything the host did not supply.

use serde_json::{Map, Number, Value};
use workflow::{ItemIndex, NodeError};

use crate::schema::NodeDescription;

/// Supplies the resolved parameter values for one item.
pub trait ParameterSource: Send + Sync {
    /// Values for the item at `index`. Fields left out fall back to defaults.
    fn parameters(&self, index: ItemIndex, item: &Value) -> Result<Map<String, Value>, NodeError>;
}

/// The same values for every item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticParameters(pub Map<String, Value>);

impl ParameterSource for StaticParameters {
    fn parameters(&self, _index: ItemIndex, _item: &Value) -> Result<Map<String, Value>, NodeError> {
        Ok(self.0.clone())
    }
}

/// Typed view over one item's parameter values.
#[derive(Debug, Clone)]
pub struct Parameters<'a> {
    description: &'a NodeDescription,
    values: Map<String, Value>,
}

impl<'a> Parameters<'a> {
    pub fn new(description: &'a NodeDescription, values: Map<String, Value>) -> Self {
        Self {
            description,
            values,
        }
    }

    /// The explicit value, or the applicable schema default. Names the node
    /// does not declare resolve to nothing, whatever the source supplied.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        if !self.description.declares(name) {
            return None;
        }
        self.description.resolve(name, &self.values)
    }

    /// The selected operation tag.
    pub fn operation(&self) -> Result<String, NodeError> {
        self.string("operation")
    }

    /// A string parameter; may be empty.
    pub fn string(&self, name: &str) -> Result<String, NodeError> {
        match self.raw(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(invalid(name, "a string")),
            None => Err(missing(name)),
        }
    }

    /// A string parameter that must not be blank.
    pub fn required_string(&self, name: &str) -> Result<String, NodeError> {
        let value = self.string(name)?;
        if value.trim().is_empty() {
            Err(missing(name))
        } else {
            Ok(value)
        }
    }

    /// A string parameter where empty and absent both mean "not provided".
    pub fn optional_string(&self, name: &str) -> Result<Option<String>, NodeError> {
        match self.raw(name) {
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(invalid(name, "a string")),
            None => Ok(None),
        }
    }

    /// A numeric parameter. The JSON number is kept as given so integers stay
    /// integers in request bodies.
    pub fn number(&self, name: &str) -> Result<Number, NodeError> {
        match self.raw(name) {
            Some(Value::Number(n)) => Ok(n.clone()),
            Some(_) => Err(invalid(name, "a number")),
            None => Err(missing(name)),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<bool, NodeError> {
        self.optional_boolean(name)?.ok_or_else(|| missing(name))
    }

    /// A boolean parameter; `None` when the node neither declares nor receives it.
    pub fn optional_boolean(&self, name: &str) -> Result<Option<bool>, NodeError> {
        match self.raw(name) {
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(invalid(name, "a boolean")),
            None => Ok(None),
        }
    }

    /// A list of strings. A single string is accepted as a one-element list;
    /// absent means empty.
    pub fn string_list(&self, name: &str) -> Result<Vec<String>, NodeError> {
        match self.raw(name) {
            Some(Value::Array(values)) => values
                .iter()
                .map(|v| {
                    v.as_str()
                        .map(str::to_owned)
                        .ok_or_else(|| invalid(name, "a list of strings"))
                })
                .collect(),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(Vec::new()),
            Some(Value::String(s)) => Ok(vec![s.clone()]),
            Some(_) => Err(invalid(name, "a list of strings")),
            None => Ok(Vec::new()),
        }
    }
}

fn missing(name: &str) -> NodeError {
    NodeError::MissingParameter {
        name: name.to_owned(),
    }
}

fn invalid(name: &str, expected: &'static str) -> NodeError {
    NodeError::InvalidParameter {
        name: name.to_owned(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use workflow::BaseUrl;

    use super::*;
    use crate::schema::{FieldSpec, OptionSpec};

    fn description() -> NodeDescription {
        NodeDescription {
            name: "test",
            display_name: "Test",
            description: "test node",
            base_url: BaseUrl::Credential,
            fields: vec![
                FieldSpec::options(
                    "resource",
                    "Resource",
                    vec![OptionSpec::new("Post", "post"), OptionSpec::new("Comment", "comment")],
                    "post",
                ),
                FieldSpec::options("operation", "Operation", vec![OptionSpec::new("Boost", "boost")], "boost")
                    .show_when("resource", &["post"]),
                FieldSpec::options(
                    "operation",
                    "Operation",
                    vec![OptionSpec::new("Auto Comment", "autoComment")],
                    "autoComment",
                )
                .show_when("resource", &["comment"]),
                FieldSpec::number("boostDuration", "Boost Duration", 24).for_operations(&["boost"]),
                FieldSpec::boolean("includeReposts", "Include Reposts", true),
                FieldSpec::string("accountId", "Account ID"),
                FieldSpec::string_list("authorJobTitles", "Author Job Titles"),
            ],
        }
    }

    fn values(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn defaults_follow_visible_field() {
        let d = description();
        let post = Parameters::new(&d, Map::new());
        assert_eq!(post.operation().unwrap(), "boost");

        let comment = Parameters::new(&d, values(json!({"resource": "comment"})));
        assert_eq!(comment.operation().unwrap(), "autoComment");
    }

    #[test]
    fn numbers_keep_their_integer_form() {
        let d = description();
        let p = Parameters::new(&d, Map::new());
        assert_eq!(Value::Number(p.number("boostDuration").unwrap()), json!(24));
    }

    #[test]
    fn blank_optional_string_is_none() {
        let d = description();
        let p = Parameters::new(&d, Map::new());
        assert_eq!(p.optional_string("accountId").unwrap(), None);
        let p = Parameters::new(&d, values(json!({"accountId": "acc"})));
        assert_eq!(p.optional_string("accountId").unwrap().as_deref(), Some("acc"));
    }

    #[test]
    fn undeclared_boolean_is_none_declared_uses_default() {
        let d = description();
        let p = Parameters::new(&d, values(json!({"tagPostAuthor": true})));
        assert_eq!(p.optional_boolean("tagPostAuthor").unwrap(), None);
        assert!(p.boolean("includeReposts").unwrap());
    }

    #[test]
    fn wrong_types_are_rejected() {
        let d = description();
        let p = Parameters::new(&d, values(json!({"boostDuration": "24", "accountId": 7})));
        assert!(matches!(p.number("boostDuration"), Err(NodeError::InvalidParameter { .. })));
        assert!(matches!(p.optional_string("accountId"), Err(NodeError::InvalidParameter { .. })));
    }

    #[test]
    fn required_string_rejects_blank_and_missing() {
        let d = description();
        let p = Parameters::new(&d, values(json!({"postUrl": "   "})));
        assert_eq!(
            p.required_string("postUrl"),
            Err(NodeError::MissingParameter { name: "postUrl".into() })
        );
        assert_eq!(
            p.required_string("keywords"),
            Err(NodeError::MissingParameter { name: "keywords".into() })
        );
    }

    #[test]
    fn string_list_accepts_single_string() {
        let d = description();
        let p = Parameters::new(&d, values(json!({"authorJobTitles": "CEO"})));
        assert_eq!(p.string_list("authorJobTitles").unwrap(), vec!["CEO"]);
        let p = Parameters::new(&d, Map::new());
        assert!(p.string_list("authorJobTitles").unwrap().is_empty());
    }
}
