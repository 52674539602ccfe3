//! Declarative parameter schema.
//!
//! A [`NodeDescription`] lists the fields a node shows to the user. Each
//! [`FieldSpec`] carries a default and a set of [`DisplayCondition`]s: the
//! field is visible only while every condition holds for the values chosen so
//! far (typically "show when `operation` is one of ..."). Two fields may share
//! a name as long as their conditions never hold together; the per-resource
//! `operation` selectors of the ConnectSafely node rely on this.
//!
//! Schemas serialise to JSON so the CLI can print them.

use serde::Serialize;
use serde_json::{Map, Value};
use workflow::BaseUrl;

// ---------------------------------------------------------------------------
// Field kinds and options
// ---------------------------------------------------------------------------

/// Input control a field is rendered with; also fixes the JSON type of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Single-line string.
    String,
    /// Multi-line string.
    Text,
    /// JSON number.
    Number,
    /// JSON boolean.
    Boolean,
    /// One value from [`FieldSpec::options`].
    Options,
    /// Any subset of [`FieldSpec::options`], as a JSON array.
    MultiOptions,
    /// Free-form list of strings, as a JSON array.
    StringList,
}

/// One selectable value of an options field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionSpec {
    /// Label shown to the user.
    pub name: &'static str,
    /// Value sent to the node.
    pub value: &'static str,
    /// Longer explanation, shown for operation selectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl OptionSpec {
    /// An option without description.
    pub const fn new(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value,
            description: None,
        }
    }

    /// An option with description (operation selectors).
    pub const fn described(name: &'static str, value: &'static str, description: &'static str) -> Self {
        Self {
            name,
            value,
            description: Some(description),
        }
    }
}

/// "Show this field when `field` has one of `values`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCondition {
    /// Name of the controlling field.
    pub field: &'static str,
    /// Values of the controlling field for which the condition holds.
    pub values: Vec<&'static str>,
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// One user-facing parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Parameter name as read by the node.
    pub name: &'static str,
    /// Label shown to the user.
    pub display_name: &'static str,
    pub kind: FieldKind,
    /// Value used when the parameter set does not supply one.
    pub default: Value,
    /// Blank values are rejected before any request is made.
    pub required: bool,
    /// Help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    /// Choices for options and multi-options fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSpec>,
    /// All must hold for the field to be visible.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub show_when: Vec<DisplayCondition>,
}

impl FieldSpec {
    fn base(name: &'static str, display_name: &'static str, kind: FieldKind, default: Value) -> Self {
        Self {
            name,
            display_name,
            kind,
            default,
            required: false,
            description: None,
            placeholder: None,
            options: Vec::new(),
            show_when: Vec::new(),
        }
    }

    /// Single-line string, default `""`.
    pub fn string(name: &'static str, display_name: &'static str) -> Self {
        Self::base(name, display_name, FieldKind::String, Value::from(""))
    }

    /// Multi-line string, default `""`.
    pub fn text(name: &'static str, display_name: &'static str) -> Self {
        Self::base(name, display_name, FieldKind::Text, Value::from(""))
    }

    /// Integer-defaulted number.
    pub fn number(name: &'static str, display_name: &'static str, default: i64) -> Self {
        Self::base(name, display_name, FieldKind::Number, Value::from(default))
    }

    /// Toggle with the given default.
    pub fn boolean(name: &'static str, display_name: &'static str, default: bool) -> Self {
        Self::base(name, display_name, FieldKind::Boolean, Value::from(default))
    }

    /// Single choice among `options`; `default` must be one of their values.
    pub fn options(
        name: &'static str,
        display_name: &'static str,
        options: Vec<OptionSpec>,
        default: &'static str,
    ) -> Self {
        let mut field = Self::base(name, display_name, FieldKind::Options, Value::from(default));
        field.options = options;
        field
    }

    /// Any subset of `options`, defaulting to `default`.
    pub fn multi_options(
        name: &'static str,
        display_name: &'static str,
        options: Vec<OptionSpec>,
        default: &[&'static str],
    ) -> Self {
        let mut field = Self::base(
            name,
            display_name,
            FieldKind::MultiOptions,
            Value::from(default.to_vec()),
        );
        field.options = options;
        field
    }

    /// Free-form list of strings, default empty.
    pub fn string_list(name: &'static str, display_name: &'static str) -> Self {
        Self::base(name, display_name, FieldKind::StringList, Value::Array(Vec::new()))
    }

    /// Rejects blank values before any request is built.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the help text.
    #[must_use]
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the input placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Adds a display condition on `field`.
    #[must_use]
    pub fn show_when(mut self, field: &'static str, values: &[&'static str]) -> Self {
        self.show_when.push(DisplayCondition {
            field,
            values: values.to_vec(),
        });
        self
    }

    /// Shorthand for `show_when("operation", operations)`.
    #[must_use]
    pub fn for_operations(self, operations: &[&'static str]) -> Self {
        self.show_when("operation", operations)
    }
}

// ---------------------------------------------------------------------------
// Node description
// ---------------------------------------------------------------------------

/// Everything the host needs to render and run a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    /// Registry name, e.g. `"linkedInPosts"`.
    pub name: &'static str,
    /// Label, e.g. `"LinkedIn Posts"`. Also prefixes API error messages.
    pub display_name: &'static str,
    pub description: &'static str,
    /// Where requests are sent.
    pub base_url: BaseUrl,
    pub fields: Vec<FieldSpec>,
}

impl NodeDescription {
    /// Returns `true` if any field is named `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Fields visible for the given explicit values (defaults fill the gaps).
    pub fn visible_fields(&self, values: &Map<String, Value>) -> Vec<&FieldSpec> {
        self.fields
            .iter()
            .filter(|field| self.is_visible(field, values, 0))
            .collect()
    }

    /// Resolves `name` to its explicit value, or to the default of the first
    /// visible field carrying that name, or to the first declared one.
    pub fn resolve<'a>(&'a self, name: &str, values: &'a Map<String, Value>) -> Option<&'a Value> {
        self.resolve_at_depth(name, values, 0)
    }

    // Depth guards against a schema whose conditions refer to each other.
    fn resolve_at_depth<'a>(
        &'a self,
        name: &str,
        values: &'a Map<String, Value>,
        depth: usize,
    ) -> Option<&'a Value> {
        if let Some(value) = values.get(name).filter(|v| !v.is_null()) {
            return Some(value);
        }
        let declared: Vec<&FieldSpec> = self.fields.iter().filter(|f| f.name == name).collect();
        let field: &'a FieldSpec = declared
            .iter()
            .copied()
            .find(|f| self.is_visible(f, values, depth))
            .or_else(|| declared.first().copied())?;
        Some(&field.default)
    }

    fn is_visible(&self, field: &FieldSpec, values: &Map<String, Value>, depth: usize) -> bool {
        const MAX_DEPTH: usize = 8;
        if depth > MAX_DEPTH {
            return false;
        }
        field.show_when.iter().all(|condition| {
            match self.resolve_at_depth(condition.field, values, depth + 1) {
                Some(Value::String(current)) => condition.values.iter().any(|v| v == current),
                Some(Value::Bool(current)) => {
                    condition.values.iter().any(|v| *v == current.to_string())
                }
                _ => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn description() -> NodeDescription {
        NodeDescription {
            name: "test",
            display_name: "Test",
            description: "",
            base_url: BaseUrl::Credential,
            fields: vec![
                FieldSpec::options(
                    "mode",
                    "Mode",
                    vec![OptionSpec::new("Fast", "fast"), OptionSpec::new("Slow", "slow")],
                    "fast",
                ),
                FieldSpec::number("limit", "Limit", 10).show_when("mode", &["fast"]),
                FieldSpec::number("limit", "Limit", 2).show_when("mode", &["slow"]),
                FieldSpec::boolean("detailed", "Detailed", false),
                FieldSpec::string("detail", "Detail").show_when("detailed", &["true"]),
            ],
        }
    }

    fn values(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn default_follows_visible_variant() {
        let d = description();
        assert_eq!(d.resolve("limit", &Map::new()), Some(&json!(10)));
        assert_eq!(d.resolve("limit", &values(json!({"mode": "slow"}))), Some(&json!(2)));
        assert_eq!(d.resolve("limit", &values(json!({"limit": 7}))), Some(&json!(7)));
    }

    #[test]
    fn boolean_conditions_match_literal_true() {
        let d = description();
        let names = |v: Value| -> Vec<&'static str> {
            d.visible_fields(&values(v)).iter().map(|f| f.name).collect()
        };
        assert_eq!(names(json!({})), vec!["mode", "limit", "detailed"]);
        assert_eq!(names(json!({"detailed": true})), vec!["mode", "limit", "detailed", "detail"]);
    }

    #[test]
    fn undeclared_names_resolve_to_nothing_without_a_value() {
        assert_eq!(description().resolve("other", &Map::new()), None);
        assert!(!description().declares("other"));
    }

    #[test]
    fn serialises_without_empty_collections() {
        let field = serde_json::to_value(FieldSpec::string("q", "Query").required()).unwrap();
        assert_eq!(
            field,
            json!({"name": "q", "displayName": "Query", "kind": "string", "default": "", "required": true})
        );
    }
}
