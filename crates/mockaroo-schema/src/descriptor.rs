//! Field descriptors and generation hint values.
//!
//! A [`FieldDescriptor`] is the per-field object sent to the generate
//! endpoint: the field name plus a mapping from hint name to hint value.
//! Hint names are camel-cased on the wire, which is the convention the
//! Mockaroo API documents, so the builder normalizes keys at insertion
//! time and serialization stays a plain derive.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a single generation hint.
///
/// A hint value is either a scalar or an ordered list of strings. The
/// list case covers hints whose value is composed of multiple elements,
/// such as an allowed-values pool; element order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HintValue {
    /// Boolean scalar
    Bool(bool),

    /// Integer scalar
    Int(i64),

    /// Floating point scalar
    Float(f64),

    /// String scalar
    String(String),

    /// Ordered list of string values
    List(Vec<String>),
}

impl From<bool> for HintValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for HintValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for HintValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for HintValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for HintValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for HintValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for HintValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Descriptor for one field of a record shape.
///
/// Serializes as a single JSON object containing `name` plus one key per
/// hint, e.g. `{"name":"age","type":"Number","min":18,"max":80}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as it appears in generated records
    pub name: String,

    /// Hint name to hint value, keys already camel-cased
    #[serde(flatten)]
    hints: BTreeMap<String, HintValue>,
}

impl FieldDescriptor {
    /// Create a descriptor for a field with no hints yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hints: BTreeMap::new(),
        }
    }

    /// Attach a hint by name.
    ///
    /// The name is converted to camelCase before it is stored, so
    /// `percent_blank` and `percentBlank` address the same hint.
    pub fn hint(mut self, name: &str, value: impl Into<HintValue>) -> Self {
        self.hints.insert(camel_case(name), value.into());
        self
    }

    /// Set the Mockaroo column type for this field (the `type` hint).
    pub fn data_type(self, data_type: impl Into<String>) -> Self {
        self.hint("type", data_type.into())
    }

    /// Set the minimum generated value (the `min` hint).
    pub fn min(self, min: i64) -> Self {
        self.hint("min", min)
    }

    /// Set the maximum generated value (the `max` hint).
    pub fn max(self, max: i64) -> Self {
        self.hint("max", max)
    }

    /// Restrict generation to an ordered pool of allowed values
    /// (the `values` hint). Order is preserved on the wire.
    pub fn values<I, S>(self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.hint("values", HintValue::List(values))
    }

    /// Set the output format string (the `format` hint).
    pub fn format(self, format: impl Into<String>) -> Self {
        self.hint("format", format.into())
    }

    /// Set a formula evaluated by the service (the `formula` hint).
    pub fn formula(self, formula: impl Into<String>) -> Self {
        self.hint("formula", formula.into())
    }

    /// Set the percentage of generated values left blank
    /// (the `percentBlank` hint).
    pub fn percent_blank(self, percent: u8) -> Self {
        self.hint("percent_blank", i64::from(percent))
    }

    /// Whether any hints are attached to this field.
    pub fn has_hints(&self) -> bool {
        !self.hints.is_empty()
    }

    /// Look up a hint value by name (camelCase or snake_case).
    pub fn hint_value(&self, name: &str) -> Option<&HintValue> {
        self.hints.get(&camel_case(name))
    }

    /// All attached hints, keyed by wire name.
    pub fn hints(&self) -> &BTreeMap<String, HintValue> {
        &self.hints
    }
}

/// Convert a hint name to the camelCase form the API expects.
///
/// Handles `snake_case`, `kebab-case`, and `PascalCase` inputs; an
/// already camel-cased name passes through unchanged.
fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' || ch == '-' {
            upper_next = true;
        } else if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_forms() {
        assert_eq!(camel_case("type"), "type");
        assert_eq!(camel_case("percent_blank"), "percentBlank");
        assert_eq!(camel_case("percentBlank"), "percentBlank");
        assert_eq!(camel_case("PercentBlank"), "percentBlank");
        assert_eq!(camel_case("min-value"), "minValue");
    }

    #[test]
    fn test_descriptor_serializes_as_flat_object() {
        let field = FieldDescriptor::new("age")
            .data_type("Number")
            .min(18)
            .max(80);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "age", "type": "Number", "min": 18, "max": 80})
        );
    }

    #[test]
    fn test_values_hint_preserves_order() {
        let field = FieldDescriptor::new("color").values(["red", "green", "blue"]);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(
            json["values"],
            serde_json::json!(["red", "green", "blue"])
        );
    }

    #[test]
    fn test_percent_blank_key_is_camel_cased() {
        let field = FieldDescriptor::new("nickname")
            .data_type("First Name")
            .percent_blank(20);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["percentBlank"], serde_json::json!(20));
        assert!(json.get("percent_blank").is_none());
    }

    #[test]
    fn test_descriptor_round_trip() {
        let field = FieldDescriptor::new("color")
            .data_type("Custom List")
            .values(["red", "green", "blue"]);

        let json = serde_json::to_string(&field).unwrap();
        let back: FieldDescriptor = serde_json::from_str(&json).unwrap();

        assert_eq!(back.name, "color");
        assert_eq!(
            back.hint_value("type"),
            Some(&HintValue::String("Custom List".to_string()))
        );
        assert_eq!(
            back.hint_value("values"),
            Some(&HintValue::List(vec![
                "red".to_string(),
                "green".to_string(),
                "blue".to_string(),
            ]))
        );
        assert_eq!(back, field);
    }

    #[test]
    fn test_hint_value_scalars_serialize_untagged() {
        assert_eq!(
            serde_json::to_value(HintValue::Bool(true)).unwrap(),
            serde_json::json!(true)
        );
        assert_eq!(
            serde_json::to_value(HintValue::Int(42)).unwrap(),
            serde_json::json!(42)
        );
        assert_eq!(
            serde_json::to_value(HintValue::String("x".to_string())).unwrap(),
            serde_json::json!("x")
        );
    }

    #[test]
    fn test_descriptor_without_hints_has_none() {
        let field = FieldDescriptor::new("internal_id");
        assert!(!field.has_hints());
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            serde_json::json!({"name": "internal_id"})
        );
    }
}
