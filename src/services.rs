//! Request-scoped collaborators consumed by the components.
//!
//! The host application plugs its own translation catalogue, flashed input
//! and validation messages in through these traits. In-memory implementations
//! are provided for standalone use and tests.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::error::{ComponentError, ComponentResult};

const ENGLISH: &str = include_str!("../lang/en.yaml");

/// Localized text lookup
pub trait Translator {
    /// Translated text for `key`, or the key itself when unknown
    fn translate(&self, key: &str) -> String;
}

/// Previously submitted values kept across a failed-validation redirect
pub trait OldInput {
    fn old(&self, field: &str) -> Option<String>;
}

/// Validation messages of the current request
pub trait ErrorBag {
    fn has(&self, field: &str) -> bool;
    fn first(&self, field: &str) -> Option<&str>;
}

/// Echoes translation keys back
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Flat key → text catalogue
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundled English labels
    pub fn english() -> Self {
        Self::from_yaml_or_empty(ENGLISH)
    }

    fn from_yaml_or_empty(yaml: &str) -> Self {
        match Self::from_yaml_str(yaml) {
            Ok(dictionary) => dictionary,
            Err(err) => {
                warn!(error = %err, "bundled labels are unreadable, starting empty");
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(yaml: &str) -> ComponentResult<Self> {
        let entries: Option<HashMap<String, String>> = serde_yaml::from_str(yaml)?;
        Ok(Self {
            entries: entries.unwrap_or_default(),
        })
    }

    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Dictionary {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

/// No flashed input
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOldInput;

impl OldInput for NoOldInput {
    fn old(&self, _field: &str) -> Option<String> {
        None
    }
}

/// In-memory flashed input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashedInput {
    values: HashMap<String, String>,
}

impl FlashedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flash(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlashedInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}

impl OldInput for FlashedInput {
    fn old(&self, field: &str) -> Option<String> {
        self.values.get(field).cloned()
    }
}

/// Validation messages grouped by field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageBag {
    messages: BTreeMap<String, Vec<String>>,
}

impl MessageBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.messages
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl ErrorBag for MessageBag {
    fn has(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }
}

/// Attributes of the record a form is bound to
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    attributes: Map<String, Value>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any record serializing to an object
    pub fn from_serialize<T: Serialize>(record: &T) -> ComponentResult<Self> {
        match serde_json::to_value(record)? {
            Value::Object(attributes) => Ok(Self { attributes }),
            other => Err(ComponentError::Serialization(format!(
                "a model must serialize to an object, got {}",
                other
            ))),
        }
    }

    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(attribute.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name).filter(|value| !value.is_null())
    }
}

impl From<Map<String, Value>> for Model {
    fn from(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }
}

/// Text form of a scalar, as it would appear in a `value` attribute
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

/// Truthiness of a submitted or stored checkbox value
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => is_truthy_text(text),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

pub(crate) fn is_truthy_text(text: &str) -> bool {
    matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "1" | "on" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
    }

    #[test]
    fn english_dictionary_has_button_labels() {
        let dictionary = Dictionary::english();
        assert_eq!(dictionary.translate("bootstrap-components.label.validate"), "Validate");
        assert_eq!(dictionary.translate("unknown.key"), "unknown.key");
    }

    #[test]
    fn unreadable_labels_fall_back_to_empty() {
        let dictionary = Dictionary::from_yaml_or_empty("label: [unclosed");
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.translate("label"), "label");
        assert!(!Dictionary::english().is_empty());
    }

    #[test]
    fn message_bag_first_message() {
        let bag = MessageBag::new()
            .add("name", "first")
            .add("name", "second");
        assert!(bag.has("name"));
        assert!(!bag.has("email"));
        assert_eq!(bag.first("name"), Some("first"));
        assert_eq!(bag.first("email"), None);
    }

    #[test]
    fn model_from_struct() {
        let user = User {
            id: 3,
            name: "Ada".to_string(),
        };
        let model = Model::from_serialize(&user).unwrap();
        assert_eq!(model.attribute("id"), Some(&json!(3)));
        assert_eq!(model.attribute("name"), Some(&json!("Ada")));
        assert_eq!(model.attribute("email"), None);
    }

    #[test]
    fn model_rejects_scalars() {
        assert!(Model::from_serialize(&42).is_err());
    }

    #[test]
    fn scalar_text_forms() {
        assert_eq!(scalar_text(&json!("a")), Some("a".to_string()));
        assert_eq!(scalar_text(&json!(2)), Some("2".to_string()));
        assert_eq!(scalar_text(&json!(true)), Some("1".to_string()));
        assert_eq!(scalar_text(&Value::Null), None);
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy(&json!("on")));
        assert!(is_truthy(&json!(1)));
        assert!(!is_truthy(&json!("0")));
        assert!(!is_truthy(&json!(false)));
    }
}
