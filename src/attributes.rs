use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_yaml::Value;

/// Value of a single HTML attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Rendered bare, e.g. `controls`
    Flag,
    /// Rendered as `name="value"`
    Text(String),
}

/// Ordered set of HTML attributes for one component slot.
///
/// Insertion order is kept so rendering is deterministic. Inserting an
/// existing name replaces its value in place.
///
/// From YAML, a sequence lists bare flags and a mapping associates names with
/// `true` (flag), `false` (dropped), strings or numbers:
/// ```yaml
/// component: [controls]
/// component: { controls: true, preload: auto, tabindex: 2 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct HtmlAttributes {
    entries: Vec<(String, AttributeValue)>,
}

impl HtmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare attribute
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.insert(name, AttributeValue::Flag);
        self
    }

    /// Add a `name="value"` attribute
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, AttributeValue::Text(value.into()));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: AttributeValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Render as markup, each attribute preceded by a space
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for (name, value) in &self.entries {
            html.push(' ');
            html.push_str(&escape(name));
            if let AttributeValue::Text(text) = value {
                html.push_str("=\"");
                html.push_str(&escape(text));
                html.push('"');
            }
        }
        html
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HtmlAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(HtmlAttributes::new(), |attributes, (name, value)| {
                attributes.with(name, value)
            })
    }
}

impl TryFrom<Value> for HtmlAttributes {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut attributes = HtmlAttributes::new();
        match value {
            Value::Null => {}
            Value::Sequence(items) => {
                for item in items {
                    match item {
                        Value::String(name) => attributes.insert(name, AttributeValue::Flag),
                        Value::Mapping(mapping) => {
                            for (name, value) in mapping {
                                push_mapped(&mut attributes, name, value)?;
                            }
                        }
                        other => {
                            return Err(format!(
                                "attribute list entries must be names, got {:?}",
                                other
                            ))
                        }
                    }
                }
            }
            Value::Mapping(mapping) => {
                for (name, value) in mapping {
                    push_mapped(&mut attributes, name, value)?;
                }
            }
            other => {
                return Err(format!(
                    "html attributes must be a list or a mapping, got {:?}",
                    other
                ))
            }
        }
        Ok(attributes)
    }
}

fn push_mapped(attributes: &mut HtmlAttributes, name: Value, value: Value) -> Result<(), String> {
    let name = match name {
        Value::String(name) => name,
        other => return Err(format!("attribute names must be strings, got {:?}", other)),
    };
    match value {
        Value::Bool(true) | Value::Null => attributes.insert(name, AttributeValue::Flag),
        Value::Bool(false) => {}
        Value::String(text) => attributes.insert(name, AttributeValue::Text(text)),
        Value::Number(number) => attributes.insert(name, AttributeValue::Text(number.to_string())),
        other => {
            return Err(format!(
                "attribute '{}' must be a boolean, string or number, got {:?}",
                name, other
            ))
        }
    }
    Ok(())
}

impl Serialize for HtmlAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            match value {
                AttributeValue::Flag => map.serialize_entry(name, &true)?,
                AttributeValue::Text(text) => map.serialize_entry(name, text)?,
            }
        }
        map.end()
    }
}

/// Escape text for use in element content or a quoted attribute value
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Join class tokens into the content of a `class` attribute
pub fn class_list(classes: &[String]) -> String {
    escape(&classes.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_flags_and_values_in_order() {
        let attributes = HtmlAttributes::new()
            .flag("controls")
            .with("preload", "auto")
            .with("data-id", "a\"b");
        assert_eq!(
            attributes.to_html(),
            " controls preload=\"auto\" data-id=\"a&quot;b\""
        );
    }

    #[test]
    fn insert_replaces_in_place() {
        let attributes = HtmlAttributes::new()
            .with("a", "1")
            .with("b", "2")
            .with("a", "3");
        assert_eq!(attributes.to_html(), " a=\"3\" b=\"2\"");
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn parses_yaml_sequence_and_mapping() {
        let list: HtmlAttributes = serde_yaml::from_str("[controls, autoplay]").unwrap();
        assert_eq!(list.to_html(), " controls autoplay");

        let map: HtmlAttributes =
            serde_yaml::from_str("{controls: true, muted: false, preload: auto, tabindex: 2}")
                .unwrap();
        assert_eq!(map.to_html(), " controls preload=\"auto\" tabindex=\"2\"");
        assert!(!map.contains("muted"));
    }

    #[test]
    fn parses_mixed_yaml_list() {
        let mixed: HtmlAttributes = serde_yaml::from_str("[controls, {preload: true}]").unwrap();
        assert_eq!(mixed.to_html(), " controls preload");
    }

    #[test]
    fn rejects_nested_values() {
        let result: Result<HtmlAttributes, _> = serde_yaml::from_str("{data: [1, 2]}");
        assert!(result.is_err());
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"), "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;");
    }
}
