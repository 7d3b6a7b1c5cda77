use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::attributes::HtmlAttributes;
use crate::error::{ComponentError, ComponentResult};

/// Defaults shipped with the crate
pub const BUNDLED_CONFIG: &str = include_str!("../config/bootstrap-components.yaml");

/// Component family, the first segment of a configuration path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Form,
    Button,
    Media,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Form, Family::Button, Family::Media];

    pub fn key(&self) -> &'static str {
        match self {
            Family::Form => "form",
            Family::Button => "button",
            Family::Media => "media",
        }
    }

    /// Dotted configuration path of a component type in this family
    pub fn path(&self, component_type: &str) -> String {
        format!("{}.{}", self.key(), component_type)
    }
}

/// Per-slot values. `link` is only used by images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slots<T> {
    pub container: T,
    pub component: T,
    pub link: T,
}

/// Static configuration of one component type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    /// Template identifier handed to the renderer
    pub view: String,
    /// Raw icon markup
    pub icon: Option<String>,
    pub legend: Option<String>,
    /// Translation key of the label (buttons)
    pub label: Option<String>,
    /// Default poster (videos)
    pub poster: Option<String>,
    pub class: Slots<Vec<String>>,
    pub html_attributes: Slots<HtmlAttributes>,
}

/// Configuration tree keyed by dotted paths (`form.password.icon`).
///
/// Starts from the bundled defaults; applications merge their own file over it
/// or override single keys at runtime with [`ConfigStore::set`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigStore {
    root: Value,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::bundled()
    }
}

impl ConfigStore {
    /// The bundled defaults
    pub fn bundled() -> Self {
        match Self::from_yaml_str(BUNDLED_CONFIG) {
            Ok(store) => store,
            Err(err) => {
                warn!(error = %err, "bundled component configuration is unreadable, starting empty");
                Self::empty()
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            root: Value::Mapping(Mapping::new()),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> ComponentResult<Self> {
        let root: Value = serde_yaml::from_str(yaml)?;
        ensure_mapping(&root)?;
        Ok(Self { root })
    }

    pub fn from_path(path: impl AsRef<Path>) -> ComponentResult<Self> {
        Self::from_yaml_str(&read(path.as_ref())?)
    }

    /// Deep-merge a YAML document over the current tree. Mappings merge key by
    /// key; any other value (lists included) replaces what it lands on.
    pub fn merge_yaml_str(&mut self, yaml: &str) -> ComponentResult<()> {
        let overlay: Value = serde_yaml::from_str(yaml)?;
        if overlay.is_null() {
            return Ok(());
        }
        ensure_mapping(&overlay)?;
        deep_merge(&mut self.root, overlay);
        Ok(())
    }

    pub fn merge_path(&mut self, path: impl AsRef<Path>) -> ComponentResult<()> {
        let yaml = read(path.as_ref())?;
        self.merge_yaml_str(&yaml)
    }

    /// Look up a dotted path
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }

    /// Set a dotted path, creating intermediate mappings as needed
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut node = &mut self.root;
        for segment in parents {
            if !node.is_mapping() {
                *node = Value::Mapping(Mapping::new());
            }
            let Some(map) = node.as_mapping_mut() else {
                return;
            };
            node = map.entry(Value::from(*segment)).or_insert(Value::Null);
        }

        if !node.is_mapping() {
            *node = Value::Mapping(Mapping::new());
        }
        if let Some(map) = node.as_mapping_mut() {
            map.insert(Value::from(*last), value.into());
        }
    }

    /// Typed configuration of the component at `path` (`family.type`)
    pub fn component(&self, path: &str) -> ComponentResult<ComponentConfig> {
        let value = self
            .get(path)
            .filter(|value| !value.is_null())
            .ok_or_else(|| ComponentError::UnknownComponent {
                path: path.to_string(),
            })?;

        let config: ComponentConfig =
            serde_yaml::from_value(value.clone()).map_err(|err| ComponentError::InvalidConfig {
                path: path.to_string(),
                reason: err.to_string(),
            })?;

        if config.view.trim().is_empty() {
            return Err(ComponentError::InvalidConfig {
                path: path.to_string(),
                reason: "missing 'view'".to_string(),
            });
        }

        debug!(path, view = %config.view, "loaded component configuration");
        Ok(config)
    }

    /// Every `family.type` path present in the tree, in document order
    pub fn component_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        for family in Family::ALL {
            if let Some(Value::Mapping(types)) = self.root.get(family.key()) {
                for key in types.keys() {
                    if let Value::String(component_type) = key {
                        paths.push(family.path(component_type));
                    }
                }
            }
        }
        paths
    }
}

fn read(path: &Path) -> ComponentResult<String> {
    fs::read_to_string(path).map_err(|err| ComponentError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}

fn ensure_mapping(value: &Value) -> ComponentResult<()> {
    if value.is_mapping() {
        Ok(())
    } else {
        Err(ComponentError::InvalidConfig {
            path: "<root>".to_string(),
            reason: "the configuration document must be a mapping".to_string(),
        })
    }
}

fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_config_has_every_component() {
        let store = ConfigStore::bundled();
        let paths = store.component_paths();
        for path in [
            "form.text",
            "form.tel",
            "form.email",
            "form.password",
            "form.file",
            "form.textarea",
            "form.select",
            "form.checkbox",
            "form.toggle",
            "button.validate",
            "button.create",
            "button.update",
            "button.back",
            "button.cancel",
            "media.audio",
            "media.video",
            "media.image",
        ] {
            assert!(paths.contains(&path.to_string()), "missing {}", path);
            assert!(store.component(path).is_ok(), "unreadable {}", path);
        }
    }

    #[test]
    fn reads_typed_component() {
        let config = ConfigStore::bundled().component("button.cancel").unwrap();
        assert_eq!(config.view, "bootstrap-components.buttons.button");
        assert_eq!(config.label.as_deref(), Some("bootstrap-components.label.cancel"));
        assert_eq!(config.class.container, vec!["form-group".to_string()]);
        assert_eq!(config.class.component, vec!["btn".to_string(), "btn-danger".to_string()]);
    }

    #[test]
    fn media_attributes_are_flags() {
        let config = ConfigStore::bundled().component("media.video").unwrap();
        assert_eq!(config.html_attributes.component.to_html(), " controls preload");
        assert_eq!(config.poster, None);
    }

    #[test]
    fn set_overrides_single_key() {
        let mut store = ConfigStore::bundled();
        store.set("form.password.icon", "test-config-icon");
        store.set("form.password.class.container", vec!["custom"]);
        let config = store.component("form.password").unwrap();
        assert_eq!(config.icon.as_deref(), Some("test-config-icon"));
        assert_eq!(config.class.container, vec!["custom".to_string()]);
        // untouched siblings keep their defaults
        assert_eq!(config.view, "bootstrap-components.form.input");
    }

    #[test]
    fn set_creates_missing_paths() {
        let mut store = ConfigStore::empty();
        store.set("form.search.view", "custom.search");
        assert_eq!(store.component("form.search").unwrap().view, "custom.search");
        assert_eq!(store.get("form.search.view"), Some(&Value::from("custom.search")));
    }

    #[test]
    fn set_null_clears_value() {
        let mut store = ConfigStore::bundled();
        store.set("form.email.icon", Value::Null);
        assert_eq!(store.component("form.email").unwrap().icon, None);
    }

    #[test]
    fn merge_is_deep_and_lists_replace() {
        let mut store = ConfigStore::bundled();
        store
            .merge_yaml_str("form:\n  text:\n    class:\n      container: [mb-3]\n")
            .unwrap();
        let config = store.component("form.text").unwrap();
        assert_eq!(config.class.container, vec!["mb-3".to_string()]);
        assert_eq!(config.icon.as_deref(), Some("<i class=\"fas fa-font\"></i>"));
    }

    #[test]
    fn unknown_component() {
        let result = ConfigStore::bundled().component("form.unknown");
        assert!(matches!(result, Err(ComponentError::UnknownComponent { .. })));
    }

    #[test]
    fn missing_view_is_invalid() {
        let store = ConfigStore::from_yaml_str("form:\n  text:\n    icon: x\n").unwrap();
        assert!(matches!(
            store.component("form.text"),
            Err(ComponentError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn non_mapping_document_is_rejected() {
        assert!(ConfigStore::from_yaml_str("- a\n- b\n").is_err());
    }
}
