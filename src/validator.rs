use regex::Regex;
use std::sync::OnceLock;

use crate::attributes::HtmlAttributes;
use crate::config::{ComponentConfig, ConfigStore};
use crate::error::{ComponentError, ComponentResult};
use crate::views::BootstrapViews;

/// Check every component of a store; returns how many were checked
pub fn validate_store(store: &ConfigStore) -> ComponentResult<usize> {
    let paths = store.component_paths();
    if paths.is_empty() {
        return Err(ComponentError::InvalidConfig {
            path: "<root>".to_string(),
            reason: "no components configured".to_string(),
        });
    }
    for path in &paths {
        let config = store.component(path)?;
        validate_component_config(path, &config)?;
    }
    Ok(paths.len())
}

/// The view must be one the built-in renderer knows, class tokens and
/// attribute names must be safe to emit
pub fn validate_component_config(path: &str, config: &ComponentConfig) -> ComponentResult<()> {
    if !BootstrapViews::knows(&config.view) {
        return Err(ComponentError::UnknownView {
            view: config.view.clone(),
        });
    }

    for (slot, classes) in [
        ("container", &config.class.container),
        ("component", &config.class.component),
        ("link", &config.class.link),
    ] {
        for class in classes {
            validate_class(path, slot, class)?;
        }
    }

    for (slot, attributes) in [
        ("container", &config.html_attributes.container),
        ("component", &config.html_attributes.component),
        ("link", &config.html_attributes.link),
    ] {
        validate_attribute_names(path, slot, attributes)?;
    }

    Ok(())
}

fn validate_class(path: &str, slot: &str, class: &str) -> ComponentResult<()> {
    static CLASS_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = CLASS_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_\-:./\[\]]+$").unwrap());
    if re.is_match(class) {
        Ok(())
    } else {
        Err(ComponentError::InvalidConfig {
            path: format!("{}.class.{}", path, slot),
            reason: format!(
                "class '{}' must be a single token of safe characters (alphanumeric, -, _, :, /, ., [, ])",
                class
            ),
        })
    }
}

fn validate_attribute_names(path: &str, slot: &str, attributes: &HtmlAttributes) -> ComponentResult<()> {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = NAME_REGEX.get_or_init(|| Regex::new(r"^[a-zA-Z_:][a-zA-Z0-9_.:\-]*$").unwrap());
    for (name, _) in attributes.iter() {
        if !re.is_match(name) {
            return Err(ComponentError::InvalidConfig {
                path: format!("{}.html_attributes.{}", path, slot),
                reason: format!("invalid attribute name '{}'", name),
            });
        }
    }
    Ok(())
}
