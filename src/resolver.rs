//! Configuration-override resolution shared by every component.
//!
//! A builder records caller overrides; [`Component::resolve`] merges them with
//! the component's [`ComponentConfig`] and the request services of a
//! [`RenderContext`] into a [`ValueBag`]. Precedence, highest first: hide flag,
//! explicit override, request value (old input, then model), configured
//! default, translated fallback.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::debug;

use crate::attributes::HtmlAttributes;
use crate::button::ButtonAction;
use crate::config::{ComponentConfig, Family, Slots};
use crate::context::RenderContext;
use crate::error::ComponentResult;
use crate::form::select::SelectOption;

/// Translation key of the success feedback
pub const SUCCESS_KEY: &str = "bootstrap-components.notification.validation.success";

/// A caller override with an independent hide flag. Hiding wins over any value.
#[derive(Debug, Clone, PartialEq)]
pub struct Overridable<T> {
    value: Option<T>,
    hidden: bool,
}

impl<T> Default for Overridable<T> {
    fn default() -> Self {
        Self {
            value: None,
            hidden: false,
        }
    }
}

impl<T: Clone> Overridable<T> {
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hidden → `None`; else the override, else `fallback()`
    pub fn resolve(&self, fallback: impl FnOnce() -> Option<T>) -> Option<T> {
        if self.hidden {
            return None;
        }
        self.value.clone().or_else(fallback)
    }
}

/// Overrides shared by every component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub(crate) icon: Overridable<String>,
    pub(crate) label: Overridable<String>,
    pub(crate) classes: Slots<Option<Vec<String>>>,
    pub(crate) attributes: Slots<Option<HtmlAttributes>>,
}

impl Overrides {
    pub(crate) fn resolve_icon(&self, config: &ComponentConfig) -> Option<String> {
        self.icon.resolve(|| config.icon.clone())
    }

    pub(crate) fn resolve_label(&self, fallback: impl FnOnce() -> Option<String>) -> Option<String> {
        self.label.resolve(fallback)
    }

    /// Generated class first, then the override list or else the configured list
    pub(crate) fn resolve_classes(&self, config: &ComponentConfig, id: &str) -> Slots<Vec<String>> {
        Slots {
            container: slot_classes(
                format!("{}-container", id),
                &self.classes.container,
                &config.class.container,
            ),
            component: slot_classes(
                format!("{}-component", id),
                &self.classes.component,
                &config.class.component,
            ),
            link: slot_classes(format!("{}-link", id), &self.classes.link, &config.class.link),
        }
    }

    /// Override map or else the configured map, per slot, never merged
    pub(crate) fn resolve_attributes(&self, config: &ComponentConfig) -> Slots<HtmlAttributes> {
        let pick = |custom: &Option<HtmlAttributes>, configured: &HtmlAttributes| {
            custom.clone().unwrap_or_else(|| configured.clone())
        };
        Slots {
            container: pick(&self.attributes.container, &config.html_attributes.container),
            component: pick(&self.attributes.component, &config.html_attributes.component),
            link: pick(&self.attributes.link, &config.html_attributes.link),
        }
    }
}

fn slot_classes(generated: String, custom: &Option<Vec<String>>, configured: &[String]) -> Vec<String> {
    let rest = custom.as_deref().unwrap_or(configured);
    std::iter::once(generated)
        .chain(rest.iter().cloned())
        .collect()
}

/// Class and attribute overrides, available on every component
pub trait Styled: Sized {
    fn overrides_mut(&mut self) -> &mut Overrides;

    /// Replace the configured container classes
    fn container_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides_mut().classes.container = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the configured component classes
    fn component_class<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides_mut().classes.component = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the configured container attributes
    fn container_html_attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.overrides_mut().attributes.container = Some(attributes);
        self
    }

    /// Replace the configured component attributes
    fn component_html_attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.overrides_mut().attributes.component = Some(attributes);
        self
    }
}

/// Icon and label overrides
pub trait Decorated: Styled {
    /// Raw icon markup
    fn icon(mut self, icon: impl Into<String>) -> Self {
        self.overrides_mut().icon.set(icon.into());
        self
    }

    fn hide_icon(mut self) -> Self {
        self.overrides_mut().icon.hide();
        self
    }

    fn label(mut self, label: impl Into<String>) -> Self {
        self.overrides_mut().label.set(label.into());
        self
    }

    fn hide_label(mut self) -> Self {
        self.overrides_mut().label.hide();
        self
    }
}

/// A renderable component
pub trait Component {
    /// Merge configuration, overrides and request state. Fails on usage or
    /// configuration errors, before anything is rendered.
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag>;

    fn render(&self, ctx: &RenderContext<'_>) -> ComponentResult<String> {
        let values = self.resolve(ctx)?;
        debug!(
            component = %values.family.path(&values.component_type),
            id = %values.id,
            view = %values.view,
            "rendering component"
        );
        ctx.renderer.render(&values.view, &values)
    }
}

/// Feedback shown under a validated field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum Validation {
    Error(String),
    Success(String),
}

/// Per-kind resolved values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    Input {
        input_type: String,
        value: Option<String>,
        placeholder: Option<String>,
    },
    File {
        placeholder: Option<String>,
    },
    Textarea {
        value: Option<String>,
        placeholder: Option<String>,
    },
    Select {
        placeholder: Option<String>,
        options: Vec<SelectOption>,
    },
    Checkable {
        checked: bool,
    },
    Button {
        action: ButtonAction,
    },
    Audio {
        src: Option<String>,
    },
    Video {
        src: Option<String>,
        poster: Option<String>,
    },
    Image {
        src: Option<String>,
        alt: Option<String>,
        link: Option<String>,
    },
}

impl Content {
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Input { .. } => "input",
            Content::File { .. } => "file",
            Content::Textarea { .. } => "textarea",
            Content::Select { .. } => "select",
            Content::Checkable { .. } => "checkable",
            Content::Button { .. } => "button",
            Content::Audio { .. } => "audio",
            Content::Video { .. } => "video",
            Content::Image { .. } => "image",
        }
    }
}

/// The resolved values handed to a [`TemplateRenderer`](crate::views::TemplateRenderer)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueBag {
    pub view: String,
    pub family: Family,
    pub component_type: String,
    /// Generated id, also the prefix of the structural classes
    pub id: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub label: Option<String>,
    pub legend: Option<String>,
    pub classes: Slots<Vec<String>>,
    pub html_attributes: Slots<HtmlAttributes>,
    pub validation: Option<Validation>,
    pub content: Content,
}

/// Error or success feedback for `name`; none when the request has no error bag
pub(crate) fn resolve_validation(ctx: &RenderContext<'_>, name: &str) -> Option<Validation> {
    let errors = ctx.errors?;
    if errors.has(name) {
        let message = errors.first(name).unwrap_or_default().to_string();
        Some(Validation::Error(message))
    } else {
        Some(Validation::Success(ctx.translator.translate(SUCCESS_KEY)))
    }
}

/// Id fragment derived from a field name: runs of characters outside
/// `[A-Za-z0-9_]` become a dash, outer dashes are trimmed
pub fn slug(name: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATORS.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
    re.replace_all(name, "-").trim_matches('-').to_string()
}

/// Id of a named form component: `<type>-<slug(name)>`
pub(crate) fn field_id(component_type: &str, name: &str) -> String {
    format!("{}-{}", component_type, slug(name))
}

/// Id of a nameless component: `<family>-<type>`
pub(crate) fn component_id(family: Family, component_type: &str) -> String {
    format!("{}-{}", family.key(), component_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::services::MessageBag;
    use pretty_assertions::assert_eq;

    fn config() -> ComponentConfig {
        let mut config = ConfigStore::bundled().component("form.text").unwrap();
        config.class.component = vec!["configured".to_string()];
        config.html_attributes.component = HtmlAttributes::new().with("data-config", "1");
        config
    }

    #[test]
    fn hide_wins_over_value() {
        let mut icon = Overridable::default();
        icon.hide();
        icon.set("custom".to_string());
        assert_eq!(icon.resolve(|| Some("configured".to_string())), None);
    }

    #[test]
    fn override_wins_over_fallback() {
        let mut label = Overridable::default();
        assert_eq!(label.resolve(|| Some("fallback".to_string())), Some("fallback".to_string()));
        label.set("custom".to_string());
        assert_eq!(label.resolve(|| Some("fallback".to_string())), Some("custom".to_string()));
    }

    #[test]
    fn classes_prepend_generated_and_use_configured_defaults() {
        let classes = Overrides::default().resolve_classes(&config(), "text-name");
        assert_eq!(
            classes.container,
            vec!["text-name-container".to_string(), "form-group".to_string()]
        );
        assert_eq!(
            classes.component,
            vec!["text-name-component".to_string(), "configured".to_string()]
        );
    }

    #[test]
    fn class_override_replaces_configured_list() {
        let mut overrides = Overrides::default();
        overrides.classes.component = Some(vec!["custom".to_string()]);
        let classes = overrides.resolve_classes(&config(), "text-name");
        assert_eq!(
            classes.component,
            vec!["text-name-component".to_string(), "custom".to_string()]
        );
    }

    #[test]
    fn attribute_override_replaces_configured_map() {
        let mut overrides = Overrides::default();
        assert!(overrides.resolve_attributes(&config()).component.contains("data-config"));

        overrides.attributes.component = Some(HtmlAttributes::new().with("data-custom", "2"));
        let attributes = overrides.resolve_attributes(&config());
        assert!(attributes.component.contains("data-custom"));
        assert!(!attributes.component.contains("data-config"));
    }

    #[test]
    fn validation_state() {
        let store = ConfigStore::bundled();
        let ctx = RenderContext::new(&store);
        assert_eq!(resolve_validation(&ctx, "name"), None);

        let bag = MessageBag::new().add("name", "required");
        let ctx = RenderContext::new(&store).with_errors(&bag);
        assert_eq!(
            resolve_validation(&ctx, "name"),
            Some(Validation::Error("required".to_string()))
        );
        assert_eq!(
            resolve_validation(&ctx, "email"),
            Some(Validation::Success(SUCCESS_KEY.to_string()))
        );
    }

    #[test]
    fn slugs() {
        assert_eq!(slug("name"), "name");
        assert_eq!(slug("user[email]"), "user-email");
        assert_eq!(slug("tags[]"), "tags");
        assert_eq!(slug("first name"), "first-name");
    }
}
