//! Buttons: submit presets (validate, create, update) and navigation presets
//! (back, cancel).

use serde::Serialize;

use crate::config::Family;
use crate::context::RenderContext;
use crate::error::ComponentResult;
use crate::resolver::{component_id, Component, Content, Decorated, Overrides, Styled, ValueBag};

/// Semantic button preset, the configuration key under `button.`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Validate,
    Create,
    Update,
    Back,
    Cancel,
}

impl ButtonKind {
    pub fn key(&self) -> &'static str {
        match self {
            ButtonKind::Validate => "validate",
            ButtonKind::Create => "create",
            ButtonKind::Update => "update",
            ButtonKind::Back => "back",
            ButtonKind::Cancel => "cancel",
        }
    }

    /// Back and cancel navigate away instead of submitting
    pub fn is_link(&self) -> bool {
        matches!(self, ButtonKind::Back | ButtonKind::Cancel)
    }
}

/// What activating the button does
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "url", rename_all = "lowercase")]
pub enum ButtonAction {
    Submit,
    Link(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    overrides: Overrides,
    kind: ButtonKind,
    url: Option<String>,
}

impl Button {
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            overrides: Overrides::default(),
            kind,
            url: None,
        }
    }

    /// Link target of back and cancel buttons. Ignored by submit buttons.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    fn resolve_action(&self, ctx: &RenderContext<'_>) -> ButtonAction {
        if !self.kind.is_link() {
            return ButtonAction::Submit;
        }
        let url = self
            .url
            .clone()
            .or_else(|| ctx.previous_url.map(str::to_string))
            .unwrap_or_else(|| "#".to_string());
        ButtonAction::Link(url)
    }
}

impl Styled for Button {
    fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }
}

impl Decorated for Button {}

impl Component for Button {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        let component_type = self.kind.key();
        let config = ctx.config.component(&Family::Button.path(component_type))?;
        let id = component_id(Family::Button, component_type);

        Ok(ValueBag {
            view: config.view.clone(),
            family: Family::Button,
            component_type: component_type.to_string(),
            name: None,
            icon: self.overrides.resolve_icon(&config),
            label: self.overrides.resolve_label(|| {
                config
                    .label
                    .as_deref()
                    .map(|key| ctx.translator.translate(key))
            }),
            legend: None,
            classes: self.overrides.resolve_classes(&config, &id),
            html_attributes: self.overrides.resolve_attributes(&config),
            validation: None,
            content: Content::Button {
                action: self.resolve_action(ctx),
            },
            id,
        })
    }
}

pub fn validate() -> Button {
    Button::new(ButtonKind::Validate)
}

pub fn create() -> Button {
    Button::new(ButtonKind::Create)
}

pub fn update() -> Button {
    Button::new(ButtonKind::Update)
}

pub fn back() -> Button {
    Button::new(ButtonKind::Back)
}

pub fn cancel() -> Button {
    Button::new(ButtonKind::Cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use crate::services::Dictionary;
    use pretty_assertions::assert_eq;

    #[test]
    fn submit_buttons_ignore_url() {
        let store = ConfigStore::bundled();
        let bag = update().url("/ignored").resolve(&RenderContext::new(&store)).unwrap();
        assert_eq!(bag.content, Content::Button { action: ButtonAction::Submit });
    }

    #[test]
    fn link_url_precedence() {
        let store = ConfigStore::bundled();
        let ctx = RenderContext::new(&store);
        assert_eq!(
            back().resolve(&ctx).unwrap().content,
            Content::Button { action: ButtonAction::Link("#".to_string()) }
        );

        let ctx = ctx.with_previous_url("/users");
        assert_eq!(
            cancel().resolve(&ctx).unwrap().content,
            Content::Button { action: ButtonAction::Link("/users".to_string()) }
        );
        assert_eq!(
            cancel().url("/home").resolve(&ctx).unwrap().content,
            Content::Button { action: ButtonAction::Link("/home".to_string()) }
        );
    }

    #[test]
    fn label_is_translated_from_config() {
        let store = ConfigStore::bundled();
        let english = Dictionary::english();
        let ctx = RenderContext::new(&store).with_translator(&english);
        let bag = create().resolve(&ctx).unwrap();
        assert_eq!(bag.label.as_deref(), Some("Create"));
        assert_eq!(bag.id, "button-create");
        assert_eq!(
            bag.classes.component,
            vec![
                "button-create-component".to_string(),
                "btn".to_string(),
                "btn-primary".to_string()
            ]
        );
    }
}
