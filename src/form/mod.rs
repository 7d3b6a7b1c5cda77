//! Form components: inputs, file, textarea, select, checkbox and toggle.
//!
//! Every form component needs a name; resolution fails with
//! [`ComponentError::MissingName`] otherwise.

pub mod checkable;
pub mod input;
pub mod select;
pub mod textarea;

pub use checkable::Checkable;
pub use input::{File, Input};
pub use select::{Select, SelectOption};
pub use textarea::Textarea;

use crate::config::{ComponentConfig, Family};
use crate::context::RenderContext;
use crate::error::{ComponentError, ComponentResult};
use crate::resolver::{
    field_id, resolve_validation, Content, Decorated, Overridable, Overrides, Styled, ValueBag,
};
use crate::services::{scalar_text, Model};

/// Translation key of the generic label of a field
pub fn attribute_key(name: &str) -> String {
    format!("validation.attributes.{}", name)
}

/// Caller state shared by form components
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    pub(crate) overrides: Overrides,
    pub(crate) name: Option<String>,
    pub(crate) model: Option<Model>,
    pub(crate) legend: Overridable<String>,
    pub(crate) placeholder: Option<String>,
}

/// Setters common to form components
pub trait FormField: Decorated {
    fn field_mut(&mut self) -> &mut Field;

    /// Field name, required
    fn name(mut self, name: impl Into<String>) -> Self {
        self.field_mut().name = Some(name.into());
        self
    }

    /// Record whose attributes provide default values
    fn model(mut self, model: Model) -> Self {
        self.field_mut().model = Some(model);
        self
    }

    fn legend(mut self, legend: impl Into<String>) -> Self {
        self.field_mut().legend.set(legend.into());
        self
    }

    fn hide_legend(mut self) -> Self {
        self.field_mut().legend.hide();
        self
    }

    fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field_mut().placeholder = Some(placeholder.into());
        self
    }
}

impl Field {
    fn require_name(&self, component_type: &str) -> ComponentResult<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| ComponentError::MissingName {
                component: Family::Form.path(component_type),
            })
    }

    /// Explicit value, else old input, else the model attribute named `name`
    pub(crate) fn resolve_value(
        &self,
        ctx: &RenderContext<'_>,
        name: &str,
        explicit: Option<&str>,
    ) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| ctx.old_input.old(name))
            .or_else(|| {
                self.model
                    .as_ref()
                    .and_then(|model| model.attribute(name))
                    .and_then(scalar_text)
            })
    }

    pub(crate) fn resolve_placeholder(&self, ctx: &RenderContext<'_>, name: &str) -> Option<String> {
        self.placeholder
            .clone()
            .or_else(|| Some(ctx.translator.translate(&attribute_key(name))))
    }

    /// Resolve the parts shared by all form components; `content` supplies
    /// the per-kind values once the name is known to be set.
    pub(crate) fn resolve<F>(
        &self,
        ctx: &RenderContext<'_>,
        component_type: &str,
        content: F,
    ) -> ComponentResult<ValueBag>
    where
        F: FnOnce(&ComponentConfig, &str) -> ComponentResult<Content>,
    {
        let name = self.require_name(component_type)?;
        let config = ctx.config.component(&Family::Form.path(component_type))?;
        let content = content(&config, name)?;
        let id = field_id(component_type, name);

        Ok(ValueBag {
            view: config.view.clone(),
            family: Family::Form,
            component_type: component_type.to_string(),
            name: Some(name.to_string()),
            icon: self.overrides.resolve_icon(&config),
            label: self
                .overrides
                .resolve_label(|| Some(ctx.translator.translate(&attribute_key(name)))),
            legend: self.legend.resolve(|| {
                config
                    .legend
                    .as_deref()
                    .map(|legend| ctx.translator.translate(legend))
            }),
            classes: self.overrides.resolve_classes(&config, &id),
            html_attributes: self.overrides.resolve_attributes(&config),
            validation: resolve_validation(ctx, name),
            content,
            id,
        })
    }
}

macro_rules! form_field {
    ($($component:ty),+ $(,)?) => {$(
        impl Styled for $component {
            fn overrides_mut(&mut self) -> &mut Overrides {
                &mut self.field.overrides
            }
        }

        impl Decorated for $component {}

        impl FormField for $component {
            fn field_mut(&mut self) -> &mut Field {
                &mut self.field
            }
        }
    )+};
}

form_field!(Input, File, Textarea, Select, Checkable);

pub fn text() -> Input {
    Input::new("text")
}

pub fn tel() -> Input {
    Input::new("tel")
}

pub fn email() -> Input {
    Input::new("email")
}

pub fn password() -> Input {
    Input::new("password")
}

pub fn file() -> File {
    File::new()
}

pub fn textarea() -> Textarea {
    Textarea::new()
}

pub fn select() -> Select {
    Select::new()
}

pub fn checkbox() -> Checkable {
    Checkable::new("checkbox")
}

pub fn toggle() -> Checkable {
    Checkable::new("toggle")
}
