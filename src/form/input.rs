use super::Field;
use crate::context::RenderContext;
use crate::error::ComponentResult;
use crate::resolver::{Component, Content, ValueBag};

/// Single-line `<input>`: text, tel, email or password
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub(super) field: Field,
    input_type: &'static str,
    value: Option<String>,
}

impl Input {
    pub(crate) fn new(input_type: &'static str) -> Self {
        Self {
            field: Field::default(),
            input_type,
            value: None,
        }
    }

    /// Explicit value, wins over old input and model
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Component for Input {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        self.field.resolve(ctx, self.input_type, |_, name| {
            Ok(Content::Input {
                input_type: self.input_type.to_string(),
                value: self.field.resolve_value(ctx, name, self.value.as_deref()),
                placeholder: self.field.resolve_placeholder(ctx, name),
            })
        })
    }
}

/// File upload input. Never carries a value; the placeholder labels the
/// picker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct File {
    pub(super) field: Field,
}

impl File {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Component for File {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        self.field.resolve(ctx, "file", |_, name| {
            Ok(Content::File {
                placeholder: self.field.resolve_placeholder(ctx, name),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigStore;
    use crate::context::RenderContext;
    use crate::error::ComponentError;
    use crate::form::{self, FormField};
    use crate::resolver::{Component, Content};
    use crate::services::{FlashedInput, Model};
    use pretty_assertions::assert_eq;

    fn value_of(content: &Content) -> Option<String> {
        match content {
            Content::Input { value, .. } => value.clone(),
            other => panic!("expected input content, got {:?}", other),
        }
    }

    #[test]
    fn missing_name_is_a_usage_error() {
        let store = ConfigStore::bundled();
        let result = form::email().resolve(&RenderContext::new(&store));
        assert_eq!(
            result.unwrap_err(),
            ComponentError::MissingName {
                component: "form.email".to_string()
            }
        );
    }

    #[test]
    fn value_precedence() {
        let store = ConfigStore::bundled();
        let old = FlashedInput::new().flash("name", "old");
        let model = Model::new().with("name", "model");

        let ctx = RenderContext::new(&store);
        let bag = form::text().name("name").model(model.clone()).resolve(&ctx).unwrap();
        assert_eq!(value_of(&bag.content), Some("model".to_string()));

        let ctx = RenderContext::new(&store).with_old_input(&old);
        let bag = form::text().name("name").model(model.clone()).resolve(&ctx).unwrap();
        assert_eq!(value_of(&bag.content), Some("old".to_string()));

        let bag = form::text()
            .name("name")
            .model(model)
            .value("explicit")
            .resolve(&ctx)
            .unwrap();
        assert_eq!(value_of(&bag.content), Some("explicit".to_string()));
    }

    #[test]
    fn file_has_placeholder_only() {
        let store = ConfigStore::bundled();
        let bag = form::file()
            .name("avatar")
            .resolve(&RenderContext::new(&store))
            .unwrap();
        assert_eq!(bag.id, "file-avatar");
        assert_eq!(
            bag.content,
            Content::File {
                placeholder: Some("validation.attributes.avatar".to_string())
            }
        );
    }
}
