use super::Field;
use crate::context::RenderContext;
use crate::error::ComponentResult;
use crate::resolver::{Component, Content, ValueBag};

/// Multi-line `<textarea>`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Textarea {
    pub(super) field: Field,
    value: Option<String>,
}

impl Textarea {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Component for Textarea {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        self.field.resolve(ctx, "textarea", |_, name| {
            Ok(Content::Textarea {
                value: self.field.resolve_value(ctx, name, self.value.as_deref()),
                placeholder: self.field.resolve_placeholder(ctx, name),
            })
        })
    }
}
