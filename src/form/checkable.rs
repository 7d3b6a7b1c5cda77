use super::Field;
use crate::context::RenderContext;
use crate::error::ComponentResult;
use crate::resolver::{Component, Content, ValueBag};
use crate::services::{is_truthy, is_truthy_text};

/// Checkbox or toggle switch
#[derive(Debug, Clone, PartialEq)]
pub struct Checkable {
    pub(super) field: Field,
    component_type: &'static str,
    checked: Option<bool>,
}

impl Checkable {
    pub(crate) fn new(component_type: &'static str) -> Self {
        Self {
            field: Field::default(),
            component_type,
            checked: None,
        }
    }

    /// Explicit state, wins over old input and model
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    fn resolve_checked(&self, ctx: &RenderContext<'_>, name: &str) -> bool {
        if let Some(checked) = self.checked {
            return checked;
        }
        if let Some(old) = ctx.old_input.old(name) {
            return is_truthy_text(&old);
        }
        self.field
            .model
            .as_ref()
            .and_then(|model| model.attribute(name))
            .is_some_and(is_truthy)
    }
}

impl Component for Checkable {
    fn resolve(&self, ctx: &RenderContext<'_>) -> ComponentResult<ValueBag> {
        self.field.resolve(ctx, self.component_type, |_, name| {
            Ok(Content::Checkable {
                checked: self.resolve_checked(ctx, name),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ConfigStore;
    use crate::context::RenderContext;
    use crate::form::{self, FormField};
    use crate::resolver::{Component, Content};
    use crate::services::{FlashedInput, Model};

    fn checked(component: &impl Component, ctx: &RenderContext<'_>) -> bool {
        match component.resolve(ctx).unwrap().content {
            Content::Checkable { checked } => checked,
            other => panic!("expected checkable content, got {:?}", other),
        }
    }

    #[test]
    fn unchecked_by_default() {
        let store = ConfigStore::bundled();
        let ctx = RenderContext::new(&store);
        assert!(!checked(&form::checkbox().name("active"), &ctx));
    }

    #[test]
    fn model_then_old_input_then_explicit() {
        let store = ConfigStore::bundled();
        let model = Model::new().with("active", true);
        let ctx = RenderContext::new(&store);
        assert!(checked(&form::toggle().name("active").model(model.clone()), &ctx));

        let old = FlashedInput::new().flash("active", "0");
        let ctx = RenderContext::new(&store).with_old_input(&old);
        assert!(!checked(&form::toggle().name("active").model(model.clone()), &ctx));
        assert!(checked(
            &form::toggle().name("active").model(model).checked(true),
            &ctx
        ));
    }
}
