use crate::config::ConfigStore;
use crate::services::{ErrorBag, KeyTranslator, NoOldInput, OldInput, Translator};
use crate::views::{BootstrapViews, TemplateRenderer};

/// Services available to a render pass.
///
/// Borrowed for the duration of one render; nothing in it is mutated.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a ConfigStore,
    pub translator: &'a dyn Translator,
    pub old_input: &'a dyn OldInput,
    /// `None` when the request carried no validation
    pub errors: Option<&'a dyn ErrorBag>,
    pub renderer: &'a dyn TemplateRenderer,
    /// Target of back/cancel buttons without an explicit url
    pub previous_url: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    /// Keys translate to themselves, no old input, no error bag, Bootstrap views
    pub fn new(config: &'a ConfigStore) -> Self {
        Self {
            config,
            translator: &KeyTranslator,
            old_input: &NoOldInput,
            errors: None,
            renderer: &BootstrapViews,
            previous_url: None,
        }
    }

    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = translator;
        self
    }

    pub fn with_old_input(mut self, old_input: &'a dyn OldInput) -> Self {
        self.old_input = old_input;
        self
    }

    pub fn with_errors(mut self, errors: &'a dyn ErrorBag) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn with_renderer(mut self, renderer: &'a dyn TemplateRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_previous_url(mut self, url: &'a str) -> Self {
        self.previous_url = Some(url);
        self
    }
}
