//! # Bootstrap Components
//!
//! Configuration-driven Bootstrap markup for forms, buttons and media.
//!
//! Each component type has a static configuration entry (view, icon, legend,
//! label, classes, HTML attributes) in a [`ConfigStore`]. A builder records
//! per-call overrides; rendering merges both with request state (old input,
//! validation errors, translations) supplied through a [`RenderContext`].
//!
//! ## Features
//! - Form inputs (text, tel, email, password, file), textarea, select, checkbox, toggle
//! - Submit and navigation buttons with translated labels
//! - Audio, video and image tags
//! - Override precedence: hide flag, explicit value, old input, model, configuration
//! - Error and success feedback from a validation message bag
//!
//! ## Example
//! ```ignore
//! use bootstrap_components::prelude::*;
//!
//! let config = ConfigStore::bundled();
//! let errors = MessageBag::new().add("email", "The email is invalid.");
//! let ctx = RenderContext::new(&config).with_errors(&errors);
//!
//! let html = form::email()
//!     .name("email")
//!     .legend("We never share it")
//!     .render(&ctx)?;
//! ```

pub mod attributes;
pub mod button;
pub mod config;
pub mod context;
pub mod error;
pub mod form;
pub mod media;
pub mod resolver;
pub mod services;
pub mod validator;
pub mod views;

// --- Core types ---
pub use attributes::{AttributeValue, HtmlAttributes};
pub use config::{ComponentConfig, ConfigStore, Family, Slots};
pub use context::RenderContext;
pub use error::{ComponentError, ComponentResult};
pub use resolver::{Component, Content, Decorated, Styled, Validation, ValueBag};
pub use services::{
    Dictionary, ErrorBag, FlashedInput, KeyTranslator, MessageBag, Model, NoOldInput, OldInput,
    Translator,
};
pub use views::{BootstrapViews, TemplateRenderer};

/// Builders, traits and services needed at a call site
pub mod prelude {
    pub use crate::attributes::HtmlAttributes;
    pub use crate::button;
    pub use crate::config::ConfigStore;
    pub use crate::context::RenderContext;
    pub use crate::error::{ComponentError, ComponentResult};
    pub use crate::form::{self, FormField};
    pub use crate::media;
    pub use crate::resolver::{Component, Decorated, Styled};
    pub use crate::services::{Dictionary, FlashedInput, MessageBag, Model};
}
