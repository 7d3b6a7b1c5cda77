use thiserror::Error;

pub type ComponentResult<T> = Result<T, ComponentError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    // --- usage errors ---

    #[error("{component}: missing name. Use the name() method to set a name")]
    MissingName { component: String },

    #[error("{component}: invalid {argument} argument. '{field}' does not exist in the given options list")]
    InvalidOptionField {
        component: String,
        argument: String,
        field: String,
    },

    #[error("{component}: invalid option #{index}: {reason}")]
    InvalidOption {
        component: String,
        index: usize,
        reason: String,
    },

    // --- configuration errors ---

    #[error("No component configured at '{path}'")]
    UnknownComponent { path: String },

    #[error("Invalid configuration at '{path}': {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("Unknown view '{view}'")]
    UnknownView { view: String },

    #[error("View '{view}' cannot render a '{component}' component")]
    ViewMismatch { view: String, component: String },

    // --- conversions ---

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("Failed to read '{path}': {reason}")]
    Io { path: String, reason: String },
}

impl From<serde_yaml::Error> for ComponentError {
    fn from(err: serde_yaml::Error) -> Self {
        ComponentError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for ComponentError {
    fn from(err: serde_json::Error) -> Self {
        ComponentError::Serialization(err.to_string())
    }
}
