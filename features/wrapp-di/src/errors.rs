use thiserror::Error;

/// Errors when trying to require a bean from the container
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequireError {
    /// No bean with this name is registered
    #[error("No bean named '{0}' is registered.")]
    BeanMissing(String),
    /// The bean exists but does not expose the requested type
    #[error("Bean '{name}' does not expose '{required_type}'.")]
    TypeMismatch {
        name: String,
        required_type: &'static str,
    },

    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },
}

/// Errors while registering bean definitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("A Bean has been registered twice: '{0}'")]
    DuplicateBean(String),
    #[error("Bean names must not be empty")]
    EmptyName,
}
