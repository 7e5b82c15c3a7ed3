use wrapp_di::types::TypeInfo;

/// Errors when registering or retrieving configs
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The Config type is already registered
    #[error("The Config type '{0}' is already registered")]
    AlreadyRegistered(TypeInfo),
    /// The stored Config could not be downcast to the requested type
    #[error("The Config stored for '{0}' has an unexpected type")]
    DowncastFailed(TypeInfo),
}
