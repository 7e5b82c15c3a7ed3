use thiserror::Error;
use wrapp_config::ConfigError;
use wrapp_di::errors::RequireError;

/// Errors while collecting initializers
#[derive(Error, Debug)]
pub enum InitializerBeansError {
    /// The container could not resolve a bean it listed
    #[error(transparent)]
    Require(#[from] RequireError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
