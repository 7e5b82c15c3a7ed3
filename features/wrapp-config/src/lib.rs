//! Wrapp Config provides a registry of typed configs other features read their settings from.
//!
//! Configs are plain structs, registered once and retrieved by type.
//!
//! # Examples
//!
//! ```rust
//! use wrapp_config::provider::ConfigProvider;
//!
//! #[derive(Clone, Default)]
//! struct AppConfig {
//!     host: String,
//!     port: u16,
//! }
//!
//! let mut config_provider = ConfigProvider::default();
//! config_provider
//!     .add_config(AppConfig {
//!         host: "localhost".to_string(),
//!         port: 8080,
//!     })
//!     .unwrap();
//!
//! let retrieved = config_provider.get_config::<AppConfig>().unwrap().unwrap();
//! assert_eq!(retrieved.host, "localhost");
//! assert_eq!(retrieved.port, 8080);
//! ```
//!
//! Wrapp Config consists of the following components:
//!
//! 1. Provider - for creating a registry of configs, adding and retrieving configs
//! 2. Errors - for config errors

pub mod errors;
pub mod provider;

pub use errors::ConfigError;
pub use provider::ConfigProvider;
