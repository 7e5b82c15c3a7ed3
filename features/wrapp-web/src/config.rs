use crate::registration::InitializerType;

/// Url mapping of servlets adapted from raw servlet beans
pub const DEFAULT_SERVLET_MAPPING: &str = "/";

/// Settings of [ServletContextInitializerBeans](crate::ServletContextInitializerBeans)
///
/// Read from the [ConfigProvider](wrapp_config::ConfigProvider) if registered there.
#[derive(Debug, Clone)]
pub struct InitializerBeansConfig {
    /// Bean views scanned for explicit initializers
    ///
    /// Empty scans the [Initializer](crate::Initializer) view.
    pub initializer_types: Vec<InitializerType>,
    pub default_servlet_mapping: String,
    /// Log the resulting filter and servlet mappings at debug level
    pub log_mappings: bool,
}
impl Default for InitializerBeansConfig {
    fn default() -> Self {
        Self {
            initializer_types: Vec::new(),
            default_servlet_mapping: DEFAULT_SERVLET_MAPPING.to_string(),
            log_mappings: true,
        }
    }
}
