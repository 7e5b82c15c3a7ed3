//! Raw web components and the startup handle initializers register them against

use wrapp_di::types::DynError;

use crate::registration::{
    DelegatingFilterProxyRegistration, FilterRegistration, ListenerRegistration,
    ServletRegistration,
};

/// Handles requests for the url mappings it is registered under
pub trait Servlet: Send + Sync + 'static {
    /// Called once before the first request
    fn init(&self) -> Result<(), DynError> {
        Ok(())
    }
}

/// Intercepts requests before they reach a servlet
pub trait Filter: Send + Sync + 'static {
    /// Called once before the first request
    fn init(&self) -> Result<(), DynError> {
        Ok(())
    }
}

/// Receives lifecycle events of the web application
pub trait EventListener: Send + Sync + 'static {}

/// Limits for multipart (file upload) requests of a servlet
///
/// `None` means unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartConfig {
    /// Directory uploaded files are stored in
    pub location: String,
    pub max_file_size: Option<u64>,
    pub max_request_size: Option<u64>,
    /// Size after which uploads are written to disk
    pub file_size_threshold: u64,
}

/// Handle to the web application being configured during startup
pub trait ServletContext {
    fn add_servlet(&mut self, registration: &ServletRegistration) -> Result<(), DynError>;

    fn add_filter(&mut self, registration: &FilterRegistration) -> Result<(), DynError>;

    /// Adds a filter which looks up its target bean by name on first use
    fn add_filter_proxy(
        &mut self,
        registration: &DelegatingFilterProxyRegistration,
    ) -> Result<(), DynError>;

    fn add_listener(&mut self, registration: &ListenerRegistration) -> Result<(), DynError>;
}
