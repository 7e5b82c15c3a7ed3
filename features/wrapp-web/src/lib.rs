//! Wrapp Web collects the servlet context initializers of a [wrapp_di] container.
//!
//! Explicit registrations ([ServletRegistration], [FilterRegistration],
//! [DelegatingFilterProxyRegistration], [ListenerRegistration]) and custom
//! [ServletContextInitializer]s are picked up as they are. Raw [Servlet], [Filter] and
//! [EventListener] beans no registration claims are adapted into default registrations.
//! Every raw component ends up registered at most once.
//!
//! ```rust
//! use wrapp_di::{Bean, DiBuilder};
//! use wrapp_web::{Filter, Servlet, ServletContextInitializerBeans, WebBeanExt};
//!
//! struct Dispatcher;
//! impl Servlet for Dispatcher {}
//!
//! struct RequestLog;
//! impl Filter for RequestLog {}
//!
//! let container = DiBuilder::new()
//!     .add_bean(Bean::new("requestLog", RequestLog).as_filter())
//!     .add_bean(Bean::new("dispatcher", Dispatcher).as_servlet())
//!     .build()
//!     .unwrap();
//!
//! let initializers = ServletContextInitializerBeans::new(&container).unwrap();
//! let names: Vec<_> = initializers.iter().filter_map(|it| it.name()).collect();
//! assert_eq!(names, vec!["dispatcher", "requestLog"]);
//! ```

pub mod bean_ext;
pub mod beans;
pub mod config;
mod discovery;
pub mod errors;
pub mod registration;
pub mod seen;
pub mod servlet;

pub use bean_ext::WebBeanExt;
pub use beans::ServletContextInitializerBeans;
pub use config::{InitializerBeansConfig, DEFAULT_SERVLET_MAPPING};
pub use errors::InitializerBeansError;
pub use registration::{
    DelegatingFilterProxyRegistration, FilterRegistration, Initializer, InitializerType,
    ListenerRegistration, ServletContextInitializer, ServletRegistration,
};
pub use seen::{Category, RawSource};
pub use servlet::{EventListener, Filter, MultipartConfig, Servlet, ServletContext};
