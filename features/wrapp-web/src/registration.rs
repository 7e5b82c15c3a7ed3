//! Initializers and the wrappers registering raw components during startup

use std::{fmt, sync::Arc};

use wrapp_di::types::{DynError, Injectable, Instance, InstanceId, TypeInfo};

use crate::{
    seen::{Category, RawSource},
    servlet::{EventListener, Filter, MultipartConfig, Servlet, ServletContext},
};

/// Anything able to configure the web application during startup
pub trait ServletContextInitializer: Send + Sync + 'static {
    fn on_startup(&self, context: &mut dyn ServletContext) -> Result<(), DynError>;

    /// Ordering of the initializer itself, `None` leaves it to the bean definition
    fn order(&self) -> Option<i32> {
        None
    }
}

/// Name, order and enabled flag shared by all registrations
#[derive(Debug, Clone)]
struct RegistrationMeta {
    name: Option<String>,
    order: Option<i32>,
    enabled: bool,
}
impl Default for RegistrationMeta {
    fn default() -> Self {
        Self {
            name: None,
            order: None,
            enabled: true,
        }
    }
}

/// Builders and accessors every registration shares through its `meta`
macro_rules! registration_meta {
    ($($registration:ty),+) => {$(
        impl $registration {
            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.meta.name = Some(name.into());
                self
            }

            pub fn with_order(mut self, order: i32) -> Self {
                self.meta.order = Some(order);
                self
            }

            pub fn with_enabled(mut self, enabled: bool) -> Self {
                self.meta.enabled = enabled;
                self
            }

            pub fn order(&self) -> Option<i32> {
                self.meta.order
            }

            pub fn is_enabled(&self) -> bool {
                self.meta.enabled
            }
        }
    )+};
}

registration_meta!(
    ServletRegistration,
    FilterRegistration,
    DelegatingFilterProxyRegistration,
    ListenerRegistration
);

/// Registers a servlet under one or more url mappings
pub struct ServletRegistration {
    servlet: Arc<dyn Servlet>,
    url_mappings: Vec<String>,
    multipart_config: Option<Arc<MultipartConfig>>,
    meta: RegistrationMeta,
}

impl ServletRegistration {
    pub fn new<S: Into<String>>(
        servlet: Arc<dyn Servlet>,
        url_mappings: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            servlet,
            url_mappings: url_mappings.into_iter().map(Into::into).collect(),
            multipart_config: None,
            meta: RegistrationMeta::default(),
        }
    }

    pub fn with_multipart_config(mut self, config: Option<Arc<MultipartConfig>>) -> Self {
        self.multipart_config = config;
        self
    }

    pub fn servlet(&self) -> &Arc<dyn Servlet> {
        &self.servlet
    }

    pub fn url_mappings(&self) -> &[String] {
        &self.url_mappings
    }

    pub fn multipart_config(&self) -> Option<&Arc<MultipartConfig>> {
        self.multipart_config.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.meta.name.as_deref()
    }
}
impl fmt::Display for ServletRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} urls={:?}",
            self.name().unwrap_or(UNNAMED),
            self.url_mappings
        )
    }
}

/// Registers a filter, restricted to url patterns and servlet names
///
/// Without any restriction the filter applies to every request.
pub struct FilterRegistration {
    filter: Arc<dyn Filter>,
    url_patterns: Vec<String>,
    servlet_names: Vec<String>,
    meta: RegistrationMeta,
}

impl FilterRegistration {
    pub fn new(filter: Arc<dyn Filter>) -> Self {
        Self {
            filter,
            url_patterns: Vec::new(),
            servlet_names: Vec::new(),
            meta: RegistrationMeta::default(),
        }
    }

    pub fn with_url_patterns<S: Into<String>>(
        mut self,
        patterns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.url_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_servlet_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.servlet_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter(&self) -> &Arc<dyn Filter> {
        &self.filter
    }

    pub fn url_patterns(&self) -> &[String] {
        &self.url_patterns
    }

    pub fn servlet_names(&self) -> &[String] {
        &self.servlet_names
    }

    pub fn name(&self) -> Option<&str> {
        self.meta.name.as_deref()
    }
}
impl fmt::Display for FilterRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_filter(
            f,
            self.name().unwrap_or(UNNAMED),
            &self.url_patterns,
            &self.servlet_names,
            self.order(),
        )
    }
}

/// Registers a filter by the name of its bean instead of its instance
pub struct DelegatingFilterProxyRegistration {
    target_bean_name: String,
    url_patterns: Vec<String>,
    servlet_names: Vec<String>,
    meta: RegistrationMeta,
}

impl DelegatingFilterProxyRegistration {
    pub fn new(target_bean_name: impl Into<String>) -> Self {
        Self {
            target_bean_name: target_bean_name.into(),
            url_patterns: Vec::new(),
            servlet_names: Vec::new(),
            meta: RegistrationMeta::default(),
        }
    }

    pub fn with_url_patterns<S: Into<String>>(
        mut self,
        patterns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.url_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_servlet_names<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.servlet_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn target_bean_name(&self) -> &str {
        &self.target_bean_name
    }

    pub fn url_patterns(&self) -> &[String] {
        &self.url_patterns
    }

    pub fn servlet_names(&self) -> &[String] {
        &self.servlet_names
    }

    /// The registration name, defaults to the target bean name
    pub fn name(&self) -> &str {
        self.meta.name.as_deref().unwrap_or(&self.target_bean_name)
    }
}
impl fmt::Display for DelegatingFilterProxyRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_filter(
            f,
            self.name(),
            &self.url_patterns,
            &self.servlet_names,
            self.order(),
        )
    }
}

/// Registers an event listener
pub struct ListenerRegistration {
    listener: Arc<dyn EventListener>,
    meta: RegistrationMeta,
}

impl ListenerRegistration {
    pub fn new(listener: Arc<dyn EventListener>) -> Self {
        Self {
            listener,
            meta: RegistrationMeta::default(),
        }
    }

    pub fn listener(&self) -> &Arc<dyn EventListener> {
        &self.listener
    }

    pub fn name(&self) -> Option<&str> {
        self.meta.name.as_deref()
    }
}
impl fmt::Display for ListenerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(UNNAMED))
    }
}

const UNNAMED: &str = "<unnamed>";

fn write_filter(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    url_patterns: &[String],
    servlet_names: &[String],
    order: Option<i32>,
) -> fmt::Result {
    write!(f, "{name} urls={url_patterns:?}")?;
    if !servlet_names.is_empty() {
        write!(f, " servlets={servlet_names:?}")?;
    }
    match order {
        Some(order) => write!(f, " order={order}"),
        None => Ok(()),
    }
}

/// An initializer, by the shape the collection engine recognizes
#[derive(Clone)]
pub enum Initializer {
    Servlet(Arc<ServletRegistration>),
    Filter(Arc<FilterRegistration>),
    DelegatingFilter(Arc<DelegatingFilterProxyRegistration>),
    Listener(Arc<ListenerRegistration>),
    /// Any other initializer, opaque to the engine
    Other(Arc<dyn ServletContextInitializer>),
}

impl Initializer {
    /// Resolves the category and the raw component of the initializer
    pub fn classify(&self) -> (Category, RawSource) {
        match self {
            Initializer::Servlet(registration) => (
                Category::Servlet,
                RawSource::Instance(InstanceId::of(registration.servlet())),
            ),
            Initializer::Filter(registration) => (
                Category::Filter,
                RawSource::Instance(InstanceId::of(registration.filter())),
            ),
            Initializer::DelegatingFilter(registration) => (
                Category::Filter,
                RawSource::BeanName(registration.target_bean_name().to_string()),
            ),
            Initializer::Listener(registration) => (
                Category::Listener,
                RawSource::Instance(InstanceId::of(registration.listener())),
            ),
            Initializer::Other(initializer) => (
                Category::Generic,
                RawSource::Instance(InstanceId::of(initializer)),
            ),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Initializer::Servlet(_) => Category::Servlet,
            Initializer::Filter(_) | Initializer::DelegatingFilter(_) => Category::Filter,
            Initializer::Listener(_) => Category::Listener,
            Initializer::Other(_) => Category::Generic,
        }
    }

    /// Ordering declared by the initializer itself
    pub fn order(&self) -> Option<i32> {
        match self {
            Initializer::Servlet(registration) => registration.order(),
            Initializer::Filter(registration) => registration.order(),
            Initializer::DelegatingFilter(registration) => registration.order(),
            Initializer::Listener(registration) => registration.order(),
            Initializer::Other(initializer) => initializer.order(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Initializer::Servlet(registration) => registration.name(),
            Initializer::Filter(registration) => registration.name(),
            Initializer::DelegatingFilter(registration) => Some(registration.name()),
            Initializer::Listener(registration) => registration.name(),
            Initializer::Other(_) => None,
        }
    }

    /// Configures `context` - disabled registrations are skipped
    pub fn on_startup(&self, context: &mut dyn ServletContext) -> Result<(), DynError> {
        if !self.is_enabled() {
            tracing::info!("{} '{self}' was not registered (disabled)", self.category());
            return Ok(());
        }

        match self {
            Initializer::Servlet(registration) => context.add_servlet(registration),
            Initializer::Filter(registration) => context.add_filter(registration),
            Initializer::DelegatingFilter(registration) => context.add_filter_proxy(registration),
            Initializer::Listener(registration) => context.add_listener(registration),
            Initializer::Other(initializer) => initializer.on_startup(context),
        }
    }

    fn is_enabled(&self) -> bool {
        match self {
            Initializer::Servlet(registration) => registration.is_enabled(),
            Initializer::Filter(registration) => registration.is_enabled(),
            Initializer::DelegatingFilter(registration) => registration.is_enabled(),
            Initializer::Listener(registration) => registration.is_enabled(),
            Initializer::Other(_) => true,
        }
    }
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Initializer::Servlet(registration) => write!(f, "{registration}"),
            Initializer::Filter(registration) => write!(f, "{registration}"),
            Initializer::DelegatingFilter(registration) => write!(f, "{registration}"),
            Initializer::Listener(registration) => write!(f, "{registration}"),
            Initializer::Other(_) => f.write_str("<initializer>"),
        }
    }
}
impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&self.category().to_string())
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl From<Arc<ServletRegistration>> for Initializer {
    fn from(registration: Arc<ServletRegistration>) -> Self {
        Initializer::Servlet(registration)
    }
}
impl From<Arc<FilterRegistration>> for Initializer {
    fn from(registration: Arc<FilterRegistration>) -> Self {
        Initializer::Filter(registration)
    }
}
impl From<Arc<DelegatingFilterProxyRegistration>> for Initializer {
    fn from(registration: Arc<DelegatingFilterProxyRegistration>) -> Self {
        Initializer::DelegatingFilter(registration)
    }
}
impl From<Arc<ListenerRegistration>> for Initializer {
    fn from(registration: Arc<ListenerRegistration>) -> Self {
        Initializer::Listener(registration)
    }
}
impl From<Arc<dyn ServletContextInitializer>> for Initializer {
    fn from(initializer: Arc<dyn ServletContextInitializer>) -> Self {
        Initializer::Other(initializer)
    }
}

/// A bean view that is scanned for explicit initializers
///
/// Defaults to the [Initializer] view every initializer bean exposes. Narrower types, e.g.
/// `Arc<ServletRegistration>`, restrict the scan to one kind of registration.
#[derive(Clone, Copy)]
pub struct InitializerType {
    info: TypeInfo,
    convert: fn(&Instance) -> Option<Initializer>,
}

impl InitializerType {
    pub fn of<View: Injectable + Clone + Into<Initializer>>() -> Self {
        InitializerType {
            info: TypeInfo::of::<View>(),
            convert: convert_view::<View>,
        }
    }

    pub fn info(&self) -> TypeInfo {
        self.info
    }

    pub(crate) fn convert(&self, instance: &Instance) -> Option<Initializer> {
        (self.convert)(instance)
    }
}
impl Default for InitializerType {
    fn default() -> Self {
        Self::of::<Initializer>()
    }
}
impl fmt::Debug for InitializerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("InitializerType")
            .field(&self.info.type_name)
            .finish()
    }
}

fn convert_view<View: Injectable + Clone + Into<Initializer>>(
    instance: &Instance,
) -> Option<Initializer> {
    instance.downcast::<View>().ok().map(Into::into)
}
