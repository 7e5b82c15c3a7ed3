use std::sync::Arc;

use wrapp_di::{builder::Bean, types::Injectable};

use crate::{
    registration::{Initializer, ServletContextInitializer},
    servlet::{EventListener, Filter, MultipartConfig, Servlet},
};

/// Exposes beans under the views the initializer collection looks for
pub trait WebBeanExt<T> {
    /// Exposes the bean as a raw `Arc<dyn Servlet>`
    fn as_servlet(self) -> Self
    where
        T: Servlet;

    /// Exposes the bean as a raw `Arc<dyn Filter>`
    fn as_filter(self) -> Self
    where
        T: Filter;

    /// Exposes the bean as a raw `Arc<dyn EventListener>`
    fn as_listener(self) -> Self
    where
        T: EventListener;

    /// Exposes a registration as [Initializer] and as `Arc<T>`
    ///
    /// The registration's own order becomes the bean order, unless one is set explicitly.
    fn as_initializer(self) -> Self
    where
        Arc<T>: Into<Initializer>;

    /// Exposes any other [ServletContextInitializer] as [Initializer]
    fn as_custom_initializer(self) -> Self
    where
        T: ServletContextInitializer;

    /// Exposes the bean as `Arc<MultipartConfig>`
    fn as_multipart_config(self) -> Self
    where
        Arc<T>: Into<Arc<MultipartConfig>>;
}

impl<T: Injectable> WebBeanExt<T> for Bean<T> {
    fn as_servlet(self) -> Self
    where
        T: Servlet,
    {
        self.expose(|instance| instance as Arc<dyn Servlet>)
    }

    fn as_filter(self) -> Self
    where
        T: Filter,
    {
        self.expose(|instance| instance as Arc<dyn Filter>)
    }

    fn as_listener(self) -> Self
    where
        T: EventListener,
    {
        self.expose(|instance| instance as Arc<dyn EventListener>)
    }

    fn as_initializer(self) -> Self
    where
        Arc<T>: Into<Initializer>,
    {
        let initializer: Initializer = self.instance().clone().into();
        let order = initializer.order();
        self.expose(|_| initializer)
            .expose_self()
            .default_order(order)
    }

    fn as_custom_initializer(self) -> Self
    where
        T: ServletContextInitializer,
    {
        let custom: Arc<dyn ServletContextInitializer> = self.instance().clone();
        let initializer = Initializer::Other(custom);
        let order = initializer.order();
        self.expose(|_| initializer).default_order(order)
    }

    fn as_multipart_config(self) -> Self
    where
        Arc<T>: Into<Arc<MultipartConfig>>,
    {
        self.expose(|instance| -> Arc<MultipartConfig> { instance.into() })
    }
}
