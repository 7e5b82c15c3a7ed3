#![allow(dead_code)]

use std::sync::Arc;

use wrapp_di::DynError;
use wrapp_web::{
    Category, DelegatingFilterProxyRegistration, EventListener, Filter, FilterRegistration,
    ListenerRegistration, Servlet, ServletContext, ServletContextInitializer,
    ServletContextInitializerBeans, ServletRegistration,
};

pub struct TestServlet;
impl Servlet for TestServlet {}

pub struct TestFilter;
impl Filter for TestFilter {}

pub struct TestListener;
impl EventListener for TestListener {}

/// Custom initializer that is also a servlet and a listener
pub struct Everything {
    pub order: Option<i32>,
}
impl Servlet for Everything {}
impl EventListener for Everything {}
impl ServletContextInitializer for Everything {
    fn on_startup(&self, context: &mut dyn ServletContext) -> Result<(), DynError> {
        let registration = ServletRegistration::new(Arc::new(TestServlet), ["/everything"])
            .with_name("fromEverything");
        context.add_servlet(&registration)
    }

    fn order(&self) -> Option<i32> {
        self.order
    }
}

pub fn names(initializers: &ServletContextInitializerBeans) -> Vec<String> {
    initializers
        .iter()
        .map(|initializer| initializer.name().unwrap_or("<custom>").to_string())
        .collect()
}

pub fn categories(initializers: &ServletContextInitializerBeans) -> Vec<Category> {
    initializers.iter().map(|it| it.category()).collect()
}

/// Records every registration as `kind:name`
#[derive(Default)]
pub struct RecordingContext {
    pub registered: Vec<String>,
}
impl ServletContext for RecordingContext {
    fn add_servlet(&mut self, registration: &ServletRegistration) -> Result<(), DynError> {
        self.registered
            .push(format!("servlet:{}", registration.name().unwrap_or_default()));
        Ok(())
    }

    fn add_filter(&mut self, registration: &FilterRegistration) -> Result<(), DynError> {
        self.registered
            .push(format!("filter:{}", registration.name().unwrap_or_default()));
        Ok(())
    }

    fn add_filter_proxy(
        &mut self,
        registration: &DelegatingFilterProxyRegistration,
    ) -> Result<(), DynError> {
        self.registered.push(format!("proxy:{}", registration.name()));
        Ok(())
    }

    fn add_listener(&mut self, registration: &ListenerRegistration) -> Result<(), DynError> {
        self.registered
            .push(format!("listener:{}", registration.name().unwrap_or_default()));
        Ok(())
    }
}
