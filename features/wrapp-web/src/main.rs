use tracing_subscriber::EnvFilter;
use wrapp_config::ConfigProvider;
use wrapp_di::{Bean, DiBuilder, DynError};
use wrapp_web::{
    DelegatingFilterProxyRegistration, EventListener, Filter, FilterRegistration,
    InitializerBeansConfig, ListenerRegistration, MultipartConfig, Servlet, ServletContext,
    ServletContextInitializer, ServletContextInitializerBeans, ServletRegistration, WebBeanExt,
};

// Run with `RUST_LOG=trace` to see how each bean is collected
fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let container = DiBuilder::new()
        .add_bean(Bean::new("dispatcherServlet", Dispatcher).as_servlet().order(0))
        .add_bean(Bean::new("requestLog", RequestLog).as_filter().order(10))
        .add_bean(
            Bean::new("cors", Cors)
                .as_filter()
                .order(-10)
                .resource("demo: cors"),
        )
        .add_bean(
            Bean::new(
                "securityFilterChain",
                DelegatingFilterProxyRegistration::new("springSecurityFilterChain")
                    .with_url_patterns(["/api/*"])
                    .with_order(-100),
            )
            .as_initializer(),
        )
        .add_bean(Bean::new("sessionListener", SessionCounter).as_listener())
        .add_bean(Bean::new("banner", Banner).as_custom_initializer())
        .add_bean(
            Bean::new(
                "multipartConfig",
                MultipartConfig {
                    location: "/tmp/uploads".to_string(),
                    max_file_size: Some(10 * 1024 * 1024),
                    ..Default::default()
                },
            )
            .as_multipart_config(),
        )
        .build()?;

    let mut configs = ConfigProvider::new();
    configs.add_config(InitializerBeansConfig::default())?;

    let initializers = ServletContextInitializerBeans::from_config(&container, &configs)?;

    let mut context = PrintingContext;
    for initializer in &initializers {
        initializer.on_startup(&mut context)?;
    }

    println!("{} initializers ran", initializers.len());
    Ok(())
}

struct Dispatcher;
impl Servlet for Dispatcher {}

struct RequestLog;
impl Filter for RequestLog {}

struct Cors;
impl Filter for Cors {}

struct SessionCounter;
impl EventListener for SessionCounter {}

struct Banner;
impl ServletContextInitializer for Banner {
    fn on_startup(&self, _context: &mut dyn ServletContext) -> Result<(), DynError> {
        println!("  banner: wrapp-web demo");
        Ok(())
    }
}

/// Prints every registration instead of serving anything
struct PrintingContext;
impl ServletContext for PrintingContext {
    fn add_servlet(&mut self, registration: &ServletRegistration) -> Result<(), DynError> {
        registration.servlet().init()?;
        let multipart = registration
            .multipart_config()
            .map(|config| config.location.as_str())
            .unwrap_or("none");
        println!("  servlet  {registration} multipart={multipart}");
        Ok(())
    }

    fn add_filter(&mut self, registration: &FilterRegistration) -> Result<(), DynError> {
        registration.filter().init()?;
        println!("  filter   {registration}");
        Ok(())
    }

    fn add_filter_proxy(
        &mut self,
        registration: &DelegatingFilterProxyRegistration,
    ) -> Result<(), DynError> {
        println!(
            "  filter   {registration} -> bean '{}'",
            registration.target_bean_name()
        );
        Ok(())
    }

    fn add_listener(&mut self, registration: &ListenerRegistration) -> Result<(), DynError> {
        println!("  listener {registration}");
        Ok(())
    }
}
