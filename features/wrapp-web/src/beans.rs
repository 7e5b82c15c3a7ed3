use std::{collections::HashSet, sync::Arc};

use indexmap::IndexMap;
use tracing::Level;
use wrapp_config::ConfigProvider;
use wrapp_di::{
    errors::RequireError,
    factory::BeanFactory,
    types::{Injectable, TypeInfo},
};

use crate::{
    config::InitializerBeansConfig,
    discovery::{ordered_beans_of_type, DiscoveredBean},
    errors::InitializerBeansError,
    registration::{
        FilterRegistration, Initializer, InitializerType, ListenerRegistration,
        ServletRegistration,
    },
    seen::{Category, RawSource, Seen},
    servlet::{EventListener, Filter, MultipartConfig, Servlet},
};

/// Placeholder for beans without a resource description
const UNKNOWN_RESOURCE: &str = "unknown";

/// All initializers of a container, in the order they should run
///
/// Collected in two passes:
/// 1. Beans which already are initializers, grouped by the [Category] of their shape.
///    A bean matching several initializer types is collected once
/// 2. Raw servlet, filter and listener beans not claimed by pass 1, each adapted into a
///    default registration
///
/// Groups keep the order they were first created in, entries inside a group are sorted by
/// their ordering metric. The result is immutable.
#[derive(Debug)]
pub struct ServletContextInitializerBeans {
    sorted: Vec<Initializer>,
}

impl ServletContextInitializerBeans {
    /// Collects using the default [InitializerBeansConfig]
    pub fn new<F: BeanFactory + ?Sized>(factory: &F) -> Result<Self, InitializerBeansError> {
        Self::with_config(factory, &InitializerBeansConfig::default())
    }

    /// Collects explicit initializers exposed as one of `initializer_types`
    ///
    /// An empty list scans the default [Initializer] view.
    pub fn with_types<F: BeanFactory + ?Sized>(
        factory: &F,
        initializer_types: impl IntoIterator<Item = InitializerType>,
    ) -> Result<Self, InitializerBeansError> {
        let config = InitializerBeansConfig {
            initializer_types: initializer_types.into_iter().collect(),
            ..Default::default()
        };
        Self::with_config(factory, &config)
    }

    /// Collects using the [InitializerBeansConfig] registered in `configs`, or its default
    pub fn from_config<F: BeanFactory + ?Sized>(
        factory: &F,
        configs: &ConfigProvider,
    ) -> Result<Self, InitializerBeansError> {
        let config = configs.get_config_or_default::<InitializerBeansConfig>()?;
        Self::with_config(factory, &config)
    }

    pub fn with_config<F: BeanFactory + ?Sized>(
        factory: &F,
        config: &InitializerBeansConfig,
    ) -> Result<Self, InitializerBeansError> {
        let mut collector = Collector::new(factory, config);
        collector.add_initializer_beans()?;
        collector.add_adaptable_beans()?;

        if config.log_mappings {
            log_mappings(&collector.initializers);
        }

        let sorted: Vec<Initializer> = collector
            .initializers
            .into_values()
            .flat_map(|mut group| {
                group.sort_by_key(|entry| entry.order);
                group.into_iter().map(|entry| entry.initializer)
            })
            .collect();

        tracing::debug!("Collected {} servlet context initializers", sorted.len());
        Ok(Self { sorted })
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Initializer> {
        self.sorted.iter()
    }
}

impl<'a> IntoIterator for &'a ServletContextInitializerBeans {
    type Item = &'a Initializer;
    type IntoIter = std::slice::Iter<'a, Initializer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

struct OrderedInitializer {
    order: i32,
    initializer: Initializer,
}

/// State of a single collection run
struct Collector<'a, F: ?Sized> {
    factory: &'a F,
    config: &'a InitializerBeansConfig,
    seen: Seen,
    /// Initializer beans already collected by an earlier initializer type
    collected: HashSet<RawSource>,
    /// Groups in first insertion order
    initializers: IndexMap<Category, Vec<OrderedInitializer>>,
}

impl<'a, F: BeanFactory + ?Sized> Collector<'a, F> {
    fn new(factory: &'a F, config: &'a InitializerBeansConfig) -> Self {
        Self {
            factory,
            config,
            seen: Seen::default(),
            collected: HashSet::new(),
            initializers: IndexMap::new(),
        }
    }

    fn add(&mut self, category: Category, order: i32, initializer: Initializer) {
        self.initializers
            .entry(category)
            .or_default()
            .push(OrderedInitializer { order, initializer });
    }

    // ###############################################
    // Pass 1 - beans which already are initializers

    fn add_initializer_beans(&mut self) -> Result<(), RequireError> {
        let default_types = [InitializerType::default()];
        let config = self.config;
        let initializer_types = match config.initializer_types.is_empty() {
            true => &default_types[..],
            false => &config.initializer_types[..],
        };

        for initializer_type in initializer_types {
            let info = initializer_type.info();
            for bean in ordered_beans_of_type(self.factory, info, &self.collected)? {
                let initializer = initializer_type.convert(&bean.instance).ok_or_else(|| {
                    RequireError::DowncastFailed {
                        required_type: info.type_name,
                        actual_type: bean.instance.info.type_name,
                    }
                })?;
                self.add_initializer_bean(&bean, initializer);
            }
        }

        Ok(())
    }

    /// Explicit initializers are always added, their source only shadows raw beans
    fn add_initializer_bean(&mut self, bean: &DiscoveredBean, initializer: Initializer) {
        let (category, source) = initializer.classify();
        self.seen.add(category, source);
        self.collected.insert(RawSource::Instance(bean.instance.id));

        if tracing::enabled!(Level::TRACE) {
            let resource = resource_description(self.factory, &bean.name);
            tracing::trace!(
                "Added existing {category} initializer bean '{}'; order={}, resource={resource}",
                bean.name,
                bean.order
            );
        }

        self.add(category, bean.order, initializer);
    }

    // ###############################################
    // Pass 2 - raw beans not claimed by an initializer

    fn add_adaptable_beans(&mut self) -> Result<(), RequireError> {
        let multipart_config = self.multipart_config()?;
        let servlet_mapping = self.config.default_servlet_mapping.clone();

        self.add_adapted_beans::<Arc<dyn Servlet>>(Category::Servlet, |name, servlet, order| {
            let registration = ServletRegistration::new(servlet, [servlet_mapping.as_str()])
                .with_name(name)
                .with_multipart_config(multipart_config.clone())
                .with_order(order);
            Initializer::Servlet(Arc::new(registration))
        })?;
        self.add_adapted_beans::<Arc<dyn Filter>>(Category::Filter, |name, filter, order| {
            let registration = FilterRegistration::new(filter)
                .with_name(name)
                .with_order(order);
            Initializer::Filter(Arc::new(registration))
        })?;
        self.add_adapted_beans::<Arc<dyn EventListener>>(
            Category::Listener,
            |name, listener, order| {
                let registration = ListenerRegistration::new(listener)
                    .with_name(name)
                    .with_order(order);
                Initializer::Listener(Arc::new(registration))
            },
        )?;

        Ok(())
    }

    fn add_adapted_beans<Raw: Injectable + Clone>(
        &mut self,
        category: Category,
        adapt: impl Fn(&str, Raw, i32) -> Initializer,
    ) -> Result<(), RequireError> {
        let beans = ordered_beans_of_type(self.factory, TypeInfo::of::<Raw>(), &HashSet::new())?;

        for bean in beans {
            let raw = bean.view::<Raw>()?;
            if !self.seen.add(category, RawSource::Instance(bean.instance.id)) {
                tracing::trace!(
                    "Skipped {category} bean '{}', it is already registered",
                    bean.name
                );
                continue;
            }

            tracing::trace!(
                "Adapted {category} bean '{}'; order={}",
                bean.name,
                bean.order
            );
            let initializer = adapt(&bean.name, raw, bean.order);
            self.add(category, bean.order, initializer);
        }

        Ok(())
    }

    /// The first multipart config by order, if any
    fn multipart_config(&self) -> Result<Option<Arc<MultipartConfig>>, RequireError> {
        let beans = ordered_beans_of_type(
            self.factory,
            TypeInfo::of::<Arc<MultipartConfig>>(),
            &HashSet::new(),
        )?;

        beans
            .first()
            .map(|bean| bean.view::<Arc<MultipartConfig>>())
            .transpose()
    }
}

fn resource_description<F: BeanFactory + ?Sized>(factory: &F, name: &str) -> String {
    factory
        .resource_description(name)
        .unwrap_or_else(|| UNKNOWN_RESOURCE.to_string())
}

fn log_mappings(initializers: &IndexMap<Category, Vec<OrderedInitializer>>) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    for (name, category) in [("filters", Category::Filter), ("servlets", Category::Servlet)] {
        let info = initializers
            .get(&category)
            .into_iter()
            .flatten()
            .map(|entry| entry.initializer.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::debug!("Mapping {name}: {info}");
    }
}
