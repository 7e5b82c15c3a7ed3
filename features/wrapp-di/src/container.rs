use std::{
    any::TypeId,
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
};

use crate::{
    errors::RequireError,
    factory::{BeanFactory, DEFAULT_ORDER},
    types::{Instance, InstanceId, Scope, TypeInfo},
};

/// A frozen bean definition
#[derive(Clone)]
pub(crate) struct BeanDefinition {
    pub name: String,
    pub id: InstanceId,
    pub views: HashMap<TypeId, Instance>,
    pub order: Option<i32>,
    pub scope: Scope,
    pub resource_description: Option<String>,
}

/// Container holding all registered beans
#[derive(Clone)]
pub struct DiContainer(pub Arc<DiContainerInner>);
pub struct DiContainerInner {
    definitions: Vec<BeanDefinition>,
    by_name: HashMap<String, usize>,
    /// Ordering metric per instance - the first definition declaring one wins
    orders: HashMap<InstanceId, i32>,
}
impl Debug for DiContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_struct("DiContainer");
        for definition in &self.0.definitions {
            let views: Vec<&'static str> = definition
                .views
                .values()
                .map(|view| view.info.type_name)
                .collect();
            map.field(&definition.name, &views);
        }
        map.finish()
    }
}

impl DiContainer {
    pub(crate) fn new(definitions: Vec<BeanDefinition>) -> Self {
        let by_name = definitions
            .iter()
            .enumerate()
            .map(|(index, definition)| (definition.name.clone(), index))
            .collect();

        let mut orders = HashMap::new();
        for definition in &definitions {
            if let Some(order) = definition.order {
                orders.entry(definition.id).or_insert(order);
            }
        }

        Self(Arc::new(DiContainerInner {
            definitions,
            by_name,
            orders,
        }))
    }

    pub fn len(&self) -> usize {
        self.0.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.definitions.is_empty()
    }

    pub fn contains_bean(&self, name: &str) -> bool {
        self.0.by_name.contains_key(name)
    }

    fn definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.0
            .by_name
            .get(name)
            .map(|index| &self.0.definitions[*index])
    }
}

impl BeanFactory for DiContainer {
    fn bean_names_for_type(
        &self,
        type_info: TypeInfo,
        include_non_singletons: bool,
        allow_eager_init: bool,
    ) -> Vec<String> {
        // Views are registered up front, matching never has to initialise a bean
        let _ = allow_eager_init;

        self.0
            .definitions
            .iter()
            .filter(|definition| definition.views.contains_key(&type_info.type_id))
            .filter(|definition| include_non_singletons || definition.scope == Scope::Singleton)
            .map(|definition| definition.name.clone())
            .collect()
    }

    fn bean(&self, name: &str, type_info: TypeInfo) -> Result<Instance, RequireError> {
        let Some(definition) = self.definition(name) else {
            tracing::trace!("Tried to require an unregistered bean: '{name}'");
            return Err(RequireError::BeanMissing(name.to_string()));
        };

        definition
            .views
            .get(&type_info.type_id)
            .cloned()
            .ok_or_else(|| RequireError::TypeMismatch {
                name: name.to_string(),
                required_type: type_info.type_name,
            })
    }

    fn resource_description(&self, name: &str) -> Option<String> {
        self.definition(name)
            .and_then(|definition| definition.resource_description.clone())
    }

    fn order_of(&self, instance: &Instance) -> i32 {
        self.0
            .orders
            .get(&instance.id)
            .copied()
            .unwrap_or(DEFAULT_ORDER)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        builder::{Bean, DiBuilder},
        factory::BeanFactoryExt,
    };

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }
    struct English;
    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }
    struct German;
    impl Greeter for German {
        fn greet(&self) -> String {
            "hallo".to_string()
        }
    }

    fn greeters() -> DiContainer {
        DiBuilder::new()
            .add_bean(
                Bean::new("english", English)
                    .expose(|it| it as Arc<dyn Greeter>)
                    .order(3)
                    .resource("greeters.rs"),
            )
            .add_bean(Bean::new("count", 7u32).expose_self())
            .add_bean(
                Bean::new("german", German)
                    .expose(|it| it as Arc<dyn Greeter>)
                    .scope(Scope::Prototype),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn names_for_type_are_in_registration_order() {
        let container = greeters();
        let greeter = TypeInfo::of::<Arc<dyn Greeter>>();

        assert_eq!(
            container.bean_names_for_type(greeter, true, false),
            vec!["english", "german"]
        );
        assert_eq!(
            container.bean_names_for_type(greeter, false, false),
            vec!["english"]
        );
        assert!(container
            .bean_names_for_type(TypeInfo::of::<String>(), true, false)
            .is_empty());
    }

    #[test]
    fn typed_lookup_resolves_views() {
        let container = greeters();

        let greeter = container.get_bean::<Arc<dyn Greeter>>("german").unwrap();
        assert_eq!(greeter.greet(), "hallo");
        assert_eq!(*container.get_bean::<Arc<u32>>("count").unwrap(), 7);
    }

    #[test]
    fn lookup_errors() {
        let container = greeters();

        assert_eq!(
            container.get_bean::<Arc<u32>>("missing").err(),
            Some(RequireError::BeanMissing("missing".to_string()))
        );
        assert_eq!(
            container.get_bean::<Arc<u32>>("english").err(),
            Some(RequireError::TypeMismatch {
                name: "english".to_string(),
                required_type: std::any::type_name::<Arc<u32>>(),
            })
        );
    }

    #[test]
    fn order_and_resource_metadata() {
        let container = greeters();
        let greeter = TypeInfo::of::<Arc<dyn Greeter>>();

        let english = container.bean("english", greeter).unwrap();
        let german = container.bean("german", greeter).unwrap();
        assert_eq!(container.order_of(&english), 3);
        assert_eq!(container.order_of(&german), DEFAULT_ORDER);

        assert_eq!(
            container.resource_description("english").as_deref(),
            Some("greeters.rs")
        );
        assert_eq!(container.resource_description("german"), None);
    }

    #[test]
    fn shared_instance_keeps_first_declared_order() {
        let shared = Arc::new(English);
        let container = DiBuilder::new()
            .add_bean(Bean::shared("first", shared.clone()).expose_self())
            .add_bean(Bean::shared("second", shared).expose_self().order(5))
            .add_bean(Bean::new("third", English).expose_self().order(1))
            .build()
            .unwrap();
        let info = TypeInfo::of::<Arc<English>>();

        let first = container.bean("first", info).unwrap();
        let second = container.bean("second", info).unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(container.order_of(&first), 5);
    }

    #[test]
    fn scoped_proxy_registers_hidden_target() {
        let container = DiBuilder::new()
            .add_bean(Bean::new("session", English).expose_self().scoped_proxy())
            .build()
            .unwrap();

        let names = container.bean_names_for_type(TypeInfo::of::<Arc<English>>(), true, false);
        assert_eq!(names, vec!["session", "scopedTarget.session"]);
        assert!(container.is_scoped_target("scopedTarget.session"));
        assert!(!container.is_scoped_target("session"));
    }
}
