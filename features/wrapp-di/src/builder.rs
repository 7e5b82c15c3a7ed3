use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    container::{BeanDefinition, DiContainer},
    errors::RegisterError,
    factory::SCOPED_TARGET_PREFIX,
    types::{Injectable, Instance, InstanceId, Scope},
};

//////////////////////////////////////////////////////////////////////
///
/// Registration consists of two parts.
/// 1. A typed [Bean] describing one instance and the views it exposes
/// 2. The [DiBuilder] collecting all beans and freezing them into a [DiContainer]

/// A typed bean definition
///
/// The instance is shared, every exposed view is derived from the same `Arc`.
pub struct Bean<T: Injectable> {
    name: String,
    instance: Arc<T>,
    views: Vec<Instance>,
    order: Option<i32>,
    scope: Scope,
    resource_description: Option<String>,
    scoped_proxy: bool,
}

impl<T: Injectable> Bean<T> {
    pub fn new(name: impl Into<String>, instance: T) -> Self {
        Self::shared(name, Arc::new(instance))
    }

    /// Registers an already shared instance, e.g. one that is also held by another bean
    pub fn shared(name: impl Into<String>, instance: Arc<T>) -> Self {
        Bean {
            name: name.into(),
            instance,
            views: Vec::new(),
            order: None,
            scope: Scope::Singleton,
            resource_description: None,
            scoped_proxy: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance(&self) -> &Arc<T> {
        &self.instance
    }

    /// Exposes the bean as `View` - replaces an earlier view of the same type
    pub fn expose<View: Injectable + Clone>(mut self, view: impl FnOnce(Arc<T>) -> View) -> Self {
        let view = Instance::new(InstanceId::of(&self.instance), view(self.instance.clone()));
        self.views
            .retain(|existing| existing.info.type_id != view.info.type_id);
        self.views.push(view);
        self
    }

    /// Exposes the bean as `Arc<T>`
    pub fn expose_self(self) -> Self {
        self.expose(|instance| instance)
    }

    /// Sets the ordering metric of the bean
    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the ordering metric only if none was set yet
    pub fn default_order(mut self, order: Option<i32>) -> Self {
        if self.order.is_none() {
            self.order = order;
        }
        self
    }

    pub fn scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Describes where the bean was defined
    pub fn resource(mut self, description: impl Into<String>) -> Self {
        self.resource_description = Some(description.into());
        self
    }

    /// Registers an additional hidden `scopedTarget.<name>` bean behind this one
    pub fn scoped_proxy(mut self) -> Self {
        self.scoped_proxy = true;
        self
    }

    fn into_definitions(self) -> Vec<BeanDefinition> {
        let id = InstanceId::of(&self.instance);
        let views: HashMap<TypeId, Instance> = self
            .views
            .into_iter()
            .map(|view| (view.info.type_id, view))
            .collect();

        let definition = BeanDefinition {
            name: self.name,
            id,
            views,
            order: self.order,
            scope: self.scope,
            resource_description: self.resource_description,
        };

        if !self.scoped_proxy {
            return vec![definition];
        }

        let target = BeanDefinition {
            name: format!("{SCOPED_TARGET_PREFIX}{}", definition.name),
            ..definition.clone()
        };
        vec![definition, target]
    }
}

#[derive(Default)]
pub struct DiBuilder {
    /// Registered definitions in registration order
    pub(crate) definitions: Vec<BeanDefinition>,
}

impl DiBuilder {
    pub fn new() -> Self {
        DiBuilder {
            definitions: Vec::new(),
        }
    }

    pub fn add_bean<T: Injectable>(mut self, bean: Bean<T>) -> Self {
        self.definitions.extend(bean.into_definitions());
        self
    }

    /// Validates all definitions and freezes them into a container
    pub fn build(self) -> Result<DiContainer, RegisterError> {
        let mut names = HashSet::new();
        for definition in &self.definitions {
            if definition.name.is_empty() {
                return Err(RegisterError::EmptyName);
            }
            if !names.insert(definition.name.as_str()) {
                return Err(RegisterError::DuplicateBean(definition.name.clone()));
            }
        }

        tracing::debug!(
            "Building container with {} bean definitions",
            self.definitions.len()
        );

        Ok(DiContainer::new(self.definitions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_are_rejected() {
        let result = DiBuilder::new()
            .add_bean(Bean::new("a", 1u32).expose_self())
            .add_bean(Bean::new("a", 2u32).expose_self())
            .build();

        assert_eq!(
            result.err(),
            Some(RegisterError::DuplicateBean("a".to_string()))
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        let result = DiBuilder::new()
            .add_bean(Bean::new("", 1u32))
            .build();

        assert_eq!(result.err(), Some(RegisterError::EmptyName));
    }

    #[test]
    fn scoped_proxy_clashing_with_an_explicit_target_is_a_duplicate() {
        let result = DiBuilder::new()
            .add_bean(Bean::new("session", 1u32).scoped_proxy())
            .add_bean(Bean::new("scopedTarget.session", 2u32))
            .build();

        assert_eq!(
            result.err(),
            Some(RegisterError::DuplicateBean(
                "scopedTarget.session".to_string()
            ))
        );
    }

    #[test]
    fn default_order_does_not_override_explicit_order() {
        let bean = Bean::new("a", 1u32).order(4).default_order(Some(9));
        assert_eq!(bean.order, Some(4));

        let bean = Bean::new("b", 1u32).default_order(Some(9)).order(2);
        assert_eq!(bean.order, Some(2));
    }
}
