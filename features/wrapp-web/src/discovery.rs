use std::collections::HashSet;

use wrapp_di::{
    errors::RequireError,
    factory::BeanFactory,
    types::{Injectable, Instance, TypeInfo},
};

use crate::seen::RawSource;

/// A bean found by [ordered_beans_of_type]
#[derive(Debug, Clone)]
pub(crate) struct DiscoveredBean {
    pub name: String,
    pub instance: Instance,
    pub order: i32,
}

impl DiscoveredBean {
    /// The discovered view as `T`
    pub fn view<T: Injectable + Clone>(&self) -> Result<T, RequireError> {
        self.instance
            .downcast()
            .map_err(|actual_type| RequireError::DowncastFailed {
                required_type: std::any::type_name::<T>(),
                actual_type,
            })
    }
}

/// Finds all beans exposing `type_info`, sorted by their ordering metric
///
/// Scoped proxy targets and everything in `exclude` (by name or by instance) are skipped.
/// An instance reachable through several names is returned once, under its first name.
/// Beans with the same order keep the order the factory listed them in.
pub(crate) fn ordered_beans_of_type<F: BeanFactory + ?Sized>(
    factory: &F,
    type_info: TypeInfo,
    exclude: &HashSet<RawSource>,
) -> Result<Vec<DiscoveredBean>, RequireError> {
    let names = factory.bean_names_for_type(type_info, true, false);
    let mut instances = HashSet::new();
    let mut beans = Vec::with_capacity(names.len());

    for name in names {
        if factory.is_scoped_target(&name) || exclude.contains(&RawSource::BeanName(name.clone())) {
            continue;
        }

        let instance = factory.bean(&name, type_info)?;
        if exclude.contains(&RawSource::Instance(instance.id)) || !instances.insert(instance.id) {
            continue;
        }

        let order = factory.order_of(&instance);
        beans.push(DiscoveredBean {
            name,
            instance,
            order,
        });
    }

    beans.sort_by_key(|bean| bean.order);
    Ok(beans)
}
