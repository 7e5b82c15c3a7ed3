use crate::{
    errors::RequireError,
    types::{Injectable, Instance, TypeInfo},
};

/// Name prefix of the hidden target behind a scoped proxy
pub const SCOPED_TARGET_PREFIX: &str = "scopedTarget.";

/// Ordering used when a bean declares none
pub const DEFAULT_ORDER: i32 = 0;

/// Returns true if `name` is the target bean hidden behind a scoped proxy
pub fn is_scoped_target(name: &str) -> bool {
    name.starts_with(SCOPED_TARGET_PREFIX)
}

/// A registry which can list and resolve beans by name and type
///
/// Lookups are synchronous and read only. The types passed in are the types of the views
/// a bean exposes, e.g. `TypeInfo::of::<Arc<dyn Servlet>>()`.
pub trait BeanFactory {
    /// Returns the names of all beans exposing `type_info`, in registration order
    fn bean_names_for_type(
        &self,
        type_info: TypeInfo,
        include_non_singletons: bool,
        allow_eager_init: bool,
    ) -> Vec<String>;

    /// Resolves the view of bean `name` for `type_info`
    fn bean(&self, name: &str, type_info: TypeInfo) -> Result<Instance, RequireError>;

    /// Returns true if `name` is the target of a scoped proxy and should not be used directly
    fn is_scoped_target(&self, name: &str) -> bool {
        is_scoped_target(name)
    }

    /// Where the bean was defined, only used for diagnostics
    fn resource_description(&self, name: &str) -> Option<String>;

    /// Ordering metric of an instance - lower sorts first
    fn order_of(&self, instance: &Instance) -> i32;
}

/// Typed lookups for any [BeanFactory]
pub trait BeanFactoryExt: BeanFactory {
    /// Resolves bean `name` as `T`
    fn get_bean<T: Injectable + Clone>(&self, name: &str) -> Result<T, RequireError> {
        let instance = self.bean(name, TypeInfo::of::<T>())?;
        instance
            .downcast()
            .map_err(|actual_type| RequireError::DowncastFailed {
                required_type: std::any::type_name::<T>(),
                actual_type,
            })
    }
}
impl<Factory: BeanFactory + ?Sized> BeanFactoryExt for Factory {}
