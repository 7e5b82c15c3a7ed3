use std::{
    any::{Any, TypeId},
    fmt::Debug,
    sync::Arc,
};

/// All errors must be Send + Sync
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Beans may be shared between threads once the container is built
/// So anything injectable needs to be Send + Sync + 'static
pub trait Injectable: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Injectable for T {}

/// Identity of a bean instance
///
/// Derived from the address of the shared allocation, so every view of the same `Arc`
/// (`Arc<MyServlet>`, `Arc<dyn Servlet>`, ...) has the same id, while two structurally
/// equal instances never do.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstanceId(usize);
impl InstanceId {
    pub fn of<T: ?Sized>(instance: &Arc<T>) -> Self {
        InstanceId(Arc::as_ptr(instance) as *const () as usize)
    }
}

/// Lifecycle scope of a bean definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    Singleton,
    Prototype,
}

/// A single view of a bean, erased to `Any`
///
/// The view is the value a bean exposes for one type, e.g. an `Arc<dyn Servlet>`.
#[derive(Clone)]
pub struct Instance {
    pub info: TypeInfo,
    pub id: InstanceId,
    pub instance: Arc<dyn Any + Send + Sync + 'static>,
}
impl Debug for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.info.type_name)
            .field("id", &self.id)
            .finish()
    }
}

impl Instance {
    pub(crate) fn new<View: Injectable>(id: InstanceId, view: View) -> Self {
        Instance {
            info: TypeInfo::of::<View>(),
            id,
            instance: Arc::new(view),
        }
    }

    /// Returns a clone of the view, or the actual type name if `T` does not match
    pub fn downcast<T: Injectable + Clone>(&self) -> Result<T, &'static str> {
        match self.instance.downcast_ref::<T>() {
            Some(view) => Ok(view.clone()),
            None => Err(self.info.type_name),
        }
    }
}

/// Type Name and Type Id
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub type_id: TypeId,
}
impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name)
    }
}
impl TypeInfo {
    pub fn of<T: 'static + ?Sized>() -> TypeInfo {
        TypeInfo {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Named: Send + Sync {}
    struct Thing;
    impl Named for Thing {}

    #[test]
    fn views_of_one_allocation_share_an_id() {
        let concrete = Arc::new(Thing);
        let erased: Arc<dyn Named> = concrete.clone();

        assert_eq!(InstanceId::of(&concrete), InstanceId::of(&erased));
        assert_ne!(InstanceId::of(&concrete), InstanceId::of(&Arc::new(Thing)));
    }

    #[test]
    fn downcast_reports_actual_type() {
        let instance = Instance::new(InstanceId::of(&Arc::new(1u8)), "text".to_string());

        assert_eq!(instance.downcast::<String>().as_deref(), Ok("text"));
        assert_eq!(
            instance.downcast::<u32>(),
            Err(std::any::type_name::<String>())
        );
    }
}
