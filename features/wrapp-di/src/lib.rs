//! Wrapp DI - a registry of named beans.
//!
//! Beans are registered through typed [Bean] definitions. Each bean holds one shared instance
//! and exposes it as one or more views (e.g. `Arc<MyServlet>` and `Arc<dyn Servlet>`).
//! Once built, the [DiContainer] is read only and can be queried through [BeanFactory]:
//!
//! ```rust
//! use std::sync::Arc;
//! use wrapp_di::{Bean, BeanFactory, BeanFactoryExt, DiBuilder, TypeInfo};
//!
//! let container = DiBuilder::new()
//!     .add_bean(Bean::new("greeting", "hello".to_string()).expose_self().order(1))
//!     .build()
//!     .unwrap();
//!
//! let names = container.bean_names_for_type(TypeInfo::of::<Arc<String>>(), true, false);
//! assert_eq!(names, vec!["greeting"]);
//! assert_eq!(*container.get_bean::<Arc<String>>("greeting").unwrap(), "hello");
//! ```

pub mod builder;
pub mod container;
pub mod errors;
pub mod factory;
pub mod types;

pub use builder::{Bean, DiBuilder};
pub use container::DiContainer;
pub use errors::{RegisterError, RequireError};
pub use factory::{
    is_scoped_target, BeanFactory, BeanFactoryExt, DEFAULT_ORDER, SCOPED_TARGET_PREFIX,
};
pub use types::{DynError, Injectable, Instance, InstanceId, Scope, TypeInfo};
