//! EdgeBinder factory
//!
//! Resolution pipeline from a host container to an [`EdgeBinder`](crate::EdgeBinder):
//!
//! | Step | Module | Output |
//! |------|--------|--------|
//! | 1 | [`instance`] | instance configuration (named or legacy flat form) |
//! | 2 | [`builder`] | immutable `AdapterConfiguration` |
//! | 3 | [`engine`] | adapter from the registry or a container factory |
//! | 4 | [`edge_binder`] | `EdgeBinder` wrapping the adapter |

pub mod builder;
pub mod edge_binder;
pub mod engine;
pub mod instance;

pub use builder::build_adapter_configuration;
pub use edge_binder::EdgeBinderFactory;
pub use engine::{
    AdapterResolver, FactoryConvention, ResolutionStrategy, ResolvedAdapter, adapter_type,
};
pub use instance::{get_configuration, resolve_instance_config};
