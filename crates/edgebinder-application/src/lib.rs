//! # EdgeBinder - Application Layer
//!
//! Decides which storage adapter backs each EdgeBinder instance.
//!
//! ```text
//! container "config" ─→ instance config ─→ AdapterConfiguration ─→ adapter ─→ EdgeBinder
//!                                                   │
//!                                 registry first, container factory second
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use edgebinder_application::EdgeBinderFactory;
//!
//! let binder = EdgeBinderFactory::new().create_edge_binder(&container, "rag")?;
//! ```

pub mod factory;
pub mod registry;
pub mod service;

pub use factory::{
    AdapterResolver, EdgeBinderFactory, FactoryConvention, ResolutionStrategy, ResolvedAdapter,
};
pub use registry::{
    ADAPTER_PROVIDERS, AdapterProviderEntry, RuntimeAdapterRegistry, global_registry,
    list_adapter_providers,
};
pub use service::EdgeBinder;
