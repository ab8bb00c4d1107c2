//! Adapter Registry System
//!
//! Framework-agnostic directory of adapter types. Adapter crates register
//! their constructors at compile time through the `linkme` crate; the runtime
//! registry is seeded from those entries and can be extended or cleared by the
//! host.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Adapter Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Adapter defines:   #[linkme::distributed_slice(ADAPTERS)]   │
//! │                        static ENTRY: AdapterProviderEntry = ..  │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static ADAPTER_PROVIDERS: [..] = [..]│
//! │                              ↓                                  │
//! │  3. Runtime registry:  RuntimeAdapterRegistry::with_providers() │
//! │                              ↓                                  │
//! │  4. Config selects:    "adapter = inmemory" → InMemoryAdapter   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering an Adapter (in edgebinder-providers)
//!
//! ```ignore
//! use edgebinder_application::registry::{AdapterProviderEntry, ADAPTER_PROVIDERS};
//!
//! #[linkme::distributed_slice(ADAPTER_PROVIDERS)]
//! static INMEMORY_ADAPTER: AdapterProviderEntry = AdapterProviderEntry {
//!     name: "inmemory",
//!     description: "In-memory binding storage",
//!     factory: |_config| Ok(Arc::new(InMemoryAdapter::new())),
//! };
//! ```

pub mod global;
pub mod runtime;

use std::sync::Arc;

use edgebinder_domain::error::Result;
use edgebinder_domain::ports::PersistenceAdapter;
use edgebinder_domain::value_objects::AdapterConfiguration;

pub use global::global_registry;
pub use runtime::{AdapterConstructor, RuntimeAdapterRegistry};

/// Registry entry for adapter constructors
///
/// Each adapter implementation registers itself with this entry using
/// `#[linkme::distributed_slice(ADAPTER_PROVIDERS)]`.
pub struct AdapterProviderEntry {
    /// Unique adapter type (e.g. "inmemory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Constructor building the adapter from its configuration
    pub factory: fn(&AdapterConfiguration) -> Result<Arc<dyn PersistenceAdapter>>,
}

/// Compile-time collection of adapter constructors
#[linkme::distributed_slice]
pub static ADAPTER_PROVIDERS: [AdapterProviderEntry] = [..];

/// List all compile-time registered adapters
///
/// Returns `(name, description)` tuples. Useful for CLI help.
pub fn list_adapter_providers() -> Vec<(&'static str, &'static str)> {
    ADAPTER_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
