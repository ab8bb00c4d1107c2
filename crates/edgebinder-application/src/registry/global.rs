//! Process-wide adapter registry

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::RuntimeAdapterRegistry;

static GLOBAL_REGISTRY: Lazy<Arc<RuntimeAdapterRegistry>> =
    Lazy::new(|| Arc::new(RuntimeAdapterRegistry::with_providers()));

/// The shared registry, seeded from compile-time registrations on first use
///
/// Adapter factories default to this registry. Code that needs isolation
/// (tests in particular) should pass its own [`RuntimeAdapterRegistry`].
pub fn global_registry() -> Arc<RuntimeAdapterRegistry> {
    Arc::clone(&GLOBAL_REGISTRY)
}
