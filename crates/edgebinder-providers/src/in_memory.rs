//! In-memory persistence adapter
//!
//! Stores bindings in a concurrent hash map. Data is not persisted and is lost
//! when the adapter is dropped.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use edgebinder_domain::error::Result;
use edgebinder_domain::ports::PersistenceAdapter;
use edgebinder_domain::value_objects::{AdapterConfiguration, Binding, EntityRef};

/// Adapter type name used in configuration
pub const INMEMORY_ADAPTER: &str = "inmemory";

/// In-memory persistence adapter
///
/// Every instance owns its own map, so two EdgeBinder instances configured
/// with `inmemory` never see each other's bindings.
pub struct InMemoryAdapter {
    bindings: Arc<DashMap<String, Binding>>,
}

impl InMemoryAdapter {
    /// Create an empty in-memory adapter
    pub fn new() -> Self {
        Self {
            bindings: Arc::new(DashMap::new()),
        }
    }

    fn matching(&self, predicate: impl Fn(&Binding) -> bool) -> Vec<Binding> {
        let mut bindings: Vec<Binding> = self
            .bindings
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        bindings.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        bindings
    }
}

impl Default for InMemoryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersistenceAdapter for InMemoryAdapter {
    fn adapter_name(&self) -> &str {
        INMEMORY_ADAPTER
    }

    async fn store(&self, binding: Binding) -> Result<()> {
        self.bindings.insert(binding.id.clone(), binding);
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Binding>> {
        Ok(self.bindings.get(id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.bindings.remove(id).is_some())
    }

    async fn find_from(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        Ok(self.matching(|binding| &binding.from == entity))
    }

    async fn find_to(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        Ok(self.matching(|binding| &binding.to == entity))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.bindings.len())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use edgebinder_application::registry::{ADAPTER_PROVIDERS, AdapterProviderEntry};

/// Factory function for creating in-memory adapter instances.
fn in_memory_adapter_factory(
    _config: &AdapterConfiguration,
) -> Result<Arc<dyn PersistenceAdapter>> {
    Ok(Arc::new(InMemoryAdapter::new()))
}

#[linkme::distributed_slice(ADAPTER_PROVIDERS)]
static INMEMORY_PROVIDER: AdapterProviderEntry = AdapterProviderEntry {
    name: INMEMORY_ADAPTER,
    description: "In-memory binding storage (fast, non-persistent)",
    factory: in_memory_adapter_factory,
};
