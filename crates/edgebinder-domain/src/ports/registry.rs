//! Adapter registry port

use std::sync::Arc;

use super::PersistenceAdapter;
use crate::error::Result;
use crate::value_objects::AdapterConfiguration;

/// Directory of adapter types to adapter constructors
///
/// Framework agnostic: an entry here takes priority over any container-based
/// factory for the same adapter type.
pub trait AdapterRegistry: Send + Sync {
    /// Whether a constructor is registered for `adapter_type` (exact match)
    fn has_adapter(&self, adapter_type: &str) -> bool;

    /// Build an adapter of `adapter_type` from `config`
    fn create(
        &self,
        adapter_type: &str,
        config: &AdapterConfiguration,
    ) -> Result<Arc<dyn PersistenceAdapter>>;

    /// Registered adapter types, sorted
    fn registered_types(&self) -> Vec<String>;
}
