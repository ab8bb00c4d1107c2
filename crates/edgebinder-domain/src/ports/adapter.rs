//! Persistence adapter port

use std::fmt;

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Binding, EntityRef};

/// Storage backend for bindings
///
/// Implementations are produced by the resolution engine and owned by the
/// `EdgeBinder` service that wraps them.
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Adapter type name for diagnostics (e.g. "inmemory")
    fn adapter_name(&self) -> &str;

    /// Store a binding, replacing any binding with the same id
    async fn store(&self, binding: Binding) -> Result<()>;

    /// Look up a binding by id
    async fn find(&self, id: &str) -> Result<Option<Binding>>;

    /// Delete a binding by id, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// All bindings whose source is `entity`
    async fn find_from(&self, entity: &EntityRef) -> Result<Vec<Binding>>;

    /// All bindings whose target is `entity`
    async fn find_to(&self, entity: &EntityRef) -> Result<Vec<Binding>>;

    /// Number of stored bindings
    async fn count(&self) -> Result<usize>;
}

impl fmt::Debug for dyn PersistenceAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PersistenceAdapter")
            .field(&self.adapter_name())
            .finish()
    }
}
