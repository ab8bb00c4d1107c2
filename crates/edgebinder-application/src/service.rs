//! EdgeBinder service

use std::fmt;
use std::sync::Arc;

use edgebinder_domain::error::Result;
use edgebinder_domain::ports::PersistenceAdapter;
use edgebinder_domain::value_objects::{Binding, EntityRef};
use serde_json::Value;

/// Binding service wrapping one resolved adapter
#[derive(Clone)]
pub struct EdgeBinder {
    adapter: Arc<dyn PersistenceAdapter>,
}

impl EdgeBinder {
    /// Wrap an adapter
    pub fn new(adapter: Arc<dyn PersistenceAdapter>) -> Self {
        Self { adapter }
    }

    /// The underlying adapter
    pub fn adapter(&self) -> &Arc<dyn PersistenceAdapter> {
        &self.adapter
    }

    /// Adapter type name
    pub fn adapter_name(&self) -> &str {
        self.adapter.adapter_name()
    }

    /// Bind `from` to `to` and return the stored binding
    pub async fn bind(
        &self,
        from: EntityRef,
        to: EntityRef,
        binding_type: &str,
        metadata: impl IntoIterator<Item = (String, Value)>,
    ) -> Result<Binding> {
        let mut binding = Binding::new(from, to, binding_type);
        binding.metadata.extend(metadata);
        self.adapter.store(binding.clone()).await?;
        Ok(binding)
    }

    /// Look up a binding by id
    pub async fn find_binding(&self, id: &str) -> Result<Option<Binding>> {
        self.adapter.find(id).await
    }

    /// Remove a binding, returning whether it existed
    pub async fn unbind(&self, id: &str) -> Result<bool> {
        self.adapter.delete(id).await
    }

    /// Bindings originating at `entity`
    pub async fn bindings_from(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        self.adapter.find_from(entity).await
    }

    /// Bindings pointing at `entity`
    pub async fn bindings_to(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        self.adapter.find_to(entity).await
    }
}

impl fmt::Debug for EdgeBinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeBinder")
            .field("adapter", &self.adapter.adapter_name())
            .finish()
    }
}
