//! Weaviate adapter implementation
//!
//! Each binding is one object in the configured collection, keyed by the
//! binding id. Its properties are the binding's JSON form.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use edgebinder_domain::error::{Error, Result};
use edgebinder_domain::ports::PersistenceAdapter;
use edgebinder_domain::value_objects::{AdapterConfiguration, Binding, EntityRef};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::debug;

use super::client::WeaviateClient;
use super::{
    AUTO_CREATE_KEY, COLLECTION_NAME_KEY, DEFAULT_COLLECTION_NAME, SCHEMA_KEY, WEAVIATE_ADAPTER,
};

/// Adapter settings derived from the instance configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaviateSettings {
    /// Collection holding the binding objects
    pub collection_name: String,
    /// Create the collection before first use
    pub auto_create: bool,
}

impl WeaviateSettings {
    /// Read `collection_name` and `schema` from the instance configuration
    pub fn from_config(config: &AdapterConfiguration) -> Result<Self> {
        let collection_name = config
            .instance_str_or(COLLECTION_NAME_KEY, DEFAULT_COLLECTION_NAME)?
            .to_string();

        let auto_create = match config.instance_value(SCHEMA_KEY) {
            None | Some(Value::Null) => true,
            Some(Value::Object(schema)) => match schema.get(AUTO_CREATE_KEY) {
                None | Some(Value::Null) => true,
                Some(Value::Bool(auto_create)) => *auto_create,
                Some(other) => {
                    return Err(Error::invalid_configuration_value(
                        format!("{SCHEMA_KEY}.{AUTO_CREATE_KEY}"),
                        other,
                        "bool",
                    ));
                }
            },
            Some(other) => {
                return Err(Error::invalid_configuration_value(
                    SCHEMA_KEY, other, "array",
                ));
            }
        };

        Ok(Self {
            collection_name,
            auto_create,
        })
    }
}

impl Default for WeaviateSettings {
    fn default() -> Self {
        Self {
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            auto_create: true,
        }
    }
}

/// Persistence adapter storing bindings as Weaviate objects
pub struct WeaviateAdapter {
    client: Arc<dyn WeaviateClient>,
    settings: WeaviateSettings,
    collection_ready: OnceCell<()>,
}

impl WeaviateAdapter {
    /// Create an adapter over `client`
    pub fn new(client: Arc<dyn WeaviateClient>, settings: WeaviateSettings) -> Self {
        Self {
            client,
            settings,
            collection_ready: OnceCell::new(),
        }
    }

    /// Active settings
    pub fn settings(&self) -> &WeaviateSettings {
        &self.settings
    }

    /// Collection holding the bindings
    pub fn collection_name(&self) -> &str {
        &self.settings.collection_name
    }

    async fn ensure_collection(&self) -> Result<()> {
        if !self.settings.auto_create {
            return Ok(());
        }
        self.collection_ready
            .get_or_try_init(|| async {
                debug!(collection = %self.settings.collection_name, "Ensuring Weaviate collection");
                self.client
                    .ensure_collection(&self.settings.collection_name)
                    .await
            })
            .await?;
        Ok(())
    }

    async fn all_bindings(&self) -> Result<Vec<Binding>> {
        self.ensure_collection().await?;
        self.client
            .list_objects(&self.settings.collection_name)
            .await?
            .into_iter()
            .map(|properties| serde_json::from_value(properties).map_err(Error::from))
            .collect()
    }

    async fn matching(&self, predicate: impl Fn(&Binding) -> bool) -> Result<Vec<Binding>> {
        let mut bindings = self.all_bindings().await?;
        bindings.retain(|binding| predicate(binding));
        // Oldest first
        bindings.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(bindings)
    }
}

#[async_trait]
impl PersistenceAdapter for WeaviateAdapter {
    fn adapter_name(&self) -> &str {
        WEAVIATE_ADAPTER
    }

    async fn store(&self, binding: Binding) -> Result<()> {
        self.ensure_collection().await?;
        let properties = serde_json::to_value(&binding)?;
        self.client
            .upsert_object(&self.settings.collection_name, &binding.id, properties)
            .await
    }

    async fn find(&self, id: &str) -> Result<Option<Binding>> {
        self.ensure_collection().await?;
        match self
            .client
            .get_object(&self.settings.collection_name, id)
            .await?
        {
            Some(properties) => Ok(Some(serde_json::from_value(properties)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        self.ensure_collection().await?;
        self.client
            .delete_object(&self.settings.collection_name, id)
            .await
    }

    async fn find_from(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        self.matching(|binding| &binding.from == entity).await
    }

    async fn find_to(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        self.matching(|binding| &binding.to == entity).await
    }

    async fn count(&self) -> Result<usize> {
        self.ensure_collection().await?;
        Ok(self
            .client
            .list_objects(&self.settings.collection_name)
            .await?
            .len())
    }
}

impl fmt::Debug for WeaviateAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeaviateAdapter")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
