//! Weaviate client port
//!
//! The object operations the adapter needs from a Weaviate connection. The
//! host supplies the implementation as a container service.

use async_trait::async_trait;
use edgebinder_domain::error::Result;
use serde_json::Value;

/// Connection to a Weaviate server, scoped to object storage
#[async_trait]
pub trait WeaviateClient: Send + Sync {
    /// Create `collection` if it does not exist yet
    async fn ensure_collection(&self, collection: &str) -> Result<()>;

    /// Insert or replace the object `id` in `collection`
    async fn upsert_object(&self, collection: &str, id: &str, properties: Value) -> Result<()>;

    /// Fetch the properties of object `id`
    async fn get_object(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Delete object `id`, returning whether it existed
    async fn delete_object(&self, collection: &str, id: &str) -> Result<bool>;

    /// Properties of every object in `collection`
    async fn list_objects(&self, collection: &str) -> Result<Vec<Value>>;
}
