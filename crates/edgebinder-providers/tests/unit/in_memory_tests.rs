//! Tests for the in-memory adapter and its registration

use std::collections::HashMap;
use std::sync::Arc;

use edgebinder_application::{EdgeBinderFactory, RuntimeAdapterRegistry, list_adapter_providers};
use edgebinder_domain::{
    AdapterRegistry, Binding, ContainerService, EntityRef, Error, PersistenceAdapter, Result,
    ServiceContainer,
};
use edgebinder_providers::InMemoryAdapter;
use serde_json::json;

struct ConfigOnly(serde_json::Value);

impl ServiceContainer for ConfigOnly {
    fn has(&self, key: &str) -> bool {
        key == "config"
    }

    fn get(&self, key: &str) -> Result<ContainerService> {
        if key == "config" {
            Ok(ContainerService::Config(self.0.clone()))
        } else {
            Err(Error::missing_service(key))
        }
    }
}

fn binding(from: &str, to: &str) -> Binding {
    Binding::new(
        EntityRef::new("Workspace", from),
        EntityRef::new("Project", to),
        "has_access",
    )
}

#[test]
fn test_inmemory_is_registered_in_slice() {
    let providers: HashMap<_, _> = list_adapter_providers().into_iter().collect();
    assert!(providers.contains_key("inmemory"));
}

#[test]
fn test_registry_seeded_from_slice() {
    let registry = RuntimeAdapterRegistry::with_providers();
    assert!(registry.has_adapter("inmemory"));
}

#[test]
fn test_factory_resolves_inmemory_end_to_end() {
    let registry: Arc<dyn AdapterRegistry> = Arc::new(RuntimeAdapterRegistry::with_providers());
    let container: Arc<dyn ServiceContainer> = Arc::new(ConfigOnly(json!({
        "edgebinder": {"rag": {"adapter": "inmemory"}}
    })));

    let binder = EdgeBinderFactory::with_registry(registry)
        .create_edge_binder(&container, "rag")
        .unwrap();

    assert_eq!(binder.adapter_name(), "inmemory");
}

#[tokio::test]
async fn test_store_and_find() {
    let adapter = InMemoryAdapter::new();
    let stored = binding("ws-1", "p-1");

    adapter.store(stored.clone()).await.unwrap();

    assert_eq!(adapter.find(&stored.id).await.unwrap(), Some(stored));
    assert_eq!(adapter.find("unknown").await.unwrap(), None);
    assert_eq!(adapter.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_store_replaces_same_id() {
    let adapter = InMemoryAdapter::new();
    let original = binding("ws-1", "p-1");
    let updated = original.clone().with_metadata("level", json!("admin"));

    adapter.store(original).await.unwrap();
    adapter.store(updated.clone()).await.unwrap();

    assert_eq!(adapter.count().await.unwrap(), 1);
    assert_eq!(adapter.find(&updated.id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_delete() {
    let adapter = InMemoryAdapter::new();
    let stored = binding("ws-1", "p-1");
    adapter.store(stored.clone()).await.unwrap();

    assert!(adapter.delete(&stored.id).await.unwrap());
    assert!(!adapter.delete(&stored.id).await.unwrap());
    assert_eq!(adapter.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_find_by_endpoint() {
    let adapter = InMemoryAdapter::new();
    adapter.store(binding("ws-1", "p-1")).await.unwrap();
    adapter.store(binding("ws-1", "p-2")).await.unwrap();
    adapter.store(binding("ws-2", "p-1")).await.unwrap();

    let from_ws1 = adapter
        .find_from(&EntityRef::new("Workspace", "ws-1"))
        .await
        .unwrap();
    assert_eq!(from_ws1.len(), 2);

    let to_p1 = adapter
        .find_to(&EntityRef::new("Project", "p-1"))
        .await
        .unwrap();
    assert_eq!(to_p1.len(), 2);
    assert!(to_p1.iter().all(|b| b.to.entity_id == "p-1"));

    let none = adapter
        .find_to(&EntityRef::new("Workspace", "ws-1"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_instances_do_not_share_storage() {
    let first = InMemoryAdapter::new();
    let second = InMemoryAdapter::default();

    first.store(binding("ws-1", "p-1")).await.unwrap();

    assert_eq!(first.count().await.unwrap(), 1);
    assert_eq!(second.count().await.unwrap(), 0);
}
