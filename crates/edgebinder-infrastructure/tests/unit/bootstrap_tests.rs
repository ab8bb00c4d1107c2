//! Service table and bootstrap tests

use std::sync::Arc;

use edgebinder_application::{EdgeBinderFactory, RuntimeAdapterRegistry};
use edgebinder_domain::{AdapterRegistry, EntityRef, Error, PersistenceAdapter, ServiceContainer};
use edgebinder_infrastructure::bootstrap::edge_binder_type_key;
use edgebinder_infrastructure::{
    AppConfig, EdgeBinderServices, ServiceMap, init_services, register_edgebinder_services,
};
use edgebinder_providers::InMemoryAdapter;
use serde_json::json;

fn inmemory_factory() -> Arc<EdgeBinderFactory> {
    let registry = RuntimeAdapterRegistry::new();
    registry
        .register("inmemory", "In-memory", |_| Ok(Arc::new(InMemoryAdapter::new())))
        .unwrap();
    let registry: Arc<dyn AdapterRegistry> = Arc::new(registry);
    Arc::new(EdgeBinderFactory::with_registry(registry))
}

#[test]
fn test_service_table() {
    let services = EdgeBinderServices::new();

    assert_eq!(
        services.factories,
        vec![edge_binder_type_key().to_string(), "edgebinder.default".to_string()]
    );
    assert!(services.aliases.contains(&("EdgeBinder".to_string(), edge_binder_type_key().to_string())));
    assert!(services.aliases.contains(&("edgebinder".to_string(), "edgebinder.default".to_string())));
    assert!(edge_binder_type_key().ends_with("EdgeBinder"));
}

#[test]
fn test_every_service_name_resolves_default_instance() {
    let container = ServiceMap::new();
    container.register_config(json!({"edgebinder": {"default": {"adapter": "inmemory"}}}));
    register_edgebinder_services(&container, inmemory_factory());

    for name in [edge_binder_type_key(), "edgebinder.default", "EdgeBinder", "edgebinder"] {
        let binder = container.resolve_edge_binder(name).unwrap();
        assert_eq!(binder.adapter_name(), "inmemory", "service {name}");
    }
}

#[test]
fn test_resolution_errors_surface_through_services() {
    let container = ServiceMap::new();
    register_edgebinder_services(&container, inmemory_factory());

    let error = container.resolve_edge_binder("edgebinder").unwrap_err();
    assert!(matches!(error, Error::MissingConfiguration { .. }));
}

#[test]
fn test_init_services_registers_config_and_weaviate_factory() {
    let mut config = AppConfig::default();
    config.edgebinder = json!({"rag": {"adapter": "weaviate"}});

    let container = init_services(&config);

    assert!(container.has("config"));
    assert!(container.has("edgebinder.adapter.weaviate"));
    assert!(container.has_edge_binder("edgebinder"));

    // Default instance is not configured, the named one lacks its client
    assert!(matches!(
        container.resolve_edge_binder("edgebinder").unwrap_err(),
        Error::InstanceNotConfigured { .. }
    ));
    let factory = EdgeBinderFactory::new();
    let error = factory
        .create_edge_binder(&container.as_container(), "rag")
        .unwrap_err();
    assert!(matches!(error, Error::MissingService { service } if service == "weaviate.client.default"));
}

#[tokio::test]
async fn test_resolved_service_stores_bindings() {
    let container = ServiceMap::new();
    container.register_config(json!({"edgebinder": {"adapter": "inmemory"}}));
    register_edgebinder_services(&container, inmemory_factory());

    let binder = container.resolve_edge_binder("edgebinder").unwrap();
    let binding = binder
        .bind(
            EntityRef::new("User", "u-1"),
            EntityRef::new("Workspace", "ws-1"),
            "member_of",
            [("source".to_string(), json!("invite"))],
        )
        .await
        .unwrap();

    assert_eq!(binder.adapter().count().await.unwrap(), 1);
    assert!(binder.find_binding(&binding.id).await.unwrap().is_some());
}
