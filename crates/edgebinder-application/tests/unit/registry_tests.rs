//! Tests for the runtime adapter registry

use std::sync::Arc;

use edgebinder_application::RuntimeAdapterRegistry;
use edgebinder_domain::{AdapterConfiguration, AdapterRegistry, Error};
use serde_json::json;

use crate::test_utils::{StubAdapter, TestContainer, config_map};

fn configuration() -> AdapterConfiguration {
    AdapterConfiguration::new(
        config_map(json!({"adapter": "stub"})),
        config_map(json!({})),
        TestContainer::new().into_arc(),
    )
}

#[test]
fn test_register_and_create() {
    let registry = RuntimeAdapterRegistry::new();
    registry
        .register("stub", "Stub adapter", |_| Ok(StubAdapter::arc("stub")))
        .unwrap();

    assert!(registry.has_adapter("stub"));
    let adapter = registry.create("stub", &configuration()).unwrap();
    assert_eq!(adapter.adapter_name(), "stub");
}

#[test]
fn test_adapter_types_are_case_sensitive() {
    let registry = RuntimeAdapterRegistry::new();
    registry
        .register("inmemory", "Stub adapter", |_| Ok(StubAdapter::arc("inmemory")))
        .unwrap();

    assert!(registry.has_adapter("inmemory"));
    assert!(!registry.has_adapter("InMemory"));
    assert!(!registry.has_adapter("inmemory "));
}

#[test]
fn test_duplicate_registration_is_rejected() {
    let registry = RuntimeAdapterRegistry::new();
    registry
        .register("stub", "first", |_| Ok(StubAdapter::arc("first")))
        .unwrap();

    let error = registry
        .register("stub", "second", |_| Ok(StubAdapter::arc("second")))
        .unwrap_err();
    assert!(matches!(error, Error::DuplicateAdapter { ref adapter_type } if adapter_type == "stub"));

    // The original registration is untouched
    let adapter = registry.create("stub", &configuration()).unwrap();
    assert_eq!(adapter.adapter_name(), "first");
}

#[test]
fn test_unregister_and_clear() {
    let registry = RuntimeAdapterRegistry::new();
    registry.register("a", "A", |_| Ok(StubAdapter::arc("a"))).unwrap();
    registry.register("b", "B", |_| Ok(StubAdapter::arc("b"))).unwrap();
    assert_eq!(registry.len(), 2);

    assert!(registry.unregister("a"));
    assert!(!registry.unregister("a"));
    assert_eq!(registry.registered_types(), vec!["b".to_string()]);

    registry.clear();
    assert!(registry.is_empty());
    assert!(!registry.has_adapter("b"));
}

#[test]
fn test_create_unknown_type_fails() {
    let registry = RuntimeAdapterRegistry::new();
    let error = registry.create("missing", &configuration()).unwrap_err();
    assert!(matches!(error, Error::UnsupportedAdapter { ref adapter_type } if adapter_type == "missing"));
}

#[test]
fn test_constructor_receives_configuration() {
    let registry = RuntimeAdapterRegistry::new();
    registry
        .register("stub", "Stub adapter", |config| {
            let label = config.instance_str_or("label", "unlabelled")?;
            Ok(StubAdapter::arc(label))
        })
        .unwrap();

    let config = AdapterConfiguration::new(
        config_map(json!({"adapter": "stub", "label": "from-config"})),
        config_map(json!({})),
        TestContainer::new().into_arc(),
    );
    let adapter = registry.create("stub", &config).unwrap();
    assert_eq!(adapter.adapter_name(), "from-config");
}

#[test]
fn test_describe_is_sorted() {
    let registry = RuntimeAdapterRegistry::new();
    registry.register("zeta", "Z", |_| Ok(StubAdapter::arc("z"))).unwrap();
    registry.register("alpha", "A", |_| Ok(StubAdapter::arc("a"))).unwrap();

    assert_eq!(
        registry.describe(),
        vec![
            ("alpha".to_string(), "A".to_string()),
            ("zeta".to_string(), "Z".to_string())
        ]
    );
}

#[test]
fn test_registries_are_independent() {
    let first = Arc::new(RuntimeAdapterRegistry::new());
    let second = RuntimeAdapterRegistry::new();
    first.register("stub", "Stub", |_| Ok(StubAdapter::arc("stub"))).unwrap();

    assert!(first.has_adapter("stub"));
    assert!(!second.has_adapter("stub"));
}

#[test]
fn test_adapter_debug_shows_name() {
    let adapter = StubAdapter::arc("debuggable");
    assert_eq!(format!("{adapter:?}"), "PersistenceAdapter(\"debuggable\")");
}
