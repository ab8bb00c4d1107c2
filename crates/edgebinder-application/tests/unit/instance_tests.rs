//! Tests for configuration extraction and instance selection

use edgebinder_application::factory::{get_configuration, resolve_instance_config};
use edgebinder_domain::{ContainerService, Error};
use serde_json::json;

use crate::test_utils::{TestContainer, config_map};

#[test]
fn test_missing_config_service() {
    let container = TestContainer::new();

    let error = get_configuration(&container).unwrap_err();
    assert_eq!(
        error.to_string(),
        "EdgeBinder configuration is missing: config service not found in container"
    );
}

#[test]
fn test_non_map_config_service() {
    for service in [
        ContainerService::Config(json!("invalid-config")),
        ContainerService::Config(json!([1, 2, 3])),
        ContainerService::instance(42_u32),
    ] {
        let container = TestContainer::new().with_service("config", service);

        let error = get_configuration(&container).unwrap_err();
        assert_eq!(
            error.to_string(),
            "EdgeBinder configuration is invalid: config service must return an array"
        );
    }
}

#[test]
fn test_missing_edgebinder_section_is_empty() {
    let container = TestContainer::with_config(json!({"other": {"key": "value"}}));
    assert!(get_configuration(&container).unwrap().is_empty());

    let container = TestContainer::with_config(json!({"edgebinder": "not a map"}));
    assert!(get_configuration(&container).unwrap().is_empty());
}

#[test]
fn test_named_instance_is_returned_verbatim() {
    let config = config_map(json!({
        "rag": {"adapter": "inmemory", "collection_name": "Rag"},
        "analytics": {"adapter": "weaviate"}
    }));

    let instance = resolve_instance_config(&config, "rag").unwrap();
    assert_eq!(
        instance,
        &config_map(json!({"adapter": "inmemory", "collection_name": "Rag"}))
    );
}

#[test]
fn test_legacy_flat_form_for_default_only() {
    let config = config_map(json!({"adapter": "inmemory", "collection_name": "Flat"}));

    let instance = resolve_instance_config(&config, "default").unwrap();
    assert_eq!(instance, &config);

    for name in ["rag", "analytics", "Default", ""] {
        let error = resolve_instance_config(&config, name).unwrap_err();
        assert!(
            matches!(error, Error::InstanceNotConfigured { ref instance } if instance == name),
            "{name}: {error:?}"
        );
    }
}

#[test]
fn test_unknown_instance_without_flat_form() {
    let config = config_map(json!({"default": {"adapter": "inmemory"}}));

    let error = resolve_instance_config(&config, "nonexistent").unwrap_err();
    assert!(
        error
            .to_string()
            .starts_with("EdgeBinder instance \"nonexistent\" is not configured")
    );
}

#[test]
fn test_default_without_any_adapter_is_not_configured() {
    let config = config_map(json!({"collection_name": "Orphan"}));

    let error = resolve_instance_config(&config, "default").unwrap_err();
    assert!(matches!(error, Error::InstanceNotConfigured { .. }));
}

#[test]
fn test_null_default_entry_falls_back_to_flat_form() {
    let config = config_map(json!({"adapter": "inmemory", "default": null}));

    let instance = resolve_instance_config(&config, "default").unwrap();
    assert_eq!(instance, &config);
}

#[test]
fn test_null_named_entry_is_not_configured() {
    let config = config_map(json!({"rag": null}));

    let error = resolve_instance_config(&config, "rag").unwrap_err();
    assert!(matches!(error, Error::InstanceNotConfigured { ref instance } if instance == "rag"));
}

#[test]
fn test_null_flat_adapter_is_not_configured() {
    let config = config_map(json!({"adapter": null, "collection_name": "Flat"}));

    let error = resolve_instance_config(&config, "default").unwrap_err();
    assert!(matches!(error, Error::InstanceNotConfigured { ref instance } if instance == "default"));
}
