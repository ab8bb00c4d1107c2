//! Tests for the adapter configuration builder

use edgebinder_application::factory::build_adapter_configuration;
use serde_json::json;

use crate::test_utils::{TestContainer, config_map};

#[test]
fn test_builder_is_idempotent() {
    let container = TestContainer::new().into_arc();
    let instance = config_map(json!({"adapter": "inmemory", "schema": {"auto_create": true}}));
    let global = config_map(json!({"default": {"adapter": "inmemory"}}));

    let first = build_adapter_configuration(&instance, &global, &container);
    let second = build_adapter_configuration(&instance, &global, &container);

    assert_eq!(first, second);
}

#[test]
fn test_builder_does_not_mutate_inputs() {
    let container = TestContainer::new().into_arc();
    let instance = config_map(json!({"adapter": "inmemory", "collection_name": "Bindings"}));
    let global = config_map(json!({"rag": {"adapter": "inmemory"}}));
    let instance_before = instance.clone();
    let global_before = global.clone();

    let config = build_adapter_configuration(&instance, &global, &container);

    assert_eq!(instance, instance_before);
    assert_eq!(global, global_before);
    assert_eq!(config.instance_config(), &instance);
    assert_eq!(config.global_settings(), &global);
    assert_eq!(config.adapter_type(), Some("inmemory"));
}

#[test]
fn test_builder_has_no_error_path_for_odd_fields() {
    let container = TestContainer::new().into_arc();
    let instance = config_map(json!({"adapter": "inmemory", "port": "not-a-number"}));

    let config = build_adapter_configuration(&instance, &config_map(json!({})), &container);
    assert_eq!(config.instance_value("port"), Some(&json!("not-a-number")));
}
