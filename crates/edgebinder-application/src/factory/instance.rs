//! Configuration resolver
//!
//! Narrows the host's untyped configuration tree to the `edgebinder` section
//! and then to the configuration of a single instance.

use edgebinder_domain::constants::{ADAPTER_KEY, CONFIG_ROOT_KEY, CONFIG_SERVICE, DEFAULT_INSTANCE};
use edgebinder_domain::error::{Error, Result};
use edgebinder_domain::ports::{ContainerService, ServiceContainer};
use edgebinder_domain::value_objects::ConfigMap;
use serde_json::Value;

/// Fetch the `edgebinder` configuration section from the container
///
/// The container must provide a `config` service holding a map. A missing or
/// non-map `edgebinder` key yields an empty section.
pub fn get_configuration(container: &dyn ServiceContainer) -> Result<ConfigMap> {
    if !container.has(CONFIG_SERVICE) {
        return Err(Error::missing_configuration(
            "config service not found in container",
        ));
    }

    let tree = match container.get(CONFIG_SERVICE)? {
        ContainerService::Config(Value::Object(tree)) => tree,
        _ => {
            return Err(Error::invalid_configuration(
                "config service must return an array",
            ));
        }
    };

    Ok(match tree.get(CONFIG_ROOT_KEY) {
        Some(Value::Object(section)) => section.clone(),
        _ => ConfigMap::new(),
    })
}

/// Select the configuration of `instance_name` from the `edgebinder` section
///
/// Named instances are looked up first. Only the `default` instance may fall
/// back to the legacy flat form, where the section itself carries `adapter`.
pub fn resolve_instance_config<'a>(
    config: &'a ConfigMap,
    instance_name: &str,
) -> Result<&'a ConfigMap> {
    // A null entry counts as absent
    match config.get(instance_name) {
        None | Some(Value::Null) => {}
        Some(Value::Object(instance)) => return Ok(instance),
        Some(other) => {
            return Err(Error::invalid_configuration_value(
                instance_name,
                other,
                "array",
            ));
        }
    }

    let has_flat_adapter = config.get(ADAPTER_KEY).is_some_and(|v| !v.is_null());
    if instance_name == DEFAULT_INSTANCE && has_flat_adapter {
        return Ok(config);
    }

    Err(Error::instance_not_configured(instance_name))
}
