//! Adapter configuration builder

use std::sync::Arc;

use edgebinder_domain::ports::ServiceContainer;
use edgebinder_domain::value_objects::{AdapterConfiguration, ConfigMap};

/// Build the configuration handed to an adapter constructor
///
/// Copies both maps, so the caller's configuration is never shared with or
/// mutated through the adapter. Adapter-specific keys are not validated here.
pub fn build_adapter_configuration(
    instance_config: &ConfigMap,
    global_config: &ConfigMap,
    container: &Arc<dyn ServiceContainer>,
) -> AdapterConfiguration {
    AdapterConfiguration::new(
        instance_config.clone(),
        global_config.clone(),
        Arc::clone(container),
    )
}
