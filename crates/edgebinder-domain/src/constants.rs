//! Domain constants
//!
//! Configuration keys and container service names shared by the resolution
//! engine, the host container and the adapters.

// ============================================================================
// CONFIGURATION KEYS
// ============================================================================

/// Root key of the EdgeBinder section in the host configuration tree
pub const CONFIG_ROOT_KEY: &str = "edgebinder";

/// Instance configuration key naming the adapter type
pub const ADAPTER_KEY: &str = "adapter";

/// Instance name used when none is requested
pub const DEFAULT_INSTANCE: &str = "default";

// ============================================================================
// CONTAINER SERVICE NAMES
// ============================================================================

/// Container key of the host configuration service
pub const CONFIG_SERVICE: &str = "config";

/// Prefix of container keys holding adapter factory services
pub const ADAPTER_SERVICE_PREFIX: &str = "edgebinder.adapter.";

/// Container key of the default EdgeBinder instance
pub const DEFAULT_INSTANCE_SERVICE: &str = "edgebinder.default";

/// Container key of the EdgeBinder service type
pub const EDGE_BINDER_SERVICE: &str = "EdgeBinder";

/// Short alias of the default EdgeBinder instance
pub const EDGE_BINDER_ALIAS: &str = "edgebinder";

/// Container key under which the factory for `adapter_type` is looked up
pub fn adapter_service_name(adapter_type: &str) -> String {
    format!("{ADAPTER_SERVICE_PREFIX}{adapter_type}")
}
