//! Adapter configuration passed to adapter constructors
//!
//! Built once per resolution call from the instance configuration, the global
//! `edgebinder` tree and the host container. Adapters may use the container
//! while they are being constructed (to fetch clients, for example) but must
//! not keep the configuration, or the container handle it exposes, afterwards.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::ConfigMap;
use crate::constants::ADAPTER_KEY;
use crate::error::{Error, Result};
use crate::ports::ServiceContainer;

/// Immutable configuration handed to adapter constructors
#[derive(Clone)]
pub struct AdapterConfiguration {
    instance: Arc<ConfigMap>,
    global: Arc<ConfigMap>,
    container: Arc<dyn ServiceContainer>,
}

impl AdapterConfiguration {
    /// Create a new adapter configuration
    pub fn new(
        instance: ConfigMap,
        global: ConfigMap,
        container: Arc<dyn ServiceContainer>,
    ) -> Self {
        Self {
            instance: Arc::new(instance),
            global: Arc::new(global),
            container,
        }
    }

    /// Configuration of the instance being built
    pub fn instance_config(&self) -> &ConfigMap {
        &self.instance
    }

    /// The whole `edgebinder` configuration tree
    pub fn global_settings(&self) -> &ConfigMap {
        &self.global
    }

    /// Host container, for use during construction only
    pub fn container(&self) -> &dyn ServiceContainer {
        self.container.as_ref()
    }

    /// Adapter type named by the instance configuration
    pub fn adapter_type(&self) -> Option<&str> {
        self.instance.get(ADAPTER_KEY).and_then(Value::as_str)
    }

    /// Raw instance configuration value
    pub fn instance_value(&self, key: &str) -> Option<&Value> {
        self.instance.get(key)
    }

    /// String instance configuration value
    ///
    /// Absent keys and explicit nulls yield `Ok(None)`; any other non-string
    /// value is an [`Error::InvalidConfigurationValue`].
    pub fn instance_str(&self, key: &str) -> Result<Option<&str>> {
        match self.instance.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(Error::invalid_configuration_value(key, other, "string")),
        }
    }

    /// String instance configuration value with a fallback
    pub fn instance_str_or<'a>(&'a self, key: &str, default: &'a str) -> Result<&'a str> {
        Ok(self.instance_str(key)?.unwrap_or(default))
    }

    /// Fail with [`Error::MissingRequiredKeys`] unless every key is present
    pub fn require_keys(&self, keys: &[&str], context: &str) -> Result<()> {
        let missing: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| !self.instance.contains_key(*key))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::missing_required_keys_in(missing, context))
        }
    }

    fn container_ptr(&self) -> *const () {
        Arc::as_ptr(&self.container).cast::<()>()
    }
}

/// Equal when both configuration maps are equal and both refer to the same
/// container instance.
impl PartialEq for AdapterConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.instance == other.instance
            && self.global == other.global
            && self.container_ptr() == other.container_ptr()
    }
}

impl fmt::Debug for AdapterConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterConfiguration")
            .field("instance", &self.instance)
            .field("global", &self.global)
            .finish_non_exhaustive()
    }
}
