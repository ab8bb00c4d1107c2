//! Error handling types
//!
//! The first group of variants is the closed configuration taxonomy reported by
//! adapter resolution. Message templates are stable and user facing; hosts and
//! tests match on them.

use serde_json::Value;
use thiserror::Error;

use crate::value_objects::value_type_name;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for EdgeBinder
#[derive(Error, Debug)]
pub enum Error {
    /// The container has no configuration source at all
    #[error("EdgeBinder configuration is missing: {reason}")]
    MissingConfiguration {
        /// Why the configuration could not be found
        reason: String,
    },

    /// A configuration source exists but has the wrong shape
    #[error("EdgeBinder configuration is invalid: {reason}")]
    InvalidConfiguration {
        /// Why the configuration was rejected
        reason: String,
    },

    /// The requested instance has no configuration entry
    #[error(
        "EdgeBinder instance \"{instance}\" is not configured. Please add configuration for this instance."
    )]
    InstanceNotConfigured {
        /// Name of the instance that was requested
        instance: String,
    },

    /// Instance configuration lacks the `adapter` key
    #[error(
        "Adapter type is required in configuration. Please specify the \"adapter\" key in your EdgeBinder configuration."
    )]
    MissingAdapter,

    /// Neither the registry nor the container produced an adapter
    #[error(
        "Unsupported adapter type \"{adapter_type}\". Please register the adapter factory with AdapterRegistry."
    )]
    UnsupportedAdapter {
        /// The adapter type that could not be resolved
        adapter_type: String,
    },

    /// A required container service is absent
    #[error("Required service \"{service}\" is not registered in the container.")]
    MissingService {
        /// Container key of the missing service
        service: String,
    },

    /// A container service does not satisfy the expected contract
    #[error("Service \"{service}\" is invalid: {reason}")]
    InvalidService {
        /// Container key of the service
        service: String,
        /// What was wrong with it
        reason: String,
    },

    /// Adapter-specific configuration is missing required keys
    #[error("Missing required keys in {context}: {}", .keys.join(", "))]
    MissingRequiredKeys {
        /// Keys that were expected but absent
        keys: Vec<String>,
        /// Where the keys were expected (e.g. "adapter configuration")
        context: String,
    },

    /// A configuration key holds a value of the wrong type
    #[error("Invalid value for configuration key \"{key}\": expected {expected}, got {got}")]
    InvalidConfigurationValue {
        /// Configuration key
        key: String,
        /// Expected type or description
        expected: String,
        /// Debug type name of the value that was found
        got: String,
    },

    /// An adapter was registered twice under the same type
    #[error("Adapter type \"{adapter_type}\" is already registered")]
    DuplicateAdapter {
        /// The conflicting adapter type
        adapter_type: String,
    },

    /// Storage operation error raised by an adapter
    #[error("Adapter error: {message}")]
    Adapter {
        /// Description of the adapter error
        message: String,
    },

    /// Infrastructure error (container wiring, subscriber setup)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration loading error (files, environment)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },
}

// Configuration taxonomy constructors
impl Error {
    /// Create a missing configuration error
    pub fn missing_configuration<S: Into<String>>(reason: S) -> Self {
        Self::MissingConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration<S: Into<String>>(reason: S) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an instance-not-configured error
    pub fn instance_not_configured<S: Into<String>>(instance: S) -> Self {
        Self::InstanceNotConfigured {
            instance: instance.into(),
        }
    }

    /// Create a missing adapter error
    pub fn missing_adapter() -> Self {
        Self::MissingAdapter
    }

    /// Create an unsupported adapter error
    pub fn unsupported_adapter<S: Into<String>>(adapter_type: S) -> Self {
        Self::UnsupportedAdapter {
            adapter_type: adapter_type.into(),
        }
    }

    /// Create a missing service error
    pub fn missing_service<S: Into<String>>(service: S) -> Self {
        Self::MissingService {
            service: service.into(),
        }
    }

    /// Create an invalid service error
    pub fn invalid_service<S: Into<String>, R: Into<String>>(service: S, reason: R) -> Self {
        Self::InvalidService {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing required keys error with the default `configuration` context
    pub fn missing_required_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::missing_required_keys_in(keys, "configuration")
    }

    /// Create a missing required keys error for a specific context
    pub fn missing_required_keys_in<I, K, C>(keys: I, context: C) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
        C: Into<String>,
    {
        Self::MissingRequiredKeys {
            keys: keys.into_iter().map(Into::into).collect(),
            context: context.into(),
        }
    }

    /// Create an invalid configuration value error from the offending value
    pub fn invalid_configuration_value<K: Into<String>, E: Into<String>>(
        key: K,
        value: &Value,
        expected: E,
    ) -> Self {
        Self::InvalidConfigurationValue {
            key: key.into(),
            expected: expected.into(),
            got: value_type_name(value).to_string(),
        }
    }
}

// Ambient error constructors
impl Error {
    /// Create a duplicate adapter registration error
    pub fn duplicate_adapter<S: Into<String>>(adapter_type: S) -> Self {
        Self::DuplicateAdapter {
            adapter_type: adapter_type.into(),
        }
    }

    /// Create an adapter storage error
    pub fn adapter<S: Into<String>>(message: S) -> Self {
        Self::Adapter {
            message: message.into(),
        }
    }

    /// Create a configuration loading error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

}

impl Error {
    /// Whether this error belongs to the configuration taxonomy
    ///
    /// These are the failures adapter resolution reports; everything else
    /// comes from adapters, file loading or serialization.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingConfiguration { .. }
                | Self::InvalidConfiguration { .. }
                | Self::InstanceNotConfigured { .. }
                | Self::MissingAdapter
                | Self::UnsupportedAdapter { .. }
                | Self::MissingService { .. }
                | Self::InvalidService { .. }
                | Self::MissingRequiredKeys { .. }
                | Self::InvalidConfigurationValue { .. }
        )
    }
}
