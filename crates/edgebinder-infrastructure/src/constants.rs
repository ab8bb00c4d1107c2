//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `edgebinder_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "edgebinder.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "edgebinder";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "EDGEBINDER";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "EDGEBINDER_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// File stem used when the log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "edgebinder";
