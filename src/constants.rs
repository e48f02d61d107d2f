//! Constants used throughout the application
//!
//! This module centralizes file names and user-facing messages.

/// Directory name under the platform config/data directories
pub const APP_DIR_NAME: &str = "dtutil";

/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "dtutil.toml";

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file name inside the platform data directory
pub const LOG_FILE_NAME: &str = "dtutil.log";

/// Default log level when logging is enabled
pub const DEFAULT_LOG_LEVEL: &str = "info";

// CLI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const CONFIG_HEADER: &str = "# dtutil Configuration File";
