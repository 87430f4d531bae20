mod error;
mod loader;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config};
pub use types::{AccessLogConfig, LoglensConfig, SnapshotConfig};
pub use validate::validate_config;
