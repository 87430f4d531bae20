use crate::conf::error::ConfigError;
use crate::conf::types::LoglensConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "loglens.hcl";

/// Loads and validates the configuration.
///
/// An explicit `path` must exist. Without one, `loglens.hcl` in the working
/// directory is used when present, otherwise the defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<LoglensConfig, ConfigError> {
    let cfg = match path {
        Some(path) => parse_config(path)?,
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                parse_config(default)?
            } else {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                LoglensConfig::default()
            }
        }
    };

    validate_config(&cfg)?;
    Ok(cfg)
}

pub fn parse_config(path: &Path) -> Result<LoglensConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))
}
