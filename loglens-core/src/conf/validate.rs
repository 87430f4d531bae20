use crate::conf::error::ConfigError;
use crate::conf::types::LoglensConfig;

pub fn validate_config(cfg: &LoglensConfig) -> Result<(), ConfigError> {
    if cfg.access_log.top_n == 0 {
        return Err(ConfigError::invalid("access_log.top_n", "must be at least 1"));
    }

    if cfg.snapshot.command.trim().is_empty() {
        return Err(ConfigError::invalid("snapshot.command", "must not be empty"));
    }

    if cfg.snapshot.command_width == 0 {
        return Err(ConfigError::invalid(
            "snapshot.command_width",
            "must be at least 1",
        ));
    }

    Ok(())
}
