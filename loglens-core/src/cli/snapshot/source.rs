use crate::cli::snapshot::error::SnapshotError;
use crate::conf::SnapshotConfig;
use std::process::Command;

/// Produces the raw text of a process listing.
pub trait ProcessSource {
    /// Human readable origin, used in messages.
    fn describe(&self) -> String;

    fn snapshot(&self) -> Result<String, SnapshotError>;
}

/// Runs an external listing command and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandSource {
    command: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(cfg: &SnapshotConfig) -> Self {
        Self::new(cfg.command.clone(), cfg.args.clone())
    }
}

impl ProcessSource for CommandSource {
    fn describe(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn snapshot(&self) -> Result<String, SnapshotError> {
        let output = Command::new(&self.command)
            .args(&self.args)
            .output()
            .map_err(|source| SnapshotError::Spawn {
                command: self.describe(),
                source,
            })?;

        if !output.status.success() {
            return Err(SnapshotError::CommandFailed {
                command: self.describe(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| SnapshotError::InvalidOutput {
            command: self.describe(),
        })
    }
}

/// A listing captured ahead of time.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

impl ProcessSource for StaticSource {
    fn describe(&self) -> String {
        "static process table".to_string()
    }

    fn snapshot(&self) -> Result<String, SnapshotError> {
        Ok(self.0.clone())
    }
}
