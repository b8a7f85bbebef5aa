//! Config management use case

use crate::error::{JournalError, Result};
use crate::infrastructure::{Config, Workspace};
use std::path::PathBuf;

/// Keys accepted by `get`/`set`
pub const CONFIG_KEYS: [&str; 6] = [
    "min_text_length",
    "catalog",
    "model",
    "endpoint",
    "timeout_secs",
    "api_key",
];

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value. `api_key` is masked.
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;
        value_of(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "min_text_length" => {
                config.min_text_length = value.parse().map_err(|_| {
                    JournalError::Config(format!(
                        "Invalid value for min_text_length: '{}' (expected a whole number)",
                        value
                    ))
                })?;
            }
            "catalog" => {
                config.catalog = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "model" => config.analysis.model = value.to_string(),
            "endpoint" => config.analysis.endpoint = value.to_string(),
            "timeout_secs" => {
                config.analysis.timeout_secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|&secs| secs > 0)
                    .ok_or_else(|| {
                        JournalError::Config(format!(
                            "Invalid value for timeout_secs: '{}' (expected whole seconds, at least 1)",
                            value
                        ))
                    })?;
            }
            "api_key" => {
                config.analysis.api_key = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            _ => return Err(unknown_key(key)),
        }

        self.workspace.save_config(&config)?;
        tracing::debug!(key, "Updated config");
        Ok(())
    }

    /// All keys with their (masked) values, in [`CONFIG_KEYS`] order
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.workspace.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| value_of(&config, key).map(|value| (*key, value)))
            .collect()
    }
}

fn value_of(config: &Config, key: &str) -> Result<String> {
    match key {
        "min_text_length" => Ok(config.min_text_length.to_string()),
        "catalog" => Ok(config
            .catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "model" => Ok(config.analysis.model.clone()),
        "endpoint" => Ok(config.analysis.endpoint.clone()),
        "timeout_secs" => Ok(config.analysis.timeout_secs.to_string()),
        "api_key" => Ok(match config.analysis.api_key {
            Some(_) => "********".to_string(),
            None => String::new(),
        }),
        _ => Err(unknown_key(key)),
    }
}

fn unknown_key(key: &str) -> JournalError {
    JournalError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
