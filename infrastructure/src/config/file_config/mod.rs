//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod output;
mod repl;
mod retrieval;
mod router;

pub use generation::{FileGenerationConfig, GENERATION_PROVIDERS};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use retrieval::{FileRetrievalConfig, RetrievalProviderKind};
pub use router::FileRouterConfig;

use helpdesk_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration that failed validation.
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("invalid configuration:\n  {}", .0.join("\n  "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Routing policy
    pub router: FileRouterConfig,
    /// Generation service
    pub generation: FileGenerationConfig,
    /// Retrieval service
    pub retrieval: FileRetrievalConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.router.to_router_config().1);
        issues.extend(self.generation.validate());
        issues.extend(self.retrieval.validate());
        issues
    }

    /// Split issues into warnings, or fail if any is an error.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(|i| i.is_error());
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|i| i.message).collect(),
            ))
        }
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
