//! Configuration file loading for helpdesk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables with the `HELPDESK_` prefix
//! 2. `--config <path>` specified file
//! 3. Project root: `./helpdesk.toml` or `./.helpdesk.toml`
//! 4. Global: `~/.config/helpdesk/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGenerationConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, FileRetrievalConfig, FileRouterConfig,
    GENERATION_PROVIDERS, RetrievalProviderKind, expand_home,
};
pub use loader::ConfigLoader;
