//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use helpdesk_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Text or JSON
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    /// Show the routing spinner
    pub show_progress: bool,
    /// Line-editor history file; `None` uses the platform data directory
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Where the line-editor history lives.
    pub fn resolved_history_file(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("helpdesk").join("history.txt")))
    }
}
