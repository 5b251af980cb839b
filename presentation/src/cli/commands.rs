//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for routing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Category badge and response text
    Text,
    /// `{"response": .., "category": ..}`
    Json,
}

impl From<OutputFormat> for helpdesk_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => helpdesk_domain::OutputFormat::Text,
            OutputFormat::Json => helpdesk_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for helpdesk
#[derive(Parser, Debug)]
#[command(name = "helpdesk")]
#[command(author, version, about = "TechGear customer support router")]
#[command(long_about = r#"
Helpdesk answers customer questions from the TechGear knowledge base.

Each question is:
1. Classified: products, returns, general, or escalate
2. Escalated to a human, or matched against the knowledge base
3. Answered from the knowledge base, or referred to support@techgear.com

Configuration files are loaded from (in priority order):
1. HELPDESK_<SECTION>__<KEY>   Environment variables
2. --config <path>              Explicit config file
3. ./helpdesk.toml              Project-level config
4. ~/.config/helpdesk/config.toml   Global config

Example:
  helpdesk "What is the price of SmartWatch Pro X?"
  helpdesk --history turns.json "What is its price?"
  helpdesk --direct "How long is the laptop warranty?"
  helpdesk --chat
"#)]
pub struct Cli {
    /// The customer question (not required in chat mode)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// JSON file with prior turns: [{"sender": "user"|"bot", "text": ".."}]
    #[arg(long, value_name = "FILE", conflicts_with = "chat")]
    pub history: Option<PathBuf>,

    /// Skip classification and answer straight from the knowledge base
    #[arg(long, conflicts_with = "chat")]
    pub direct: bool,

    /// Output format (defaults to [output] format, then text)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
