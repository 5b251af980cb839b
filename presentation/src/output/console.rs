//! Console output formatter for routing results

use colored::{ColoredString, Colorize};
use helpdesk_application::RouteQueryError;
use helpdesk_domain::{Category, HistoryEntry, OutputFormat, RoutingResult, Speaker};

/// Formats routing results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a result in the requested format
    pub fn render(result: &RoutingResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Category badge followed by the response text
    pub fn format(result: &RoutingResult) -> String {
        format!(
            "{}\n{}",
            Self::badge(result.category()),
            result.response_text()
        )
    }

    /// Format as JSON: `{"response": .., "category": ..}`
    pub fn format_json(result: &RoutingResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a routing failure
    pub fn format_error(err: &RouteQueryError) -> String {
        format!(
            "{} {}\n{}",
            "Error:".red().bold(),
            err,
            "The request could not be completed. Please try again later.".dimmed()
        )
    }

    /// Format the session history, oldest first
    pub fn format_history(history: &[HistoryEntry]) -> String {
        if history.is_empty() {
            return "(no messages yet)".dimmed().to_string();
        }
        history
            .iter()
            .map(|entry| {
                let label = match entry.speaker {
                    Speaker::User => entry.speaker.label().cyan().bold(),
                    Speaker::System => entry.speaker.label().green().bold(),
                };
                format!("{}: {}", label, entry.text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn badge(category: Category) -> ColoredString {
        let label = format!("[{}]", category.as_str().to_uppercase());
        match category {
            Category::Products => label.cyan().bold(),
            Category::Returns => label.yellow().bold(),
            Category::General => label.green().bold(),
            Category::Escalate => label.red().bold(),
        }
    }
}
