//! Progress reporting while a turn is routed

use colored::Colorize;
use helpdesk_application::RouteProgressNotifier;
use helpdesk_domain::{Category, RelevanceVerdict, RouteStage};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner on stderr showing the router's current state.
///
/// One spinner per turn; it clears itself on `Done` or when dropped.
pub struct ProgressReporter {
    spinner: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_message(stage: RouteStage) -> &'static str {
        match stage {
            RouteStage::Classifying => "Classifying question...",
            RouteStage::Escalating => "Handing over to support...",
            RouteStage::Retrieving => "Searching knowledge base...",
            RouteStage::Responding => "Writing answer...",
            RouteStage::Done => "Done",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteProgressNotifier for ProgressReporter {
    fn on_stage(&self, stage: RouteStage) {
        if stage == RouteStage::Done {
            self.spinner.finish_and_clear();
        } else {
            self.spinner.set_message(Self::stage_message(stage));
        }
    }

    fn on_classified(&self, category: Category) {
        self.spinner.set_prefix(format!("[{}]", category));
    }

    fn on_relevance(&self, verdict: &RelevanceVerdict) {
        if !verdict.is_reliable() {
            self.spinner
                .println(format!("  {} no strong match in knowledge base", "!".yellow()));
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_a_message() {
        for stage in [
            RouteStage::Classifying,
            RouteStage::Escalating,
            RouteStage::Retrieving,
            RouteStage::Responding,
            RouteStage::Done,
        ] {
            assert!(!ProgressReporter::stage_message(stage).is_empty());
        }
    }

    #[test]
    fn test_done_finishes_spinner() {
        let reporter = ProgressReporter::new();
        reporter.on_stage(RouteStage::Classifying);
        reporter.on_classified(Category::Returns);
        reporter.on_stage(RouteStage::Done);
        assert!(reporter.spinner.is_finished());
    }
}
