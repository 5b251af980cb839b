//! Progress notification port
//!
//! Lets a front end show which routing state a turn is in.

use helpdesk_domain::{Category, RelevanceVerdict, RouteStage};

/// Callbacks fired while a turn moves through the state machine.
///
/// Implementations live in the presentation layer.
pub trait RouteProgressNotifier: Send + Sync {
    /// Called on entering each state, including `Done`
    fn on_stage(&self, stage: RouteStage);

    /// Called once the category is known
    fn on_classified(&self, _category: Category) {}

    /// Called once retrieval has been judged
    fn on_relevance(&self, _verdict: &RelevanceVerdict) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoRouteProgress;

impl RouteProgressNotifier for NoRouteProgress {
    fn on_stage(&self, _stage: RouteStage) {}
}
