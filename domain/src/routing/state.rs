//! Routing state machine.
//!
//! ```text
//! Classifying ──escalate──▶ Escalating ──────────────────▶ Done
//!      │
//!      └──other──▶ Retrieving ──▶ Responding ──weak/answer──▶ Done
//!                      ▲
//!            (direct) ─┘
//! ```
//!
//! Each state is its own type and each edge is a method that consumes the
//! source state, so an edge can only be taken from the state it leaves.
//! [`RouteState`] is the tagged union the driver loops over. The effectful
//! work (model and retrieval calls) happens in the application layer; the
//! edges here only record its results.

use super::category::Category;
use super::result::{RouteOutcome, RoutingResult};
use crate::core::query::Query;
use crate::prompt::{ESCALATION_MESSAGE, PromptTemplate, WEAK_CONTEXT_MESSAGE};
use crate::retrieval::relevance::RelevanceVerdict;
use std::fmt;

/// Per-call record threaded through the stages: the query and the
/// formatted history block.
///
/// Owned by one routing invocation and dropped once the result exists. The
/// category lives on [`Retrieving`] and [`Responding`] once it is known, and
/// the response text only on the final [`RoutingResult`] in
/// [`RouteState::Done`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    query: Query,
    history: String,
}

impl WorkflowState {
    /// `history` is the already formatted history block.
    pub fn new(query: Query, history: impl Into<String>) -> Self {
        Self {
            query,
            history: history.into(),
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn history(&self) -> &str {
        &self.history
    }
}

/// Initial state: the query has not been classified yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifying {
    workflow: WorkflowState,
}

impl Classifying {
    pub fn new(workflow: WorkflowState) -> Self {
        Self { workflow }
    }

    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    /// Edge `Classifying → Escalating | Retrieving`.
    pub fn classified(self, category: Category) -> RouteState {
        if category.is_escalation() {
            RouteState::Escalating(Escalating {
                workflow: self.workflow,
            })
        } else {
            RouteState::Retrieving(Retrieving {
                workflow: self.workflow,
                category,
            })
        }
    }
}

/// The query is out of scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Escalating {
    workflow: WorkflowState,
}

impl Escalating {
    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    /// Edge `Escalating → Done`.
    pub fn escalate(self) -> RoutingResult {
        RoutingResult::new(
            ESCALATION_MESSAGE,
            Category::Escalate,
            RouteOutcome::Escalated,
        )
    }
}

/// In-scope query waiting for the relevance gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Retrieving {
    workflow: WorkflowState,
    category: Category,
}

impl Retrieving {
    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Edge `Retrieving → Responding`.
    pub fn retrieved(self, verdict: RelevanceVerdict) -> Responding {
        Responding {
            workflow: self.workflow,
            category: self.category,
            verdict,
        }
    }
}

/// Retrieval has been judged; the response is about to be produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Responding {
    workflow: WorkflowState,
    category: Category,
    verdict: RelevanceVerdict,
}

impl Responding {
    pub fn workflow(&self) -> &WorkflowState {
        &self.workflow
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn verdict(&self) -> &RelevanceVerdict {
        &self.verdict
    }

    /// Prompt for the answer generation call
    pub fn answer_prompt(&self) -> String {
        PromptTemplate::answer_prompt(
            self.workflow.history(),
            self.verdict.passages(),
            self.workflow.query().content(),
        )
    }

    /// Edge `Responding → Done` on weak context.
    ///
    /// Keeps the classified category: "in scope but undocumented" stays
    /// distinguishable from "out of scope".
    pub fn weak_context(self) -> RoutingResult {
        RoutingResult::new(WEAK_CONTEXT_MESSAGE, self.category, RouteOutcome::WeakContext)
    }

    /// Edge `Responding → Done` with generated text (trimmed).
    pub fn answered(self, generated: &str) -> RoutingResult {
        RoutingResult::new(generated.trim(), self.category, RouteOutcome::Answered)
    }
}

/// Tagged union over every routing state.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteState {
    Classifying(Classifying),
    Escalating(Escalating),
    Retrieving(Retrieving),
    Responding(Responding),
    Done(RoutingResult),
}

impl RouteState {
    /// Initial state for one routing call.
    pub fn start(query: Query, history: impl Into<String>) -> Self {
        RouteState::Classifying(Classifying::new(WorkflowState::new(query, history)))
    }

    /// Initial state for a direct call that skips classification.
    ///
    /// The turn is reported as [`Category::General`]; relevance gating and
    /// the weak-context fallback still apply.
    pub fn start_direct(query: Query, history: impl Into<String>) -> Self {
        RouteState::Retrieving(Retrieving {
            workflow: WorkflowState::new(query, history),
            category: Category::General,
        })
    }

    pub fn stage(&self) -> RouteStage {
        match self {
            RouteState::Classifying(_) => RouteStage::Classifying,
            RouteState::Escalating(_) => RouteStage::Escalating,
            RouteState::Retrieving(_) => RouteStage::Retrieving,
            RouteState::Responding(_) => RouteStage::Responding,
            RouteState::Done(_) => RouteStage::Done,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, RouteState::Done(_))
    }
}

/// Data-free name of a [`RouteState`], for progress reporting and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteStage {
    Classifying,
    Escalating,
    Retrieving,
    Responding,
    Done,
}

impl RouteStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStage::Classifying => "classifying",
            RouteStage::Escalating => "escalating",
            RouteStage::Retrieving => "retrieving",
            RouteStage::Responding => "responding",
            RouteStage::Done => "done",
        }
    }
}

impl fmt::Display for RouteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
