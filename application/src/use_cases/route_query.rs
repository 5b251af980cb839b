//! Route Query use case.
//!
//! Drives one turn through the routing state machine:
//!
//! 1. Classify the query (keyword pre-filter, then the model)
//! 2. Escalate, or retrieve and judge the context
//! 3. Answer from reliable context, or return the weak-context message
//!
//! Each turn makes at most one classification call, one retrieval call and
//! one answer call. Collaborator failures are never retried here.

use crate::config::{RetrievalFailurePolicy, RouterConfig};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoRouteProgress, RouteProgressNotifier};
use crate::ports::retriever::{RetrievalError, Retriever};
use crate::use_cases::classify_intent::{Classification, ClassificationSource, IntentClassifier};
use crate::use_cases::relevance_gate::RelevanceGate;
use helpdesk_domain::util::truncate_str;
use helpdesk_domain::{
    HISTORY_WINDOW, HistoryEntry, Query, RelevanceVerdict, RouteState, RoutingResult,
    format_history,
};
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// The collaborator a failure is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// Generation service, classification call
    Classifier,
    /// Retrieval service
    Retrieval,
    /// Generation service, answer call
    Generation,
}

impl Collaborator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collaborator::Classifier => "classifier",
            Collaborator::Retrieval => "retrieval",
            Collaborator::Generation => "generation",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Underlying failure reported by a collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownstreamError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Errors that can occur while routing a turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteQueryError {
    #[error("{service} service unavailable: {source}")]
    DownstreamUnavailable {
        service: Collaborator,
        source: DownstreamError,
    },
}

impl RouteQueryError {
    fn unavailable(service: Collaborator, source: impl Into<DownstreamError>) -> Self {
        RouteQueryError::DownstreamUnavailable {
            service,
            source: source.into(),
        }
    }

    /// Which collaborator failed.
    pub fn service(&self) -> Collaborator {
        match self {
            RouteQueryError::DownstreamUnavailable { service, .. } => *service,
        }
    }
}

/// Input for the [`RouteQueryUseCase`].
#[derive(Debug, Clone)]
pub struct RouteQueryInput {
    /// The current turn.
    pub query: Query,
    /// Prior turns, oldest first. Only the most recent window is used.
    pub history: Vec<HistoryEntry>,
}

impl RouteQueryInput {
    pub fn new(query: Query, history: Vec<HistoryEntry>) -> Self {
        Self { query, history }
    }

    /// A first turn with no history.
    pub fn single(query: Query) -> Self {
        Self::new(query, Vec::new())
    }
}

/// Use case for routing one conversational turn.
///
/// Holds only shared collaborator handles and immutable configuration, so a
/// single instance can serve concurrent turns.
#[derive(Clone)]
pub struct RouteQueryUseCase {
    classifier: IntentClassifier,
    gate: RelevanceGate,
    answer_gateway: Arc<dyn LlmGateway>,
    history_window: usize,
    on_retrieval_error: RetrievalFailurePolicy,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RouteQueryUseCase {
    /// One gateway for both calls, default policy.
    pub fn new(retriever: Arc<dyn Retriever>, gateway: Arc<dyn LlmGateway>) -> Self {
        Self::from_parts(retriever, gateway.clone(), gateway, &RouterConfig::default())
    }

    /// Separate classification and answer gateways (they usually differ in
    /// temperature).
    pub fn from_parts(
        retriever: Arc<dyn Retriever>,
        classifier_gateway: Arc<dyn LlmGateway>,
        answer_gateway: Arc<dyn LlmGateway>,
        config: &RouterConfig,
    ) -> Self {
        Self {
            classifier: IntentClassifier::new(
                classifier_gateway,
                config.escalation_keywords.clone(),
            ),
            gate: RelevanceGate::new(retriever, config.relevance_threshold, config.top_k),
            answer_gateway,
            history_window: config.history_window.min(HISTORY_WINDOW),
            on_retrieval_error: config.on_retrieval_error,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Route one turn.
    pub async fn execute(&self, input: RouteQueryInput) -> Result<RoutingResult, RouteQueryError> {
        self.execute_with_progress(input, &NoRouteProgress).await
    }

    /// Route one turn with progress callbacks.
    pub async fn execute_with_progress(
        &self,
        input: RouteQueryInput,
        progress: &dyn RouteProgressNotifier,
    ) -> Result<RoutingResult, RouteQueryError> {
        info!("Routing query: {}", truncate_str(input.query.content(), 100));
        debug!("History size: {}", input.history.len());

        let history = format_history(&input.history, self.history_window);
        self.drive(RouteState::start(input.query, history), progress)
            .await
    }

    /// Answer from the knowledge base without classifying the query.
    ///
    /// Starts at `Retrieving` with [`Category::General`](helpdesk_domain::Category::General),
    /// so no classification call is made. The relevance gate and the
    /// weak-context fallback apply as usual.
    pub async fn execute_direct(
        &self,
        input: RouteQueryInput,
    ) -> Result<RoutingResult, RouteQueryError> {
        self.execute_direct_with_progress(input, &NoRouteProgress).await
    }

    /// [`execute_direct`](Self::execute_direct) with progress callbacks.
    pub async fn execute_direct_with_progress(
        &self,
        input: RouteQueryInput,
        progress: &dyn RouteProgressNotifier,
    ) -> Result<RoutingResult, RouteQueryError> {
        info!(
            "Direct query (no classification): {}",
            truncate_str(input.query.content(), 100)
        );
        debug!("History size: {}", input.history.len());

        let history = format_history(&input.history, self.history_window);
        self.drive(RouteState::start_direct(input.query, history), progress)
            .await
    }

    async fn drive(
        &self,
        mut state: RouteState,
        progress: &dyn RouteProgressNotifier,
    ) -> Result<RoutingResult, RouteQueryError> {
        progress.on_stage(state.stage());

        loop {
            state = match state {
                RouteState::Done(result) => {
                    info!(
                        "Turn finished: category={}, outcome={}, {} bytes",
                        result.category(),
                        result.outcome(),
                        result.response_text().len()
                    );
                    self.conversation_logger.log(ConversationEvent::new(
                        "route_result",
                        json!({
                            "category": result.category().as_str(),
                            "outcome": result.outcome().to_string(),
                            "response_length": result.response_text().len(),
                        }),
                    ));
                    return Ok(result);
                }
                other => self.step(other, progress).await?,
            };
            progress.on_stage(state.stage());
        }
    }

    /// Take exactly one transition out of `state`.
    ///
    /// `Done` is returned unchanged.
    pub async fn step(
        &self,
        state: RouteState,
        progress: &dyn RouteProgressNotifier,
    ) -> Result<RouteState, RouteQueryError> {
        match state {
            RouteState::Classifying(classifying) => {
                let query = classifying.workflow().query();
                let classification = self
                    .classifier
                    .classify(query)
                    .await
                    .map_err(|e| RouteQueryError::unavailable(Collaborator::Classifier, e))?;

                self.log_classification(query, &classification);
                progress.on_classified(classification.category);
                Ok(classifying.classified(classification.category))
            }
            RouteState::Escalating(escalating) => {
                info!("Escalating to human support");
                Ok(RouteState::Done(escalating.escalate()))
            }
            RouteState::Retrieving(retrieving) => {
                let verdict = match self.gate.evaluate(retrieving.workflow().query()).await {
                    Ok(verdict) => verdict,
                    Err(e) => match self.on_retrieval_error {
                        RetrievalFailurePolicy::Propagate => {
                            return Err(RouteQueryError::unavailable(Collaborator::Retrieval, e));
                        }
                        RetrievalFailurePolicy::WeakContext => {
                            warn!("Retrieval failed, treating as weak context: {}", e);
                            RelevanceVerdict::weak()
                        }
                    },
                };

                self.conversation_logger.log(ConversationEvent::new(
                    "relevance",
                    json!({
                        "reliable": verdict.is_reliable(),
                        "best_score": verdict.best_score(),
                        "passages": verdict.passages().len(),
                    }),
                ));
                progress.on_relevance(&verdict);
                Ok(RouteState::Responding(retrieving.retrieved(verdict)))
            }
            RouteState::Responding(responding) => {
                if !responding.verdict().is_reliable() {
                    return Ok(RouteState::Done(responding.weak_context()));
                }

                let prompt = responding.answer_prompt();
                debug!(
                    "Generating answer with model {} ({} passages)",
                    self.answer_gateway.model(),
                    responding.verdict().passages().len()
                );
                let generated = self
                    .answer_gateway
                    .generate(&prompt)
                    .await
                    .map_err(|e| RouteQueryError::unavailable(Collaborator::Generation, e))?;

                Ok(RouteState::Done(responding.answered(&generated)))
            }
            done @ RouteState::Done(_) => Ok(done),
        }
    }

    fn log_classification(&self, query: &Query, classification: &Classification) {
        let keyword = match &classification.source {
            ClassificationSource::Keyword(k) => Some(k.as_str()),
            _ => None,
        };
        self.conversation_logger.log(ConversationEvent::new(
            "classification",
            json!({
                "query": truncate_str(query.content(), 100),
                "category": classification.category.as_str(),
                "source": classification.source.as_str(),
                "keyword": keyword,
            }),
        ));
    }
}
