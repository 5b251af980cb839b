//! Hand-written collaborator doubles shared by the use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::retriever::{RetrievalError, Retriever};
use async_trait::async_trait;
use helpdesk_domain::RetrievedPassage;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway that replays scripted replies in order and records every prompt.
pub(crate) struct ScriptedGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub(crate) fn new(replies: Vec<&str>) -> Self {
        Self::with_results(replies.into_iter().map(|r| Ok(r.to_string())).collect())
    }

    pub(crate) fn with_results(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(error: GatewayError) -> Self {
        Self::with_results(vec![Err(error)])
    }

    pub(crate) fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
    }
}

/// Retriever returning a fixed result and counting calls.
pub(crate) struct StubRetriever {
    result: Result<Vec<RetrievedPassage>, RetrievalError>,
    calls: AtomicUsize,
    last_k: Mutex<Option<usize>>,
}

impl StubRetriever {
    pub(crate) fn with_scores(scores: &[(&str, f32)]) -> Self {
        Self::with_result(Ok(scores
            .iter()
            .map(|(content, score)| RetrievedPassage::new(*content, *score))
            .collect()))
    }

    pub(crate) fn failing(error: RetrievalError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<Vec<RetrievedPassage>, RetrievalError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_k: Mutex::new(None),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_k(&self) -> Option<usize> {
        *self.last_k.lock().unwrap()
    }
}

#[async_trait]
impl Retriever for StubRetriever {
    async fn retrieve(
        &self,
        _query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, RetrievalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_k.lock().unwrap() = Some(k);
        self.result.clone()
    }
}

/// Logger that keeps every event type in memory.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub(crate) fn payload(&self, event_type: &str) -> Option<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|(t, _)| *t == event_type)
            .map(|(_, p)| p.clone())
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
