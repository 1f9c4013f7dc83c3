//! In-memory doubles for use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use arena_domain::Model;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One request seen by [`ScriptedGateway`]
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub model: Model,
    pub system_prompt: String,
    pub content: String,
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<String, GatewayError>>,
    calls: Vec<RecordedCall>,
}

/// Gateway that answers from a fixed queue of replies, in order
#[derive(Clone, Default)]
pub(crate) struct ScriptedGateway {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                replies: replies.into(),
                calls: Vec::new(),
            })),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.lock().unwrap().calls.clone()
    }
}

struct ScriptedSession {
    model: Model,
    system_prompt: String,
    script: Arc<Mutex<Script>>,
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            system_prompt: system_prompt.to_string(),
            script: Arc::clone(&self.script),
        }))
    }
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(RecordedCall {
            model: self.model.clone(),
            system_prompt: self.system_prompt.clone(),
            content: content.to_string(),
        });
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::ConnectionError("script exhausted".into())))
    }
}

/// Logger that keeps every event in memory
#[derive(Default)]
pub(crate) struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub fn payloads(&self, event_type: &str) -> Vec<serde_json::Value> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == event_type)
            .map(|(_, p)| p.clone())
            .collect()
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
