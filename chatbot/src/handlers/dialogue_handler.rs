//! Terminal handler: runs the dialogue engine and replies.

use async_trait::async_trait;
use dialogue::{DialogueEngine, FlowState, FlowType};
use prospera_core::{BotReply, Handler, HandlerResponse, Result, UserEvent};
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// Owns the engine behind a mutex so each input is processed in full before the next.
pub struct DialogueHandler {
    engine: Mutex<DialogueEngine>,
}

impl DialogueHandler {
    pub fn new(engine: DialogueEngine) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    pub async fn welcome(&self) -> BotReply {
        self.engine.lock().await.welcome()
    }

    pub async fn start(&self, flow_type: FlowType) -> BotReply {
        self.engine.lock().await.start(flow_type)
    }

    pub async fn reset(&self) {
        self.engine.lock().await.reset();
    }

    pub async fn state(&self) -> FlowState {
        self.engine.lock().await.state().clone()
    }
}

#[async_trait]
impl Handler for DialogueHandler {
    #[instrument(skip(self, event))]
    async fn handle(&self, event: &UserEvent) -> Result<HandlerResponse> {
        let mut engine = self.engine.lock().await;
        let reply = engine.dispatch(&event.input);
        let state = engine.state();
        info!(
            session_id = %event.session_id,
            flow_type = ?state.flow_type(),
            step = ?state.step().map(|s| s.index()),
            close_panel = reply.close_panel,
            "step: DialogueHandler handle done"
        );
        Ok(HandlerResponse::Reply(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogue::{DialogueConfig, FixedProtocol, Step};
    use prospera_core::UserInput;

    fn handler() -> DialogueHandler {
        DialogueHandler::new(DialogueEngine::with_protocol_generator(
            DialogueConfig::default(),
            Box::new(FixedProtocol("ABCDE12345".to_string())),
        ))
    }

    #[tokio::test]
    async fn test_handle_always_replies() {
        let h = handler();
        let event = UserEvent::new("s-1", UserInput::Text("denúncia".to_string()));
        match h.handle(&event).await.unwrap() {
            HandlerResponse::Reply(reply) => assert!(!reply.text.is_empty()),
            other => panic!("expected reply, got {:?}", other),
        }
        assert_eq!(h.state().await.flow_type(), Some(FlowType::Complaint));
        assert_eq!(h.state().await.step(), Some(Step::AwaitingEmail));
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let h = handler();
        h.start(FlowType::TheftReport).await;
        assert!(!h.state().await.is_idle());
        h.reset().await;
        assert!(h.state().await.is_idle());
    }
}
