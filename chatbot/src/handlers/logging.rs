//! Logs each user event in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use prospera_core::{Handler, HandlerResponse, Result, UserEvent, UserInput};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &UserEvent) -> Result<bool> {
        // Free text may carry the identity confirmation, so only its length is logged.
        match &event.input {
            UserInput::Text(text) => info!(
                session_id = %event.session_id,
                event_id = %event.id,
                text_len = text.chars().count(),
                "Received text"
            ),
            UserInput::Select(option) => info!(
                session_id = %event.session_id,
                event_id = %event.id,
                action = %option.action,
                "Received option"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &UserEvent, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(reply) => debug!(
                event_id = %event.id,
                options = reply.options.len(),
                close_panel = reply.close_panel,
                "Processed event"
            ),
            other => debug!(event_id = %event.id, response = ?other, "Processed event"),
        }
        Ok(())
    }
}
