//! Component factory: builds the dialogue handler and the handler chain from config.

use dialogue::DialogueEngine;
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::ChatbotConfig;
use crate::handlers::{DialogueHandler, LoggingHandler};

/// Dialogue handler with a random protocol generator and the configured description minimum.
#[instrument(skip(config))]
pub fn build_dialogue_handler(config: &ChatbotConfig) -> Arc<DialogueHandler> {
    let dialogue_config = config.dialogue_config();
    info!(
        description_min_len = dialogue_config.description_min_len,
        "Building dialogue handler"
    );
    Arc::new(DialogueHandler::new(DialogueEngine::new(dialogue_config)))
}

/// Chain order: logging, then dialogue (terminal, always replies).
pub fn build_handler_chain(dialogue: Arc<DialogueHandler>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(dialogue)
}
