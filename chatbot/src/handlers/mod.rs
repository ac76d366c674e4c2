//! Handlers in the chat chain: logging first, then the dialogue engine.

mod dialogue_handler;
mod logging;

pub use dialogue_handler::DialogueHandler;
pub use logging::LoggingHandler;
