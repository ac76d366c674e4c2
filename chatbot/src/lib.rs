//! # chatbot
//!
//! The support-chat panel: a [`ChatSession`] owns the message log, runs each user input through the handler
//! chain (logging + dialogue), delays replies to simulate typing and drives a [`prospera_core::ChatSurface`].
//! [`runner::run_console_chat`] hosts a session in the terminal.

pub mod components;
pub mod config;
pub mod handlers;
pub mod message_log;
pub mod runner;
pub mod session;
pub mod typing;

pub use components::{build_dialogue_handler, build_handler_chain};
pub use config::ChatbotConfig;
pub use handlers::{DialogueHandler, LoggingHandler};
pub use message_log::MessageLog;
pub use runner::{run_console_chat, ConsoleSurface};
pub use session::ChatSession;
pub use typing::TypingDelay;
