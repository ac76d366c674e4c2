//! # prospera-core
//!
//! Core types and traits for the Prospera assistant: [`ChatSurface`], [`Handler`], chat message and
//! input types, and tracing initialization. Transport-agnostic; used by dialogue, handler-chain and chatbot.

pub mod error;
pub mod logger;
pub mod surface;
pub mod types;

pub use error::{HandlerError, ProsperaError, Result};
pub use logger::init_tracing;
pub use surface::{strip_markup, ChatSurface};
pub use types::{
    BotReply, ChatMessage, Handler, HandlerResponse, QuickReply, Sender, UserEvent, UserInput,
};
