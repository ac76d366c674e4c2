//! Core types: chat messages, quick replies, user input, bot replies, and the Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Clickable label mapped to an action key, offered alongside a bot message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickReply {
    pub label: String,
    pub action: String,
}

impl QuickReply {
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
        }
    }
}

/// One entry of the message log. Text may carry `**bold**` markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub options: Vec<QuickReply>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Message typed or clicked by the user; never carries options.
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            options: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Message produced by the assistant.
    pub fn from_bot(text: impl Into<String>, options: Vec<QuickReply>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
            options,
            timestamp: Utc::now(),
        }
    }
}

/// Raw input from the presentation layer: free text or a quick-reply click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserInput {
    Text(String),
    Select(QuickReply),
}

impl UserInput {
    /// Text echoed into the log for this input (the label for a click).
    pub fn display_text(&self) -> &str {
        match self {
            UserInput::Text(text) => text,
            UserInput::Select(option) => &option.label,
        }
    }
}

/// A single input event travelling through the handler chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEvent {
    pub id: String,
    pub session_id: String,
    pub input: UserInput,
    pub created_at: DateTime<Utc>,
}

impl UserEvent {
    /// Creates an event with a generated id and current timestamp.
    pub fn new(session_id: impl Into<String>, input: UserInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            session_id: session_id.into(),
            input,
            created_at: Utc::now(),
        }
    }
}

/// What the assistant answers: text, optional quick replies, and whether the panel must close afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    pub text: String,
    pub options: Vec<QuickReply>,
    pub close_panel: bool,
}

impl BotReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
            close_panel: false,
        }
    }

    pub fn with_options(text: impl Into<String>, options: Vec<QuickReply>) -> Self {
        Self {
            text: text.into(),
            options,
            close_panel: false,
        }
    }

    /// Reply shown right before the panel closes.
    pub fn closing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
            close_panel: true,
        }
    }

    pub fn into_message(self) -> ChatMessage {
        ChatMessage::from_bot(self.text, self.options)
    }
}

/// Handler result for the chain. `Reply` carries the bot answer so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the bot reply.
    Reply(BotReply),
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &UserEvent) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _event: &UserEvent) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _event: &UserEvent,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
