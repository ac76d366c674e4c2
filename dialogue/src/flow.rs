//! Support scenarios, quick-reply actions, and the menus built from them.

use std::fmt;
use std::str::FromStr;

use prospera_core::QuickReply;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text;

/// One scripted support scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowType {
    TheftReport,
    Complaint,
    ProtectionInfo,
    SupportChannel,
    AccountCancellation,
}

impl FlowType {
    /// Menu order.
    pub const ALL: [FlowType; 5] = [
        FlowType::TheftReport,
        FlowType::Complaint,
        FlowType::ProtectionInfo,
        FlowType::SupportChannel,
        FlowType::AccountCancellation,
    ];

    pub fn action_key(self) -> &'static str {
        match self {
            FlowType::TheftReport => "me_roubaram",
            FlowType::Complaint => "denuncias",
            FlowType::ProtectionInfo => "protecao",
            FlowType::SupportChannel => "atendimento",
            FlowType::AccountCancellation => "cancelar_conta",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowType::TheftReport => "Me Roubaram",
            FlowType::Complaint => "Canal de Denúncias",
            FlowType::ProtectionInfo => "Central de Proteção",
            FlowType::SupportChannel => "Canais de Atendimento",
            FlowType::AccountCancellation => "Cancelar Minha Conta",
        }
    }

    /// First bot message of the flow (asks for the email).
    pub fn start_prompt(self) -> &'static str {
        match self {
            FlowType::TheftReport => text::THEFT_START,
            FlowType::Complaint => text::COMPLAINT_START,
            FlowType::ProtectionInfo => text::PROTECTION_START,
            FlowType::SupportChannel => text::SUPPORT_START,
            FlowType::AccountCancellation => text::CANCELLATION_START,
        }
    }

    pub fn from_action_key(key: &str) -> Option<Self> {
        FlowType::ALL.into_iter().find(|f| f.action_key() == key)
    }

    pub fn quick_reply(self) -> QuickReply {
        QuickReply::new(self.label(), self.action_key())
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_key())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown flow '{0}' (expected one of: me_roubaram, denuncias, protecao, atendimento, cancelar_conta)")]
pub struct ParseFlowTypeError(pub String);

impl FromStr for FlowType {
    type Err = ParseFlowTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowType::from_action_key(s.trim()).ok_or_else(|| ParseFlowTypeError(s.to_string()))
    }
}

/// Meaning of a quick-reply action key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start(FlowType),
    Restart,
    CloseChat,
}

impl Action {
    pub const RESTART_KEY: &'static str = "restart";
    pub const CLOSE_CHAT_KEY: &'static str = "close_chat";

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            Self::RESTART_KEY => Some(Action::Restart),
            Self::CLOSE_CHAT_KEY => Some(Action::CloseChat),
            other => FlowType::from_action_key(other).map(Action::Start),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Action::Start(flow) => flow.action_key(),
            Action::Restart => Self::RESTART_KEY,
            Action::CloseChat => Self::CLOSE_CHAT_KEY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Start(flow) => flow.label(),
            Action::Restart => text::MORE_HELP_LABEL,
            Action::CloseChat => text::NO_THANKS_LABEL,
        }
    }

    pub fn quick_reply(self) -> QuickReply {
        QuickReply::new(self.label(), self.key())
    }
}

/// Top-level menu: one option per flow type.
pub fn top_level_menu() -> Vec<QuickReply> {
    FlowType::ALL.into_iter().map(FlowType::quick_reply).collect()
}

/// "Need more help" / "no, thanks" offered after a protocol is issued.
pub fn post_completion_options() -> Vec<QuickReply> {
    vec![Action::Restart.quick_reply(), Action::CloseChat.quick_reply()]
}
