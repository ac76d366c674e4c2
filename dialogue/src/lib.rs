//! # dialogue
//!
//! Scripted support-assistant engine. A conversation is either idle or inside one [`FlowType`]; inside a
//! flow, input is driven through an explicit transition table (email → confirmation → description →
//! post-completion choice). [`DialogueEngine`] exposes the state and a single `dispatch(input)`.
//!
//! ## Modules
//!
//! - [`flow`] – FlowType, Action, menus
//! - [`state`] – FlowState, ActiveFlow, Step, CollectedFields
//! - [`transition`] – the transition table
//! - [`intent`] – keyword intent detection for idle free text
//! - [`protocol`] – protocol code generation
//! - [`validation`] – input predicates
//! - [`text`] – assistant copy
//! - [`engine`] – DialogueEngine

pub mod config;
pub mod engine;
pub mod flow;
pub mod intent;
pub mod protocol;
pub mod state;
pub mod text;
pub mod transition;
pub mod validation;

pub use config::DialogueConfig;
pub use engine::DialogueEngine;
pub use flow::{post_completion_options, top_level_menu, Action, FlowType, ParseFlowTypeError};
pub use intent::{detect_intent, Intent};
pub use protocol::{
    is_protocol_code, FixedProtocol, ProtocolGenerator, RandomProtocol, PROTOCOL_ALPHABET,
    PROTOCOL_LEN,
};
pub use state::{ActiveFlow, CollectedFields, FlowState, Step};
pub use transition::{Target, Transition, TransitionInput, TRANSITIONS};
