//! DialogueEngine: owns the flow state and turns each input into exactly one bot reply.

use prospera_core::{BotReply, UserInput};
use tracing::{debug, info};

use crate::config::DialogueConfig;
use crate::flow::{top_level_menu, Action, FlowType};
use crate::intent::{detect_intent, Intent};
use crate::protocol::{ProtocolGenerator, RandomProtocol};
use crate::state::{ActiveFlow, FlowState};
use crate::text;
use crate::transition::{self, Target, TransitionInput};

pub struct DialogueEngine {
    state: FlowState,
    config: DialogueConfig,
    protocols: Box<dyn ProtocolGenerator>,
}

impl DialogueEngine {
    /// Engine with random protocol codes.
    pub fn new(config: DialogueConfig) -> Self {
        Self::with_protocol_generator(config, Box::new(RandomProtocol::new()))
    }

    pub fn with_protocol_generator(
        config: DialogueConfig,
        protocols: Box<dyn ProtocolGenerator>,
    ) -> Self {
        Self {
            state: FlowState::Idle,
            config,
            protocols,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn config(&self) -> &DialogueConfig {
        &self.config
    }

    /// First message of an empty conversation: introduction plus the top-level menu.
    pub fn welcome(&self) -> BotReply {
        BotReply::with_options(text::WELCOME, top_level_menu())
    }

    /// Enters `flow_type` at step 0, discarding any flow in progress.
    pub fn start(&mut self, flow_type: FlowType) -> BotReply {
        info!(flow_type = %flow_type, "dialogue: flow started");
        self.state = FlowState::Active(ActiveFlow::new(flow_type));
        BotReply::text(flow_type.start_prompt())
    }

    /// Back to idle without a reply (panel closed).
    pub fn reset(&mut self) {
        if !self.state.is_idle() {
            debug!("dialogue: state reset");
        }
        self.state = FlowState::Idle;
    }

    /// Feeds one input through the state machine.
    ///
    /// Selecting a flow option always starts that flow. Any other input goes to the transition table when
    /// a flow is active, or to intent detection when idle.
    pub fn dispatch(&mut self, input: &UserInput) -> BotReply {
        match input {
            UserInput::Select(option) => match Action::parse(&option.action) {
                Some(Action::Start(flow_type)) => self.start(flow_type),
                action => self.advance(option.action.trim(), action),
            },
            UserInput::Text(raw) => {
                let content = raw.trim();
                self.advance(content, Action::parse(content))
            }
        }
    }

    fn advance(&mut self, content: &str, action: Option<Action>) -> BotReply {
        let FlowState::Active(flow) = &mut self.state else {
            return self.reply_idle(content, action);
        };

        let from = flow.step;
        let input = TransitionInput {
            text: content,
            action,
            config: &self.config,
        };
        let (target, reply) = transition::apply(flow, &input, self.protocols.as_mut());

        info!(
            flow_type = %flow.flow_type,
            from = from.index(),
            to = ?target,
            "dialogue: transition"
        );

        match target {
            Target::Step(_) => {}
            Target::Idle | Target::Closed => self.state = FlowState::Idle,
        }

        reply
    }

    fn reply_idle(&mut self, content: &str, action: Option<Action>) -> BotReply {
        match action {
            Some(Action::Restart) => BotReply::with_options(text::RESTART_MENU, top_level_menu()),
            Some(Action::CloseChat) => BotReply::closing(text::FAREWELL),
            _ => self.reply_to_intent(content),
        }
    }

    fn reply_to_intent(&mut self, content: &str) -> BotReply {
        let intent = detect_intent(content);
        debug!(intent = ?intent, "dialogue: idle input classified");

        match intent {
            Intent::Start(flow_type) => self.start(flow_type),
            Intent::Greeting => BotReply::with_options(text::GREETING, top_level_menu()),
            Intent::Unknown => BotReply::with_options(text::FALLBACK, top_level_menu()),
        }
    }
}

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::new(DialogueConfig::default())
    }
}
