//! The step transition table.
//!
//! Every flow type shares the same shape. Rows for a step are tried in order; the first row whose guard
//! accepts the input runs its effect and moves the flow to its target. The last row of each step accepts
//! anything and keeps the step, so invalid input always re-prompts.

use prospera_core::BotReply;

use crate::config::DialogueConfig;
use crate::flow::{post_completion_options, top_level_menu, Action};
use crate::protocol::ProtocolGenerator;
use crate::state::{ActiveFlow, Step};
use crate::text;
use crate::validation::{is_present, is_valid_email, meets_min_len};

/// Input as seen by guards and effects. `text` is trimmed.
pub struct TransitionInput<'a> {
    pub text: &'a str,
    pub action: Option<Action>,
    pub config: &'a DialogueConfig,
}

/// Where a transition leaves the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Step(Step),
    /// Flow discarded; conversation back at the top-level menu.
    Idle,
    /// Flow discarded and the panel must close.
    Closed,
}

pub type Guard = fn(&TransitionInput<'_>) -> bool;
pub type Effect = fn(&mut ActiveFlow, &TransitionInput<'_>, &mut dyn ProtocolGenerator) -> BotReply;

pub struct Transition {
    pub from: Step,
    pub guard: Guard,
    pub effect: Effect,
    pub to: Target,
}

pub static TRANSITIONS: [Transition; 9] = [
    Transition {
        from: Step::AwaitingEmail,
        guard: email_given,
        effect: store_email,
        to: Target::Step(Step::AwaitingConfirmation),
    },
    Transition {
        from: Step::AwaitingEmail,
        guard: always,
        effect: reject_email,
        to: Target::Step(Step::AwaitingEmail),
    },
    Transition {
        from: Step::AwaitingConfirmation,
        guard: confirmation_given,
        effect: store_confirmation,
        to: Target::Step(Step::AwaitingDescription),
    },
    Transition {
        from: Step::AwaitingConfirmation,
        guard: always,
        effect: require_confirmation,
        to: Target::Step(Step::AwaitingConfirmation),
    },
    Transition {
        from: Step::AwaitingDescription,
        guard: description_given,
        effect: issue_protocol,
        to: Target::Step(Step::AwaitingChoice),
    },
    Transition {
        from: Step::AwaitingDescription,
        guard: always,
        effect: reject_description,
        to: Target::Step(Step::AwaitingDescription),
    },
    Transition {
        from: Step::AwaitingChoice,
        guard: restart_chosen,
        effect: show_menu,
        to: Target::Idle,
    },
    Transition {
        from: Step::AwaitingChoice,
        guard: close_chosen,
        effect: say_goodbye,
        to: Target::Closed,
    },
    Transition {
        from: Step::AwaitingChoice,
        guard: always,
        effect: reoffer_choice,
        to: Target::Step(Step::AwaitingChoice),
    },
];

/// Runs the first matching row for the flow's current step. Moves `flow.step` when the target is a step.
pub fn apply(
    flow: &mut ActiveFlow,
    input: &TransitionInput<'_>,
    protocols: &mut dyn ProtocolGenerator,
) -> (Target, BotReply) {
    let row = TRANSITIONS
        .iter()
        .find(|t| t.from == flow.step && (t.guard)(input));

    match row {
        Some(t) => {
            let reply = (t.effect)(flow, input, protocols);
            if let Target::Step(step) = t.to {
                flow.step = step;
            }
            (t.to, reply)
        }
        None => (Target::Step(flow.step), BotReply::text(text::FALLBACK)),
    }
}

// --- guards ---

fn always(_: &TransitionInput<'_>) -> bool {
    true
}

fn email_given(input: &TransitionInput<'_>) -> bool {
    is_valid_email(input.text)
}

fn confirmation_given(input: &TransitionInput<'_>) -> bool {
    is_present(input.text)
}

fn description_given(input: &TransitionInput<'_>) -> bool {
    meets_min_len(input.text, input.config.description_min_len)
}

fn restart_chosen(input: &TransitionInput<'_>) -> bool {
    input.action == Some(Action::Restart)
}

fn close_chosen(input: &TransitionInput<'_>) -> bool {
    input.action == Some(Action::CloseChat)
}

// --- effects ---

fn store_email(
    flow: &mut ActiveFlow,
    input: &TransitionInput<'_>,
    _: &mut dyn ProtocolGenerator,
) -> BotReply {
    flow.fields.email = Some(input.text.to_string());
    BotReply::text(text::ASK_CONFIRMATION)
}

fn reject_email(_: &mut ActiveFlow, _: &TransitionInput<'_>, _: &mut dyn ProtocolGenerator) -> BotReply {
    BotReply::text(text::INVALID_EMAIL)
}

fn store_confirmation(
    flow: &mut ActiveFlow,
    input: &TransitionInput<'_>,
    _: &mut dyn ProtocolGenerator,
) -> BotReply {
    flow.fields.confirmation = Some(input.text.to_string());
    BotReply::text(text::ASK_DESCRIPTION)
}

fn require_confirmation(
    _: &mut ActiveFlow,
    _: &TransitionInput<'_>,
    _: &mut dyn ProtocolGenerator,
) -> BotReply {
    BotReply::text(text::CONFIRMATION_REQUIRED)
}

fn issue_protocol(
    flow: &mut ActiveFlow,
    input: &TransitionInput<'_>,
    protocols: &mut dyn ProtocolGenerator,
) -> BotReply {
    let protocol = protocols.generate();
    flow.fields.description = Some(input.text.to_string());
    let reply = BotReply::with_options(text::completion(&protocol), post_completion_options());
    flow.fields.protocol = Some(protocol);
    reply
}

fn reject_description(
    _: &mut ActiveFlow,
    input: &TransitionInput<'_>,
    _: &mut dyn ProtocolGenerator,
) -> BotReply {
    if is_present(input.text) {
        BotReply::text(text::DESCRIPTION_TOO_SHORT)
    } else {
        BotReply::text(text::DESCRIPTION_REQUIRED)
    }
}

fn show_menu(_: &mut ActiveFlow, _: &TransitionInput<'_>, _: &mut dyn ProtocolGenerator) -> BotReply {
    BotReply::with_options(text::RESTART_MENU, top_level_menu())
}

fn say_goodbye(_: &mut ActiveFlow, _: &TransitionInput<'_>, _: &mut dyn ProtocolGenerator) -> BotReply {
    BotReply::closing(text::FAREWELL)
}

fn reoffer_choice(
    _: &mut ActiveFlow,
    _: &TransitionInput<'_>,
    _: &mut dyn ProtocolGenerator,
) -> BotReply {
    BotReply::with_options(text::CHOICE_REPROMPT, post_completion_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowType;
    use crate::protocol::FixedProtocol;

    fn input<'a>(text: &'a str, config: &'a DialogueConfig) -> TransitionInput<'a> {
        TransitionInput {
            text,
            action: Action::parse(text),
            config,
        }
    }

    #[test]
    fn test_every_step_ends_with_a_catch_all_row() {
        for step in [
            Step::AwaitingEmail,
            Step::AwaitingConfirmation,
            Step::AwaitingDescription,
            Step::AwaitingChoice,
        ] {
            let last = TRANSITIONS
                .iter()
                .filter(|t| t.from == step)
                .last()
                .expect("step has rows");
            assert_eq!(last.to, Target::Step(step));
        }
    }

    #[test]
    fn test_only_description_row_reaches_choice_step() {
        let into_choice: Vec<_> = TRANSITIONS
            .iter()
            .filter(|t| t.to == Target::Step(Step::AwaitingChoice))
            .map(|t| t.from)
            .collect();
        assert_eq!(into_choice, vec![Step::AwaitingDescription, Step::AwaitingChoice]);
    }

    #[test]
    fn test_apply_walks_a_flow() {
        let config = DialogueConfig::default();
        let mut protocols = FixedProtocol("AB12CD34EF".into());
        let mut flow = ActiveFlow::new(FlowType::ProtectionInfo);

        let (target, _) = apply(&mut flow, &input("nope", &config), &mut protocols);
        assert_eq!(target, Target::Step(Step::AwaitingEmail));

        apply(&mut flow, &input("me@x.io", &config), &mut protocols);
        apply(&mut flow, &input("secret", &config), &mut protocols);
        let (target, reply) = apply(&mut flow, &input("perdi o cartão", &config), &mut protocols);

        assert_eq!(target, Target::Step(Step::AwaitingChoice));
        assert!(reply.text.contains("**AB12CD34EF**"));
        assert_eq!(flow.fields.protocol.as_deref(), Some("AB12CD34EF"));
        assert!(flow.protocol_invariant_holds());
    }

    #[test]
    fn test_choice_targets() {
        let config = DialogueConfig::default();
        let mut protocols = FixedProtocol("AB12CD34EF".into());
        let mut flow = ActiveFlow::new(FlowType::Complaint);
        flow.step = Step::AwaitingChoice;
        flow.fields.protocol = Some("AB12CD34EF".into());

        let (target, reply) = apply(&mut flow, &input("hmm", &config), &mut protocols);
        assert_eq!(target, Target::Step(Step::AwaitingChoice));
        assert_eq!(reply.options, post_completion_options());

        let (target, reply) = apply(&mut flow, &input("close_chat", &config), &mut protocols);
        assert_eq!(target, Target::Closed);
        assert!(reply.close_panel);
    }
}
