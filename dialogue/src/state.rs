//! Conversation state: idle, or a flow with a step cursor and the fields collected so far.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flow::FlowType;

/// Progress inside a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    AwaitingEmail,
    AwaitingConfirmation,
    AwaitingDescription,
    /// Protocol issued; waiting for "need more help" or "no, thanks".
    AwaitingChoice,
}

impl Step {
    pub fn index(self) -> u8 {
        match self {
            Step::AwaitingEmail => 0,
            Step::AwaitingConfirmation => 1,
            Step::AwaitingDescription => 2,
            Step::AwaitingChoice => 3,
        }
    }
}

/// Fields gathered while walking a flow.
///
/// `confirmation` is only an identity-confirmation string: it is never compared against anything,
/// never serialized, and redacted from `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedFields {
    pub email: Option<String>,
    #[serde(skip)]
    pub confirmation: Option<String>,
    pub description: Option<String>,
    pub protocol: Option<String>,
}

impl fmt::Debug for CollectedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectedFields")
            .field("email", &self.email)
            .field(
                "confirmation",
                &self.confirmation.as_ref().map(|_| "<redacted>"),
            )
            .field("description", &self.description)
            .field("protocol", &self.protocol)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFlow {
    pub flow_type: FlowType,
    pub step: Step,
    pub fields: CollectedFields,
}

impl ActiveFlow {
    pub fn new(flow_type: FlowType) -> Self {
        Self {
            flow_type,
            step: Step::AwaitingEmail,
            fields: CollectedFields::default(),
        }
    }

    /// A protocol exists exactly when the description step has been passed.
    pub fn protocol_invariant_holds(&self) -> bool {
        self.fields.protocol.is_some() == (self.step == Step::AwaitingChoice)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowState {
    #[default]
    Idle,
    Active(ActiveFlow),
}

impl FlowState {
    pub fn is_idle(&self) -> bool {
        matches!(self, FlowState::Idle)
    }

    pub fn active(&self) -> Option<&ActiveFlow> {
        match self {
            FlowState::Idle => None,
            FlowState::Active(flow) => Some(flow),
        }
    }

    pub fn flow_type(&self) -> Option<FlowType> {
        self.active().map(|f| f.flow_type)
    }

    pub fn step(&self) -> Option<Step> {
        self.active().map(|f| f.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_is_redacted_from_debug() {
        let fields = CollectedFields {
            confirmation: Some("hunter2".into()),
            ..Default::default()
        };
        let debug = format!("{:?}", fields);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_confirmation_is_not_serialized() {
        let mut flow = ActiveFlow::new(FlowType::Complaint);
        flow.fields.email = Some("user@test.com".into());
        flow.fields.confirmation = Some("hunter2".into());
        let json = serde_json::to_string(&FlowState::Active(flow)).unwrap();
        assert!(json.contains("user@test.com"));
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_new_flow_starts_at_step_zero() {
        let flow = ActiveFlow::new(FlowType::TheftReport);
        assert_eq!(flow.step.index(), 0);
        assert!(flow.protocol_invariant_holds());
        assert_eq!(FlowState::Active(flow).flow_type(), Some(FlowType::TheftReport));
        assert_eq!(FlowState::Idle.step(), None);
    }
}
