//! Ordered transcript of the open panel. Cleared when the panel closes.

use prospera_core::ChatMessage;

#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospera_core::{QuickReply, Sender};

    #[test]
    fn test_append_keeps_order() {
        let mut log = MessageLog::new();
        log.append(ChatMessage::from_user("oi"));
        log.append(ChatMessage::from_bot(
            "Olá!",
            vec![QuickReply::new("Denúncias", "denuncias")],
        ));

        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].sender, Sender::User);
        assert_eq!(log.last().map(|m| m.options.len()), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut log = MessageLog::new();
        log.append(ChatMessage::from_user("oi"));
        log.clear();
        assert!(log.is_empty());
        assert!(log.last().is_none());
    }
}
