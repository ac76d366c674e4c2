//! ChatSession: one open/close lifecycle of the chat panel.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use dialogue::FlowType;
use handler_chain::HandlerChain;
use prospera_core::{
    BotReply, ChatMessage, ChatSurface, HandlerError, HandlerResponse, QuickReply, Result, Sender,
    UserEvent, UserInput,
};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::components::build_handler_chain;
use crate::handlers::DialogueHandler;
use crate::message_log::MessageLog;
use crate::typing::TypingDelay;

/// Owns the message log and routes input through the handler chain to the surface.
///
/// Every close or flow switch bumps a generation counter. A reply still waiting out its typing delay at that point
/// belongs to an older generation and is dropped.
pub struct ChatSession {
    id: String,
    chain: HandlerChain,
    dialogue: Arc<DialogueHandler>,
    surface: Arc<dyn ChatSurface>,
    log: Mutex<MessageLog>,
    typing: TypingDelay,
    generation: AtomicU64,
    open: AtomicBool,
}

impl ChatSession {
    pub fn new(
        dialogue: Arc<DialogueHandler>,
        surface: Arc<dyn ChatSurface>,
        typing: TypingDelay,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chain: build_handler_chain(dialogue.clone()),
            dialogue,
            surface,
            log: Mutex::new(MessageLog::new()),
            typing,
            generation: AtomicU64::new(0),
            open: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Snapshot of the message log.
    pub async fn log(&self) -> Vec<ChatMessage> {
        self.log.lock().await.messages().to_vec()
    }

    /// Quick replies offered by the latest bot message, if it is the last message in the log.
    pub async fn current_options(&self) -> Vec<QuickReply> {
        match self.log.lock().await.last() {
            Some(message) if message.sender == Sender::Bot => message.options.clone(),
            _ => Vec::new(),
        }
    }

    /// Opens the panel.
    ///
    /// With a flow, that flow starts at its first step unless it is already the active one; the log is
    /// cleared first. Without a flow, an empty log gets the welcome message and menu.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn open(&self, flow: Option<FlowType>) -> Result<()> {
        self.open.store(true, Ordering::SeqCst);

        match flow {
            Some(flow_type) => {
                if self.dialogue.state().await.flow_type() == Some(flow_type) {
                    debug!(flow_type = %flow_type, "Flow already active");
                    return Ok(());
                }
                // Replies still typing for the previous flow are dropped.
                let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                self.log.lock().await.clear();
                info!(flow_type = %flow_type, "Panel opened on flow");
                let reply = self.dialogue.start(flow_type).await;
                self.deliver(reply, generation).await
            }
            None => {
                if !self.log.lock().await.is_empty() {
                    return Ok(());
                }
                let generation = self.generation.load(Ordering::SeqCst);
                info!("Panel opened");
                let welcome = self.dialogue.welcome().await;
                self.deliver(welcome, generation).await
            }
        }
    }

    /// Closes the panel: clears the log, resets the dialogue and closes the surface. Idempotent.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub async fn close(&self) -> Result<()> {
        if !self.open.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.log.lock().await.clear();
        self.dialogue.reset().await;
        info!("Panel closed");
        self.surface.set_typing(false).await?;
        self.surface.close().await
    }

    /// Echoes the input into the log, runs it through the chain and delivers the reply after the typing delay.
    ///
    /// Blank text is ignored. Fails with [`HandlerError::PanelClosed`] when the panel is not open.
    #[instrument(skip(self, input), fields(session_id = %self.id))]
    pub async fn submit(&self, input: UserInput) -> Result<()> {
        if !self.is_open() {
            return Err(HandlerError::PanelClosed.into());
        }
        let shown = input.display_text().trim().to_string();
        if shown.is_empty() {
            debug!("Ignoring blank input");
            return Ok(());
        }

        let generation = self.generation.load(Ordering::SeqCst);
        self.append(ChatMessage::from_user(shown)).await?;

        let event = UserEvent::new(self.id.clone(), input);
        match self.chain.handle(&event).await? {
            HandlerResponse::Reply(reply) => self.deliver(reply, generation).await,
            other => {
                debug!(response = ?other, "Chain finished without a reply");
                Ok(())
            }
        }
    }

    async fn deliver(&self, reply: BotReply, generation: u64) -> Result<()> {
        self.surface.set_typing(true).await?;
        let delay = self.typing.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Panel closed while typing; reply dropped");
            return Ok(());
        }

        self.surface.set_typing(false).await?;
        let close_panel = reply.close_panel;
        self.append(reply.into_message()).await?;
        if close_panel {
            self.close().await?;
        }
        Ok(())
    }

    async fn append(&self, message: ChatMessage) -> Result<()> {
        self.log.lock().await.append(message.clone());
        self.surface.render(&message).await
    }
}
