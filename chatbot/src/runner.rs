//! Console host for a chat session: stdin lines in, rendered messages out.

use anyhow::Result;
use async_trait::async_trait;
use dialogue::FlowType;
use prospera_core::{strip_markup, ChatMessage, ChatSurface, QuickReply, Sender, UserInput};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, instrument};

use crate::components::build_dialogue_handler;
use crate::config::ChatbotConfig;
use crate::session::ChatSession;
use crate::typing::TypingDelay;

/// Typed to leave the chat.
pub const QUIT_COMMAND: &str = "/quit";

const BOT_NAME: &str = "Lótus";

/// Prints messages to stdout. Options are numbered so they can be picked by typing the number.
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn format(message: &ChatMessage) -> String {
        let speaker = match message.sender {
            Sender::User => "Você",
            Sender::Bot => BOT_NAME,
        };
        let mut out = format!("{}: {}", speaker, strip_markup(&message.text));
        for (i, option) in message.options.iter().enumerate() {
            out.push_str(&format!("\n  {}) {}", i + 1, option.label));
        }
        out
    }
}

/// Writes one line and flushes; a failed write surfaces as [`prospera_core::ProsperaError::Io`].
pub fn write_line<W: Write>(out: &mut W, line: &str) -> prospera_core::Result<()> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}

#[async_trait]
impl ChatSurface for ConsoleSurface {
    async fn render(&self, message: &ChatMessage) -> prospera_core::Result<()> {
        // The terminal already shows what the user typed.
        if message.sender == Sender::Bot {
            write_line(&mut std::io::stdout().lock(), &Self::format(message))?;
        }
        Ok(())
    }

    async fn set_typing(&self, typing: bool) -> prospera_core::Result<()> {
        if typing {
            write_line(
                &mut std::io::stdout().lock(),
                &format!("{} está digitando...", BOT_NAME),
            )?;
        }
        Ok(())
    }

    async fn close(&self) -> prospera_core::Result<()> {
        write_line(&mut std::io::stdout().lock(), "[chat encerrado]")
    }
}

/// A number within the offered options selects that option; anything else is free text.
pub fn resolve_input(line: &str, options: &[QuickReply]) -> UserInput {
    let trimmed = line.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => UserInput::Select(options[n - 1].clone()),
        _ => UserInput::Text(trimmed.to_string()),
    }
}

/// Opens a session (optionally on a flow) and reads stdin until `/quit`, end of input or the panel closes.
#[instrument(skip(config))]
pub async fn run_console_chat(config: &ChatbotConfig, initial_flow: Option<FlowType>) -> Result<()> {
    let dialogue = build_dialogue_handler(config);
    let session = ChatSession::new(
        dialogue,
        Arc::new(ConsoleSurface),
        TypingDelay::from(config),
    );
    info!(session_id = %session.id(), "Console chat started");

    session.open(initial_flow).await?;
    println!("(digite o número de uma opção, ou {} para sair)", QUIT_COMMAND);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == QUIT_COMMAND {
            session.close().await?;
            break;
        }
        let options = session.current_options().await;
        if let Err(e) = session.submit(resolve_input(&line, &options)).await {
            error!(error = %e, session_id = %session.id(), "Failed to process input");
        }
        if !session.is_open() {
            break;
        }
    }

    info!(session_id = %session.id(), "Console chat finished");
    Ok(())
}
