//! Chatbot config loaded from environment variables (after `.env` via dotenvy).

use anyhow::Result;
use dialogue::DialogueConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct ChatbotConfig {
    /// LOG_FILE
    pub log_file: String,
    /// LOG_LEVEL; used when RUST_LOG is unset
    pub log_level: String,
    /// DATABASE_URL: a SQLite file path or `sqlite:` URL (`sqlite::memory:` for a throwaway store)
    pub database_url: String,
    /// CHATBOT_TYPING_BASE_MS
    pub typing_base_ms: u64,
    /// CHATBOT_TYPING_JITTER_MS; each reply waits base + uniform(0..jitter)
    pub typing_jitter_ms: u64,
    /// CHATBOT_DESCRIPTION_MIN_LEN; 15 gives the strict description check
    pub description_min_len: usize,
}

impl ChatbotConfig {
    pub fn load() -> Result<Self> {
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/prospera.log".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "./prospera.db".to_string());
        let typing_base_ms = env::var("CHATBOT_TYPING_BASE_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);
        let typing_jitter_ms = env::var("CHATBOT_TYPING_JITTER_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(500);
        let description_min_len = env::var("CHATBOT_DESCRIPTION_MIN_LEN")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1);

        Ok(Self {
            log_file,
            log_level,
            database_url,
            typing_base_ms,
            typing_jitter_ms,
            description_min_len,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.description_min_len == 0 {
            anyhow::bail!("CHATBOT_DESCRIPTION_MIN_LEN must be at least 1");
        }
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is set but empty");
        }
        Ok(())
    }

    pub fn dialogue_config(&self) -> DialogueConfig {
        DialogueConfig {
            description_min_len: self.description_min_len,
        }
    }
}
