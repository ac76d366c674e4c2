//! Chatbot configuration: logging, database and dialogue tunables. Loaded from env.

mod base;


pub use base::ChatbotConfig;
