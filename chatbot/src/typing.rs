//! Simulated typing time before each bot reply.

use rand::Rng;
use std::time::Duration;

use crate::config::ChatbotConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    base: Duration,
    jitter: Duration,
}

impl TypingDelay {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// Replies are delivered immediately.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// `base + uniform(0..jitter)`.
    pub fn sample(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        self.base + Duration::from_millis(rand::thread_rng().gen_range(0..jitter_ms))
    }
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), Duration::from_millis(500))
    }
}

impl From<&ChatbotConfig> for TypingDelay {
    fn from(config: &ChatbotConfig) -> Self {
        Self::new(
            Duration::from_millis(config.typing_base_ms),
            Duration::from_millis(config.typing_jitter_ms),
        )
    }
}
