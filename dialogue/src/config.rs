//! Engine tunables.

/// Knobs that change how strictly the engine accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueConfig {
    /// Minimum number of characters (after trimming) for the incident description. 1 means non-empty.
    pub description_min_len: usize,
}

impl DialogueConfig {
    pub const STRICT_DESCRIPTION_MIN_LEN: usize = 15;

    /// Requires a detailed description (at least 15 characters).
    pub fn strict() -> Self {
        Self {
            description_min_len: Self::STRICT_DESCRIPTION_MIN_LEN,
        }
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            description_min_len: 1,
        }
    }
}
