//! Board service configuration.

/// Limits applied to task fields on creation.
///
/// # Examples
///
/// ```
/// use taskboard::task::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert_eq!(config.max_title_length, 200);
///
/// let strict = BoardConfig::strict();
/// assert!(strict.max_title_length < config.max_title_length);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Maximum title length in characters.
    pub max_title_length: usize,
    /// Maximum description length in characters.
    pub max_description_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            max_description_length: 5_000,
        }
    }
}

impl BoardConfig {
    /// Creates a configuration with reduced limits, for compact card
    /// layouts.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_length: 80,
            max_description_length: 1_000,
        }
    }
}
