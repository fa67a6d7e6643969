//! Errors raised while loading or validating registry configuration.

/// Rejected configuration, tagged with where it was rejected.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the configuration
    pub message: String,
    /// Line that raised the error
    pub line: u32,
    /// File that raised the error
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration problem at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use guildstate_error::ConfigError;
    ///
    /// let max_messages = 0_usize;
    /// let err = ConfigError::new(format!("max_messages must be positive, got {max_messages}"));
    /// assert!(err.message.contains("max_messages"));
    /// assert!(err.to_string().starts_with("Configuration Error: max_messages"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
