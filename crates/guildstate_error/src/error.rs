//! Top-level error wrapper types.

use crate::{BuilderError, CapacityError, ConfigError, JsonError, PayloadError};

/// Every hard failure the cache can report.
///
/// # Examples
///
/// ```
/// use guildstate_error::{CapacityError, GuildStateError, GuildStateErrorKind};
///
/// let err: GuildStateError = CapacityError::new("messages", 0).into();
/// assert!(matches!(err.kind(), GuildStateErrorKind::Capacity(_)));
/// assert!(format!("{}", err).contains("Capacity Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GuildStateErrorKind {
    /// Snapshot violates the data contract
    #[from(PayloadError)]
    Payload(PayloadError),
    /// Bounded cache configured with a non-positive capacity
    #[from(CapacityError)]
    Capacity(CapacityError),
    /// Configuration could not be loaded
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON snapshot could not be decoded
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// guildstate error with kind discrimination.
///
/// # Examples
///
/// ```
/// use guildstate_error::{ConfigError, GuildStateResult};
///
/// fn might_fail() -> GuildStateResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("GuildState Error: {}", _0)]
pub struct GuildStateError(Box<GuildStateErrorKind>);

impl GuildStateError {
    /// Create a new error from a kind.
    pub fn new(kind: GuildStateErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GuildStateErrorKind {
        &self.0
    }

    /// True when the error is a data-contract violation in a snapshot.
    pub fn is_invalid_payload(&self) -> bool {
        matches!(
            self.kind(),
            GuildStateErrorKind::Payload(_) | GuildStateErrorKind::Json(_)
        )
    }
}

// Generic From implementation for any type that converts to GuildStateErrorKind
impl<T> From<T> for GuildStateError
where
    T: Into<GuildStateErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for guildstate operations.
pub type GuildStateResult<T> = std::result::Result<T, GuildStateError>;
