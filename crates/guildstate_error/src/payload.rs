//! Snapshot contract violations.
//!
//! A payload error means the ingestion layer handed the registry something
//! that cannot be placed in the entity graph. These are never swallowed.

/// Specific payload error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PayloadErrorKind {
    /// Channel `type` discriminant matches no known channel kind.
    #[display("Unknown channel type: {_0}")]
    UnknownChannelType(u8),

    /// A guild-owned entity names a guild that is not cached.
    #[display("Guild {guild_id} not cached for {entity} {id}")]
    MissingGuild {
        /// Entity kind being placed
        entity: &'static str,
        /// Entity id
        id: u64,
        /// Guild id the entity points at
        guild_id: u64,
    },

    /// A field required to place the entity is absent.
    #[display("Missing field `{field}` on {entity} {id}")]
    MissingField {
        /// Entity kind being placed
        entity: &'static str,
        /// Entity id
        id: u64,
        /// Field name
        field: &'static str,
    },
}

/// Payload error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_getters::Getters)]
#[display("Payload Error: {} at line {} in {}", kind, line, file)]
pub struct PayloadError {
    kind: PayloadErrorKind,
    line: u32,
    file: &'static str,
}

impl PayloadError {
    /// Create a new PayloadError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use guildstate_error::{PayloadError, PayloadErrorKind};
    ///
    /// let err = PayloadError::new(PayloadErrorKind::UnknownChannelType(42));
    /// assert_eq!(err.kind(), &PayloadErrorKind::UnknownChannelType(42));
    /// ```
    #[track_caller]
    pub fn new(kind: PayloadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
