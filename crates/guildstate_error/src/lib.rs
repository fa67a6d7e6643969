//! Error types for the guildstate entity cache.
//!
//! This crate provides the error types shared by every guildstate crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Expected absences (a lookup for an uncached id, an update for an entity
//! that was evicted) are not errors at all; the registry reports them as
//! `None`. Only contract violations end up here.
//!
//! # Examples
//!
//! ```
//! use guildstate_error::{GuildStateResult, PayloadError, PayloadErrorKind};
//!
//! fn classify(kind: u8) -> GuildStateResult<&'static str> {
//!     match kind {
//!         0 => Ok("text"),
//!         other => Err(PayloadError::new(PayloadErrorKind::UnknownChannelType(other)))?,
//!     }
//! }
//!
//! assert!(classify(0).is_ok());
//! assert!(classify(99).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod capacity;
mod config;
mod error;
mod json;
mod payload;

pub use builder::{BuilderError, BuilderErrorKind};
pub use capacity::CapacityError;
pub use config::ConfigError;
pub use error::{GuildStateError, GuildStateErrorKind, GuildStateResult};
pub use json::JsonError;
pub use payload::{PayloadError, PayloadErrorKind};
