//! Member presence.

use crate::PresencePayload;
use serde::{Deserialize, Serialize};

/// Online status of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Online
    #[display("online")]
    Online,
    /// Idle
    #[display("idle")]
    Idle,
    /// Do not disturb
    #[display("dnd")]
    Dnd,
    /// Offline or invisible
    #[default]
    #[display("offline")]
    Offline,
}

/// Something a member is doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Activity {
    /// Activity name
    name: String,
    /// Activity type discriminant (playing, streaming, listening, ...)
    #[serde(rename = "type", default)]
    kind: u8,
    /// Stream URL, for streaming activities
    #[serde(default)]
    url: Option<String>,
}

/// A member's presence as last reported.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Presence {
    status: Status,
    activities: Vec<Activity>,
}

impl Presence {
    /// Build a presence from a snapshot.
    pub fn from_payload(payload: &PresencePayload) -> Self {
        Self {
            status: *payload.status(),
            activities: payload.activities().clone(),
        }
    }
}
