//! Wire types for the GroupMe group-messages API
//!
//! Message shapes follow the v3 API JSON. Messages are immutable records
//! identified by `id` and ordered newest-first within a page; page envelopes
//! and response metadata are transient values produced per request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JSON object type (re-exported from serde_json)
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// Messages
// ============================================================================

/// One message within a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned message ID
    pub id: String,
    /// Caller-supplied idempotency token
    #[serde(default)]
    pub source_guid: String,
    /// Author's user ID
    #[serde(default)]
    pub user_id: String,
    /// Group the message belongs to
    #[serde(default)]
    pub group_id: String,
    /// Sender ID (distinct from `user_id` for bots)
    #[serde(default)]
    pub sender_id: String,

    /// Author display name
    #[serde(default)]
    pub name: String,
    /// Author avatar URL
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Message text; null for attachment-only messages
    #[serde(default)]
    pub text: Option<String>,

    /// "user", "bot", or "system"
    #[serde(default)]
    pub sender_type: String,
    /// Originating platform
    #[serde(default)]
    pub platform: String,

    /// Creation time as epoch seconds
    #[serde(default)]
    pub created_at: i64,
    /// Whether the server generated this message
    #[serde(default)]
    pub system: bool,

    /// User IDs that favorited this message
    #[serde(default)]
    pub favorited_by: Vec<String>,
    /// Attached media and metadata
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// System event payload, if any
    #[serde(default)]
    pub event: Event,
}

impl Message {
    /// Creation time as a UTC datetime
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

/// A message attachment
///
/// Shapes vary by `type` (image, location, mentions, ...); fields beyond the
/// discriminator are kept as an open JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment type discriminator
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Remaining type-specific fields
    #[serde(flatten)]
    pub data: JsonObject,
}

/// A system event attached to a message
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    /// Event type discriminator
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Remaining type-specific fields
    #[serde(flatten)]
    pub data: JsonObject,
}

// ============================================================================
// Envelopes
// ============================================================================

/// One page of messages, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageList {
    /// Total message count for the group
    pub count: u32,
    /// The page's messages in recency order
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Response metadata accompanying every list envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Application-level status code
    pub code: u16,
    /// Structured error descriptions on failure
    #[serde(default)]
    pub errors: Vec<String>,
}

// ============================================================================
// Fetch Outcome
// ============================================================================

/// Outcome of one fetch against the API
///
/// HTTP 304 is a normal "nothing new" signal, not a failure, so it gets its
/// own variant rather than an error kind. Callers loop on `NotModified` to
/// terminate pagination.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The server returned fresh data
    Data(T),
    /// HTTP 304: nothing new relative to the request parameters
    NotModified,
}

impl<T> Fetched<T> {
    /// Check if this outcome carries data
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Check if this is the not-modified sentinel
    pub fn is_not_modified(&self) -> bool {
        matches!(self, Self::NotModified)
    }

    /// Extract the data, if any
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::NotModified => None,
        }
    }
}
