//! Message operations
//!
//! The page fetcher ([`Client::get_messages`]) and the creator
//! ([`Client::create_message`]). Both are stateless: one request, one
//! classified outcome. Walking a whole history lives in
//! [`crate::pagination`].

use crate::client::Client;
use crate::error::{Error, Result};
use crate::types::{Fetched, Message, MessageList, Meta};
use serde::{Deserialize, Serialize};


// ============================================================================
// Query Parameters
// ============================================================================

/// Cursor and limit parameters for a message page fetch
///
/// Unset parameters are omitted from the request entirely. The three cursor
/// bounds are opaque server-assigned message IDs.
#[derive(Debug, Clone, Default)]
pub struct MessageQuery {
    limit: Option<u32>,
    before_id: Option<String>,
    since_id: Option<String>,
    after_id: Option<String>,
}

impl MessageQuery {
    /// Create an empty query: the server's defaults apply
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of messages per page
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Only messages created before the one with this ID
    #[must_use]
    pub fn before_id(mut self, id: impl Into<String>) -> Self {
        self.before_id = Some(id.into());
        self
    }

    /// Most recent messages since the one with this ID
    #[must_use]
    pub fn since_id(mut self, id: impl Into<String>) -> Self {
        self.since_id = Some(id.into());
        self
    }

    /// Only messages created immediately after the one with this ID
    #[must_use]
    pub fn after_id(mut self, id: impl Into<String>) -> Self {
        self.after_id = Some(id.into());
        self
    }

    /// Render the set parameters as query pairs
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(id) = &self.before_id {
            params.push(("before_id", id.clone()));
        }
        if let Some(id) = &self.since_id {
            params.push(("since_id", id.clone()));
        }
        if let Some(id) = &self.after_id {
            params.push(("after_id", id.clone()));
        }
        params
    }
}

// ============================================================================
// Creation Payload
// ============================================================================

/// A message to be created
///
/// The source GUID is a caller-generated idempotency token; the server echoes
/// it back on the created message. Attachments are not supported on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    /// Caller-generated idempotency token
    pub source_guid: String,
    /// Message text
    pub text: String,
}

impl NewMessage {
    /// Create a new message payload
    pub fn new(source_guid: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source_guid: source_guid.into(),
            text: text.into(),
        }
    }
}

/// Wire shape of the creation request body
#[derive(Serialize)]
struct CreatePayload<'a> {
    message: &'a NewMessage,
}

/// Wire shape of the creation response body
///
/// Unlike list endpoints, creation answers with a bare `{message}` object;
/// an error envelope shows up only on failure.
#[derive(Deserialize)]
struct CreateEnvelope {
    message: Option<Message>,
    meta: Option<Meta>,
}

// ============================================================================
// Operations
// ============================================================================

impl Client {
    /// Fetch one page of messages for a group
    ///
    /// Returns [`Fetched::NotModified`] on HTTP 304, meaning nothing new
    /// relative to the query's cursor bounds. A non-200 `meta.code` in the
    /// envelope fails with [`Error::Api`]; transport and parse failures keep
    /// their own kinds. Never retries.
    pub async fn get_messages(
        &self,
        group_id: &str,
        query: &MessageQuery,
    ) -> Result<Fetched<MessageList>> {
        self.transport
            .get_enveloped(&["groups", group_id, "messages"], &query.to_params())
            .await
    }

    /// Create a message in a group and return it as echoed by the server
    ///
    /// Classification mirrors [`Self::get_messages`]: HTTP 304 becomes
    /// [`Fetched::NotModified`], an error envelope becomes [`Error::Api`],
    /// and a well-formed body without a message is a decode failure.
    pub async fn create_message(
        &self,
        group_id: &str,
        message: &NewMessage,
    ) -> Result<Fetched<Message>> {
        let payload = CreatePayload { message };
        let envelope: Fetched<CreateEnvelope> = self
            .transport
            .post_json(&["groups", group_id, "messages"], &payload)
            .await?;

        match envelope {
            Fetched::NotModified => Ok(Fetched::NotModified),
            Fetched::Data(CreateEnvelope {
                message: Some(created),
                ..
            }) => Ok(Fetched::Data(created)),
            Fetched::Data(CreateEnvelope { meta, .. }) => match meta {
                Some(meta) if meta.code != 200 => Err(Error::api(meta.code, meta.errors)),
                _ => Err(Error::decode("creation response carried no message")),
            },
        }
    }
}
