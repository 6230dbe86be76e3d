//! # GroupMe Client
//!
//! A typed async client for the GroupMe v3 group-messages API.
//!
//! ## Features
//!
//! - **Message Listing**: `GET /groups/{id}/messages` with cursor parameters
//! - **Full History**: backward pagination over `before_id` until the server
//!   reports nothing new (HTTP 304)
//! - **Message Creation**: `POST /groups/{id}/messages` with a client-supplied
//!   source GUID for idempotency
//! - **Classified Errors**: transport, parse, and API-envelope failures are
//!   distinct kinds; "not modified" is a normal outcome, not an error
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use groupme_client::{Client, ClientConfig, Fetched, MessageQuery};
//!
//! #[tokio::main]
//! async fn main() -> groupme_client::Result<()> {
//!     let config = ClientConfig::builder()
//!         .access_token("<token>")
//!         .build();
//!     let client = Client::with_config(config)?;
//!
//!     // One page of the 20 newest messages
//!     let query = MessageQuery::new().limit(20);
//!     if let Fetched::Data(page) = client.get_messages("1234", &query).await? {
//!         for msg in &page.messages {
//!             println!("{}: {:?}", msg.name, msg.text);
//!         }
//!     }
//!
//!     // Everything the group ever said, newest first
//!     let history = client.all_messages("1234").await?;
//!     println!("{} messages total", history.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Client configuration
pub mod config;

/// Wire types: messages, page envelopes, response metadata
pub mod types;

/// The client handle
pub mod client;

/// HTTP transport: URL building, envelope decoding, status classification
pub mod http;

/// Message operations: page fetching and creation
pub mod messages;

/// History walking via backward cursor pagination
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, Result};
pub use messages::{MessageQuery, NewMessage};
pub use pagination::WalkOptions;
pub use types::{Attachment, Event, Fetched, Message, MessageList, Meta};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
