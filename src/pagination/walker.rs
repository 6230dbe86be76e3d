//! Backward history walking
//!
//! Pages are requested newest-first; the cursor after each page is the ID of
//! that page's oldest message, so consecutive pages neither overlap nor skip
//! (assuming the upstream list stays stable during the walk, which is not
//! enforced). The walk ends when the server answers HTTP 304.

use crate::client::Client;
use crate::error::{Error, Result};
use crate::messages::MessageQuery;
use crate::types::{Fetched, Message};
use tracing::debug;

/// Options for a history walk
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Messages requested per page
    pub page_size: u32,
    /// Maximum number of round trips before the walk fails with
    /// [`Error::PageLimitExceeded`]; `None` walks until the server
    /// signals termination
    pub max_pages: Option<u32>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_pages: None,
        }
    }
}

impl WalkOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Cap the number of round trips
    #[must_use]
    pub fn max_pages(mut self, max: u32) -> Self {
        self.max_pages = Some(max);
        self
    }
}

impl Client {
    /// Retrieve every message in a group, newest first
    ///
    /// Walks backward in pages of 100 until the server reports nothing new.
    /// Any failure aborts the walk and discards what was accumulated: callers
    /// get the complete history or an error, never a silent prefix.
    pub async fn all_messages(&self, group_id: &str) -> Result<Vec<Message>> {
        self.all_messages_with(group_id, WalkOptions::default()).await
    }

    /// Retrieve every message in a group with explicit walk options
    pub async fn all_messages_with(
        &self,
        group_id: &str,
        options: WalkOptions,
    ) -> Result<Vec<Message>> {
        let mut history = Vec::new();
        let mut before_id: Option<String> = None;
        let mut round_trips: u32 = 0;

        loop {
            if let Some(max) = options.max_pages {
                if round_trips >= max {
                    return Err(Error::PageLimitExceeded { max_pages: max });
                }
            }

            let mut query = MessageQuery::new().limit(options.page_size);
            if let Some(id) = &before_id {
                query = query.before_id(id.clone());
            }

            round_trips += 1;
            let page = match self.get_messages(group_id, &query).await? {
                Fetched::NotModified => break,
                Fetched::Data(page) => page,
            };

            // An empty page with a success envelope also means the history
            // is exhausted; there is no cursor left to advance.
            let Some(oldest) = page.messages.last() else {
                break;
            };

            debug!(
                "fetched page {} of group {}: {} messages, cursor now {}",
                round_trips,
                group_id,
                page.messages.len(),
                oldest.id
            );
            before_id = Some(oldest.id.clone());
            history.extend(page.messages);
        }

        Ok(history)
    }
}
