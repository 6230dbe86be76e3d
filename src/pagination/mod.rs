//! Pagination module
//!
//! Implements the backward cursor walk over a group's message history:
//! repeated page fetches advancing a `before_id` cursor until the server
//! answers with the HTTP 304 "nothing new" sentinel.

mod walker;

pub use walker::WalkOptions;
