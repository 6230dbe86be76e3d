//! HTTP transport module
//!
//! One request, one response, fully buffered, then classified. There is no
//! retry, rate limiting, or backoff layer; the only transport knob is the
//! client-level timeout.

mod transport;

pub use transport::Transport;

#[cfg(test)]
mod tests;
