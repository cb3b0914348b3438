//! Browser adapters for the chat client: the HTTP backend, request
//! timeouts, and page location lookups.

pub mod backend;
pub mod location;
pub mod timeout;
