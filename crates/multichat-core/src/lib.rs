//! Client-side chat core: the session state machine and the port it uses to
//! reach the backend.

pub mod event_bus;
pub mod ports;
pub mod session;
