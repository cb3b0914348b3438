pub mod persona;
pub mod service;
pub mod message;
pub mod wire;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
