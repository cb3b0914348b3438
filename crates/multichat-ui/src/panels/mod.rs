pub mod chat;
pub mod header;
pub mod personas;
