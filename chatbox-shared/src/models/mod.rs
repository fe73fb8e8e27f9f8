//! Request, reply, and error types exchanged with the chat endpoint.

pub mod chat;
pub mod errors;

pub use chat::{ChatQuery, ChatReply, MessageRole};
pub use errors::{ChatError, ChatResult};
