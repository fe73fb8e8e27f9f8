//! # Chatbox shared
//!
//! Models and helpers that describe the enhanced chat request/response pair,
//! independent of the browser so they can be exercised natively.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cookies;
pub mod models;

pub use cookies::{CSRF_COOKIE_NAME, cookie_value, csrf_token};
pub use models::{ChatError, ChatQuery, ChatReply, ChatResult, MessageRole};
