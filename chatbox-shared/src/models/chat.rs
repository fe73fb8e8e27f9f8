//! Chat request and reply models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ChatError, ChatResult};

/// Bubble text used when a successful reply carries semantic hits but no message.
pub const SEMANTIC_FALLBACK_TEXT: &str = "Response";

/// Bubble text used when a successful reply carries nothing renderable.
pub const EMPTY_REPLY_TEXT: &str = "No response.";

/// Who a rendered bubble is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// The person typing into the chat form
    User,
    /// The chat backend
    Assistant,
}

impl MessageRole {
    /// Lowercase role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// CSS class list applied to a bubble of this role.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::User => "msg user",
            Self::Assistant => "msg assistant",
        }
    }
}

/// Body of an enhanced chat request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatQuery {
    /// Trimmed, non-empty user text
    pub query: String,
}

impl ChatQuery {
    /// Builds a query from raw input, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    #[must_use]
    pub fn from_input(raw: &str) -> Option<Self> {
        let query = raw.trim();
        if query.is_empty() {
            None
        } else {
            Some(Self {
                query: query.to_string(),
            })
        }
    }

    /// The query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.query
    }
}

/// Decoded body of a successful enhanced request.
///
/// Any JSON document is accepted except `null`. Only the `message` and
/// `semantic` members decide what gets rendered; other members, and bodies
/// that are not objects, are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    body: Value,
}

impl ChatReply {
    /// Decodes a 2xx response body.
    ///
    /// # Errors
    /// Returns [`ChatError::Decode`] if the body is not JSON or is `null`.
    pub fn from_body(body: &str) -> ChatResult<Self> {
        Self::from_value(serde_json::from_str(body)?)
    }

    /// Wraps an already decoded body.
    ///
    /// # Errors
    /// Returns [`ChatError::Decode`] for `null`, which has no members to read.
    pub fn from_value(body: Value) -> ChatResult<Self> {
        if body.is_null() {
            return Err(ChatError::decode("reply body is null"));
        }
        Ok(Self { body })
    }

    /// Text of the assistant bubble for this reply.
    ///
    /// A truthy `message` wins. Otherwise a non-empty `semantic` array yields
    /// [`SEMANTIC_FALLBACK_TEXT`], and anything else [`EMPTY_REPLY_TEXT`].
    /// An empty-string `message` therefore falls through to the `semantic`
    /// check.
    #[must_use]
    pub fn display_text(&self) -> String {
        if let Some(message) = self.body.get("message").filter(|value| is_truthy(value)) {
            return text_of(message);
        }

        if self.has_semantic_hits() {
            SEMANTIC_FALLBACK_TEXT.to_string()
        } else {
            EMPTY_REPLY_TEXT.to_string()
        }
    }

    /// Whether `semantic` is an array with at least one entry.
    #[must_use]
    pub fn has_semantic_hits(&self) -> bool {
        matches!(self.body.get("semantic"), Some(Value::Array(items)) if !items.is_empty())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a JSON value the way a browser stringifies it for `textContent`.
fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number_text(number),
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(text_of).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 1e21 => format!("{float:.0}"),
        Some(float) => float.to_string(),
        None => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(value: Value) -> ChatReply {
        ChatReply::from_value(value).expect("non-null reply")
    }

    fn text(body: &str) -> String {
        ChatReply::from_body(body)
            .expect("reply should decode")
            .display_text()
    }

    /// Tests that surrounding whitespace is trimmed from the query
    #[test]
    fn test_query_from_input_trims() {
        let query = ChatQuery::from_input("  what is rust?\n").expect("non-empty");
        assert_eq!(query.as_str(), "what is rust?");
    }

    /// Tests that blank input yields no query
    #[test]
    fn test_query_from_blank_input() {
        assert!(ChatQuery::from_input("").is_none());
        assert!(ChatQuery::from_input(" \t\r\n ").is_none());
    }

    /// Tests the request body wire format
    #[test]
    fn test_query_serializes_to_query_field() {
        let query = ChatQuery::from_input("hi").expect("non-empty");
        let body = serde_json::to_string(&query).expect("serialize");
        assert_eq!(body, r#"{"query":"hi"}"#);
    }

    /// Tests that a message field is rendered verbatim
    #[test]
    fn test_display_text_uses_message() {
        assert_eq!(reply(json!({ "message": "hello" })).display_text(), "hello");
    }

    /// Tests that the message wins over semantic hits
    #[test]
    fn test_display_text_message_beats_semantic() {
        let reply = reply(json!({ "message": "hello", "semantic": [1] }));
        assert_eq!(reply.display_text(), "hello");
    }

    /// Tests the semantic fallback text
    #[test]
    fn test_display_text_semantic_only() {
        assert_eq!(reply(json!({ "semantic": [1, 2] })).display_text(), "Response");
    }

    /// Tests that an empty object renders the empty-reply text
    #[test]
    fn test_display_text_empty_reply() {
        assert_eq!(reply(json!({})).display_text(), "No response.");
    }

    /// Tests that an empty semantic array is not a hit
    #[test]
    fn test_display_text_empty_semantic() {
        assert_eq!(reply(json!({ "semantic": [] })).display_text(), "No response.");
    }

    /// Tests that an empty message falls through to the semantic check
    #[test]
    fn test_display_text_empty_message_falls_through() {
        let with_hits = reply(json!({ "message": "", "semantic": ["a"] }));
        assert_eq!(with_hits.display_text(), "Response");

        let without_hits = reply(json!({ "message": "" }));
        assert_eq!(without_hits.display_text(), "No response.");
    }

    /// Tests truthiness and browser stringification of non-string messages
    #[test]
    fn test_display_text_non_string_message() {
        assert_eq!(reply(json!({ "message": 42 })).display_text(), "42");
        assert_eq!(reply(json!({ "message": 2.5 })).display_text(), "2.5");
        assert_eq!(reply(json!({ "message": 3.0 })).display_text(), "3");
        assert_eq!(reply(json!({ "message": true })).display_text(), "true");
        assert_eq!(reply(json!({ "message": [1, 2] })).display_text(), "1,2");
        assert_eq!(reply(json!({ "message": ["a", null, [3]] })).display_text(), "a,,3");
        assert_eq!(
            reply(json!({ "message": { "a": 1 } })).display_text(),
            "[object Object]"
        );
        assert_eq!(reply(json!({ "message": 0 })).display_text(), "No response.");
        assert_eq!(reply(json!({ "message": null })).display_text(), "No response.");
        assert_eq!(reply(json!({ "message": false })).display_text(), "No response.");
    }

    /// Tests that unrelated members of any type do not affect the reply
    #[test]
    fn test_other_members_are_ignored() {
        assert_eq!(text(r#"{"message":"hi","source":["a","b"]}"#), "hi");
        assert_eq!(text(r#"{"message":"hi","query":5}"#), "hi");
        assert_eq!(
            text(
                r#"{"query":"vpn","answer":"Use the portal.","candidates":[{"score":0.9}],"message":"Use the portal.","unexpected":true}"#
            ),
            "Use the portal."
        );
    }

    /// Tests that bodies which are not objects render the empty-reply text
    #[test]
    fn test_non_object_bodies() {
        assert_eq!(text(r#"["hello"]"#), "No response.");
        assert_eq!(text(r#""hello""#), "No response.");
        assert_eq!(text("7"), "No response.");
    }

    /// Tests that null and non-JSON bodies are decode errors
    #[test]
    fn test_undecodable_bodies() {
        let null = ChatReply::from_body("null").expect_err("null has no members");
        assert!(matches!(null, ChatError::Decode { .. }));

        let html = ChatReply::from_body("<html>").expect_err("not JSON");
        assert!(html.to_string().starts_with("Network error: "));
    }

    /// Tests role names and bubble classes
    #[test]
    fn test_message_role_strings() {
        assert_eq!(MessageRole::User.as_str(), "user");
        assert_eq!(MessageRole::User.css_class(), "msg user");
        assert_eq!(MessageRole::Assistant.css_class(), "msg assistant");
    }
}
