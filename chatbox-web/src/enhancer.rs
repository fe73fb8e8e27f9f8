//! # Chat enhancer
//!
//! Drives one page's chat form: optimistic user bubble, typing indicator,
//! JSON round trip, and the assistant bubble for whatever came back.

use chatbox_shared::{ChatError, ChatQuery, ChatReply, ChatResult, MessageRole};

use crate::render::RenderSink;
use crate::transport::{ChatTransport, Transport};

/// What a submit event turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The browser should post the form itself; the default must not be prevented.
    Native,
    /// Blank input; the default is prevented and nothing else happens.
    Ignored,
    /// The user bubble is rendered and `query` is ready to be delivered.
    Pending(ChatQuery),
}

impl Submission {
    /// Whether the submit event's default navigation must be suppressed.
    #[must_use]
    pub const fn prevents_default(&self) -> bool {
        !matches!(self, Self::Native)
    }
}

/// Controller for the chat form, generic over where it renders and how it sends.
#[derive(Debug)]
pub struct ChatEnhancer<S, T> {
    sink: S,
    transport: Transport<T>,
}

impl<S, T> ChatEnhancer<S, T>
where
    S: RenderSink,
    T: ChatTransport,
{
    pub const fn new(sink: S, transport: Transport<T>) -> Self {
        Self { sink, transport }
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn transport(&self) -> &Transport<T> {
        &self.transport
    }

    pub fn scroll_to_bottom(&self) {
        self.sink.scroll_to_bottom();
    }

    /// Shows or hides the typing indicator. Showing also scrolls to the bottom.
    pub fn set_typing(&self, show: bool) {
        if show {
            self.sink.show_indicator();
            self.scroll_to_bottom();
        } else {
            self.sink.hide_indicator();
        }
    }

    /// Synchronous half of a submit: everything that must happen before the
    /// request goes out.
    pub fn prepare(&self, raw_input: &str) -> Submission {
        if self.transport.is_native() {
            return Submission::Native;
        }

        let Some(query) = ChatQuery::from_input(raw_input) else {
            return Submission::Ignored;
        };

        self.sink.append_bubble(MessageRole::User, query.as_str());
        self.sink.clear_input();
        self.scroll_to_bottom();
        self.set_typing(true);

        Submission::Pending(query)
    }

    /// Sends `query` and renders the outcome as an assistant bubble.
    ///
    /// Returns `None` without touching the page under
    /// [`Transport::NativeSubmit`].
    pub async fn deliver(&self, query: &ChatQuery) -> Option<ChatResult<ChatReply>> {
        let transport = self.transport.enhanced()?;

        log::debug!("sending chat query ({} chars)", query.as_str().len());
        let outcome = exchange(transport, query).await;

        self.set_typing(false);
        let text = match &outcome {
            Ok(reply) => reply.display_text(),
            Err(err) => {
                match err.status() {
                    Some(status) => log::warn!("chat request failed with status {status}: {err}"),
                    None => log::warn!("chat request failed: {err}"),
                }
                err.to_string()
            }
        };
        self.sink.append_bubble(MessageRole::Assistant, &text);
        self.scroll_to_bottom();

        Some(outcome)
    }

    /// Full submit cycle: [`Self::prepare`] followed, when pending, by
    /// [`Self::deliver`].
    pub async fn submit(&self, raw_input: &str) -> Submission {
        let submission = self.prepare(raw_input);
        if let Submission::Pending(query) = &submission {
            self.deliver(query).await;
        }
        submission
    }
}

async fn exchange<T: ChatTransport>(transport: &T, query: &ChatQuery) -> ChatResult<ChatReply> {
    let response = transport.send(query).await?;
    if !response.is_success() {
        return Err(ChatError::http(
            response.status,
            response.status_text,
            response.body,
        ));
    }

    ChatReply::from_body(&response.body)
}
