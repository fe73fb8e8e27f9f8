//! How an enhanced chat request reaches the server.

use async_trait::async_trait;
use chatbox_shared::{ChatError, ChatQuery, ChatResult, csrf_token};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, Window};

const JSON_MEDIA_TYPE: &str = "application/json";
const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";
const CSRF_HEADER: &str = "X-CSRFToken";

/// What the server answered, before the enhancer interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// Reason phrase for `status`, used when an error body is empty.
    pub status_text: String,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one enhanced chat request.
///
/// Any HTTP status is a successful send; only failures that leave no status
/// behind are errors, reported as [`ChatError::Transport`].
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, query: &ChatQuery) -> ChatResult<TransportResponse>;
}

/// Submission path chosen once when the page is bound.
#[derive(Debug, Clone)]
pub enum Transport<T> {
    /// Intercept the form and send the query through `T`.
    Enhanced(T),
    /// Leave the form alone so the browser posts it.
    NativeSubmit,
}

impl<T> Transport<T> {
    #[must_use]
    pub const fn enhanced(&self) -> Option<&T> {
        match self {
            Self::Enhanced(transport) => Some(transport),
            Self::NativeSubmit => None,
        }
    }

    #[must_use]
    pub const fn is_native(&self) -> bool {
        matches!(self, Self::NativeSubmit)
    }
}

/// [`ChatTransport`] posting JSON back to the page URL via `fetch`.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    client: Client,
    endpoint: String,
    csrf_cookie: String,
}

impl FetchTransport {
    /// Create a transport posting to `endpoint` with the token from `csrf_cookie`.
    pub fn new(endpoint: impl Into<String>, csrf_cookie: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            csrf_cookie: csrf_cookie.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the enhanced POST for `query`, carrying `csrf_token` verbatim.
    fn request(&self, query: &ChatQuery, csrf_token: &str) -> RequestBuilder {
        self.client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(CSRF_HEADER, csrf_token)
            .json(query)
    }
}

#[async_trait(?Send)]
impl ChatTransport for FetchTransport {
    async fn send(&self, query: &ChatQuery) -> ChatResult<TransportResponse> {
        let token = csrf_token(&document_cookies().unwrap_or_default(), &self.csrf_cookie);

        let response = self
            .request(query, &token)
            .send()
            .await
            .map_err(|err| ChatError::transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ChatError::transport(err.to_string()))?;

        Ok(TransportResponse::new(status.as_u16(), status_line(status), body))
    }
}

/// Whether the running page exposes `window.fetch`.
#[must_use]
pub fn fetch_available(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("fetch")).unwrap_or(false)
}

/// Reason phrase for `status`, or its numeric code when it has none.
#[must_use]
pub fn status_line(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_string(), str::to_string)
}

fn document_cookies() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let html_doc: HtmlDocument = document.dyn_into().ok()?;
    html_doc.cookie().ok()
}
