//! # Chatbox web
//!
//! Progressive enhancement for the server-rendered chat page. When the
//! browser can `fetch`, submitting the chat form posts the query as JSON,
//! renders the user bubble immediately, shows a typing indicator, and renders
//! the reply in place. Without `fetch` the form posts natively.

pub mod bind;
pub mod config;
pub mod enhancer;
pub mod logging;
pub mod render;
pub mod transport;


use wasm_bindgen::prelude::*;

pub use config::EnhancerConfig;
pub use enhancer::{ChatEnhancer, Submission};
pub use render::{DomSink, RenderSink};
pub use transport::{ChatTransport, FetchTransport, Transport, TransportResponse};

/// Module entry point, run once when the wasm module is instantiated.
///
/// # Errors
/// Returns the underlying JS error if the window or document is unavailable
/// or the load listener cannot be registered.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = EnhancerConfig::default();
    logging::install_panic_hook();
    logging::init(config.log_level());
    bind::install(config)
}
