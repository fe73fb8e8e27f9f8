//! Attaching the enhancer to the page.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, Window};

use crate::config::EnhancerConfig;
use crate::enhancer::{ChatEnhancer, Submission};
use crate::render::DomSink;
use crate::transport::{FetchTransport, Transport, fetch_available};

/// The enhancer as wired to a live page.
pub type PageEnhancer = ChatEnhancer<DomSink, FetchTransport>;

/// Binds once the document's structure is parsed: right away if it already
/// is, otherwise on `DOMContentLoaded`.
///
/// # Errors
/// Returns the JS error if there is no window or document, or the listener
/// cannot be registered.
pub fn install(config: EnhancerConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;

    if document.ready_state() != "loading" {
        bind(&window, &document, &config)?;
        return Ok(());
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = bind(&window, &document, &config) {
            log::error!("failed to bind chat enhancer: {err:?}");
        }
    });
    target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

/// Locates the chat elements, scrolls the history to the bottom, and
/// intercepts the form when every element is present.
///
/// Returns the enhancer, which stays alive through the submit listener.
///
/// # Errors
/// Returns the JS error if the submit listener cannot be registered.
pub fn bind(
    window: &Window,
    document: &Document,
    config: &EnhancerConfig,
) -> Result<Rc<PageEnhancer>, JsValue> {
    let chatbox = document.get_element_by_id(config.chatbox_id());
    let form = query(document.query_selector(config.form_selector()));
    let input = form
        .as_ref()
        .and_then(|form| query(form.query_selector(config.input_selector())));

    let transport = select_transport(window, config);
    let sink = DomSink::new(
        document.clone(),
        chatbox,
        input,
        config.typing_id().to_string(),
    );
    let enhancer = Rc::new(ChatEnhancer::new(sink, transport));
    enhancer.scroll_to_bottom();

    let form = match form {
        Some(form) if enhancer.sink().has_chatbox() && enhancer.sink().has_input() => form,
        _ => {
            log::info!(
                "chat form not enhanced (chatbox: {}, input: {})",
                enhancer.sink().has_chatbox(),
                enhancer.sink().has_input()
            );
            return Ok(enhancer);
        }
    };

    intercept_submit(&form, Rc::clone(&enhancer))?;
    match enhancer.transport().enhanced() {
        Some(transport) => log::info!("chat form enhanced, posting to {}", transport.endpoint()),
        None => log::info!("fetch unavailable, chat form posts natively"),
    }
    Ok(enhancer)
}

fn select_transport(window: &Window, config: &EnhancerConfig) -> Transport<FetchTransport> {
    if !fetch_available(window) {
        return Transport::NativeSubmit;
    }

    match window.location().href() {
        Ok(endpoint) => Transport::Enhanced(FetchTransport::new(endpoint, config.csrf_cookie())),
        Err(err) => {
            log::warn!("page URL unavailable, using native submit: {err:?}");
            Transport::NativeSubmit
        }
    }
}

fn intercept_submit(form: &Element, enhancer: Rc<PageEnhancer>) -> Result<(), JsValue> {
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let submission = enhancer.prepare(&enhancer.sink().input_value());
        if submission.prevents_default() {
            event.prevent_default();
        }

        if let Submission::Pending(query) = submission {
            let enhancer = Rc::clone(&enhancer);
            spawn_local(async move {
                enhancer.deliver(&query).await;
            });
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // The form lives as long as the page, so the listener does too.
    on_submit.forget();
    Ok(())
}

fn query(result: Result<Option<Element>, JsValue>) -> Option<Element> {
    result.unwrap_or_else(|err| {
        log::warn!("invalid selector: {err:?}");
        None
    })
}
