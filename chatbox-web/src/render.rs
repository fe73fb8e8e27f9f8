//! Rendering seam between the enhancer and the document.

use chatbox_shared::MessageRole;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

/// Number of dots drawn inside the typing indicator.
const TYPING_DOTS: usize = 3;

/// Every DOM mutation the enhancer performs.
///
/// Implementations never fail outward: a mutation that cannot be applied is
/// skipped. `show_indicator` and `hide_indicator` are idempotent.
pub trait RenderSink {
    /// Appends a bubble with `text` as plain text.
    fn append_bubble(&self, role: MessageRole, text: &str);

    /// Adds the typing indicator unless one already exists.
    fn show_indicator(&self);

    /// Removes the typing indicator if present.
    fn hide_indicator(&self);

    /// Empties the query field.
    fn clear_input(&self);

    /// Scrolls the message list to its maximum offset.
    fn scroll_to_bottom(&self);
}

/// [`RenderSink`] backed by the live page.
///
/// Either element may be missing, in which case the operations touching it
/// are no-ops.
#[derive(Debug, Clone)]
pub struct DomSink {
    document: Document,
    chatbox: Option<Element>,
    input: Option<Element>,
    typing_id: String,
}

impl DomSink {
    pub fn new(
        document: Document,
        chatbox: Option<Element>,
        input: Option<Element>,
        typing_id: impl Into<String>,
    ) -> Self {
        Self {
            document,
            chatbox,
            input,
            typing_id: typing_id.into(),
        }
    }

    /// Current value of the query field, or an empty string without one.
    #[must_use]
    pub fn input_value(&self) -> String {
        let Some(input) = self.input.as_ref() else {
            return String::new();
        };

        if let Some(field) = input.dyn_ref::<HtmlInputElement>() {
            field.value()
        } else if let Some(area) = input.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    #[must_use]
    pub fn has_chatbox(&self) -> bool {
        self.chatbox.is_some()
    }

    #[must_use]
    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    fn typing_indicator(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.typing_id)
    }

    fn build_bubble(&self, role: MessageRole, text: &str) -> Result<Element, JsValue> {
        let bubble = self.document.create_element("div")?;
        bubble.set_class_name(role.css_class());
        bubble.set_text_content(Some(text));
        Ok(bubble)
    }

    fn build_indicator(&self) -> Result<Element, JsValue> {
        let indicator = self.document.create_element("div")?;
        indicator.set_id(&self.typing_id);
        indicator.set_class_name("msg assistant typing");
        for _ in 0..TYPING_DOTS {
            let dot = self.document.create_element("span")?;
            dot.set_class_name("dot");
            indicator.append_child(&dot)?;
        }
        Ok(indicator)
    }
}

impl RenderSink for DomSink {
    fn append_bubble(&self, role: MessageRole, text: &str) {
        let Some(chatbox) = self.chatbox.as_ref() else {
            return;
        };

        let appended = self
            .build_bubble(role, text)
            .and_then(|bubble| chatbox.append_child(&bubble));
        if let Err(err) = appended {
            log::warn!("failed to append {} bubble: {err:?}", role.as_str());
        }
    }

    fn show_indicator(&self) {
        let Some(chatbox) = self.chatbox.as_ref() else {
            return;
        };
        if self.typing_indicator().is_some() {
            return;
        }

        let appended = self
            .build_indicator()
            .and_then(|indicator| chatbox.append_child(&indicator));
        if let Err(err) = appended {
            log::warn!("failed to show typing indicator: {err:?}");
        }
    }

    fn hide_indicator(&self) {
        if self.chatbox.is_none() {
            return;
        }
        if let Some(indicator) = self.typing_indicator() {
            indicator.remove();
        }
    }

    fn clear_input(&self) {
        let Some(input) = self.input.as_ref() else {
            return;
        };

        if let Some(field) = input.dyn_ref::<HtmlInputElement>() {
            field.set_value("");
        } else if let Some(area) = input.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value("");
        }
    }

    fn scroll_to_bottom(&self) {
        if let Some(chatbox) = self.chatbox.as_ref() {
            chatbox.set_scroll_top(chatbox.scroll_height());
        }
    }
}
