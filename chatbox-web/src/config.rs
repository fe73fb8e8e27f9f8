//! Enhancer configuration
//!
//! The DOM contract and cookie name the enhancer binds against. Defaults
//! match the server-rendered chat template and can be overridden at build
//! time through `CHATBOX_*` environment variables.

use chatbox_shared::CSRF_COOKIE_NAME;
use log::LevelFilter;

/// Selector for the chat form; only forms posting back to the page are enhanced.
pub const DEFAULT_FORM_SELECTOR: &str = "form[method='post']";

/// Selector for the query field inside the chat form.
pub const DEFAULT_INPUT_SELECTOR: &str = "input[name='query'], textarea[name='query']";

/// Element ids, selectors, and cookie name used by the enhancer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancerConfig {
    /// Id of the scrollable message list
    pub chatbox_id: String,
    /// Selector locating the chat form
    pub form_selector: String,
    /// Selector locating the query field within the form
    pub input_selector: String,
    /// Id given to the typing indicator element
    pub typing_id: String,
    /// Cookie carrying the CSRF token
    pub csrf_cookie: String,
    /// Maximum level forwarded to the browser console
    pub log_level: LevelFilter,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            chatbox_id: option_env!("CHATBOX_ELEMENT_ID")
                .unwrap_or("chatbox")
                .to_string(),
            form_selector: DEFAULT_FORM_SELECTOR.to_string(),
            input_selector: DEFAULT_INPUT_SELECTOR.to_string(),
            typing_id: option_env!("CHATBOX_TYPING_ID")
                .unwrap_or("typing-indicator")
                .to_string(),
            csrf_cookie: option_env!("CHATBOX_CSRF_COOKIE")
                .unwrap_or(CSRF_COOKIE_NAME)
                .to_string(),
            log_level: option_env!("CHATBOX_LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(LevelFilter::Info),
        }
    }
}

impl EnhancerConfig {
    #[must_use]
    pub fn chatbox_id(&self) -> &str {
        &self.chatbox_id
    }

    #[must_use]
    pub fn form_selector(&self) -> &str {
        &self.form_selector
    }

    #[must_use]
    pub fn input_selector(&self) -> &str {
        &self.input_selector
    }

    #[must_use]
    pub fn typing_id(&self) -> &str {
        &self.typing_id
    }

    #[must_use]
    pub fn csrf_cookie(&self) -> &str {
        &self.csrf_cookie
    }

    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
