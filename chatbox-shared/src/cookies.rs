//! Cookie string helpers.
//!
//! The page script only sees `document.cookie`, a `name=value; name=value`
//! string, so lookups parse that string rather than a `Cookie` header.

use cookie::Cookie;

/// Name of the cookie carrying the CSRF token issued by the server.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Looks up a cookie by exact name in a `document.cookie` style string.
///
/// Malformed pairs are skipped. The first pair with a matching name wins.
#[must_use]
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    Cookie::split_parse(cookies)
        .flatten()
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// CSRF token to send with an enhanced request, or an empty string if the
/// cookie is absent.
#[must_use]
pub fn csrf_token(cookies: &str, name: &str) -> String {
    cookie_value(cookies, name).unwrap_or_default()
}
