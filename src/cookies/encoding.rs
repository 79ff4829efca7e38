//! Percent-encoding of cookie names and payloads.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped when writing a cookie name or payload.
///
/// `NON_ALPHANUMERIC` minus `- _ . ! ~ * ' ( )`: exactly the set
/// `encodeURIComponent` leaves unescaped, so lines produced here are
/// byte-compatible with ones written by a browser-side script.
pub const COOKIE_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one cookie-line component (a name or a payload).
pub fn encode(component: &str) -> String {
    utf8_percent_encode(component, COOKIE_COMPONENT).to_string()
}
