//! Integration tests for the cookie line wire format.

use time::macros::datetime;
use time::OffsetDateTime;

use cookiestash::cookies::attributes::{self, Lifetime, FOREVER_EXPIRY};
use cookiestash::cookies::encoding;
use cookiestash::cookies::pairs;

const NOW: OffsetDateTime = datetime!(2025-03-01 12:00:00 UTC);

#[test]
fn test_session_line_with_defaults() {
    let suffix = attributes::suffix(None, None, Lifetime::Session, false, NOW).unwrap();
    let line = attributes::cookie_line("s", "{}", &suffix);
    assert_eq!(line, "s=%7B%7D;");
}

#[test]
fn test_full_attribute_line() {
    let suffix = attributes::suffix(
        Some("/app"),
        Some("example.com"),
        Lifetime::Seconds(3600),
        true,
        NOW,
    )
    .unwrap();
    let line = attributes::cookie_line("prefs", r#"{"theme":"dark"}"#, &suffix);
    assert_eq!(
        line,
        "prefs=%7B%22theme%22%3A%22dark%22%7D;\
         path=/app;domain=example.com;max-age=3600;\
         expires=Sat, 01 Mar 2025 13:00:00 GMT;secure"
    );
}

#[test]
fn test_forever_line_uses_pinned_expiry() {
    let suffix = attributes::suffix(None, None, Lifetime::Forever, false, NOW).unwrap();
    let max_age = (FOREVER_EXPIRY - NOW).whole_seconds();
    assert_eq!(max_age, 405_691_200);
    assert_eq!(
        suffix,
        format!("max-age={max_age};expires=Fri, 08 Jan 2038 00:00:00 GMT")
    );
}

#[test]
fn test_writer_output_reads_back() {
    let payload = r#"{"a":1,"note":"hi there"}"#;
    let suffix = attributes::suffix(Some("/"), None, Lifetime::Seconds(60), true, NOW).unwrap();
    let line = attributes::cookie_line("user prefs", payload, &suffix);

    // The reader side sees the pair, skips the attributes, and decodes the
    // payload back to the exact JSON text.
    assert_eq!(pairs::find_value(&line, "user prefs"), Some(payload.to_string()));
}

#[test]
fn test_encoding_is_component_compatible() {
    assert_eq!(encoding::encode(r#"{"a b":1}"#), "%7B%22a%20b%22%3A1%7D");
    assert_eq!(encoding::encode("x-y_z.w!~*'()"), "x-y_z.w!~*'()");
}

#[test]
fn test_header_with_foreign_cookies() {
    let header = "session=abc123; prefs=%7B%22a%22%3A1%7D; tracker=xyz";
    assert_eq!(
        pairs::find_value(header, "prefs"),
        Some(r#"{"a":1}"#.to_string())
    );
    assert_eq!(pairs::find_value(header, "missing"), None);
}
