//! Cookie wire format.
//!
//! Everything that touches raw cookie text lives here:
//!
//! - **Encoding**: percent-escaping of names and payloads ([`encoding`])
//! - **Header pairs**: splitting a `;`-separated cookie header into decoded
//!   `name=value` pairs ([`pairs`])
//! - **Attributes**: the `path`/`domain`/`max-age`/`expires`/`secure` suffix
//!   appended on save ([`attributes`])
//!
//! # Architecture
//!
//! Each module maps onto the browser mechanism it reproduces:
//!
//! | Browser mechanism | cookiestash (Rust) | Responsibility |
//! |-------------------|--------------------|----------------|
//! | `encodeURIComponent` | [`encoding`] | Escape set for names and payloads |
//! | `document.cookie` read | [`pairs`] | Header splitting and pair lookup |
//! | `Set-Cookie` attributes | [`attributes`] | Attribute suffix and cookie dates |
//!
//! The modules are pure string transforms; host-store state is the
//! [`storage`](crate::storage) layer's business.

pub mod attributes;
pub mod encoding;
pub mod pairs;
