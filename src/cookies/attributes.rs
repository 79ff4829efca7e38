//! Set-Cookie attribute suffix and cookie-date formatting.
//!
//! The suffix is the attribute list appended after the `name=value` pair on
//! save. Attribute order is fixed (path, domain, max-age, expires, secure)
//! and the parts are joined with a bare `;`, keeping the produced line
//! byte-stable across saves.

use time::format_description::BorrowedFormatItem;
use time::macros::{datetime, format_description};
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::base::error::StorageError;
use crate::cookies::encoding;

/// How long a saved cookie lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifetime {
    /// Session cookie: no `max-age` or `expires` attribute at all.
    #[default]
    Session,
    /// Expires this many seconds after the write.
    Seconds(u64),
    /// Practically forever: pinned to [`FOREVER_EXPIRY`].
    Forever,
}

/// Expiry used for [`Lifetime::Forever`] cookies.
///
/// 2038-01-08 stays inside the 32-bit epoch range, which rolls over on
/// 2038-01-19, so hosts storing expiry as a 32-bit timestamp still accept it.
pub const FOREVER_EXPIRY: OffsetDateTime = datetime!(2038-01-08 00:00:00 UTC);

/// IMF-fixdate layout used by the `expires` attribute,
/// e.g. `Fri, 08 Jan 2038 00:00:00 GMT`.
const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Format a timestamp as an HTTP cookie date.
pub fn format_http_date(timestamp: OffsetDateTime) -> Result<String, StorageError> {
    Ok(timestamp.to_offset(UtcOffset::UTC).format(HTTP_DATE)?)
}

/// Build the attribute suffix for a save at time `now`.
///
/// `path` and `domain` are included only when non-empty. A finite lifetime
/// emits both `max-age` and `expires` so hosts honoring either attribute
/// agree on the expiry; [`Lifetime::Forever`] pins `expires` to
/// [`FOREVER_EXPIRY`] and derives `max-age` from the gap to it. A finite
/// lifetime whose expiry would fall outside the representable date range is
/// treated as [`Lifetime::Forever`].
pub fn suffix(
    path: Option<&str>,
    domain: Option<&str>,
    lifetime: Lifetime,
    secure: bool,
    now: OffsetDateTime,
) -> Result<String, StorageError> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(path) = path.filter(|p| !p.is_empty()) {
        parts.push(format!("path={path}"));
    }
    if let Some(domain) = domain.filter(|d| !d.is_empty()) {
        parts.push(format!("domain={domain}"));
    }

    match lifetime {
        Lifetime::Session => {}
        Lifetime::Seconds(seconds) => {
            let expiry = i64::try_from(seconds)
                .ok()
                .and_then(|seconds| now.checked_add(Duration::seconds(seconds)));
            match expiry {
                Some(expiry) => {
                    parts.push(format!("max-age={seconds}"));
                    parts.push(format!("expires={}", format_http_date(expiry)?));
                }
                None => push_forever_expiry(&mut parts, now)?,
            }
        }
        Lifetime::Forever => push_forever_expiry(&mut parts, now)?,
    }

    if secure {
        parts.push("secure".to_string());
    }

    Ok(parts.join(";"))
}

/// The forever attribute pair: `max-age` is the whole-second gap from `now`
/// to [`FOREVER_EXPIRY`].
fn push_forever_expiry(parts: &mut Vec<String>, now: OffsetDateTime) -> Result<(), StorageError> {
    let seconds = (FOREVER_EXPIRY - now).whole_seconds();
    parts.push(format!("max-age={seconds}"));
    parts.push(format!("expires={}", format_http_date(FOREVER_EXPIRY)?));
    Ok(())
}

/// Assemble the full cookie line submitted to the host store.
///
/// The `;` separating the pair from the suffix is always written, even when
/// the suffix is empty: a bare session cookie comes out as `name=value;`.
pub fn cookie_line(name: &str, payload: &str, suffix: &str) -> String {
    format!(
        "{}={};{}",
        encoding::encode(name),
        encoding::encode(payload),
        suffix
    )
}
