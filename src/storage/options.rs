//! Cookie attribute options and their tagged accessors.
//!
//! [`StorageOptions`] holds the attributes a storage appends on save. The
//! chainable builders cover construction-time setup; [`OptionKey`] and
//! [`OptionValue`] name single options for reading and writing them after
//! construction, one variant per attribute so a key can never be paired with
//! a value of the wrong shape.

use crate::cookies::attributes::Lifetime;

/// Cookie attributes applied when a storage saves.
///
/// The default is a host-wide session cookie: no `path`, no `domain`, no
/// expiry, not `secure`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageOptions {
    /// `path` attribute; omitted from the wire when `None` or empty.
    pub path: Option<String>,
    /// `domain` attribute; omitted from the wire when `None` or empty.
    pub domain: Option<String>,
    /// Cookie duration.
    pub lifetime: Lifetime,
    /// Append the bare `secure` attribute.
    pub secure: bool,
}

impl StorageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `path` attribute. Chainable.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the `domain` attribute. Chainable.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the cookie lifetime. Chainable.
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Set or unset the `secure` attribute. Chainable.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Read one option as its tagged value.
    pub fn get(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::Path => OptionValue::Path(self.path.clone()),
            OptionKey::Domain => OptionValue::Domain(self.domain.clone()),
            OptionKey::Lifetime => OptionValue::Lifetime(self.lifetime),
            OptionKey::Secure => OptionValue::Secure(self.secure),
        }
    }

    /// Overwrite the option named by `value`'s variant.
    pub fn set(&mut self, value: OptionValue) {
        match value {
            OptionValue::Path(path) => self.path = path,
            OptionValue::Domain(domain) => self.domain = domain,
            OptionValue::Lifetime(lifetime) => self.lifetime = lifetime,
            OptionValue::Secure(secure) => self.secure = secure,
        }
    }

    /// Overwrite every option named in `values`, leaving the rest untouched.
    pub fn merge(&mut self, values: impl IntoIterator<Item = OptionValue>) {
        for value in values {
            self.set(value);
        }
    }
}

/// Names of the configurable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    Path,
    Domain,
    Lifetime,
    Secure,
}

/// One option together with its value.
///
/// `Path(None)` and `Domain(None)` unset the attribute. `Lifetime` and
/// `Secure` always carry a value; their "unset" states are
/// [`Lifetime::Session`] and `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Path(Option<String>),
    Domain(Option<String>),
    Lifetime(Lifetime),
    Secure(bool),
}

impl OptionValue {
    /// The key this value belongs to.
    pub fn key(&self) -> OptionKey {
        match self {
            OptionValue::Path(_) => OptionKey::Path,
            OptionValue::Domain(_) => OptionKey::Domain,
            OptionValue::Lifetime(_) => OptionKey::Lifetime,
            OptionValue::Secure(_) => OptionKey::Secure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_session_cookie() {
        let options = StorageOptions::default();
        assert_eq!(options.path, None);
        assert_eq!(options.domain, None);
        assert_eq!(options.lifetime, Lifetime::Session);
        assert!(!options.secure);
    }

    #[test]
    fn test_builder_chain() {
        let options = StorageOptions::new()
            .path("/app")
            .domain("example.com")
            .lifetime(Lifetime::Seconds(60))
            .secure(true);
        assert_eq!(options.path.as_deref(), Some("/app"));
        assert_eq!(options.domain.as_deref(), Some("example.com"));
        assert_eq!(options.lifetime, Lifetime::Seconds(60));
        assert!(options.secure);
    }

    #[test]
    fn test_get_returns_tagged_value() {
        let options = StorageOptions::new().path("/");
        assert_eq!(
            options.get(OptionKey::Path),
            OptionValue::Path(Some("/".to_string()))
        );
        assert_eq!(options.get(OptionKey::Secure), OptionValue::Secure(false));
    }

    #[test]
    fn test_set_overwrites_single_option() {
        let mut options = StorageOptions::new().path("/old").secure(true);
        options.set(OptionValue::Path(Some("/new".to_string())));
        assert_eq!(options.path.as_deref(), Some("/new"));
        assert!(options.secure);

        options.set(OptionValue::Path(None));
        assert_eq!(options.path, None);
    }

    #[test]
    fn test_merge_leaves_unnamed_options_untouched() {
        let mut options = StorageOptions::new().path("/app").secure(true);
        options.merge([
            OptionValue::Domain(Some("example.com".to_string())),
            OptionValue::Lifetime(Lifetime::Forever),
        ]);
        assert_eq!(options.path.as_deref(), Some("/app"));
        assert_eq!(options.domain.as_deref(), Some("example.com"));
        assert_eq!(options.lifetime, Lifetime::Forever);
        assert!(options.secure);
    }

    #[test]
    fn test_value_knows_its_key() {
        assert_eq!(OptionValue::Path(None).key(), OptionKey::Path);
        assert_eq!(OptionValue::Domain(None).key(), OptionKey::Domain);
        assert_eq!(
            OptionValue::Lifetime(Lifetime::Session).key(),
            OptionKey::Lifetime
        );
        assert_eq!(OptionValue::Secure(true).key(), OptionKey::Secure);
    }
}
