use std::borrow::Cow;

use cookie::Cookie;
use time::OffsetDateTime;

/// One line of a Netscape cookie file.
///
/// Fields are stored as found in the file; nothing here escapes tabs or
/// newlines, so callers must not put either into a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    /// Lowercased on decode. A leading `.` marks the cookie as valid for
    /// subdomains; the file's second column is derived from it. Must be
    /// non-empty to survive a round trip: decoding trims the line, so an
    /// empty first column shifts every field after it.
    pub domain: String,
    pub path: String,
    pub secure: bool,
    pub http_only: bool,
    /// Expiry column exactly as it appeared in the file. Takes priority over
    /// `expires` when encoding.
    pub raw_expires: Option<String>,
    /// Expiry as UTC. `None` encodes as `0` (session cookie).
    pub expires: Option<OffsetDateTime>,
}

impl CookieRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn with_expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_raw_expires(mut self, raw: impl Into<String>) -> Self {
        self.raw_expires = Some(raw.into());
        self
    }

    /// The `include_subdomains` column: true when the domain has a leading dot.
    pub fn include_subdomains(&self) -> bool {
        self.domain.starts_with('.')
    }

    /// True for cookies without an expiry, including those expiring at epoch 0.
    pub fn is_session(&self) -> bool {
        match self.expires {
            Some(t) => t.unix_timestamp() == 0,
            None => true,
        }
    }

    /// The text written to the expiry column.
    pub fn expiry_token(&self) -> Cow<'_, str> {
        match self.raw_expires.as_deref() {
            Some(raw) if !raw.is_empty() => Cow::Borrowed(raw),
            _ => match self.expires {
                Some(t) => Cow::Owned(t.unix_timestamp().to_string()),
                None => Cow::Borrowed("0"),
            },
        }
    }

    /// Convert to a [`cookie::Cookie`].
    ///
    /// The `cookie` crate strips a leading dot from the domain when it is
    /// read back, so the subdomain flag does not survive a trip through it.
    pub fn to_cookie(&self) -> Cookie<'static> {
        let mut builder = Cookie::build((self.name.clone(), self.value.clone()))
            .secure(self.secure)
            .http_only(self.http_only);

        if !self.domain.is_empty() {
            builder = builder.domain(self.domain.clone());
        }
        if !self.path.is_empty() {
            builder = builder.path(self.path.clone());
        }
        if let Some(expires) = self.expires {
            builder = builder.expires(expires);
        }

        builder.build()
    }
}

impl From<&Cookie<'_>> for CookieRecord {
    fn from(c: &Cookie<'_>) -> Self {
        Self {
            name: c.name().to_string(),
            value: c.value().to_string(),
            domain: c.domain().unwrap_or_default().to_ascii_lowercase(),
            path: c.path().unwrap_or_default().to_string(),
            secure: c.secure().unwrap_or(false),
            http_only: c.http_only().unwrap_or(false),
            raw_expires: None,
            expires: c.expires_datetime(),
        }
    }
}
