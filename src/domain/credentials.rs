//! Application and consumer credentials.

use std::fmt;

/// The three keys identifying an application and the account it acts for.
///
/// Immutable once built. The secret and consumer key are redacted from
/// `Debug` output so a stray `{:?}` never leaks them into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    application_key: String,
    application_secret: String,
    consumer_key: String,
}

impl Credentials {
    /// Bundle the three keys.
    pub fn new(
        application_key: impl Into<String>,
        application_secret: impl Into<String>,
        consumer_key: impl Into<String>,
    ) -> Self {
        Self {
            application_key: application_key.into(),
            application_secret: application_secret.into(),
            consumer_key: consumer_key.into(),
        }
    }

    /// Application key, sent in `X-Ovh-Application`.
    pub fn application_key(&self) -> &str {
        &self.application_key
    }

    /// Application secret. Only ever used as signing input.
    pub fn application_secret(&self) -> &str {
        &self.application_secret
    }

    /// Consumer key, sent in `X-Ovh-Consumer` and signed.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("application_key", &self.application_key)
            .field("application_secret", &"<redacted>")
            .field("consumer_key", &"<redacted>")
            .finish()
    }
}
