//! Clock drift between the local host and the API server.
//!
//! Drift is measured once, when the client is built, and then applied
//! to every timestamp the client signs. There is no re-sync: a client
//! that lives for days carries whatever skew the local clock picks up
//! after construction.

/// Signed offset in seconds: local clock minus server clock.
///
/// Positive when the local clock runs ahead of the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeDrift(i64);

impl TimeDrift {
    /// No correction. Used when the server time could not be fetched.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw offset in seconds.
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    /// Drift observed when the local clock reads `local` while the
    /// server reports `server` (both epoch seconds).
    pub const fn between(local: i64, server: i64) -> Self {
        Self(local.saturating_sub(server))
    }

    /// Offset in seconds.
    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// Estimate the server's current epoch seconds from a local reading.
    pub const fn corrected(self, local: i64) -> i64 {
        local.saturating_sub(self.0)
    }
}
