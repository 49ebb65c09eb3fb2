//! Clock Port - Local Time Source
//!
//! The signer never reads the system clock directly. Going through this
//! port lets tests pin "now" and check drift arithmetic exactly.

/// Source of the local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    /// Current Unix time in whole seconds (UTC).
    fn now_epoch_secs(&self) -> i64;
}
