//! System Clock Adapter
//!
//! Reads the host's UTC wall clock through chrono.

use chrono::Utc;

use crate::ports::Clock;

/// Wall-clock time of the local host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_epoch_secs() > 1_577_836_800);
    }
}
