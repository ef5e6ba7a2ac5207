//! Host wall clock.
//!
//! The core never reads the clock itself — every tick receives its
//! timestamp as an argument. This helper is the host-side source for
//! that argument.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_reads_do_not_go_backwards() {
        let a = now_epoch_millis();
        let b = now_epoch_millis();
        assert!(b >= a);
    }
}
