use std::time::{SystemTime, UNIX_EPOCH};

use crate::TimeSource;

/// A [`TimeSource`] that reads `SystemTime::now()` on every call.
///
/// Unlike a ticking monotonic clock, the value is taken at the moment of the
/// call, so a fallback identifier's timestamp always lies between wall-clock
/// readings taken immediately before and after generation.
///
/// A system clock set before 1970 reads as `0`, and a clock beyond
/// `u64::MAX` milliseconds saturates. Neither case fails.
#[derive(Default, Clone, Copy, Debug)]
pub struct WallClock;

impl TimeSource<u64> for WallClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
            })
    }
}
