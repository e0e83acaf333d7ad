use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock time source for event records.
///
/// Every record carries a wall-clock timestamp in float seconds since the
/// Unix epoch. Tests that need byte-reproducible output inject a fixed
/// timestamp instead of reading the system clock; everything downstream of
/// the Logger is oblivious to which variant is in use.

#[derive(Debug, Clone, Copy)]
pub enum WallClock {
    /// Reads `SystemTime::now()` on every call.
    System,
    /// Always returns the given number of seconds. Used to make event files
    /// byte-reproducible for conformance tests.
    Fixed(f64),
}

impl WallClock {
    /// Returns the current time in float seconds since the Unix epoch.
    ///
    /// A system clock set before the epoch yields 0.0 rather than an error;
    /// timestamps are advisory metadata, not control flow.
    pub fn now(&self) -> f64 {
        match self {
            WallClock::System => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs_f64())
                .unwrap_or(0.0),
            WallClock::Fixed(seconds) => *seconds,
        }
    }
}
