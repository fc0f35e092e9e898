//! DIS timestamps.
//!
//! The header `timestamp` counts time since the top of the current hour in
//! units of 3600 s / (2^31 - 1), shifted left by one. The low bit tells an
//! absolute timestamp (1, clocks synchronised to UTC) from a relative one (0).

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// DIS time units in one hour.
pub const UNITS_PER_HOUR: u32 = i32::MAX as u32;

const HOUR: Duration = Duration::from_secs(3600);

/// A raw header timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct DisTimestamp(pub u32);

impl DisTimestamp {
    /// Absolute timestamp `into_hour` past the top of the hour. Durations of
    /// an hour or more wrap.
    pub fn absolute_at(into_hour: Duration) -> Self {
        Self((units_for(into_hour) << 1) | 1)
    }

    /// Relative timestamp `into_hour` past the top of the hour.
    pub fn relative_at(into_hour: Duration) -> Self {
        Self(units_for(into_hour) << 1)
    }

    /// Absolute timestamp for the current UTC time.
    pub fn now_absolute() -> Self {
        Self::absolute_at(since_top_of_hour())
    }

    /// Relative timestamp for the current wall-clock time.
    pub fn now_relative() -> Self {
        Self::relative_at(since_top_of_hour())
    }

    /// Time units since the top of the hour.
    pub fn units(self) -> u32 {
        self.0 >> 1
    }

    pub fn is_absolute(self) -> bool {
        self.0 & 1 == 1
    }

    pub fn to_duration_into_hour(self) -> Duration {
        let nanos = self.units() as u128 * HOUR.as_nanos() / UNITS_PER_HOUR as u128;
        Duration::from_nanos(nanos as u64)
    }
}

impl From<u32> for DisTimestamp {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<DisTimestamp> for u32 {
    fn from(timestamp: DisTimestamp) -> Self {
        timestamp.0
    }
}

fn units_for(into_hour: Duration) -> u32 {
    let nanos = into_hour.as_nanos() % HOUR.as_nanos();
    // Rounds to the nearest unit; one unit is about 1.68 µs.
    let units = (nanos * UNITS_PER_HOUR as u128 + HOUR.as_nanos() / 2) / HOUR.as_nanos();
    units.min(UNITS_PER_HOUR as u128) as u32
}

fn since_top_of_hour() -> Duration {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    Duration::from_nanos((now.as_nanos() % HOUR.as_nanos()) as u64)
}
