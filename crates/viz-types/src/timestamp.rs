//! Whole-second Unix timestamps.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A timestamp down to the second: Unix epoch milliseconds divided by 1000.
///
/// Serialized as a bare integer. Input carrying a fractional part fails to
/// decode rather than being truncated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct VizTimestamp(#[ts(type = "number")] i64);

impl VizTimestamp {
    pub fn now() -> Self {
        Self(jiff::Timestamp::now().as_second())
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Floors to the containing second, including before the epoch.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis.div_euclid(1000))
    }

    pub fn as_seconds(&self) -> i64 {
        self.0
    }
}

impl From<jiff::Timestamp> for VizTimestamp {
    fn from(ts: jiff::Timestamp) -> Self {
        Self(ts.as_second())
    }
}

impl TryFrom<VizTimestamp> for jiff::Timestamp {
    type Error = jiff::Error;

    fn try_from(ts: VizTimestamp) -> Result<Self, Self::Error> {
        jiff::Timestamp::from_second(ts.0)
    }
}
