//! Countdown to the event start.

use std::fmt;

/// 2025-10-03T06:30:00Z in Unix milliseconds.
pub const EVENT_START_MS: i64 = 1_759_473_000_000;
pub const TICK_MS: u32 = 1_000;

/// Time left, with days folded into the hour count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl Remaining {
    #[must_use]
    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn hours_label(&self) -> String {
        format!("{:02}", self.hours)
    }

    #[must_use]
    pub fn minutes_label(&self) -> String {
        format!("{:02}", self.minutes)
    }

    #[must_use]
    pub fn seconds_label(&self) -> String {
        format!("{:02}", self.seconds)
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Zero once `now_ms` reaches `target_ms`.
#[must_use]
pub fn remaining_until(target_ms: i64, now_ms: i64) -> Remaining {
    let left_ms = target_ms.saturating_sub(now_ms);
    if left_ms <= 0 {
        return Remaining::default();
    }
    let total_secs = left_ms.unsigned_abs() / 1_000;
    Remaining {
        hours: total_secs / 3_600,
        minutes: u8::try_from((total_secs / 60) % 60).unwrap_or(0),
        seconds: u8::try_from(total_secs % 60).unwrap_or(0),
    }
}

#[must_use]
pub fn remaining(now_ms: i64) -> Remaining {
    remaining_until(EVENT_START_MS, now_ms)
}
