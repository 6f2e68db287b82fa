use serde_derive::{Deserialize, Serialize};

use std::fmt;

/// Delay ticks per second.
pub const SUBSECOND_PRECISION: u32 = 10;
pub const MIN_SECONDS: f64 = 0.1;

/// Bounds of the editing controls.
pub const MAX_HOURS: u32 = 23;
pub const MAX_MINUTES: u32 = 59;
pub const MAX_SECONDS_FIELD: f64 = 59.9;

const P: i64 = SUBSECOND_PRECISION as i64;
const TICKS_PER_MINUTE: i64 = 60 * P;
const TICKS_PER_HOUR: i64 = 3600 * P;

/// `MIN_SECONDS * SUBSECOND_PRECISION`
pub const MIN_DELAY: SlideshowDelay = SlideshowDelay(1);

/// Slideshow delay in tenths of a second.
///
/// Persisted as the tenths count. Values below [`MIN_DELAY`] load as the floor.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct SlideshowDelay(u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayComponents {
    pub hours: u32,
    pub minutes: u32,
    /// One fractional digit.
    pub seconds: f64,
}

impl SlideshowDelay {
    pub const fn from_tenths(tenths: u32) -> Self {
        if tenths < MIN_DELAY.0 {
            MIN_DELAY
        } else {
            SlideshowDelay(tenths)
        }
    }

    pub fn as_tenths(self) -> u32 {
        self.0
    }

    pub fn decompose(self) -> DelayComponents {
        let total = i64::from(self.0);
        let remainder = total % TICKS_PER_HOUR;

        DelayComponents {
            hours: (total / TICKS_PER_HOUR) as u32,
            minutes: (remainder / TICKS_PER_MINUTE) as u32,
            seconds: (remainder % TICKS_PER_MINUTE) as f64 / P as f64,
        }
    }

    /// Replaces the hours, keeping minutes and seconds.
    pub fn with_hours(self, hours: i64) -> Self {
        let mins_secs = i64::from(self.0) % TICKS_PER_HOUR;
        SlideshowDelay::clamped(hours.saturating_mul(TICKS_PER_HOUR).saturating_add(mins_secs))
    }

    /// Replaces the minutes, keeping hours and seconds.
    pub fn with_minutes(self, minutes: i64) -> Self {
        let total = i64::from(self.0);
        let hours = total / TICKS_PER_HOUR;
        let secs = total % TICKS_PER_MINUTE;
        SlideshowDelay::clamped(
            (hours * TICKS_PER_HOUR)
                .saturating_add(minutes.saturating_mul(TICKS_PER_MINUTE))
                .saturating_add(secs),
        )
    }

    /// Replaces the seconds, keeping hours and minutes.
    ///
    /// `seconds` is rounded to the nearest tenth.
    pub fn with_seconds(self, seconds: f64) -> Self {
        let hours_mins = i64::from(self.0) / TICKS_PER_MINUTE;
        // Saturating cast, NaN gives 0
        let ticks = (seconds * P as f64).round() as i64;
        SlideshowDelay::clamped((hours_mins * TICKS_PER_MINUTE).saturating_add(ticks))
    }

    fn clamped(total: i64) -> Self {
        if total > 0 {
            SlideshowDelay(total.min(i64::from(u32::MAX)) as u32)
        } else {
            MIN_DELAY
        }
    }
}

impl Default for SlideshowDelay {
    fn default() -> Self {
        SlideshowDelay(5 * SUBSECOND_PRECISION)
    }
}

impl From<u32> for SlideshowDelay {
    fn from(tenths: u32) -> Self {
        SlideshowDelay::from_tenths(tenths)
    }
}

impl From<SlideshowDelay> for u32 {
    fn from(delay: SlideshowDelay) -> Self {
        delay.0
    }
}

impl fmt::Display for SlideshowDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self.decompose();
        if components.hours == 0 {
            write!(f, "{:02}:{:04.1}", components.minutes, components.seconds)
        } else {
            write!(
                f,
                "{}:{:02}:{:04.1}",
                components.hours, components.minutes, components.seconds,
            )
        }
    }
}
