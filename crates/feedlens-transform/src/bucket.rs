//! Categorical bucket labels for ages and wall-clock times.
//!
//! Bucket labels stand in for a numeric age or a clock time, generalizing
//! free text before storage. Both bucketing functions are total: every
//! integer and every clock time maps to exactly one label.

use feedlens_core::{Error, Result};
use jiff::civil::{Time, time};
use strum::{AsRefStr, Display, IntoStaticStr};

/// Age-group label determined solely by an integer age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, IntoStaticStr)]
pub enum AgeBucket {
    /// Ages 4 through 12.
    #[strum(serialize = "Child")]
    Child,
    /// Ages 13 through 19.
    #[strum(serialize = "Teenager")]
    Teenager,
    /// Ages 20 through 24.
    #[strum(serialize = "Young adult")]
    YoungAdult,
    /// Every age outside the named ranges, including 0-3, 25-39, and
    /// negatives.
    #[strum(serialize = "Adult")]
    Adult,
    /// Ages 40 through 59.
    #[strum(serialize = "Middle-aged people")]
    MiddleAged,
    /// Ages 60 and above.
    #[strum(serialize = "Senior adult")]
    SeniorAdult,
    /// No age mention was found in the text.
    #[strum(serialize = "Unknown")]
    Unknown,
}

impl AgeBucket {
    /// Returns the label as a static string.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Time-of-day label determined solely by a wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, IntoStaticStr)]
pub enum TimeBucket {
    /// Before 07:00:00.
    #[strum(serialize = "early morning")]
    EarlyMorning,
    /// 07:00:00 up to (excluding) 12:00:00.
    #[strum(serialize = "morning")]
    Morning,
    /// 12:00:00 up to (excluding) 16:00:00.
    #[strum(serialize = "afternoon")]
    Afternoon,
    /// 16:00:00 up to (excluding) 20:00:00.
    #[strum(serialize = "evening")]
    Evening,
    /// 20:00:00 and later.
    #[strum(serialize = "night")]
    Night,
}

impl TimeBucket {
    /// Returns the label as a static string.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Maps an integer age to its age-group label.
///
/// Callers that fail to parse an age substring must substitute
/// [`AgeBucket::Unknown`] instead of calling this function.
pub fn bucket_age(age: i64) -> AgeBucket {
    match age {
        4..=12 => AgeBucket::Child,
        13..=19 => AgeBucket::Teenager,
        20..=24 => AgeBucket::YoungAdult,
        40..=59 => AgeBucket::MiddleAged,
        60.. => AgeBucket::SeniorAdult,
        _ => AgeBucket::Adult,
    }
}

/// Maps a wall-clock time to its time-of-day label.
///
/// Only the hour, minute, second, and fraction are compared; the bucket is
/// date-independent. Boundaries belong to the later bucket: exactly
/// 07:00:00.000000 is morning.
pub fn bucket_time(value: Time) -> TimeBucket {
    if value < time(7, 0, 0, 0) {
        TimeBucket::EarlyMorning
    } else if value < time(12, 0, 0, 0) {
        TimeBucket::Morning
    } else if value < time(16, 0, 0, 0) {
        TimeBucket::Afternoon
    } else if value < time(20, 0, 0, 0) {
        TimeBucket::Evening
    } else {
        TimeBucket::Night
    }
}

/// Parses a `HH:MM:SS.ffffff` clock value.
///
/// Two-digit hour, minute, and second with literal colons and dot; any
/// fractional digit count is accepted. Out-of-range components (for
/// example a 25th hour) fail with a parse error.
pub fn parse_clock(value: &str) -> Result<Time> {
    Time::strptime("%H:%M:%S%.f", value)
        .map_err(|err| Error::parse(format!("invalid timestamp {value:?}: {err}")))
}
