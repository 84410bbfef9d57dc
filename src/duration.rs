use std::ops::{Add, Neg, Sub};

use crate::error::{Error, Result};
use crate::iso8601::{MICROSECONDS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

pub(crate) const MICROSECONDS_PER_MINUTE: i64 = SECONDS_PER_MINUTE as i64 * MICROSECONDS_PER_SECOND as i64;
pub(crate) const MICROSECONDS_PER_HOUR: i64 = SECONDS_PER_HOUR as i64 * MICROSECONDS_PER_SECOND as i64;
pub(crate) const MICROSECONDS_PER_DAY: i64 = SECONDS_PER_DAY as i64 * MICROSECONDS_PER_SECOND as i64;
pub(crate) const MICROSECONDS_PER_WEEK: i64 = 7 * MICROSECONDS_PER_DAY;

/// An exact amount of elapsed time, with microsecond resolution.
///
/// A day is always 86,400 seconds and a week always seven days. Calendar quantities such as
/// "one month" are not durations; see [`crate::DateTime::checked_add_months`].
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Duration {
    microseconds: i64,
}

impl Duration {
    pub const ZERO: Duration = Duration { microseconds: 0 };

    pub const fn from_microseconds(microseconds: i64) -> Self {
        Duration { microseconds }
    }

    pub fn from_seconds(seconds: i64) -> Result<Self> {
        Self::scaled(seconds, MICROSECONDS_PER_SECOND as i64)
    }

    pub fn from_minutes(minutes: i64) -> Result<Self> {
        Self::scaled(minutes, MICROSECONDS_PER_MINUTE)
    }

    pub fn from_hours(hours: i64) -> Result<Self> {
        Self::scaled(hours, MICROSECONDS_PER_HOUR)
    }

    pub fn from_days(days: i64) -> Result<Self> {
        Self::scaled(days, MICROSECONDS_PER_DAY)
    }

    pub fn from_weeks(weeks: i64) -> Result<Self> {
        Self::scaled(weeks, MICROSECONDS_PER_WEEK)
    }

    fn scaled(count: i64, factor: i64) -> Result<Self> {
        count
            .checked_mul(factor)
            .map(Self::from_microseconds)
            .ok_or(Error::OutOfRange)
    }

    pub const fn microseconds(&self) -> i64 {
        self.microseconds
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.microseconds.checked_neg().map(Self::from_microseconds)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_microseconds(
            self.microseconds
                .checked_add(rhs.microseconds)
                .expect("duration addition overflow"),
        )
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_microseconds(
            self.microseconds
                .checked_sub(rhs.microseconds)
                .expect("duration subtraction overflow"),
        )
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.checked_neg().expect("duration negation overflow")
    }
}
