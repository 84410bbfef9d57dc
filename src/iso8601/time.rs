use std::fmt;

use crate::error::{Error, Result};
use crate::iso8601::{
    HOURS_PER_DAY, MICROSECONDS_PER_SECOND, MINUTES_PER_HOUR, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};

/// A wall-clock time of day with microsecond resolution. Leap seconds are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    // Seconds since midnight.
    second: u32,
    microsecond: u32,
}

impl Time {
    pub const MIDNIGHT: Time = Time {
        second: 0,
        microsecond: 0,
    };

    /// 23:59:59, the latest whole second of the day.
    pub const LAST_SECOND: Time = Time {
        second: SECONDS_PER_DAY - 1,
        microsecond: 0,
    };

    pub fn new(hour: u8, minute: u8, second: u8, microsecond: u32) -> Result<Self> {
        if hour >= HOURS_PER_DAY
            || minute >= MINUTES_PER_HOUR
            || second as u32 >= SECONDS_PER_MINUTE
            || microsecond >= MICROSECONDS_PER_SECOND
        {
            return Err(Error::InvalidDate);
        }
        Ok(Time {
            second: hour as u32 * SECONDS_PER_HOUR + minute as u32 * SECONDS_PER_MINUTE + second as u32,
            microsecond,
        })
    }

    pub(crate) fn from_second_of_day(second: u32, microsecond: u32) -> Self {
        debug_assert!(second < SECONDS_PER_DAY);
        debug_assert!(microsecond < MICROSECONDS_PER_SECOND);
        Time {
            second,
            microsecond,
        }
    }

    pub(crate) fn second_of_day(self) -> u32 {
        self.second
    }

    pub fn hour(self) -> u8 {
        (self.second / SECONDS_PER_HOUR) as u8
    }

    pub fn minute(self) -> u8 {
        (self.second % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8
    }

    pub fn second(self) -> u8 {
        (self.second % SECONDS_PER_MINUTE) as u8
    }

    pub fn microsecond(self) -> u32 {
        self.microsecond
    }

    /// `HH:MM`
    pub fn to_short_string(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// `HH:MM:SS`
    pub fn to_long_string(self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

/// `HH:MM:SS`, followed by `.ffffff` only when the microsecond is non-zero.
impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        Ok(())
    }
}
