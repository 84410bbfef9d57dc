// A Period is a fixed step length for walking a range. It maps to a Duration, not to a calendar
// quantity: a "month" step is always 31 days, whichever month it starts in.

use std::fmt;

use crate::duration::{
    Duration, MICROSECONDS_PER_DAY, MICROSECONDS_PER_HOUR, MICROSECONDS_PER_MINUTE,
    MICROSECONDS_PER_WEEK,
};

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum Period {
    #[default]
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl Period {
    /// Looks up a period by its lowercase name. Unknown names fall back to [`Period::Minute`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "minute" => Period::Minute,
            "hour" => Period::Hour,
            "day" => Period::Day,
            "week" => Period::Week,
            "month" => Period::Month,
            _ => {
                log::warn!("Unknown period {:?}, splitting by minute", name);
                Period::Minute
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Period::Minute => "minute",
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }

    pub fn duration(self) -> Duration {
        let microseconds = match self {
            Period::Minute => MICROSECONDS_PER_MINUTE,
            Period::Hour => MICROSECONDS_PER_HOUR,
            Period::Day => MICROSECONDS_PER_DAY,
            Period::Week => MICROSECONDS_PER_WEEK,
            Period::Month => 31 * MICROSECONDS_PER_DAY,
        };
        Duration::from_microseconds(microseconds)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Period {
    fn from(name: &str) -> Self {
        Period::from_name(name)
    }
}
