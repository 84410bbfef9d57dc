use std::cmp::min;
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::iso8601::{Date, DateTime, Time, MICROSECONDS_PER_SECOND};

/// A point on the Unix time line: whole seconds since 1970-01-01T00:00:00Z as counted by
/// `time_t` (no leap seconds), plus a microsecond fraction.
///
/// This is the bridge between the naive [`DateTime`] values and the host clock. Conversions in
/// both directions use the C library's local time zone, so they follow the `TZ` environment
/// variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    seconds: i64,
    microsecond: u32,
}

impl Instant {
    pub fn now() -> Self {
        Instant::from(SystemTime::now())
    }

    pub fn from_unix_seconds(seconds: i64) -> Self {
        Instant {
            seconds,
            microsecond: 0,
        }
    }

    pub fn unix_seconds(&self) -> i64 {
        self.seconds
    }

    /// Milliseconds since the epoch, sub-second milliseconds included.
    pub fn unix_milliseconds(&self) -> i64 {
        self.seconds * 1_000 + (self.microsecond / 1_000) as i64
    }

    /// The local wall-clock reading at this instant.
    pub fn to_local(self) -> Result<DateTime> {
        let time: libc::time_t = self.seconds.try_into().map_err(|_| Error::OutOfRange)?;
        // SAFETY: an all-zero tm is a valid value (tm_zone is a nullable pointer).
        let mut tm: libc::tm = unsafe { std::mem::zeroed() };
        // SAFETY: both pointers are valid for the duration of the call, and localtime_r does not
        // keep them.
        let result = unsafe { libc::localtime_r(&time, &mut tm) };
        if result.is_null() {
            return Err(Error::OutOfRange);
        }

        let date = Date::new(
            tm.tm_year + 1900,
            (tm.tm_mon + 1) as u8,
            tm.tm_mday as u8,
        )?;
        // A positive leap second is reported as second 60 by some systems. Naive values cannot
        // hold it, so it is folded into the preceding second.
        let second = min(tm.tm_sec, 59);
        let time = Time::new(
            tm.tm_hour as u8,
            tm.tm_min as u8,
            second as u8,
            self.microsecond,
        )?;
        Ok(DateTime::new(date, time))
    }

    /// The instant at which local wall clocks read `date_time`. Readings that fall into a
    /// daylight-saving gap or overlap are resolved the way `mktime` resolves them.
    pub fn from_local(date_time: DateTime) -> Result<Self> {
        // SAFETY: an all-zero tm is a valid value (tm_zone is a nullable pointer).
        let mut tm: libc::tm = unsafe { std::mem::zeroed() };
        tm.tm_year = date_time.year() - 1900;
        tm.tm_mon = date_time.month() as libc::c_int - 1;
        tm.tm_mday = date_time.day() as libc::c_int;
        tm.tm_hour = date_time.hour() as libc::c_int;
        tm.tm_min = date_time.minute() as libc::c_int;
        tm.tm_sec = date_time.second() as libc::c_int;
        // Let the C library decide whether daylight saving time applies.
        tm.tm_isdst = -1;
        // mktime returns -1 both on failure and for one second before the epoch. It only writes
        // tm_wday on success, which tells the two apart.
        tm.tm_wday = -1;
        // SAFETY: tm is a valid, exclusively borrowed struct for the duration of the call.
        let seconds = unsafe { libc::mktime(&mut tm) };
        if seconds == -1 && tm.tm_wday == -1 {
            return Err(Error::OutOfRange);
        }
        Ok(Instant {
            seconds: seconds as i64,
            microsecond: date_time.microsecond(),
        })
    }
}

impl From<SystemTime> for Instant {
    fn from(value: SystemTime) -> Self {
        let (seconds, subsecond_ns) = system_time_to_time_t(value);
        Instant {
            seconds,
            microsecond: subsecond_ns / (1_000_000_000 / MICROSECONDS_PER_SECOND),
        }
    }
}

/// Return the number of seconds and nanoseconds since the Unix epoch, as
/// defined by time_t (i.e. without caring about leap seconds). The nanoseconds are
/// always a forward offset from the seconds, also before the epoch.
fn system_time_to_time_t(value: SystemTime) -> (i64, u32) {
    match value.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => (duration.as_secs() as i64, duration.subsec_nanos()),
        Err(err) => {
            let duration = err.duration();
            let seconds = -(duration.as_secs() as i64);
            match duration.subsec_nanos() {
                0 => (seconds, 0),
                nanos => (seconds - 1, 1_000_000_000 - nanos),
            }
        }
    }
}
