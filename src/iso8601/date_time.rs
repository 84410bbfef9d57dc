use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use num_integer::Integer;

use crate::duration::{Duration, MICROSECONDS_PER_DAY};
use crate::error::{Error, Result};
use crate::iso8601::{
    parse, Date, DateTimeBuilder, Time, Unit, MICROSECONDS_PER_SECOND, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};

/// A naive ISO 8601 date and time: no offset and no time zone. The range is from
/// 0001-01-01T00:00:00 to 9999-12-31T23:59:59.999999.
///
/// Values are immutable; every operation returns a new `DateTime`. Arithmetic that would leave
/// the supported range returns [`Error::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    pub fn builder() -> DateTimeBuilder {
        DateTimeBuilder::new()
    }

    pub fn new(date: Date, time: Time) -> Self {
        DateTime { date, time }
    }

    /// Midnight at the start of `date`.
    pub fn from_date(date: Date) -> Self {
        DateTime::new(date, Time::MIDNIGHT)
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u8 {
        self.date.month()
    }

    pub fn day(&self) -> u8 {
        self.date.day()
    }

    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub fn second(&self) -> u8 {
        self.time.second()
    }

    pub fn microsecond(&self) -> u32 {
        self.time.microsecond()
    }

    // Microseconds since 1970-01-01T00:00:00 on the naive time line, i.e. every day has exactly
    // 86,400 seconds. Fits comfortably in an i64 for the whole supported range.
    pub(crate) fn naive_microseconds(&self) -> i64 {
        self.date.unix_day() * MICROSECONDS_PER_DAY
            + self.time.second_of_day() as i64 * MICROSECONDS_PER_SECOND as i64
            + self.time.microsecond() as i64
    }

    pub(crate) fn from_naive_microseconds(microseconds: i64) -> Result<Self> {
        let (day, into_day) = microseconds.div_mod_floor(&MICROSECONDS_PER_DAY);
        let (second, microsecond) = into_day.div_rem(&(MICROSECONDS_PER_SECOND as i64));
        Ok(DateTime {
            date: Date::from_unix_day(day)?,
            time: Time::from_second_of_day(second as u32, microsecond as u32),
        })
    }

    pub fn checked_add(self, duration: Duration) -> Result<Self> {
        let microseconds = self
            .naive_microseconds()
            .checked_add(duration.microseconds())
            .ok_or(Error::OutOfRange)?;
        Self::from_naive_microseconds(microseconds)
    }

    pub fn checked_sub(self, duration: Duration) -> Result<Self> {
        let microseconds = self
            .naive_microseconds()
            .checked_sub(duration.microseconds())
            .ok_or(Error::OutOfRange)?;
        Self::from_naive_microseconds(microseconds)
    }

    pub fn checked_add_days(self, days: i64) -> Result<Self> {
        self.checked_add(Duration::from_days(days)?)
    }

    pub fn checked_add_weeks(self, weeks: i64) -> Result<Self> {
        self.checked_add(Duration::from_weeks(weeks)?)
    }

    pub fn checked_add_hours(self, hours: i64) -> Result<Self> {
        self.checked_add(Duration::from_hours(hours)?)
    }

    pub fn checked_add_minutes(self, minutes: i64) -> Result<Self> {
        self.checked_add(Duration::from_minutes(minutes)?)
    }

    pub fn checked_add_seconds(self, seconds: i64) -> Result<Self> {
        self.checked_add(Duration::from_seconds(seconds)?)
    }

    /// Moves the month field, clamping the day to the end of the target month. The time of day
    /// is kept.
    pub fn checked_add_months(self, months: i64) -> Result<Self> {
        Ok(DateTime::new(self.date.checked_add_months(months)?, self.time))
    }

    pub fn with_day(self, day: u8) -> Result<Self> {
        Ok(DateTime::new(self.date.with_day(day)?, self.time))
    }

    /// Zeroes every field finer than `unit`. Day and month reset to 1 rather than 0.
    pub fn truncate(self, unit: Unit) -> Self {
        let second = self.time.second_of_day();
        let second = match unit {
            Unit::Second => second,
            Unit::Minute => second - second % SECONDS_PER_MINUTE,
            Unit::Hour => second - second % SECONDS_PER_HOUR,
            Unit::Day | Unit::Month | Unit::Year => 0,
        };
        let date = match unit {
            Unit::Second | Unit::Minute | Unit::Hour | Unit::Day => self.date,
            Unit::Month => self.date.first_of_month(),
            Unit::Year => self.date.first_of_year(),
        };
        DateTime::new(date, Time::from_second_of_day(second, 0))
    }

    pub fn start_of_day(self) -> Self {
        DateTime::from_date(self.date)
    }

    /// 23:59:59 on the same date, with no fractional second.
    pub fn end_of_day(self) -> Self {
        DateTime::new(self.date, Time::LAST_SECOND)
    }

    pub fn start_of_month(self) -> Self {
        DateTime::from_date(self.date.first_of_month())
    }

    /// The last day of the month at the same time of day. This is the same as adding a month,
    /// going to the first of that month and stepping back one day, without the detour outside
    /// of the supported range in December 9999.
    pub fn end_of_month(self) -> Self {
        DateTime::new(self.date.last_of_month(), self.time)
    }

    /// Monday of the same week at the same time of day.
    pub fn begin_of_week(self) -> Self {
        DateTime::new(self.date.monday_of_week(), self.time)
    }

    /// True if this is exactly [`DateTime::end_of_month`], time of day included. Truncate to
    /// [`Unit::Day`] first for a date-only comparison.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// `YYYY-MM-DDTHH:MM:SS`, always 19 characters. The fractional second is dropped.
    pub fn to_iso_long_string(&self) -> String {
        format!("{}T{}", self.date, self.time.to_long_string())
    }
}

/// ISO 8601 without an offset. The fraction is printed only when it is non-zero, e.g.
/// `2021-01-31T08:30:00` or `2021-01-31T08:30:00.000250`.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

/// Parses `YYYY-MM-DDTHH:MM:SS`.
impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse::iso_long_date_time(s)
    }
}

impl Add<Duration> for DateTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        self.checked_add(rhs).expect("datetime addition overflow")
    }
}

impl Sub<Duration> for DateTime {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self::Output {
        self.checked_sub(rhs).expect("datetime subtraction overflow")
    }
}

impl Sub for DateTime {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration::from_microseconds(self.naive_microseconds() - rhs.naive_microseconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> DateTime {
        DateTime::builder()
            .year(year)
            .month(month)
            .day(day)
            .hour(hour)
            .minute(minute)
            .second(second)
            .build()
            .unwrap()
    }

    #[test]
    fn add_days_is_fixed_length() {
        let dt = at(2021, 2, 28, 22, 15, 0);
        assert_eq!(dt.checked_add_days(1).unwrap(), at(2021, 3, 1, 22, 15, 0));
        assert_eq!(dt.checked_add_days(-28).unwrap(), at(2021, 1, 31, 22, 15, 0));
        assert_eq!(dt.checked_add_weeks(1).unwrap(), at(2021, 3, 7, 22, 15, 0));
    }

    #[test]
    fn add_hours_and_minutes_offset() {
        let dt = at(2021, 12, 31, 22, 45, 10);
        assert_eq!(dt.checked_add_hours(3).unwrap(), at(2022, 1, 1, 1, 45, 10));
        assert_eq!(dt.checked_add_hours(-23).unwrap(), at(2021, 12, 30, 23, 45, 10));
        assert_eq!(dt.checked_add_minutes(20).unwrap(), at(2021, 12, 31, 23, 5, 10));
        assert_eq!(dt.checked_add_minutes(-46).unwrap(), at(2021, 12, 31, 21, 59, 10));
        assert_eq!(dt.checked_add_seconds(50).unwrap(), at(2021, 12, 31, 22, 46, 0));
    }

    #[test]
    fn add_months_keeps_time() {
        let dt = at(2021, 1, 31, 8, 30, 0);
        assert_eq!(dt.checked_add_months(1).unwrap(), at(2021, 2, 28, 8, 30, 0));
        assert_eq!(dt.checked_add_months(-2).unwrap(), at(2020, 11, 30, 8, 30, 0));
    }

    #[test]
    fn range_limits() {
        let last = at(9999, 12, 31, 23, 59, 59);
        assert_eq!(last.checked_add_seconds(1), Err(Error::OutOfRange));
        let first = at(1, 1, 1, 0, 0, 0);
        assert_eq!(first.checked_add_minutes(-1), Err(Error::OutOfRange));
        assert_eq!(first.checked_add_days(i64::MAX), Err(Error::OutOfRange));
    }

    #[test]
    fn before_epoch() {
        let dt = at(1969, 12, 31, 23, 59, 59);
        assert_eq!(dt.checked_add_seconds(1).unwrap(), at(1970, 1, 1, 0, 0, 0));
        assert_eq!(at(1970, 1, 1, 0, 0, 0) - dt, Duration::from_seconds(1).unwrap());
    }

    #[test]
    fn truncation_table() {
        let dt = DateTime::builder()
            .year(2021)
            .month(7)
            .day(14)
            .hour(13)
            .minute(47)
            .second(31)
            .microsecond(123_456)
            .build()
            .unwrap();
        assert_eq!(dt.truncate(Unit::Second), at(2021, 7, 14, 13, 47, 31));
        assert_eq!(dt.truncate(Unit::Minute), at(2021, 7, 14, 13, 47, 0));
        assert_eq!(dt.truncate(Unit::Hour), at(2021, 7, 14, 13, 0, 0));
        assert_eq!(dt.truncate(Unit::Day), at(2021, 7, 14, 0, 0, 0));
        assert_eq!(dt.truncate(Unit::Month), at(2021, 7, 1, 0, 0, 0));
        assert_eq!(dt.truncate(Unit::Year), at(2021, 1, 1, 0, 0, 0));
    }

    #[test]
    fn boundaries() {
        let dt = at(2021, 1, 6, 13, 47, 31);
        assert_eq!(dt.start_of_day(), at(2021, 1, 6, 0, 0, 0));
        assert_eq!(dt.end_of_day(), at(2021, 1, 6, 23, 59, 59));
        assert_eq!(dt.start_of_month(), at(2021, 1, 1, 0, 0, 0));
        assert_eq!(dt.end_of_month(), at(2021, 1, 31, 13, 47, 31));
        assert_eq!(dt.begin_of_week(), at(2021, 1, 4, 13, 47, 31));
        assert_eq!(at(9999, 12, 3, 1, 0, 0).end_of_month(), at(9999, 12, 31, 1, 0, 0));
    }

    #[test]
    fn end_of_month_check() {
        assert!(at(2021, 1, 31, 0, 0, 0).is_end_of_month());
        assert!(!at(2021, 1, 30, 0, 0, 0).is_end_of_month());
        assert!(at(2020, 2, 29, 12, 0, 0).is_end_of_month());
    }

    #[test]
    fn formatting() {
        let dt = at(2018, 12, 6, 12, 32, 56);
        assert_eq!(dt.to_iso_long_string(), "2018-12-06T12:32:56");
        assert_eq!(dt.to_string(), "2018-12-06T12:32:56");

        let dt = DateTime::builder()
            .year(2018)
            .month(12)
            .day(6)
            .hour(12)
            .minute(32)
            .second(56)
            .microsecond(1_500)
            .build()
            .unwrap();
        assert_eq!(dt.to_string(), "2018-12-06T12:32:56.001500");
        assert_eq!(dt.to_iso_long_string(), "2018-12-06T12:32:56");
    }

    #[test]
    fn parse_round_trip() {
        let dt = at(2018, 12, 6, 12, 32, 56);
        assert_eq!(dt.to_iso_long_string().parse::<DateTime>(), Ok(dt));
    }

    #[test]
    fn fractional_display_is_not_parsed() {
        let dt = at(2021, 5, 4, 3, 2, 1)
            .checked_add(Duration::from_microseconds(123_456))
            .unwrap();
        let text = dt.to_string();
        assert_eq!(text, "2021-05-04T03:02:01.123456");
        assert!(matches!(text.parse::<DateTime>(), Err(Error::Parse { .. })));
    }

    #[test]
    fn duration_operators() {
        let dt = at(2021, 1, 31, 23, 30, 0);
        let hour = Duration::from_hours(1).unwrap();
        assert_eq!(dt + hour, at(2021, 2, 1, 0, 30, 0));
        assert_eq!(dt - hour, at(2021, 1, 31, 22, 30, 0));
        assert_eq!((dt + hour) - dt, hour);
        assert_eq!(dt - (dt + hour), -hour);
    }

    #[test]
    #[should_panic(expected = "datetime addition overflow")]
    fn add_past_the_last_supported_day_panics() {
        let _ = at(9999, 12, 31, 23, 0, 0) + Duration::from_hours(1).unwrap();
    }

    #[test]
    #[should_panic(expected = "datetime subtraction overflow")]
    fn sub_before_the_first_supported_day_panics() {
        let _ = at(1, 1, 1, 0, 30, 0) - Duration::from_hours(1).unwrap();
    }
}
