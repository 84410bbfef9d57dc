use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::iso8601::{parse, Date, DateTime, Time, Unit};

/// A mutable datetime cell.
///
/// `Datum` holds one naive [`DateTime`] and updates it in place: every arithmetic, truncation
/// and boundary method replaces the stored value and also returns the new one. When a method
/// fails the stored value is left as it was. Use [`DateTime`] directly for the same operations
/// on immutable values.
///
/// Epoch conversions interpret the stored value in the system's local time zone.
///
/// ```
/// use datum::Datum;
///
/// let mut datum = Datum::parse("2021-01-31").unwrap();
/// datum.add_months(1).unwrap();
/// assert_eq!(datum.to_iso_date_string(), "2021-02-28");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Datum {
    value: DateTime,
}

impl Datum {
    /// The current local date and time.
    pub fn new() -> Result<Self> {
        Ok(Datum { value: now()? })
    }

    /// Reads epoch seconds if `text` consists of ASCII digits only, and an ISO date
    /// (`YYYY-MM-DD`) otherwise.
    pub fn parse(text: &str) -> Result<Self> {
        if parse::is_all_digits(text) {
            log::trace!("Parsing {:?} as epoch seconds", text);
            Self::from_timestamp_date_string(text)
        } else {
            log::trace!("Parsing {:?} as an ISO date", text);
            Self::from_iso_date_string(text)
        }
    }

    /// Midnight at the start of `date`.
    pub fn from_date(date: Date) -> Self {
        Datum {
            value: DateTime::from_date(date),
        }
    }

    pub fn from_datetime(value: DateTime) -> Self {
        Datum { value }
    }

    /// Parses exactly `YYYY-MM-DDTHH:MM:SS`.
    pub fn from_iso_long_date(text: &str) -> Result<Self> {
        Ok(Datum {
            value: parse::iso_long_date_time(text)?,
        })
    }

    /// Parses exactly `YYYY-MM-DD`. The time is midnight.
    pub fn from_iso_date_string(text: &str) -> Result<Self> {
        Ok(Self::from_date(parse::iso_date(text)?))
    }

    /// Parses digit-only epoch seconds such as `1560718800` into local time.
    pub fn from_timestamp_date_string(text: &str) -> Result<Self> {
        let seconds = parse::epoch_seconds(text)?;
        Ok(Datum {
            value: Instant::from_unix_seconds(seconds).to_local()?,
        })
    }

    pub fn set_value(&mut self, value: DateTime) {
        self.value = value;
    }

    pub fn set_day(&mut self, day: u8) -> Result<DateTime> {
        self.apply(|value| value.with_day(day))
    }

    // Replaces the value with the outcome of `f`, unless it fails.
    fn apply(&mut self, f: impl FnOnce(DateTime) -> Result<DateTime>) -> Result<DateTime> {
        self.value = f(self.value)?;
        Ok(self.value)
    }

    fn replace(&mut self, value: DateTime) -> DateTime {
        self.value = value;
        value
    }

    // Arithmetic

    pub fn add_days(&mut self, days: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_add_days(days))
    }

    pub fn subtract_days(&mut self, days: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_sub(Duration::from_days(days)?))
    }

    pub fn add_weeks(&mut self, weeks: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_add_weeks(weeks))
    }

    pub fn subtract_weeks(&mut self, weeks: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_sub(Duration::from_weeks(weeks)?))
    }

    /// Calendar months; the day is clamped to the end of the target month.
    pub fn add_months(&mut self, months: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_add_months(months))
    }

    pub fn subtract_months(&mut self, months: i64) -> Result<DateTime> {
        let months = months.checked_neg().ok_or(Error::OutOfRange)?;
        self.apply(|value| value.checked_add_months(months))
    }

    pub fn add_hours(&mut self, hours: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_add_hours(hours))
    }

    pub fn subtract_hours(&mut self, hours: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_sub(Duration::from_hours(hours)?))
    }

    pub fn add_minutes(&mut self, minutes: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_add_minutes(minutes))
    }

    pub fn subtract_minutes(&mut self, minutes: i64) -> Result<DateTime> {
        self.apply(|value| value.checked_sub(Duration::from_minutes(minutes)?))
    }

    pub fn truncate(&mut self, unit: Unit) -> DateTime {
        self.replace(self.value.truncate(unit))
    }

    /// Like [`Datum::truncate`], with the unit given by name (`"second"` through `"year"`).
    pub fn truncate_to(&mut self, unit: &str) -> Result<DateTime> {
        let unit: Unit = unit.parse()?;
        Ok(self.truncate(unit))
    }

    // Boundaries

    pub fn start_of_day(&mut self) -> DateTime {
        self.replace(self.value.start_of_day())
    }

    pub fn end_of_day(&mut self) -> DateTime {
        self.replace(self.value.end_of_day())
    }

    pub fn start_of_month(&mut self) -> DateTime {
        self.replace(self.value.start_of_month())
    }

    pub fn end_of_month(&mut self) -> DateTime {
        self.replace(self.value.end_of_month())
    }

    pub fn begin_of_week(&mut self) -> DateTime {
        self.replace(self.value.begin_of_week())
    }

    /// Sets the value to the current local time minus one day. The stored value is not
    /// consulted.
    pub fn yesterday(&mut self) -> Result<DateTime> {
        self.apply(|_| now()?.checked_add_days(-1))
    }

    /// Sets the value to midnight of the current local date.
    pub fn today(&mut self) -> Result<DateTime> {
        self.apply(|_| Ok(now()?.start_of_day()))
    }

    // Checks

    pub fn is_end_of_month(&self) -> bool {
        self.value.is_end_of_month()
    }

    pub fn is_weekday(date: Date) -> bool {
        date.weekday().is_weekday()
    }

    // Accessors

    pub fn date(&self) -> Date {
        self.value.date()
    }

    pub fn time(&self) -> Time {
        self.value.time()
    }

    pub fn datetime(&self) -> DateTime {
        self.value
    }

    pub fn year(&self) -> i32 {
        self.value.year()
    }

    pub fn month(&self) -> u8 {
        self.value.month()
    }

    pub fn day(&self) -> u8 {
        self.value.day()
    }

    pub fn day_name(&self) -> &'static str {
        self.value.date().weekday().name()
    }

    pub fn month_name(&self) -> &'static str {
        self.value.date().month_name()
    }

    /// Seconds since the Unix epoch, reading the value as local time.
    pub fn epoch(&self) -> Result<i64> {
        Ok(Instant::from_local(self.value)?.unix_seconds())
    }

    /// Milliseconds since the Unix epoch, reading the value as local time.
    pub fn epoch_milliseconds(&self) -> Result<i64> {
        Ok(Instant::from_local(self.value)?.unix_milliseconds())
    }

    // Formatting

    /// `2018-12-06`
    pub fn to_iso_date_string(&self) -> String {
        self.value.date().to_string()
    }

    /// `2018-12-06T12:32:56`, or `2018-12-06T12:32:56.000250` with a fraction.
    pub fn to_iso_string(&self) -> String {
        self.value.to_string()
    }

    /// `2018-12-06T12:32:56`, fraction dropped.
    pub fn to_iso_long_string(&self) -> String {
        self.value.to_iso_long_string()
    }

    /// `12:32`
    pub fn to_short_time_string(&self) -> String {
        self.value.time().to_short_string()
    }

    /// `12:32:56`
    pub fn to_long_time_string(&self) -> String {
        self.value.time().to_long_string()
    }

    /// `2018-12-06 12:32:56`
    pub fn to_datetime_string(&self) -> String {
        format!("{} {}", self.to_iso_date_string(), self.to_long_time_string())
    }

    /// `2018-12-06 12:32`
    pub fn to_long_datetime_string(&self) -> String {
        format!("{} {}", self.to_iso_date_string(), self.to_short_time_string())
    }

    // Iterators

    /// Weekdays from `start` up to, but not including, `end`. Empty when `start` is not before
    /// `end`.
    pub fn day_range_weekday(start: Date, end: Date) -> WeekdayRange {
        WeekdayRange {
            cursor: Some(start),
            end,
        }
    }
}

fn now() -> Result<DateTime> {
    Instant::now().to_local()
}

impl From<DateTime> for Datum {
    fn from(value: DateTime) -> Self {
        Datum::from_datetime(value)
    }
}

impl From<Date> for Datum {
    fn from(date: Date) -> Self {
        Datum::from_date(date)
    }
}

impl FromStr for Datum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Datum::parse(s)
    }
}

/// `2018-12-06 12:32:56`
impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value.date(), self.value.time().to_long_string())
    }
}

/// Iterator returned by [`Datum::day_range_weekday`].
#[derive(Debug, Clone)]
pub struct WeekdayRange {
    // None once the range is exhausted.
    cursor: Option<Date>,
    end: Date,
}

impl Iterator for WeekdayRange {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let date = self.cursor.take().filter(|date| *date < self.end)?;
            self.cursor = date.checked_add_days(1).ok();
            if Datum::is_weekday(date) {
                return Some(date);
            }
        }
    }
}

impl FusedIterator for WeekdayRange {}
