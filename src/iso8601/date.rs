use std::cmp::min;
use std::fmt;
use std::str::FromStr;

use num_integer::Integer;

use crate::error::{Error, Result};
use crate::gregorian_normalized_date::GregorianNormalizedDate;
use crate::iso8601::util::{days_in_month, is_leap_year};
use crate::iso8601::{parse, Weekday, MONTHS_PER_YEAR};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// 1970-01-01 was a Thursday.
const UNIX_EPOCH_MONDAY_INDEX: i64 = 3;

/// A date in the proleptic Gregorian calendar, from 0001-01-01 to 9999-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    gnd: GregorianNormalizedDate,
}

impl Date {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    // Days since 1970-01-01 of 0001-01-01 and 9999-12-31.
    const MIN_DAY: i64 = -719_162;
    const MAX_DAY: i64 = 2_932_896;

    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::OutOfRange);
        }
        if !(1..=MONTHS_PER_YEAR).contains(&month)
            || day == 0
            || day > days_in_month(year as i64, month)
        {
            return Err(Error::InvalidDate);
        }
        Ok(Date {
            gnd: GregorianNormalizedDate::from_ymd(year as i64, month, day),
        })
    }

    /// The date `days` days after 1970-01-01.
    pub fn from_unix_day(days: i64) -> Result<Self> {
        if !(Self::MIN_DAY..=Self::MAX_DAY).contains(&days) {
            return Err(Error::OutOfRange);
        }
        Ok(Date {
            gnd: GregorianNormalizedDate::from_unix_day(days),
        })
    }

    /// Number of days since 1970-01-01. Negative before the epoch.
    pub fn unix_day(self) -> i64 {
        self.gnd.unix_day()
    }

    pub fn year(self) -> i32 {
        self.gnd.ymd().0 as i32
    }

    pub fn month(self) -> u8 {
        self.gnd.ymd().1
    }

    pub fn day(self) -> u8 {
        self.gnd.ymd().2
    }

    pub fn weekday(self) -> Weekday {
        let index = (self.unix_day() + UNIX_EPOCH_MONDAY_INDEX).mod_floor(&7);
        Weekday::from_monday_index(index as u8)
    }

    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month() - 1) as usize]
    }

    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year() as i64)
    }

    pub fn days_in_month(self) -> u8 {
        let (year, month, _) = self.gnd.ymd();
        days_in_month(year, month)
    }

    /// Fixed-length day arithmetic. Negative values go back in time.
    pub fn checked_add_days(self, days: i64) -> Result<Self> {
        let day = self.unix_day().checked_add(days).ok_or(Error::OutOfRange)?;
        Self::from_unix_day(day)
    }

    /// Calendar month arithmetic. If the day of month does not exist in the target month it is
    /// clamped to the last day of that month, so 2021-01-31 plus one month is 2021-02-28.
    pub fn checked_add_months(self, months: i64) -> Result<Self> {
        let (year, month, day) = self.gnd.ymd();
        let total = (year * MONTHS_PER_YEAR as i64 + (month - 1) as i64)
            .checked_add(months)
            .ok_or(Error::OutOfRange)?;
        let (year, month) = total.div_mod_floor(&(MONTHS_PER_YEAR as i64));
        let month = month as u8 + 1;
        if !(Self::MIN_YEAR as i64..=Self::MAX_YEAR as i64).contains(&year) {
            return Err(Error::OutOfRange);
        }
        let day = min(day, days_in_month(year, month));
        Ok(Date {
            gnd: GregorianNormalizedDate::from_ymd(year, month, day),
        })
    }

    /// Replaces the day of month.
    pub fn with_day(self, day: u8) -> Result<Self> {
        Self::new(self.year(), self.month(), day)
    }

    pub fn first_of_month(self) -> Self {
        let (year, month, _) = self.gnd.ymd();
        Date {
            gnd: GregorianNormalizedDate::from_ymd(year, month, 1),
        }
    }

    pub fn last_of_month(self) -> Self {
        let (year, month, _) = self.gnd.ymd();
        Date {
            gnd: GregorianNormalizedDate::from_ymd(year, month, days_in_month(year, month)),
        }
    }

    pub fn first_of_year(self) -> Self {
        Date {
            gnd: GregorianNormalizedDate::from_ymd(self.year() as i64, 1, 1),
        }
    }

    /// The Monday on or before this date. 0001-01-01 is a Monday, so this never leaves the
    /// supported range.
    pub fn monday_of_week(self) -> Self {
        let day = self.unix_day() - self.weekday().monday_index() as i64;
        Date {
            gnd: GregorianNormalizedDate::from_unix_day(day),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.gnd.ymd();
        write!(f, "{:04}-{:02}-{:02}", year, month, day)
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse::iso_date(s)
    }
}
