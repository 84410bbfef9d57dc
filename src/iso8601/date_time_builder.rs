use crate::error::{Error, Result};
use crate::iso8601::{Date, DateTime, Time};

/// Field-by-field construction of a [`DateTime`]. Year, month and day are required; time fields
/// that are not given default to zero.
#[derive(Debug, Default, Clone)]
pub struct DateTimeBuilder {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    microsecond: Option<u32>,
}

impl DateTimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(&mut self, year: i32) -> &mut Self {
        self.year = Some(year);
        self
    }

    pub fn month(&mut self, month: u8) -> &mut Self {
        self.month = Some(month);
        self
    }

    pub fn day(&mut self, day: u8) -> &mut Self {
        self.day = Some(day);
        self
    }

    pub fn hour(&mut self, hour: u8) -> &mut Self {
        self.hour = Some(hour);
        self
    }

    pub fn minute(&mut self, minute: u8) -> &mut Self {
        self.minute = Some(minute);
        self
    }

    pub fn second(&mut self, second: u8) -> &mut Self {
        self.second = Some(second);
        self
    }

    pub fn microsecond(&mut self, microsecond: u32) -> &mut Self {
        self.microsecond = Some(microsecond);
        self
    }

    /// Fails with [`Error::InvalidDate`] if a date field is missing or any field is out of its
    /// range, and with [`Error::OutOfRange`] if the year is outside 1..=9999.
    pub fn build(&self) -> Result<DateTime> {
        let (Some(year), Some(month), Some(day)) = (self.year, self.month, self.day) else {
            return Err(Error::InvalidDate);
        };
        let date = Date::new(year, month, day)?;
        let time = Time::new(
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.microsecond.unwrap_or(0),
        )?;
        Ok(DateTime::new(date, time))
    }
}
