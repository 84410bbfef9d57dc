//! Strict parsers for the fixed-width ISO 8601 shapes. Every field must be zero padded and
//! nothing may precede or follow the value.

use crate::error::{Error, Result};
use crate::iso8601::util::parse_fixed_digits;
use crate::iso8601::{Date, DateTime, Time};

const ISO_DATE: &str = "YYYY-MM-DD";
const ISO_LONG: &str = "YYYY-MM-DDTHH:MM:SS";
const EPOCH_SECONDS: &str = "digit-only epoch seconds";

/// `YYYY-MM-DD`
pub(crate) fn iso_date(text: &str) -> Result<Date> {
    let bytes = text.as_bytes();
    if bytes.len() != ISO_DATE.len() {
        return Err(Error::parse(text, ISO_DATE));
    }
    date_fields(bytes).ok_or_else(|| Error::parse(text, ISO_DATE))
}

/// `YYYY-MM-DDTHH:MM:SS`
pub(crate) fn iso_long_date_time(text: &str) -> Result<DateTime> {
    let bytes = text.as_bytes();
    if bytes.len() != ISO_LONG.len() || bytes[10] != b'T' {
        return Err(Error::parse(text, ISO_LONG));
    }
    let date = date_fields(&bytes[..10]).ok_or_else(|| Error::parse(text, ISO_LONG))?;
    let time = time_fields(&bytes[11..]).ok_or_else(|| Error::parse(text, ISO_LONG))?;
    Ok(DateTime::new(date, time))
}

/// Seconds since the Unix epoch, written with ASCII digits only.
pub(crate) fn epoch_seconds(text: &str) -> Result<i64> {
    if !is_all_digits(text) {
        return Err(Error::parse(text, EPOCH_SECONDS));
    }
    // Only overflow can fail here.
    text.parse::<i64>().map_err(|_| Error::OutOfRange)
}

pub(crate) fn is_all_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn date_fields(bytes: &[u8]) -> Option<Date> {
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = parse_fixed_digits(&bytes[0..4])?;
    let month = parse_fixed_digits(&bytes[5..7])?;
    let day = parse_fixed_digits(&bytes[8..10])?;
    Date::new(year as i32, month as u8, day as u8).ok()
}

fn time_fields(bytes: &[u8]) -> Option<Time> {
    if bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    let hour = parse_fixed_digits(&bytes[0..2])?;
    let minute = parse_fixed_digits(&bytes[3..5])?;
    let second = parse_fixed_digits(&bytes[6..8])?;
    Time::new(hour as u8, minute as u8, second as u8, 0).ok()
}
