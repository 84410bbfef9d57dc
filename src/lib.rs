//! Calendar conveniences on top of naive (offset-free) datetimes in the proleptic Gregorian
//! calendar.
//!
//! [`Datum`] wraps a single [`DateTime`] and mutates it in place: arithmetic, truncation,
//! month and week boundaries, parsing and formatting. [`DateRange`] walks the span between two
//! datetimes in fixed steps, in either direction.

pub use datum::{Datum, WeekdayRange};
pub use duration::Duration;
pub use error::{Error, Result};
pub use instant::Instant;
pub use iso8601::{Date, DateTime, DateTimeBuilder, Time, Unit, Weekday};
pub use period::Period;
pub use range::{DateRange, Direction, Split};

mod datum;
mod div_rem;
mod duration;
mod error;
mod gregorian_normalized_date;
mod instant;
pub mod iso8601;
mod period;
mod range;
