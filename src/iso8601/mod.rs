pub use date::Date;
pub use date_time::DateTime;
pub use date_time_builder::DateTimeBuilder;
pub use time::Time;
pub use unit::Unit;
pub use weekday::Weekday;

mod date;
mod date_time;
mod date_time_builder;
pub(crate) mod parse;
mod time;
mod unit;
pub(crate) mod util;
mod weekday;

pub(crate) const MONTHS_PER_YEAR: u8 = 12;
pub(crate) const HOURS_PER_DAY: u8 = 24;
pub(crate) const MINUTES_PER_HOUR: u8 = 60;
pub(crate) const SECONDS_PER_MINUTE: u32 = 60;
pub(crate) const SECONDS_PER_HOUR: u32 = 3_600;
pub(crate) const SECONDS_PER_DAY: u32 = 86_400;
pub(crate) const MICROSECONDS_PER_SECOND: u32 = 1_000_000;
