// Proleptic Gregorian dates, split along the calendar's own periods. A 400-year cycle holds 97
// leap years (every 4th year, minus the century years not divisible by 400), 146097 days in
// all, and the pattern repeats exactly from one cycle to the next.
//
// Years here begin on March 1, which pushes each leap day to the very end of its year, the leap
// year to the end of its quadrennium and the long century to the end of its cycle. Every extra
// day then shows up as the remainder of a clamped division instead of a special case. Counting
// starts at 2000-03-01, the first day after the leap day that closes a cycle:
// - 2000-03-01 to 2001-02-28
// - 2001-03-01 to 2002-02-28
// - 2002-03-01 to 2003-02-28
// - 2003-03-01 to 2004-02-29
//
// Fields run from most to least significant, so the derived ordering is chronological.

use crate::div_rem::ClampedDivRem;
use num_integer::Integer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct GregorianNormalizedDate {
    // Whole cycles since 2000-03-01, negative before it.
    cycle: i64,
    // 0..=3 within the cycle.
    century: u8,
    // 0..=24 within the century.
    quadrennium: u8,
    // 0..=3 within the quadrennium.
    year: u8,
    // 0..=365, day 0 being March 1.
    day: u16,
}

const DAYS_PER_CYCLE: i64 = 146_097;
const DAYS_PER_CENTURY: u32 = 36_524;
const DAYS_PER_QUADRENNIUM: u16 = 1_461;
const DAYS_PER_YEAR: u16 = 365;
const YEARS_PER_CYCLE: i64 = 400;
const YEARS_PER_CENTURY: u16 = 100;
const YEARS_PER_QUADRENNIUM: u16 = 4;

const ZERO_POINT_YEAR: i64 = 2000;
// 2000-03-01 counted in days since 1970-01-01.
const ZERO_POINT_UNIX_DAY: i64 = 11_017;

// First day of each month in a March-based year, March at index 0.
const MONTH_STARTS: [u16; 12] = [0, 31, 61, 92, 122, 153, 184, 214, 245, 275, 306, 337];
// Index of January in MONTH_STARTS.
const JANUARY: u8 = 10;

fn month_index(day: u16) -> u8 {
    (MONTH_STARTS.partition_point(|&start| start <= day) - 1) as u8
}

impl GregorianNormalizedDate {
    pub(crate) fn from_unix_day(unix_day: i64) -> Self {
        let (cycle, days_into_cycle) =
            (unix_day - ZERO_POINT_UNIX_DAY).div_mod_floor(&DAYS_PER_CYCLE);
        let days_into_cycle = days_into_cycle as u32;

        // Only the last century of a cycle ends in a leap day, which the clamp keeps in it.
        let (century, days_into_century) =
            days_into_cycle.clamped_div_rem(DAYS_PER_CENTURY, 3_u8);
        let days_into_century = days_into_century as u16;

        // A plain division suffices: the closing quadrennium of a short century is one day short.
        let (quadrennium, days_into_quadrennium) = days_into_century.div_rem(&DAYS_PER_QUADRENNIUM);

        let (year, day) = days_into_quadrennium.clamped_div_rem(DAYS_PER_YEAR, 3_u8);

        GregorianNormalizedDate {
            cycle,
            century,
            quadrennium: quadrennium as u8,
            year,
            day,
        }
    }

    pub(crate) fn unix_day(self) -> i64 {
        let days_into_cycle = u32::from(self.century) * DAYS_PER_CENTURY
            + u32::from(self.quadrennium) * u32::from(DAYS_PER_QUADRENNIUM)
            + u32::from(self.year) * u32::from(DAYS_PER_YEAR)
            + u32::from(self.day);
        ZERO_POINT_UNIX_DAY + self.cycle * DAYS_PER_CYCLE + i64::from(days_into_cycle)
    }

    /// Month and day are only checked in debug builds.
    pub(crate) fn from_ymd(year: i64, month: u8, day: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        debug_assert!((1..=31).contains(&day));

        // January and February belong to the March-based year that began the previous spring.
        let (year, month_index) = if month >= 3 {
            (year, month - 3)
        } else {
            (year - 1, month + 9)
        };

        let (cycle, years_into_cycle) = (year - ZERO_POINT_YEAR).div_mod_floor(&YEARS_PER_CYCLE);
        let years_into_cycle = years_into_cycle as u16;
        let (century, years_into_century) =
            years_into_cycle.clamped_div_rem(YEARS_PER_CENTURY, 3_u8);
        let (quadrennium, year_in_quadrennium) =
            years_into_century.clamped_div_rem(YEARS_PER_QUADRENNIUM, 24_u8);

        GregorianNormalizedDate {
            cycle,
            century,
            quadrennium,
            year: year_in_quadrennium as u8,
            day: MONTH_STARTS[month_index as usize] + u16::from(day - 1),
        }
    }

    /// `(year, month, day)` with January as month 1.
    pub(crate) fn ymd(self) -> (i64, u8, u8) {
        let march_based_year = ZERO_POINT_YEAR
            + YEARS_PER_CYCLE * self.cycle
            + i64::from(YEARS_PER_CENTURY) * i64::from(self.century)
            + i64::from(YEARS_PER_QUADRENNIUM) * i64::from(self.quadrennium)
            + i64::from(self.year);

        let index = month_index(self.day);
        let day = (self.day - MONTH_STARTS[index as usize]) as u8 + 1;
        if index >= JANUARY {
            (march_based_year + 1, index - JANUARY + 1, day)
        } else {
            (march_based_year, index + 3, day)
        }
    }
}
