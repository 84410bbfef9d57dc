use num_integer::Integer;

const GREGORIAN_MONTH_LENGTHS_NON_LEAP_YEAR: [u8; 12] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) fn is_leap_year(year: i64) -> bool {
    // Get offset into cycle first so we can do this with smaller integers.
    let year = year.mod_floor(&400) as u16;
    year % 4 == 0 && (year % 100 != 0 || year == 0)
}

pub(crate) fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month), "Month must be in range 1-12");
    if month == 2 && is_leap_year(year) {
        29
    } else {
        GREGORIAN_MONTH_LENGTHS_NON_LEAP_YEAR[(month - 1) as usize]
    }
}

/// Parses a run of ASCII digits with a fixed width. Signs and whitespace are rejected, unlike
/// `str::parse`.
pub(crate) fn parse_fixed_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0_u32, |acc, b| {
        b.is_ascii_digit()
            .then(|| acc * 10 + (b - b'0') as u32)
    })
}
