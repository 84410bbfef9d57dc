use std::fmt;

/// Day of the week, Monday first as in ISO 8601.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Builds a weekday from a Monday-based index (0 = Monday). The index is taken modulo 7.
    pub fn from_monday_index(index: u8) -> Self {
        match index % 7 {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }

    pub fn monday_index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Monday through Friday.
    pub fn is_weekday(self) -> bool {
        !matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_index_round_trip() {
        for index in 0..7 {
            assert_eq!(Weekday::from_monday_index(index).monday_index(), index);
        }
        assert_eq!(Weekday::from_monday_index(7), Weekday::Monday);
    }

    #[test]
    fn weekend() {
        assert!(Weekday::Friday.is_weekday());
        assert!(!Weekday::Saturday.is_weekday());
        assert!(!Weekday::Sunday.is_weekday());
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
    }
}
