use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text does not have the shape the parser expects.
    #[error("cannot parse {input:?}: expected {expected}")]
    Parse {
        input: String,
        expected: &'static str,
    },

    /// The fields do not describe an existing date or time of day.
    #[error("invalid date or time")]
    InvalidDate,

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),

    /// The result falls outside of 0001-01-01 through 9999-12-31, or outside of what the
    /// platform's `time_t` can represent.
    #[error("datetime is out of range")]
    OutOfRange,
}

impl Error {
    pub(crate) fn parse(input: &str, expected: &'static str) -> Self {
        Error::Parse {
            input: input.to_string(),
            expected,
        }
    }
}
