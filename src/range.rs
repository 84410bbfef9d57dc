use std::iter::FusedIterator;

use crate::duration::Duration;
use crate::iso8601::DateTime;
use crate::period::Period;

/// Which way a [`DateRange`] walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From an earlier start towards a later end.
    Forward,
    /// From a later start back towards an earlier end. Also used when start and end are equal.
    Backward,
}

impl Direction {
    fn between(start: DateTime, end: DateTime) -> Self {
        if end > start {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// True while `cursor` has not yet passed `end`. Reaching `end` exactly still continues.
    fn continues(self, cursor: DateTime, end: DateTime) -> bool {
        match self {
            Direction::Forward => cursor <= end,
            Direction::Backward => cursor >= end,
        }
    }

    /// Moves `cursor` one step of `step` towards the end, or `None` if that would leave the
    /// supported datetime range.
    fn step(self, cursor: DateTime, step: Duration) -> Option<DateTime> {
        match self {
            Direction::Forward => cursor.checked_add(step).ok(),
            Direction::Backward => cursor.checked_sub(step).ok(),
        }
    }
}

/// A span between two datetimes that can be walked in fixed steps. The end may lie before the
/// start, in which case the walk goes back in time. The direction is decided once, here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: DateTime,
    end: DateTime,
    direction: Direction,
}

impl DateRange {
    pub fn new(start: DateTime, end: DateTime) -> Self {
        let direction = Direction::between(start, end);
        log::debug!("Range {} to {} walks {:?}", start, end, direction);
        DateRange {
            start,
            end,
            direction,
        }
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn end(&self) -> DateTime {
        self.end
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_forward(&self) -> bool {
        self.direction == Direction::Forward
    }

    /// Yields `start`, then every `period` step towards `end`, for as long as the cursor has not
    /// passed `end`. `end` itself is yielded when a step lands on it exactly.
    ///
    /// ```
    /// use datum::{DateRange, DateTime, Period};
    ///
    /// let start: DateTime = "2021-01-01T00:03:00".parse().unwrap();
    /// let end: DateTime = "2021-01-01T00:00:00".parse().unwrap();
    /// let minutes: Vec<String> = DateRange::new(start, end)
    ///     .split_by(Period::Minute)
    ///     .map(|dt| dt.time().to_short_string())
    ///     .collect();
    /// assert_eq!(minutes, ["00:03", "00:02", "00:01", "00:00"]);
    /// ```
    pub fn split_by(&self, period: Period) -> Split {
        Split {
            cursor: Some(self.start),
            end: self.end,
            direction: self.direction,
            step: period.duration(),
        }
    }
}

/// Iterator returned by [`DateRange::split_by`].
#[derive(Debug, Clone)]
pub struct Split {
    // None once the walk is over.
    cursor: Option<DateTime>,
    end: DateTime,
    direction: Direction,
    step: Duration,
}

impl Iterator for Split {
    type Item = DateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        if !self.direction.continues(cursor, self.end) {
            return None;
        }
        self.cursor = self.direction.step(cursor, self.step);
        Some(cursor)
    }
}

impl FusedIterator for Split {}
