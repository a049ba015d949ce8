//! Time intervals over millisecond timestamps.

/// A closed time interval in milliseconds.
///
/// A range is well formed when `from <= to`; everywhere a range is used as a
/// query viewport the stricter `from < to` is required (see
/// [`TimeRange::is_valid`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// Inclusive start timestamp in milliseconds.
    pub from: i64,
    /// Inclusive end timestamp in milliseconds.
    pub to: i64,
}

impl TimeRange {
    /// Create a new time range.
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Span of the range in milliseconds.
    pub fn span(&self) -> i64 {
        self.to - self.from
    }

    /// Check whether the range has positive span.
    pub fn is_valid(&self) -> bool {
        self.from < self.to
    }

    /// Check whether another range lies entirely within this one.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.from <= other.from && other.to <= self.to
    }

    /// Union of two ranges.
    pub fn union(a: Self, b: Self) -> Self {
        Self {
            from: a.from.min(b.from),
            to: a.to.max(b.to),
        }
    }

    /// Expand the range to include a timestamp.
    pub fn expand_to_include(&mut self, time: i64) {
        if time < self.from {
            self.from = time;
        }
        if time > self.to {
            self.to = time;
        }
    }
}
