//! Raw per-entity point storage.

use log::debug;

use crate::geom::Point;
use crate::range::TimeRange;

/// The raw, time-ordered point array for one entity.
///
/// A block only ever grows at its ends: each incoming batch is a contiguous
/// extension either before the earliest stored point or after the latest one.
/// Overlapping or interleaved batches are outside the merge contract (history
/// fetches deliver disjoint range extensions) and are rejected in debug
/// builds.
#[derive(Debug, Clone, Default)]
pub struct DataBlock {
    points: Vec<Point>,
}

impl DataBlock {
    /// Create an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access all raw points as a slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of raw points stored.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time range covered by the stored points, if any.
    pub fn time_range(&self) -> Option<TimeRange> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some(TimeRange::new(first.time, last.time)),
            _ => None,
        }
    }

    /// Merge a sorted batch as a front or back extension.
    ///
    /// A batch starting before the current first point is prepended wholesale,
    /// anything else is appended. Empty batches are no-ops.
    pub fn add(&mut self, batch: &[Point]) {
        let Some(batch_first) = batch.first() else {
            return;
        };
        debug_assert!(
            batch.windows(2).all(|pair| pair[0].time <= pair[1].time),
            "batch must be sorted by timestamp"
        );

        let prepend = self
            .points
            .first()
            .is_some_and(|first| batch_first.time < first.time);
        if prepend {
            debug_assert!(
                batch.last().unwrap().time <= self.points[0].time,
                "prepended batch must not overlap stored points"
            );
            debug!("prepending {} points", batch.len());
            self.points.splice(0..0, batch.iter().copied());
        } else {
            debug_assert!(
                self.points
                    .last()
                    .is_none_or(|last| last.time <= batch_first.time),
                "appended batch must not overlap stored points"
            );
            debug!("appending {} points", batch.len());
            self.points.extend_from_slice(batch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(times: &[i64]) -> Vec<Point> {
        times.iter().map(|&t| Point::new(t, t as f64)).collect()
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut block = DataBlock::new();
        block.add(&[]);
        assert!(block.is_empty());
        assert_eq!(block.time_range(), None);
    }

    #[test]
    fn earlier_batch_is_prepended() {
        let mut block = DataBlock::new();
        block.add(&batch(&[50, 60, 70]));
        block.add(&batch(&[10, 20, 30]));
        let times: Vec<i64> = block.points().iter().map(|p| p.time).collect();
        assert_eq!(times, vec![10, 20, 30, 50, 60, 70]);
    }

    #[test]
    fn later_batch_is_appended() {
        let mut block = DataBlock::new();
        block.add(&batch(&[10, 20]));
        block.add(&batch(&[30, 40]));
        let times: Vec<i64> = block.points().iter().map(|p| p.time).collect();
        assert_eq!(times, vec![10, 20, 30, 40]);
        assert_eq!(block.time_range(), Some(TimeRange::new(10, 40)));
    }
}
