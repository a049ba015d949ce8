//! Sample primitives used by the windowing pipeline.
//!
//! Timestamps are integer milliseconds since the Unix epoch; values are
//! `f64`. A NaN value is the gap marker: "no sample here, do not
//! interpolate across".

/// A timestamped sample.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    /// Timestamp in milliseconds.
    pub time: i64,
    /// Sample value; NaN marks a gap.
    pub value: f64,
}

impl Point {
    /// Create a new sample.
    pub fn new(time: i64, value: f64) -> Self {
        Self { time, value }
    }

    /// Create a gap marker at the given timestamp.
    pub fn gap(time: i64) -> Self {
        Self {
            time,
            value: f64::NAN,
        }
    }

    /// Check whether this sample is a gap marker.
    pub fn is_gap(&self) -> bool {
        self.value.is_nan()
    }

    /// Squared Euclidean distance to another sample in (ms, value) space.
    ///
    /// No unit normalization is applied; time deltas and value deltas are
    /// compared in their native units.
    pub(crate) fn square_distance(&self, other: &Point) -> f64 {
        let dt = (self.time - other.time) as f64;
        let dv = self.value - other.value;
        dt * dt + dv * dv
    }
}

/// Two gap markers at the same timestamp compare equal.
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time
            && (self.value == other.value || (self.is_gap() && other.is_gap()))
    }
}

/// Squared distance from `point` to the segment `(a, b)`.
///
/// The projection is clamped to the segment, so an endpoint acts as the
/// nearest point for samples beyond it.
pub(crate) fn square_segment_distance(point: &Point, a: &Point, b: &Point) -> f64 {
    let mut x = a.time as f64;
    let mut y = a.value;
    let dx = b.time as f64 - x;
    let dy = b.value - y;

    if dx != 0.0 || dy != 0.0 {
        let t = ((point.time as f64 - x) * dx + (point.value - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = b.time as f64;
            y = b.value;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }

    let dx = point.time as f64 - x;
    let dy = point.value - y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_markers_at_same_time_compare_equal() {
        assert_eq!(Point::gap(5), Point::gap(5));
        assert_ne!(Point::gap(5), Point::gap(6));
        assert_ne!(Point::gap(5), Point::new(5, 0.0));
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Point::new(0, 0.0);
        let b = Point::new(10, 0.0);
        let beyond = Point::new(14, 3.0);
        assert_eq!(square_segment_distance(&beyond, &a, &b), 16.0 + 9.0);
    }

    #[test]
    fn segment_distance_is_perpendicular_inside() {
        let a = Point::new(0, 0.0);
        let b = Point::new(10, 0.0);
        let mid = Point::new(5, 2.0);
        assert_eq!(square_segment_distance(&mid, &a, &b), 4.0);
    }
}
