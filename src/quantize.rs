//! Viewport quantization onto cache-stable windows.
//!
//! The requested viewport is mapped onto a node of a ternary interval tree
//! rooted at the loaded data range. Small pan/zoom deltas keep resolving to
//! the same node, so simplified views can be cached per node; crossing a
//! third-boundary or leaving the root triggers a controlled, geometric (x3)
//! re-rooting instead of unbounded growth.

use crate::error::WindowingError;
use crate::range::TimeRange;

/// Map `viewport` onto the smallest ternary-tree node over `data_range` that
/// still contains it.
///
/// The root grows by tripling leftward or rightward until it covers the
/// viewport, then the search descends into thirds while the viewport fits a
/// single one. Fails with [`WindowingError::InvalidViewport`] on a degenerate
/// viewport; a root that can no longer grow or shrink is an internal
/// invariant violation.
pub fn quantize(data_range: TimeRange, viewport: TimeRange) -> Result<TimeRange, WindowingError> {
    if !viewport.is_valid() {
        return Err(WindowingError::InvalidViewport {
            from: viewport.from,
            to: viewport.to,
        });
    }

    let mut node = data_range;
    loop {
        let span = node.span();
        if node.contains(&viewport) {
            let third = span / 3;
            if third == 0 {
                // Too small to trisect further.
                return Ok(node);
            }
            let p1 = node.from + third;
            let p2 = p1 + third;
            if viewport.to <= p1 {
                node = TimeRange::new(node.from, p1);
            } else if TimeRange::new(p1, p2).contains(&viewport) {
                node = TimeRange::new(p1, p2);
            } else if TimeRange::new(p2, node.to).contains(&viewport) {
                node = TimeRange::new(p2, node.to);
            } else {
                // Straddles more than one third; this node is the answer.
                return Ok(node);
            }
        } else if span <= 0 {
            // A degenerate root cannot be expanded into a cover.
            return Err(WindowingError::QuantizeInternal);
        } else if viewport.from < node.from {
            node = TimeRange::new(node.from.saturating_sub(span.saturating_mul(2)), node.to);
        } else if viewport.to > node.to {
            node = TimeRange::new(node.from, node.to.saturating_add(span.saturating_mul(2)));
        } else {
            return Err(WindowingError::QuantizeInternal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;

    // 16 Mar 2024 12:00 UTC in milliseconds.
    const ROOT_FROM: i64 = 1_710_590_400_000;
    // 18 Mar 2024 00:00 UTC: a 36 hour root.
    const ROOT_TO: i64 = ROOT_FROM + 36 * HOUR;

    #[test]
    fn degenerate_viewport_is_rejected() {
        let data = TimeRange::new(0, 100);
        let error = quantize(data, TimeRange::new(50, 50)).unwrap_err();
        assert_eq!(error, WindowingError::InvalidViewport { from: 50, to: 50 });
        assert!(quantize(data, TimeRange::new(60, 50)).is_err());
    }

    #[test]
    fn viewport_in_first_third_descends() {
        // Viewport 12:03 .. 23:00 on the 36 hour root lands in the first
        // third, 16 Mar 12:00 .. 17 Mar 00:00.
        let data = TimeRange::new(ROOT_FROM, ROOT_TO);
        let viewport = TimeRange::new(ROOT_FROM + 3 * 60_000, ROOT_FROM + 11 * HOUR);
        let window = quantize(data, viewport).unwrap();
        assert_eq!(window, TimeRange::new(ROOT_FROM, ROOT_FROM + 12 * HOUR));
    }

    #[test]
    fn straddling_viewport_returns_the_node() {
        let data = TimeRange::new(0, 90);
        // Crosses the 30/60 boundary: the root itself is the answer.
        let window = quantize(data, TimeRange::new(20, 70)).unwrap();
        assert_eq!(window, data);
    }

    #[test]
    fn viewport_left_of_root_triples_leftward() {
        let data = TimeRange::new(0, 90);
        // One full span to the left; the root grows to [-180, 90] and the
        // viewport then fits its first third.
        let window = quantize(data, TimeRange::new(-150, -100)).unwrap();
        assert_eq!(window, TimeRange::new(-180, -90));
    }

    #[test]
    fn viewport_right_of_root_triples_rightward() {
        let data = TimeRange::new(0, 90);
        // The root grows to [0, 270]; the viewport fits its middle third.
        let window = quantize(data, TimeRange::new(100, 170)).unwrap();
        assert_eq!(window, TimeRange::new(90, 180));
    }

    #[test]
    fn result_always_contains_the_viewport() {
        let data = TimeRange::new(ROOT_FROM, ROOT_TO);
        let viewports = [
            TimeRange::new(ROOT_FROM + 1, ROOT_FROM + 2),
            TimeRange::new(ROOT_FROM + 5 * HOUR, ROOT_FROM + 29 * HOUR),
            TimeRange::new(ROOT_FROM - 7 * HOUR, ROOT_FROM + HOUR),
            TimeRange::new(ROOT_TO - 1, ROOT_TO + 50 * HOUR),
            TimeRange::new(ROOT_FROM - 100 * HOUR, ROOT_TO + 100 * HOUR),
        ];
        for viewport in viewports {
            let window = quantize(data, viewport).unwrap();
            assert!(
                window.contains(&viewport),
                "{window:?} does not contain {viewport:?}"
            );
        }
    }

    #[test]
    fn nearby_viewports_share_a_window() {
        let data = TimeRange::new(ROOT_FROM, ROOT_TO);
        let a = quantize(data, TimeRange::new(ROOT_FROM + HOUR, ROOT_FROM + 10 * HOUR)).unwrap();
        let b = quantize(
            data,
            TimeRange::new(ROOT_FROM + HOUR + 60_000, ROOT_FROM + 10 * HOUR + 60_000),
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_data_range_with_outside_viewport_is_internal_error() {
        let data = TimeRange::new(100, 100);
        let error = quantize(data, TimeRange::new(200, 300)).unwrap_err();
        assert_eq!(error, WindowingError::QuantizeInternal);
    }
}
