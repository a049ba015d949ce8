//! Tolerance search that hits a target output-point budget.
//!
//! There is no closed form relating Douglas-Peucker tolerance to output
//! length, and for real data the relation is generally but not strictly
//! monotonic. The selector therefore brackets the target with tried samples
//! instead of running a plain binary search.

use log::debug;

use crate::geom::Point;
use crate::range::TimeRange;
use crate::simplify::simplify;

const MAX_TRIALS: usize = 10;
const INITIAL_TOLERANCE: f64 = 0.5;

/// One tried tolerance and the output length it produced.
#[derive(Debug, Clone, Copy)]
struct Trial {
    tolerance: f64,
    len: usize,
}

/// Simplify `points` within `viewport` so the output length lands near
/// `target_points`.
///
/// Runs up to ten simplification trials, bisecting between the tightest
/// over- and under-shooting tolerances seen so far. After the trial cap the
/// last result is returned regardless of exact fit; the budget is
/// approximate, not exact.
pub fn simplify_to_budget(
    points: &[Point],
    viewport: TimeRange,
    target_points: usize,
) -> Vec<Point> {
    let mut trials: Vec<Trial> = Vec::with_capacity(MAX_TRIALS);
    let mut tolerance = INITIAL_TOLERANCE;
    let mut result = Vec::new();

    for trial in 0..MAX_TRIALS {
        result = simplify(points, tolerance, viewport.from, viewport.to, true);
        debug!(
            "budget trial {trial}: tolerance {tolerance}, {} points for target {target_points}",
            result.len()
        );
        trials.push(Trial {
            tolerance,
            len: result.len(),
        });

        if result.len() == target_points {
            break;
        }
        match next_tolerance(&trials, target_points) {
            Some(next) => tolerance = next,
            None => break,
        }
    }

    result
}

/// Pick the next tolerance from the tried samples, or `None` to stop.
fn next_tolerance(trials: &[Trial], target: usize) -> Option<f64> {
    // Tightest over-bound: smallest length above target, then largest
    // tolerance among ties. Tightest under-bound: largest length at or below
    // target, then smallest tolerance among ties.
    let mut over: Option<Trial> = None;
    let mut under: Option<Trial> = None;
    for &trial in trials {
        if trial.len > target {
            over = Some(match over {
                Some(best)
                    if best.len < trial.len
                        || (best.len == trial.len && best.tolerance >= trial.tolerance) =>
                {
                    best
                }
                _ => trial,
            });
        } else {
            under = Some(match under {
                Some(best)
                    if best.len > trial.len
                        || (best.len == trial.len && best.tolerance <= trial.tolerance) =>
                {
                    best
                }
                _ => trial,
            });
        }
    }

    match (over, under) {
        (Some(over), Some(under)) => Some((over.tolerance + under.tolerance) / 2.0),
        // Still too many points everywhere tried: push the tolerance up.
        (Some(over), None) => Some(over.tolerance * 2.0),
        // Every trial is at or under budget; an exact hit ends the search,
        // otherwise probe for more detail with a smaller tolerance.
        (None, Some(under)) => {
            if under.len == target {
                None
            } else {
                Some(under.tolerance / 2.0)
            }
        }
        (None, None) => None,
    }
}
