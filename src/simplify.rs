//! Shape-preserving polyline simplification.
//!
//! Combines a cheap radial pre-thinning pass with Ramer-Douglas-Peucker,
//! restricted to a time window and aware of gap markers. Gap markers are
//! never simplified; they split the series into runs and are re-emitted
//! verbatim at their original position.
//!
//! Everything here is a pure function over immutable slices and is safe to
//! call concurrently for different inputs.

use crate::geom::{Point, square_segment_distance};

/// Reduce `points` to a visually equivalent subset within `[min_time, max_time]`.
///
/// `tolerance` is squared internally; all distance comparisons happen on
/// squared Euclidean distances in raw (ms, value) units. Larger tolerances
/// drop more points. When `highest_quality` is true the radial pre-thinning
/// pass is skipped and only Douglas-Peucker runs.
///
/// Inputs of two or fewer points are returned unchanged; there is nothing to
/// simplify below a line segment. Points outside the time window are dropped,
/// and the scan stops at the first point past `max_time` since the input is
/// sorted.
pub fn simplify(
    points: &[Point],
    tolerance: f64,
    min_time: i64,
    max_time: i64,
    highest_quality: bool,
) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let sq_tolerance = tolerance * tolerance;

    let mut windowed = Vec::new();
    for point in points {
        if point.time > max_time {
            break;
        }
        if point.time >= min_time {
            windowed.push(*point);
        }
    }

    let mut simplified = Vec::with_capacity(windowed.len().min(64));
    let mut run_start = 0;
    for index in 0..windowed.len() {
        if windowed[index].is_gap() {
            simplify_run(
                &windowed[run_start..index],
                sq_tolerance,
                highest_quality,
                &mut simplified,
            );
            simplified.push(windowed[index]);
            run_start = index + 1;
        }
    }
    simplify_run(
        &windowed[run_start..],
        sq_tolerance,
        highest_quality,
        &mut simplified,
    );

    simplified
}

/// Simplify one gap-free run and append the kept points to `out`.
fn simplify_run(run: &[Point], sq_tolerance: f64, highest_quality: bool, out: &mut Vec<Point>) {
    if run.len() <= 2 {
        out.extend_from_slice(run);
        return;
    }
    if highest_quality {
        douglas_peucker(run, sq_tolerance, out);
    } else {
        let thinned = radial_thin(run, sq_tolerance);
        douglas_peucker(&thinned, sq_tolerance, out);
    }
}

/// Single forward pass dropping points too close to the last kept one.
///
/// The first and last points of the run are always kept.
fn radial_thin(run: &[Point], sq_tolerance: f64) -> Vec<Point> {
    let mut kept = vec![run[0]];
    let mut previous = run[0];
    for point in &run[1..] {
        if point.square_distance(&previous) > sq_tolerance {
            kept.push(*point);
            previous = *point;
        }
    }
    if let Some(last) = run.last()
        && previous != *last
    {
        kept.push(*last);
    }
    kept
}

/// Ramer-Douglas-Peucker over one run, with an explicit work stack.
///
/// A keep mask plays the role of the recursion's in-order emission, so the
/// output stays sorted by time regardless of segment processing order. The
/// explicit stack bounds stack depth on pathological near-collinear runs.
fn douglas_peucker(run: &[Point], sq_tolerance: f64, out: &mut Vec<Point>) {
    let last = run.len() - 1;
    let mut keep = vec![false; run.len()];
    keep[0] = true;
    keep[last] = true;

    let mut segments = vec![(0usize, last)];
    while let Some((first, last)) = segments.pop() {
        let mut max_sq_distance = sq_tolerance;
        let mut split = first;
        for index in first + 1..last {
            let sq_distance = square_segment_distance(&run[index], &run[first], &run[last]);
            if sq_distance > max_sq_distance {
                split = index;
                max_sq_distance = sq_distance;
            }
        }
        if split > first {
            keep[split] = true;
            if split - first > 1 {
                segments.push((first, split));
            }
            if last - split > 1 {
                segments.push((split, last));
            }
        }
    }

    out.extend(
        run.iter()
            .zip(&keep)
            .filter_map(|(point, &kept)| kept.then_some(*point)),
    );
}
