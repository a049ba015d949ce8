//! Wire-format ingestion and the fetch in-flight guard.
//!
//! The history store delivers each series as a compact sample list whose
//! first element restates the last known state before the queried range; that
//! priming sample is skipped during conversion. States arrive as JSON numbers
//! or strings; anything that does not coerce to a float becomes a gap marker.

use serde::Deserialize;

use crate::error::WindowingError;
use crate::geom::Point;

/// A state value as delivered on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    /// Already numeric.
    Number(f64),
    /// Numeric string, or a non-numeric state such as "unavailable".
    Text(String),
}

impl StateValue {
    /// Coerce to a float; non-numeric states become NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
        }
    }
}

/// One history sample as delivered by the fetch collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct HistorySample {
    /// Last-updated timestamp in fractional seconds.
    #[serde(rename = "lu")]
    pub last_updated: f64,
    /// The recorded state.
    #[serde(rename = "s")]
    pub state: StateValue,
}

/// Convert one entity's delivered samples into store points.
///
/// Skips the leading priming sample and rounds fractional-second timestamps
/// to integer milliseconds.
pub fn points_from_history(samples: &[HistorySample]) -> Vec<Point> {
    samples
        .iter()
        .skip(1)
        .map(|sample| {
            Point::new(
                (sample.last_updated * 1000.0).round() as i64,
                sample.state.as_f64(),
            )
        })
        .collect()
}

/// Guard rejecting overlapping history requests.
///
/// The dashboard runs one logical thread; a second fetch for the same entity
/// group while one is outstanding is reported as an error, not queued. The
/// guard is cleared on success and on failure alike so a later request can
/// retry.
#[derive(Debug, Default)]
pub struct RequestGuard {
    in_flight: bool,
}

impl RequestGuard {
    /// Create a cleared guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a request as started.
    pub fn begin(&mut self) -> Result<(), WindowingError> {
        if self.in_flight {
            return Err(WindowingError::RequestInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Mark the outstanding request as completed or failed.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    /// Check whether a request is outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}
