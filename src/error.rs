//! The error type shared by the windowing engine.

use thiserror::Error;

/// Errors surfaced by the windowing engine.
///
/// Invariant violations indicate a logic bug in the caller's windowing or
/// merge contract and are propagated rather than recovered; they are not
/// transient conditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowingError {
    /// A query viewport with zero or negative span.
    #[error("invalid viewport: [{from}, {to}]")]
    InvalidViewport {
        /// Requested start timestamp.
        from: i64,
        /// Requested end timestamp.
        to: i64,
    },

    /// The quantizer reached a state its invariants rule out.
    #[error("viewport quantization reached an unexpected state")]
    QuantizeInternal,

    /// A history fetch was started while another one is outstanding.
    #[error("history request already in progress")]
    RequestInFlight,
}
