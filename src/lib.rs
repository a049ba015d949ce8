//! series-windowing reduces long sensor history series to render-ready form.
//! The crate targets dashboard charts that pan and zoom across spans from
//! minutes to months while data arrives incrementally from a history store.
//!
//! The pipeline: batches are merged into per-entity raw blocks
//! ([`GraphData`]), a requested viewport is quantized onto a cache-stable
//! window ([`quantize`]), and on a cache miss the raw block is reduced to a
//! target point budget ([`simplify_to_budget`]) with gap-aware
//! Douglas-Peucker simplification ([`simplify`]).

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod geom;
pub mod ingest;
pub mod quantize;
pub mod range;
pub mod resolution;
pub mod simplify;
pub mod store;

pub use config::{EntityConfig, GraphConfig};
pub use error::WindowingError;
pub use geom::Point;
pub use ingest::{HistorySample, RequestGuard, StateValue, points_from_history};
pub use quantize::quantize;
pub use range::TimeRange;
pub use resolution::simplify_to_budget;
pub use simplify::simplify;
pub use store::{DataBlock, GraphData};
