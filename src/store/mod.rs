//! Per-entity series storage with cached, simplified views.
//!
//! [`GraphData`] owns one raw point array per entity, merges incrementally
//! fetched batches, tracks the union time span across entities, and serves
//! render-ready, budgeted views per requested viewport. Views are cached
//! under the quantized viewport so small pan/zoom deltas hit the cache.

mod block;

pub use block::DataBlock;

use std::collections::HashMap;

use log::debug;

use crate::error::WindowingError;
use crate::geom::Point;
use crate::quantize::quantize;
use crate::range::TimeRange;
use crate::resolution::simplify_to_budget;

/// One entity's raw block plus its cache of simplified views.
///
/// Created lazily when an entity index is first referenced; lives for the
/// chart session. The cache maps a quantized viewport to the view computed
/// for it and is cleared whenever new raw data arrives, since any merge
/// invalidates previously derived views.
#[derive(Debug, Clone, Default)]
struct EntityData {
    block: DataBlock,
    views: HashMap<TimeRange, Vec<Point>>,
}

impl EntityData {
    fn add(&mut self, batch: &[Point]) {
        self.block.add(batch);
        self.views.clear();
    }
}

/// Session-wide store of per-entity history series.
#[derive(Debug, Clone, Default)]
pub struct GraphData {
    entities: Vec<EntityData>,
    time_range: Option<TimeRange>,
}

impl GraphData {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a fetched, time-ordered batch into an entity's block.
    ///
    /// The batch must be a contiguous extension before or after the entity's
    /// stored points (see [`DataBlock::add`]). Grows the entity table as
    /// needed, expands the union time range outward, and drops the entity's
    /// cached views. Empty batches are no-ops.
    pub fn add(&mut self, entity: usize, batch: &[Point]) {
        let (Some(first), Some(last)) = (batch.first(), batch.last()) else {
            return;
        };

        if self.entities.len() <= entity {
            self.entities.resize_with(entity + 1, EntityData::default);
        }
        self.entities[entity].add(batch);

        let batch_range = TimeRange::new(first.time, last.time);
        self.time_range = Some(match self.time_range {
            Some(range) => TimeRange::union(range, batch_range),
            None => batch_range,
        });
        debug!(
            "entity {entity}: merged {} points, union span now {:?}",
            batch.len(),
            self.time_range
        );
    }

    /// Check whether the first entity holds any points.
    ///
    /// A session-bootstrap check, not a per-entity query.
    pub fn has_data(&self) -> bool {
        self.entities
            .first()
            .is_some_and(|entity| !entity.block.is_empty())
    }

    /// The union time span over all entities' data.
    ///
    /// `None` until the first non-empty batch has been merged; afterwards the
    /// span only ever grows outward.
    pub fn max_time_range(&self) -> Option<TimeRange> {
        self.time_range
    }

    /// Access an entity's raw points.
    pub fn raw_points(&self, entity: usize) -> &[Point] {
        self.entities
            .get(entity)
            .map_or(&[], |entity| entity.block.points())
    }

    /// Get a render-ready series for one entity and viewport.
    ///
    /// Blocks short enough to fit the budget are returned unchanged.
    /// Otherwise the viewport is quantized into a cache window; on a miss the
    /// raw block is simplified down to roughly `target_points` within the
    /// viewport and anchored to the edges of `full_range` with gap markers,
    /// keeping the horizontal axis stable across zoom levels even when a
    /// zoomed-in window has no data at its exact edges.
    ///
    /// The output is sorted by time, carries at most one leading and one
    /// trailing synthetic gap marker, and never holds more real points than
    /// the raw block restricted to the viewport.
    pub fn data_by_time_range(
        &mut self,
        entity: usize,
        viewport: TimeRange,
        full_range: TimeRange,
        target_points: usize,
    ) -> Result<Vec<Point>, WindowingError> {
        let Some(entity_data) = self.entities.get_mut(entity) else {
            return Ok(Vec::new());
        };
        if entity_data.block.len() <= target_points {
            return Ok(entity_data.block.points().to_vec());
        }

        let window = quantize(full_range, viewport)?;
        if let Some(view) = entity_data.views.get(&window) {
            debug!("entity {entity}: cache hit for window {window:?}");
            return Ok(view.clone());
        }

        let mut view = simplify_to_budget(entity_data.block.points(), viewport, target_points);
        anchor_to_range(&mut view, full_range);
        debug!(
            "entity {entity}: cached {} points for window {window:?}",
            view.len()
        );
        entity_data.views.insert(window, view.clone());
        Ok(view)
    }
}

/// Pin a series to the edges of the full loaded range with gap markers.
fn anchor_to_range(view: &mut Vec<Point>, full_range: TimeRange) {
    if view.first().is_none_or(|first| first.time > full_range.from) {
        view.insert(0, Point::gap(full_range.from));
    }
    if view.last().is_some_and(|last| last.time < full_range.to) {
        view.push(Point::gap(full_range.to));
    }
}
