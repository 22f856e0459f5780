//! Depth-first border descent with an explicit work stack.
//!
//! Per level: cluster the polygons (outer clusters), then cluster each outer's
//! inner list again (hole clusters). The record of an outer lists the hole
//! outers only, so grandchildren never leak into it; the inner lists of the
//! holes form the next levels.

use crate::geom::{is_ordered, order_polygons, Polygon};
use crate::NestError;

use super::build::build_clusters;
use super::types::{BorderRecord, Cluster, NestCfg};

enum Task<'a> {
    /// Polygons still to be split into outer clusters.
    Level(Vec<&'a Polygon>),
    /// An outer cluster whose record is emitted next.
    Outer(Cluster<'a>),
}

/// Border records of `polygons`, which must be ascending by leftmost x
/// (`InvalidInput` otherwise).
///
/// Order: outer clusters left to right by creation, each followed by the
/// records of its whole subtree before the next sibling.
pub fn collect_borders(polygons: &[Polygon], cfg: NestCfg) -> Result<Vec<BorderRecord>, NestError> {
    require_ordered(polygons)?;
    let mut records = Vec::new();
    let mut stack = vec![Task::Level(polygons.iter().collect())];
    while let Some(task) = stack.pop() {
        match task {
            Task::Level(level) => {
                let outers = build_clusters(level, cfg)?;
                tracing::trace!(clusters = outers.len(), "level");
                stack.extend(outers.into_iter().rev().map(Task::Outer));
            }
            Task::Outer(cluster) => {
                let holes = build_clusters(cluster.inner.iter().copied(), cfg)?;
                records.push(BorderRecord {
                    outer: cluster.outer.id(),
                    inner: holes.iter().map(|h| h.outer.id()).collect(),
                });
                stack.extend(
                    holes
                        .into_iter()
                        .rev()
                        .filter(|h| !h.inner.is_empty())
                        .map(|h| Task::Level(h.inner)),
                );
            }
        }
    }
    tracing::debug!(
        polygons = polygons.len(),
        records = records.len(),
        "collect_borders"
    );
    Ok(records)
}

pub(super) fn require_ordered(polygons: &[Polygon]) -> Result<(), NestError> {
    if is_ordered(polygons) {
        Ok(())
    } else {
        Err(NestError::invalid_input(
            "polygons must be sorted by leftmost x (see order_polygons)",
        ))
    }
}

/// Convenience: sort by leftmost x, then collect border records.
pub fn solve(polygons: Vec<Polygon>, cfg: NestCfg) -> Result<Vec<BorderRecord>, NestError> {
    let sorted = order_polygons(polygons);
    collect_borders(&sorted, cfg)
}
