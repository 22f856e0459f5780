//! Containment forest as an id-indexed arena.
//!
//! Built level by level with the same cluster builder as the descent: the
//! outers of a level's clusters are the children of that level's parent, and
//! each cluster's inner list is the next level below its outer.

use crate::geom::{Polygon, PolygonId};
use crate::NestError;

use super::build::build_clusters;
use super::descent::require_ordered;
use super::types::{BorderRecord, NestCfg};

/// Parent, children, and depth of every polygon, indexed by `PolygonId`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainmentForest {
    parent: Vec<Option<PolygonId>>,
    children: Vec<Vec<PolygonId>>,
    depth: Vec<usize>,
    roots: Vec<PolygonId>,
}

impl ContainmentForest {
    /// Build from polygons ascending by leftmost x whose ids are exactly `0..n`.
    ///
    /// Fails with `InvalidInput` for unsorted input or ids outside that range.
    pub fn build(polygons: &[Polygon], cfg: NestCfg) -> Result<Self, NestError> {
        require_ordered(polygons)?;
        let n = polygons.len();
        let mut seen = vec![false; n];
        for poly in polygons {
            let k = poly.id().0;
            if k >= n || seen[k] {
                return Err(NestError::invalid_input(format!(
                    "polygon ids must be 0..{n} without repeats, found {k}"
                )));
            }
            seen[k] = true;
        }

        let mut forest = Self {
            parent: vec![None; n],
            children: vec![Vec::new(); n],
            depth: vec![0; n],
            roots: Vec::new(),
        };
        let mut stack: Vec<(Option<PolygonId>, usize, Vec<&Polygon>)> =
            vec![(None, 0, polygons.iter().collect())];
        while let Some((parent, depth, level)) = stack.pop() {
            for cluster in build_clusters(level, cfg)? {
                let id = cluster.outer.id();
                forest.parent[id.0] = parent;
                forest.depth[id.0] = depth;
                match parent {
                    Some(p) => forest.children[p.0].push(id),
                    None => forest.roots.push(id),
                }
                if !cluster.inner.is_empty() {
                    stack.push((Some(id), depth + 1, cluster.inner));
                }
            }
        }
        Ok(forest)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Uncontained polygons, left to right.
    pub fn roots(&self) -> &[PolygonId] {
        &self.roots
    }

    /// `None` for roots and for ids outside `0..len()`; `depth` tells them apart.
    pub fn parent(&self, id: PolygonId) -> Option<PolygonId> {
        self.parent.get(id.0).copied().flatten()
    }

    pub fn parents(&self) -> &[Option<PolygonId>] {
        &self.parent
    }

    /// Direct children in discovery order; `None` for unknown ids.
    pub fn children(&self, id: PolygonId) -> Option<&[PolygonId]> {
        self.children.get(id.0).map(Vec::as_slice)
    }

    /// Zero for roots; `None` for unknown ids.
    pub fn depth(&self, id: PolygonId) -> Option<usize> {
        self.depth.get(id.0).copied()
    }

    /// Number of nesting levels (0 for an empty forest).
    pub fn height(&self) -> usize {
        self.depth.iter().max().map_or(0, |d| d + 1)
    }

    /// Border records in descent order: every even-depth node with its children.
    pub fn borders(&self) -> Vec<BorderRecord> {
        let mut out = Vec::new();
        let mut stack: Vec<PolygonId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let kids = &self.children[id.0];
            out.push(BorderRecord {
                outer: id,
                inner: kids.clone(),
            });
            for c in kids.iter().rev() {
                stack.extend(self.children[c.0].iter().rev().copied());
            }
        }
        out
    }
}
