//! Data types for clustering passes and their output.

use std::fmt;

use crate::geom::{Polygon, PolygonId, RayMode};

/// One outer polygon plus the polygons attached to it by a clustering pass.
///
/// Polygons are borrowed from the sorted input; `inner` keeps input order,
/// so it is itself sorted by leftmost x.
#[derive(Clone, Debug)]
pub struct Cluster<'a> {
    pub outer: &'a Polygon,
    pub inner: Vec<&'a Polygon>,
}

impl<'a> Cluster<'a> {
    pub fn new(outer: &'a Polygon) -> Self {
        Self {
            outer,
            inner: Vec::new(),
        }
    }
}

/// Output line: an outer polygon followed by its direct children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BorderRecord {
    pub outer: PolygonId,
    pub inner: Vec<PolygonId>,
}

impl BorderRecord {
    /// Outer id first, then the children in discovery order.
    pub fn ids(&self) -> impl Iterator<Item = PolygonId> + '_ {
        std::iter::once(self.outer).chain(self.inner.iter().copied())
    }
}

impl fmt::Display for BorderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outer)?;
        for id in &self.inner {
            write!(f, " {id}")?;
        }
        Ok(())
    }
}

/// Clustering configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct NestCfg {
    pub ray: RayMode,
    /// After the first-vertex probe picks an outer, require every vertex of
    /// the candidate to be inside it; otherwise fail with `AmbiguousTopology`.
    /// Off by default: the first match wins unchecked.
    ///
    /// Only containment is verified. Coincident or touching polygons never
    /// attach to each other here; `check_topology` rejects coincident ones.
    pub verify_nesting: bool,
}
