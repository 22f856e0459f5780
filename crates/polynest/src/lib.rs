//! Polygon nesting: containment tests, clustering, and border records.
//!
//! Layout
//! - `geom`: integer points and polygons, the ray-casting predicate, ordering
//!   by leftmost x, topology validation, and random nested scenes.
//! - `cluster`: the greedy cluster builder, the depth-first border descent,
//!   and the containment forest arena.
//! - `io`: the plain-text scene format and border output.
//!
//! All geometry is exact 64-bit integer arithmetic (widened to `i128` where
//! products appear). There are no tolerances in this crate.

pub mod cluster;
mod error;
pub mod geom;
pub mod io;

pub use error::NestError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cluster::{
        build_clusters, collect_borders, solve, BorderRecord, Cluster, ContainmentForest, NestCfg,
    };
    pub use crate::geom::rand::{draw_nested_scene, ReplayToken, Scene, SceneCfg, VertexCount};
    pub use crate::geom::{
        check_topology, contains, is_inside, is_inside_directed, order_polygons, Point, Polygon,
        PolygonId, RayMode,
    };
    pub use crate::NestError;
}
