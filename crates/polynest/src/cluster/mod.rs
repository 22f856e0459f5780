//! Cluster builder and depth-first border descent.
//!
//! Purpose
//! - Partition polygons (sorted by leftmost x) into clusters: one outer
//!   polygon plus everything the first-vertex probe places inside it.
//! - Apply the builder twice per level to separate direct children from
//!   deeper descendants, emitting one `BorderRecord` per outer cluster.
//! - Optionally materialize the whole containment forest as an id-indexed arena.
//!
//! Layout
//! - `types.rs` (clusters, records, config), `build.rs` (one clustering
//!   pass), `descent.rs` (border records), `forest.rs` (arena).

mod build;
mod descent;
mod forest;
mod types;

pub use build::build_clusters;
pub use descent::{collect_borders, solve};
pub use forest::ContainmentForest;
pub use types::{BorderRecord, Cluster, NestCfg};

#[cfg(test)]
mod tests;
