//! Exact integer 2D geometry for polygon nesting.
//!
//! Purpose
//! - Provide an immutable `Polygon` (vertex cycle, original id, leftmost x)
//!   and the point-in-polygon predicate the clustering passes rely on.
//! - Keep every decision exact: coordinates are `i64`, products are `i128`.
//!
//! Contents
//! - `types`: `Point`, `PolygonId`, `Polygon`, `RayMode`.
//! - `pip`: horizontal-ray and directed-ray crossing parity.
//! - `order`: stable sort by leftmost x (precondition of the cluster builder).
//! - `validate`: proper edge-crossing checks for untrusted inputs.
//! - `rand`: reproducible nested scenes for tests, benches, and the CLI.

pub(crate) mod cfg;
mod order;
mod pip;
pub mod rand;
mod types;
mod validate;

pub use cfg::{COORD_LIMIT, DEFAULT_RAY_DIR};
pub use order::{is_ordered, order_polygons};
pub use pip::{contains, is_inside, is_inside_directed};
pub use types::{Point, Polygon, PolygonId, RayMode};
pub use validate::check_topology;
