//! Basic types: integer points, polygon ids, polygons, and ray selection.

use std::fmt;

use nalgebra::Vector2;

use super::cfg::{COORD_LIMIT, DEFAULT_RAY_DIR};
use crate::NestError;

/// Exact integer point (or direction) in the plane.
pub type Point = Vector2<i64>;

/// Original input position of a polygon; stable across sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PolygonId(pub usize);

impl fmt::Display for PolygonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simple polygon as a cyclic vertex list (either winding).
///
/// Invariants:
/// - At least three vertices.
/// - Every coordinate lies within `±COORD_LIMIT`.
/// - `left_x` is the minimum x over the vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    id: PolygonId,
    points: Vec<Point>,
    left_x: i64,
}

impl Polygon {
    pub fn new(id: PolygonId, points: Vec<Point>) -> Result<Self, NestError> {
        if points.len() < 3 {
            return Err(NestError::invalid_polygon(
                id,
                format!("needs at least 3 vertices, got {}", points.len()),
            ));
        }
        let in_range = |v: i64| (-COORD_LIMIT..=COORD_LIMIT).contains(&v);
        if !points.iter().all(|p| in_range(p.x) && in_range(p.y)) {
            return Err(NestError::NumericOverflow { id });
        }
        let left_x = points.iter().map(|p| p.x).min().unwrap_or(i64::MAX);
        Ok(Self { id, points, left_x })
    }

    /// Shorthand for building from coordinate pairs.
    pub fn from_coords(id: usize, coords: &[(i64, i64)]) -> Result<Self, NestError> {
        let points = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Self::new(PolygonId(id), points)
    }

    #[inline]
    pub fn id(&self) -> PolygonId {
        self.id
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Sort key: the minimum x-coordinate over all vertices.
    #[inline]
    pub fn left_x(&self) -> i64 {
        self.left_x
    }

    /// The vertex used to probe containment in other polygons.
    #[inline]
    pub fn first(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Same polygon traversed in the opposite direction, starting from the same vertex.
    pub fn reversed(&self) -> Self {
        let mut points = Vec::with_capacity(self.points.len());
        points.push(self.points[0]);
        points.extend(self.points[1..].iter().rev().copied());
        Self {
            id: self.id,
            points,
            left_x: self.left_x,
        }
    }
}

/// Which ray the containment predicate casts from the query point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RayMode {
    /// Rightward horizontal ray with exact vertex tie-breaking.
    #[default]
    Horizontal,
    /// Ray along a fixed integer direction; meant for directions that avoid vertices.
    Directed { dx: i64, dy: i64 },
}

impl RayMode {
    /// Directed ray along `DEFAULT_RAY_DIR`.
    pub fn directed_default() -> Self {
        let (dx, dy) = DEFAULT_RAY_DIR;
        Self::Directed { dx, dy }
    }

    pub(crate) fn validate(self) -> Result<(), NestError> {
        match self {
            Self::Directed { dx: 0, dy: 0 } => {
                Err(NestError::invalid_input("ray direction must be non-zero"))
            }
            Self::Directed { dx, dy }
                if !(-COORD_LIMIT..=COORD_LIMIT).contains(&dx)
                    || !(-COORD_LIMIT..=COORD_LIMIT).contains(&dy) =>
            {
                Err(NestError::invalid_input("ray direction exceeds the coordinate limit"))
            }
            _ => Ok(()),
        }
    }
}
