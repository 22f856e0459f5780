//! Input checks for untrusted scenes.
//!
//! The cluster builder assumes simple polygons that are nested or disjoint.
//! `check_topology` rejects the violations that can be decided from edges
//! alone: repeated vertices, proper self-crossings, proper crossings between
//! two polygons, and coincident polygons (the same vertex cycle, in either
//! direction and from any start). Other touching (collinear edges or shared
//! endpoints) is not a proper crossing and passes.

use std::collections::HashSet;

use super::types::{Point, Polygon};
use crate::NestError;

/// Axis-aligned bounds used to skip polygon pairs that cannot cross.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    fn of(poly: &Polygon) -> Self {
        let pts = poly.points();
        let mut min = pts[0];
        let mut max = pts[0];
        for p in &pts[1..] {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        }
        Self { min, max }
    }

    fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

/// Validate ids, vertices, and edge crossings of a whole scene.
pub fn check_topology(polygons: &[Polygon]) -> Result<(), NestError> {
    let mut seen = HashSet::with_capacity(polygons.len());
    for poly in polygons {
        if !seen.insert(poly.id()) {
            return Err(NestError::invalid_input(format!(
                "polygon id {} appears more than once",
                poly.id()
            )));
        }
        check_simple(poly)?;
    }
    let bounds: Vec<Bounds> = polygons.iter().map(Bounds::of).collect();
    for i in 0..polygons.len() {
        for j in i + 1..polygons.len() {
            if !bounds[i].overlaps(&bounds[j]) {
                continue;
            }
            let coincident =
                bounds[i] == bounds[j] && same_cycle(polygons[i].points(), polygons[j].points());
            if coincident || edges_cross(&polygons[i], &polygons[j]) {
                return Err(NestError::AmbiguousTopology {
                    outer: polygons[i].id(),
                    inner: polygons[j].id(),
                });
            }
        }
    }
    Ok(())
}

fn check_simple(poly: &Polygon) -> Result<(), NestError> {
    let pts = poly.points();
    let n = pts.len();
    for i in 0..n {
        if pts[i] == pts[(i + 1) % n] {
            return Err(NestError::invalid_polygon(
                poly.id(),
                format!("vertex {i} repeats its successor"),
            ));
        }
    }
    for i in 0..n {
        // skip adjacent edges, including the wrap-around pair
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_cross(pts[i], pts[(i + 1) % n], pts[j], pts[(j + 1) % n]) {
                return Err(NestError::invalid_polygon(
                    poly.id(),
                    format!("edges {i} and {j} cross"),
                ));
            }
        }
    }
    Ok(())
}

/// Same cyclic vertex sequence up to rotation and reversal.
fn same_cycle(a: &[Point], b: &[Point]) -> bool {
    let n = a.len();
    if n != b.len() {
        return false;
    }
    (0..n).filter(|&k| b[k] == a[0]).any(|k| {
        let forward = (1..n).all(|i| a[i] == b[(k + i) % n]);
        forward || (1..n).all(|i| a[i] == b[(k + n - i) % n])
    })
}

fn edges_cross(a: &Polygon, b: &Polygon) -> bool {
    let (pa, pb) = (a.points(), b.points());
    (0..pa.len()).any(|i| {
        let (a1, a2) = (pa[i], pa[(i + 1) % pa.len()]);
        (0..pb.len()).any(|j| segments_cross(a1, a2, pb[j], pb[(j + 1) % pb.len()]))
    })
}

/// Proper crossing: each segment's endpoints lie strictly on opposite sides of the other.
fn segments_cross(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    orient(p1, p2, p3) * orient(p1, p2, p4) < 0 && orient(p3, p4, p1) * orient(p3, p4, p2) < 0
}

/// Sign of `(a − o) × (b − o)`.
#[inline]
fn orient(o: Point, a: Point, b: Point) -> i32 {
    let (ox, oy) = (o.x as i128, o.y as i128);
    let v = (a.x as i128 - ox) * (b.y as i128 - oy) - (a.y as i128 - oy) * (b.x as i128 - ox);
    v.signum() as i32
}
