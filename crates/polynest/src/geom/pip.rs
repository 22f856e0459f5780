//! Point-in-polygon by ray casting (crossing parity).
//!
//! Horizontal ray
//! - A vertex lying on the ray line is counted once, by the edge that ends in
//!   it, and only when the boundary passes from one side of the line to the
//!   other there (half-open rule: "below" vs "not below").
//! - Edges starting on the ray line are skipped; their start vertex was
//!   already decided by the previous edge.
//! - Remaining edges intersect the ray analytically with truncating `i128`
//!   division. Endpoints are ordered by x first, so truncation is a floor and
//!   `floor(x) >= p.x` is exact for integer `p.x`.
//!
//! Directed ray
//! - Endpoints are classified by `cross(d, s - p)`; the crossing's projection
//!   on `d` is decided by the sign of `c1·a2 − c2·a1` over `c1 − c2`.
//! - Vertices on the ray are not tie-broken, so directions should avoid them.

use super::types::{Point, Polygon, RayMode};
use crate::NestError;

/// True iff `p` lies inside `polygon` (horizontal ray, either winding).
///
/// Pure and deterministic for any input, including `p` on a vertex or an edge.
pub fn is_inside(polygon: &Polygon, p: Point) -> bool {
    let pts = polygon.points();
    let n = pts.len();
    let mut crossings = 0usize;
    for i in 0..n {
        let s1 = pts[i];
        let s2 = pts[(i + 1) % n];
        if s2.y == p.y {
            if s2.x < p.x {
                continue;
            }
            let s3 = pts[(i + 2) % n];
            // s1-s2-s3 passes across the ray line at s2
            if (s1.y < p.y) != (s3.y < p.y) {
                crossings += 1;
            }
        } else if s1.y == p.y {
            continue;
        } else if ray_hits_segment(p, s1, s2) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Does the rightward horizontal ray from `r` hit segment `s1 s2`?
///
/// A segment lying on the ray line counts when any part of it is at or right of `r`.
pub(crate) fn ray_hits_segment(r: Point, s1: Point, s2: Point) -> bool {
    let (rx, ry) = wide(r);
    let (ax, ay) = wide(s1);
    let (bx, by) = wide(s2);
    // signs only: `r` itself is not range-limited
    if (ay - ry).signum() * (by - ry).signum() > 0 {
        return false;
    }
    if ay == by {
        return ax.max(bx) >= rx;
    }
    let ((ax, ay), (bx, by)) = if ax > bx {
        ((bx, by), (ax, ay))
    } else {
        ((ax, ay), (bx, by))
    };
    let x = if ay > by {
        ax + (ay - ry) * (bx - ax) / (ay - by)
    } else {
        ax + (ry - ay) * (bx - ax) / (by - ay)
    };
    x >= rx
}

/// True iff `p` lies inside `polygon`, casting a ray from `p` along `dir`.
///
/// Fails with `NumericOverflow` when an intermediate product leaves `i128`,
/// and with `InvalidInput` for a zero direction.
pub fn is_inside_directed(polygon: &Polygon, p: Point, dir: Point) -> Result<bool, NestError> {
    RayMode::Directed {
        dx: dir.x,
        dy: dir.y,
    }
    .validate()?;
    let overflow = || NestError::NumericOverflow { id: polygon.id() };
    let pts = polygon.points();
    let n = pts.len();
    let mut crossings = 0usize;
    for i in 0..n {
        let hit = ray_hits_segment_directed(p, dir, pts[i], pts[(i + 1) % n]).ok_or_else(overflow)?;
        if hit {
            crossings += 1;
        }
    }
    Ok(crossings % 2 == 1)
}

/// `None` on `i128` overflow.
fn ray_hits_segment_directed(r: Point, d: Point, s1: Point, s2: Point) -> Option<bool> {
    let c1 = cross(d, s1, r)?;
    let c2 = cross(d, s2, r)?;
    if (c1 > 0 && c2 > 0) || (c1 < 0 && c2 < 0) {
        return Some(false);
    }
    let a1 = dot(d, s1, r)?;
    let a2 = dot(d, s2, r)?;
    if c1 == 0 && c2 == 0 {
        return Some(a1 >= 0 || a2 >= 0);
    }
    // projection of the crossing onto d equals num / den
    let num = c1.checked_mul(a2)?.checked_sub(c2.checked_mul(a1)?)?;
    let den = c1.checked_sub(c2)?;
    Some(if den > 0 { num >= 0 } else { num <= 0 })
}

/// Containment under the configured ray.
pub fn contains(polygon: &Polygon, p: Point, ray: RayMode) -> Result<bool, NestError> {
    match ray {
        RayMode::Horizontal => Ok(is_inside(polygon, p)),
        RayMode::Directed { dx, dy } => is_inside_directed(polygon, p, Point::new(dx, dy)),
    }
}

#[inline]
fn wide(p: Point) -> (i128, i128) {
    (p.x as i128, p.y as i128)
}

/// `d × (s − r)`
#[inline]
fn cross(d: Point, s: Point, r: Point) -> Option<i128> {
    let (dx, dy) = wide(d);
    let (sx, sy) = wide(s);
    let (rx, ry) = wide(r);
    (dx * (sy - ry)).checked_sub(dy * (sx - rx))
}

/// `d · (s − r)`
#[inline]
fn dot(d: Point, s: Point, r: Point) -> Option<i128> {
    let (dx, dy) = wide(d);
    let (sx, sy) = wide(s);
    let (rx, ry) = wide(r);
    (dx * (sx - rx)).checked_add(dy * (sy - ry))
}
