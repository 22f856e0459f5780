//! Random nested scenes of star-shaped integer polygons.
//!
//! Model
//! - Roots are placed left to right on disjoint discs of radius `base_radius`.
//! - Each polygon is star-shaped around its disc center: `n` jittered angles,
//!   radii in `[r(1 − radial_jitter), r]`, rounded to integers.
//! - Children are placed on disjoint discs inside the polygon's inscribed
//!   disc (distance from center to the nearest edge, with a rounding margin),
//!   so every child is strictly inside its parent and siblings are disjoint.
//! - The final input order is a random permutation; `Scene::parent` records
//!   the true containment forest by id.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{Point, Polygon, PolygonId};
use crate::NestError;

/// Below this radius a disc gets no children (rounding would dominate).
const MIN_CHILD_RADIUS: f64 = 64.0;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Scene sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    /// Number of top-level (uncontained) polygons.
    pub roots: usize,
    /// Nesting levels below the roots.
    pub max_depth: usize,
    /// Upper bound on direct children per polygon (uniform in `0..=max_children`).
    pub max_children: usize,
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing. Clamped to [0, 0.2].
    pub angle_jitter_frac: f64,
    /// Relative radial jitter. Clamped to [0, 0.5].
    pub radial_jitter: f64,
    /// Radius of each root disc.
    pub base_radius: i64,
}
impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            roots: 3,
            max_depth: 3,
            max_children: 3,
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.3,
            base_radius: 1_000_000,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A drawn scene: polygons in input order plus the true parent of each id.
#[derive(Clone, Debug)]
pub struct Scene {
    pub polygons: Vec<Polygon>,
    /// `parent[id]` is the direct container of polygon `id`, if any.
    pub parent: Vec<Option<PolygonId>>,
}

impl Scene {
    /// Children of `id` in ascending id order.
    pub fn children(&self, id: PolygonId) -> Vec<PolygonId> {
        self.parent
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == Some(id))
            .map(|(k, _)| PolygonId(k))
            .collect()
    }
}

struct Disc {
    center: Vector2<f64>,
    radius: f64,
    parent: Option<usize>,
    depth: usize,
}

/// Draw a random scene of properly nested or disjoint polygons.
pub fn draw_nested_scene(cfg: SceneCfg, tok: ReplayToken) -> Result<Scene, NestError> {
    let mut rng = tok.to_std_rng();
    let r0 = cfg.base_radius.max(1) as f64;
    let mut pending: Vec<Disc> = (0..cfg.roots)
        .map(|k| Disc {
            center: Vector2::new(3.0 * r0 * k as f64, (rng.gen::<f64>() - 0.5) * r0),
            radius: r0,
            parent: None,
            depth: 0,
        })
        .collect();
    pending.reverse();

    // Generation order: (vertices, parent slot).
    let mut drawn: Vec<(Vec<Point>, Option<usize>)> = Vec::new();
    while let Some(disc) = pending.pop() {
        let points = star_polygon(&cfg, &disc, &mut rng);
        let slot = drawn.len();
        let safe = inscribed_radius(disc.center, &points) * 0.9 - 2.0;
        drawn.push((points, disc.parent));
        if disc.depth >= cfg.max_depth || cfg.max_children == 0 {
            continue;
        }
        let k = rng.gen_range(0..=cfg.max_children);
        for child in place_children(disc.center, safe, k, &mut rng) {
            pending.push(Disc {
                center: child.0,
                radius: child.1,
                parent: Some(slot),
                depth: disc.depth + 1,
            });
        }
    }

    // Shuffle into the input order; ids are input positions.
    let mut order: Vec<usize> = (0..drawn.len()).collect();
    order.shuffle(&mut rng);
    let mut id_of_slot = vec![PolygonId(0); drawn.len()];
    for (pos, &slot) in order.iter().enumerate() {
        id_of_slot[slot] = PolygonId(pos);
    }
    let mut polygons = Vec::with_capacity(drawn.len());
    let mut parent = Vec::with_capacity(drawn.len());
    for &slot in &order {
        let (points, parent_slot) = &drawn[slot];
        polygons.push(Polygon::new(id_of_slot[slot], points.clone())?);
        parent.push(parent_slot.map(|s| id_of_slot[s]));
    }
    Ok(Scene { polygons, parent })
}

fn star_polygon<R: Rng>(cfg: &SceneCfg, disc: &Disc, rng: &mut R) -> Vec<Point> {
    let n = cfg.vertex_count.sample(rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.2);
    let rj = cfg.radial_jitter.clamp(0.0, 0.5);
    let delta = std::f64::consts::TAU / n as f64;
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut points: Vec<Point> = (0..n)
        .map(|k| {
            let theta = phase + (k as f64 + (rng.gen::<f64>() * 2.0 - 1.0) * aj) * delta;
            let r = disc.radius * (1.0 - rng.gen::<f64>() * rj);
            let v = disc.center + Vector2::new(theta.cos(), theta.sin()) * r;
            Point::new(v.x.round() as i64, v.y.round() as i64)
        })
        .collect();
    points.dedup();
    while points.len() > 3 && points.first() == points.last() {
        points.pop();
    }
    points
}

/// Distance from `c` to the closest edge of the closed polyline `points`.
fn inscribed_radius(c: Vector2<f64>, points: &[Point]) -> f64 {
    let as_f = |p: Point| Vector2::new(p.x as f64, p.y as f64);
    (0..points.len())
        .map(|i| {
            let a = as_f(points[i]);
            let b = as_f(points[(i + 1) % points.len()]);
            let ab = b - a;
            let len2 = ab.norm_squared();
            let t = if len2 > 0.0 {
                ((c - a).dot(&ab) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            (a + ab * t - c).norm()
        })
        .fold(f64::INFINITY, f64::min)
}

/// Disjoint child discs inside the disc `(c, safe)`.
fn place_children<R: Rng>(
    c: Vector2<f64>,
    safe: f64,
    k: usize,
    rng: &mut R,
) -> Vec<(Vector2<f64>, f64)> {
    if k == 0 || safe < MIN_CHILD_RADIUS {
        return Vec::new();
    }
    if k == 1 {
        return vec![(c, safe * 0.8)];
    }
    let d = safe / 2.0;
    let rc = d * (std::f64::consts::PI / k as f64).sin() * 0.9;
    if rc < MIN_CHILD_RADIUS {
        return Vec::new();
    }
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    (0..k)
        .map(|i| {
            let theta = phase + std::f64::consts::TAU * i as f64 / k as f64;
            (c + Vector2::new(theta.cos(), theta.sin()) * d, rc)
        })
        .collect()
}
