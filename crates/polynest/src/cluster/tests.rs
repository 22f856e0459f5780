//! Clustering, descent, and forest tests on hand-built and random scenes.

use super::*;
use crate::geom::rand::{draw_nested_scene, ReplayToken, SceneCfg, VertexCount};
use crate::geom::{order_polygons, Polygon, PolygonId, RayMode};
use crate::NestError;
use proptest::prelude::*;

fn square(id: usize, lo: i64, hi: i64) -> Polygon {
    Polygon::from_coords(id, &[(lo, lo), (hi, lo), (hi, hi), (lo, hi)]).unwrap()
}

fn rect(id: usize, x0: i64, y0: i64, x1: i64, y1: i64) -> Polygon {
    Polygon::from_coords(id, &[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]).unwrap()
}

fn ids(records: &[BorderRecord]) -> Vec<Vec<usize>> {
    records
        .iter()
        .map(|r| r.ids().map(|id| id.0).collect())
        .collect()
}

#[test]
fn lone_polygon_is_its_own_cluster() {
    let polys = vec![square(0, 0, 10)];
    let clusters = build_clusters(&polys, NestCfg::default()).unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].outer.id(), PolygonId(0));
    assert!(clusters[0].inner.is_empty());
}

#[test]
fn contained_polygon_joins_outer() {
    let polys = vec![square(0, 0, 10), square(1, 2, 8)];
    let clusters = build_clusters(&polys, NestCfg::default()).unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].outer.id(), PolygonId(0));
    let inner: Vec<PolygonId> = clusters[0].inner.iter().map(|p| p.id()).collect();
    assert_eq!(inner, vec![PolygonId(1)]);
}

#[test]
fn first_matching_cluster_wins() {
    // Two disjoint outers; the probe of 2 lies in the second only.
    let polys = vec![
        square(0, 0, 10),
        rect(1, 1, 20, 30, 30),
        rect(2, 5, 22, 8, 25),
    ];
    let clusters = build_clusters(&polys, NestCfg::default()).unwrap();
    assert_eq!(clusters.len(), 2);
    assert!(clusters[0].inner.is_empty());
    assert_eq!(clusters[1].inner[0].id(), PolygonId(2));
}

#[test]
fn doubly_nested_triple() {
    // outer ⊃ middle ⊃ inner: the middle is a hole of the outer, the inner
    // starts a new border.
    let polys = vec![square(0, 0, 10), square(1, 2, 8), square(2, 4, 6)];
    let records = collect_borders(&polys, NestCfg::default()).unwrap();
    assert_eq!(ids(&records), vec![vec![0, 1], vec![2]]);
    assert!(!records[0].inner.contains(&PolygonId(2)));
    assert_eq!(records[0].to_string(), "0 1");
}

#[test]
fn solve_sorts_shuffled_input() {
    let polys = vec![square(0, 4, 6), square(1, 0, 10), square(2, 2, 8)];
    let records = solve(polys, NestCfg::default()).unwrap();
    assert_eq!(ids(&records), vec![vec![1, 2], vec![0]]);
}

#[test]
fn holes_with_islands_depth_first() {
    // Two roots; the left one has two holes, the first hole holds an island,
    // and that island holds a hole of its own.
    let polys = vec![
        rect(3, 0, 0, 100, 50),
        rect(5, 5, 5, 45, 45),
        rect(1, 10, 10, 40, 40),
        rect(6, 15, 15, 20, 20),
        rect(0, 55, 5, 95, 45),
        rect(2, 200, 0, 300, 50),
        rect(4, 210, 10, 220, 20),
    ];
    let polys = order_polygons(polys);
    let records = collect_borders(&polys, NestCfg::default()).unwrap();
    assert_eq!(
        ids(&records),
        vec![vec![3, 5, 0], vec![1, 6], vec![2, 4]]
    );
}

#[test]
fn directed_ray_gives_same_records() {
    let polys = vec![square(0, 0, 10), square(1, 2, 8), square(2, 4, 6), square(3, 20, 30)];
    let cfg = NestCfg {
        ray: RayMode::directed_default(),
        ..NestCfg::default()
    };
    assert_eq!(
        collect_borders(&polys, cfg).unwrap(),
        collect_borders(&polys, NestCfg::default()).unwrap()
    );
}

#[test]
fn zero_ray_direction_is_rejected() {
    let polys = vec![square(0, 0, 10)];
    let cfg = NestCfg {
        ray: RayMode::Directed { dx: 0, dy: 0 },
        ..NestCfg::default()
    };
    assert!(matches!(
        collect_borders(&polys, cfg),
        Err(NestError::InvalidInput { .. })
    ));
}

#[test]
fn partial_overlap_first_match_or_rejected() {
    // The probe (5,5) of polygon 1 lies in polygon 0, but the rest sticks out.
    let polys = vec![square(0, 0, 10), square(1, 5, 15)];
    let records = collect_borders(&polys, NestCfg::default()).unwrap();
    assert_eq!(ids(&records), vec![vec![0, 1]]);

    let strict = NestCfg {
        verify_nesting: true,
        ..NestCfg::default()
    };
    assert_eq!(
        collect_borders(&polys, strict),
        Err(NestError::AmbiguousTopology {
            outer: PolygonId(0),
            inner: PolygonId(1),
        })
    );
}

#[test]
fn empty_input_has_no_records() {
    assert!(collect_borders(&[], NestCfg::default()).unwrap().is_empty());
    let forest = ContainmentForest::build(&[], NestCfg::default()).unwrap();
    assert!(forest.is_empty());
    assert_eq!(forest.height(), 0);
}

#[test]
fn deep_nesting_uses_no_native_recursion() {
    let n = 1200;
    let polys: Vec<Polygon> = (0..n)
        .map(|k| square(k, k as i64, 2 * n as i64 - k as i64))
        .collect();
    let records = collect_borders(&polys, NestCfg::default()).unwrap();
    assert_eq!(records.len(), n / 2);
    assert_eq!(ids(&records[..2]), vec![vec![0, 1], vec![2, 3]]);
    let forest = ContainmentForest::build(&polys, NestCfg::default()).unwrap();
    assert_eq!(forest.height(), n);
    assert_eq!(forest.parent(PolygonId(n - 1)), Some(PolygonId(n - 2)));
}

#[test]
fn forest_rejects_sparse_ids() {
    let polys = vec![square(0, 0, 10), square(5, 2, 8)];
    assert!(matches!(
        ContainmentForest::build(&polys, NestCfg::default()),
        Err(NestError::InvalidInput { .. })
    ));
}

#[test]
fn unsorted_input_is_rejected() {
    // 1 has the smaller leftmost x but comes second.
    let polys = vec![square(0, 2, 8), square(1, 0, 10)];
    assert!(matches!(
        collect_borders(&polys, NestCfg::default()),
        Err(NestError::InvalidInput { .. })
    ));
    assert!(matches!(
        ContainmentForest::build(&polys, NestCfg::default()),
        Err(NestError::InvalidInput { .. })
    ));
    assert_eq!(ids(&solve(polys, NestCfg::default()).unwrap()), vec![vec![1, 0]]);
}

#[test]
fn forest_accessors() {
    let polys = order_polygons(vec![
        square(2, 4, 6),
        square(0, 0, 10),
        square(1, 2, 8),
        square(3, 20, 30),
    ]);
    let forest = ContainmentForest::build(&polys, NestCfg::default()).unwrap();
    assert_eq!(forest.roots(), &[PolygonId(0), PolygonId(3)]);
    assert_eq!(forest.children(PolygonId(0)), Some(&[PolygonId(1)][..]));
    assert_eq!(forest.parent(PolygonId(2)), Some(PolygonId(1)));
    assert_eq!(forest.depth(PolygonId(2)), Some(2));
    assert_eq!(forest.depth(PolygonId(0)), Some(0));
    assert_eq!(forest.height(), 3);
    // ids past the end are absent, not a panic
    assert_eq!(forest.parent(PolygonId(4)), None);
    assert_eq!(forest.children(PolygonId(4)), None);
    assert_eq!(forest.depth(PolygonId(99)), None);
    assert_eq!(ids(&forest.borders()), vec![vec![0, 1], vec![2], vec![3]]);
}

fn scene_cfg() -> SceneCfg {
    SceneCfg {
        roots: 3,
        max_depth: 4,
        max_children: 3,
        vertex_count: VertexCount::Uniform { min: 3, max: 9 },
        ..SceneCfg::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn forest_matches_generated_nesting(seed in any::<u64>(), index in 0u64..4) {
        let scene = draw_nested_scene(scene_cfg(), ReplayToken { seed, index }).unwrap();
        let sorted = order_polygons(scene.polygons.clone());
        let forest = ContainmentForest::build(&sorted, NestCfg::default()).unwrap();
        prop_assert_eq!(forest.parents(), &scene.parent[..]);
        for id in 0..scene.polygons.len() {
            let mut kids = forest.children(PolygonId(id)).unwrap().to_vec();
            kids.sort();
            prop_assert_eq!(kids, scene.children(PolygonId(id)));
        }
    }

    #[test]
    fn borders_cover_every_polygon_once(seed in any::<u64>()) {
        let scene = draw_nested_scene(scene_cfg(), ReplayToken { seed, index: 9 }).unwrap();
        let n = scene.polygons.len();
        let sorted = order_polygons(scene.polygons);
        let records = collect_borders(&sorted, NestCfg::default()).unwrap();
        let mut all: Vec<usize> = records.iter().flat_map(|r| r.ids().map(|id| id.0)).collect();
        all.sort_unstable();
        prop_assert_eq!(all, (0..n).collect::<Vec<_>>());

        let forest = ContainmentForest::build(&sorted, NestCfg::default()).unwrap();
        prop_assert_eq!(forest.borders(), records);
    }

    #[test]
    fn verification_accepts_proper_nesting(seed in any::<u64>()) {
        let scene = draw_nested_scene(scene_cfg(), ReplayToken { seed, index: 3 }).unwrap();
        let sorted = order_polygons(scene.polygons);
        let strict = NestCfg { verify_nesting: true, ..NestCfg::default() };
        prop_assert_eq!(
            collect_borders(&sorted, strict).unwrap(),
            collect_borders(&sorted, NestCfg::default()).unwrap()
        );
    }
}
