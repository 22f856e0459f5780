//! Criterion benchmarks for the containment predicate.
//! Focus sizes: vertex counts in {4, 16, 64, 256}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polynest::geom::rand::{draw_nested_scene, ReplayToken, SceneCfg, VertexCount};
use polynest::geom::{is_inside, is_inside_directed, Point, Polygon};

fn root_polygon(vertices: usize, seed: u64) -> Polygon {
    let cfg = SceneCfg {
        roots: 1,
        max_depth: 0,
        vertex_count: VertexCount::Fixed(vertices),
        ..SceneCfg::default()
    };
    let scene = draw_nested_scene(cfg, ReplayToken { seed, index: 0 }).expect("scene");
    scene.polygons.into_iter().next().expect("one root")
}

fn bench_pip(c: &mut Criterion) {
    let mut group = c.benchmark_group("pip");
    let queries: Vec<Point> = (0..64)
        .map(|k| Point::new(-1_200_000 + k * 37_501, (k % 7 - 3) * 150_000))
        .collect();
    for &m in &[4usize, 16, 64, 256] {
        let poly = root_polygon(m, 41);
        group.bench_with_input(BenchmarkId::new("horizontal", m), &poly, |b, poly| {
            b.iter(|| queries.iter().filter(|&&q| is_inside(poly, q)).count())
        });
        group.bench_with_input(BenchmarkId::new("directed", m), &poly, |b, poly| {
            let dir = Point::new(7919, 7907);
            b.iter(|| {
                queries
                    .iter()
                    .filter(|&&q| is_inside_directed(poly, q, dir).unwrap_or(false))
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pip);
criterion_main!(benches);
