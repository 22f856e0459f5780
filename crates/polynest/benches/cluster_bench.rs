//! Criterion benchmarks for clustering and border descent on random scenes.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polynest::cluster::{collect_borders, ContainmentForest, NestCfg};
use polynest::geom::order_polygons;
use polynest::geom::rand::{draw_nested_scene, ReplayToken, SceneCfg};

fn bench_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("cluster");
    for &roots in &[1usize, 4, 16] {
        let cfg = SceneCfg {
            roots,
            max_depth: 4,
            max_children: 3,
            ..SceneCfg::default()
        };
        let scene = draw_nested_scene(cfg, ReplayToken { seed: 7, index: roots as u64 })
            .expect("scene");
        let n = scene.polygons.len();
        group.bench_with_input(BenchmarkId::new("collect_borders", n), &scene, |b, scene| {
            b.iter_batched(
                || order_polygons(scene.polygons.clone()),
                |sorted| collect_borders(&sorted, NestCfg::default()).expect("borders"),
                BatchSize::SmallInput,
            )
        });
        let sorted = order_polygons(scene.polygons.clone());
        group.bench_with_input(BenchmarkId::new("forest", n), &sorted, |b, sorted| {
            b.iter(|| ContainmentForest::build(sorted, NestCfg::default()).expect("forest"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cluster);
criterion_main!(benches);
