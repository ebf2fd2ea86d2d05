//! Benchmarks for Bowyer-Watson triangulation over generated point sets.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_planar_delaunay::{jittered_grid, random_points, Bounds, Delaunay, Point};
use std::hint::black_box;

fn bench_random_points(c: &mut Criterion) {
    let bounds = Bounds::new(Point::new(0.0, 0.0), Point::new(1000.0, 1000.0));
    let mut group = c.benchmark_group("triangulate_random");

    for count in [50, 200, 800] {
        let points = random_points(count, bounds, 42);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            let mut delaunay = Delaunay::new();
            b.iter(|| {
                let triangles = delaunay.triangulate(black_box(points)).unwrap();
                black_box(triangles.len());
            });
        });
    }

    group.finish();
}

fn bench_jittered_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate_grid");

    for side in [8, 16, 24] {
        let points = jittered_grid(side, side, 1.0, 0.3, 7);
        group.bench_with_input(BenchmarkId::from_parameter(side * side), &points, |b, points| {
            let mut delaunay = Delaunay::new();
            b.iter(|| {
                let triangles = delaunay.triangulate(black_box(points)).unwrap();
                black_box(triangles.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_points, bench_jittered_grid);
criterion_main!(benches);
