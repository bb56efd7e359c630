use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kd_index::kdtree::metric::Euclidean;
use kd_index::kdtree::KdTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_points(n: usize, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| [rng.gen_range(-180.0..180.0), rng.gen_range(-90.0..90.0)])
        .collect()
}

fn scan_nearest(points: &[[f64; 2]], target: &[f64; 2]) -> [f64; 2] {
    let mut best = points[0];
    let mut best_dist = f64::INFINITY;
    for p in points {
        let dx = target[0] - p[0];
        let dy = target[1] - p[1];
        let dist = dx * dx + dy * dy;
        if dist < best_dist {
            best_dist = dist;
            best = *p;
        }
    }
    best
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let targets = generate_points(256, 7);

    for n in [1_000, 10_000, 100_000] {
        let points = generate_points(n, 42);
        let tree = KdTree::new(points.clone(), Euclidean);

        group.bench_with_input(BenchmarkId::new("kdtree", n), &n, |b, _| {
            let mut i = 0;
            b.iter(|| {
                let target = &targets[i % targets.len()];
                i += 1;
                tree.nearest(target).unwrap()
            });
        });

        group.bench_with_input(BenchmarkId::new("linear_scan", n), &n, |b, _| {
            let mut i = 0;
            b.iter(|| {
                let target = &targets[i % targets.len()];
                i += 1;
                scan_nearest(&points, target)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nearest);
criterion_main!(benches);
