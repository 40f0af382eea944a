//! Benchmarks for the distance metric family
//!
//! Run with: cargo bench --bench distance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

extern crate pkmeans;
use pkmeans::distance::{distance, CHEBYSHEV, EUCLIDEAN, MANHATTAN};
use pkmeans::Point;

fn make_point(dimension: usize, offset: f64) -> Point {
  Point::new((0..dimension).map(|i| i as f64 * 0.5 + offset).collect())
}

fn bench_selectors(c: &mut Criterion) {
  let mut group = c.benchmark_group("distance");

  for dimension in [2usize, 16, 128].iter() {
    let a = make_point(*dimension, 0.0);
    let b = make_point(*dimension, 1.25);

    for (name, selector) in [
      ("chebyshev", CHEBYSHEV),
      ("manhattan", MANHATTAN),
      ("euclidean", EUCLIDEAN),
      ("minkowski3", 3),
    ] {
      group.bench_with_input(BenchmarkId::new(name, dimension), dimension, |bencher, _| {
        bencher.iter(|| black_box(distance(&a, &b, selector).unwrap()));
      });
    }
  }

  group.finish();
}

criterion_group!(benches, bench_selectors);
criterion_main!(benches);
