//! Criterion benchmarks for the TSP solvers.
//!
//! Cities are placed with a fixed-seed generator so every run measures the
//! same instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_tsp::ga::{Crossover, GaConfig, GaRunner};
use u_tsp::random::create_rng;
use u_tsp::sa::{SaConfig, SaRunner};
use u_tsp::tabu::{TabuConfig, TabuRunner};
use u_tsp::Point;

fn random_cities(n: usize) -> Vec<Point> {
    let mut rng = create_rng(7);
    (0..n)
        .map(|_| Point::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect()
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_tsp");
    group.sample_size(10);

    for &n in &[20, 100, 500] {
        let cities = random_cities(n);
        let config = SaConfig::default().with_cooling_rate(0.999).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(cities, config), |b, (p, c)| {
            b.iter(|| {
                let result = SaRunner::run(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu_tsp");
    group.sample_size(10);

    for (n, iterations) in [(20usize, 200usize), (50, 100), (100, 50)] {
        let cities = random_cities(n);
        let config = TabuConfig::default()
            .with_iterations(iterations)
            .with_tabu_size(n / 2)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_i{}", n, iterations), n),
            &(cities, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_tsp");
    group.sample_size(10);

    let cities = random_cities(50);
    for crossover in [
        Crossover::OnePoint,
        Crossover::TwoPoint,
        Crossover::Uniform,
        Crossover::Ordered,
    ] {
        let config = GaConfig::default()
            .with_population_size(100)
            .with_generations(50)
            .with_crossover(crossover)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("crossover", format!("{crossover:?}")),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(&cities), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_sa, bench_tabu, bench_ga);
criterion_main!(benches);
