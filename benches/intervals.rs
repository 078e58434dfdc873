use criterion::*;

#[path = "utils/random.rs"]
mod random;
use geo_halfplanes::IntervalSet;
use rand::thread_rng;
use random::*;

const SPAN: f64 = 1024.;

fn random_set(n: usize) -> IntervalSet<f64> {
    IntervalSet::try_from_pairs(random_intervals(&mut thread_rng(), n, SPAN))
        .expect("random intervals are ordered")
}

fn interval_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("Interval set algebra");
    (6..16).for_each(|scale| {
        let n = 1 << scale;
        let a = random_set(n);
        let b = random_set(n);
        let raw = random_intervals(&mut thread_rng(), n, SPAN);

        group.bench_with_input(BenchmarkId::new("normalize", n), &(), |bch, _| {
            bch.iter(|| black_box(IntervalSet::try_from_pairs(raw.iter().copied())))
        });
        group.bench_with_input(BenchmarkId::new("union", n), &(), |bch, _| {
            bch.iter(|| black_box(a.union(&b)))
        });
        group.bench_with_input(BenchmarkId::new("intersect", n), &(), |bch, _| {
            bch.iter(|| black_box(a.intersect(&b)))
        });
        group.bench_with_input(BenchmarkId::new("subtract", n), &(), |bch, _| {
            bch.iter(|| black_box(a.subtract(&b)))
        });
    });
}

criterion_group!(intervals, interval_ops);
criterion_main!(intervals);
