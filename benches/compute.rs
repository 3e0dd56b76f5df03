#[macro_use]
extern crate criterion;
extern crate juliaset;
extern crate num;

use criterion::Criterion;
use juliaset::Config;
use num::Complex;

fn parallel(c: &mut Criterion) {
    let mut config = Config::default();
    config.dim = 400;
    let renderer = config.escape_time_grid().unwrap();
    c.bench_function("parallel 400x400", move |b| {
        b.iter(|| renderer.compute(Complex::new(-0.7, 0.27015)).unwrap())
    });
}

fn single(c: &mut Criterion) {
    let mut config = Config::default();
    config.dim = 400;
    let renderer = config.escape_time_grid().unwrap();
    c.bench_function("single 400x400", move |b| {
        b.iter(|| renderer.compute_single(Complex::new(-0.7, 0.27015)).unwrap())
    });
}

criterion_group!(benches, parallel, single);
criterion_main!(benches);
