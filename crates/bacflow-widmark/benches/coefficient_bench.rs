//! 係数モデルのベンチマーク（縮減版）
//!
//! 目的: 各モデルの評価コストと名前解決のオーバーヘッドを比較する。

use std::time::Duration;

use bacflow_widmark::{Model, Person, Sex, body_factor, estimate};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(3))
}

fn random_inputs(n: usize) -> Vec<(f64, f64, f64)> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..n)
        .map(|_| {
            (
                rng.gen_range(1.45..2.05),
                rng.gen_range(45.0..130.0),
                rng.gen_range(18.0..80.0),
            )
        })
        .collect()
}

fn bench_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_call");
    let inputs = random_inputs(1000);

    for model in Model::ALL {
        group.bench_function(model.name(), |b| {
            b.iter(|| {
                inputs
                    .iter()
                    .map(|&(h, w, g)| model.call(Sex::Male, black_box(h), w, g).unwrap_or(0.0))
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let person = Person::new(30.0, 1.75, 70.0, Sex::Male);

    group.bench_function("estimate_by_name", |b| {
        b.iter(|| estimate(black_box("Average"), black_box("M"), 1.75, 70.0, 30.0))
    });

    group.bench_function("body_factor", |b| {
        b.iter(|| body_factor(black_box(Model::Average), &person))
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_models, bench_dispatch,
}

criterion_main!(benches);
