use criterion::{criterion_group, Criterion};
use rand::thread_rng;
use sigil_signing::{Context, Secp256k1};
use std::hint::black_box;

fn benchmark_key_generation(c: &mut Criterion) {
    let context = Secp256k1::new();
    c.bench_function(module_path!(), |b| {
        b.iter(|| {
            black_box(context.random_private_key(&mut thread_rng()));
        });
    });
}

criterion_group!(benches, benchmark_key_generation);
