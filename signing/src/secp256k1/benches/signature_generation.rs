use criterion::{criterion_group, BatchSize, Criterion};
use rand::{thread_rng, Rng};
use sigil_signing::{Context, Secp256k1};
use std::hint::black_box;

fn benchmark_signature_generation(c: &mut Criterion) {
    let context = Secp256k1::new();
    let mut msg = [0u8; 32];
    thread_rng().fill(&mut msg);
    c.bench_function(&format!("{}/msg_len={}", module_path!(), msg.len()), |b| {
        b.iter_batched(
            || context.random_private_key(&mut thread_rng()),
            |private_key| {
                black_box(context.sign(&msg, &private_key).unwrap());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, benchmark_signature_generation);
