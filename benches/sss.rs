use num_bigint::BigUint;
use primeshare::recovery::field::PrimeField;
use primeshare::recovery::shamirsecretsharing::{generate_shares, reconstruct_secret};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

pub fn bench_generate(c: &mut Criterion) {
    let field = PrimeField::default();
    let secret = BigUint::from(12345678901234567890u64);
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    c.bench_function("generate 3-of-5 secp256k1", |b| {
        b.iter(|| generate_shares(black_box(&secret), 3, 5, &field, &mut rng))
    });

    c.bench_function("generate 10-of-20 secp256k1", |b| {
        b.iter(|| generate_shares(black_box(&secret), 10, 20, &field, &mut rng))
    });
}

pub fn bench_reconstruct(c: &mut Criterion) {
    let field = PrimeField::default();
    let secret = BigUint::from(12345678901234567890u64);
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    let small = generate_shares(&secret, 3, 5, &field, &mut rng).unwrap();
    let large = generate_shares(&secret, 10, 20, &field, &mut rng).unwrap();

    c.bench_function("reconstruct 3 shares secp256k1", |b| {
        b.iter(|| reconstruct_secret(black_box(&small[..3]), &field))
    });

    c.bench_function("reconstruct 10 shares secp256k1", |b| {
        b.iter(|| reconstruct_secret(black_box(&large[..10]), &field))
    });
}

criterion_group!(benches, bench_generate, bench_reconstruct);
criterion_main!(benches);
