use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use merkle::{build_proofs, hash_items, hash_items_iterative};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use sha2::Sha256;

const TOTAL: usize = 100;

fn items() -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(0);

    (0..TOTAL)
        .map(|_| {
            let mut item = vec![0; 32];
            rng.fill_bytes(&mut item);
            item
        })
        .collect()
}

fn hash_alternatives(c: &mut Criterion) {
    let items = items();
    let mut group = c.benchmark_group("hash_alternatives");

    group.bench_function("recursive", |b| b.iter(|| hash_items::<Sha256>(black_box(&items))));
    group.bench_function("iterative", |b| b.iter(|| hash_items_iterative::<Sha256>(black_box(&items))));
    group.finish();
}

fn proofs(c: &mut Criterion) {
    let items = items();
    let (root_hash, proofs) = build_proofs::<Sha256>(&items);

    c.bench_function("build_proofs", |b| b.iter(|| build_proofs::<Sha256>(black_box(&items))));
    c.bench_function("verify", |b| {
        b.iter(|| proofs.iter().zip(&items).all(|(proof, item)| proof.verify(black_box(&root_hash), item).is_ok()))
    });
}

criterion_group!(benches, hash_alternatives, proofs);
criterion_main!(benches);
