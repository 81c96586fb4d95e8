use criterion::{criterion_group, criterion_main, Criterion};
use litcloak::encoder;
use litcloak::ObfuscatedStr;
use std::hint::black_box;

static SHORT: ObfuscatedStr<21> =
    ObfuscatedStr::new(0x5e, encoder::encode::<21>(b"/api/v2/session/token", 0x5e));

static LONG: ObfuscatedStr<256> = ObfuscatedStr::new(0xc3, encoder::encode::<256>(&[0x41; 256], 0xc3));

fn benchmark_decrypt(c: &mut Criterion) {
    c.bench_function("decrypt_short_literal", |b| {
        b.iter(|| black_box(SHORT.decrypt()))
    });

    c.bench_function("decrypt_256_bytes", |b| {
        b.iter(|| black_box(LONG.decrypt()))
    });

    c.bench_function("apply_transform_4k", |b| {
        let data = vec![0u8; 4096];
        b.iter(|| black_box(encoder::apply(black_box(&data), 0x77)))
    });
}

criterion_group!(benches, benchmark_decrypt);
criterion_main!(benches);
