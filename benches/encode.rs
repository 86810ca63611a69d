use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_qr_gen::{encode_binary, encode_text, ECLevel};

fn bench_encode_short_alphanumeric(c: &mut Criterion) {
    c.bench_function("encode_short_alphanumeric", |b| {
        b.iter(|| encode_text(black_box("HELLO WORLD"), ECLevel::Q).unwrap())
    });
}

fn bench_encode_url(c: &mut Criterion) {
    let url = "https://github.com/rust-qr-gen/rust-qr-gen";
    c.bench_function("encode_url_byte_mode", |b| {
        b.iter(|| encode_text(black_box(url), ECLevel::H).unwrap())
    });
}

fn bench_encode_long_numeric(c: &mut Criterion) {
    let digits: String = std::iter::repeat("0123456789").take(50).collect();
    c.bench_function("encode_numeric_500_digits", |b| {
        b.iter(|| encode_text(black_box(digits.as_str()), ECLevel::M).unwrap())
    });
}

fn bench_encode_large_binary(c: &mut Criterion) {
    // Forces a high version: mask scoring dominates at this size
    let payload: Vec<u8> = (0..2000u32).map(|i| (i % 251) as u8).collect();
    c.bench_function("encode_binary_2000_bytes", |b| {
        b.iter(|| encode_binary(black_box(&payload), ECLevel::L).unwrap())
    });
}

criterion_group!(
    benches,
    bench_encode_short_alphanumeric,
    bench_encode_url,
    bench_encode_long_numeric,
    bench_encode_large_binary
);
criterion_main!(benches);
