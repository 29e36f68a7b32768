use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qrgen::encoder::encode_data;
use rust_qrgen::{ECLevel, GeneratorSettings, generate};

const URL: &str = "https://github.com/rizwankce/RustQR/blob/main/README.md";

fn bench_encode_data(c: &mut Criterion) {
    c.bench_function("encode_data_url_m", |b| {
        b.iter(|| encode_data(black_box(URL), false, ECLevel::M))
    });
}

fn bench_generate_small(c: &mut Criterion) {
    let settings = GeneratorSettings::new(ECLevel::Q);
    c.bench_function("generate_hello_world_q", |b| {
        b.iter(|| generate(black_box("HELLO WORLD"), &settings))
    });
}

fn bench_generate_url(c: &mut Criterion) {
    let settings = GeneratorSettings::new(ECLevel::M);
    c.bench_function("generate_url_m", |b| {
        b.iter(|| generate(black_box(URL), &settings))
    });
}

fn bench_generate_large(c: &mut Criterion) {
    let input = "0123456789".repeat(280);
    let settings = GeneratorSettings::new(ECLevel::L);
    c.bench_function("generate_numeric_2800_l", |b| {
        b.iter(|| generate(black_box(&input), &settings))
    });
}

criterion_group!(
    benches,
    bench_encode_data,
    bench_generate_small,
    bench_generate_url,
    bench_generate_large
);
criterion_main!(benches);
