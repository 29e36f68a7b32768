use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qrgen::canvas::masking::{apply_best_mask, penalty_score};
use rust_qrgen::canvas::painter::{add_service_info, write_data};
use rust_qrgen::encoder::encode_data;
use rust_qrgen::{ECLevel, QrCanvas};

fn raw_canvas(input: &str, ec_level: ECLevel) -> QrCanvas {
    let data = encode_data(input, false, ec_level).unwrap();
    write_data(add_service_info(QrCanvas::new(data)).unwrap()).unwrap()
}

fn bench_penalty_score(c: &mut Criterion) {
    let canvas = raw_canvas(&"A1".repeat(600), ECLevel::M);
    c.bench_function("penalty_score_large", |b| {
        b.iter(|| penalty_score(black_box(&canvas)))
    });
}

fn bench_best_mask_sequential(c: &mut Criterion) {
    let canvas = raw_canvas(&"A1".repeat(600), ECLevel::M);
    c.bench_function("best_mask_sequential", |b| {
        b.iter(|| apply_best_mask(black_box(&canvas), false))
    });
}

fn bench_best_mask_parallel(c: &mut Criterion) {
    let canvas = raw_canvas(&"A1".repeat(600), ECLevel::M);
    c.bench_function("best_mask_parallel", |b| {
        b.iter(|| apply_best_mask(black_box(&canvas), true))
    });
}

criterion_group!(
    benches,
    bench_penalty_score,
    bench_best_mask_sequential,
    bench_best_mask_parallel
);
criterion_main!(benches);
