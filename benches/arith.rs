use criterion::{black_box, criterion_group, criterion_main, Criterion};
use posit16::Posit16;

pub fn bench_from(c: &mut Criterion) {
    c.bench_function("From<i32>::from(0)", |b| b.iter(|| Posit16::from(black_box(0i32))));
    c.bench_function("From<i32>::from(i32::MAX)", |b| {
        b.iter(|| Posit16::from(black_box(i32::MAX)))
    });
    c.bench_function("From<f64>::from(1.5)", |b| b.iter(|| Posit16::from(black_box(1.5f64))));
}

pub fn bench_add(c: &mut Criterion) {
    let one = Posit16::from(1i32);
    let two = Posit16::from(2i32);
    c.bench_function("Add::add(1, 1)", |b| b.iter(|| black_box(one) + black_box(one)));
    c.bench_function("Add::add(1, -2)", |b| b.iter(|| black_box(one) + black_box(-two)));
}

pub fn bench_mul(c: &mut Criterion) {
    let two = Posit16::from(2i32);
    c.bench_function("Mul::mul(2, 2)", |b| b.iter(|| black_box(two) * black_box(two)));
}

pub fn bench_div(c: &mut Criterion) {
    let one = Posit16::from(1i32);
    let two = Posit16::from(2i32);
    c.bench_function("Div::div(1, 2)", |b| b.iter(|| black_box(one) / black_box(two)));
}

criterion_group!(benches, bench_from, bench_add, bench_mul, bench_div);
criterion_main!(benches);
