use criterion::{Criterion, criterion_group, criterion_main};
use prs::prelude::*;
use std::hint::black_box;

fn long_list(len: usize) -> String {
    vec!["1"; len].join(", ")
}

fn bench_sum(c: &mut Criterion) {
    let sum = separated_by(integer(), token(","), 0u64, |a, b| a + b);
    let text = long_list(10_000);
    c.bench_function("sum a list of 10000 integers", |b| {
        b.iter(|| sum.parse_complete(black_box(&text)))
    });
}

fn bench_arith(c: &mut Criterion) {
    let expr = prs::arith::expr();
    let text = "1 * (2 + 3 * (2 * 5 * (3 + 5) * (5 + 2))) * (1 + (1))";
    c.bench_function("nested arithmetic", |b| {
        b.iter(|| expr.parse_complete(black_box(text)))
    });
}

criterion_group!(benches, bench_sum, bench_arith);
criterion_main!(benches);
