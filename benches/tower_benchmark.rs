// ============================================================================
// Numeric Tower Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. BigInteger - multiplication, division, parsing and rendering by size
// 2. Rational - cross-multiplied arithmetic with reduction
// 3. Dispatch - promotion cost of mixed-rank operations
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_tower::prelude::*;
use std::hint::black_box;

/// Decimal string of `digits` digits cycling through 1..9
fn digit_string(digits: usize) -> String {
    (0..digits)
        .map(|i| char::from(b'1' + (i % 9) as u8))
        .collect()
}

fn big(digits: usize) -> BigInteger {
    digit_string(digits).parse().expect("valid digits")
}

// ============================================================================
// BigInteger Benchmarks
// ============================================================================

fn benchmark_big_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_multiplication");

    for digits in [10, 100, 1000].iter() {
        let a = big(*digits);
        let b = big(*digits + 7);

        group.bench_with_input(BenchmarkId::from_parameter(digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.times(b)))
        });
    }

    group.finish();
}

fn benchmark_big_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_divrem");

    for digits in [20, 200, 2000].iter() {
        let a = big(*digits);
        let b = big(*digits / 2);

        group.bench_with_input(BenchmarkId::from_parameter(digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.divrem(b)))
        });
    }

    group.finish();
}

fn benchmark_big_parse_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_text");

    for digits in [50, 500].iter() {
        let text = digit_string(*digits);
        let value = big(*digits);

        group.bench_with_input(BenchmarkId::new("parse", digits), &text, |bench, text| {
            bench.iter(|| black_box(text.parse::<BigInteger>()))
        });

        group.bench_with_input(BenchmarkId::new("to_string", digits), &value, |bench, value| {
            bench.iter(|| black_box(value.to_string()))
        });
    }

    group.finish();
}

// ============================================================================
// Rational Benchmarks
// ============================================================================

fn benchmark_rational_sum(c: &mut Criterion) {
    // Harmonic partial sum H(n), reduced after every step
    c.bench_function("rational_harmonic_sum_50", |bench| {
        bench.iter(|| {
            let mut acc = Rational::from_integer(BigInteger::zero());
            for k in 1..=50i64 {
                let term = Rational::new(1, k).expect("non-zero denominator");
                acc = acc.plus(&term).expect("non-zero denominator").reduce();
            }
            black_box(acc)
        })
    });
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn benchmark_mixed_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_plus");

    let pairs = [
        ("integer_integer", Value::from(12345), Value::from(678)),
        ("integer_number", Value::from(12345), Value::from(0.5)),
        (
            "rational_complex",
            Value::Rational(Rational::new(1, 3).expect("non-zero denominator")),
            Value::Complex(Complex::new(1.0, 2.0)),
        ),
    ];

    for (name, a, b) in pairs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(dispatch::plus(a, b)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_big_multiplication,
    benchmark_big_division,
    benchmark_big_parse_and_render,
    benchmark_rational_sum,
    benchmark_mixed_dispatch,
);

criterion_main!(benches);
