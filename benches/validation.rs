use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json_primitives::{DoubleValue, StringValue, Value};

fn sample_text(len: usize) -> String {
    "héllo wörld 日本 🦀 ".chars().cycle().take(len).collect()
}

fn benchmark_string_from_utf8(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_from_utf8");

    for size in [16, 256, 4096, 65536].iter() {
        let bytes = sample_text(*size).into_bytes();
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| StringValue::from_utf8(black_box(bytes.clone())))
        });
    }

    group.finish();
}

fn benchmark_string_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_set");

    for size in [16, 256, 4096].iter() {
        let valid = sample_text(*size).into_bytes();
        let mut invalid = valid.clone();
        invalid.push(0xff);

        group.bench_with_input(BenchmarkId::new("valid", size), &valid, |b, bytes| {
            let mut s = StringValue::new();
            b.iter(|| s.set(black_box(bytes)))
        });
        group.bench_with_input(BenchmarkId::new("invalid", size), &invalid, |b, bytes| {
            let mut s = StringValue::new();
            b.iter(|| s.set(black_box(bytes)))
        });
    }

    group.finish();
}

fn benchmark_double_set(c: &mut Criterion) {
    c.bench_function("double_set", |b| {
        let mut d = DoubleValue::new();
        b.iter(|| d.set(black_box(1.5e10)))
    });
}

fn benchmark_clone(c: &mut Criterion) {
    let values = vec![
        Value::from(sample_text(256)),
        Value::from(42),
        Value::from(i64::MAX),
        Value::from(true),
        Value::default(),
    ];

    c.bench_function("clone_mixed_values", |b| {
        b.iter(|| black_box(&values).clone())
    });
}

criterion_group!(
    benches,
    benchmark_string_from_utf8,
    benchmark_string_set,
    benchmark_double_set,
    benchmark_clone
);
criterion_main!(benches);
