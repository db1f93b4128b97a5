use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pg_format::{format, quote_ident, quote_literal, values, Value};

fn benchmark_quote_ident(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote_ident");

    group.bench_function("safe", |b| b.iter(|| quote_ident(black_box("user_events"))));

    group.bench_function("needs_quoting", |b| {
        b.iter(|| quote_ident(black_box("User Events/2024")))
    });

    group.bench_function("reserved", |b| b.iter(|| quote_ident(black_box("select"))));

    group.finish();
}

fn benchmark_quote_literal(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote_literal");

    let plain = "a perfectly ordinary description";
    let quoted = "it's got quotes, it's got 'em everywhere";
    let backslashes = "C:\\Users\\tobi\\Documents\\report.txt";

    group.bench_function("plain", |b| b.iter(|| quote_literal(black_box(plain))));

    group.bench_function("quotes", |b| b.iter(|| quote_literal(black_box(quoted))));

    group.bench_function("backslashes", |b| {
        b.iter(|| quote_literal(black_box(backslashes)))
    });

    group.finish();
}

fn benchmark_format_template(c: &mut Criterion) {
    let args = vec![
        Value::from("user events"),
        Value::from("O'Reilly"),
        Value::from(42),
    ];

    c.bench_function("format_mixed_template", |b| {
        b.iter(|| {
            format(
                black_box("select * from %I where author = %L limit %s"),
                black_box(&args),
            )
        })
    });

    let plain_args: Vec<Value> = Vec::new();
    c.bench_function("format_no_placeholders", |b| {
        b.iter(|| {
            format(
                black_box("select id, name, created_at from user_events"),
                black_box(&plain_args),
            )
        })
    });
}

fn benchmark_grouped_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouped_rows");

    for size in [10, 100, 1000].iter() {
        let rows = Value::Array(
            (0..*size)
                .map(|i| values![i, std::format!("name {i}"), i % 2 == 0])
                .collect(),
        );

        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| quote_literal(black_box(rows)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_quote_ident,
    benchmark_quote_literal,
    benchmark_format_template,
    benchmark_grouped_rows
);
criterion_main!(benches);
