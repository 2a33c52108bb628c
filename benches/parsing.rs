//! Benchmarks for chatlens parsing and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::config::DateOrder;
use chatlens::filter::{FilterConfig, apply_filters};
use chatlens::parser::ExportParser;
use chatlens::stats::ChatReport;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = (i / 1440) % 27 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        lines.push(format!(
            "{day}/1/24, {hour:02}:{minute:02} - {sender}: Message number {i} with some words in it"
        ));
    }
    lines.join("\n")
}

fn generate_export_with_noise(count: usize) -> String {
    let mut lines = Vec::with_capacity(count * 2);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        lines.push(format!(
            "15/1/24, {:02}:{:02} - {}: multi-line message {}",
            (i / 60) % 24,
            i % 60,
            sender,
            i
        ));
        if i % 3 == 0 {
            lines.push("a continuation line".to_string());
        }
        if i % 10 == 0 {
            lines.push(format!(
                "15/1/24, {:02}:{:02} - {} joined using this group's invite link",
                (i / 60) % 24,
                i % 60,
                sender
            ));
        }
    }
    lines.join("\n")
}

// =============================================================================
// Parsing benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for count in [100, 1_000, 10_000] {
        let export = generate_export(count);
        group.throughput(Throughput::Bytes(export.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &export, |b, export| {
            let parser = ExportParser::new(DateOrder::DayFirst);
            b.iter(|| parser.parse_str(black_box(export)).unwrap());
        });
    }

    group.finish();
}

fn bench_parse_with_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_noise");

    let export = generate_export_with_noise(5_000);
    group.throughput(Throughput::Bytes(export.len() as u64));
    group.bench_function("continuations_and_system", |b| {
        let parser = ExportParser::new(DateOrder::DayFirst);
        b.iter(|| parser.parse_str(black_box(&export)).unwrap());
    });

    group.finish();
}

// =============================================================================
// Aggregation benchmarks
// =============================================================================

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    for count in [1_000, 10_000] {
        let export = generate_export(count);
        let parser = ExportParser::new(DateOrder::DayFirst);
        let messages = parser.parse_str(&export).unwrap();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &messages,
            |b, messages| {
                b.iter(|| ChatReport::compute(black_box(messages), 20));
            },
        );
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let export = generate_export(10_000);
    let parser = ExportParser::new(DateOrder::DayFirst);
    let messages = parser.parse_str(&export).unwrap();

    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("by_sender", |b| {
        let config = FilterConfig::new().with_sender("Alice");
        b.iter(|| apply_filters(black_box(messages.clone()), &config));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse,
    bench_parse_with_noise,
    bench_report,
    bench_filter
);
criterion_main!(benches);
