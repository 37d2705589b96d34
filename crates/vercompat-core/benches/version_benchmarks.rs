//! Benchmarks for version resolution, parsing and compatibility floors
//!
//! Copyright (c) 2025 Vercompat Team
//! Licensed under the Apache-2.0 license

use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vercompat_core::*;

fn bench_from_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_id");
    for (name, id) in [
        ("declared", V_6_5_2.id()),
        ("undeclared_patch", 6_050_599),
        ("older_than_registry", 5_060_099),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &id, |b, &id| {
            b.iter(|| Version::from_id(black_box(id)))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for input in ["7.0.2", "6.0.0-beta1", "1.0.0.RC1", "2.0.0-SNAPSHOT"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| Version::parse(black_box(input)))
        });
    }
    group.finish();
}

fn bench_display(c: &mut Criterion) {
    c.bench_function("display_prerelease", |b| {
        b.iter(|| black_box(V_6_0_0_RC2).to_string())
    });
}

fn bench_floors(c: &mut Criterion) {
    let resolver = CompatibilityResolver::global();
    let mut group = c.benchmark_group("floors");
    group.bench_function("wire_override", |b| {
        b.iter(|| resolver.minimum_compatibility_version(black_box(&V_6_4_0)))
    });
    group.bench_function("wire_series_scan", |b| {
        b.iter(|| resolver.minimum_compatibility_version(black_box(&V_7_0_2)))
    });
    group.bench_function("index", |b| {
        b.iter(|| resolver.minimum_index_compatibility_version(black_box(&V_7_0_2)))
    });
    group.bench_function("is_compatible", |b| {
        b.iter(|| resolver.is_compatible(black_box(&V_7_0_1), black_box(&V_6_7_3)))
    });
    group.finish();
}

fn bench_wire(c: &mut Criterion) {
    c.bench_function("wire_round_trip", |b| {
        b.iter(|| {
            let mut buf = BytesMut::with_capacity(8);
            write_version(black_box(&CURRENT), &mut buf);
            read_version(&mut buf.freeze())
        })
    });
}

criterion_group!(
    benches,
    bench_from_id,
    bench_parse,
    bench_display,
    bench_floors,
    bench_wire
);
criterion_main!(benches);
