// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//!
//! Benchmark: special lookup cost by hierarchy depth, with and without the
//! slot cache.

#![allow(clippy::uninlined_format_args)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use typewalk::object::{Object, TypeBuilder};
use typewalk::{LookupConfig, LookupEngine, TypeRef, Value};

// ============================================================================
// Fixtures
// ============================================================================

/// Linear chain `L0 <- L1 <- ... <- L{depth}` with `target` defined on `L0`.
fn chain(depth: usize) -> TypeRef {
    let mut ty = TypeBuilder::new("L0")
        .attr("target", Value::Int(1))
        .method("__enter__", |args| Ok(args[0].clone()))
        .build()
        .expect("root type");
    for level in 1..=depth {
        ty = TypeBuilder::new(format!("L{}", level))
            .base(&ty)
            .build()
            .expect("chain type");
    }
    ty
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_depth");
    let name = Value::str("target");

    for depth in [0usize, 4, 16, 64] {
        let inst = Value::Object(Object::new(&chain(depth)));
        let uncached = LookupEngine::new(LookupConfig::uncached());
        let cached = LookupEngine::new(LookupConfig::uncached().with_cache(true));

        group.bench_with_input(BenchmarkId::new("uncached", depth), &depth, |b, _| {
            b.iter(|| black_box(uncached.lookup_special_method(&inst, &name)))
        });
        group.bench_with_input(BenchmarkId::new("cached", depth), &depth, |b, _| {
            b.iter(|| black_box(cached.lookup_special_method(&inst, &name)))
        });
    }
    group.finish();
}

fn bench_binding(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_binding");
    let inst = Value::Object(Object::new(&chain(4)));
    let engine = LookupEngine::new(LookupConfig::uncached().with_cache(true));

    let plain = Value::str("target");
    let method = Value::str("__enter__");
    let missing = Value::str("__missing__");

    group.bench_function("plain", |b| {
        b.iter(|| black_box(engine.lookup_special_method(&inst, &plain)))
    });
    group.bench_function("bound_method", |b| {
        b.iter(|| black_box(engine.lookup_special_method(&inst, &method)))
    });
    group.bench_function("missing", |b| {
        b.iter(|| black_box(engine.lookup_special_method(&inst, &missing)))
    });
    group.finish();
}

criterion_group!(benches, bench_depth, bench_binding);
criterion_main!(benches);
