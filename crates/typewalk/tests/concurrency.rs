// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concurrent lookups against shared types.
//!
//! Types are frozen at build time, so any number of threads may resolve
//! attributes at once. These tests hammer a cached and an uncached engine and
//! check every thread sees the same resolution.

use std::sync::{Arc, Barrier};
use std::thread;
use typewalk::object::{Object, TypeBuilder};
use typewalk::{LookupConfig, LookupEngine, TypeRef, Value};

const THREADS: usize = 8;
const ROUNDS: usize = 500;

fn hierarchy() -> (TypeRef, TypeRef) {
    let t = TypeBuilder::new("T")
        .attr("x", Value::Int(7))
        .method("__enter__", |args| Ok(args[0].clone()))
        .build()
        .unwrap();
    let u = TypeBuilder::new("U").base(&t).attr("x", Value::Int(9)).build().unwrap();
    (t, u)
}

fn run_workers(engine: Arc<LookupEngine>) {
    let (t, u) = hierarchy();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            let ty = if i % 2 == 0 { Arc::clone(&t) } else { Arc::clone(&u) };
            thread::spawn(move || {
                let inst = Value::Object(Object::new(&ty));
                let expected_x = if i % 2 == 0 { 7 } else { 9 };
                barrier.wait();

                for _ in 0..ROUNDS {
                    let x = engine
                        .lookup_special_method(&inst, &Value::str("x"))
                        .unwrap();
                    assert_eq!(x, Value::Int(expected_x));

                    let enter = engine
                        .lookup_special_method(&inst, &Value::str("__enter__"))
                        .unwrap();
                    assert!(enter.call(&[]).unwrap().is(&inst));

                    assert!(engine
                        .lookup_special_method(&inst, &Value::str("missing"))
                        .unwrap()
                        .is_none());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let stats = engine.stats();
    assert_eq!(stats.lookups, (THREADS * ROUNDS * 3) as u64);
    assert_eq!(stats.found, (THREADS * ROUNDS * 2) as u64);
    assert_eq!(stats.not_found, (THREADS * ROUNDS) as u64);
    assert_eq!(stats.errors, 0);
}

#[test]
fn test_concurrent_lookups_cached() {
    let engine = Arc::new(LookupEngine::new(LookupConfig::uncached().with_cache(true)));
    run_workers(Arc::clone(&engine));

    // Two types times three names; concurrent misses may race but land once.
    assert_eq!(engine.cache_len(), 6);
    assert!(engine.stats().cache_hits > 0);
}

#[test]
fn test_concurrent_lookups_uncached() {
    let engine = Arc::new(LookupEngine::new(LookupConfig::uncached()));
    run_workers(Arc::clone(&engine));
    assert_eq!(engine.cache_len(), 0);
    assert_eq!(engine.stats().cache_hits, 0);
}

#[test]
fn test_concurrent_instance_mutation_is_invisible() {
    let (t, _) = hierarchy();
    let obj = Object::new(&t);
    let inst = Value::Object(Arc::clone(&obj));

    let writer = {
        let obj = Arc::clone(&obj);
        thread::spawn(move || {
            for i in 0..ROUNDS {
                obj.set_attr("x", Value::Int(i as i64 + 1000));
            }
        })
    };

    let engine = LookupEngine::new(LookupConfig::uncached());
    for _ in 0..ROUNDS {
        assert_eq!(
            engine
                .lookup_special_method(&inst, &Value::str("x"))
                .unwrap(),
            Value::Int(7)
        );
    }
    writer.join().expect("writer panicked");
}
