// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Memoized MRO resolutions.
//!
//! Keyed by `(type id, name)`. Type ids are never reused and built types are
//! immutable, so an entry can never go stale; no invalidation exists.
//! Negative results (name defined nowhere) are cached too.

use crate::descriptor::AttributeSlot;
use crate::object::TypeRef;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A resolved slot and the type that defines it.
pub(crate) type Resolution = Option<(AttributeSlot, TypeRef)>;

/// Concurrent `(type, name) -> resolution` cache with a fixed capacity.
#[derive(Debug)]
pub struct SlotCache {
    entries: DashMap<u64, HashMap<Arc<str>, Resolution>>,
    len: AtomicUsize,
    capacity: usize,
}

impl SlotCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            len: AtomicUsize::new(0),
            capacity,
        }
    }

    /// Cached resolution; outer `None` means "not cached".
    pub(crate) fn get(&self, type_id: u64, name: &str) -> Option<Resolution> {
        self.entries
            .get(&type_id)
            .and_then(|names| names.get(name).cloned())
    }

    /// Store a resolution unless the cache is full.
    pub(crate) fn insert(&self, type_id: u64, name: &str, resolution: Resolution) {
        if self.len.load(Ordering::Relaxed) >= self.capacity {
            log::trace!("[cache] full ({} entries), skipping '{}'", self.capacity, name);
            return;
        }
        let mut names = self.entries.entry(type_id).or_default();
        if names.insert(Arc::from(name), resolution).is_none() {
            self.len.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Number of cached resolutions.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.clear();
        self.len.store(0, Ordering::Relaxed);
    }
}
