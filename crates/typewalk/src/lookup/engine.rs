// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Special lookup engine.
//!
//! Algorithm, for `lookup_special(instance, name)`:
//!
//! 1. `ty = type_of(instance)`
//! 2. scan `[ty] ++ ancestors(ty)` in order; the first table containing
//!    `name` wins (subclass definitions shadow ancestors)
//! 3. evaluate the slot with the instance present
//!
//! Instance storage is never consulted. The scan is bounded by the ancestor
//! list length and holds no lock on the type graph.

use crate::config::LookupConfig;
use crate::descriptor::{evaluate, AttributeSlot};
use crate::error::Error;
use crate::lookup::cache::{Resolution, SlotCache};
use crate::object::TypeRef;
use crate::value::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL_ENGINE: OnceLock<LookupEngine> = OnceLock::new();

/// Outcome of a special lookup.
#[derive(Debug, Clone)]
pub enum LookupResult {
    /// Attribute resolved and evaluated.
    Found(Value),
    /// No type in the search order defines the attribute.
    NotFound,
    /// Evaluation failed; the error is the one raised by the descriptor.
    Error(Error),
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Convert to `Result<Option<Value>, Error>`.
    pub fn into_result(self) -> Result<Option<Value>, Error> {
        match self {
            Self::Found(v) => Ok(Some(v)),
            Self::NotFound => Ok(None),
            Self::Error(e) => Err(e),
        }
    }
}

/// Snapshot of engine counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupStats {
    pub lookups: u64,
    pub found: u64,
    pub not_found: u64,
    pub errors: u64,
    pub cache_hits: u64,
}

#[derive(Debug, Default)]
struct Counters {
    lookups: AtomicU64,
    found: AtomicU64,
    not_found: AtomicU64,
    errors: AtomicU64,
    cache_hits: AtomicU64,
}

/// Resolves special attributes through the type graph.
#[derive(Debug)]
pub struct LookupEngine {
    config: LookupConfig,
    cache: Option<SlotCache>,
    counters: Counters,
}

impl Default for LookupEngine {
    fn default() -> Self {
        Self::new(LookupConfig::default())
    }
}

impl LookupEngine {
    pub fn new(config: LookupConfig) -> Self {
        let cache = config
            .cache_enabled
            .then(|| SlotCache::new(config.cache_capacity));
        log::debug!(
            "[lookup] engine created (cache={}, capacity={})",
            config.cache_enabled,
            config.cache_capacity
        );
        Self {
            config,
            cache,
            counters: Counters::default(),
        }
    }

    /// Process-wide engine, configured from the environment on first use.
    pub fn global() -> &'static LookupEngine {
        GLOBAL_ENGINE.get_or_init(LookupEngine::default)
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Find the slot for `name` along `ty`'s search order.
    ///
    /// Returns the slot and the type whose table defines it.
    pub fn find_slot(&self, ty: &TypeRef, name: &str) -> Option<(AttributeSlot, TypeRef)> {
        let Some(cache) = &self.cache else {
            return walk(ty, name);
        };

        if let Some(resolution) = cache.get(ty.id(), name) {
            self.counters.cache_hits.fetch_add(1, Ordering::Relaxed);
            return resolution;
        }
        let resolution = walk(ty, name);
        cache.insert(ty.id(), name, resolution.clone());
        resolution
    }

    /// Look `name` up on the type of `instance` and evaluate it.
    pub fn lookup_special(&self, instance: &Value, name: &str) -> LookupResult {
        self.counters.lookups.fetch_add(1, Ordering::Relaxed);
        let ty = instance.type_of();

        let Some((slot, owner)) = self.find_slot(ty, name) else {
            self.counters.not_found.fetch_add(1, Ordering::Relaxed);
            log::trace!("[lookup] '{}' not found on '{}'", name, ty.name());
            return LookupResult::NotFound;
        };

        match evaluate(&slot, Some(instance)) {
            Ok(value) => {
                self.counters.found.fetch_add(1, Ordering::Relaxed);
                LookupResult::Found(value)
            }
            Err(e) => {
                self.counters.errors.fetch_add(1, Ordering::Relaxed);
                log::debug!(
                    "[lookup] evaluating '{}.{}' for '{}' failed: {}",
                    owner.name(),
                    name,
                    ty.name(),
                    e
                );
                LookupResult::Error(e)
            }
        }
    }

    /// Validated lookup returning `default` (same identity) when missing.
    ///
    /// Without a default, a missing attribute is a not-found error.
    pub fn lookup_special_or_default(
        &self,
        instance: &Value,
        name: &Value,
        default: Option<&Value>,
    ) -> Result<Value, Error> {
        let name = attribute_name(name)?;
        match self.lookup_special(instance, name) {
            LookupResult::Found(value) => Ok(value),
            LookupResult::NotFound => match default {
                Some(default) => Ok(default.clone()),
                None => Err(Error::no_special_attribute(instance.type_name(), name)),
            },
            LookupResult::Error(e) => Err(e),
        }
    }

    /// Validated lookup returning `Value::None` when missing.
    pub fn lookup_special_method(&self, instance: &Value, name: &Value) -> Result<Value, Error> {
        let name = attribute_name(name)?;
        Ok(self
            .lookup_special(instance, name)
            .into_result()?
            .unwrap_or(Value::None))
    }

    /// Counter snapshot.
    pub fn stats(&self) -> LookupStats {
        LookupStats {
            lookups: self.counters.lookups.load(Ordering::Relaxed),
            found: self.counters.found.load(Ordering::Relaxed),
            not_found: self.counters.not_found.load(Ordering::Relaxed),
            errors: self.counters.errors.load(Ordering::Relaxed),
            cache_hits: self.counters.cache_hits.load(Ordering::Relaxed),
        }
    }

    /// Number of cached resolutions (0 when caching is disabled).
    pub fn cache_len(&self) -> usize {
        self.cache.as_ref().map_or(0, SlotCache::len)
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }
}

/// Linear first-match scan over the type and its ancestors.
fn walk(ty: &TypeRef, name: &str) -> Resolution {
    std::iter::once(ty)
        .chain(ty.ancestors().iter())
        .find_map(|candidate| {
            log::trace!("[lookup] probing '{}' for '{}'", candidate.name(), name);
            candidate
                .attributes()
                .get(name)
                .map(|slot| (slot.clone(), Arc::clone(candidate)))
        })
}

/// Attribute names must be strings; anything else is a usage error.
fn attribute_name(name: &Value) -> Result<&str, Error> {
    match name {
        Value::Str(s) => Ok(&**s),
        other => Err(Error::attribute_name_type(other.type_name())),
    }
}
