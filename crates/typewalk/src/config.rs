// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Lookup configuration.
//!
//! Two levels, same as every other knob in this crate:
//!
//! - **Static**: compile-time constants (cache bounds, hierarchy depth limit,
//!   environment variable names).
//! - **Dynamic**: [`LookupConfig`], handed to a [`LookupEngine`] at
//!   construction. `LookupConfig::default()` reads the environment so the
//!   process-wide engine can be tuned without recompiling.
//!
//! # Example
//!
//! ```
//! use typewalk::config::LookupConfig;
//! use typewalk::lookup::LookupEngine;
//!
//! let engine = LookupEngine::new(LookupConfig::uncached().with_cache(true));
//! assert!(engine.config().cache_enabled);
//! ```
//!
//! [`LookupEngine`]: crate::lookup::LookupEngine

/// Default number of `(type, name)` resolutions the slot cache may hold.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Upper bound on the length of an ancestor list accepted by the builder.
///
/// Lookups are bounded by the ancestor list length; this keeps that bound
/// reasonable for hierarchies built from untrusted descriptions.
pub const MAX_ANCESTORS: usize = 1024;

/// Enables the per-(type, name) slot cache of the global engine (`1`, `true`, `on`).
pub const ENV_LOOKUP_CACHE: &str = "TYPEWALK_LOOKUP_CACHE";

/// Overrides [`DEFAULT_CACHE_CAPACITY`] for the global engine.
pub const ENV_CACHE_CAPACITY: &str = "TYPEWALK_CACHE_CAPACITY";

/// Runtime configuration of a lookup engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Memoize resolved slots per `(type id, name)`.
    ///
    /// Only the slot is cached; binding always runs against the instance.
    pub cache_enabled: bool,

    /// Maximum number of cached resolutions. Inserts stop once reached.
    pub cache_capacity: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            cache_enabled: std::env::var(ENV_LOOKUP_CACHE)
                .ok()
                .is_some_and(|v| parse_flag(&v)),
            cache_capacity: std::env::var(ENV_CACHE_CAPACITY)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
        }
    }
}

impl LookupConfig {
    /// Configuration with caching disabled, ignoring the environment.
    pub fn uncached() -> Self {
        Self {
            cache_enabled: false,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Enable or disable the slot cache.
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Set the slot cache capacity.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}
