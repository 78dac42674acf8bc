//! The screen-scoped hierarchy cache.

use std::collections::HashMap;
use std::future::Future;

use facultyhub_core::ClientError;
use tracing::{debug, warn};

use crate::keys::{EntityKind, Query};
use crate::listing::Listing;

/// A fetched listing whose kind does not match the query it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} listing, got {found}")]
pub struct KindMismatch {
    pub expected: EntityKind,
    pub found: EntityKind,
}

impl From<KindMismatch> for ClientError {
    fn from(e: KindMismatch) -> Self {
        Self::UnexpectedResponse(e.to_string())
    }
}

/// Hit/miss counters, mostly useful in logs and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Read-through cache of hierarchy child lists.
///
/// Owned and mutated by a single screen; dropping the screen drops the cache.
#[derive(Debug, Default)]
pub struct HierarchyCache {
    entries: HashMap<Query, Listing>,
    stats: CacheStats,
}

impl HierarchyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached list without fetching.
    pub fn get(&mut self, query: &Query) -> Option<&Listing> {
        match self.entries.get(query) {
            Some(listing) => {
                self.stats.hits += 1;
                debug!(cache.key = %query, "Cache hit");
                Some(listing)
            }
            None => {
                self.stats.misses += 1;
                debug!(cache.key = %query, "Cache miss");
                None
            }
        }
    }

    pub fn contains(&self, query: &Query) -> bool {
        self.entries.contains_key(query)
    }

    /// Stores a fetched list. A listing of the wrong kind for the key is refused.
    pub fn insert(&mut self, query: Query, listing: Listing) -> bool {
        if query.kind() != listing.kind() {
            warn!(
                cache.key = %query,
                listing.kind = %listing.kind(),
                "Refusing to cache listing of mismatched kind"
            );
            return false;
        }

        debug!(cache.key = %query, cache.len = listing.len(), "Cache set");
        self.entries.insert(query, listing);
        true
    }

    /// Returns the cached list for `query`, fetching and storing it on a miss.
    ///
    /// A failed fetch stores nothing, so the same query can be retried. A listing of
    /// the wrong kind is not stored either and comes back as [`KindMismatch`].
    pub async fn get_or_fetch<F, Fut, E>(&mut self, query: &Query, fetch: F) -> Result<Listing, E>
    where
        F: FnOnce(Query) -> Fut,
        Fut: Future<Output = Result<Listing, E>>,
        E: From<KindMismatch>,
    {
        if let Some(listing) = self.get(query) {
            return Ok(listing.clone());
        }

        let listing = fetch(query.clone()).await?;
        if !self.insert(query.clone(), listing.clone()) {
            return Err(KindMismatch {
                expected: query.kind(),
                found: listing.kind(),
            }
            .into());
        }
        Ok(listing)
    }

    pub fn invalidate(&mut self, query: &Query) -> bool {
        let removed = self.entries.remove(query).is_some();
        if removed {
            debug!(cache.key = %query, "Cache invalidated");
        }
        removed
    }

    /// Drops every entry of one entity kind, e.g. all student lists after a roster change.
    pub fn invalidate_kind(&mut self, kind: EntityKind) -> usize {
        let before = self.entries.len();
        self.entries.retain(|query, _| query.kind() != kind);
        let removed = before - self.entries.len();
        debug!(cache.kind = %kind, removed, "Cache kind invalidated");
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
