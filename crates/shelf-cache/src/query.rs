//! Query cache with generation-stamped fetch lifecycle.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::{CacheError, QueryKey};

/// Lifecycle status of a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// A fetch is in flight. Previously resolved data, if any, is kept
    /// and served as stale while loading.
    Loading,
    /// The last fetch resolved with data.
    Success,
    /// The last fetch failed.
    Error,
}

/// Proof of a started fetch. Carries the generation stamped by
/// [`QueryCache::begin`]; resolving with an outdated ticket is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    key: QueryKey,
    generation: u64,
}

impl FetchTicket {
    /// The key this fetch belongs to.
    pub fn key(&self) -> &QueryKey {
        &self.key
    }
}

#[derive(Debug, Clone)]
struct QueryEntry<T> {
    status: QueryStatus,
    data: Option<T>,
    error: Option<String>,
    fetched_at: Option<Instant>,
    generation: u64,
}

/// In-process cache from query identity to fetch state.
///
/// One entry per [`QueryKey`], holding `{status, data, error, timestamp}`.
/// Each `begin` bumps the key's generation; only the matching ticket may
/// publish a result, which is what discards superseded in-flight fetches
/// when the filter changes faster than the network answers.
#[derive(Debug, Clone)]
pub struct QueryCache<T> {
    entries: HashMap<QueryKey, QueryEntry<T>>,
    max_age: Option<Duration>,
    next_generation: u64,
}

impl<T> QueryCache<T> {
    /// Create a cache whose entries never go stale.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            max_age: None,
            next_generation: 0,
        }
    }

    /// Set a freshness limit; entries older than `max_age` stop being
    /// served by [`get`](Self::get) until re-resolved.
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Mark a fetch as started for `key` and return the ticket that the
    /// eventual result must present. Any earlier in-flight ticket for the
    /// same key is superseded. Resolved data already present is kept.
    pub fn begin(&mut self, key: &QueryKey) -> FetchTicket {
        self.next_generation += 1;
        let generation = self.next_generation;

        let entry = self.entries.entry(key.clone()).or_insert(QueryEntry {
            status: QueryStatus::Loading,
            data: None,
            error: None,
            fetched_at: None,
            generation,
        });
        entry.status = QueryStatus::Loading;
        entry.error = None;
        entry.generation = generation;

        FetchTicket {
            key: key.clone(),
            generation,
        }
    }

    /// Publish a successful result for a started fetch.
    ///
    /// Fails with [`CacheError::Superseded`] if a newer `begin` has been
    /// issued for the key since this ticket, and with
    /// [`CacheError::NotFound`] if the entry was invalidated meanwhile.
    pub fn resolve(&mut self, ticket: FetchTicket, data: T) -> Result<(), CacheError> {
        let entry = self.current_entry(&ticket)?;
        entry.status = QueryStatus::Success;
        entry.data = Some(data);
        entry.error = None;
        entry.fetched_at = Some(Instant::now());
        Ok(())
    }

    /// Publish a failed result for a started fetch. Same supersession
    /// rules as [`resolve`](Self::resolve).
    pub fn fail(&mut self, ticket: FetchTicket, error: impl Into<String>) -> Result<(), CacheError> {
        let entry = self.current_entry(&ticket)?;
        entry.status = QueryStatus::Error;
        entry.error = Some(error.into());
        Ok(())
    }

    fn current_entry(&mut self, ticket: &FetchTicket) -> Result<&mut QueryEntry<T>, CacheError> {
        let entry = self
            .entries
            .get_mut(&ticket.key)
            .ok_or_else(|| CacheError::NotFound(ticket.key.to_string()))?;
        if entry.generation != ticket.generation {
            return Err(CacheError::Superseded(ticket.key.to_string()));
        }
        Ok(entry)
    }

    /// Get the data for a key, if it resolved successfully and is still
    /// fresh.
    pub fn get(&self, key: &QueryKey) -> Option<&T> {
        let entry = self.entries.get(key)?;
        if entry.status != QueryStatus::Success || !self.is_fresh(entry) {
            return None;
        }
        entry.data.as_ref()
    }

    /// Get the data for a key regardless of freshness or an in-flight
    /// refetch (stale-while-loading reads).
    pub fn get_stale(&self, key: &QueryKey) -> Option<&T> {
        self.entries.get(key)?.data.as_ref()
    }

    /// Lifecycle status for a key, if an entry exists.
    pub fn status(&self, key: &QueryKey) -> Option<QueryStatus> {
        self.entries.get(key).map(|e| e.status)
    }

    /// Error message for a key, if its last fetch failed.
    pub fn error(&self, key: &QueryKey) -> Option<&str> {
        self.entries.get(key)?.error.as_deref()
    }

    /// Drop one entry. Returns whether it existed.
    pub fn invalidate(&mut self, key: &QueryKey) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every entry for a resource, across all filter keys. Returns
    /// how many were dropped.
    pub fn invalidate_resource(&mut self, resource: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|k, _| k.resource() != resource);
        before - self.entries.len()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries (any status).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &QueryEntry<T>) -> bool {
        match (self.max_age, entry.fetched_at) {
            (Some(max_age), Some(at)) => at.elapsed() < max_age,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
