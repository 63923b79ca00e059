use super::query_key::{QueryFilter, QueryKey};
use super::query_state::{QueryData, QueryState, QueryValue};
use crate::shared::config::CacheConfig;
use crate::shared::error::AppError;
use lru::LruCache;
use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, trace};

struct CacheEntry {
    state: QueryState<QueryData>,
    stale: bool,
    settled_at: Option<Instant>,
    /// Bumped whenever a fetch for this key starts.
    generation: u64,
    /// Generation of the fetch that produced `state`.
    settled_generation: u64,
    /// Latest generation an invalidation applied to.
    invalidated_generation: u64,
}

impl CacheEntry {
    fn pending(generation: u64) -> Self {
        Self {
            state: QueryState::Pending,
            stale: false,
            settled_at: None,
            generation,
            settled_generation: 0,
            invalidated_generation: 0,
        }
    }

    fn is_settled(&self) -> bool {
        !self.state.is_pending()
    }

    fn is_stale(&self, stale_after: Option<Duration>, now: Instant) -> bool {
        if self.stale {
            return true;
        }
        match (stale_after, self.settled_at) {
            (Some(window), Some(settled_at)) => now.duration_since(settled_at) >= window,
            _ => false,
        }
    }
}

/// Handed out when a read has to go to the actor; returned on completion.
#[derive(Debug)]
struct FetchTicket {
    key: QueryKey,
    generation: u64,
    epoch: u64,
}

struct CacheInner {
    entries: LruCache<QueryKey, CacheEntry>,
    /// Bumped by `clear`; results fetched under an older epoch are dropped.
    epoch: u64,
}

/// What a view can observe about one key without triggering a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSnapshot<T> {
    pub state: QueryState<T>,
    pub is_stale: bool,
}

/// Read-through cache of remote query results.
///
/// Reads populate on miss or staleness, writes invalidate by filter.
/// Invalidation only marks entries stale; the next `fetch` for the key
/// does the actual re-fetch.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<Mutex<CacheInner>>,
    stale_after: Option<Duration>,
}

impl QueryCache {
    pub fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: Arc::new(Mutex::new(CacheInner {
                entries: LruCache::new(capacity),
                epoch: 0,
            })),
            stale_after: config.stale_after(),
        }
    }

    /// Returns the cached state for `key`, calling `fetcher` when the entry
    /// is absent, pending, stale or holds a payload of another type.
    ///
    /// A fetcher error settles the entry as `Errored`.
    pub async fn fetch<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> QueryState<T>
    where
        T: QueryValue,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let epoch = self.epoch().await;
        self.fetch_at(epoch, key, fetcher).await
    }

    /// Current clear epoch. Read it before resolving whatever the fetcher
    /// captures (actor handle, identity) and hand it to `fetch_at`.
    pub async fn epoch(&self) -> u64 {
        self.inner.lock().await.epoch
    }

    /// Like `fetch`, but for a read whose inputs were resolved under `epoch`.
    /// If the cache has been cleared since, the read stays `Pending` and
    /// `fetcher` is never called.
    pub async fn fetch_at<T, F, Fut>(&self, epoch: u64, key: QueryKey, fetcher: F) -> QueryState<T>
    where
        T: QueryValue,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let ticket = match self.begin::<T>(epoch, key).await {
            Ok(cached) => return cached,
            Err(ticket) => ticket,
        };

        let state = match fetcher().await {
            Ok(value) => QueryState::Resolved(value),
            Err(err) => QueryState::Errored(err.user_message()),
        };

        self.complete(ticket, state.clone().map(T::into_query_data)).await;
        state
    }

    async fn begin<T: QueryValue>(
        &self,
        epoch: u64,
        key: QueryKey,
    ) -> Result<QueryState<T>, FetchTicket> {
        let mut inner = self.inner.lock().await;
        if epoch != inner.epoch {
            debug!(key = %key, epoch, current = inner.epoch, "read resolved before cache was cleared");
            return Ok(QueryState::Pending);
        }
        let now = Instant::now();

        if let Some(entry) = inner.entries.get_mut(&key) {
            if entry.is_settled() && !entry.is_stale(self.stale_after, now) {
                let cached = match &entry.state {
                    QueryState::Resolved(data) => T::from_query_data(data).map(QueryState::Resolved),
                    QueryState::Errored(message) => Some(QueryState::Errored(message.clone())),
                    QueryState::Pending => None,
                };
                if let Some(cached) = cached {
                    trace!(key = %key, "query cache hit");
                    return Ok(cached);
                }
            }

            entry.generation += 1;
            entry.state = QueryState::Pending;
            entry.settled_at = None;
            debug!(key = %key, generation = entry.generation, "query fetch started");
            return Err(FetchTicket {
                key,
                generation: entry.generation,
                epoch,
            });
        }

        debug!(key = %key, generation = 1, "query fetch started");
        inner.entries.put(key.clone(), CacheEntry::pending(1));
        Err(FetchTicket {
            key,
            generation: 1,
            epoch,
        })
    }

    async fn complete(&self, ticket: FetchTicket, state: QueryState<QueryData>) {
        let mut inner = self.inner.lock().await;
        if ticket.epoch != inner.epoch {
            debug!(key = %ticket.key, "discarding result fetched before cache was cleared");
            return;
        }

        if !inner.entries.contains(&ticket.key) {
            // Evicted while in flight.
            inner
                .entries
                .put(ticket.key.clone(), CacheEntry::pending(ticket.generation));
        }
        let Some(entry) = inner.entries.get_mut(&ticket.key) else {
            return;
        };

        if entry.settled_generation > ticket.generation {
            debug!(
                key = %ticket.key,
                generation = ticket.generation,
                settled = entry.settled_generation,
                "ignoring out-of-order query result"
            );
            return;
        }

        entry.state = state;
        entry.settled_generation = ticket.generation;
        entry.settled_at = Some(Instant::now());
        entry.stale = entry.invalidated_generation >= ticket.generation;
        debug!(
            key = %ticket.key,
            generation = ticket.generation,
            stale = entry.stale,
            "query settled"
        );
    }

    /// Marks every entry matching any filter as stale. Absent or already
    /// stale entries are left as they are. Returns the number of matches.
    pub async fn invalidate(&self, filters: &[QueryFilter]) -> usize {
        let mut inner = self.inner.lock().await;
        let mut matched = 0;
        for (key, entry) in inner.entries.iter_mut() {
            if filters.iter().any(|filter| filter.matches(key)) {
                entry.stale = true;
                entry.invalidated_generation = entry.generation;
                matched += 1;
            }
        }
        debug!(filters = ?filters, matched, "query cache invalidated");
        matched
    }

    /// Drops every entry. In-flight reads started before the call are
    /// discarded when they complete.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.entries.clear();
        inner.epoch += 1;
        debug!(epoch = inner.epoch, "query cache cleared");
    }

    pub async fn peek<T: QueryValue>(&self, key: &QueryKey) -> Option<CacheSnapshot<T>> {
        let inner = self.inner.lock().await;
        let entry = inner.entries.peek(key)?;
        let state = match &entry.state {
            QueryState::Pending => QueryState::Pending,
            QueryState::Resolved(data) => QueryState::Resolved(T::from_query_data(data)?),
            QueryState::Errored(message) => QueryState::Errored(message.clone()),
        };
        Some(CacheSnapshot {
            state,
            is_stale: entry.is_stale(self.stale_after, Instant::now()),
        })
    }

    pub async fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        let inner = self.inner.lock().await;
        inner
            .entries
            .peek(key)
            .map(|entry| entry.is_stale(self.stale_after, Instant::now()))
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
