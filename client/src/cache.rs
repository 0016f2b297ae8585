//! Memoized-fetch cache with a fixed freshness window.
//!
//! One entry per key, overwritten on refresh. There is no eviction beyond
//! overwrite (entries live for the client's lifetime) and no request
//! coalescing: concurrent misses for the same key each run their producer,
//! and the last writer wins the slot.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rotomdex_api::ApiError;

struct CacheEntry<T> {
    value: T,
    stored_at: Instant,
}

/// A keyed cache over one resource class.
pub struct Cache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T: Clone> Cache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Serve `key` from cache if fresh, otherwise run `producer`.
    ///
    /// A producer failure falls back to a stale entry when one exists (the
    /// degradation is logged); with no entry at all the failure propagates.
    pub async fn get<F, Fut>(&self, key: &str, producer: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if let Some(value) = self.lookup(key, true) {
            return Ok(value);
        }

        match producer().await {
            Ok(value) => {
                self.insert(key, value.clone());
                Ok(value)
            }
            Err(err) => match self.lookup(key, false) {
                Some(value) => {
                    tracing::warn!(key, error = %err, "request failed, serving stale cache entry");
                    Ok(value)
                }
                None => Err(err),
            },
        }
    }

    /// Store a value under `key`, replacing any previous entry.
    pub fn insert(&self, key: &str, value: T) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    value,
                    stored_at: Instant::now(),
                },
            );
        }
    }

    /// Number of stored entries (fresh and stale alike).
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: &str, enforce_ttl: bool) -> Option<T> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?;
        if enforce_ttl && entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_producer(
        calls: &AtomicUsize,
        result: Result<u32, ApiError>,
    ) -> impl Future<Output = Result<u32, ApiError>> + '_ {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { result }
    }

    #[tokio::test]
    async fn test_fresh_hit_skips_producer() {
        let cache: Cache<u32> = Cache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);

        let first = cache
            .get("pokemon/25", || counting_producer(&calls, Ok(25)))
            .await
            .unwrap();
        let second = cache
            .get("pokemon/25", || counting_producer(&calls, Ok(99)))
            .await
            .unwrap();

        assert_eq!(first, 25);
        assert_eq!(second, 25);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_do_not_share() {
        let cache: Cache<u32> = Cache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);

        cache
            .get("pokemon/1", || counting_producer(&calls, Ok(1)))
            .await
            .unwrap();
        cache
            .get("pokemon/2", || counting_producer(&calls, Ok(2)))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_stale_fallback_on_failure() {
        // Zero TTL: every lookup is stale, every get runs the producer.
        let cache: Cache<u32> = Cache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);

        cache
            .get("pokemon/25", || counting_producer(&calls, Ok(25)))
            .await
            .unwrap();

        let degraded = cache
            .get("pokemon/25", || {
                counting_producer(&calls, Err(ApiError::ServerError(503)))
            })
            .await
            .unwrap();

        assert_eq!(degraded, 25);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_without_entry_propagates() {
        let cache: Cache<u32> = Cache::new(Duration::from_secs(300));
        let calls = AtomicUsize::new(0);

        let result = cache
            .get("pokemon/0", || counting_producer(&calls, Err(ApiError::NotFound)))
            .await;

        assert!(matches!(result, Err(ApiError::NotFound)));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_zero_ttl_always_refetches() {
        let cache: Cache<u32> = Cache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            cache
                .get("pokemon/25", || counting_producer(&calls, Ok(25)))
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_insert_overwrites() {
        let cache: Cache<u32> = Cache::new(Duration::from_secs(300));
        cache.insert("pokemon/25", 1);
        cache.insert("pokemon/25", 2);

        let calls = AtomicUsize::new(0);
        let value = cache
            .get("pokemon/25", || counting_producer(&calls, Ok(0)))
            .await
            .unwrap();

        assert_eq!(value, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(cache.len(), 1);
    }
}
