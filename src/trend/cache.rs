//! In-process TTL cache for the latest trend snapshot

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::TrendEnrichment;

/// Default time a snapshot is served before it is fetched again
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

struct Entry {
    value: Arc<TrendEnrichment>,
    stored_at: Instant,
}

/// Single-slot cache holding the most recent snapshot
pub struct TrendCache {
    slot: RwLock<Option<Entry>>,
    ttl: Duration,
}

impl TrendCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// The cached snapshot, if present and younger than the TTL
    pub fn get(&self) -> Option<Arc<TrendEnrichment>> {
        let slot = self.slot.read();
        slot.as_ref()
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.value))
    }

    /// Store a fresh snapshot, replacing any previous one
    pub fn refresh(&self, value: TrendEnrichment) -> Arc<TrendEnrichment> {
        let value = Arc::new(value);
        *self.slot.write() = Some(Entry {
            value: Arc::clone(&value),
            stored_at: Instant::now(),
        });
        value
    }

    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for TrendCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl std::fmt::Debug for TrendCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrendCache")
            .field("ttl", &self.ttl)
            .field("populated", &self.slot.read().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> TrendEnrichment {
        TrendEnrichment {
            keywords: Default::default(),
            hot_niches: Vec::new(),
            market_signals: vec!["quiet week".to_string()],
            generated_at: Utc::now(),
            stale: false,
        }
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = TrendCache::default();
        assert!(cache.get().is_none());
        assert_eq!(cache.ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_refresh_then_hit() {
        let cache = TrendCache::default();
        let stored = cache.refresh(sample());
        let hit = cache.get().expect("fresh entry");
        assert!(Arc::ptr_eq(&stored, &hit));
    }

    #[test]
    fn test_clear() {
        let cache = TrendCache::default();
        cache.refresh(sample());
        cache.clear();
        assert!(cache.get().is_none());
    }

    #[test]
    fn test_expired_entry_misses() {
        let cache = TrendCache::new(Duration::ZERO);
        cache.refresh(sample());
        assert!(cache.get().is_none());
    }
}
