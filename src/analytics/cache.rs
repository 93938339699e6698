// src/analytics/cache.rs

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

use lru::LruCache;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::{FeedbackAnalytics, FeedbackRecord};

pub const DEFAULT_CAPACITY: usize = 256;

struct Entry {
    fingerprint: [u8; 32],
    analytics: Arc<FeedbackAnalytics>,
}

/// Derived analytics per interview, reused while the fetched rows are unchanged.
///
/// Holds at most `capacity` interviews; the least recently requested one is
/// evicted first.
pub struct AnalyticsCache {
    entries: Mutex<LruCache<String, Entry>>,
}

impl Default for AnalyticsCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl AnalyticsCache {
    /// A zero capacity is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { entries: Mutex::new(LruCache::new(cap)) }
    }

    /// Returns the cached analytics when `records` hash to the stored
    /// fingerprint, otherwise derives and replaces the entry.
    pub fn get_or_derive(
        &self,
        interview_id: &str,
        records: &[FeedbackRecord],
    ) -> Option<Arc<FeedbackAnalytics>> {
        if records.is_empty() {
            self.lock().pop(interview_id);
            return None;
        }

        let fingerprint = fingerprint(records);

        if let Some(hit) = self.lock().get(interview_id) {
            if hit.fingerprint == fingerprint {
                debug!(interview_id, "analytics cache hit");
                return Some(Arc::clone(&hit.analytics));
            }
        }

        debug!(interview_id, rows = records.len(), "analytics cache miss");
        let analytics = Arc::new(super::derive(records)?);

        self.lock().put(
            interview_id.to_string(),
            Entry { fingerprint, analytics: Arc::clone(&analytics) },
        );
        Some(analytics)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn contains(&self, interview_id: &str) -> bool {
        self.lock().contains(interview_id)
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, Entry>> {
        // a panic mid-insert leaves the map itself intact
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

// SHA-256 over the ordered (question, rating) pairs, the only fields derive reads.
// Each field is length-prefixed so adjacent values cannot run together.
fn fingerprint(records: &[FeedbackRecord]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for rec in records {
        hasher.update((rec.question.len() as u64).to_le_bytes());
        hasher.update(rec.question.as_bytes());
        match rec.rating.as_deref() {
            Some(r) => {
                hasher.update([1u8]);
                hasher.update((r.len() as u64).to_le_bytes());
                hasher.update(r.as_bytes());
            }
            None => hasher.update([0u8]),
        }
    }
    hasher.finalize().into()
}
