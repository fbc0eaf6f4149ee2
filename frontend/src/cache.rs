use crate::models::SearchResponse;
use chrono::{DateTime, Utc};
use lru::LruCache;
use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;
use yew::prelude::*;

pub const SEARCH_CACHE_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    scope: &'static str,
    keyword: String,
}

impl QueryKey {
    pub fn search(keyword: &str) -> Self {
        Self {
            scope: "search",
            keyword: keyword.trim().to_string(),
        }
    }
}

/// In-memory results of successful searches for the lifetime of the tab,
/// shared through context. Nothing here survives a reload.
#[derive(Clone, Debug)]
pub struct SearchCache {
    entries: Rc<RefCell<LruCache<QueryKey, SearchResponse>>>,
}

impl PartialEq for SearchCache {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(SEARCH_CACHE_CAPACITY)
    }
}

impl SearchCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Rc::new(RefCell::new(LruCache::new(capacity))),
        }
    }

    pub fn insert(&self, response: SearchResponse) {
        let key = QueryKey::search(&response.keyword);
        self.entries.borrow_mut().put(key, response);
    }

    /// Cached searches whose session has not yet expired, most recent first.
    pub fn recent(&self, now: DateTime<Utc>) -> Vec<SearchResponse> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, response)| response)
            .filter(|response| !response.is_expired(now))
            .cloned()
            .collect()
    }
}

#[hook]
pub fn use_search_cache() -> SearchCache {
    use_context::<SearchCache>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::search_response;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
    }

    fn session_ids(cache: &SearchCache, now: DateTime<Utc>) -> Vec<String> {
        cache.recent(now).into_iter().map(|r| r.session_id).collect()
    }

    #[test]
    fn query_key_uses_trimmed_keyword() {
        assert_eq!(QueryKey::search(" rust "), QueryKey::search("rust"));
        assert_ne!(QueryKey::search("Rust"), QueryKey::search("rust"));
    }

    #[test]
    fn newer_search_for_same_keyword_replaces_entry() {
        let cache = SearchCache::default();
        cache.insert(search_response("s1", "rust"));
        cache.insert(search_response("s2", " rust"));

        assert_eq!(session_ids(&cache, at(10, 30)), vec!["s2"]);
    }

    #[test]
    fn recent_lists_live_sessions_newest_first() {
        let cache = SearchCache::default();
        cache.insert(search_response("s1", "rust"));
        cache.insert(search_response("s2", "tokio"));

        let mut stale = search_response("s0", "old");
        stale.expires_at = "2024-03-01T09:00:00".to_string();
        cache.insert(stale);

        assert_eq!(session_ids(&cache, at(10, 30)), vec!["s2", "s1"]);
        assert!(cache.recent(at(12, 0)).is_empty());
    }

    #[test]
    fn capacity_bounds_entries() {
        let cache = SearchCache::new(2);
        cache.insert(search_response("s1", "a"));
        cache.insert(search_response("s2", "b"));
        cache.insert(search_response("s3", "c"));

        assert_eq!(session_ids(&cache, at(10, 30)), vec!["s3", "s2"]);
    }

    #[test]
    fn clones_share_storage() {
        let cache = SearchCache::default();
        let other = cache.clone();
        other.insert(search_response("s1", "rust"));

        assert_eq!(cache, other);
        assert_eq!(session_ids(&cache, at(10, 30)), vec!["s1"]);
        assert_ne!(cache, SearchCache::default());
    }
}
