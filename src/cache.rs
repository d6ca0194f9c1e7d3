//! In-memory caching for rendered page bodies.
//! Uses moka for TTL-based caching with LRU eviction.
//!
//! Cache keys are page-scoped, not user-scoped: every logged-in user sees the
//! same cached listing within the TTL window.

use moka::sync::Cache;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Cache for the rendered product listing. Single entry, TTL from config
/// (60 seconds by default).
static PRODUCT_LISTING_CACHE: Lazy<Cache<(), String>> = Lazy::new(|| {
    body_cache(
        Duration::from_secs(crate::app_config::cache().products_ttl_seconds),
        8,
    )
});

/// Cache for rendered transaction history pages, keyed by page number.
/// TTL from config (120 seconds by default).
static TRANSACTION_PAGE_CACHE: Lazy<Cache<u64, String>> = Lazy::new(|| {
    body_cache(
        Duration::from_secs(crate::app_config::cache().transactions_ttl_seconds),
        1_000,
    )
});

/// Build a TTL-expiring body cache. Entries lapse `ttl` after insertion
/// whether or not they are being read.
fn body_cache<K>(ttl: Duration, max_capacity: u64) -> Cache<K, String>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
{
    Cache::builder()
        .time_to_live(ttl)
        .max_capacity(max_capacity)
        .build()
}

/// Get the cached product listing body, if still live.
pub fn get_product_listing() -> Option<String> {
    PRODUCT_LISTING_CACHE.get(&())
}

pub fn store_product_listing(body: String) {
    PRODUCT_LISTING_CACHE.insert((), body);
}

/// Invalidate the product listing cache.
/// Call this when product rows change.
pub fn invalidate_product_listing() {
    PRODUCT_LISTING_CACHE.invalidate(&());
}

/// Get a cached transaction page body, if still live.
pub fn get_transactions_page(page: u64) -> Option<String> {
    TRANSACTION_PAGE_CACHE.get(&page)
}

pub fn store_transactions_page(page: u64, body: String) {
    TRANSACTION_PAGE_CACHE.insert(page, body);
}

/// Invalidate every cached transaction page.
/// Call this when transaction rows change.
pub fn invalidate_transactions() {
    TRANSACTION_PAGE_CACHE.invalidate_all();
}
