/// Wraps a fallible async computation with a read-through cache.
///
/// Returns the cached value when present. Otherwise awaits `$block`, queues the result
/// for a background cache write and returns it.
///
/// # Arguments
/// * `$cache`: a [`Cache`](crate::cache::Cache) (`get_from_cache` + `set_in_background`).
/// * `$key`: the [`CacheKey`](crate::cache::CacheKey) of the value.
/// * `$ttl`: time-to-live in seconds.
/// * `$block`: future producing `AppResult<T>` on a miss.
///
/// # Example
/// ```rust,ignore
/// async fn search(&self, term: &str, limit: usize) -> AppResult<Vec<LiveProduct>> {
///     cached!(
///         self.cache,
///         CacheKey::ProductSearch { term: term.to_string(), limit },
///         SEARCH_CACHE_TTL,
///         async move { self.fetch(term, limit).await }
///     )
/// }
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        if let Some(cached) = $cache.get_from_cache(&$key).await? {
            Ok(cached)
        } else {
            let value = $block.await?;
            $cache.set_in_background(&$key, &value, $ttl);
            Ok(value)
        }
    }};
}
