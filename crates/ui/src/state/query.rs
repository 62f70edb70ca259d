//! Query invalidation
//!
//! Table screens fetch with `use_resource` keyed on a named version
//! counter. Mutations bump the counter, which re-runs every resource
//! subscribed to that query name. A coarse stand-in for a query cache,
//! but it gives the same refetch-on-invalidate shape the screens need.

use std::collections::HashMap;

use dioxus::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryVersions {
    versions: HashMap<&'static str, u32>,
}

impl QueryVersions {
    /// Current version of a named query (0 until first invalidation).
    pub fn version(&self, key: &'static str) -> u32 {
        self.versions.get(key).copied().unwrap_or(0)
    }

    /// Bump a named query, forcing subscribed resources to refetch.
    pub fn invalidate(&mut self, key: &'static str) {
        *self.versions.entry(key).or_insert(0) += 1;
    }
}

/// Global query version table
pub static QUERIES: GlobalSignal<QueryVersions> = Signal::global(QueryVersions::default);

/// Subscribe to a query's version inside a component. Reading through the
/// global signal registers the caller for re-render on invalidation.
pub fn use_query_version(key: &'static str) -> u32 {
    QUERIES.read().version(key)
}

/// Invalidate a named query after a successful mutation.
pub fn invalidate_query(key: &'static str) {
    QUERIES.write().invalidate(key);
}

/// Fetch wrapped in a resource keyed on the named query's version.
/// Invalidation re-runs the fetch; the caller reads loading/error state
/// off the returned resource as usual.
pub fn use_backend_query<T, F, Fut>(key: &'static str, fetch: F) -> Resource<esp_core::AppResult<T>>
where
    T: 'static,
    F: Fn() -> Fut + Clone + 'static,
    Fut: std::future::Future<Output = esp_core::AppResult<T>> + 'static,
{
    use_resource(move || {
        // Subscribes this resource to the query's version.
        let _version = QUERIES.read().version(key);
        let fetch = fetch.clone();
        async move { fetch().await }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalidate_bumps_only_named_query() {
        let mut versions = QueryVersions::default();
        assert_eq!(versions.version("countries"), 0);

        versions.invalidate("countries");
        versions.invalidate("countries");
        assert_eq!(versions.version("countries"), 2);
        assert_eq!(versions.version("states"), 0);
    }
}
