//! Backend API Client
//!
//! Endpoint bindings organized by domain. Queries are cached per request and
//! tagged; mutations invalidate tags, and every registered hook is told which
//! tags went stale so dependent views can refetch.

mod category;
mod subcategory;
mod transport;
mod fetch;

#[cfg(test)]
pub(crate) mod mock;

use std::sync::{Arc, Mutex, PoisonError};

use query_cache::QueryCache;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::ApiResponse;

// Re-export all public items
pub use category::*;
pub use subcategory::*;
pub use transport::*;
pub use fetch::FetchTransport;

/// Tags a cached query can provide and a mutation can invalidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheTag {
    Categories,
    SubCategories,
}

type InvalidateHook = Arc<dyn Fn(&[CacheTag]) + Send + Sync>;

/// API handle shared by all views
pub struct Api<T> {
    transport: Arc<T>,
    cache: Arc<Mutex<QueryCache<Value, CacheTag>>>,
    hooks: Arc<Mutex<Vec<InvalidateHook>>>,
}

impl<T> Clone for Api<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cache: Arc::clone(&self.cache),
            hooks: Arc::clone(&self.hooks),
        }
    }
}

/// The API as used by the browser app
pub type AdminApi = Api<FetchTransport>;

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            cache: Arc::new(Mutex::new(QueryCache::new())),
            hooks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Register a hook run after every invalidation
    pub fn on_invalidate(&self, hook: impl Fn(&[CacheTag]) + Send + Sync + 'static) {
        self.hooks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(hook));
    }

    /// Mark cached queries providing `tags` stale and notify hooks
    pub fn invalidate(&self, tags: &[CacheTag]) {
        let marked = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .invalidate(tags);
        log::debug!("[API] invalidate {:?} ({} cached queries)", tags, marked);

        let hooks = self
            .hooks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for hook in hooks {
            hook(tags);
        }
    }

    /// Run a query, serving it from cache while fresh.
    ///
    /// A response whose tags were invalidated while it was in flight is
    /// returned but not cached.
    pub(crate) async fn query<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
        provides: &[CacheTag],
    ) -> ApiResult<ApiResponse<R>> {
        let key = request.cache_key();
        let (cached, generation) = {
            let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            (cache.get(&key).cloned(), cache.generation(provides))
        };

        let body = match cached {
            Some(body) => body,
            None => {
                let body = self.transport.send(request).await?;
                self.cache
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert_if_current(key, body.clone(), provides.to_vec(), generation);
                body
            }
        };
        Ok(serde_json::from_value(body)?)
    }

    /// Run a mutation and invalidate `invalidates` once the server answered.
    ///
    /// Returns the server message when the envelope carries `expected`.
    pub(crate) async fn mutate(
        &self,
        request: ApiRequest,
        expected: u16,
        invalidates: &[CacheTag],
    ) -> ApiResult<String> {
        let body = self.transport.send(request).await?;
        let res: ApiResponse<Value> = serde_json::from_value(body)?;
        self.invalidate(invalidates);

        if res.status_code != expected {
            return Err(ApiError::UnexpectedStatus {
                expected,
                actual: res.status_code,
                message: res.message,
            });
        }
        Ok(res.message)
    }
}

/// Unwrap the `data` of a query response
pub(crate) fn into_data<R>(res: ApiResponse<R>) -> ApiResult<R> {
    res.data
        .ok_or_else(|| ApiError::Decode(format!("response without data: {}", res.message)))
}
