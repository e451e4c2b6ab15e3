//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{AdminApi, Api, CacheTag, FetchTransport};
use crate::config::AppConfig;
use crate::notice::{Notice, Notifier};

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    pub api: AdminApi,
    pub config: AppConfig,
    pub notifier: Notifier,
    /// Bumped whenever `CacheTag::Categories` is invalidated
    categories_version: RwSignal<u32>,
    /// Bumped whenever `CacheTag::SubCategories` is invalidated
    subcategories_version: RwSignal<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = Api::new(FetchTransport::new(
            config.api_base_url.clone(),
            config.token_key.clone(),
        ));
        let categories_version = RwSignal::new(0u32);
        let subcategories_version = RwSignal::new(0u32);

        // Invalidated tags re-run every view tracking them
        api.on_invalidate(move |tags| {
            for tag in tags {
                let version = match tag {
                    CacheTag::Categories => categories_version,
                    CacheTag::SubCategories => subcategories_version,
                };
                version.try_update(|v| *v = v.wrapping_add(1));
            }
        });

        Self {
            api,
            notifier: Notifier::new(config.toast_duration_ms),
            config,
            categories_version,
            subcategories_version,
        }
    }

    /// Subscribe the current reactive scope to invalidations of `tag`
    pub fn track(&self, tag: CacheTag) {
        match tag {
            CacheTag::Categories => self.categories_version.track(),
            CacheTag::SubCategories => self.subcategories_version.track(),
        }
    }

    pub fn notify(&self, notice: Notice) {
        self.notifier.push(notice);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
