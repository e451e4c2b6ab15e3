//! Taxonomy Admin App
//!
//! Category management on top, subcategories of the active category below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryPanel, SubCategoryPanel, Toaster};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AdminState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!(
        "[APP] backend {} ({} categories per page)",
        config.api_base_url,
        config.page_limit
    );

    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(Store::new(AdminState::new()));

    view! {
        <div class="admin-layout">
            <CategoryPanel />
            <SubCategoryPanel />
            <Toaster />
        </div>
    }
}
