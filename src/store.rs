//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Helpers write
//! individual fields so a view tracking `page` is not re-run when only the
//! category list changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::listing::clamp_page;
use crate::models::{Category, CategoryPage, SubCategory};

/// Category whose subcategories are shown
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveCategory {
    pub id: String,
    pub name: String,
}

impl From<&Category> for ActiveCategory {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
        }
    }
}

/// Admin state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Categories on the current page
    pub categories: Vec<Category>,
    /// Total pages reported by the last list response
    pub total_pages: u32,
    /// Current page (1-based)
    pub page: u32,
    /// Name filter for the current page
    pub search: String,
    /// Parent of the subcategory view
    pub active: Option<ActiveCategory>,
    /// Subcategories of `active`
    pub subcategories: Vec<SubCategory>,
}

impl AdminState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

/// Keep the current selection if it is still listed, else fall back to the
/// first category of the page.
pub fn resolve_active(current: Option<&ActiveCategory>, categories: &[Category]) -> Option<ActiveCategory> {
    current
        .and_then(|active| categories.iter().find(|c| c.id == active.id))
        .or_else(|| categories.first())
        .map(ActiveCategory::from)
}

// ========================
// Store Helper Functions
// ========================

/// Apply a freshly fetched category page
pub fn store_apply_category_page(store: &AdminStore, page: CategoryPage) {
    let total_pages = page.pagination.pages;
    let next_active = resolve_active(store.active().get_untracked().as_ref(), &page.categories);

    store.categories().set(page.categories);
    store.total_pages().set(total_pages);
    let current_active = store.active().get_untracked();
    if current_active != next_active {
        let id = |active: &Option<ActiveCategory>| active.as_ref().map(|a| a.id.clone());
        if id(&current_active) != id(&next_active) {
            store.subcategories().set(Vec::new());
        }
        store.active().set(next_active);
    }

    let current = store.page().get_untracked();
    let clamped = clamp_page(current, total_pages);
    if clamped != current {
        store.page().set(clamped);
    }
}

/// Make `category` the parent of the subcategory view
pub fn store_select_category(store: &AdminStore, category: &Category) {
    let next = Some(ActiveCategory::from(category));
    if store.active().get_untracked() != next {
        store.subcategories().set(Vec::new());
        store.active().set(next);
    }
}

/// Move to `page`, clamped to the known page count
pub fn store_set_page(store: &AdminStore, page: u32) {
    let page = clamp_page(page, store.total_pages().get_untracked());
    if store.page().get_untracked() != page {
        store.page().set(page);
    }
}

/// Store the subcategories of `parent_id` if it is still the active scope.
///
/// Returns `false` when the scope moved while the list was loading.
pub fn store_apply_subcategories(store: &AdminStore, parent_id: &str, subcategories: Vec<SubCategory>) -> bool {
    if subcategory_scope(store).as_deref() != Some(parent_id) {
        log::debug!("[STORE] dropped subcategories of inactive {}", parent_id);
        return false;
    }
    store.subcategories().set(subcategories);
    true
}

/// Whether `id` is on the loaded category page
pub fn is_listed(store: &AdminStore, id: &str) -> bool {
    store.categories().with_untracked(|categories| categories.iter().any(|c| c.id == id))
}

/// Id the subcategory view is scoped to
pub fn subcategory_scope(store: &AdminStore) -> Option<String> {
    store.active().get_untracked().map(|active| active.id)
}
