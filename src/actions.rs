//! Form Actions
//!
//! Validate, send the mutation, and turn the outcome into a user notice.
//! Refetching is left to tag invalidation in the API layer.

use crate::api::{self, Api, Transport};
use crate::forms::{EntryForm, FormMode};
use crate::notice::{Notice, GENERIC_ERROR, SUBCATEGORY_CREATE_ERROR};

pub const SELECT_CATEGORY_PROMPT: &str = "Please select a category to view its subcategories.";

/// Create or update a category depending on `mode`
pub async fn save_category<T: Transport>(api: &Api<T>, mode: &FormMode, form: &EntryForm) -> Notice {
    let body = form.to_multipart();
    let result = match mode.editing_id() {
        Some(id) => api::update_category(api, id, body).await,
        None => api::create_category(api, body).await,
    };

    match result {
        Ok(message) => Notice::success(message),
        Err(err) => {
            log::error!("[CATEGORY] save failed: {}", err);
            Notice::error(GENERIC_ERROR)
        }
    }
}

pub async fn remove_category<T: Transport>(api: &Api<T>, id: &str) -> Notice {
    match api::delete_category(api, id).await {
        Ok(message) => Notice::success(message),
        Err(err) => {
            log::error!("[CATEGORY] delete {} failed: {}", id, err);
            Notice::error(GENERIC_ERROR)
        }
    }
}

/// Create a subcategory under `parent`; incomplete forms never reach the network
pub async fn add_subcategory<T: Transport>(api: &Api<T>, parent: Option<&str>, form: &EntryForm) -> Notice {
    let Some(parent) = parent else {
        return Notice::warning(SELECT_CATEGORY_PROMPT);
    };
    let body = match form.to_complete_multipart() {
        Ok(body) => body,
        Err(err) => return Notice::warning(err.to_string()),
    };

    match api::create_subcategory(api, parent, body).await {
        Ok(message) => Notice::success(message),
        Err(err) => {
            log::error!("[SUBCATEGORY] create under {} failed: {}", parent, err);
            Notice::error(SUBCATEGORY_CREATE_ERROR)
        }
    }
}

pub async fn remove_subcategory<T: Transport>(api: &Api<T>, id: &str) -> Notice {
    match api::delete_subcategory(api, id).await {
        Ok(message) => Notice::success(message),
        Err(err) => {
            log::error!("[SUBCATEGORY] delete {} failed: {}", id, err);
            Notice::error(GENERIC_ERROR)
        }
    }
}
