//! In-memory backend used by API and action tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ApiRequest, FilePart, Method, Multipart, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, SubCategory};

pub fn png(file_name: &str) -> FilePart {
    FilePart {
        file_name: file_name.to_string(),
        mime: "image/png".to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

#[derive(Default)]
struct MockState {
    categories: Vec<Category>,
    subcategories: Vec<SubCategory>,
    next_category: u32,
    next_subcategory: u32,
    requests: Vec<ApiRequest>,
    fail_next: Option<ApiError>,
    /// Scheduler yields before the next GET answers
    get_delay: u32,
}

#[derive(Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    /// Categories get ids `c1`, `c2`, ... in order
    pub fn with_categories(names: &[&str]) -> Self {
        let backend = Self::default();
        {
            let mut state = backend.state.lock().unwrap();
            for name in names {
                state.next_category += 1;
                let id = format!("c{}", state.next_category);
                state.categories.push(Category {
                    id,
                    name: name.to_string(),
                    image: format!("https://cdn.test/{}.png", name.to_lowercase()),
                });
            }
        }
        backend
    }

    /// Returns the new subcategory id (`s1`, `s2`, ...)
    pub fn add_subcategory(&self, parent: &str, name: &str) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_subcategory += 1;
        let id = format!("s{}", state.next_subcategory);
        state.subcategories.push(SubCategory {
            id: id.clone(),
            name: name.to_string(),
            image: format!("https://cdn.test/{}.png", name.to_lowercase()),
            category_id: Some(parent.to_string()),
        });
        id
    }

    /// Answer the next GET from the current data, but only after yielding
    /// `yields` times, so other requests can overtake it.
    pub fn delay_next_get(&self, yields: u32) {
        self.state.lock().unwrap().get_delay = yields;
    }

    pub fn fail_next(&self, err: ApiError) {
        self.state.lock().unwrap().fail_next = Some(err);
    }

    /// Requests received for `method` on `path` (query string ignored)
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|req| req.method == method && req.path == path)
            .count()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn last_body(&self) -> Option<Multipart> {
        self.state
            .lock()
            .unwrap()
            .requests
            .last()
            .and_then(|req| req.body.clone())
    }
}

fn envelope(status: u16, message: &str, data: Value) -> Value {
    json!({ "statusCode": status, "message": message, "data": data })
}

fn not_found(what: &str) -> ApiError {
    ApiError::Http {
        status: 404,
        message: format!("{} not found", what),
    }
}

fn query_param(request: &ApiRequest, key: &str, default: u32) -> u32 {
    request
        .query
        .iter()
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(default)
}

fn uploaded_image(body: Option<&Multipart>) -> Option<String> {
    body.and_then(|b| b.get_file("image"))
        .map(|file| format!("https://cdn.test/{}", file.file_name))
}

fn name_field(body: Option<&Multipart>) -> String {
    body.and_then(|b| b.get_text("categoryName"))
        .unwrap_or_default()
        .to_string()
}

#[async_trait(?Send)]
impl Transport for MockBackend {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let delay = match request.method {
            Method::Get => std::mem::take(&mut self.state.lock().unwrap().get_delay),
            _ => 0,
        };
        let response = self.respond(request);
        for _ in 0..delay {
            tokio::task::yield_now().await;
        }
        response
    }
}

impl MockBackend {
    fn respond(&self, request: ApiRequest) -> ApiResult<Value> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        if let Some(err) = state.fail_next.take() {
            return Err(err);
        }

        let body = request.body.as_ref();
        let segments: Vec<&str> = request.path.trim_start_matches('/').split('/').collect();

        match (request.method, segments.as_slice()) {
            (Method::Get, ["categories"]) => {
                let page = query_param(&request, "page", 1).max(1);
                let limit = query_param(&request, "limit", 5).max(1);
                let total = state.categories.len() as u32;
                let pages = (total + limit - 1) / limit;
                let items: Vec<&Category> = state
                    .categories
                    .iter()
                    .skip(((page - 1) * limit) as usize)
                    .take(limit as usize)
                    .collect();
                Ok(envelope(
                    200,
                    "Categories retrieved successfully",
                    json!({
                        "categories": items,
                        "pagination": { "page": page, "limit": limit, "pages": pages, "total": total }
                    }),
                ))
            }
            (Method::Post, ["categories", "create"]) => {
                state.next_category += 1;
                let category = Category {
                    id: format!("c{}", state.next_category),
                    name: name_field(body),
                    image: uploaded_image(body).unwrap_or_default(),
                };
                state.categories.push(category.clone());
                Ok(envelope(201, "Category created successfully", json!(category)))
            }
            (Method::Get, ["admin", "category", id]) => {
                let category = state
                    .categories
                    .iter()
                    .find(|c| c.id == *id)
                    .cloned()
                    .ok_or_else(|| not_found("Category"))?;
                Ok(envelope(200, "Category retrieved", json!({ "attributes": category })))
            }
            (Method::Put, ["categories", id]) => {
                let name = name_field(body);
                let image = uploaded_image(body);
                let category = state
                    .categories
                    .iter_mut()
                    .find(|c| c.id == *id)
                    .ok_or_else(|| not_found("Category"))?;
                category.name = name;
                if let Some(image) = image {
                    category.image = image;
                }
                Ok(envelope(200, "Category updated successfully", json!(category.clone())))
            }
            (Method::Delete, ["categories", id]) => {
                let before = state.categories.len() + state.subcategories.len();
                state.categories.retain(|c| c.id != *id);
                state
                    .subcategories
                    .retain(|s| s.id != *id && s.category_id.as_deref() != Some(*id));
                if state.categories.len() + state.subcategories.len() == before {
                    return Err(not_found("Category"));
                }
                Ok(envelope(200, "Category deleted successfully", Value::Null))
            }
            (Method::Get, ["categories", parent, "subcategories"]) => {
                let subs: Vec<&SubCategory> = state
                    .subcategories
                    .iter()
                    .filter(|s| s.category_id.as_deref() == Some(*parent))
                    .collect();
                Ok(envelope(200, "Sub categories retrieved", json!({ "subCategories": subs })))
            }
            (Method::Post, ["categories", parent, "subcategories"]) => {
                state.next_subcategory += 1;
                let sub = SubCategory {
                    id: format!("s{}", state.next_subcategory),
                    name: name_field(body),
                    image: uploaded_image(body).unwrap_or_default(),
                    category_id: Some(parent.to_string()),
                };
                state.subcategories.push(sub.clone());
                Ok(envelope(201, "Sub category created successfully", json!(sub)))
            }
            _ => Err(not_found("Route")),
        }
    }
}
