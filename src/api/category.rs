//! Category Endpoints
//!
//! Bindings for `/categories` and `/admin/category`.

use super::{encode_segment, into_data, Api, ApiRequest, CacheTag, Method, Multipart, Transport};
use crate::error::ApiResult;
use crate::models::{Category, CategoryDetails, CategoryPage};

pub async fn list_categories<T: Transport>(api: &Api<T>, page: u32, limit: u32) -> ApiResult<CategoryPage> {
    let request = ApiRequest::get("/categories")
        .query("page", page.max(1))
        .query("limit", limit);
    let res = api.query(request, &[CacheTag::Categories]).await?;
    into_data(res)
}

pub async fn get_category<T: Transport>(api: &Api<T>, id: &str) -> ApiResult<Category> {
    let request = ApiRequest::get(format!("/admin/category/{}", encode_segment(id)));
    let res = api.query::<CategoryDetails>(request, &[CacheTag::Categories]).await?;
    Ok(into_data(res)?.attributes)
}

/// Returns the server message on `201`
pub async fn create_category<T: Transport>(api: &Api<T>, body: Multipart) -> ApiResult<String> {
    let request = ApiRequest::new(Method::Post, "/categories/create").body(body);
    api.mutate(request, 201, &[CacheTag::Categories]).await
}

/// Returns the server message on `200`
pub async fn update_category<T: Transport>(api: &Api<T>, id: &str, body: Multipart) -> ApiResult<String> {
    let request = ApiRequest::new(Method::Put, format!("/categories/{}", encode_segment(id))).body(body);
    api.mutate(request, 200, &[CacheTag::Categories]).await
}

/// Deleting a category also drops its subcategories server-side
pub async fn delete_category<T: Transport>(api: &Api<T>, id: &str) -> ApiResult<String> {
    let request = ApiRequest::new(Method::Delete, format!("/categories/{}", encode_segment(id)));
    api.mutate(request, 200, &[CacheTag::Categories, CacheTag::SubCategories])
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{png, MockBackend};
    use crate::error::ApiError;

    fn new_category(name: &str) -> Multipart {
        Multipart::new().text("categoryName", name).file("image", png("shoes.png"))
    }

    #[tokio::test]
    async fn test_list_is_served_from_cache_until_invalidated() {
        let api = Api::new(MockBackend::with_categories(&["Shoes", "Bags"]));

        let first = list_categories(&api, 1, 10).await.unwrap();
        let second = list_categories(&api, 1, 10).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.transport().count(Method::Get, "/categories"), 1);
    }

    #[tokio::test]
    async fn test_create_triggers_exactly_one_refetch() {
        let api = Api::new(MockBackend::with_categories(&["Shoes"]));
        list_categories(&api, 1, 10).await.unwrap();

        let message = create_category(&api, new_category("Hats")).await.unwrap();
        assert_eq!(message, "Category created successfully");

        let page = list_categories(&api, 1, 10).await.unwrap();
        list_categories(&api, 1, 10).await.unwrap();

        assert_eq!(api.transport().count(Method::Get, "/categories"), 2);
        assert!(page.categories.iter().any(|c| c.name == "Hats"));
    }

    #[tokio::test]
    async fn test_list_answered_before_create_is_not_cached() {
        let api = Api::new(MockBackend::with_categories(&["Shoes"]));
        api.transport().delay_next_get(3);

        let (early, fresh) = tokio::join!(list_categories(&api, 1, 10), async {
            create_category(&api, new_category("Hats")).await.unwrap();
            list_categories(&api, 1, 10).await.unwrap()
        });
        let names = |page: &CategoryPage| page.categories.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&early.unwrap()), vec!["Shoes"]);
        assert_eq!(names(&fresh), vec!["Shoes", "Hats"]);

        let next = list_categories(&api, 1, 10).await.unwrap();

        assert_eq!(names(&next), vec!["Shoes", "Hats"]);
        assert_eq!(api.transport().count(Method::Get, "/categories"), 2);
    }

    #[tokio::test]
    async fn test_create_sends_name_and_image_fields() {
        let api = Api::new(MockBackend::default());
        create_category(&api, new_category("Hats")).await.unwrap();

        let body = api.transport().last_body().unwrap();
        assert_eq!(body.get_text("categoryName"), Some("Hats"));
        assert_eq!(body.get_file("image").unwrap().file_name, "shoes.png");
    }

    #[tokio::test]
    async fn test_delete_removes_from_next_refetch() {
        let api = Api::new(MockBackend::with_categories(&["Shoes", "Bags"]));
        let page = list_categories(&api, 1, 10).await.unwrap();
        let shoes = page.categories[0].id.clone();

        delete_category(&api, &shoes).await.unwrap();
        let page = list_categories(&api, 1, 10).await.unwrap();

        assert!(page.categories.iter().all(|c| c.id != shoes));
        assert_eq!(page.categories.len(), 1);
    }

    #[tokio::test]
    async fn test_update_without_new_image_keeps_remote_image() {
        let api = Api::new(MockBackend::with_categories(&["Shoes"]));
        let before = list_categories(&api, 1, 10).await.unwrap().categories[0].clone();

        update_category(&api, &before.id, Multipart::new().text("categoryName", "Boots"))
            .await
            .unwrap();
        let after = list_categories(&api, 1, 10).await.unwrap().categories[0].clone();

        assert_eq!(after.name, "Boots");
        assert_eq!(after.image, before.image);
    }

    #[tokio::test]
    async fn test_get_category_reads_attributes() {
        let api = Api::new(MockBackend::with_categories(&["Shoes"]));
        let id = list_categories(&api, 1, 10).await.unwrap().categories[0].id.clone();

        let category = get_category(&api, &id).await.unwrap();
        assert_eq!(category.name, "Shoes");
    }

    #[tokio::test]
    async fn test_pagination_metadata() {
        let api = Api::new(MockBackend::with_categories(&["A", "B", "C", "D", "E"]));

        let page = list_categories(&api, 3, 2).await.unwrap();

        assert_eq!(page.pagination.pages, 3);
        assert_eq!(page.categories.len(), 1);
        assert_eq!(page.categories[0].name, "E");
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_invalidate() {
        let api = Api::new(MockBackend::with_categories(&["Shoes"]));
        list_categories(&api, 1, 10).await.unwrap();
        api.transport().fail_next(ApiError::Network("offline".into()));

        let err = create_category(&api, new_category("Hats")).await.unwrap_err();
        list_categories(&api, 1, 10).await.unwrap();

        assert_eq!(err, ApiError::Network("offline".into()));
        assert_eq!(api.transport().count(Method::Get, "/categories"), 1);
    }

    #[tokio::test]
    async fn test_invalidate_hook_sees_tags() {
        use std::sync::{Arc, Mutex};

        let api = Api::new(MockBackend::with_categories(&["Shoes"]));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        api.on_invalidate(move |tags| sink.lock().unwrap().extend_from_slice(tags));

        let id = list_categories(&api, 1, 10).await.unwrap().categories[0].id.clone();
        delete_category(&api, &id).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![CacheTag::Categories, CacheTag::SubCategories]);
    }
}
