//! SubCategory Endpoints
//!
//! Subcategories are listed and created under their parent category and
//! deleted through the category endpoint.

use super::{encode_segment, into_data, Api, ApiRequest, CacheTag, Method, Multipart, Transport};
use crate::error::ApiResult;
use crate::models::SubCategory;

pub async fn list_subcategories<T: Transport>(api: &Api<T>, category_id: &str) -> ApiResult<Vec<SubCategory>> {
    let request = ApiRequest::get(format!("/categories/{}/subcategories", encode_segment(category_id)));
    let res = api.query(request, &[CacheTag::SubCategories]).await?;
    Ok(into_data::<crate::models::SubCategoryList>(res)?.sub_categories)
}

/// Returns the server message on `201`
pub async fn create_subcategory<T: Transport>(api: &Api<T>, category_id: &str, body: Multipart) -> ApiResult<String> {
    let request = ApiRequest::new(
        Method::Post,
        format!("/categories/{}/subcategories", encode_segment(category_id)),
    )
    .body(body);
    api.mutate(request, 201, &[CacheTag::SubCategories]).await
}

/// Returns the server message on `200`
pub async fn delete_subcategory<T: Transport>(api: &Api<T>, id: &str) -> ApiResult<String> {
    let request = ApiRequest::new(Method::Delete, format!("/categories/{}", encode_segment(id)));
    api.mutate(request, 200, &[CacheTag::SubCategories, CacheTag::Categories])
        .await
}
