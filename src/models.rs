//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "categoryName", default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// SubCategory data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "categoryName", default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    /// Owning category; not every backend response includes it
    #[serde(rename = "categoryId", alias = "category", default)]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    /// Total number of pages
    #[serde(default)]
    pub pages: u32,
    /// Total number of categories
    #[serde(default)]
    pub total: u32,
}

/// `data` of the category list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryPage {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// `data` of the subcategory list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubCategoryList {
    #[serde(rename = "subCategories", default)]
    pub sub_categories: Vec<SubCategory>,
}

/// `data` of the single-category response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryDetails {
    pub attributes: Category,
}

/// Envelope every backend response is wrapped in
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_category_page() {
        let body = json!({
            "statusCode": 200,
            "message": "Categories retrieved",
            "data": {
                "categories": [
                    { "_id": "c1", "categoryName": "Shoes", "image": "https://cdn.test/shoes.png" }
                ],
                "pagination": { "page": 1, "limit": 10, "pages": 3, "total": 21 }
            }
        });

        let res: ApiResponse<CategoryPage> = serde_json::from_value(body).unwrap();
        let page = res.data.unwrap();
        assert_eq!(res.status_code, 200);
        assert_eq!(page.categories[0].name, "Shoes");
        assert_eq!(page.pagination.pages, 3);
    }

    #[test]
    fn test_decode_subcategory_with_plain_id() {
        let body = json!({
            "subCategories": [
                { "id": "s1", "categoryName": "Sneakers", "image": "x.png", "categoryId": "c1" }
            ]
        });

        let list: SubCategoryList = serde_json::from_value(body).unwrap();
        assert_eq!(list.sub_categories[0].id, "s1");
        assert_eq!(list.sub_categories[0].category_id.as_deref(), Some("c1"));
    }

    #[test]
    fn test_missing_pagination_defaults_to_zero_pages() {
        let page: CategoryPage = serde_json::from_value(json!({ "categories": [] })).unwrap();
        assert_eq!(page.pagination.pages, 0);
    }
}
