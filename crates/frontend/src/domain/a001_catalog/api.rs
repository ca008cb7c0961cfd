use contracts::domain::a001_catalog::aggregate::{Category, Product, Seller};
use contracts::shared::query_string::join_path_and_query;

use crate::shared::api_utils::{get_json, ApiError};

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json("/api/catalog/categories", None).await
}

pub async fn fetch_sellers() -> Result<Vec<Seller>, ApiError> {
    get_json("/api/catalog/sellers", None).await
}

/// Products matching the filter keys in `query`.
pub async fn fetch_products(query: &str) -> Result<Vec<Product>, ApiError> {
    get_json(&join_path_and_query("/api/catalog/products", query), None).await
}
