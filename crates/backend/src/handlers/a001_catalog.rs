use axum::{extract::RawQuery, Json};
use contracts::domain::a001_catalog::aggregate::{Category, Product, Seller};
use contracts::domain::a001_catalog::filter::FilterSelection;

use crate::domain::a001_catalog;

/// GET /api/catalog/categories
pub async fn list_categories() -> Json<Vec<Category>> {
    Json(a001_catalog::service::list_categories())
}

/// GET /api/catalog/sellers
pub async fn list_sellers() -> Json<Vec<Seller>> {
    Json(a001_catalog::service::list_sellers())
}

/// GET /api/catalog/products?categories=..&sellers=..&price=..
///
/// Reads the same query keys the catalog page keeps in its URL.
pub async fn list_products(RawQuery(query): RawQuery) -> Json<Vec<Product>> {
    let filter = FilterSelection::from_query(query.as_deref().unwrap_or_default());
    tracing::debug!("Product listing with filter {:?}", filter);
    Json(a001_catalog::service::list_products(&filter))
}
