use contracts::domain::a002_cart::{AddToCartRequest, CartCount};

use crate::shared::api_utils::{get_json, post_json, ApiError};

pub async fn fetch_count(access_token: &str) -> Result<CartCount, ApiError> {
    get_json("/api/cart/count", Some(access_token)).await
}

/// Add one unit of a product; returns the new item count.
pub async fn add_item(access_token: &str, product_id: String) -> Result<CartCount, ApiError> {
    post_json(
        "/api/cart/items",
        &AddToCartRequest { product_id },
        Some(access_token),
    )
    .await
}
