use axum::{http::StatusCode, Json};
use contracts::domain::a002_cart::{AddToCartRequest, CartCount};

use crate::domain::a002_cart::service::{self, CartError};
use crate::system::auth::extractor::CurrentUser;

/// GET /api/cart/count
pub async fn count(CurrentUser(claims): CurrentUser) -> Result<Json<CartCount>, StatusCode> {
    service::count(&claims.sub).map(Json).map_err(|e| {
        tracing::error!("Cart count failed: {:#}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// POST /api/cart/items
pub async fn add_item(
    CurrentUser(claims): CurrentUser,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartCount>, StatusCode> {
    match service::add_item(&claims.sub, &request.product_id) {
        Ok(count) => Ok(Json(count)),
        Err(CartError::UnknownProduct(id)) => {
            tracing::warn!("Add to cart: unknown product '{}'", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(CartError::Internal(e)) => {
            tracing::error!("Add to cart failed: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
