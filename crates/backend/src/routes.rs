use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        // ========================================
        // CATALOG (PUBLIC)
        // ========================================
        .route(
            "/api/catalog/categories",
            get(handlers::a001_catalog::list_categories),
        )
        .route(
            "/api/catalog/sellers",
            get(handlers::a001_catalog::list_sellers),
        )
        .route(
            "/api/catalog/products",
            get(handlers::a001_catalog::list_products),
        )
        // ========================================
        // CART (PROTECTED)
        // ========================================
        .route(
            "/api/cart/count",
            get(handlers::a002_cart::count)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
        .route(
            "/api/cart/items",
            post(handlers::a002_cart::add_item)
                .layer(middleware::from_fn(system::auth::middleware::require_auth)),
        )
}
