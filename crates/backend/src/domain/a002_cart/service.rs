use anyhow::Result;
use contracts::domain::a002_cart::CartCount;

use super::repository;
use crate::domain::a001_catalog::service as catalog_service;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub fn count(user_id: &str) -> Result<CartCount> {
    let count = repository::count_items(user_id)?;
    Ok(CartCount {
        count: count as u32,
    })
}

pub fn add_item(user_id: &str, product_id: &str) -> Result<CartCount, CartError> {
    if !catalog_service::product_exists(product_id) {
        return Err(CartError::UnknownProduct(product_id.to_string()));
    }
    let count = repository::add_item(user_id, product_id)?;
    Ok(CartCount {
        count: count as u32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_counts_zero() {
        assert_eq!(count("cart-user-empty").unwrap().count, 0);
    }

    #[test]
    fn test_add_items() {
        assert_eq!(add_item("cart-user-1", "p-001").unwrap().count, 1);
        assert_eq!(add_item("cart-user-1", "p-001").unwrap().count, 2);
        assert_eq!(count("cart-user-1").unwrap().count, 2);
        assert_eq!(count("cart-user-2").unwrap().count, 0);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        assert!(matches!(
            add_item("cart-user-3", "p-missing"),
            Err(CartError::UnknownProduct(_))
        ));
        assert_eq!(count("cart-user-3").unwrap().count, 0);
    }
}
