//! Per-user cart contents, in memory.

use anyhow::Result;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::RwLock;

static CARTS: Lazy<RwLock<HashMap<String, Vec<String>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn lock_err<T>(_: T) -> anyhow::Error {
    anyhow::anyhow!("Cart store lock poisoned")
}

pub fn add_item(user_id: &str, product_id: &str) -> Result<usize> {
    let mut carts = CARTS.write().map_err(lock_err)?;
    let items = carts.entry(user_id.to_string()).or_default();
    items.push(product_id.to_string());
    Ok(items.len())
}

pub fn count_items(user_id: &str) -> Result<usize> {
    let carts = CARTS.read().map_err(lock_err)?;
    Ok(carts.get(user_id).map_or(0, Vec::len))
}
