//! Seeded in-memory catalog.

use contracts::domain::a001_catalog::aggregate::{Category, Product, Seller};
use once_cell::sync::Lazy;

struct CatalogData {
    categories: Vec<Category>,
    sellers: Vec<Seller>,
    products: Vec<Product>,
}

static CATALOG: Lazy<CatalogData> = Lazy::new(seed);

fn category(id: &str, name: &str) -> Category {
    Category {
        category_id: id.to_string(),
        category_name: name.to_string(),
    }
}

fn seller(id: &str, name: &str) -> Seller {
    Seller {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn product(id: &str, name: &str, category_id: &str, seller_id: &str, price_cents: u64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Handmade {}", name.to_lowercase()),
        category_id: category_id.to_string(),
        seller_id: seller_id.to_string(),
        price_cents,
        image_url: None,
    }
}

fn seed() -> CatalogData {
    CatalogData {
        categories: vec![
            category("pottery", "Pottery"),
            category("jewelry", "Jewelry"),
            category("textiles", "Textiles"),
            category("woodwork", "Woodwork"),
        ],
        sellers: vec![
            seller("s-clay-studio", "Clay Studio"),
            seller("s-silver-thread", "Silver Thread"),
            seller("s-oak-and-ash", "Oak & Ash"),
        ],
        products: vec![
            product("p-001", "Stoneware Mug", "pottery", "s-clay-studio", 1_800),
            product("p-002", "Serving Bowl", "pottery", "s-clay-studio", 6_400),
            product("p-003", "Glazed Vase", "pottery", "s-clay-studio", 12_000),
            product("p-004", "Silver Ring", "jewelry", "s-silver-thread", 4_500),
            product("p-005", "Beaded Necklace", "jewelry", "s-silver-thread", 2_200),
            product("p-006", "Wool Scarf", "textiles", "s-silver-thread", 7_500),
            product("p-007", "Walnut Cutting Board", "woodwork", "s-oak-and-ash", 8_900),
            product("p-008", "Oak Dining Table", "woodwork", "s-oak-and-ash", 98_000),
        ],
    }
}

pub fn list_categories() -> Vec<Category> {
    CATALOG.categories.clone()
}

pub fn list_sellers() -> Vec<Seller> {
    CATALOG.sellers.clone()
}

pub fn list_products() -> Vec<Product> {
    CATALOG.products.clone()
}

pub fn get_product(id: &str) -> Option<Product> {
    CATALOG.products.iter().find(|p| p.id == id).cloned()
}
