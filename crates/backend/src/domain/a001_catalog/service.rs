use super::repository;
use contracts::domain::a001_catalog::aggregate::{Category, Product, Seller};
use contracts::domain::a001_catalog::filter::FilterSelection;

pub fn list_categories() -> Vec<Category> {
    repository::list_categories()
}

pub fn list_sellers() -> Vec<Seller> {
    repository::list_sellers()
}

/// Products matching the filter, cheapest first.
pub fn list_products(filter: &FilterSelection) -> Vec<Product> {
    let mut products: Vec<Product> = repository::list_products()
        .into_iter()
        .filter(|p| filter.matches(&p.category_id, &p.seller_id, p.price_cents))
        .collect();
    products.sort_by(|a, b| a.price_cents.cmp(&b.price_cents).then_with(|| a.name.cmp(&b.name)));
    products
}

pub fn product_exists(id: &str) -> bool {
    repository::get_product(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_no_filter_returns_everything_sorted() {
        let all = list_products(&FilterSelection::default());
        assert_eq!(all.len(), repository::list_products().len());
        assert!(all.windows(2).all(|w| w[0].price_cents <= w[1].price_cents));
    }

    #[test]
    fn test_filter_by_category_and_price() {
        let filter = FilterSelection::from_query("categories=pottery&price=25-75");
        assert_eq!(ids(&list_products(&filter)), vec!["p-002"]);
    }

    #[test]
    fn test_filter_by_several_sellers() {
        let filter =
            FilterSelection::from_query("sellers=s-oak-and-ash&sellers=s-silver-thread&price=above-150");
        assert_eq!(ids(&list_products(&filter)), vec!["p-008"]);
    }

    #[test]
    fn test_bucket_edges() {
        // 75.00 belongs to the 75-150 bucket
        let filter = FilterSelection::from_query("price=75-150");
        assert!(ids(&list_products(&filter)).contains(&"p-006"));
        let filter = FilterSelection::from_query("price=25-75");
        assert!(!ids(&list_products(&filter)).contains(&"p-006"));
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let filter = FilterSelection::from_query("categories=furniture");
        assert!(list_products(&filter).is_empty());
    }
}
