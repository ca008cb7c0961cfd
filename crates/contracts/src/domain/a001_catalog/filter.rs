use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::shared::query_string::QueryPairs;

pub const CATEGORIES_KEY: &str = "categories";
pub const SELLERS_KEY: &str = "sellers";
pub const PRICE_KEY: &str = "price";

/// Old links carry this literal for the second bucket.
const LEGACY_25_TO_75: &str = "25-7499";

// ============================================================================
// Price buckets
// ============================================================================

/// Price bucket offered by the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceRange {
    #[serde(rename = "under-25")]
    Under25,
    #[serde(rename = "25-75")]
    From25To75,
    #[serde(rename = "75-150")]
    From75To150,
    #[serde(rename = "above-150")]
    Above150,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Under25,
        PriceRange::From25To75,
        PriceRange::From75To150,
        PriceRange::Above150,
    ];

    /// Value written to the `price` query key.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            PriceRange::Under25 => "under-25",
            PriceRange::From25To75 => "25-75",
            PriceRange::From75To150 => "75-150",
            PriceRange::Above150 => "above-150",
        }
    }

    /// Strict parse; unknown values yield `None`.
    pub fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "under-25" => Some(PriceRange::Under25),
            "25-75" | LEGACY_25_TO_75 => Some(PriceRange::From25To75),
            "75-150" => Some(PriceRange::From75To150),
            "above-150" => Some(PriceRange::Above150),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Under25 => "Under $25",
            PriceRange::From25To75 => "$25 - $74.99",
            PriceRange::From75To150 => "$75 - $150",
            PriceRange::Above150 => "Above $150",
        }
    }

    /// Whether a price in cents falls into this bucket.
    /// Buckets: [0, 25), [25, 75), [75, 150], (150, inf) dollars.
    pub fn contains_cents(&self, cents: u64) -> bool {
        match self {
            PriceRange::Under25 => cents < 2_500,
            PriceRange::From25To75 => (2_500..7_500).contains(&cents),
            PriceRange::From75To150 => (7_500..=15_000).contains(&cents),
            PriceRange::Above150 => cents > 15_000,
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

// ============================================================================
// Filter selection
// ============================================================================

/// Categories, sellers and price bucket chosen in the catalog sidebar.
///
/// The URL query string is the source of truth; a selection is always
/// decoded from it and written back with [`FilterSelection::merge_into_query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub categories: BTreeSet<String>,
    pub sellers: BTreeSet<String>,
    pub price: Option<PriceRange>,
}

impl FilterSelection {
    /// Decode from a query string (with or without the leading `?`).
    pub fn from_query(query: &str) -> Self {
        Self::from_pairs(&QueryPairs::parse(query))
    }

    pub fn from_pairs(pairs: &QueryPairs) -> Self {
        Self {
            categories: pairs.get_all(CATEGORIES_KEY).map(str::to_string).collect(),
            sellers: pairs.get_all(SELLERS_KEY).map(str::to_string).collect(),
            price: pairs.get(PRICE_KEY).and_then(PriceRange::from_query_value),
        }
    }

    /// Rewrite the three filter keys of `query`, keeping every other pair
    /// where it was. The result has no leading `?`.
    pub fn merge_into_query(&self, query: &str) -> String {
        let mut pairs = QueryPairs::parse(query);

        pairs.remove(CATEGORIES_KEY);
        for id in &self.categories {
            pairs.append(CATEGORIES_KEY, id.as_str());
        }

        pairs.remove(SELLERS_KEY);
        for id in &self.sellers {
            pairs.append(SELLERS_KEY, id.as_str());
        }

        pairs.remove(PRICE_KEY);
        if let Some(price) = self.price {
            pairs.append(PRICE_KEY, price.as_query_value());
        }

        pairs.to_query_string()
    }

    /// Standalone encoding of the selection.
    pub fn to_query(&self) -> String {
        self.merge_into_query("")
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.sellers.is_empty() && self.price.is_none()
    }

    pub fn toggle_category(&mut self, id: &str) {
        toggle(&mut self.categories, id);
    }

    pub fn toggle_seller(&mut self, id: &str) {
        toggle(&mut self.sellers, id);
    }

    pub fn set_price(&mut self, price: Option<PriceRange>) {
        self.price = price;
    }

    /// Product matching used by the catalog listing. Empty sets match all.
    pub fn matches(&self, category_id: &str, seller_id: &str, price_cents: u64) -> bool {
        (self.categories.is_empty() || self.categories.contains(category_id))
            && (self.sellers.is_empty() || self.sellers.contains(seller_id))
            && self.price.map_or(true, |p| p.contains_cents(price_cents))
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decode_scenario() {
        let f = FilterSelection::from_query("?categories=c1&categories=c2&price=75-150");
        assert_eq!(f.categories, set(&["c1", "c2"]));
        assert!(f.sellers.is_empty());
        assert_eq!(f.price, Some(PriceRange::From75To150));
    }

    #[test]
    fn test_decode_empty_query() {
        let f = FilterSelection::from_query("");
        assert!(f.is_empty());
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let f = FilterSelection::from_query("sellers=s1&sellers=s1");
        assert_eq!(f.sellers, set(&["s1"]));
    }

    #[test]
    fn test_unknown_price_is_ignored() {
        let f = FilterSelection::from_query("price=under-5");
        assert_eq!(f.price, None);
        assert_eq!(f.merge_into_query("price=under-5"), "");
    }

    #[test]
    fn test_legacy_price_literal_is_normalized() {
        let f = FilterSelection::from_query("price=25-7499");
        assert_eq!(f.price, Some(PriceRange::From25To75));
        assert_eq!(f.to_query(), "price=25-75");
    }

    #[test]
    fn test_first_price_wins() {
        let f = FilterSelection::from_query("price=above-150&price=under-25");
        assert_eq!(f.price, Some(PriceRange::Above150));
    }

    #[test]
    fn test_round_trip() {
        let mut f = FilterSelection::default();
        f.toggle_category("pottery");
        f.toggle_category("glass & stone");
        f.toggle_seller("s-42");
        f.set_price(Some(PriceRange::Under25));

        let decoded = FilterSelection::from_query(&f.to_query());
        assert_eq!(decoded, f);
    }

    #[test]
    fn test_round_trip_empty_selection() {
        let empty = FilterSelection::default();
        assert_eq!(empty.to_query(), "");
        assert_eq!(FilterSelection::from_query(&empty.to_query()), empty);
    }

    #[test]
    fn test_round_trip_reserved_and_non_ascii_ids() {
        let mut f = FilterSelection::default();
        for id in ["a+b", "100%", "k=v", "x&y", "with space", "céramique", "陶器"] {
            f.toggle_category(id);
            f.toggle_seller(id);
        }

        let query = f.to_query();
        assert!(!query.contains('+'));
        assert!(!query.contains(' '));
        assert_eq!(FilterSelection::from_query(&query), f);
    }

    #[test]
    fn test_round_trip_every_price_range() {
        for range in PriceRange::ALL {
            let mut f = FilterSelection::default();
            f.set_price(Some(range));
            f.toggle_seller("s1");
            let decoded = FilterSelection::from_query(&f.to_query());
            assert_eq!(decoded, f, "{:?}", range);
        }
    }

    #[test]
    fn test_merge_preserves_unrelated_keys() {
        let mut f = FilterSelection::from_query("page=2&categories=a&sort=new");
        f.toggle_category("b");
        let query = f.merge_into_query("page=2&categories=a&sort=new");
        assert_eq!(query, "page=2&sort=new&categories=a&categories=b");
    }

    #[test]
    fn test_merge_drops_price_when_cleared() {
        let mut f = FilterSelection::from_query("price=75-150&q=bowl");
        f.set_price(None);
        assert_eq!(f.merge_into_query("price=75-150&q=bowl"), "q=bowl");
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let original = FilterSelection::from_query("categories=a&categories=b");
        let mut f = original.clone();
        f.toggle_category("c");
        assert_eq!(f.categories, set(&["a", "b", "c"]));
        f.toggle_category("c");
        assert_eq!(f, original);

        f.toggle_category("a");
        assert_eq!(f.categories, set(&["b"]));
        f.toggle_category("a");
        assert_eq!(f, original);
    }

    #[test]
    fn test_price_buckets() {
        assert!(PriceRange::Under25.contains_cents(2_499));
        assert!(!PriceRange::Under25.contains_cents(2_500));
        assert!(PriceRange::From25To75.contains_cents(2_500));
        assert!(PriceRange::From25To75.contains_cents(7_499));
        assert!(PriceRange::From75To150.contains_cents(15_000));
        assert!(!PriceRange::Above150.contains_cents(15_000));
        assert!(PriceRange::Above150.contains_cents(15_001));
    }

    #[test]
    fn test_price_serde_uses_query_values() {
        for p in PriceRange::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_query_value()));
            assert_eq!(PriceRange::from_query_value(p.as_query_value()), Some(p));
        }
    }

    #[test]
    fn test_matches() {
        let f = FilterSelection::from_query("categories=jewelry&price=under-25");
        assert!(f.matches("jewelry", "any", 1_000));
        assert!(!f.matches("pottery", "any", 1_000));
        assert!(!f.matches("jewelry", "any", 3_000));
        assert!(FilterSelection::default().matches("x", "y", 99_999));
    }
}
