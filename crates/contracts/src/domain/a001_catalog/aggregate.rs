use serde::{Deserialize, Serialize};

/// Product category shown in the filter sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: String,
    pub category_name: String,
}

/// Artisan selling on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub seller_id: String,
    /// Price in cents
    pub price_cents: u64,
    pub image_url: Option<String>,
}

impl Product {
    /// "$12.50" style price for display.
    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price() {
        let p = Product {
            id: "p1".into(),
            name: "Mug".into(),
            description: String::new(),
            category_id: "pottery".into(),
            seller_id: "s1".into(),
            price_cents: 7_499,
            image_url: None,
        };
        assert_eq!(p.display_price(), "$74.99");
    }
}
