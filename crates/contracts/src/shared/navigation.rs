//! Storefront navigation model: the link list, active-route matching and
//! the cart badge rule.

use crate::system::auth::routing::{CART_PATH, CATALOG_PATH, HOME_PATH, SELLERS_PATH};

/// Viewport width (px) from which the full navigation is shown.
pub const WIDE_VIEWPORT_MIN_WIDTH: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    pub is_cart: bool,
}

impl NavLink {
    /// Exact path match; `/catalog/42` does not activate `/catalog`.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: HOME_PATH,
        icon: "house",
        is_cart: false,
    },
    NavLink {
        label: "Catalog",
        href: CATALOG_PATH,
        icon: "book-image",
        is_cart: false,
    },
    NavLink {
        label: "Artisans",
        href: SELLERS_PATH,
        icon: "package",
        is_cart: false,
    },
    NavLink {
        label: "Cart",
        href: CART_PATH,
        icon: "shopping-cart",
        is_cart: true,
    },
];

/// Badge text for the cart entry; no badge at all for an empty cart.
pub fn cart_badge(count: u32) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

/// Mobile menu state after a viewport resize. Reaching the wide layout
/// closes the menu; shrinking never opens it.
pub fn menu_open_after_resize(open: bool, viewport_width: f64) -> bool {
    if viewport_width >= WIDE_VIEWPORT_MIN_WIDTH {
        false
    } else {
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_badge() {
        assert_eq!(cart_badge(0), None);
        assert_eq!(cart_badge(3), Some("3".to_string()));
    }

    #[test]
    fn test_active_is_exact_match() {
        let catalog = NAV_LINKS[1];
        assert!(catalog.is_active("/catalog"));
        assert!(!catalog.is_active("/catalog/42"));
        let home = NAV_LINKS[0];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/catalog"));
    }

    #[test]
    fn test_only_cart_entry_is_flagged() {
        let carts: Vec<_> = NAV_LINKS.iter().filter(|l| l.is_cart).collect();
        assert_eq!(carts.len(), 1);
        assert_eq!(carts[0].href, "/cart");
    }

    #[test]
    fn test_resize_closes_menu_only_when_wide() {
        assert!(!menu_open_after_resize(true, 768.0));
        assert!(!menu_open_after_resize(true, 1280.0));
        assert!(menu_open_after_resize(true, 500.0));
        assert!(!menu_open_after_resize(false, 500.0));
    }
}
