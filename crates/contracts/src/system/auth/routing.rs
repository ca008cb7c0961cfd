//! Where to send a user after sign-in.

use super::Role;

pub const HOME_PATH: &str = "/";
pub const CATALOG_PATH: &str = "/catalog";
pub const SELLERS_PATH: &str = "/sellers";
pub const CART_PATH: &str = "/cart";
pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_PATH: &str = "/admin";
pub const SELLER_DASHBOARD_PATH: &str = "/dashboard";

/// Query key carrying the page to return to after login.
pub const REDIRECT_TO_KEY: &str = "redirectTo";

/// Placeholder values that mean "no redirect target".
const REDIRECT_SENTINELS: [&str; 4] = ["", "null", "undefined", LOGIN_PATH];

/// The redirect target, unless it is absent or a sentinel.
pub fn redirect_target(raw: Option<&str>) -> Option<&str> {
    raw.filter(|target| !REDIRECT_SENTINELS.contains(target))
}

/// Default landing page for a role.
pub fn landing_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_PATH,
        Role::Seller => SELLER_DASHBOARD_PATH,
        Role::Customer => HOME_PATH,
    }
}

/// Post-login destination: an explicit redirect target wins over the role.
pub fn resolve_destination(redirect_to: Option<&str>, role: Role) -> String {
    match redirect_target(redirect_to) {
        Some(target) => target.to_string(),
        None => landing_path(role).to_string(),
    }
}

/// Login page URL that returns to `return_to` after sign-in.
pub fn login_url_returning_to(return_to: &str) -> String {
    if redirect_target(Some(return_to)).is_none() {
        return LOGIN_PATH.to_string();
    }
    format!(
        "{}?{}={}",
        LOGIN_PATH,
        REDIRECT_TO_KEY,
        urlencoding::encode(return_to)
    )
}
