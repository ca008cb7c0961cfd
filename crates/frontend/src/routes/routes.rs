use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::domain::a001_catalog::ui::catalog_page::CatalogPage;
use crate::domain::a001_catalog::ui::sellers_list::SellersList;
use crate::domain::a002_cart::ui::cart_page::CartPage;
use crate::layout::Shell;
use crate::system::auth::guard::RequireRole;
use crate::system::pages::admin::AdminPage;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::seller_dashboard::SellerDashboardPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="header__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/catalog") view=CatalogPage />
                <Route path=path!("/sellers") view=SellersList />
                <Route path=path!("/cart") view=CartPage />
                <Route path=path!("/login") view=LoginPage />
                <Route
                    path=path!("/admin")
                    view=|| view! {
                        <RequireRole role=Role::Admin>
                            <AdminPage />
                        </RequireRole>
                    }
                />
                <Route
                    path=path!("/dashboard")
                    view=|| view! {
                        <RequireRole role=Role::Seller>
                            <SellerDashboardPage />
                        </RequireRole>
                    }
                />
            </Routes>
        </Shell>
    }
}
