pub mod header;
pub mod nav;

use header::Header;
use leptos::prelude::*;

/// Page frame: header with navigation above the routed content.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
