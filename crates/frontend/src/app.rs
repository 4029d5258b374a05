use crate::domain::a001_product::ui::catalog::ProductCatalogPage;
use crate::shared::config::load_app_config;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_app_config();

    // Status messages are shared by every page through context.
    provide_context(ToastService::new(config.notifications));

    view! {
        <main class="app-main">
            <ProductCatalogPage />
        </main>
        <ToastHost />
    }
}
