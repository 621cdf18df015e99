use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use storefront_runtime::{StoreProvider, StorefrontShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Atheel Furniture" />
        <Meta name="description" content="Furniture storefront with cart, wishlist, and compare." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=StorefrontEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn StorefrontEntry() -> impl IntoView {
    view! {
        <StoreProvider>
            <StorefrontShell />
        </StoreProvider>
    }
}
