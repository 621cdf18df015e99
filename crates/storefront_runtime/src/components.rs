//! Storefront shell components.
//!
//! Everything here reads state through [`crate::runtime_context::StorefrontContext`]
//! and mutates it only by dispatching reducer actions. Overlays render from
//! `state.open_overlay`, so the markup can never disagree with the store about
//! what is open.

mod cart;
mod catalog_grid;
mod checkout;
mod engagement;
mod header;
mod search;
mod toasts;

use leptos::*;

use crate::catalog;
use crate::model::{Overlay, Product, SortKey};
use crate::pricing::format_price;
use crate::reducer::StoreAction;
use crate::runtime_context::use_storefront;

use cart::CartDrawer;
use catalog_grid::{CategoryTabs, ProductGrid, SortSelect};
use checkout::CheckoutModal;
use engagement::{CompareModal, ProductDetailsModal, WishlistDrawer};
use header::SiteHeader;
use search::{FiltersModal, SearchOverlay};
use toasts::{LiveAnnouncer, ToastStack};

/// Full storefront surface: header, catalog, overlay layer, and toasts.
#[component]
pub fn StorefrontShell() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.get_untracked().open_overlay.is_some() {
            runtime.dispatch_ui("close-overlay", None);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let theme_class = move || format!("storefront theme-{}", state.get().theme.resolved().id());

    view! {
        <div class=theme_class>
            <SiteHeader/>
            <main class="catalog">
                <div class="catalog-controls">
                    <CategoryTabs/>
                    <SortSelect/>
                </div>
                <ProductGrid/>
            </main>
            <SiteFooter/>
            <OverlayLayer/>
            <ToastStack/>
            <LiveAnnouncer/>
        </div>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    let runtime = use_storefront();
    let email = create_rw_signal(String::new());

    view! {
        <footer class="site-footer">
            <form
                class="newsletter-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    runtime.dispatch_ui("subscribe-newsletter", Some(email.get_untracked().as_str()));
                    email.set(String::new());
                }
            >
                <label>
                    "Get offers by email"
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Subscribe"</button>
            </form>
        </footer>
    }
}

#[component]
fn OverlayLayer() -> impl IntoView {
    let runtime = use_storefront();
    let open = move || runtime.state.get().open_overlay;

    view! {
        {move || match open() {
            None => ().into_view(),
            Some(Overlay::Cart) => view! { <CartDrawer/> }.into_view(),
            Some(Overlay::Wishlist) => view! { <WishlistDrawer/> }.into_view(),
            Some(Overlay::Search) => view! { <SearchOverlay/> }.into_view(),
            Some(Overlay::Filters) => view! { <FiltersModal/> }.into_view(),
            Some(Overlay::Compare) => view! { <CompareModal/> }.into_view(),
            Some(Overlay::ProductDetails(product_id)) => {
                view! { <ProductDetailsModal product_id/> }.into_view()
            }
            Some(Overlay::Checkout) => view! { <CheckoutModal/> }.into_view(),
        }}
    }
}

/// Backdrop plus close button shared by every modal-style overlay.
#[component]
fn OverlayChrome(
    container_id: &'static str,
    title: String,
    children: Children,
) -> impl IntoView {
    let runtime = use_storefront();
    let close = move |_| runtime.dispatch_ui("close-overlay", None);

    view! {
        <div class="overlay-backdrop" on:mousedown=close></div>
        <section id=container_id class="overlay" role="dialog" aria-modal="true" aria-label=title.clone()>
            <header class="overlay-header">
                <h2>{title}</h2>
                <button class="icon-button" aria-label="Close" data-action="close-overlay" on:click=close>
                    "\u{2715}"
                </button>
            </header>
            {children()}
        </section>
    }
}

/// Star rating rendered as text, e.g. `★★★★☆ 4.5 (128)`.
fn rating_summary(rating: f64, review_count: u32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    let stars: String = "\u{2605}".repeat(full) + &"\u{2606}".repeat(5 - full);
    format!("{stars} {rating} ({review_count})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_summary_rounds_to_whole_stars() {
        assert_eq!(rating_summary(4.5, 128), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605} 4.5 (128)");
        assert_eq!(rating_summary(4.2, 38), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606} 4.2 (38)");
        assert_eq!(rating_summary(0.0, 0), "\u{2606}\u{2606}\u{2606}\u{2606}\u{2606} 0 (0)");
    }
}
