use super::*;

#[component]
pub(super) fn SiteHeader() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let cart_count = move || state.get().cart_item_count();
    let wishlist_count = move || state.get().wishlist.len();
    let compare_count = move || state.get().compare.len();
    let filter_count = move || state.get().filters.active_count();
    let theme_icon = move || match state.get().theme.resolved() {
        storefront_host::ColorScheme::Light => "\u{263e}",
        storefront_host::ColorScheme::Dark => "\u{2600}",
    };

    view! {
        <header class="site-header">
            <a class="logo" href="/">"Atheel Furniture"</a>
            <nav class="header-actions">
                <button
                    class="icon-button"
                    aria-label="Toggle theme"
                    on:click=move |_| runtime.dispatch_ui("toggle-theme", None)
                >
                    {theme_icon}
                </button>
                <button
                    class="icon-button"
                    aria-label="Search"
                    on:click=move |_| runtime.dispatch_ui("toggle-search", None)
                >
                    "\u{1f50d}"
                </button>
                <HeaderBadgeButton
                    label="Filters"
                    icon="\u{2699}"
                    count=Signal::derive(filter_count)
                    action="open-filters"
                />
                <HeaderBadgeButton
                    label="Compare"
                    icon="\u{2194}"
                    count=Signal::derive(compare_count)
                    action="open-compare"
                />
                <HeaderBadgeButton
                    label="Wishlist"
                    icon="\u{2661}"
                    count=Signal::derive(wishlist_count)
                    action="toggle-wishlist"
                />
                <HeaderBadgeButton
                    label="Cart"
                    icon="\u{1f6d2}"
                    count=Signal::derive(move || cart_count() as usize)
                    action="toggle-cart"
                />
            </nav>
        </header>
    }
}

#[component]
fn HeaderBadgeButton(
    label: &'static str,
    icon: &'static str,
    count: Signal<usize>,
    action: &'static str,
) -> impl IntoView {
    let runtime = use_storefront();

    view! {
        <button
            class="icon-button"
            aria-label=label
            data-action=action
            on:click=move |_| runtime.dispatch_ui(action, None)
        >
            {icon}
            <Show when={move || count.get() > 0}>
                <span class="badge">{move || count.get()}</span>
            </Show>
        </button>
    }
}
