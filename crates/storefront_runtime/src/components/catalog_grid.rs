use super::*;

use crate::model::Category;

#[component]
pub(super) fn CategoryTabs() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;
    let selected = move || state.get().filters.category;

    let tab = move |category: Option<Category>, label: &'static str| {
        let class = move || {
            if selected() == category {
                "category-tab active"
            } else {
                "category-tab"
            }
        };
        let arg = category.map_or("all", |c| c.id());
        view! {
            <button
                class=class
                data-action="set-category"
                on:click=move |_| runtime.dispatch_ui("set-category", Some(arg))
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="category-tabs" role="tablist">
            {tab(None, "All")}
            {Category::ALL
                .into_iter()
                .map(|category| tab(Some(category), category.label()))
                .collect_view()}
        </div>
    }
}

#[component]
pub(super) fn SortSelect() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    view! {
        <select
            class="sort-select"
            aria-label="Sort products"
            on:change=move |ev| {
                runtime.dispatch_ui("set-sort", Some(event_target_value(&ev).as_str()))
            }
        >
            {SortKey::ALL
                .into_iter()
                .map(|sort| {
                    view! {
                        <option
                            value=sort.id()
                            selected=move || state.get().filters.sort == sort
                        >
                            {sort.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub(super) fn ProductGrid() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let visible = create_memo(move |_| {
        let store = state.get();
        catalog::apply_filters(&store.catalog, &store.filters)
            .into_iter()
            .cloned()
            .collect::<Vec<Product>>()
    });

    view! {
        <Show
            when=move || !visible.get().is_empty()
            fallback=move || {
                view! {
                    <div class="empty-state">
                        <p>"No products match the current filters."</p>
                        <button
                            data-action="reset-filters"
                            on:click=move |_| runtime.dispatch_ui("reset-filters", None)
                        >
                            "Reset filters"
                        </button>
                    </div>
                }
            }
        >
            <div class="product-grid">
                <For
                    each=move || visible.get()
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product/> }
                />
            </div>
        </Show>
    }
}

#[component]
pub(super) fn ProductCard(product: Product) -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let product_id = product.id;
    let name = product.name.clone();
    let price = product.price;
    let image = product.image.clone();
    let in_wishlist = {
        let name = name.clone();
        move || state.get().wishlist_contains(&name)
    };

    let add_to_cart = {
        let name = name.clone();
        let image = image.clone();
        move |_| {
            runtime.dispatch_action(StoreAction::AddToCart {
                name: name.clone(),
                price,
                image: image.clone(),
            })
        }
    };
    let toggle_wishlist = {
        let name = name.clone();
        let image = image.clone();
        move |_| {
            runtime.dispatch_action(StoreAction::ToggleWishlist {
                name: name.clone(),
                price,
                image: image.clone(),
            })
        }
    };

    view! {
        <article class="product-card">
            <div class="product-media">
                <img src=product.image.clone() alt=product.name.clone() loading="lazy"/>
                {product
                    .badge
                    .clone()
                    .map(|badge| view! { <span class="product-badge">{badge}</span> })}
                <Show when=move || {
                    state.get().product(product_id).map(|p| !p.in_stock).unwrap_or(false)
                }>
                    <span class="stock-badge">"Out of stock"</span>
                </Show>
            </div>
            <div class="product-body">
                <button
                    class="product-name"
                    data-action="open-product"
                    on:click=move |_| {
                        runtime.dispatch_ui("open-product", Some(product_id.0.to_string().as_str()))
                    }
                >
                    {product.name.clone()}
                </button>
                <p class="product-rating">
                    {move || {
                        state
                            .get()
                            .product(product_id)
                            .map(|p| rating_summary(p.rating, p.review_count))
                            .unwrap_or_default()
                    }}
                </p>
                <p class="product-price">
                    <span>{format_price(product.price)}</span>
                    {product
                        .old_price
                        .map(|old| view! { <del>{format_price(old)}</del> })}
                </p>
                <div class="product-actions">
                    <button class="primary" on:click=add_to_cart>"Add to cart"</button>
                    <button
                        class="icon-button"
                        class:active=in_wishlist
                        aria-label="Toggle wishlist"
                        on:click=toggle_wishlist
                    >
                        "\u{2661}"
                    </button>
                    <button
                        class="icon-button"
                        aria-label="Add to compare"
                        data-action="compare-add"
                        on:click=move |_| {
                            runtime.dispatch_ui("compare-add", Some(product_id.0.to_string().as_str()))
                        }
                    >
                        "\u{2194}"
                    </button>
                </div>
            </div>
        </article>
    }
}
