use super::*;

use crate::model::Category;

#[component]
pub(super) fn SearchOverlay() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let results = create_memo(move |_| {
        let store = state.get();
        catalog::search_products(&store.catalog, &store.search_query)
            .into_iter()
            .cloned()
            .collect::<Vec<Product>>()
    });
    let query_entered = move || !state.get().search_query.trim().is_empty();

    view! {
        <OverlayChrome container_id="search-overlay" title="Search".to_string()>
            <input
                type="search"
                class="search-input"
                placeholder="Search products"
                prop:value=move || state.get().search_query
                on:input=move |ev| {
                    runtime.dispatch_ui("set-search", Some(event_target_value(&ev).as_str()))
                }
            />
            <Show when=query_entered>
                <Show
                    when=move || !results.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No products found."</p> }
                >
                    <ul class="search-results">
                        <For
                            each=move || results.get()
                            key=|product| product.id
                            children=move |product| {
                                let product_arg = product.id.0.to_string();
                                view! {
                                    <li>
                                        <button
                                            data-action="open-product"
                                            on:click=move |_| {
                                                runtime.dispatch_ui("open-product", Some(product_arg.as_str()))
                                            }
                                        >
                                            <img src=product.image.clone() alt=product.name.clone()/>
                                            <span>{product.name.clone()}</span>
                                            <span class="product-price">
                                                {format_price(product.price)}
                                            </span>
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </OverlayChrome>
    }
}

/// Every distinct color across the catalog, for the color facet checkboxes.
fn catalog_colors(products: &[Product]) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for product in products {
        for color in &product.colors {
            if !colors.contains(color) {
                colors.push(color.clone());
            }
        }
    }
    colors.sort();
    colors
}

#[component]
pub(super) fn FiltersModal() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let colors = create_memo(move |_| catalog_colors(&state.get().catalog));

    view! {
        <OverlayChrome container_id="filters-modal" title="Filters".to_string()>
            <div class="filter-group">
                <h3>"Category"</h3>
                <select on:change=move |ev| {
                    runtime.dispatch_ui("set-category", Some(event_target_value(&ev).as_str()))
                }>
                    <option value="all" selected=move || state.get().filters.category.is_none()>
                        "All"
                    </option>
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <option
                                    value=category.id()
                                    selected=move || {
                                        state.get().filters.category == Some(category)
                                    }
                                >
                                    {category.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="filter-group">
                <h3>"Max price"</h3>
                <input
                    type="range"
                    min="0"
                    max="10000"
                    step="100"
                    prop:value=move || state.get().filters.price_ceiling.to_string()
                    on:input=move |ev| {
                        runtime.dispatch_ui("set-price-ceiling", Some(event_target_value(&ev).as_str()))
                    }
                />
                <span>{move || format_price(state.get().filters.price_ceiling)}</span>
            </div>
            <div class="filter-group">
                <h3>"Minimum rating"</h3>
                <select on:change=move |ev| {
                    runtime.dispatch_ui("set-min-rating", Some(event_target_value(&ev).as_str()))
                }>
                    {[0.0, 3.0, 4.0, 4.5]
                        .into_iter()
                        .map(|floor| {
                            view! {
                                <option
                                    value=floor.to_string()
                                    selected=move || state.get().filters.min_rating == floor
                                >
                                    {if floor == 0.0 {
                                        "Any".to_string()
                                    } else {
                                        format!("{floor}+")
                                    }}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="filter-group">
                <h3>"Colors"</h3>
                <For
                    each=move || colors.get()
                    key=|color| color.clone()
                    children=move |color| {
                        let checked = {
                            let color = color.clone();
                            move || state.get().filters.colors.contains(&color)
                        };
                        let toggle = {
                            let color = color.clone();
                            move |_| runtime.dispatch_ui("toggle-color", Some(color.as_str()))
                        };
                        view! {
                            <label class="color-option">
                                <input type="checkbox" prop:checked=checked on:change=toggle/>
                                {color.clone()}
                            </label>
                        }
                    }
                />
            </div>
            <label class="filter-group">
                <input
                    type="checkbox"
                    prop:checked=move || state.get().filters.in_stock_only
                    on:change=move |ev| {
                        let arg = if event_target_checked(&ev) { "1" } else { "0" };
                        runtime.dispatch_ui("set-in-stock", Some(arg))
                    }
                />
                "In stock only"
            </label>
            <footer class="filter-actions">
                <button
                    data-action="reset-filters"
                    on:click=move |_| runtime.dispatch_ui("reset-filters", None)
                >
                    "Reset"
                </button>
                <button
                    class="primary"
                    data-action="close-overlay"
                    on:click=move |_| runtime.dispatch_ui("close-overlay", None)
                >
                    "Done"
                </button>
            </footer>
        </OverlayChrome>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;

    #[test]
    fn catalog_colors_are_unique_and_sorted() {
        let colors = catalog_colors(&seed_products());
        assert!(colors.windows(2).all(|w| w[0] < w[1]));
        assert!(colors.iter().any(|c| c == "Gray"));
        assert!(colors.iter().any(|c| c == "Oak"));
    }
}
