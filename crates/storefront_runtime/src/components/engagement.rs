use super::*;

use crate::model::{ProductId, WishlistEntry};

#[component]
pub(super) fn WishlistDrawer() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    view! {
        <OverlayChrome container_id="wishlist-drawer" title="Wishlist".to_string()>
            <Show
                when=move || !state.get().wishlist.is_empty()
                fallback=|| view! { <p class="empty-state">"Your wishlist is empty."</p> }
            >
                <ul class="wishlist-entries">
                    <For
                        each=move || state.get().wishlist.clone()
                        key=|entry| entry.name.clone()
                        children=move |entry| view! { <WishlistRow entry/> }
                    />
                </ul>
            </Show>
        </OverlayChrome>
    }
}

#[component]
fn WishlistRow(entry: WishlistEntry) -> impl IntoView {
    let runtime = use_storefront();
    let name = entry.name.clone();
    let price = entry.price;
    let image = entry.image.clone();

    let move_to_cart = {
        let name = name.clone();
        let image = image.clone();
        move |_| {
            runtime.dispatch_action(StoreAction::AddToCart {
                name: name.clone(),
                price,
                image: image.clone(),
            });
            runtime.dispatch_action(StoreAction::RemoveWishlist { name: name.clone() });
        }
    };
    let remove = {
        let name = name.clone();
        move |_| runtime.dispatch_ui("wishlist-remove", Some(name.as_str()))
    };

    view! {
        <li class="wishlist-entry">
            <img src=entry.image.clone() alt=entry.name.clone()/>
            <div>
                <p>{entry.name.clone()}</p>
                <p class="product-price">{format_price(entry.price)}</p>
            </div>
            <button on:click=move_to_cart>"Move to cart"</button>
            <button class="icon-button" aria-label="Remove from wishlist" on:click=remove>
                "\u{2715}"
            </button>
        </li>
    }
}

#[component]
pub(super) fn CompareModal() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    view! {
        <OverlayChrome container_id="compare-modal" title="Compare products".to_string()>
            <Show
                when=move || !state.get().compare.is_empty()
                fallback=|| view! { <p class="empty-state">"Nothing to compare yet."</p> }
            >
                <table class="compare-table">
                    <thead>
                        <tr>
                            <th></th>
                            <For
                                each=move || state.get().compare.clone()
                                key=|product| product.id
                                children=move |product| {
                                    let product_arg = product.id.0.to_string();
                                    view! {
                                        <th>
                                            {product.name.clone()}
                                            <button
                                                class="icon-button"
                                                aria-label="Remove from compare"
                                                data-action="compare-remove"
                                                on:click=move |_| {
                                                    runtime.dispatch_ui("compare-remove", Some(product_arg.as_str()))
                                                }
                                            >
                                                "\u{2715}"
                                            </button>
                                        </th>
                                    }
                                }
                            />
                        </tr>
                    </thead>
                    <tbody>
                        <CompareRow label="Price" value=|p| format_price(p.price)/>
                        <CompareRow label="Rating" value=|p| rating_summary(p.rating, p.review_count)/>
                        <CompareRow label="Category" value=|p| p.category.label().to_string()/>
                        <CompareRow label="Material" value=|p| p.material.clone()/>
                        <CompareRow label="Dimensions" value=|p| p.dimensions.clone()/>
                        <CompareRow label="Colors" value=|p| p.colors.join(", ")/>
                        <CompareRow
                            label="Availability"
                            value=|p| {
                                if p.in_stock { "In stock".to_string() } else { "Out of stock".to_string() }
                            }
                        />
                        <tr class="compare-actions">
                            <th scope="row"></th>
                            <For
                                each=move || state.get().compare.clone()
                                key=|product| product.id
                                children=move |product| {
                                    let name = product.name.clone();
                                    let price = product.price;
                                    let image = product.image.clone();
                                    view! {
                                        <td>
                                            <button
                                                class="primary"
                                                on:click=move |_| {
                                                    runtime
                                                        .dispatch_action(StoreAction::AddToCart {
                                                            name: name.clone(),
                                                            price,
                                                            image: image.clone(),
                                                        })
                                                }
                                            >
                                                "Add to cart"
                                            </button>
                                        </td>
                                    }
                                }
                            />
                        </tr>
                    </tbody>
                </table>
            </Show>
        </OverlayChrome>
    }
}

#[component]
fn CompareRow(label: &'static str, value: fn(&Product) -> String) -> impl IntoView {
    let state = use_storefront().state;

    view! {
        <tr>
            <th scope="row">{label}</th>
            <For
                each=move || state.get().compare.clone()
                key=|product| product.id
                children=move |product| view! { <td>{value(&product)}</td> }
            />
        </tr>
    }
}

#[component]
pub(super) fn ProductDetailsModal(product_id: ProductId) -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let product = move || state.get().product(product_id).cloned();

    view! {
        {move || match product() {
            None => view! { <p class="empty-state">"This product is no longer available."</p> }
                .into_view(),
            Some(product) => {
                let name = product.name.clone();
                let price = product.price;
                let image = product.image.clone();
                let add_to_cart = {
                    let name = name.clone();
                    let image = image.clone();
                    move |_| {
                        runtime
                            .dispatch_action(StoreAction::AddToCart {
                                name: name.clone(),
                                price,
                                image: image.clone(),
                            })
                    }
                };

                view! {
                    <OverlayChrome
                        container_id="product-details-modal"
                        title=product.name.clone()
                    >
                        <div class="product-details">
                            <img src=product.image.clone() alt=product.name.clone()/>
                            <div class="product-details-body">
                                <p class="product-rating">
                                    {rating_summary(product.rating, product.review_count)}
                                </p>
                                <p class="product-price">
                                    <span>{format_price(product.price)}</span>
                                    {product
                                        .old_price
                                        .map(|old| view! { <del>{format_price(old)}</del> })}
                                </p>
                                <p>{format!("Material: {}", product.material)}</p>
                                <p>{format!("Dimensions: {}", product.dimensions)}</p>
                                <p>{format!("Colors: {}", product.colors.join(", "))}</p>
                                <button class="primary" on:click=add_to_cart>
                                    "Add to cart"
                                </button>
                            </div>
                        </div>
                        <SimilarProducts product_id/>
                        <ReviewsSection product_id/>
                    </OverlayChrome>
                }
                .into_view()
            }
        }}
    }
}

#[component]
fn SimilarProducts(product_id: ProductId) -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let similar = create_memo(move |_| {
        let store = state.get();
        store
            .product(product_id)
            .map(|subject| {
                catalog::similar_products(&store.catalog, subject)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Product>>()
            })
            .unwrap_or_default()
    });

    view! {
        <Show when=move || !similar.get().is_empty()>
            <section class="similar-products">
                <h3>"You may also like"</h3>
                <ul>
                    <For
                        each=move || similar.get()
                        key=|product| product.id
                        children=move |product| {
                            let similar_id = product.id;
                            view! {
                                <li>
                                    <button on:click=move |_| {
                                        runtime
                                            .dispatch_action(
                                                StoreAction::OpenOverlay(
                                                    Overlay::ProductDetails(similar_id),
                                                ),
                                            )
                                    }>
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
            </section>
        </Show>
    }
}

#[component]
fn ReviewsSection(product_id: ProductId) -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let author = create_rw_signal(String::new());
    let rating = create_rw_signal(5_u8);
    let text = create_rw_signal(String::new());

    let reviews = move || {
        state
            .get()
            .reviews_for(product_id)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <section class="reviews">
            <h3>"Reviews"</h3>
            <Show
                when=move || !reviews().is_empty()
                fallback=|| view! { <p class="empty-state">"No reviews yet."</p> }
            >
                <ul class="review-list">
                    <For
                        each=reviews
                        key=|review| review.id
                        children=|review| {
                            view! {
                                <li>
                                    <p class="review-head">
                                        <strong>{review.author.clone()}</strong>
                                        <span>{"\u{2605}".repeat(review.rating as usize)}</span>
                                    </p>
                                    <p>{review.text.clone()}</p>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
            <form
                class="review-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    runtime
                        .dispatch_action(StoreAction::SubmitReview {
                            product_id,
                            author: author.get_untracked(),
                            rating: rating.get_untracked(),
                            text: text.get_untracked(),
                        });
                    author.set(String::new());
                    text.set(String::new());
                }
            >
                <input
                    type="text"
                    placeholder="Your name"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    rating.set(event_target_value(&ev).parse().unwrap_or(5))
                }>
                    {(1..=5_u8)
                        .rev()
                        .map(|stars| {
                            view! {
                                <option value=stars.to_string() selected=move || rating.get() == stars>
                                    {"\u{2605}".repeat(stars as usize)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <textarea
                    placeholder="Share your experience"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Submit review"</button>
            </form>
        </section>
    }
}
