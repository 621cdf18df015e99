use super::*;

use crate::model::CartLine;
use crate::pricing::{shipping_zone, DEFAULT_SHIPPING, SHIPPING_ZONES};

#[component]
pub(super) fn CartDrawer() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    view! {
        <OverlayChrome container_id="cart-drawer" title="Your cart".to_string()>
            <Show
                when=move || !state.get().cart.is_empty()
                fallback=|| view! { <p class="empty-state">"Your cart is empty."</p> }
            >
                <ul class="cart-lines">
                    <For
                        each=move || state.get().cart.clone()
                        key=|line| line.id
                        children=move |line| view! { <CartLineRow line/> }
                    />
                </ul>
                <CouponForm/>
                <ShippingCitySelect/>
                <CartTotalsPanel/>
                <button
                    class="primary checkout-button"
                    data-action="open-checkout"
                    on:click=move |_| runtime.dispatch_ui("open-checkout", None)
                >
                    "Checkout"
                </button>
            </Show>
        </OverlayChrome>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let runtime = use_storefront();
    let line_arg = line.id.0.to_string();

    let line_action = move |name: &'static str| {
        let line_arg = line_arg.clone();
        move |_| runtime.dispatch_ui(name, Some(line_arg.as_str()))
    };

    view! {
        <li class="cart-line">
            <img src=line.image.clone() alt=line.name.clone()/>
            <div class="cart-line-body">
                <p class="cart-line-name">{line.name.clone()}</p>
                <p class="cart-line-price">{format_price(line.unit_price)}</p>
                <div class="quantity-controls">
                    <button
                        aria-label="Decrease quantity"
                        data-action="cart-decrease"
                        on:click=line_action("cart-decrease")
                    >
                        "\u{2212}"
                    </button>
                    <span>{line.quantity}</span>
                    <button
                        aria-label="Increase quantity"
                        data-action="cart-increase"
                        on:click=line_action("cart-increase")
                    >
                        "+"
                    </button>
                </div>
            </div>
            <div class="cart-line-tail">
                <span>{format_price(line.line_total())}</span>
                <button
                    class="icon-button"
                    aria-label="Remove from cart"
                    data-action="cart-remove"
                    on:click=line_action("cart-remove")
                >
                    "\u{2715}"
                </button>
            </div>
        </li>
    }
}

#[component]
fn CouponForm() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;
    let code = create_rw_signal(String::new());

    view! {
        <form
            class="coupon-form"
            on:submit=move |ev| {
                ev.prevent_default();
                runtime.dispatch_ui("apply-coupon", Some(code.get_untracked().as_str()));
            }
        >
            <input
                type="text"
                placeholder="Coupon code"
                prop:value=move || code.get()
                on:input=move |ev| code.set(event_target_value(&ev))
            />
            <button type="submit">"Apply"</button>
            {move || {
                state
                    .get()
                    .applied_coupon
                    .map(|applied| {
                        view! { <p class="coupon-applied">{format!("Active coupon: {applied}")}</p> }
                    })
            }}
        </form>
    }
}

#[component]
fn ShippingCitySelect() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;
    let selected = move || state.get().shipping_city;

    view! {
        <label class="shipping-select">
            "Ship to"
            <select on:change=move |ev| {
                runtime.dispatch_ui("set-city", Some(event_target_value(&ev).as_str()))
            }>
                {SHIPPING_ZONES
                    .into_iter()
                    .map(|zone| {
                        view! {
                            <option
                                value=zone.city
                                selected=move || selected().as_deref() == Some(zone.city)
                            >
                                {format!(
                                    "{} ({}, {} days)",
                                    zone.city,
                                    if zone.cost == 0.0 {
                                        "free shipping".to_string()
                                    } else {
                                        format_price(zone.cost)
                                    },
                                    zone.delivery_days,
                                )}
                            </option>
                        }
                    })
                    .collect_view()}
                <option
                    value=DEFAULT_SHIPPING.city
                    selected=move || {
                        selected()
                            .map(|city| shipping_zone(Some(&city)) == DEFAULT_SHIPPING)
                            .unwrap_or(false)
                    }
                >
                    {format!(
                        "Other city ({}, {} days)",
                        format_price(DEFAULT_SHIPPING.cost),
                        DEFAULT_SHIPPING.delivery_days,
                    )}
                </option>
            </select>
        </label>
    }
}

#[component]
pub(super) fn CartTotalsPanel() -> impl IntoView {
    let state = use_storefront().state;
    let totals = move || state.get().totals();

    view! {
        <dl class="cart-totals">
            <div>
                <dt>"Subtotal"</dt>
                <dd>{move || format_price(totals().subtotal)}</dd>
            </div>
            <Show when={move || totals().discount > 0.0}>
                <div class="discount">
                    <dt>"Discount"</dt>
                    <dd>{move || format!("-{}", format_price(totals().discount))}</dd>
                </div>
            </Show>
            <div>
                <dt>"Shipping"</dt>
                <dd>
                    {move || {
                        let shipping = totals().shipping;
                        if shipping == 0.0 { "Free".to_string() } else { format_price(shipping) }
                    }}
                </dd>
            </div>
            <div class="grand-total">
                <dt>"Total"</dt>
                <dd>{move || format_price(totals().grand_total)}</dd>
            </div>
        </dl>
    }
}
