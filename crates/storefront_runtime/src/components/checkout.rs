use super::*;

use super::cart::CartTotalsPanel;

#[component]
pub(super) fn CheckoutModal() -> impl IntoView {
    let runtime = use_storefront();
    let state = runtime.state;

    let name = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let address = create_rw_signal(String::new());
    let city = create_rw_signal(
        state
            .get_untracked()
            .shipping_city
            .unwrap_or_else(|| "Riyadh".to_string()),
    );

    let pending = move || state.get().order_pending;

    view! {
        <OverlayChrome container_id="checkout-modal" title="Checkout".to_string()>
            <form
                class="checkout-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    runtime
                        .dispatch_action(StoreAction::SubmitOrder {
                            name: name.get_untracked(),
                            phone: phone.get_untracked(),
                            address: address.get_untracked(),
                            city: city.get_untracked(),
                        });
                }
            >
                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone"
                    <input
                        type="tel"
                        required
                        placeholder="+966 5X XXX XXXX"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Address"
                    <input
                        type="text"
                        required
                        prop:value=move || address.get()
                        on:input=move |ev| address.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "City"
                    <input
                        type="text"
                        required
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                </label>
                <CartTotalsPanel/>
                <button type="submit" class="primary" disabled=pending>
                    {move || if pending() { "Placing order\u{2026}" } else { "Place order" }}
                </button>
            </form>
        </OverlayChrome>
    }
}
