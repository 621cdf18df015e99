//! Checkout and newsletter submission.

use storefront_host::{NewsletterSignup, OrderSubmission};

use crate::model::{StoreState, ToastKind};
use crate::reducer::{push_toast, StoreEffect};

/// Phone numbers accept digits, spaces, and `+-()` separators, at least nine
/// characters in total.
fn phone_is_valid(phone: &str) -> bool {
    let trimmed = phone.trim();
    trimmed.chars().count() >= 9
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

fn email_is_valid(email: &str) -> bool {
    let trimmed = email.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !trimmed.contains(char::is_whitespace)
        && domain.split_once('.').is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

pub(super) fn submit_order(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    name: String,
    phone: String,
    address: String,
    city: String,
) {
    if state.order_pending {
        return;
    }
    if state.cart.is_empty() {
        push_toast(state, effects, ToastKind::Error, "Your cart is empty");
        return;
    }
    let name = name.trim().to_string();
    let address = address.trim().to_string();
    let city = city.trim().to_string();
    if name.is_empty() || address.is_empty() || city.is_empty() {
        push_toast(state, effects, ToastKind::Error, "Fill in all delivery details");
        return;
    }
    if !phone_is_valid(&phone) {
        push_toast(state, effects, ToastKind::Error, "Enter a valid phone number");
        return;
    }

    state.shipping_city = Some(city.clone());
    state.order_pending = true;

    let submission = OrderSubmission {
        name,
        phone: phone.trim().to_string(),
        address,
        city,
        lines: state
            .cart
            .iter()
            .map(|line| (line.name.clone(), line.unit_price, line.quantity))
            .collect(),
        total: state.totals().grand_total,
    };
    effects.push(StoreEffect::DeliverOrder(submission));
}

/// Finishes the in-flight order: clear the cart and coupon, close the
/// checkout, and confirm.
pub(super) fn order_delivered(state: &mut StoreState, effects: &mut Vec<StoreEffect>) {
    if !state.order_pending {
        return;
    }
    state.order_pending = false;
    state.cart.clear();
    state.applied_coupon = None;
    effects.push(StoreEffect::PersistCart);
    if state.open_overlay.is_some() {
        state.open_overlay = None;
        effects.push(StoreEffect::OverlayChanged(None));
    }
    push_toast(state, effects, ToastKind::Success, "Order placed. We'll be in touch shortly");
}

pub(super) fn subscribe_newsletter(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    email: &str,
) {
    if !email_is_valid(email) {
        push_toast(state, effects, ToastKind::Error, "Enter a valid email address");
        return;
    }
    effects.push(StoreEffect::DeliverNewsletter(NewsletterSignup {
        email: email.trim().to_string(),
    }));
    push_toast(state, effects, ToastKind::Success, "You're subscribed to the newsletter");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_validation_accepts_formatted_numbers() {
        assert!(phone_is_valid("+966 (50) 123-4567"));
        assert!(phone_is_valid("0501234567"));
        assert!(!phone_is_valid("12345678"));
        assert!(!phone_is_valid("05x1234567"));
    }

    #[test]
    fn email_validation_needs_local_domain_and_tld() {
        assert!(email_is_valid("lina@example.com"));
        assert!(!email_is_valid("lina@example"));
        assert!(!email_is_valid("@example.com"));
        assert!(!email_is_valid("lina example@site.com"));
    }
}
