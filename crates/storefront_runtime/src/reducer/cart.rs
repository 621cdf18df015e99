//! Cart line management and coupon application.

use storefront_host::mint_record_id;

use crate::model::{CartLine, LineId, StoreState, ToastKind, FALLBACK_IMAGE};
use crate::pricing;
use crate::reducer::{push_toast, StoreEffect, StoreError};

pub(super) fn add_to_cart(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    name: String,
    price: f64,
    image: String,
) {
    if let Some(line) = state.cart.iter_mut().find(|line| line.name == name) {
        line.quantity = line.quantity.saturating_add(1);
    } else {
        let image = if image.is_empty() {
            FALLBACK_IMAGE.to_string()
        } else {
            image
        };
        state.cart.push(CartLine {
            id: LineId(mint_record_id()),
            name: name.clone(),
            unit_price: price,
            quantity: 1,
            image,
        });
    }
    effects.push(StoreEffect::PersistCart);
    push_toast(state, effects, ToastKind::Success, format!("{name} added to cart"));
}

pub(super) fn remove_line(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    line_id: LineId,
) -> Result<(), StoreError> {
    let before = state.cart.len();
    state.cart.retain(|line| line.id != line_id);
    if state.cart.len() == before {
        return Err(StoreError::LineNotFound);
    }
    effects.push(StoreEffect::PersistCart);
    Ok(())
}

/// Adds `delta` to a line's quantity. Dropping below one removes the line.
pub(super) fn change_quantity(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    line_id: LineId,
    delta: i32,
) -> Result<(), StoreError> {
    let line = state
        .cart
        .iter_mut()
        .find(|line| line.id == line_id)
        .ok_or(StoreError::LineNotFound)?;

    let next = i64::from(line.quantity) + i64::from(delta);
    if next < 1 {
        state.cart.retain(|line| line.id != line_id);
    } else {
        line.quantity = next as u32;
    }
    effects.push(StoreEffect::PersistCart);
    Ok(())
}

/// Validates the code against the current subtotal. Success replaces the
/// active coupon; failure toasts and leaves it in place.
pub(super) fn apply_coupon(state: &mut StoreState, effects: &mut Vec<StoreEffect>, code: &str) {
    match pricing::validate_coupon(code, state.cart_subtotal()) {
        Ok(coupon) => {
            state.applied_coupon = Some(coupon.code.to_string());
            push_toast(
                state,
                effects,
                ToastKind::Success,
                format!("Coupon {} applied", coupon.code),
            );
        }
        Err(err) => {
            push_toast(state, effects, ToastKind::Error, err.to_string());
        }
    }
}
