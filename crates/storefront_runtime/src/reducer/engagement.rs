//! Wishlist, compare tray, and review handling.

use storefront_host::mint_record_id;
use storefront_host::unix_time_ms_now;

use crate::model::{
    ProductId, Review, ReviewId, StoreState, ToastKind, WishlistEntry, COMPARE_CAPACITY,
    FALLBACK_IMAGE,
};
use crate::reducer::{push_toast, StoreEffect, StoreError};

pub(super) fn toggle_wishlist(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    name: String,
    price: f64,
    image: String,
) {
    if let Some(pos) = state.wishlist.iter().position(|entry| entry.name == name) {
        state.wishlist.remove(pos);
        effects.push(StoreEffect::PersistWishlist);
        push_toast(state, effects, ToastKind::Info, format!("{name} removed from wishlist"));
        return;
    }
    let image = if image.is_empty() {
        FALLBACK_IMAGE.to_string()
    } else {
        image
    };
    state.wishlist.push(WishlistEntry { name: name.clone(), price, image });
    effects.push(StoreEffect::PersistWishlist);
    push_toast(state, effects, ToastKind::Success, format!("{name} added to wishlist"));
}

pub(super) fn remove_wishlist(state: &mut StoreState, effects: &mut Vec<StoreEffect>, name: &str) {
    let before = state.wishlist.len();
    state.wishlist.retain(|entry| entry.name != name);
    if state.wishlist.len() != before {
        effects.push(StoreEffect::PersistWishlist);
    }
}

pub(super) fn add_to_compare(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    product_id: ProductId,
) -> Result<(), StoreError> {
    let product = state
        .product(product_id)
        .cloned()
        .ok_or(StoreError::ProductNotFound)?;

    if state.compare.iter().any(|p| p.id == product_id) {
        push_toast(state, effects, ToastKind::Warning, "Already in the compare list");
        return Ok(());
    }
    if state.compare.len() >= COMPARE_CAPACITY {
        push_toast(
            state,
            effects,
            ToastKind::Warning,
            format!("You can compare up to {COMPARE_CAPACITY} products"),
        );
        return Ok(());
    }
    let name = product.name.clone();
    state.compare.push(product);
    effects.push(StoreEffect::PersistCompare);
    push_toast(state, effects, ToastKind::Success, format!("{name} added to compare"));
    Ok(())
}

pub(super) fn remove_from_compare(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    product_id: ProductId,
) {
    let before = state.compare.len();
    state.compare.retain(|p| p.id != product_id);
    if state.compare.len() != before {
        effects.push(StoreEffect::PersistCompare);
    }
}

pub(super) fn submit_review(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    product_id: ProductId,
    author: String,
    rating: u8,
    text: String,
) -> Result<(), StoreError> {
    if state.product(product_id).is_none() {
        return Err(StoreError::ProductNotFound);
    }
    let author = author.trim().to_string();
    let text = text.trim().to_string();
    if author.is_empty() || text.is_empty() || !(1..=5).contains(&rating) {
        push_toast(state, effects, ToastKind::Error, "Fill in your name, rating, and review");
        return Ok(());
    }

    state.reviews.push(Review {
        id: ReviewId(mint_record_id()),
        product_id,
        author,
        rating,
        text,
        submitted_at_ms: unix_time_ms_now(),
    });

    recompute_review_aggregate(state, product_id);

    effects.push(StoreEffect::PersistReviews);
    push_toast(state, effects, ToastKind::Success, "Thanks for your review");
    Ok(())
}

/// Sets a product's displayed aggregate to the arithmetic mean of its
/// submitted reviews, one decimal place, with the review count to match.
/// A product with no submitted reviews keeps its current aggregate.
fn recompute_review_aggregate(state: &mut StoreState, product_id: ProductId) {
    let mut total = 0.0;
    let mut count: u32 = 0;
    for review in state.reviews.iter().filter(|r| r.product_id == product_id) {
        total += f64::from(review.rating);
        count += 1;
    }
    if count == 0 {
        return;
    }
    if let Some(product) = state.catalog.iter_mut().find(|p| p.id == product_id) {
        product.review_count = count;
        product.rating = (total / f64::from(count) * 10.0).round() / 10.0;
    }
}

/// Restores every product to its seeded aggregate, then overwrites the
/// aggregates of products that have submitted reviews. Run after hydration so
/// a hydrated review list fully determines the displayed numbers.
pub(super) fn reapply_review_aggregates(state: &mut StoreState) {
    let baseline = crate::catalog::seed_products();
    for product in &mut state.catalog {
        if let Some(seed) = baseline.iter().find(|p| p.id == product.id) {
            product.rating = seed.rating;
            product.review_count = seed.review_count;
        }
    }
    let ids: Vec<ProductId> = state.catalog.iter().map(|p| p.id).collect();
    for id in ids {
        recompute_review_aggregate(state, id);
    }
}
