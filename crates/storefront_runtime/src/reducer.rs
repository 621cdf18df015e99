//! Reducer actions, side-effect intents, and transition logic for the store.

use thiserror::Error;

use storefront_host::{ColorScheme, NewsletterSignup, OrderSubmission};

use crate::model::{
    Category, LineId, Overlay, ProductId, SortKey, StoreState, Toast, ToastId, ToastKind,
};
use crate::persistence::BootSnapshot;

mod browse;
mod cart;
mod checkout;
mod engagement;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_store`] to mutate [`StoreState`].
pub enum StoreAction {
    /// Add a product to the cart, merging by name into an existing line.
    AddToCart {
        /// Product name; the merge key across catalog and wishlist sources.
        name: String,
        /// Unit price at the moment of adding.
        price: f64,
        /// Image shown on the cart line.
        image: String,
    },
    /// Remove a cart line by id.
    RemoveLine {
        /// Line to remove.
        line_id: LineId,
    },
    /// Increment a cart line's quantity.
    IncreaseLine {
        /// Line to increment.
        line_id: LineId,
    },
    /// Decrement a cart line's quantity; dropping below one removes the line.
    DecreaseLine {
        /// Line to decrement.
        line_id: LineId,
    },
    /// Validate and apply a coupon code, replacing any active coupon.
    ApplyCoupon {
        /// Raw code as typed.
        code: String,
    },
    /// Select the shipping city used for the shipping tier.
    SetShippingCity {
        /// City name; empty selects the default tier.
        city: String,
    },
    /// Add the product to the wishlist, or remove it if already present.
    ToggleWishlist {
        /// Product name; the wishlist key.
        name: String,
        /// Price stored on the entry.
        price: f64,
        /// Image stored on the entry.
        image: String,
    },
    /// Remove a wishlist entry by name.
    RemoveWishlist {
        /// Entry to remove.
        name: String,
    },
    /// Add a catalog product to the compare tray.
    AddToCompare {
        /// Product to compare.
        product_id: ProductId,
    },
    /// Remove a product from the compare tray.
    RemoveFromCompare {
        /// Product to drop.
        product_id: ProductId,
    },
    /// Record a review and refresh the product's aggregate rating.
    SubmitReview {
        /// Reviewed product.
        product_id: ProductId,
        /// Display name of the reviewer.
        author: String,
        /// Star rating, 1 through 5.
        rating: u8,
        /// Review body.
        text: String,
    },
    /// Set or clear the category facet.
    SetCategory {
        /// `None` shows every category.
        category: Option<Category>,
    },
    /// Set the inclusive price ceiling facet.
    SetPriceCeiling {
        /// New ceiling.
        ceiling: f64,
    },
    /// Set the minimum-rating facet.
    SetMinRating {
        /// New floor.
        rating: f64,
    },
    /// Toggle a color facet on or off.
    ToggleColor {
        /// Color name as it appears on products.
        color: String,
    },
    /// Restrict results to in-stock products.
    SetInStockOnly {
        /// Whether the facet is active.
        enabled: bool,
    },
    /// Change the sort key.
    SetSort {
        /// New sort key.
        sort: SortKey,
    },
    /// Restore every facet and the sort key to defaults.
    ResetFilters,
    /// Update the live search query.
    SetSearchQuery {
        /// Raw query text.
        query: String,
    },
    /// Open an overlay, closing any other overlay first.
    OpenOverlay(Overlay),
    /// Close the open overlay, if any.
    CloseOverlay,
    /// Open the overlay, or close it if it is already the open one.
    ToggleOverlay(Overlay),
    /// Flip the explicit theme to the opposite of the resolved scheme.
    ToggleTheme,
    /// React to an OS color-scheme change (ignored under an explicit choice).
    OsColorSchemeChanged(ColorScheme),
    /// Remove a toast before its timer fires.
    DismissToast(ToastId),
    /// Validate and start a checkout submission.
    SubmitOrder {
        /// Customer name.
        name: String,
        /// Contact phone number.
        phone: String,
        /// Delivery address.
        address: String,
        /// Delivery city.
        city: String,
    },
    /// Complete the in-flight order after the simulated latency elapses.
    OrderDelivered,
    /// Validate and record a newsletter signup.
    SubscribeNewsletter {
        /// Email address as typed.
        email: String,
    },
    /// Hydrate every persisted collection at boot.
    HydrateSnapshot(BootSnapshot),
    /// Replace the cart from another tab's persisted value.
    HydrateCart(Vec<crate::model::CartLine>),
    /// Replace the wishlist from another tab's persisted value.
    HydrateWishlist(Vec<crate::model::WishlistEntry>),
    /// Replace the compare tray from another tab's persisted value.
    HydrateCompare(Vec<crate::model::Product>),
    /// Replace reviews from another tab's persisted value.
    HydrateReviews(Vec<crate::model::Review>),
    /// Replace the explicit theme from another tab's persisted value.
    HydrateTheme(Option<ColorScheme>),
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_store`] for the host layer to run.
pub enum StoreEffect {
    /// Persist the cart collection.
    PersistCart,
    /// Persist the wishlist collection.
    PersistWishlist,
    /// Persist the compare tray.
    PersistCompare,
    /// Persist reviews.
    PersistReviews,
    /// Persist (or clear) the explicit theme choice.
    PersistTheme,
    /// The open overlay changed; move the focus trap accordingly.
    OverlayChanged(Option<Overlay>),
    /// Start the auto-dismiss timer for a toast.
    ScheduleToastDismiss(ToastId),
    /// Hand a validated order to the backend after the simulated latency.
    DeliverOrder(OrderSubmission),
    /// Hand a newsletter signup to the backend.
    DeliverNewsletter(NewsletterSignup),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference missing state.
pub enum StoreError {
    /// The target cart line id was not found.
    #[error("cart line not found")]
    LineNotFound,
    /// The target product id was not found in the catalog.
    #[error("product not found")]
    ProductNotFound,
}

/// Applies a [`StoreAction`] to the store state and collects resulting side
/// effects.
///
/// This function is the authoritative transition engine; views never mutate
/// [`StoreState`] directly. User input that fails validation (bad coupon,
/// incomplete checkout form) is reported through a toast and leaves the rest
/// of the state untouched.
///
/// # Errors
///
/// Returns [`StoreError`] when an action references a cart line or product
/// that is not present.
pub fn reduce_store(
    state: &mut StoreState,
    action: StoreAction,
) -> Result<Vec<StoreEffect>, StoreError> {
    let mut effects = Vec::new();
    match action {
        StoreAction::AddToCart { name, price, image } => {
            cart::add_to_cart(state, &mut effects, name, price, image);
        }
        StoreAction::RemoveLine { line_id } => {
            cart::remove_line(state, &mut effects, line_id)?;
        }
        StoreAction::IncreaseLine { line_id } => {
            cart::change_quantity(state, &mut effects, line_id, 1)?;
        }
        StoreAction::DecreaseLine { line_id } => {
            cart::change_quantity(state, &mut effects, line_id, -1)?;
        }
        StoreAction::ApplyCoupon { code } => {
            cart::apply_coupon(state, &mut effects, &code);
        }
        StoreAction::SetShippingCity { city } => {
            let trimmed = city.trim();
            state.shipping_city = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
        StoreAction::ToggleWishlist { name, price, image } => {
            engagement::toggle_wishlist(state, &mut effects, name, price, image);
        }
        StoreAction::RemoveWishlist { name } => {
            engagement::remove_wishlist(state, &mut effects, &name);
        }
        StoreAction::AddToCompare { product_id } => {
            engagement::add_to_compare(state, &mut effects, product_id)?;
        }
        StoreAction::RemoveFromCompare { product_id } => {
            engagement::remove_from_compare(state, &mut effects, product_id);
        }
        StoreAction::SubmitReview {
            product_id,
            author,
            rating,
            text,
        } => {
            engagement::submit_review(state, &mut effects, product_id, author, rating, text)?;
        }
        StoreAction::SetCategory { category } => {
            state.filters.category = category;
        }
        StoreAction::SetPriceCeiling { ceiling } => {
            state.filters.price_ceiling = ceiling.max(0.0);
        }
        StoreAction::SetMinRating { rating } => {
            state.filters.min_rating = rating.clamp(0.0, 5.0);
        }
        StoreAction::ToggleColor { color } => {
            browse::toggle_color(state, color);
        }
        StoreAction::SetInStockOnly { enabled } => {
            state.filters.in_stock_only = enabled;
        }
        StoreAction::SetSort { sort } => {
            state.filters.sort = sort;
        }
        StoreAction::ResetFilters => {
            browse::reset_filters(state, &mut effects);
        }
        StoreAction::SetSearchQuery { query } => {
            state.search_query = query;
        }
        StoreAction::OpenOverlay(overlay) => {
            browse::set_overlay(state, &mut effects, Some(overlay));
        }
        StoreAction::CloseOverlay => {
            browse::set_overlay(state, &mut effects, None);
        }
        StoreAction::ToggleOverlay(overlay) => {
            let next = if state.open_overlay == Some(overlay) {
                None
            } else {
                Some(overlay)
            };
            browse::set_overlay(state, &mut effects, next);
        }
        StoreAction::ToggleTheme => {
            state.theme.explicit = Some(state.theme.resolved().toggled());
            effects.push(StoreEffect::PersistTheme);
        }
        StoreAction::OsColorSchemeChanged(scheme) => {
            state.theme.os_preference = scheme;
        }
        StoreAction::DismissToast(toast_id) => {
            state.toasts.retain(|toast| toast.id != toast_id);
        }
        StoreAction::SubmitOrder {
            name,
            phone,
            address,
            city,
        } => {
            checkout::submit_order(state, &mut effects, name, phone, address, city);
        }
        StoreAction::OrderDelivered => {
            checkout::order_delivered(state, &mut effects);
        }
        StoreAction::SubscribeNewsletter { email } => {
            checkout::subscribe_newsletter(state, &mut effects, &email);
        }
        StoreAction::HydrateSnapshot(snapshot) => {
            state.cart = snapshot.cart;
            state.wishlist = snapshot.wishlist;
            state.compare = snapshot.compare;
            state.reviews = snapshot.reviews;
            state.theme.explicit = snapshot.theme;
            engagement::reapply_review_aggregates(state);
        }
        StoreAction::HydrateCart(cart) => {
            state.cart = cart;
        }
        StoreAction::HydrateWishlist(wishlist) => {
            state.wishlist = wishlist;
        }
        StoreAction::HydrateCompare(compare) => {
            state.compare = compare;
        }
        StoreAction::HydrateReviews(reviews) => {
            state.reviews = reviews;
            engagement::reapply_review_aggregates(state);
        }
        StoreAction::HydrateTheme(theme) => {
            state.theme.explicit = theme;
        }
    }
    Ok(effects)
}

/// Appends a toast, mirrors it into the aria-live announcement, and schedules
/// its dismissal.
pub(crate) fn push_toast(
    state: &mut StoreState,
    effects: &mut Vec<StoreEffect>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = message.into();
    let id = state.next_toast_id();
    state.announcement = Some(message.clone());
    state.toasts.push(Toast { id, kind, message });
    effects.push(StoreEffect::ScheduleToastDismiss(id));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::FilterState;

    fn dispatch(state: &mut StoreState, action: StoreAction) -> Vec<StoreEffect> {
        reduce_store(state, action).expect("action should apply")
    }

    fn add_sofa(state: &mut StoreState) -> Vec<StoreEffect> {
        dispatch(
            state,
            StoreAction::AddToCart {
                name: "Modern Luxe Sofa".to_string(),
                price: 2799.0,
                image: String::new(),
            },
        )
    }

    #[test]
    fn add_to_cart_merges_by_name() {
        let mut state = StoreState::default();
        let effects = add_sofa(&mut state);
        assert!(effects.contains(&StoreEffect::PersistCart));
        add_sofa(&mut state);

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].quantity, 2);
        assert_eq!(state.cart_subtotal(), 5598.0);
    }

    #[test]
    fn quantity_changes_address_lines_by_stable_id() {
        let mut state = StoreState::default();
        add_sofa(&mut state);
        dispatch(
            &mut state,
            StoreAction::AddToCart {
                name: "Decorative Wall Mirror".to_string(),
                price: 499.0,
                image: String::new(),
            },
        );
        let sofa_id = state.cart[0].id;
        let mirror_id = state.cart[1].id;
        assert_ne!(sofa_id, mirror_id);

        dispatch(&mut state, StoreAction::RemoveLine { line_id: sofa_id });
        dispatch(&mut state, StoreAction::IncreaseLine { line_id: mirror_id });
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].quantity, 2);

        let missing = reduce_store(&mut state, StoreAction::IncreaseLine { line_id: sofa_id });
        assert_eq!(missing, Err(StoreError::LineNotFound));
    }

    #[test]
    fn decrease_below_one_removes_the_line() {
        let mut state = StoreState::default();
        add_sofa(&mut state);
        let line_id = state.cart[0].id;

        let effects = dispatch(&mut state, StoreAction::DecreaseLine { line_id });
        assert!(state.cart.is_empty());
        assert!(effects.contains(&StoreEffect::PersistCart));
    }

    #[test]
    fn coupon_success_replaces_the_active_coupon() {
        let mut state = StoreState::default();
        add_sofa(&mut state);

        dispatch(&mut state, StoreAction::ApplyCoupon { code: "welcome20".to_string() });
        assert_eq!(state.applied_coupon.as_deref(), Some("WELCOME20"));

        dispatch(&mut state, StoreAction::ApplyCoupon { code: "VIP30".to_string() });
        assert_eq!(state.applied_coupon.as_deref(), Some("VIP30"));
        assert_eq!(state.totals().discount, 2799.0 * 30.0 / 100.0);
    }

    #[test]
    fn coupon_failure_toasts_and_keeps_state() {
        let mut state = StoreState::default();
        add_sofa(&mut state);
        dispatch(&mut state, StoreAction::ApplyCoupon { code: "WELCOME20".to_string() });

        let effects = dispatch(&mut state, StoreAction::ApplyCoupon { code: "BOGUS".to_string() });
        assert_eq!(state.applied_coupon.as_deref(), Some("WELCOME20"));
        assert_eq!(state.toasts.last().map(|t| t.kind), Some(ToastKind::Error));
        assert!(matches!(effects[0], StoreEffect::ScheduleToastDismiss(_)));
    }

    #[test]
    fn wishlist_toggle_round_trips() {
        let mut state = StoreState::default();
        let toggle = StoreAction::ToggleWishlist {
            name: "Wooden Work Desk".to_string(),
            price: 1499.0,
            image: String::new(),
        };
        dispatch(&mut state, toggle.clone());
        assert!(state.wishlist_contains("Wooden Work Desk"));

        dispatch(&mut state, toggle);
        assert!(state.wishlist.is_empty());
    }

    #[test]
    fn compare_rejects_duplicates_and_caps_at_four() {
        let mut state = StoreState::default();
        for id in 1..=4 {
            dispatch(&mut state, StoreAction::AddToCompare { product_id: ProductId(id) });
        }
        assert_eq!(state.compare.len(), 4);
        state.toasts.clear();

        dispatch(&mut state, StoreAction::AddToCompare { product_id: ProductId(4) });
        dispatch(&mut state, StoreAction::AddToCompare { product_id: ProductId(5) });
        assert_eq!(state.compare.len(), 4);
        assert_eq!(state.toasts.len(), 2);
        assert!(state
            .toasts
            .iter()
            .all(|toast| toast.kind == ToastKind::Warning));

        let missing = reduce_store(
            &mut state,
            StoreAction::AddToCompare { product_id: ProductId(999) },
        );
        assert_eq!(missing, Err(StoreError::ProductNotFound));
    }

    #[test]
    fn review_aggregate_is_the_mean_of_submitted_reviews() {
        let mut state = StoreState::default();
        // The seeded aggregate is replaced, not folded into.
        dispatch(
            &mut state,
            StoreAction::SubmitReview {
                product_id: ProductId(9),
                author: "Sara".to_string(),
                rating: 5,
                text: "Creaks a little but lovely.".to_string(),
            },
        );
        let product = state.product(ProductId(9)).unwrap();
        assert_eq!((product.rating, product.review_count), (5.0, 1));

        dispatch(
            &mut state,
            StoreAction::SubmitReview {
                product_id: ProductId(9),
                author: "Omar".to_string(),
                rating: 4,
                text: "Good value.".to_string(),
            },
        );
        let product = state.product(ProductId(9)).unwrap();
        assert_eq!((product.rating, product.review_count), (4.5, 2));
        assert_eq!(state.reviews.len(), 2);
    }

    #[test]
    fn only_one_overlay_opens_at_a_time() {
        let mut state = StoreState::default();
        let effects = dispatch(&mut state, StoreAction::OpenOverlay(Overlay::Cart));
        assert_eq!(effects, vec![StoreEffect::OverlayChanged(Some(Overlay::Cart))]);

        dispatch(&mut state, StoreAction::OpenOverlay(Overlay::Wishlist));
        assert_eq!(state.open_overlay, Some(Overlay::Wishlist));

        dispatch(&mut state, StoreAction::ToggleOverlay(Overlay::Wishlist));
        assert_eq!(state.open_overlay, None);
    }

    #[test]
    fn theme_toggle_pins_an_explicit_choice() {
        let mut state = StoreState::default();
        state.theme.os_preference = ColorScheme::Dark;

        let effects = dispatch(&mut state, StoreAction::ToggleTheme);
        assert_eq!(state.theme.explicit, Some(ColorScheme::Light));
        assert!(effects.contains(&StoreEffect::PersistTheme));

        // OS flips no longer change the resolved scheme.
        dispatch(&mut state, StoreAction::OsColorSchemeChanged(ColorScheme::Light));
        assert_eq!(state.theme.resolved(), ColorScheme::Light);
        dispatch(&mut state, StoreAction::OsColorSchemeChanged(ColorScheme::Dark));
        assert_eq!(state.theme.resolved(), ColorScheme::Light);
    }

    #[test]
    fn os_scheme_tracks_while_no_explicit_choice() {
        let mut state = StoreState::default();
        dispatch(&mut state, StoreAction::OsColorSchemeChanged(ColorScheme::Dark));
        assert_eq!(state.theme.resolved(), ColorScheme::Dark);
    }

    #[test]
    fn reset_filters_restores_defaults() {
        let mut state = StoreState::default();
        dispatch(&mut state, StoreAction::SetCategory { category: Some(Category::Office) });
        dispatch(&mut state, StoreAction::ToggleColor { color: "Black".to_string() });
        dispatch(&mut state, StoreAction::SetInStockOnly { enabled: true });
        assert_eq!(state.filters.active_count(), 3);

        dispatch(&mut state, StoreAction::ResetFilters);
        assert_eq!(state.filters, FilterState::default());
    }

    #[test]
    fn order_submission_validates_then_runs_through_pending() {
        let mut state = StoreState::default();
        add_sofa(&mut state);
        dispatch(&mut state, StoreAction::OpenOverlay(Overlay::Checkout));

        // Bad phone is rejected up front.
        dispatch(
            &mut state,
            StoreAction::SubmitOrder {
                name: "Omar".to_string(),
                phone: "12".to_string(),
                address: "12 Palm St".to_string(),
                city: "Riyadh".to_string(),
            },
        );
        assert!(!state.order_pending);
        assert_eq!(state.toasts.last().map(|t| t.kind), Some(ToastKind::Error));

        let effects = dispatch(
            &mut state,
            StoreAction::SubmitOrder {
                name: "Omar".to_string(),
                phone: "+966 50 123 4567".to_string(),
                address: "12 Palm St".to_string(),
                city: "Riyadh".to_string(),
            },
        );
        assert!(state.order_pending);
        assert!(effects
            .iter()
            .any(|effect| matches!(effect, StoreEffect::DeliverOrder(_))));

        dispatch(&mut state, StoreAction::OrderDelivered);
        assert!(!state.order_pending);
        assert!(state.cart.is_empty());
        assert_eq!(state.applied_coupon, None);
        assert_eq!(state.open_overlay, None);
        assert_eq!(state.toasts.last().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[test]
    fn newsletter_signup_requires_a_plausible_email() {
        let mut state = StoreState::default();
        dispatch(&mut state, StoreAction::SubscribeNewsletter { email: "not-an-email".to_string() });
        assert_eq!(state.toasts.last().map(|t| t.kind), Some(ToastKind::Error));

        let effects = dispatch(
            &mut state,
            StoreAction::SubscribeNewsletter { email: "lina@example.com".to_string() },
        );
        assert!(effects
            .iter()
            .any(|effect| matches!(effect, StoreEffect::DeliverNewsletter(_))));
        assert_eq!(state.toasts.last().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[test]
    fn hydration_replaces_collections_and_reapplies_aggregates() {
        let mut state = StoreState::default();
        let snapshot = BootSnapshot {
            cart: vec![crate::model::CartLine {
                id: LineId(7),
                name: "Modern Nightstand".to_string(),
                unit_price: 599.0,
                quantity: 3,
                image: String::new(),
            }],
            wishlist: Vec::new(),
            compare: Vec::new(),
            reviews: vec![crate::model::Review {
                id: crate::model::ReviewId(1),
                product_id: ProductId(14),
                author: "Noor".to_string(),
                rating: 5,
                text: "Solid.".to_string(),
                submitted_at_ms: 0,
            }],
            theme: Some(ColorScheme::Dark),
        };

        dispatch(&mut state, StoreAction::HydrateSnapshot(snapshot));
        assert_eq!(state.cart_item_count(), 3);
        assert_eq!(state.theme.resolved(), ColorScheme::Dark);

        // Reviewed products show the mean of their hydrated reviews; everything
        // else keeps the seeded aggregate.
        let reviewed = state.product(ProductId(14)).unwrap();
        assert_eq!((reviewed.rating, reviewed.review_count), (5.0, 1));
        let untouched = state.product(ProductId(9)).unwrap();
        assert_eq!((untouched.rating, untouched.review_count), (4.3, 45));
    }
}
