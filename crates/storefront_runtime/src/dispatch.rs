//! Symbolic UI action names.
//!
//! Controls carry a stable action name (plus an optional argument) instead of
//! wiring bespoke closures everywhere. The names double as hooks for
//! end-to-end tests. Multi-field submissions (checkout, reviews) dispatch
//! structured actions directly from their forms and have no entry here.

use crate::model::{Category, LineId, Overlay, ProductId, SortKey, ToastId};
use crate::reducer::StoreAction;

/// Maps a symbolic action name and optional argument to a [`StoreAction`].
/// Unknown names and malformed arguments return `None` so callers can log and
/// move on.
pub fn parse_ui_action(name: &str, arg: Option<&str>) -> Option<StoreAction> {
    let action = match name {
        "toggle-theme" => StoreAction::ToggleTheme,
        "toggle-cart" => StoreAction::ToggleOverlay(Overlay::Cart),
        "toggle-wishlist" => StoreAction::ToggleOverlay(Overlay::Wishlist),
        "toggle-search" => StoreAction::ToggleOverlay(Overlay::Search),
        "open-compare" => StoreAction::OpenOverlay(Overlay::Compare),
        "open-filters" => StoreAction::OpenOverlay(Overlay::Filters),
        "open-checkout" => StoreAction::OpenOverlay(Overlay::Checkout),
        "open-product" => StoreAction::OpenOverlay(Overlay::ProductDetails(ProductId(
            arg?.trim().parse().ok()?,
        ))),
        "close-overlay" => StoreAction::CloseOverlay,
        "cart-increase" => StoreAction::IncreaseLine {
            line_id: LineId(arg?.trim().parse().ok()?),
        },
        "cart-decrease" => StoreAction::DecreaseLine {
            line_id: LineId(arg?.trim().parse().ok()?),
        },
        "cart-remove" => StoreAction::RemoveLine {
            line_id: LineId(arg?.trim().parse().ok()?),
        },
        "apply-coupon" => StoreAction::ApplyCoupon {
            code: arg?.to_string(),
        },
        "set-city" => StoreAction::SetShippingCity {
            city: arg?.to_string(),
        },
        "wishlist-remove" => StoreAction::RemoveWishlist {
            name: arg?.to_string(),
        },
        "compare-add" => StoreAction::AddToCompare {
            product_id: ProductId(arg?.trim().parse().ok()?),
        },
        "compare-remove" => StoreAction::RemoveFromCompare {
            product_id: ProductId(arg?.trim().parse().ok()?),
        },
        "toast-close" => StoreAction::DismissToast(ToastId(arg?.trim().parse().ok()?)),
        "subscribe-newsletter" => StoreAction::SubscribeNewsletter {
            email: arg?.to_string(),
        },
        "set-search" => StoreAction::SetSearchQuery {
            query: arg.unwrap_or_default().to_string(),
        },
        "toggle-color" => StoreAction::ToggleColor {
            color: arg?.to_string(),
        },
        "set-in-stock" => StoreAction::SetInStockOnly {
            enabled: matches!(arg?.trim(), "1" | "true"),
        },
        "set-price-ceiling" => StoreAction::SetPriceCeiling {
            ceiling: arg?.trim().parse().ok()?,
        },
        "set-min-rating" => StoreAction::SetMinRating {
            rating: arg?.trim().parse().ok()?,
        },
        "reset-filters" => StoreAction::ResetFilters,
        "set-sort" => StoreAction::SetSort {
            sort: SortKey::parse(arg?)?,
        },
        "set-category" => StoreAction::SetCategory {
            category: match arg? {
                "all" => None,
                raw => Some(Category::parse(raw)?),
            },
        },
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_names_map_to_actions() {
        assert_eq!(
            parse_ui_action("toggle-cart", None),
            Some(StoreAction::ToggleOverlay(Overlay::Cart))
        );
        assert_eq!(parse_ui_action("close-overlay", None), Some(StoreAction::CloseOverlay));
        assert_eq!(
            parse_ui_action("set-sort", Some("price-low")),
            Some(StoreAction::SetSort { sort: SortKey::PriceAsc })
        );
        assert_eq!(
            parse_ui_action("set-category", Some("all")),
            Some(StoreAction::SetCategory { category: None })
        );
        assert_eq!(
            parse_ui_action("set-category", Some("office")),
            Some(StoreAction::SetCategory { category: Some(Category::Office) })
        );
    }

    #[test]
    fn argument_actions_parse_their_payloads() {
        assert_eq!(
            parse_ui_action("cart-increase", Some("1755000000001")),
            Some(StoreAction::IncreaseLine { line_id: LineId(1_755_000_000_001) })
        );
        assert_eq!(
            parse_ui_action("apply-coupon", Some("WELCOME20")),
            Some(StoreAction::ApplyCoupon { code: "WELCOME20".to_string() })
        );
        assert_eq!(
            parse_ui_action("compare-add", Some("7")),
            Some(StoreAction::AddToCompare { product_id: ProductId(7) })
        );
        assert_eq!(
            parse_ui_action("set-in-stock", Some("true")),
            Some(StoreAction::SetInStockOnly { enabled: true })
        );
    }

    // Every name the shell components emit through `dispatch_ui`.
    #[test]
    fn shell_control_names_all_map_to_actions() {
        let wired = [
            ("toggle-theme", None),
            ("toggle-search", None),
            ("toggle-wishlist", None),
            ("toggle-cart", None),
            ("open-filters", None),
            ("open-compare", None),
            ("open-checkout", None),
            ("open-product", Some("3")),
            ("close-overlay", None),
            ("cart-increase", Some("1")),
            ("cart-decrease", Some("1")),
            ("cart-remove", Some("1")),
            ("apply-coupon", Some("SAVE100")),
            ("set-city", Some("Jeddah")),
            ("wishlist-remove", Some("Modern Luxe Sofa")),
            ("compare-add", Some("3")),
            ("compare-remove", Some("3")),
            ("toast-close", Some("1")),
            ("subscribe-newsletter", Some("lina@example.com")),
            ("set-search", Some("sofa")),
            ("toggle-color", Some("Gray")),
            ("set-in-stock", Some("1")),
            ("set-price-ceiling", Some("2500")),
            ("set-min-rating", Some("4")),
            ("reset-filters", None),
            ("set-sort", Some("rating")),
            ("set-category", Some("all")),
        ];
        for (name, arg) in wired {
            assert!(parse_ui_action(name, arg).is_some(), "{name} should map to an action");
        }
    }

    #[test]
    fn unknown_names_and_bad_arguments_yield_none() {
        assert_eq!(parse_ui_action("explode", None), None);
        assert_eq!(parse_ui_action("set-sort", None), None);
        assert_eq!(parse_ui_action("set-sort", Some("sideways")), None);
        assert_eq!(parse_ui_action("set-category", Some("garage")), None);
        assert_eq!(parse_ui_action("cart-remove", Some("not-a-number")), None);
    }
}
