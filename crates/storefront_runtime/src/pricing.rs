//! Coupons, shipping tiers, and cart totals.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponKind {
    /// Percentage of the subtotal.
    Percent,
    /// Fixed currency amount, clamped to the subtotal.
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coupon {
    pub code: &'static str,
    pub kind: CouponKind,
    pub amount: f64,
    /// Subtotal the cart must reach before the coupon applies.
    pub min_subtotal: f64,
}

pub const COUPONS: [Coupon; 3] = [
    Coupon {
        code: "WELCOME20",
        kind: CouponKind::Percent,
        amount: 20.0,
        min_subtotal: 500.0,
    },
    Coupon {
        code: "SAVE100",
        kind: CouponKind::Fixed,
        amount: 100.0,
        min_subtotal: 1000.0,
    },
    Coupon {
        code: "VIP30",
        kind: CouponKind::Percent,
        amount: 30.0,
        min_subtotal: 2000.0,
    },
];

/// Shipping cost and delivery estimate per city, with a catch-all tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingZone {
    pub city: &'static str,
    pub cost: f64,
    pub delivery_days: &'static str,
}

pub const SHIPPING_ZONES: [ShippingZone; 5] = [
    ShippingZone { city: "Riyadh", cost: 0.0, delivery_days: "1-2" },
    ShippingZone { city: "Jeddah", cost: 30.0, delivery_days: "2-3" },
    ShippingZone { city: "Dammam", cost: 40.0, delivery_days: "2-3" },
    ShippingZone { city: "Mecca", cost: 25.0, delivery_days: "2-3" },
    ShippingZone { city: "Medina", cost: 35.0, delivery_days: "3-4" },
];

/// Tier used when the selected city has no dedicated zone.
pub const DEFAULT_SHIPPING: ShippingZone = ShippingZone {
    city: "Other",
    cost: 50.0,
    delivery_days: "3-5",
};

pub fn coupon_by_code(code: &str) -> Option<Coupon> {
    let wanted = code.trim().to_uppercase();
    COUPONS.into_iter().find(|coupon| coupon.code == wanted)
}

/// Zone for a city name; unknown or missing cities fall back to the default
/// tier.
pub fn shipping_zone(city: Option<&str>) -> ShippingZone {
    city.and_then(|city| {
        SHIPPING_ZONES
            .into_iter()
            .find(|zone| zone.city.eq_ignore_ascii_case(city.trim()))
    })
    .unwrap_or(DEFAULT_SHIPPING)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CouponError {
    #[error("enter a coupon code")]
    EmptyCode,
    #[error("unknown coupon code")]
    UnknownCode,
    #[error("coupon requires a minimum order of {minimum} SAR")]
    MinimumNotMet { minimum: u64 },
}

/// Validates a coupon code against the current subtotal. Validation order is
/// fixed: empty, then unknown, then minimum.
pub fn validate_coupon(code: &str, subtotal: f64) -> Result<Coupon, CouponError> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return Err(CouponError::EmptyCode);
    }
    let coupon = coupon_by_code(trimmed).ok_or(CouponError::UnknownCode)?;
    if subtotal < coupon.min_subtotal {
        return Err(CouponError::MinimumNotMet {
            minimum: coupon.min_subtotal as u64,
        });
    }
    Ok(coupon)
}

/// Discount a coupon yields on a subtotal. Fixed amounts never exceed the
/// subtotal; an unmet minimum yields zero.
pub fn coupon_discount(coupon: Coupon, subtotal: f64) -> f64 {
    if subtotal < coupon.min_subtotal {
        return 0.0;
    }
    match coupon.kind {
        CouponKind::Percent => subtotal * coupon.amount / 100.0,
        CouponKind::Fixed => coupon.amount.min(subtotal),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub discount: f64,
    pub shipping: f64,
    /// Never negative even when a discount outweighs subtotal plus shipping.
    pub grand_total: f64,
}

pub fn compute_totals(subtotal: f64, coupon: Option<Coupon>, city: Option<&str>) -> CartTotals {
    let discount = coupon.map_or(0.0, |coupon| coupon_discount(coupon, subtotal));
    let shipping = if subtotal > 0.0 { shipping_zone(city).cost } else { 0.0 };
    CartTotals {
        subtotal,
        discount,
        shipping,
        grand_total: (subtotal - discount + shipping).max(0.0),
    }
}

/// Renders a price as `1,234.50 SAR`, dropping the fraction when whole.
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if frac == 0 {
        format!("{sign}{grouped} SAR")
    } else {
        format!("{sign}{grouped}.{frac:02} SAR")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn coupon_lookup_is_case_insensitive() {
        assert_eq!(coupon_by_code(" welcome20 ").map(|c| c.code), Some("WELCOME20"));
        assert_eq!(coupon_by_code("NOPE"), None);
    }

    #[test]
    fn validation_order_is_empty_then_unknown_then_minimum() {
        assert_eq!(validate_coupon("  ", 5000.0), Err(CouponError::EmptyCode));
        assert_eq!(validate_coupon("BOGUS", 5000.0), Err(CouponError::UnknownCode));
        assert_eq!(
            validate_coupon("VIP30", 1999.0),
            Err(CouponError::MinimumNotMet { minimum: 2000 })
        );
        assert!(validate_coupon("VIP30", 2000.0).is_ok());
    }

    #[test]
    fn percent_coupon_on_thousand() {
        let coupon = coupon_by_code("WELCOME20").unwrap();
        assert_eq!(coupon_discount(coupon, 1000.0), 200.0);
    }

    #[test]
    fn fixed_coupon_clamps_to_subtotal() {
        let coupon = Coupon {
            code: "TEST",
            kind: CouponKind::Fixed,
            amount: 100.0,
            min_subtotal: 0.0,
        };
        assert_eq!(coupon_discount(coupon, 60.0), 60.0);
    }

    #[test]
    fn shipping_zones_fall_back_to_default() {
        assert_eq!(shipping_zone(Some("Riyadh")).cost, 0.0);
        assert_eq!(shipping_zone(Some("jeddah")).cost, 30.0);
        assert_eq!(shipping_zone(Some("Tabuk")).cost, 50.0);
        assert_eq!(shipping_zone(None).delivery_days, "3-5");
    }

    #[test]
    fn totals_clamp_at_zero_and_skip_shipping_on_empty_cart() {
        let totals = compute_totals(2799.0 * 2.0, coupon_by_code("WELCOME20"), Some("Jeddah"));
        assert_eq!(totals.subtotal, 5598.0);
        assert_eq!(totals.discount, 1119.6);
        assert_eq!(totals.shipping, 30.0);
        assert_eq!(totals.grand_total, 5598.0 - 1119.6 + 30.0);

        let empty = compute_totals(0.0, None, Some("Jeddah"));
        assert_eq!(empty.shipping, 0.0);
        assert_eq!(empty.grand_total, 0.0);
    }

    #[test]
    fn price_formatting_groups_thousands() {
        assert_eq!(format_price(2799.0), "2,799 SAR");
        assert_eq!(format_price(1119.6), "1,119.60 SAR");
        assert_eq!(format_price(0.0), "0 SAR");
        assert_eq!(format_price(1_234_567.0), "1,234,567 SAR");
    }
}
