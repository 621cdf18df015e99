use serde::{Deserialize, Serialize};
use storefront_host::ColorScheme;

use crate::pricing;

/// Hard cap on concurrent compare entries.
pub const COMPARE_CAPACITY: usize = 4;
/// Toast auto-dismiss delay in milliseconds.
pub const TOAST_DISMISS_MS: u64 = 3000;
/// Simulated order-submission latency in milliseconds.
pub const ORDER_SUBMIT_LATENCY_MS: u64 = 1500;

/// Fallback product image used when a record carries none.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=600";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LivingRoom,
    DiningRoom,
    Seating,
    Bedroom,
    Office,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::LivingRoom,
        Self::DiningRoom,
        Self::Seating,
        Self::Bedroom,
        Self::Office,
        Self::Accessories,
    ];

    /// Stable identifier used in filter controls and dispatch arguments.
    pub const fn id(self) -> &'static str {
        match self {
            Self::LivingRoom => "living-room",
            Self::DiningRoom => "dining-room",
            Self::Seating => "seating",
            Self::Bedroom => "bedroom",
            Self::Office => "office",
            Self::Accessories => "accessories",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::DiningRoom => "Dining Room",
            Self::Seating => "Seating",
            Self::Bedroom => "Bedroom",
            Self::Office => "Office",
            Self::Accessories => "Accessories",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == raw.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub image: String,
    /// Displayed rating, 0–5 in one-decimal steps; recomputed on review submit.
    pub rating: f64,
    pub review_count: u32,
    pub colors: Vec<String>,
    pub material: String,
    pub dimensions: String,
    pub in_stock: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Stable generated identifier; lines are always addressed by id, never by
    /// position.
    pub id: LineId,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub image: String,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub name: String,
    pub price: f64,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub author: String,
    /// Integer rating, 1–5.
    pub rating: u8,
    pub text: String,
    /// Unix milliseconds at submission.
    pub submitted_at_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Default,
    PriceAsc,
    PriceDesc,
    Rating,
    Name,
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        Self::Default,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::Rating,
        Self::Name,
        Self::Newest,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-low",
            Self::PriceDesc => "price-high",
            Self::Rating => "rating",
            Self::Name => "name",
            Self::Newest => "newest",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Featured",
            Self::PriceAsc => "Price: low to high",
            Self::PriceDesc => "Price: high to low",
            Self::Rating => "Top rated",
            Self::Name => "Name",
            Self::Newest => "Newest",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == raw.trim())
    }
}

/// Catalog filter and sort state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// `None` means every category.
    pub category: Option<Category>,
    /// Inclusive price ceiling.
    pub price_ceiling: f64,
    pub min_rating: f64,
    pub colors: Vec<String>,
    pub in_stock_only: bool,
    pub sort: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: None,
            price_ceiling: 10_000.0,
            min_rating: 0.0,
            colors: Vec::new(),
            in_stock_only: false,
            sort: SortKey::Default,
        }
    }
}

impl FilterState {
    /// Number of active (non-default) filter facets, shown on the filter badge.
    pub fn active_count(&self) -> usize {
        usize::from(self.category.is_some())
            + usize::from(self.min_rating > 0.0)
            + self.colors.len()
            + usize::from(self.in_stock_only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Success => "Done",
            Self::Error => "Error",
            Self::Warning => "Heads up",
            Self::Info => "Info",
        }
    }

    pub const fn icon_id(self) -> &'static str {
        match self {
            Self::Success => "check",
            Self::Error => "cross",
            Self::Warning => "exclaim",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Overlay surfaces; at most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Cart,
    Wishlist,
    Search,
    Filters,
    Compare,
    ProductDetails(ProductId),
    Checkout,
}

impl Overlay {
    /// DOM id of the overlay container the focus trap attaches to.
    pub const fn container_dom_id(self) -> &'static str {
        match self {
            Self::Cart => "cart-drawer",
            Self::Wishlist => "wishlist-drawer",
            Self::Search => "search-overlay",
            Self::Filters => "filters-modal",
            Self::Compare => "compare-modal",
            Self::ProductDetails(_) => "product-details-modal",
            Self::Checkout => "checkout-modal",
        }
    }
}

/// Resolved theme plus whether the user pinned it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Explicit user choice, persisted; `None` follows the OS.
    pub explicit: Option<ColorScheme>,
    /// Last observed OS preference.
    pub os_preference: ColorScheme,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            explicit: None,
            os_preference: ColorScheme::Light,
        }
    }
}

impl ThemeState {
    pub fn resolved(&self) -> ColorScheme {
        self.explicit.unwrap_or(self.os_preference)
    }
}

/// Whole-store state owned by the provider and mutated only through the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub catalog: Vec<Product>,
    pub filters: FilterState,
    pub search_query: String,
    pub cart: Vec<CartLine>,
    pub wishlist: Vec<WishlistEntry>,
    pub compare: Vec<Product>,
    pub reviews: Vec<Review>,
    /// Code of the single active coupon, if any.
    pub applied_coupon: Option<String>,
    /// Selected shipping city; `None` falls back to the default tier.
    pub shipping_city: Option<String>,
    pub theme: ThemeState,
    pub open_overlay: Option<Overlay>,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
    /// Latest toast message mirrored into the aria-live announcer.
    pub announcement: Option<String>,
    /// An order submission is in flight (simulated latency).
    pub order_pending: bool,
    /// Verbose transition logging enabled via the `?debug` query flag.
    pub debug: bool,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            catalog: crate::catalog::seed_products(),
            filters: FilterState::default(),
            search_query: String::new(),
            cart: Vec::new(),
            wishlist: Vec::new(),
            compare: Vec::new(),
            reviews: Vec::new(),
            applied_coupon: None,
            shipping_city: None,
            theme: ThemeState::default(),
            open_overlay: None,
            toasts: Vec::new(),
            next_toast_id: 1,
            announcement: None,
            order_pending: false,
            debug: false,
        }
    }
}

impl StoreState {
    /// Fresh session state with the debug flag resolved by the entry layer.
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            ..Self::default()
        }
    }

    pub fn cart_subtotal(&self) -> f64 {
        self.cart.iter().map(CartLine::line_total).sum()
    }

    /// Total unit count across cart lines, shown on the cart badge.
    pub fn cart_item_count(&self) -> u32 {
        self.cart.iter().map(|line| line.quantity).sum()
    }

    pub fn find_line(&self, line_id: LineId) -> Option<&CartLine> {
        self.cart.iter().find(|line| line.id == line_id)
    }

    pub fn wishlist_contains(&self, name: &str) -> bool {
        self.wishlist.iter().any(|entry| entry.name == name)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.iter().find(|product| product.id == id)
    }

    pub fn reviews_for(&self, id: ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.product_id == id)
            .collect()
    }

    /// Totals for the current cart, coupon, and shipping selection.
    pub fn totals(&self) -> pricing::CartTotals {
        pricing::compute_totals(
            self.cart_subtotal(),
            self.applied_coupon
                .as_deref()
                .and_then(pricing::coupon_by_code),
            self.shipping_city.as_deref(),
        )
    }

    /// Allocates the next transient toast id.
    pub(crate) fn next_toast_id(&mut self) -> ToastId {
        let id = ToastId(self.next_toast_id);
        self.next_toast_id = self.next_toast_id.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_and_sort_ids_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.id()), Some(category));
        }
        for sort in SortKey::ALL {
            assert_eq!(SortKey::parse(sort.id()), Some(sort));
        }
        assert_eq!(Category::parse("garage"), None);
        assert_eq!(SortKey::parse("shuffle"), None);
    }

    #[test]
    fn filter_active_count_ignores_defaults() {
        let mut filters = FilterState::default();
        assert_eq!(filters.active_count(), 0);

        filters.category = Some(Category::Office);
        filters.colors.push("Black".to_string());
        filters.colors.push("White".to_string());
        filters.in_stock_only = true;
        assert_eq!(filters.active_count(), 4);
    }

    #[test]
    fn theme_resolution_prefers_explicit_choice() {
        let mut theme = ThemeState::default();
        assert_eq!(theme.resolved(), ColorScheme::Light);

        theme.os_preference = ColorScheme::Dark;
        assert_eq!(theme.resolved(), ColorScheme::Dark);

        theme.explicit = Some(ColorScheme::Light);
        assert_eq!(theme.resolved(), ColorScheme::Light);
    }

    #[test]
    fn cart_helpers_sum_over_lines() {
        let mut state = StoreState::default();
        state.cart = vec![
            CartLine {
                id: LineId(1),
                name: "Sofa".to_string(),
                unit_price: 2799.0,
                quantity: 2,
                image: FALLBACK_IMAGE.to_string(),
            },
            CartLine {
                id: LineId(2),
                name: "Mirror".to_string(),
                unit_price: 499.0,
                quantity: 1,
                image: FALLBACK_IMAGE.to_string(),
            },
        ];

        assert_eq!(state.cart_subtotal(), 2799.0 * 2.0 + 499.0);
        assert_eq!(state.cart_item_count(), 3);
        assert!(state.find_line(LineId(2)).is_some());
        assert!(state.find_line(LineId(3)).is_none());
    }
}
