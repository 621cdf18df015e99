pub mod catalog;
pub mod components;
pub mod debug;
pub mod dispatch;
pub mod host;
pub mod model;
pub mod persistence;
pub mod pricing;
pub mod reducer;
pub mod runtime_context;

pub use components::StorefrontShell;
pub use dispatch::parse_ui_action;
pub use host::StoreHostContext;
pub use model::*;
pub use persistence::{load_boot_snapshot, BootSnapshot};
pub use pricing::{compute_totals, format_price, validate_coupon, CartTotals, CouponError};
pub use reducer::{reduce_store, StoreAction, StoreEffect, StoreError};
pub use runtime_context::{use_storefront, StoreProvider, StorefrontContext};
