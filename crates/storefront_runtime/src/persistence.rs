//! Persisted collections and their storage keys.
//!
//! Every collection lives under a fixed key so other tabs (and the storage
//! watcher) can rehydrate by name. Corrupt or missing values degrade to the
//! empty collection with a logged warning, never an error.

use serde::{Deserialize, Serialize};
use storefront_host::{
    load_collection_with, load_pref_with, save_collection_with, save_pref_with, ColorScheme,
    PrefsStore,
};

use crate::model::{CartLine, Product, Review, WishlistEntry};

pub const CART_KEY: &str = "cart";
pub const WISHLIST_KEY: &str = "wishlist";
pub const COMPARE_KEY: &str = "compare";
pub const REVIEWS_KEY: &str = "reviews";
pub const THEME_KEY: &str = "theme";

/// Keys the cross-tab storage watcher listens for.
pub const STORAGE_KEYS: [&str; 5] = [CART_KEY, WISHLIST_KEY, COMPARE_KEY, REVIEWS_KEY, THEME_KEY];

/// Everything restored from storage at boot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BootSnapshot {
    pub cart: Vec<CartLine>,
    pub wishlist: Vec<WishlistEntry>,
    pub compare: Vec<Product>,
    pub reviews: Vec<Review>,
    pub theme: Option<ColorScheme>,
}

async fn load_collection<T>(prefs: &dyn PrefsStore, key: &str) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
{
    let (value, warning) = load_collection_with(prefs, key).await;
    if let Some(warning) = warning {
        leptos::logging::warn!("storage: dropping `{key}`: {warning}");
    }
    value
}

async fn persist_collection<T: Serialize + ?Sized>(prefs: &dyn PrefsStore, key: &str, value: &T) {
    if let Err(err) = save_collection_with(prefs, key, value).await {
        leptos::logging::warn!("storage: failed to persist `{key}`: {err}");
    }
}

/// Loads every persisted collection. Individual failures are logged and fall
/// back per collection rather than failing the whole boot.
pub async fn load_boot_snapshot(prefs: &dyn PrefsStore) -> BootSnapshot {
    BootSnapshot {
        cart: load_collection(prefs, CART_KEY).await,
        wishlist: load_collection(prefs, WISHLIST_KEY).await,
        compare: load_collection(prefs, COMPARE_KEY).await,
        reviews: load_collection(prefs, REVIEWS_KEY).await,
        theme: load_theme(prefs).await,
    }
}

pub async fn load_cart(prefs: &dyn PrefsStore) -> Vec<CartLine> {
    load_collection(prefs, CART_KEY).await
}

pub async fn load_wishlist(prefs: &dyn PrefsStore) -> Vec<WishlistEntry> {
    load_collection(prefs, WISHLIST_KEY).await
}

pub async fn load_compare(prefs: &dyn PrefsStore) -> Vec<Product> {
    load_collection(prefs, COMPARE_KEY).await
}

pub async fn load_reviews(prefs: &dyn PrefsStore) -> Vec<Review> {
    load_collection(prefs, REVIEWS_KEY).await
}

pub async fn load_theme(prefs: &dyn PrefsStore) -> Option<ColorScheme> {
    match load_pref_with(prefs, THEME_KEY).await {
        Ok(value) => value,
        Err(err) => {
            leptos::logging::warn!("storage: dropping `{THEME_KEY}`: {err}");
            None
        }
    }
}

pub async fn persist_cart(prefs: &dyn PrefsStore, cart: &[CartLine]) {
    persist_collection(prefs, CART_KEY, cart).await;
}

pub async fn persist_wishlist(prefs: &dyn PrefsStore, wishlist: &[WishlistEntry]) {
    persist_collection(prefs, WISHLIST_KEY, wishlist).await;
}

pub async fn persist_compare(prefs: &dyn PrefsStore, compare: &[Product]) {
    persist_collection(prefs, COMPARE_KEY, compare).await;
}

pub async fn persist_reviews(prefs: &dyn PrefsStore, reviews: &[Review]) {
    persist_collection(prefs, REVIEWS_KEY, reviews).await;
}

/// Persists the explicit theme choice, or clears the key when the user is
/// following the OS.
pub async fn persist_theme(prefs: &dyn PrefsStore, theme: Option<ColorScheme>) {
    let result = match theme {
        Some(scheme) => save_pref_with(prefs, THEME_KEY, &scheme).await,
        None => prefs.delete_pref(THEME_KEY).await,
    };
    if let Err(err) = result {
        leptos::logging::warn!("storage: failed to persist `{THEME_KEY}`: {err}");
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use storefront_host::MemoryPrefsStore;

    use super::*;
    use crate::model::LineId;

    fn sample_cart() -> Vec<CartLine> {
        vec![CartLine {
            id: LineId(42),
            name: "Wooden Bookcase".to_string(),
            unit_price: 1299.0,
            quantity: 2,
            image: String::new(),
        }]
    }

    #[test]
    fn snapshot_round_trips_through_the_store() {
        let prefs = MemoryPrefsStore::default();
        block_on(async {
            persist_cart(&prefs, &sample_cart()).await;
            persist_theme(&prefs, Some(ColorScheme::Dark)).await;

            let snapshot = load_boot_snapshot(&prefs).await;
            assert_eq!(snapshot.cart, sample_cart());
            assert_eq!(snapshot.theme, Some(ColorScheme::Dark));
            assert!(snapshot.wishlist.is_empty());
        });
    }

    #[test]
    fn corrupt_values_degrade_to_empty() {
        let prefs = MemoryPrefsStore::default();
        block_on(async {
            prefs
                .save_pref(CART_KEY, "{not json")
                .await
                .expect("raw write");
            let snapshot = load_boot_snapshot(&prefs).await;
            assert!(snapshot.cart.is_empty());
        });
    }

    #[test]
    fn clearing_the_theme_deletes_the_key() {
        let prefs = MemoryPrefsStore::default();
        block_on(async {
            persist_theme(&prefs, Some(ColorScheme::Light)).await;
            assert_eq!(load_theme(&prefs).await, Some(ColorScheme::Light));

            persist_theme(&prefs, None).await;
            assert_eq!(load_theme(&prefs).await, None);
        });
    }
}
