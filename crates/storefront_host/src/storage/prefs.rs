//! Keyed preference storage contracts and baseline adapters.
//!
//! Every persisted storefront collection (cart, wishlist, compare, reviews) and
//! the theme preference go through [`PrefsStore`] as JSON text per key. Corrupt
//! or missing collection values degrade to an empty collection rather than an
//! error; see [`load_collection_with`].

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for keyed preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a key.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Saves a raw JSON string for a key.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;

    /// Deletes a key.
    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for unsupported targets and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_pref<'a>(&'a self, _key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

/// Loads and deserializes a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when the store or JSON deserialization fails.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&raw).map_err(|e| e.to_string())?;
    Ok(Some(value))
}

/// Serializes and saves a typed preference value through a [`PrefsStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_pref(key, &raw).await
}

/// Loads a persisted collection, falling back to an empty one.
///
/// Missing keys, store failures, and corrupt JSON all yield the default
/// collection; the raw error (if any) is returned alongside so callers can log
/// it without changing the degraded-read contract.
pub async fn load_collection_with<S: PrefsStore + ?Sized, T>(
    store: &S,
    key: &str,
) -> (T, Option<String>)
where
    T: DeserializeOwned + Default,
{
    match store.load_pref(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => (value, None),
            Err(err) => (T::default(), Some(format!("parse failed for {key}: {err}"))),
        },
        Ok(None) => (T::default(), None),
        Err(err) => (T::default(), Some(format!("load failed for {key}: {err}"))),
    }
}

/// Serializes and saves a collection under its storage key.
///
/// # Errors
///
/// Returns an error when serialization or store save fails.
pub async fn save_collection_with<S: PrefsStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    save_pref_with(store, key, value).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        name: String,
        quantity: u32,
    }

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(store_obj.save_pref("cart", "[{\"q\":1}]")).expect("save");
        assert_eq!(
            block_on(store_obj.load_pref("cart")).expect("load"),
            Some("[{\"q\":1}]".to_string())
        );
        block_on(store_obj.delete_pref("cart")).expect("delete");
        assert_eq!(block_on(store_obj.load_pref("cart")).expect("load"), None);
    }

    #[test]
    fn collection_round_trip_preserves_value() {
        let store = MemoryPrefsStore::default();
        let lines = vec![Line {
            name: "Sofa".to_string(),
            quantity: 2,
        }];
        block_on(save_collection_with(&store, "cart", &lines)).expect("save collection");

        let (loaded, warning): (Vec<Line>, _) = block_on(load_collection_with(&store, "cart"));
        assert_eq!(loaded, lines);
        assert_eq!(warning, None);
    }

    #[test]
    fn corrupt_collection_falls_back_to_empty_with_warning() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref("cart", "{not json")).expect("save raw");

        let (loaded, warning): (Vec<Line>, _) = block_on(load_collection_with(&store, "cart"));
        assert!(loaded.is_empty());
        assert!(warning.expect("warning").contains("cart"));
    }

    #[test]
    fn missing_collection_is_empty_without_warning() {
        let store = MemoryPrefsStore::default();
        let (loaded, warning): (Vec<Line>, _) = block_on(load_collection_with(&store, "wishlist"));
        assert!(loaded.is_empty());
        assert_eq!(warning, None);
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(block_on(store_obj.load_pref("k")).expect("load"), None);
        block_on(store_obj.save_pref("k", "{}")).expect("save");
        block_on(store_obj.delete_pref("k")).expect("delete");
    }
}
