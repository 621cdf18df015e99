//! `localStorage` adapter for the storefront's persisted collections.
//!
//! Cart, wishlist, compare tray, reviews, and the pinned theme live as raw
//! JSON strings under fixed keys in the page origin. Failures carry the
//! affected key so the runtime can log them and fall back to an empty
//! collection instead of refusing to boot.

use storefront_host::{PrefsStore, PrefsStoreFuture};

#[cfg(target_arch = "wasm32")]
fn page_storage(key: &str) -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| format!("localStorage unavailable while accessing {key:?}"))
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store backed by `window.localStorage`.
///
/// Outside the browser every write is accepted and dropped and every read
/// yields nothing, so native test builds run against an always-empty store.
pub struct WebPrefsStore;

impl WebPrefsStore {
    fn read(self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            page_storage(key)?
                .get_item(key)
                .map_err(|err| format!("reading {key:?} failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            page_storage(key)?
                .set_item(key, raw_json)
                .map_err(|err| format!("writing {key:?} failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    fn erase(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            page_storage(key)?
                .remove_item(key)
                .map_err(|err| format!("removing {key:?} failed: {err:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { store.read(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.write(key, raw_json) })
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.erase(key) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_store_is_empty_and_accepting() {
        let store = WebPrefsStore;
        assert_eq!(block_on(store.load_pref("cart")), Ok(None));
        assert_eq!(block_on(store.save_pref("cart", "[]")), Ok(()));
        assert_eq!(block_on(store.delete_pref("cart")), Ok(()));
        assert_eq!(block_on(store.load_pref("cart")), Ok(None));
    }
}
