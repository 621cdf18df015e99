//! Cross-tab `storage` event subscription.
//!
//! Another tab writing one of the storefront's storage keys fires a `storage`
//! event in this tab; the runtime rehydrates the affected collection from the
//! store (last-write-wins, no merge).

/// Subscription handle for cross-tab storage notifications.
pub struct StorageWatch {
    #[cfg(target_arch = "wasm32")]
    closure: Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>>,
}

impl StorageWatch {
    /// Detaches the underlying `storage` event listener.
    pub fn remove(self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            if let (Some(window), Some(closure)) = (web_sys::window(), self.closure) {
                let _ = window.remove_event_listener_with_callback(
                    "storage",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

/// Subscribes to `storage` events for a fixed set of keys.
///
/// The callback receives the changed key whenever another tab in the same
/// origin writes it. Events for unrelated keys are ignored. On non-WASM
/// targets this returns an inert handle.
pub fn watch_storage_keys(
    keys: &'static [&'static str],
    callback: impl Fn(&'static str) + 'static,
) -> StorageWatch {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return StorageWatch { closure: None };
        };

        let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::wrap(Box::new(
            move |event: web_sys::StorageEvent| {
                let Some(changed) = event.key() else {
                    return;
                };
                if let Some(key) = keys.iter().find(|key| **key == changed) {
                    callback(key);
                }
            },
        ));

        if window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return StorageWatch { closure: None };
        }

        StorageWatch {
            closure: Some(closure),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (keys, callback);
        StorageWatch {}
    }
}
